//! Event listener registration.
//!
//! One `NotesPage` per document, shared by every listener through an
//! `Rc<RefCell<_>>`. Listeners live as long as the page, so their closures are
//! leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use noteguard_core::{
    ClickTarget, Disposition, EditField, FormKind, FormValues, NotesPage, UnloadDecision,
};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{BeforeUnloadEvent, Document, Event, EventTarget, Node, Window};

use crate::dom::{create_values, link_target, PageElements};
use crate::error::WebError;
use crate::host::BrowserHost;

struct Runtime {
    page: RefCell<NotesPage>,
    host: BrowserHost,
    elements: PageElements,
}

impl Runtime {
    /// Run `f` against the page unless another handler is still holding it.
    fn with_page<R>(
        &self,
        f: impl FnOnce(&mut NotesPage, &mut BrowserHost) -> R,
    ) -> Option<R> {
        let Ok(mut page) = self.page.try_borrow_mut() else {
            tracing::warn!("Dropping re-entrant page event");
            return None;
        };
        let mut host = self.host.clone();
        Some(f(&mut page, &mut host))
    }
}

/// Attach now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn install() -> Result<(), WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    if document.ready_state() != "loading" {
        return attach(&window, &document);
    }

    let ready_window = window.clone();
    let ready_document = document.clone();
    let on_ready = Closure::once(move |_: Event| {
        if let Err(error) = attach(&ready_window, &ready_document) {
            tracing::error!("Failed to attach page controllers: {}", error);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn attach(window: &Window, document: &Document) -> Result<(), WebError> {
    let elements = PageElements::discover(document);
    let config = elements.config();
    let page = NotesPage::attach(&elements.layout(), &config);

    let runtime = Rc::new(Runtime {
        page: RefCell::new(page),
        host: BrowserHost::new(window.clone(), elements.modal.clone()),
        elements,
    });

    bind_deletion(window, &runtime)?;
    bind_forms(&runtime)?;
    bind_dirty_tracking(window, &runtime)?;
    Ok(())
}

fn bind_deletion(window: &Window, runtime: &Rc<Runtime>) -> Result<(), WebError> {
    let elements = &runtime.elements;
    if elements.delete_links.is_empty() {
        return Ok(());
    }

    for link in &elements.delete_links {
        let rt = Rc::clone(runtime);
        let target = link.clone();
        listen(link, "click", move |event| {
            let url = link_target(&target);
            let disposition = rt
                .with_page(|page, host| page.on_delete_trigger(&url, host))
                .unwrap_or(Disposition::Prevented);
            if disposition.is_prevented() {
                event.prevent_default();
            }
        })?;
    }

    if let Some(confirm) = &elements.confirm_button {
        let rt = Rc::clone(runtime);
        listen(confirm, "click", move |_| {
            rt.with_page(|page, host| page.on_confirm(host));
        })?;
    }

    if let Some(cancel) = &elements.cancel_button {
        let rt = Rc::clone(runtime);
        listen(cancel, "click", move |_| {
            rt.with_page(|page, host| page.on_cancel(host));
        })?;
    }

    if let Some(modal) = &elements.modal {
        let rt = Rc::clone(runtime);
        let modal: Node = modal.clone().into();
        listen(window, "click", move |event| {
            let on_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|target| modal.is_same_node(Some(&target)));
            let target = if on_backdrop {
                ClickTarget::ModalBackdrop
            } else {
                ClickTarget::Elsewhere
            };
            rt.with_page(|page, host| page.on_window_click(target, host));
        })?;
    }

    Ok(())
}

fn bind_forms(runtime: &Rc<Runtime>) -> Result<(), WebError> {
    if let Some(form) = &runtime.elements.create_form {
        let rt = Rc::clone(runtime);
        let form_ref = form.clone();
        listen(form, "submit", move |event| {
            let Some(values) = create_values(&form_ref) else {
                tracing::warn!("Add form is missing its title or content field");
                return;
            };
            submit(&rt, FormKind::Create, &values, &event);
        })?;
    }

    if let Some(form) = &runtime.elements.edit_form {
        let rt = Rc::clone(runtime);
        listen(form, "submit", move |event| {
            let Some(values) = rt.elements.edit_values() else {
                tracing::warn!("Edit form is missing its title or content field");
                return;
            };
            submit(&rt, FormKind::Edit, &values, &event);
        })?;
    }

    Ok(())
}

fn submit(runtime: &Runtime, kind: FormKind, values: &FormValues, event: &Event) {
    let disposition = runtime
        .with_page(|page, host| page.on_submit(kind, values, host))
        .unwrap_or(Disposition::Proceed);
    if disposition.is_prevented() {
        event.prevent_default();
    }
}

fn bind_dirty_tracking(window: &Window, runtime: &Rc<Runtime>) -> Result<(), WebError> {
    let elements = &runtime.elements;
    let (Some(title), Some(content)) = (&elements.edit_title, &elements.edit_content) else {
        return Ok(());
    };

    for (field, element) in [(EditField::Title, title), (EditField::Content, content)] {
        let rt = Rc::clone(runtime);
        listen(element, "input", move |_| {
            if let Some(values) = rt.elements.edit_values() {
                rt.with_page(|page, _| page.on_input(field, &values));
            }
        })?;
    }

    let rt = Rc::clone(runtime);
    listen(window, "beforeunload", move |event| {
        // Borrowed means we are inside a handler that is navigating right now.
        let Ok(page) = rt.page.try_borrow() else {
            return;
        };
        if let UnloadDecision::Prompt(message) = page.on_before_unload() {
            event.prevent_default();
            if let Some(unload) = event.dyn_ref::<BeforeUnloadEvent>() {
                unload.set_return_value(&message);
            }
        }
    })?;

    Ok(())
}

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
