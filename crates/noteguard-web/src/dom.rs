//! Element lookup for the notes page markup.

use noteguard_core::{FormValues, GuardConfig, PageLayout};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
};

use crate::render_data::{
    config_from_payload, snapshot_from_payload, CONFIG_SCRIPT_ID, SNAPSHOT_SCRIPT_ID,
};

pub const MODAL_ID: &str = "confirmModal";
pub const CONFIRM_BUTTON_ID: &str = "confirmDelete";
pub const CANCEL_BUTTON_ID: &str = "cancelDelete";
pub const DELETE_LINK_SELECTOR: &str = ".delete-link";

pub const CREATE_FORM_ID: &str = "addNoteForm";
pub const CREATE_TITLE_SELECTOR: &str = r#"input[name="title"]"#;
pub const CREATE_CONTENT_SELECTOR: &str = r#"textarea[name="content"]"#;

pub const EDIT_FORM_ID: &str = "editNoteForm";
pub const EDIT_TITLE_ID: &str = "editTitle";
pub const EDIT_CONTENT_ID: &str = "editContent";

/// Handles to every element the controllers care about. Absent elements stay
/// `None`; nothing here is required.
#[derive(Debug, Clone)]
pub struct PageElements {
    pub modal: Option<HtmlElement>,
    pub confirm_button: Option<Element>,
    pub cancel_button: Option<Element>,
    pub delete_links: Vec<Element>,
    pub create_form: Option<Element>,
    pub edit_form: Option<Element>,
    pub edit_title: Option<Element>,
    pub edit_content: Option<Element>,
    snapshot_payload: Option<String>,
    config_payload: Option<String>,
}

impl PageElements {
    pub fn discover(document: &Document) -> Self {
        Self {
            modal: document
                .get_element_by_id(MODAL_ID)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok()),
            confirm_button: document.get_element_by_id(CONFIRM_BUTTON_ID),
            cancel_button: document.get_element_by_id(CANCEL_BUTTON_ID),
            delete_links: query_all(document, DELETE_LINK_SELECTOR),
            create_form: document.get_element_by_id(CREATE_FORM_ID),
            edit_form: document.get_element_by_id(EDIT_FORM_ID),
            edit_title: document.get_element_by_id(EDIT_TITLE_ID),
            edit_content: document.get_element_by_id(EDIT_CONTENT_ID),
            snapshot_payload: script_text(document, SNAPSHOT_SCRIPT_ID),
            config_payload: script_text(document, CONFIG_SCRIPT_ID),
        }
    }

    pub fn layout(&self) -> PageLayout {
        PageLayout {
            delete_triggers: self.delete_links.len(),
            has_create_form: self.create_form.is_some(),
            has_edit_form: self.edit_form.is_some(),
            edit_fields: self.edit_values(),
            snapshot: snapshot_from_payload(self.snapshot_payload.as_deref()),
        }
    }

    pub fn config(&self) -> GuardConfig {
        config_from_payload(self.config_payload.as_deref())
    }

    /// Current edit field values, or `None` unless both fields exist.
    pub fn edit_values(&self) -> Option<FormValues> {
        let title = field_value(self.edit_title.as_ref()?)?;
        let content = field_value(self.edit_content.as_ref()?)?;
        Some(FormValues::new(title, content))
    }
}

/// Current values of the "add note" form's fields.
pub fn create_values(form: &Element) -> Option<FormValues> {
    let title = form.query_selector(CREATE_TITLE_SELECTOR).ok().flatten()?;
    let content = form.query_selector(CREATE_CONTENT_SELECTOR).ok().flatten()?;
    Some(FormValues::new(field_value(&title)?, field_value(&content)?))
}

/// Resolved target of a deletion trigger.
pub fn link_target(element: &Element) -> String {
    element
        .dyn_ref::<HtmlAnchorElement>()
        .map(HtmlAnchorElement::href)
        .or_else(|| element.get_attribute("href"))
        .unwrap_or_default()
}

fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        tracing::warn!("Invalid selector {}", selector);
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn script_text(document: &Document, id: &str) -> Option<String> {
    document.get_element_by_id(id)?.text_content()
}
