//! End-to-end event sequences against a fully populated page.

use noteguard_core::{
    parse_guard_config, ClickTarget, DeletionIntent, Disposition, EditField, FormKind,
    FormSnapshot, FormValues, GuardConfig, ModalState, NotesPage, PageHost, PageLayout,
    UnloadDecision, ValidationError,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Default)]
struct FakePage {
    navigations: Vec<String>,
    notices: Vec<String>,
    modal_visible: bool,
}

impl PageHost for FakePage {
    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }
}

fn index_page() -> NotesPage {
    let layout = PageLayout {
        delete_triggers: 3,
        has_create_form: true,
        ..PageLayout::default()
    };
    NotesPage::attach(&layout, &GuardConfig::default())
}

fn edit_page(config: &GuardConfig) -> NotesPage {
    let layout = PageLayout {
        has_edit_form: true,
        edit_fields: Some(FormValues::new("Hello", "World")),
        snapshot: Some(FormSnapshot::new("Hello", "World")),
        ..PageLayout::default()
    };
    NotesPage::attach(&layout, config)
}

fn pending_url(page: &NotesPage) -> Option<&str> {
    page.modal()
        .and_then(|modal| modal.pending())
        .map(DeletionIntent::url)
}

#[test]
fn confirm_deletes_exactly_the_clicked_note() {
    let mut page = index_page();
    let mut host = FakePage::default();

    let disposition = page.on_delete_trigger("http://notes.local/delete/42", &mut host);
    assert_eq!(disposition, Disposition::Prevented);
    assert_eq!(pending_url(&page), Some("http://notes.local/delete/42"));
    assert!(host.modal_visible);

    // The click that opened the modal also bubbles to the window.
    page.on_window_click(ClickTarget::Elsewhere, &mut host);
    assert!(host.modal_visible);

    let navigated = page.on_confirm(&mut host);
    assert_eq!(navigated.as_deref(), Some("http://notes.local/delete/42"));
    assert_eq!(host.navigations, vec!["http://notes.local/delete/42"]);
}

#[test]
fn second_trigger_replaces_first() {
    let mut page = index_page();
    let mut host = FakePage::default();

    page.on_delete_trigger("/delete/1", &mut host);
    page.on_delete_trigger("/delete/2", &mut host);
    assert_eq!(pending_url(&page), Some("/delete/2"));

    page.on_confirm(&mut host);
    assert_eq!(host.navigations, vec!["/delete/2"]);
}

#[test]
fn blank_trigger_drops_earlier_deletion() {
    let mut page = index_page();
    let mut host = FakePage::default();

    page.on_delete_trigger("/delete/1", &mut host);
    assert_eq!(page.on_delete_trigger("", &mut host), Disposition::Prevented);
    assert_eq!(pending_url(&page), None);
    assert!(!host.modal_visible);

    assert_eq!(page.on_confirm(&mut host), None);
    assert!(host.navigations.is_empty());
}

#[test]
fn cancel_and_backdrop_click_never_navigate() {
    let mut page = index_page();
    let mut host = FakePage::default();

    page.on_delete_trigger("/delete/1", &mut host);
    page.on_cancel(&mut host);
    assert_eq!(pending_url(&page), None);
    assert!(!host.modal_visible);

    page.on_delete_trigger("/delete/1", &mut host);
    page.on_window_click(ClickTarget::ModalBackdrop, &mut host);
    assert_eq!(pending_url(&page), None);
    assert!(!host.modal_visible);

    assert_eq!(page.on_confirm(&mut host), None);
    assert!(host.navigations.is_empty());
}

#[test]
fn repeated_cancel_is_idempotent() {
    let mut page = index_page();
    let mut host = FakePage::default();

    for id in 0..3 {
        page.on_delete_trigger(&format!("/delete/{id}"), &mut host);
        page.on_cancel(&mut host);
        page.on_cancel(&mut host);
        assert_eq!(page.modal().map(|modal| modal.state()), Some(ModalState::Hidden));
        assert_eq!(pending_url(&page), None);
        assert!(!host.modal_visible);
    }
    assert!(host.navigations.is_empty());
}

#[test]
fn create_form_rejects_empty_fields() {
    let mut page = index_page();
    let gate = page.gate(FormKind::Create).unwrap();
    assert_eq!(
        gate.evaluate(&FormValues::new("   ", "content")),
        Err(ValidationError::EmptyField)
    );
    assert_eq!(
        gate.evaluate(&FormValues::new("title", "")),
        Err(ValidationError::EmptyField)
    );

    let mut host = FakePage::default();
    let disposition = page.on_submit(FormKind::Create, &FormValues::new("", ""), &mut host);
    assert_eq!(disposition, Disposition::Prevented);
    assert_eq!(host.notices, vec!["Please fill in all fields!"]);
    assert!(host.navigations.is_empty());
}

#[test]
fn create_form_title_boundary() {
    let mut page = index_page();
    let mut host = FakePage::default();

    let too_long = FormValues::new("x".repeat(101), "content");
    assert_eq!(
        page.gate(FormKind::Create).unwrap().evaluate(&too_long),
        Err(ValidationError::TitleTooLong {
            chars: 101,
            max: 100
        })
    );
    assert_eq!(
        page.on_submit(FormKind::Create, &too_long, &mut host),
        Disposition::Prevented
    );

    let at_limit = FormValues::new("x".repeat(100), "content");
    assert_eq!(
        page.on_submit(FormKind::Create, &at_limit, &mut host),
        Disposition::Proceed
    );
    assert_eq!(host.notices.len(), 1);
}

#[test]
fn edit_form_rejects_whitespace_only_change() {
    let mut page = edit_page(&GuardConfig::default());
    let mut host = FakePage::default();

    let padded = FormValues::new(" Hello ", "World");
    assert_eq!(
        page.gate(FormKind::Edit).unwrap().evaluate(&padded),
        Err(ValidationError::NoChangesDetected)
    );
    assert_eq!(
        page.on_submit(FormKind::Edit, &padded, &mut host),
        Disposition::Prevented
    );
    assert_eq!(host.notices, vec!["You have not made any changes!"]);
}

#[test]
fn edit_form_allows_trimming_a_padded_saved_title() {
    let layout = PageLayout {
        has_edit_form: true,
        edit_fields: Some(FormValues::new("Hello ", "World")),
        snapshot: Some(FormSnapshot::new("Hello ", "World")),
        ..PageLayout::default()
    };
    let mut page = NotesPage::attach(&layout, &GuardConfig::default());
    let mut host = FakePage::default();

    assert_eq!(
        page.on_submit(FormKind::Edit, &FormValues::new("Hello", "World"), &mut host),
        Disposition::Proceed
    );
    assert!(host.notices.is_empty());
}

#[test]
fn dirty_guard_lifecycle() {
    let mut page = edit_page(&GuardConfig::default());
    let mut host = FakePage::default();
    assert_eq!(page.on_before_unload(), UnloadDecision::Leave);

    let edited = FormValues::new("Hello again", "World");
    page.on_input(EditField::Title, &edited);
    assert!(page.tracker().unwrap().is_dirty());
    assert!(page.on_before_unload().is_prompt());

    assert_eq!(
        page.on_submit(FormKind::Edit, &edited, &mut host),
        Disposition::Proceed
    );
    assert!(!page.tracker().unwrap().is_dirty());
    assert_eq!(page.on_before_unload(), UnloadDecision::Leave);
}

#[test]
fn blocked_edit_submission_keeps_guard_armed() {
    let mut page = edit_page(&GuardConfig::default());
    let mut host = FakePage::default();

    let emptied = FormValues::new("", "World");
    page.on_input(EditField::Title, &emptied);
    assert_eq!(
        page.on_submit(FormKind::Edit, &emptied, &mut host),
        Disposition::Prevented
    );

    assert!(page.tracker().unwrap().is_dirty());
    assert!(page.on_before_unload().is_prompt());
}

#[test]
fn touched_then_reverted_form_still_prompts() {
    let mut page = edit_page(&GuardConfig::default());

    page.on_input(EditField::Content, &FormValues::new("Hello", "World!"));
    page.on_input(EditField::Content, &FormValues::new("Hello", "World"));

    assert!(page.on_before_unload().is_prompt());
}

#[test]
fn value_diff_policy_from_config() {
    let config = parse_guard_config(
        r#"{"dirty_policy":"value_diff","messages":{"unsaved_changes":"Leave without saving?"}}"#,
    )
    .unwrap();
    let mut page = edit_page(&config);

    page.on_input(EditField::Content, &FormValues::new("Hello", "World!"));
    assert_eq!(
        page.on_before_unload(),
        UnloadDecision::Prompt("Leave without saving?".to_string())
    );

    page.on_input(EditField::Content, &FormValues::new("Hello", "World"));
    assert_eq!(page.on_before_unload(), UnloadDecision::Leave);
}
