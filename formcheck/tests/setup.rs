//! Tests for attaching the form to its page.

use std::time::Instant;

use formcheck::prelude::*;

fn contact_page() -> MemoryPage {
    MemoryPage::contact(&FormConfig::default())
}

#[test]
fn test_start_when_ready_attaches_immediately() {
    let mut form = ContactForm::new(contact_page(), FormConfig::default());
    assert_eq!(form.lifecycle(), &Lifecycle::Detached);

    form.start(ReadyState::Complete).unwrap();

    assert!(form.is_attached());
}

#[test]
fn test_detached_form_ignores_events() {
    let mut form = ContactForm::new(contact_page(), FormConfig::default());

    let outcome = form.handle(&FormEvent::blur("fullname"), Instant::now());

    assert_eq!(outcome, EventOutcome::Ignored);
    assert_eq!(form.port().error("error-name"), None);
}

#[test]
fn test_start_while_loading_defers_until_content_loaded() {
    let mut form = ContactForm::new(contact_page(), FormConfig::default());
    let now = Instant::now();

    form.start(ReadyState::Loading).unwrap();
    assert_eq!(form.lifecycle(), &Lifecycle::AwaitingContent);
    assert_eq!(
        form.handle(&FormEvent::click("test-contact-submit"), now),
        EventOutcome::Ignored
    );
    assert_eq!(form.port().error("error-name"), None);

    assert_eq!(
        form.handle(&FormEvent::ContentLoaded, now),
        EventOutcome::Handled
    );
    assert!(form.is_attached());

    form.handle(&FormEvent::click("test-contact-submit"), now);
    assert_eq!(form.port().error("error-name"), Some("Full name is required"));
}

#[test]
fn test_content_loaded_without_deferral_is_a_no_op() {
    let mut form = ContactForm::new(contact_page(), FormConfig::default());

    form.content_loaded().unwrap();

    assert_eq!(form.lifecycle(), &Lifecycle::Detached);
}

#[test]
fn test_missing_container_fails_gracefully() {
    let page = contact_page().without("main");
    let mut form = ContactForm::new(page, FormConfig::default());

    let err = form.start(ReadyState::Complete).unwrap_err();

    assert_eq!(err, SetupError::MissingContainer("main".to_string()));
    assert_eq!(form.lifecycle(), &Lifecycle::Failed(err));
    assert_eq!(
        form.handle(&FormEvent::click("test-contact-submit"), Instant::now()),
        EventOutcome::Ignored
    );
}

#[test]
fn test_missing_submit_fails_gracefully() {
    let page = contact_page().without("test-contact-submit");
    let mut form = ContactForm::new(page, FormConfig::default());

    let err = form.start(ReadyState::Interactive).unwrap_err();

    assert_eq!(
        err,
        SetupError::MissingSubmit("test-contact-submit".to_string())
    );
    assert!(err.to_string().contains("Form elements not found"));
    assert!(!form.is_attached());

    form.port_mut().set_value("fullname", "A");
    form.handle(&FormEvent::blur("fullname"), Instant::now());
    assert_eq!(form.port().error("error-name"), None);
}

#[test]
fn test_missing_field_gets_no_listeners() {
    let page = contact_page().without("subject");
    let mut form = ContactForm::new(page, FormConfig::default());
    let now = Instant::now();

    form.start(ReadyState::Complete).unwrap();

    assert_eq!(
        form.handle(&FormEvent::blur("subject"), now),
        EventOutcome::Ignored
    );
    // Submit still validates it, as an empty value.
    form.handle(&FormEvent::click("test-contact-submit"), now);
    assert_eq!(form.port().error("error-subject"), Some("Subject is required"));
}

#[test]
fn test_custom_identifiers() {
    let config = FormConfig::new().container("content").submit("send");
    let mut form = ContactForm::new(MemoryPage::contact(&config), config);

    form.start(ReadyState::Complete).unwrap();

    assert_eq!(
        form.handle(&FormEvent::click("test-contact-submit"), Instant::now()),
        EventOutcome::Ignored
    );
    assert_eq!(
        form.handle(&FormEvent::click("send"), Instant::now()),
        EventOutcome::Handled
    );
}

#[test]
fn test_attach_twice_keeps_single_attachment() {
    let mut form = ContactForm::new(contact_page(), FormConfig::default());

    form.attach().unwrap();
    form.attach().unwrap();

    assert!(form.is_attached());
}
