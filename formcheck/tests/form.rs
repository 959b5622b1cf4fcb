//! Tests for the form controller: events, submit and banner timing.

use std::time::{Duration, Instant};

use formcheck::prelude::*;

fn attached_form() -> ContactForm<MemoryPage> {
    let config = FormConfig::default();
    let mut form = ContactForm::new(MemoryPage::contact(&config), config);
    form.start(ReadyState::Complete).unwrap();
    form
}

fn fill_valid(form: &mut ContactForm<MemoryPage>) {
    let page = form.port_mut();
    page.set_value("fullname", "Ada Lovelace");
    page.set_value("email", "ada@example.com");
    page.set_value("subject", "Engines");
    page.set_value("message", "Notes on the analytical engine.");
}

const SLOTS: [&str; 4] = ["error-name", "error-email", "error-subject", "error-message"];
const FIELDS: [&str; 4] = ["fullname", "email", "subject", "message"];

// ============================================================================
// Blur / input
// ============================================================================

#[test]
fn test_fields_start_untouched() {
    let form = attached_form();
    for id in FIELDS {
        assert_eq!(form.field_state(id), FieldState::Untouched);
    }
}

#[test]
fn test_blur_validates_field() {
    let mut form = attached_form();
    let now = Instant::now();

    form.port_mut().set_value("fullname", "A");
    let outcome = form.handle(&FormEvent::blur("fullname"), now);

    assert_eq!(outcome, EventOutcome::Handled);
    assert_eq!(form.field_state("fullname"), FieldState::Invalid);
    assert_eq!(
        form.port().error("error-name"),
        Some("Name must be at least 2 characters")
    );

    form.port_mut().set_value("fullname", "Al");
    form.handle(&FormEvent::blur("fullname"), now);

    assert_eq!(form.field_state("fullname"), FieldState::Valid);
    assert_eq!(form.port().error("error-name"), None);
    // Other fields are untouched by a blur elsewhere.
    assert_eq!(form.field_state("email"), FieldState::Untouched);
    assert_eq!(form.port().error("error-email"), None);
}

#[test]
fn test_input_hides_error_without_revalidating() {
    let mut form = attached_form();
    let now = Instant::now();

    form.handle(&FormEvent::blur("email"), now);
    assert_eq!(form.port().error("error-email"), Some("Email is required"));

    form.port_mut().insert_char("email", 'a');
    let outcome = form.handle(&FormEvent::input("email"), now);

    assert_eq!(outcome, EventOutcome::Handled);
    assert_eq!(form.port().error("error-email"), None);
    assert_eq!(form.field_state("email"), FieldState::Invalid);
    assert_eq!(form.port().aria_invalid("email"), Some(true));
}

#[test]
fn test_events_on_unknown_targets_are_ignored() {
    let mut form = attached_form();
    let now = Instant::now();

    assert_eq!(
        form.handle(&FormEvent::blur("elsewhere"), now),
        EventOutcome::Ignored
    );
    assert_eq!(
        form.handle(&FormEvent::click("fullname"), now),
        EventOutcome::Ignored
    );
    assert_eq!(
        form.handle(&FormEvent::key("fullname", Key::Char('x')), now),
        EventOutcome::Ignored
    );
    assert_eq!(form.port().error("error-name"), None);
}

// ============================================================================
// Enter key
// ============================================================================

#[test]
fn test_enter_in_single_line_field_submits() {
    let mut form = attached_form();
    fill_valid(&mut form);

    let outcome = form.handle(&FormEvent::key("subject", Key::Enter), Instant::now());

    assert_eq!(outcome, EventOutcome::Handled);
    assert!(form.port().banner().is_some());
    assert_eq!(form.port().value("subject"), "");
}

#[test]
fn test_enter_in_message_is_left_to_the_page() {
    let mut form = attached_form();
    fill_valid(&mut form);

    let outcome = form.handle(&FormEvent::key("message", Key::Enter), Instant::now());

    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(form.port().banner().is_none());
    assert_eq!(form.port().value("subject"), "Engines");
}

#[test]
fn test_enter_matches_submit_click_on_failure() {
    let mut by_enter = attached_form();
    let mut by_click = attached_form();
    let now = Instant::now();

    by_enter.handle(&FormEvent::key("email", Key::Enter), now);
    by_click.handle(&FormEvent::click("test-contact-submit"), now);

    assert_eq!(by_enter.port().focused(), by_click.port().focused());
    for slot in SLOTS {
        assert_eq!(by_enter.port().error(slot), by_click.port().error(slot));
    }
}

// ============================================================================
// Submit
// ============================================================================

#[test]
fn test_successful_submit_end_to_end() {
    let mut form = attached_form();
    fill_valid(&mut form);
    let now = Instant::now();

    let outcome = form.handle(&FormEvent::click("test-contact-submit"), now);
    assert_eq!(outcome, EventOutcome::Handled);

    let page = form.port();
    let banner = page.banner().expect("banner shown");
    assert_eq!(banner.marker, "test-contact-success");
    assert_eq!(
        banner.message,
        "✓ Message sent successfully! We'll get back to you soon."
    );
    assert_eq!(banner.role, "status");
    assert_eq!(banner.aria_live, "polite");
    assert_eq!(banner.class, "success-message");
    assert_eq!(page.banner_container(banner.id), Some("main"));
    assert_eq!(page.scrolled_to(), Some(banner.id));

    for id in FIELDS {
        assert_eq!(page.value(id), "");
        assert_eq!(form.field_state(id), FieldState::Untouched);
    }
    for slot in SLOTS {
        assert_eq!(page.error(slot), None);
    }

    assert_eq!(form.next_deadline(), Some(now + Duration::from_millis(1000)));
    assert!(!form.tick(now + Duration::from_millis(999)));
    assert!(form.port().banner().is_some());

    assert!(form.tick(now + Duration::from_millis(1000)));
    assert!(form.port().banner().is_none());
    assert_eq!(form.next_deadline(), None);
}

#[test]
fn test_submit_with_blank_email_focuses_email() {
    let mut form = attached_form();
    fill_valid(&mut form);
    form.port_mut().set_value("email", "   ");

    let outcome = form.submit(Instant::now());

    match outcome {
        SubmitOutcome::Rejected { focused, errors } => {
            assert_eq!(focused, Some("email"));
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message, "Email is required");
        }
        other => panic!("expected rejection, got {:?}", other),
    }

    let page = form.port();
    assert_eq!(page.focused(), Some("email"));
    assert_eq!(page.error("error-email"), Some("Email is required"));
    assert_eq!(page.value("fullname"), "Ada Lovelace");
    assert_eq!(page.value("message"), "Notes on the analytical engine.");
    assert!(page.banner().is_none());
    assert_eq!(form.next_deadline(), None);
    assert_eq!(form.field_state("email"), FieldState::Invalid);
    assert_eq!(form.field_state("fullname"), FieldState::Valid);
}

#[test]
fn test_failed_submit_shows_every_error_and_focuses_first() {
    let mut form = attached_form();
    form.port_mut().set_value("subject", "Engines");

    let outcome = form.submit(Instant::now());

    assert!(!outcome.is_sent());
    assert_eq!(form.port().focused(), Some("fullname"));
    assert_eq!(form.port().error("error-name"), Some("Full name is required"));
    assert_eq!(form.port().error("error-email"), Some("Email is required"));
    assert_eq!(form.port().error("error-subject"), None);
    assert_eq!(form.port().error("error-message"), Some("Message is required"));
}

#[test]
fn test_resubmit_replaces_banner_and_its_removal() {
    let mut form = attached_form();
    let start = Instant::now();

    fill_valid(&mut form);
    let first = match form.submit(start) {
        SubmitOutcome::Sent { banner } => banner,
        other => panic!("expected success, got {:?}", other),
    };

    let later = start + Duration::from_millis(600);
    fill_valid(&mut form);
    let second = match form.submit(later) {
        SubmitOutcome::Sent { banner } => banner,
        other => panic!("expected success, got {:?}", other),
    };

    assert_ne!(first, second);
    assert_eq!(form.port().banners().len(), 1);
    assert_eq!(form.port().banner().map(|b| b.id), Some(second));

    // The first banner's deadline no longer removes anything.
    assert!(!form.tick(start + Duration::from_millis(1000)));
    assert_eq!(form.port().banner().map(|b| b.id), Some(second));

    assert!(form.tick(later + Duration::from_millis(1000)));
    assert!(form.port().banners().is_empty());
}

#[test]
fn test_custom_banner_delay_and_message() {
    let config = FormConfig::default()
        .banner_delay(Duration::from_millis(250))
        .banner_message("Thanks!");
    let mut form = ContactForm::new(MemoryPage::contact(&config), config);
    form.start(ReadyState::Interactive).unwrap();
    fill_valid(&mut form);
    let now = Instant::now();

    assert!(form.submit(now).is_sent());

    assert_eq!(form.port().banner().map(|b| b.message.as_str()), Some("Thanks!"));
    assert_eq!(form.next_deadline(), Some(now + Duration::from_millis(250)));
}

#[test]
fn test_tick_without_pending_removal() {
    let mut form = attached_form();
    assert!(!form.tick(Instant::now()));
}

#[test]
fn test_custom_banner_marker_replaces_marked_banner() {
    let config = FormConfig::default().banner_marker("contact-ok");
    let mut form = ContactForm::new(MemoryPage::contact(&config), config);
    form.start(ReadyState::Complete).unwrap();
    let now = Instant::now();

    fill_valid(&mut form);
    form.submit(now);
    fill_valid(&mut form);
    let second = match form.submit(now) {
        SubmitOutcome::Sent { banner } => banner,
        other => panic!("expected success, got {:?}", other),
    };

    let page = form.port();
    assert_eq!(page.banners().len(), 1);
    assert_eq!(page.banner().map(|b| b.marker.as_str()), Some("contact-ok"));
    assert_eq!(page.find_banner("contact-ok"), Some(second));
    assert_eq!(page.find_banner("test-contact-success"), None);
}

#[test]
fn test_page_keeps_flags_after_form_is_dropped() {
    let mut form = attached_form();
    fill_valid(&mut form);
    form.port_mut().set_value("email", "");
    form.submit(Instant::now());

    assert_eq!(form.validator().fields().len(), 4);
    let validator = form.validator().clone();
    let page = form.into_port();

    assert_eq!(validator.first_flagged(&page).map(|f| f.id), Some("email"));
    assert_eq!(page.error("error-email"), Some("Email is required"));
}
