//! Terminal host: maps key presses to page edits and form events.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use formcheck::prelude::*;
use log::{debug, error, info};

use crate::clock::Clock;

pub struct App {
    form: ContactForm<MemoryPage>,
    clock: Clock,
    quit: bool,
}

impl App {
    pub fn new(config: FormConfig) -> Self {
        let page = MemoryPage::contact(&config);
        let mut form = ContactForm::new(page, config);
        // The terminal is not drawn yet; attach once the first frame is up.
        if let Err(e) = form.start(ReadyState::Loading) {
            error!("Failed to start form: {}", e);
        }
        Self {
            form,
            clock: Clock::new(),
            quit: false,
        }
    }

    pub fn form(&self) -> &ContactForm<MemoryPage> {
        &self.form
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Signal that the page content is ready and put focus on the first field.
    pub fn content_loaded(&mut self) {
        let now = Instant::now();
        if self.form.handle(&FormEvent::ContentLoaded, now).is_handled() {
            info!("Form ready");
        }
        if let Some(first) = self.focus_order().first().cloned() {
            self.form.port_mut().focus(&first);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.form.next_deadline()
    }

    pub fn tick(&mut self, now: Instant) {
        self.form.tick(now);
    }

    pub fn tick_clock(&mut self) {
        self.clock.tick();
    }

    pub fn handle_key(&mut self, event: KeyEvent, now: Instant) {
        // Only process key press events (not release/repeat on some terminals)
        if event.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        if event.code == KeyCode::Esc || (ctrl && event.code == KeyCode::Char('c')) {
            info!("Quit requested");
            self.quit = true;
            return;
        }
        if ctrl {
            return;
        }

        let key: Key = event.code.into();
        match key {
            Key::Tab => self.move_focus(1),
            Key::BackTab => self.move_focus(-1),
            _ => {
                if let Some(target) = self.form.port().focused().map(str::to_string) {
                    self.key_on(target, key, now);
                }
            }
        }
    }

    /// Fields in page order, then the submit control.
    fn focus_order(&self) -> Vec<String> {
        let config = self.form.config();
        config
            .fields
            .iter()
            .map(|spec| spec.id.to_string())
            .chain(std::iter::once(config.submit_id.clone()))
            .collect()
    }

    fn move_focus(&mut self, delta: isize) {
        let order = self.focus_order();
        let current = self
            .form
            .port()
            .focused()
            .and_then(|id| order.iter().position(|o| o == id));

        let next = match current {
            Some(i) => (i as isize + delta).rem_euclid(order.len() as isize) as usize,
            None => 0,
        };

        if let Some(old) = current.map(|i| order[i].clone()) {
            self.form.handle(&FormEvent::blur(old), Instant::now());
        }
        debug!("Focus -> {}", order[next]);
        self.form.port_mut().focus(&order[next]);
    }

    fn key_on(&mut self, target: String, key: Key, now: Instant) {
        if target == self.form.config().submit_id {
            if matches!(key, Key::Enter | Key::Char(' ')) {
                self.form.handle(&FormEvent::click(target), now);
            }
            return;
        }

        if self.form.handle(&FormEvent::key(&target, key), now).is_handled() {
            return;
        }

        let page = self.form.port_mut();
        let changed = match key {
            Key::Enter if page.is_multiline(&target) => page.insert_char(&target, '\n'),
            Key::Char(c) => page.insert_char(&target, c),
            Key::Backspace => page.backspace(&target),
            _ => false,
        };
        if changed {
            self.form.handle(&FormEvent::input(target), now);
        }
    }
}
