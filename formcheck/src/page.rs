//! In-memory page implementing [`FormPort`].
//!
//! Models the parts of the contact page the engine touches: inputs, error slots,
//! plain elements such as the main container and submit control, focus, scroll
//! position and success banners. Hosts render from it and tests assert on it.

use std::collections::{HashMap, HashSet};

use crate::banner::{BannerId, SuccessBanner};
use crate::config::FormConfig;
use crate::port::FormPort;

/// Data for a single input element.
#[derive(Debug, Clone, Default)]
struct InputElement {
    value: String,
    /// Accessibility "invalid" flag; `None` until the engine first sets it.
    invalid: Option<bool>,
    multiline: bool,
}

/// Text and visibility of an error slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlot {
    pub text: String,
    pub visible: bool,
}

/// A banner placed inside a container.
#[derive(Debug, Clone)]
struct PlacedBanner {
    container: String,
    banner: SuccessBanner,
}

/// Page state held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    inputs: HashMap<String, InputElement>,
    slots: HashMap<String, ErrorSlot>,
    elements: HashSet<String>,
    /// Banners in document order, first child first.
    banners: Vec<PlacedBanner>,
    focused: Option<String>,
    scrolled_to: Option<BannerId>,
}

impl MemoryPage {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page with every element the config refers to.
    pub fn contact(config: &FormConfig) -> Self {
        let mut page = Self::new()
            .with_element(&config.container_id)
            .with_element(&config.submit_id);
        for spec in &config.fields {
            page = page
                .with_input(spec.id, spec.multiline)
                .with_error_slot(spec.error_slot);
        }
        page
    }

    /// Add an input element.
    pub fn with_input(mut self, id: &str, multiline: bool) -> Self {
        self.inputs.insert(
            id.to_string(),
            InputElement {
                multiline,
                ..Default::default()
            },
        );
        self
    }

    /// Add an (initially hidden) error slot.
    pub fn with_error_slot(mut self, id: &str) -> Self {
        self.slots.insert(id.to_string(), ErrorSlot::default());
        self
    }

    /// Add a plain element such as a container or button.
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(id.to_string());
        self
    }

    /// Remove any element with this identifier.
    pub fn without(mut self, id: &str) -> Self {
        self.inputs.remove(id);
        self.slots.remove(id);
        self.elements.remove(id);
        if self.focused.as_deref() == Some(id) {
            self.focused = None;
        }
        self
    }

    /// Check if an input exists.
    pub fn has_input(&self, id: &str) -> bool {
        self.inputs.contains_key(id)
    }

    /// Check if an input accepts line breaks.
    pub fn is_multiline(&self, id: &str) -> bool {
        self.inputs.get(id).is_some_and(|input| input.multiline)
    }

    /// Get the text of an input, or `""` if it is missing.
    pub fn value(&self, id: &str) -> &str {
        self.inputs
            .get(id)
            .map(|input| input.value.as_str())
            .unwrap_or("")
    }

    /// Replace the text of an input as the user would, without raising events.
    pub fn set_value(&mut self, id: &str, text: impl Into<String>) {
        if let Some(input) = self.inputs.get_mut(id) {
            input.value = text.into();
        }
    }

    /// Append a character to an input.
    /// Returns true if the text changed.
    pub fn insert_char(&mut self, id: &str, c: char) -> bool {
        match self.inputs.get_mut(id) {
            Some(input) => {
                input.value.push(c);
                true
            }
            None => false,
        }
    }

    /// Delete the last character of an input.
    /// Returns true if the text changed.
    pub fn backspace(&mut self, id: &str) -> bool {
        self.inputs
            .get_mut(id)
            .and_then(|input| input.value.pop())
            .is_some()
    }

    /// Visible error text of a slot, if any.
    pub fn error(&self, slot: &str) -> Option<&str> {
        self.slots
            .get(slot)
            .filter(|s| s.visible && !s.text.is_empty())
            .map(|s| s.text.as_str())
    }

    /// Full state of an error slot.
    pub fn error_slot(&self, slot: &str) -> Option<&ErrorSlot> {
        self.slots.get(slot)
    }

    /// The "invalid" flag of an input, if it has been set.
    pub fn aria_invalid(&self, id: &str) -> Option<bool> {
        self.inputs.get(id).and_then(|input| input.invalid)
    }

    /// Currently focused element.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// All banners on the page, first child first.
    pub fn banners(&self) -> Vec<&SuccessBanner> {
        self.banners.iter().map(|placed| &placed.banner).collect()
    }

    /// The topmost banner, if any.
    pub fn banner(&self) -> Option<&SuccessBanner> {
        self.banners.first().map(|placed| &placed.banner)
    }

    /// Container a banner was inserted into.
    pub fn banner_container(&self, id: BannerId) -> Option<&str> {
        self.banners
            .iter()
            .find(|placed| placed.banner.id == id)
            .map(|placed| placed.container.as_str())
    }

    /// Banner most recently scrolled into view.
    pub fn scrolled_to(&self) -> Option<BannerId> {
        self.scrolled_to
    }
}

impl FormPort for MemoryPage {
    fn has_element(&self, id: &str) -> bool {
        self.inputs.contains_key(id) || self.slots.contains_key(id) || self.elements.contains(id)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        self.inputs.get(field).map(|input| input.value.clone())
    }

    fn set_field_value(&mut self, field: &str, value: &str) {
        self.set_value(field, value);
    }

    fn show_error(&mut self, slot: &str, message: &str) {
        if let Some(s) = self.slots.get_mut(slot) {
            s.text = message.to_string();
            s.visible = true;
        }
    }

    fn clear_error(&mut self, slot: &str) {
        if let Some(s) = self.slots.get_mut(slot) {
            s.text.clear();
            s.visible = false;
        }
    }

    fn set_invalid(&mut self, field: &str, invalid: bool) {
        if let Some(input) = self.inputs.get_mut(field) {
            input.invalid = Some(invalid);
        }
    }

    fn is_invalid(&self, field: &str) -> bool {
        self.aria_invalid(field) == Some(true)
    }

    fn focus(&mut self, id: &str) {
        if self.inputs.contains_key(id) || self.elements.contains(id) {
            self.focused = Some(id.to_string());
        }
    }

    fn find_banner(&self, marker: &str) -> Option<BannerId> {
        self.banners
            .iter()
            .find(|placed| placed.banner.marker == marker)
            .map(|placed| placed.banner.id)
    }

    fn insert_banner(&mut self, container: &str, banner: SuccessBanner) {
        if !self.elements.contains(container) {
            return;
        }
        self.banners.insert(
            0,
            PlacedBanner {
                container: container.to_string(),
                banner,
            },
        );
    }

    fn remove_banner(&mut self, id: BannerId) -> bool {
        let before = self.banners.len();
        self.banners.retain(|placed| placed.banner.id != id);
        self.banners.len() != before
    }

    fn scroll_into_view(&mut self, id: BannerId) {
        if self.banners.iter().any(|placed| placed.banner.id == id) {
            self.scrolled_to = Some(id);
        }
    }
}
