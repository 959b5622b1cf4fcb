//! The UI port: everything the engine needs from the page it runs on.

use crate::banner::{BannerId, SuccessBanner};

/// Access to page state for the validation engine.
///
/// The engine never holds page elements itself. It reads field text and writes
/// error text, "invalid" flags, focus and the success banner through this trait,
/// addressing elements by their identifiers. Writes to missing elements are no-ops.
pub trait FormPort {
    /// Check whether an element with this identifier exists.
    fn has_element(&self, id: &str) -> bool;

    /// Current text of an input, or `None` if the field is missing.
    fn field_value(&self, field: &str) -> Option<String>;

    /// Replace the text of an input.
    fn set_field_value(&mut self, field: &str, value: &str);

    /// Write a message into an error slot and make it visible.
    fn show_error(&mut self, slot: &str, message: &str);

    /// Empty an error slot and hide it.
    fn clear_error(&mut self, slot: &str);

    /// Set the accessibility "invalid" flag of an input.
    fn set_invalid(&mut self, field: &str, invalid: bool);

    /// Check whether an input is currently flagged invalid.
    fn is_invalid(&self, field: &str) -> bool;

    /// Move keyboard focus to an element.
    fn focus(&mut self, id: &str);

    /// Find the banner carrying the given marker, if one is on the page.
    fn find_banner(&self, marker: &str) -> Option<BannerId>;

    /// Insert a banner as the first child of a container.
    fn insert_banner(&mut self, container: &str, banner: SuccessBanner);

    /// Remove a banner. Returns false if it was no longer on the page.
    fn remove_banner(&mut self, id: BannerId) -> bool;

    /// Smoothly scroll a banner into the centre of the view.
    fn scroll_into_view(&mut self, id: BannerId);
}
