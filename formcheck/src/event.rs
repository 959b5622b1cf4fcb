/// Page events the form reacts to, targeted by element identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Element lost focus
    Blur { target: String },
    /// Element's text changed
    Input { target: String },
    /// Key pressed inside an element
    Key { target: String, key: Key },
    /// Element was clicked
    Click { target: String },
    /// The page finished loading its content
    ContentLoaded,
}

impl FormEvent {
    pub fn blur(target: impl Into<String>) -> Self {
        Self::Blur {
            target: target.into(),
        }
    }

    pub fn input(target: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
        }
    }

    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: target.into(),
            key,
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    BackTab,
    Escape,
    Other,
}

/// What the form did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The form handled the event; the host must skip its default action.
    Handled,
    /// The form did not handle the event; the host should apply its default action.
    Ignored,
}

impl EventOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }
    }
}
