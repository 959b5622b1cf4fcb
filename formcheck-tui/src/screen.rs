//! Lays out the contact page as styled terminal lines.

use unicode_width::UnicodeWidthChar;

use crate::app::App;

/// How a line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Muted,
    Label,
    Value,
    FocusedValue,
    Error,
    Success,
    Button,
    FocusedButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", LineStyle::Muted)
    }
}

/// Build the lines for one frame, each fitted to `width` columns.
pub fn lines(app: &App, width: usize) -> Vec<Line> {
    let form = app.form();
    let page = form.port();
    let config = form.config();
    let mut out = Vec::new();

    out.push(Line::new("Contact us", LineStyle::Title));
    out.push(Line::new(
        format!("Time: {}", app.clock().millis()),
        LineStyle::Muted,
    ));

    if let Some(banner) = page.banner() {
        out.push(Line::new(banner.message.clone(), LineStyle::Success));
    }
    out.push(Line::blank());

    for spec in &config.fields {
        let focused = page.focused() == Some(spec.id);
        out.push(Line::new(capitalize(spec.label), LineStyle::Label));

        let style = if focused {
            LineStyle::FocusedValue
        } else {
            LineStyle::Value
        };
        let prefix = if focused { "> " } else { "  " };
        let cursor = if focused { "_" } else { "" };
        let value = format!("{}{}", page.value(spec.id), cursor);
        for (i, row) in value.split('\n').enumerate() {
            let lead = if i == 0 { prefix } else { "  " };
            out.push(Line::new(format!("{}{}", lead, row), style));
        }

        if let Some(message) = page.error(spec.error_slot) {
            out.push(Line::new(format!("  {}", message), LineStyle::Error));
        }
        out.push(Line::blank());
    }

    let submit_style = if page.focused() == Some(config.submit_id.as_str()) {
        LineStyle::FocusedButton
    } else {
        LineStyle::Button
    };
    out.push(Line::new("[ Send message ]", submit_style));
    out.push(Line::blank());
    out.push(Line::new(
        "Tab/Shift+Tab: move  Enter: send  Esc: quit",
        LineStyle::Muted,
    ));

    for line in &mut out {
        line.text = fit(&line.text, width);
    }
    out
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate text to at most `width` display columns.
fn fit(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}
