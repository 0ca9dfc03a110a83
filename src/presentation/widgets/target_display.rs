//! The number to remember.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Draws the target digits while revealed and an empty frame once hidden.
pub struct TargetDisplay<'a> {
    digits: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> TargetDisplay<'a> {
    #[must_use]
    pub const fn new(digits: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { digits, theme }
    }

    fn spaced(digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() * 2);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}

impl Widget for TargetDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.dimmed_style)
            .title(" Remember ");
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(digits) = self.digits else {
            return;
        };

        let style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(Self::spaced(digits)).centered())
            .style(style)
            .render(inner, buf);
    }
}
