use crate::application::Phase;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

trait PhaseExt {
    fn display_text(self) -> &'static str;
    fn indicator(self) -> &'static str;
}

impl PhaseExt for Phase {
    fn display_text(self) -> &'static str {
        match self {
            Self::Idle => "WAITING",
            Self::Revealed => "MEMORIZE",
            Self::Hidden => "RECALL",
            Self::Evaluating => "CHECKING",
        }
    }

    fn indicator(self) -> &'static str {
        match self {
            Self::Revealed => "●",
            Self::Evaluating => "◐",
            Self::Idle | Self::Hidden => "○",
        }
    }
}

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub phase_revealed: Style,
    pub phase_hidden: Style,
    pub phase_evaluating: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            phase_revealed: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            phase_revealed: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            phase_hidden: Style::default().fg(Color::Gray),
            phase_evaluating: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    phase: Phase,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            phase: Phase::default(),
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    const fn phase_style(&self) -> Style {
        match self.phase {
            Phase::Revealed => self.style.phase_revealed,
            Phase::Evaluating => self.style.phase_evaluating,
            Phase::Idle | Phase::Hidden => self.style.phase_hidden,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn build_phase_spans(&self) -> (Vec<Span<'static>>, u16) {
        let text = format!(
            " {} {} ",
            self.phase.indicator(),
            self.phase.display_text()
        );
        let width = text.chars().count() as u16;
        (vec![Span::styled(text, self.phase_style())], width)
    }
}

impl Widget for HeaderBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let left_spans = vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
            Span::styled(format!(" v{} ", self.version), self.style.version),
        ];

        // " APP " (len+2) + " " (1) + " vVER " (len+3)
        let left_width = (self.app_name.len() + 2 + 1 + self.version.len() + 3) as u16;
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(Line::from(left_spans)).render(left_area, buf);

        let (phase_spans, phase_width) = self.build_phase_spans();

        if phase_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(phase_width);
            let right_area = Rect::new(right_x, area.y, phase_width, 1);
            Paragraph::new(Line::from(phase_spans)).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Revealed.display_text(), "MEMORIZE");
        assert_eq!(Phase::Hidden.display_text(), "RECALL");
        assert_eq!(Phase::Evaluating.display_text(), "CHECKING");
    }

    #[test]
    fn test_phase_indicator() {
        assert_eq!(Phase::Revealed.indicator(), "●");
        assert_eq!(Phase::Hidden.indicator(), "○");
    }

    #[test]
    fn test_header_bar_creation() {
        let header = HeaderBar::new("fember", "0.0.1").phase(Phase::Hidden);

        assert_eq!(header.app_name, "fember");
        assert_eq!(header.version, "0.0.1");
        assert_eq!(header.phase, Phase::Hidden);
    }
}
