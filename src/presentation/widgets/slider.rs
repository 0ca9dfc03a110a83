//! Horizontal slider widget.

use std::ops::RangeInclusive;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Stepped numeric value with a caption, rendered as a two-line bar.
#[derive(Debug, Clone)]
pub struct Slider {
    label: String,
    min: f64,
    max: f64,
    step: f64,
    precision: usize,
    value: f64,
    focused: bool,
    accent: Color,
    focused_style: Style,
    base_style: Style,
}

impl Slider {
    /// Creates a slider positioned at the range start.
    #[must_use]
    pub fn new(label: impl Into<String>, range: RangeInclusive<f64>, step: f64) -> Self {
        let (min, max) = range.into_inner();
        Self {
            label: label.into(),
            min,
            max,
            step,
            precision: 0,
            value: min,
            focused: false,
            accent: Color::Cyan,
            focused_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            base_style: Style::default().fg(Color::Gray),
        }
    }

    /// Decimal places shown and kept when snapping.
    #[must_use]
    pub const fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Takes the track color and label styles from `theme`.
    #[must_use]
    pub const fn theme(mut self, theme: &Theme) -> Self {
        self.accent = theme.accent;
        self.focused_style = theme.focused_style;
        self.base_style = theme.base_style;
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Clamps `value` into range and snaps it to the step grid.
    pub fn set_value(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        let snapped = ((value - self.min) / self.step).round() * self.step + self.min;
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let scale = 10f64.powi(self.precision as i32);
        self.value = ((snapped * scale).round() / scale).clamp(self.min, self.max);
    }

    /// Moves one step up. Returns whether the value changed.
    pub fn increase(&mut self) -> bool {
        self.nudge(self.step)
    }

    /// Moves one step down. Returns whether the value changed.
    pub fn decrease(&mut self) -> bool {
        self.nudge(-self.step)
    }

    fn nudge(&mut self, delta: f64) -> bool {
        let before = self.value;
        self.set_value(before + delta);
        (self.value - before).abs() > f64::EPSILON
    }

    /// Position within the range, `0.0..=1.0`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn formatted_value(&self) -> String {
        format!("{:.*}", self.precision, self.value)
    }
}

impl Widget for &Slider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let label_style = if self.focused {
            self.focused_style
        } else {
            self.base_style
        };
        let marker = if self.focused { "› " } else { "  " };
        Paragraph::new(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(self.label.as_str(), label_style),
        ]))
        .render(Rect::new(area.x, area.y, area.width, 1), buf);

        if area.height < 2 {
            return;
        }

        let value_text = format!(" {}", self.formatted_value());
        let value_width = u16::try_from(value_text.len()).unwrap_or(u16::MAX);
        let track_width = area.width.saturating_sub(value_width + 2);

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let filled = (self.ratio() * f64::from(track_width)).round() as usize;
        let empty = usize::from(track_width).saturating_sub(filled);

        let track = Line::from(vec![
            Span::raw("  "),
            Span::styled("━".repeat(filled), Style::default().fg(self.accent)),
            Span::styled("─".repeat(empty), Style::default().fg(Color::DarkGray)),
            Span::styled(value_text, label_style),
        ]);
        Paragraph::new(track).render(Rect::new(area.x, area.y + 1, area.width, 1), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_slider() -> Slider {
        Slider::new("Digits", 2.0..=10.0, 1.0).with_value(6.0)
    }

    fn time_slider() -> Slider {
        Slider::new("Time", 0.1..=2.0, 0.1).precision(1).with_value(0.5)
    }

    #[test]
    fn test_steps_and_clamps() {
        let mut slider = digits_slider();
        assert!(slider.increase());
        assert!((slider.value() - 7.0).abs() < f64::EPSILON);

        slider.set_value(10.0);
        assert!(!slider.increase());
        assert!((slider.value() - 10.0).abs() < f64::EPSILON);

        slider.set_value(-3.0);
        assert!((slider.value() - 2.0).abs() < f64::EPSILON);
        assert!(!slider.decrease());
    }

    #[test]
    fn test_fractional_steps_do_not_drift() {
        let mut slider = time_slider();
        for _ in 0..3 {
            slider.increase();
        }
        assert!((slider.value() - 0.8).abs() < 1e-9);
        assert_eq!(slider.formatted_value(), "0.8");

        for _ in 0..50 {
            slider.decrease();
        }
        assert!((slider.value() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_ratio() {
        let mut slider = digits_slider();
        slider.set_value(2.0);
        assert!(slider.ratio().abs() < f64::EPSILON);
        slider.set_value(10.0);
        assert!((slider.ratio() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_value_ignored() {
        let mut slider = digits_slider();
        slider.set_value(f64::NAN);
        assert!((slider.value() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_focused_label_uses_theme_style() {
        let theme = Theme::new("Magenta");
        let mut slider = digits_slider().theme(&theme);
        let area = Rect::new(0, 0, 30, 2);

        let mut buf = Buffer::empty(area);
        (&slider).render(area, &mut buf);
        assert_eq!(buf[(2u16, 0u16)].fg, Color::Reset);

        slider.set_focused(true);
        let mut buf = Buffer::empty(area);
        (&slider).render(area, &mut buf);
        assert_eq!(buf[(2u16, 0u16)].fg, Color::Magenta);
        assert!(buf[(2u16, 0u16)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_render_shows_label_and_value() {
        let slider = digits_slider();
        let area = Rect::new(0, 0, 30, 2);
        let mut buf = Buffer::empty(area);

        (&slider).render(area, &mut buf);

        let first: String = (0..30u16).map(|x| buf[(x, 0u16)].symbol().to_string()).collect();
        let second: String = (0..30u16).map(|x| buf[(x, 1u16)].symbol().to_string()).collect();
        assert!(first.contains("Digits"));
        assert!(second.trim_end().ends_with('6'));
    }
}
