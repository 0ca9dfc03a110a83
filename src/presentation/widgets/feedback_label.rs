//! Result label that appears on a verdict and fades out.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

/// Shortest time a shown label stays on screen, whatever the configured fade.
const MIN_VISIBLE: Duration = Duration::from_millis(100);

/// "Correct" or "Incorrect" indicator.
pub struct FeedbackLabel {
    text: &'static str,
    color: Color,
    fade: Duration,
    animate: bool,
    remaining: Duration,
    effect: Option<Effect>,
    pending_duration: Duration,
}

impl FeedbackLabel {
    #[must_use]
    pub fn new(text: &'static str, color: Color, fade: Duration, animate: bool) -> Self {
        Self {
            text,
            color,
            fade: fade.max(MIN_VISIBLE),
            animate,
            remaining: Duration::ZERO,
            effect: None,
            pending_duration: Duration::ZERO,
        }
    }

    /// Shows the label at full strength and restarts its fade.
    pub fn show(&mut self) {
        self.remaining = self.fade;
        self.pending_duration = Duration::ZERO;
        self.effect = self.animate.then(|| {
            let millis = u32::try_from(self.fade.as_millis()).unwrap_or(u32::MAX);
            fx::dissolve((millis, Interpolation::CircIn))
        });
    }

    /// Hides the label immediately.
    pub fn hide(&mut self) {
        self.remaining = Duration::ZERO;
        self.effect = None;
    }

    pub fn tick(&mut self, duration: Duration) {
        if !self.is_visible() {
            return;
        }
        self.pending_duration = self.pending_duration.saturating_add(duration);
        self.remaining = self.remaining.saturating_sub(duration);
        if self.remaining.is_zero() {
            self.effect = None;
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.remaining.is_zero()
    }
}

impl Widget for &mut FeedbackLabel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if !self.is_visible() {
            return;
        }

        let style = Style::default()
            .fg(self.color)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(self.text).centered())
            .style(style)
            .render(area, buf);

        if let Some(effect) = self.effect.as_mut() {
            effect.process(duration.into(), buf, area);
        }
    }
}
