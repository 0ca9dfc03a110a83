//! The single game screen: feedback, sliders, target and guess field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
};

use crate::application::RoundView;
use crate::domain::entities::{
    DIGIT_COUNT_RANGE, MatchState, REVEAL_SECONDS_RANGE, REVEAL_STEP_SECONDS, RoundConfig,
};
use crate::domain::keybinding::{Action, Keybind};
use crate::domain::ports::RoundEvent;
use crate::infrastructure::config::UiConfig;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    FeedbackLabel, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, Slider, TargetDisplay,
    TextInput,
};
use crate::{NAME, VERSION};

const CONTENT_MAX_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingFocus {
    DigitCount,
    RevealTime,
}

impl SettingFocus {
    const fn toggle(self) -> Self {
        match self {
            Self::DigitCount => Self::RevealTime,
            Self::RevealTime => Self::DigitCount,
        }
    }
}

/// What the app should do after a key press on the game screen.
#[derive(Debug, Clone, PartialEq)]
pub enum GameKeyResult {
    Quit,
    GuessChanged(String),
    ConfigChanged(RoundConfig),
    Consumed,
    Ignored,
}

pub struct GameScreenState {
    digit_slider: Slider,
    reveal_slider: Slider,
    focus: SettingFocus,
    guess_input: TextInput,
    correct: FeedbackLabel,
    incorrect: FeedbackLabel,
    registry: CommandRegistry,
    theme: Theme,
}

impl GameScreenState {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(initial: RoundConfig, ui: &UiConfig) -> Self {
        let theme = Theme::new(&ui.accent_color);

        let mut digit_slider = Slider::new(
            "Number of digits 2-10",
            *DIGIT_COUNT_RANGE.start() as f64..=*DIGIT_COUNT_RANGE.end() as f64,
            1.0,
        )
        .theme(&theme)
        .with_value(initial.digit_count() as f64);
        digit_slider.set_focused(true);

        let reveal_slider = Slider::new(
            "Display time: 0.1 to 2 seconds",
            REVEAL_SECONDS_RANGE,
            REVEAL_STEP_SECONDS,
        )
        .precision(1)
        .theme(&theme)
        .with_value(initial.reveal().as_secs_f64());

        let mut guess_input = TextInput::new(" Enter: ").placeholder("type the number");
        guess_input.set_focused(true);

        let fade = ui.feedback_fade();
        Self {
            digit_slider,
            reveal_slider,
            focus: SettingFocus::DigitCount,
            guess_input,
            correct: FeedbackLabel::new("Correct", theme.correct, fade, ui.enable_animations),
            incorrect: FeedbackLabel::new("Incorrect", theme.incorrect, fade, ui.enable_animations),
            registry: CommandRegistry::new(),
            theme,
        }
    }

    /// Settings currently selected on the sliders.
    #[must_use]
    pub fn round_config(&self) -> RoundConfig {
        RoundConfig::from_sliders(self.digit_slider.value(), self.reveal_slider.value())
    }

    #[must_use]
    pub const fn focus(&self) -> SettingFocus {
        self.focus
    }

    #[must_use]
    pub fn guess(&self) -> &str {
        self.guess_input.value()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.correct.is_visible() || self.incorrect.is_visible()
    }

    pub fn tick(&mut self, duration: std::time::Duration) {
        self.correct.tick(duration);
        self.incorrect.tick(duration);
    }

    /// Reacts to a controller notification.
    pub fn apply_event(&mut self, event: &RoundEvent) {
        match event {
            RoundEvent::Started { .. } => self.guess_input.clear(),
            RoundEvent::Guessed {
                state: MatchState::Match,
                ..
            } => {
                self.incorrect.hide();
                self.correct.show();
            }
            RoundEvent::Guessed {
                state: MatchState::Mismatch,
                ..
            } => {
                self.correct.hide();
                self.incorrect.show();
            }
            RoundEvent::Guessed {
                state: MatchState::Pending,
                ..
            }
            | RoundEvent::Hidden { .. }
            | RoundEvent::Cleared { .. } => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> GameKeyResult {
        if let Some(action) = self.registry.find_action(key) {
            return self.handle_action(action);
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.guess_input.input_char(c);
                GameKeyResult::GuessChanged(self.guess_input.value().to_string())
            }
            _ => GameKeyResult::Ignored,
        }
    }

    fn handle_action(&mut self, action: Action) -> GameKeyResult {
        match action {
            Action::Quit => GameKeyResult::Quit,
            Action::PreviousSetting | Action::NextSetting => {
                self.set_focus(self.focus.toggle());
                GameKeyResult::Consumed
            }
            Action::Decrease | Action::Increase => {
                let slider = self.focused_slider_mut();
                let changed = if action == Action::Increase {
                    slider.increase()
                } else {
                    slider.decrease()
                };
                if changed {
                    GameKeyResult::ConfigChanged(self.round_config())
                } else {
                    GameKeyResult::Consumed
                }
            }
            Action::DeleteDigit => {
                if self.guess_input.backspace() {
                    GameKeyResult::GuessChanged(self.guess_input.value().to_string())
                } else {
                    GameKeyResult::Consumed
                }
            }
            Action::ClearGuess => {
                self.guess_input.clear();
                GameKeyResult::GuessChanged(String::new())
            }
        }
    }

    fn set_focus(&mut self, focus: SettingFocus) {
        self.focus = focus;
        self.digit_slider
            .set_focused(focus == SettingFocus::DigitCount);
        self.reveal_slider
            .set_focused(focus == SettingFocus::RevealTime);
    }

    fn focused_slider_mut(&mut self) -> &mut Slider {
        match self.focus {
            SettingFocus::DigitCount => &mut self.digit_slider,
            SettingFocus::RevealTime => &mut self.reveal_slider,
        }
    }
}

impl HasCommands for GameScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        [
            (Action::Quit, "Quit"),
            (Action::NextSetting, "Setting"),
            (Action::Decrease, "Less"),
            (Action::Increase, "More"),
            (Action::ClearGuess, "Clear"),
        ]
        .into_iter()
        .filter_map(|(action, label)| {
            registry
                .get(action)
                .map(|key| Keybind::new(key, action, label))
        })
        .collect()
    }
}

pub struct GameScreen<'a> {
    view: RoundView<'a>,
}

impl<'a> GameScreen<'a> {
    #[must_use]
    pub const fn new(view: RoundView<'a>) -> Self {
        Self { view }
    }
}

impl StatefulWidget for GameScreen<'_> {
    type State = GameScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let main_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(14),
            Constraint::Length(1),
        ]);
        let [header_area, content_area, footer_area] = main_layout.areas(area);

        HeaderBar::new(NAME, VERSION)
            .phase(self.view.phase)
            .style(HeaderBarStyle::from_theme(&state.theme))
            .render(header_area, buf);

        render_content(&self.view, state, content_area, buf);
        render_footer(&self.view, state, footer_area, buf);
    }
}

fn render_content(view: &RoundView<'_>, state: &mut GameScreenState, area: Rect, buf: &mut Buffer) {
    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(CONTENT_MAX_WIDTH),
        Constraint::Fill(1),
    ]);
    let [_, column, _] = horizontal.areas(area);

    let [
        correct_area,
        incorrect_area,
        _,
        digits_area,
        reveal_area,
        _,
        target_area,
        input_area,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(column);

    (&mut state.correct).render(correct_area, buf);
    (&mut state.incorrect).render(incorrect_area, buf);
    (&state.digit_slider).render(digits_area, buf);
    (&state.reveal_slider).render(reveal_area, buf);
    TargetDisplay::new(view.visible_target(), &state.theme).render(target_area, buf);
    (&state.guess_input).render(input_area, buf);
}

fn render_footer(view: &RoundView<'_>, state: &GameScreenState, area: Rect, buf: &mut Buffer) {
    let keybindings = state.get_commands(&state.registry);
    let right_info = view.round.map(|round| format!("round {round}"));

    FooterBar::new(&keybindings)
        .right_info(right_info.as_deref())
        .style(FooterBarStyle::from_theme(&state.theme))
        .render(area, buf);
}
