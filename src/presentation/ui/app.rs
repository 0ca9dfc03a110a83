//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::info;

use crate::application::RoundController;
use crate::domain::ports::{DigitSource, RoundEvent, TimerEvent};
use crate::infrastructure::AppConfig;
use crate::infrastructure::runtime::{ChannelEventSink, TokioTimerScheduler};
use crate::presentation::events::{EventResult, key_press};
use crate::presentation::ui::{GameKeyResult, GameScreen, GameScreenState};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    controller: RoundController,
    screen: GameScreenState,
    timer_rx: mpsc::UnboundedReceiver<TimerEvent>,
    round_rx: mpsc::UnboundedReceiver<RoundEvent>,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig, digits: Box<dyn DigitSource>) -> Self {
        let (timers, timer_rx) = TokioTimerScheduler::new();
        let (sink, round_rx) = ChannelEventSink::new();
        let round_config = config.game.round_config();

        let controller =
            RoundController::new(round_config, digits, Arc::new(timers), Arc::new(sink))
                .with_result_delay(config.game.result_delay());

        Self {
            state: AppState::Running,
            controller,
            screen: GameScreenState::new(round_config, &config.ui),
            timer_rx,
            round_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start();
        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    fn start(&mut self) {
        let config = self.screen.round_config();
        self.controller.start_new_round(config);
        self.drain_round_events();
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(event) = self.timer_rx.recv() => {
                    self.handle_timer(event);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(event) = self.round_rx.recv() => {
                    self.screen.apply_event(&event);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if self.screen.is_animating() {
                        self.screen.tick(ANIMATION_TICK_RATE);
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(&event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match key_press(event) {
            Some(key) => self.handle_key(key),
            None => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match self.screen.handle_key(key) {
            GameKeyResult::Quit => EventResult::Exit,
            GameKeyResult::GuessChanged(guess) => {
                self.controller.submit_guess(&guess);
                self.drain_round_events();
                EventResult::Consumed
            }
            GameKeyResult::ConfigChanged(config) => {
                self.controller.set_config(config);
                EventResult::Consumed
            }
            GameKeyResult::Consumed => EventResult::Consumed,
            GameKeyResult::Ignored => EventResult::Continue,
        }
    }

    fn handle_timer(&mut self, event: TimerEvent) {
        if self.controller.handle_timer(event) {
            self.drain_round_events();
        }
    }

    /// Applies queued controller notifications before the next draw.
    fn drain_round_events(&mut self) {
        while let Ok(event) = self.round_rx.try_recv() {
            self.screen.apply_event(&event);
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(
            GameScreen::new(self.controller.view()),
            frame.area(),
            &mut self.screen,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Phase;
    use crate::domain::ports::mock::ScriptedDigits;
    use crate::infrastructure::config::GameConfig;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn app(targets: &[&str], digit_count: usize) -> App {
        let config = AppConfig {
            game: GameConfig {
                digit_count,
                reveal_seconds: 0.1,
                ..GameConfig::default()
            },
            ..AppConfig::default()
        };
        App::new(&config, Box::new(ScriptedDigits::new(targets.iter().copied())))
    }

    fn type_keys(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_starts_revealed_round() {
        let mut app = app(&["3920"], 4);
        app.start();

        let view = app.controller.view();
        assert_eq!(view.target, Some("3920"));
        assert_eq!(view.phase, Phase::Revealed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hide_timer_reaches_controller() {
        let mut app = app(&["3920"], 4);
        app.start();

        let event = app.timer_rx.recv().await.unwrap();
        app.handle_timer(event);

        assert_eq!(app.controller.phase(), Phase::Hidden);
        assert_eq!(app.controller.view().visible_target(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_correct_guess_starts_next_round() {
        let mut app = app(&["3920", "1111"], 4);
        app.start();

        type_keys(&mut app, "392");
        assert_eq!(app.controller.phase(), Phase::Revealed);
        type_keys(&mut app, "0");
        assert_eq!(app.controller.phase(), Phase::Evaluating);
        assert!(app.screen.is_animating());

        while app.controller.phase() == Phase::Evaluating {
            let event = app.timer_rx.recv().await.unwrap();
            app.handle_timer(event);
        }

        assert_eq!(app.controller.view().target, Some("1111"));
        assert_eq!(app.screen.guess(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slider_change_applies_to_next_round() {
        let mut app = app(&["3920", "123456"], 4);
        app.start();

        app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(app.controller.view().target, Some("3920"));
        assert_eq!(app.controller.config().digit_count(), 6);

        type_keys(&mut app, "5");
        while app.controller.phase() == Phase::Evaluating {
            let event = app.timer_rx.recv().await.unwrap();
            app.handle_timer(event);
        }
        assert_eq!(app.controller.view().target, Some("123456"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_key_release_is_ignored() {
        let mut app = app(&["3920"], 4);
        app.start();

        let release = KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            app.handle_terminal_event(&Event::Key(release)),
            EventResult::Continue
        );
        assert_eq!(
            app.handle_terminal_event(&Event::Key(KeyEvent::new(
                KeyCode::Esc,
                KeyModifiers::NONE
            ))),
            EventResult::Exit
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_draws_target() {
        let mut app = app(&["5001"], 4);
        app.start();

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("5 0 0 1"));
    }
}
