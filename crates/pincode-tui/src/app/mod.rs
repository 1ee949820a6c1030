//! Application state and event handling

pub mod config;
pub mod events;
mod state;

pub use config::{ConfigError, ConfigStore, TuiConfig};
pub use events::{Event, EventHandler, EventSender};
pub use state::{AppState, FocusRing, FocusTarget};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pincode_core::{FormError, InputOutcome};
use ratatui::prelude::*;

use crate::ui::{self, Theme};

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Colour palette
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter
    pub tick: u64,

    /// Queue for deferred events
    events: EventSender,

    /// Where preference changes are saved, if anywhere
    store: Option<ConfigStore>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &TuiConfig, events: EventSender) -> Self {
        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };

        let mut app = Self {
            state: AppState::new(config),
            theme,
            should_quit: false,
            tick: 0,
            events,
            store: None,
        };

        let state = &mut app.state;
        state.form.mount(&mut state.focus);
        app
    }

    /// Save count, rule and mask changes to `store`
    pub fn with_store(mut self, store: Option<ConfigStore>) -> Self {
        self.store = store;
        self
    }

    /// Run the application main loop
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> Result<()> {
        let reader = events.spawn_terminal_reader();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            match events.recv().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }

        reader.abort();
        Ok(())
    }

    /// Apply one event to the state
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => self.handle_paste(&text),
            Event::Resize(..) => {}
            Event::Tick => self.tick = self.tick.wrapping_add(1),
            Event::SubmitElapsed(ticket) => {
                if let Some(message) = self.state.form.finish_submit(ticket) {
                    self.state.alert = Some(message);
                }
            }
        }

        self.schedule_auto_submit();
    }

    /// Handle key press events
    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The notification blocks everything until dismissed
        if self.state.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.state.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.state.focus_next();
                return;
            }
            KeyCode::BackTab => {
                self.state.focus_prev();
                return;
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                return;
            }
            _ => {}
        }

        match self.state.focus.current() {
            Some(FocusTarget::Segment(index)) => self.handle_segment_key(index, key.code),
            Some(FocusTarget::CountField) => self.handle_count_key(key.code),
            Some(FocusTarget::RuleSelect) => self.handle_rule_key(key.code),
            Some(target) if is_activate(key.code) => self.activate(target),
            _ => {}
        }
    }

    fn handle_segment_key(&mut self, index: usize, key: KeyCode) {
        if key == KeyCode::Enter {
            self.submit();
            return;
        }

        let state = &mut self.state;
        match key {
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                let outcome = state.form.input(index, c.encode_utf8(&mut buf), &mut state.focus);
                if outcome == InputOutcome::Rejected {
                    tracing::debug!(index, "keystroke rejected");
                }
            }
            KeyCode::Backspace => {
                if state.form.segments().is_filled(index) {
                    state.form.input(index, "", &mut state.focus);
                } else {
                    state.form.backspace(index, &mut state.focus);
                }
            }
            KeyCode::Delete => {
                state.form.input(index, "", &mut state.focus);
            }
            KeyCode::Left if index > 0 => {
                state.focus.set(Some(FocusTarget::Segment(index - 1)));
            }
            KeyCode::Right if index + 1 < state.form.segments().len() => {
                state.focus.set(Some(FocusTarget::Segment(index + 1)));
            }
            _ => {}
        }
    }

    fn handle_count_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => self.state.push_count_digit(c),
            KeyCode::Backspace => self.state.pop_count_digit(),
            KeyCode::Enter => self.apply_count(),
            _ => {}
        }
    }

    fn handle_rule_key(&mut self, key: KeyCode) {
        if matches!(
            key,
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down
        ) || is_activate(key)
        {
            let next = self.state.form.rule().toggled();
            self.state.form.set_rule(next);
            self.persist(|store| store.set_default_rule(next));
        }
    }

    /// Handle pasted text on the focused element
    fn handle_paste(&mut self, text: &str) {
        if self.state.alert.is_some() {
            return;
        }

        let state = &mut self.state;
        match state.focus.current() {
            Some(FocusTarget::Segment(index)) => {
                state.form.input(index, text, &mut state.focus);
            }
            Some(FocusTarget::CountField) => {
                for c in text.chars() {
                    state.push_count_digit(c);
                }
            }
            _ => {}
        }
    }

    /// Press a button
    fn activate(&mut self, target: FocusTarget) {
        if !self.state.is_enabled(target) {
            return;
        }

        match target {
            FocusTarget::SaveButton => self.apply_count(),
            FocusTarget::HideButton => {
                self.state.form.toggle_hidden();
                let hidden = self.state.form.is_hidden();
                self.persist(|store| store.set_hidden(hidden));
            }
            FocusTarget::ResetButton => {
                let state = &mut self.state;
                state.form.reset(&mut state.focus);
            }
            FocusTarget::SubmitButton => self.submit(),
            FocusTarget::Segment(_) | FocusTarget::CountField | FocusTarget::RuleSelect => {}
        }
    }

    fn apply_count(&mut self) {
        match self.state.form.apply_desired_count() {
            Ok(()) => {
                self.state.clamp_focus();
                let count = self.state.form.desired_count();
                self.persist(|store| store.set_default_count(count));
            }
            Err(e) => tracing::debug!("count not applied: {}", e),
        }
    }

    fn persist(&mut self, update: impl FnOnce(&mut ConfigStore) -> Result<(), ConfigError>) {
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = update(store) {
                tracing::warn!("Failed to save config: {}", e);
            }
        }
    }

    fn submit(&mut self) {
        match self.state.form.submit() {
            Ok(ticket) => events::schedule_submit(&self.events, ticket, self.state.submit_delay),
            Err(FormError::Busy) => {}
            Err(e) => tracing::debug!("submit refused: {}", e),
        }
    }

    fn schedule_auto_submit(&mut self) {
        if let Some(ticket) = self.state.form.take_auto_submit() {
            events::schedule_submit(&self.events, ticket, self.state.submit_delay);
        }
    }
}

fn is_activate(key: KeyCode) -> bool {
    matches!(key, KeyCode::Enter | KeyCode::Char(' '))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pincode_core::InputRule;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> (App, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(&TuiConfig::default(), tx), rx)
    }

    fn values(app: &App) -> String {
        app.state
            .form
            .segments()
            .iter()
            .map(|s| s.value.unwrap_or('_'))
            .collect()
    }

    #[test]
    fn test_first_box_focused_on_start() {
        let (app, _rx) = app();
        assert_eq!(app.state.focus.current(), Some(FocusTarget::Segment(0)));
    }

    #[test]
    fn test_typing_advances_focus() {
        let (mut app, _rx) = app();
        app.handle_event(key(KeyCode::Char('4')));
        app.handle_event(key(KeyCode::Char('2')));
        assert_eq!(values(&app), "42___");
        assert_eq!(app.state.focus.current(), Some(FocusTarget::Segment(2)));
    }

    #[test]
    fn test_letters_rejected_under_only_number() {
        let (mut app, _rx) = app();
        app.handle_event(key(KeyCode::Char('x')));
        assert_eq!(values(&app), "_____");
        assert_eq!(app.state.focus.current(), Some(FocusTarget::Segment(0)));
    }

    #[test]
    fn test_backspace_clears_then_moves_back() {
        let (mut app, _rx) = app();
        app.handle_event(key(KeyCode::Char('1')));
        app.handle_event(key(KeyCode::Char('2')));
        app.handle_event(key(KeyCode::Left));
        assert_eq!(app.state.focus.current(), Some(FocusTarget::Segment(1)));

        app.handle_event(key(KeyCode::Backspace));
        assert_eq!(values(&app), "1____");
        assert_eq!(app.state.focus.current(), Some(FocusTarget::Segment(1)));

        app.handle_event(key(KeyCode::Backspace));
        assert_eq!(app.state.focus.current(), Some(FocusTarget::Segment(0)));
    }

    #[test]
    fn test_paste_distributes() {
        let (mut app, _rx) = app();
        app.handle_event(Event::Paste("9 87".to_string()));
        assert_eq!(values(&app), "987__");
        assert_eq!(app.state.focus.current(), Some(FocusTarget::Segment(3)));
    }

    #[test]
    fn test_manual_submit_with_gaps_shows_error() {
        let (mut app, _rx) = app();
        app.handle_event(key(KeyCode::Char('1')));
        app.handle_event(key(KeyCode::Enter));
        assert!(app.state.form.is_error());
        assert!(!app.state.form.is_loading());
    }

    #[test]
    fn test_count_field_resizes_row() {
        let (mut app, _rx) = app();
        app.state.focus.set(Some(FocusTarget::CountField));
        app.handle_event(key(KeyCode::Backspace));
        app.handle_event(key(KeyCode::Char('7')));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.state.form.segments().len(), 7);

        app.handle_event(key(KeyCode::Backspace));
        app.handle_event(key(KeyCode::Char('2')));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.state.form.segments().len(), 7);
        assert!(app.state.form.desired_count_error().is_some());
    }

    #[test]
    fn test_rule_selector_toggles() {
        let (mut app, _rx) = app();
        app.state.focus.set(Some(FocusTarget::RuleSelect));
        app.handle_event(key(KeyCode::Right));
        assert_eq!(app.state.form.rule(), InputRule::All);
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.state.form.rule(), InputRule::OnlyNumber);
    }

    #[test]
    fn test_hide_and_reset_buttons() {
        let (mut app, _rx) = app();
        app.handle_event(Event::Paste("12".to_string()));

        app.state.focus.set(Some(FocusTarget::HideButton));
        app.handle_event(key(KeyCode::Enter));
        assert!(app.state.form.is_hidden());

        app.state.focus.set(Some(FocusTarget::ResetButton));
        app.handle_event(key(KeyCode::Char(' ')));
        assert_eq!(values(&app), "_____");
        assert_eq!(app.state.focus.current(), Some(FocusTarget::Segment(0)));
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let (mut app, _rx) = app();
        app.handle_event(key(KeyCode::Esc));
        assert!(app.should_quit);

        let (mut app, _rx) = self::app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit);
    }

    #[test]
    fn test_modified_characters_not_typed() {
        let (mut app, _rx) = app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('v'),
            KeyModifiers::CONTROL,
        )));
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::ALT)));
        assert_eq!(values(&app), "_____");

        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::SHIFT)));
        assert_eq!(values(&app), "7____");
    }

    #[test]
    fn test_preference_changes_are_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = ConfigStore::new(path.clone(), TuiConfig::default());
        let (app, _rx) = app();
        let mut app = app.with_store(Some(store));

        app.state.focus.set(Some(FocusTarget::CountField));
        app.handle_event(key(KeyCode::Backspace));
        app.handle_event(key(KeyCode::Char('8')));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(TuiConfig::load_from(&path).default_count, 8);

        app.state.focus.set(Some(FocusTarget::RuleSelect));
        app.handle_event(key(KeyCode::Right));
        assert_eq!(TuiConfig::load_from(&path).default_rule, InputRule::All);

        app.state.focus.set(Some(FocusTarget::HideButton));
        app.handle_event(key(KeyCode::Enter));
        assert!(TuiConfig::load_from(&path).hidden);
    }

    #[test]
    fn test_rejected_count_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = ConfigStore::new(path.clone(), TuiConfig::default());
        let (app, _rx) = app();
        let mut app = app.with_store(Some(store));

        app.state.focus.set(Some(FocusTarget::CountField));
        app.handle_event(key(KeyCode::Backspace));
        app.handle_event(key(KeyCode::Char('2')));
        app.handle_event(key(KeyCode::Enter));
        assert!(!path.exists());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_submit_shows_notification_after_delay() {
        let (mut app, mut rx) = app();
        app.handle_event(Event::Paste("1234".to_string()));
        assert_eq!(app.state.focus.current(), Some(FocusTarget::Segment(4)));

        app.handle_event(key(KeyCode::Char('5')));
        assert!(app.state.form.is_loading());
        assert!(app.state.alert.is_none());

        let started = tokio::time::Instant::now();
        let event = rx.recv().await.expect("submit completion");
        assert!(started.elapsed() >= Duration::from_secs(1));
        assert!(matches!(event, Event::SubmitElapsed(_)));

        app.handle_event(event);
        assert!(!app.state.form.is_loading());
        assert_eq!(
            app.state.alert.as_deref(),
            Some(r#"Code Input Params: "12345""#)
        );

        // Input is swallowed until the notification is dismissed
        app.handle_event(key(KeyCode::Esc));
        assert!(!app.should_quit);
        assert!(app.state.alert.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_while_loading_does_nothing() {
        let (mut app, mut rx) = app();
        app.handle_event(Event::Paste("12345".to_string()));
        assert!(app.state.form.is_loading());

        app.state.focus.set(Some(FocusTarget::SubmitButton));
        app.handle_event(key(KeyCode::Enter));

        let first = rx.recv().await.unwrap();
        app.handle_event(first);
        assert!(app.state.alert.is_some());
        assert!(rx.try_recv().is_err());
    }
}
