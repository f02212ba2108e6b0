//! UI state machine
//!
//! Key handling is pure: it mutates [`App`] and returns an [`Action`] for
//! the event loop to carry out.

use super::item::{ListItem, TemplateItem};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tessera_core::config::{Config, LoadedConfig};
use tessera_core::{ProgressEvent, Template, TesseraError};

/// Maximum number of digits accepted for the repetition count
pub const ITERATION_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Template list with optional preview
    Main,
    /// Repetition count input
    Spawn,
    /// Materialization in progress
    Spawning,
    /// Materialization ended; any key exits
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Spawn {
        template: Template,
        repetitions: usize,
    },
}

/// Status line shown under the hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Digits-only input for the repetition count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IterationInput {
    value: String,
}

impl IterationInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn push(&mut self, c: char) {
        if c.is_ascii_digit() && self.value.len() < ITERATION_DIGITS {
            self.value.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Requested repetitions; empty input counts as one
    pub fn count(&self) -> usize {
        if self.value.is_empty() {
            1
        } else {
            self.value.parse().unwrap_or(0)
        }
    }
}

/// Template list filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub editing: bool,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct App {
    pub config: Config,
    pub status: Option<Status>,
    pub page: Page,
    /// Index into [`App::visible`]
    pub cursor: usize,
    pub show_preview: bool,
    pub filter: Filter,
    pub iterations: IterationInput,
    pub log: Vec<ProgressEvent>,
}

impl App {
    /// Build the initial state from a config load
    ///
    /// A failed load degrades to an empty template set with the error shown.
    pub fn new(loaded: Result<LoadedConfig, TesseraError>) -> Self {
        let (config, status) = match loaded {
            Ok(loaded) => {
                let status = loaded.message().map(Status::Info);
                (loaded.config, status)
            }
            Err(e) => {
                tracing::warn!(error = %e, "config load failed; starting with no templates");
                (Config::default(), Some(Status::Error(e.to_string())))
            }
        };

        Self {
            config,
            status,
            page: Page::Main,
            cursor: 0,
            show_preview: false,
            filter: Filter::default(),
            iterations: IterationInput::default(),
            log: Vec::new(),
        }
    }

    /// Indices of templates matching the current filter, in load order
    pub fn visible(&self) -> Vec<usize> {
        self.config
            .templates
            .iter()
            .enumerate()
            .filter(|(_, t)| TemplateItem(t).matches(&self.filter.query))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selected(&self) -> Option<&Template> {
        self.visible()
            .get(self.cursor)
            .and_then(|&i| self.config.templates.get(i))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return match self.page {
                // No mid-run cancellation.
                Page::Spawning => Action::None,
                _ => Action::Quit,
            };
        }

        match self.page {
            Page::Main if self.filter.editing => {
                self.handle_filter_key(key);
                Action::None
            }
            Page::Main => self.handle_main_key(key),
            Page::Spawn => self.handle_spawn_key(key),
            Page::Spawning => Action::None,
            Page::Finished => Action::Quit,
        }
    }

    fn handle_main_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('e') {
                tracing::debug!("edit binding pressed; editing is not available");
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
                if self.cursor + 1 < self.visible().len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Char('h') => self.show_preview = !self.show_preview,
            KeyCode::Char('/') => self.filter.editing = true,
            KeyCode::Char('x') => {
                tracing::debug!("delete binding pressed; deletion is not available");
            }
            KeyCode::Enter => {
                if self.selected().is_some() {
                    self.iterations.clear();
                    self.page = Page::Spawn;
                }
            }
            KeyCode::Esc if !self.filter.query.is_empty() => {
                self.filter.query.clear();
                self.cursor = 0;
            }
            KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
            _ => {}
        }
        Action::None
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.filter = Filter::default();
            }
            KeyCode::Enter => self.filter.editing = false,
            KeyCode::Backspace => {
                self.filter.query.pop();
            }
            KeyCode::Char(c) => self.filter.query.push(c),
            _ => return,
        }
        self.cursor = 0;
    }

    fn handle_spawn_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => self.page = Page::Main,
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char(c) => self.iterations.push(c),
            KeyCode::Backspace => self.iterations.pop(),
            KeyCode::Enter => {
                let repetitions = self.iterations.count();
                if repetitions > 0 {
                    if let Some(template) = self.selected().cloned() {
                        self.log.clear();
                        self.page = Page::Spawning;
                        return Action::Spawn {
                            template,
                            repetitions,
                        };
                    }
                }
            }
            _ => {}
        }
        Action::None
    }

    pub fn on_progress(&mut self, event: ProgressEvent) {
        self.log.push(event);
    }

    /// Record the end of a materialization
    pub fn on_spawn_finished(&mut self, result: Result<(), String>) {
        if let Err(message) = result {
            if !self.log.last().is_some_and(ProgressEvent::is_failure) {
                self.log.push(ProgressEvent::Failed { message });
            }
        }
        self.page = Page::Finished;
    }

    /// Whether the last run ended with an error
    pub fn failed(&self) -> bool {
        self.log.last().is_some_and(ProgressEvent::is_failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tessera_core::{File, RepeatedGroup};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        let config = Config {
            path: "/tmp/tessera.json".to_string(),
            templates: vec![
                Template::new("go-packages").with_repeated(
                    RepeatedGroup::new("pkg-$n").with_file(File::new("mod", "go")),
                ),
                Template::new("python-script"),
                Template::new("rust-crate"),
            ],
        };
        App::new(Ok(LoadedConfig {
            config,
            created: false,
        }))
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.cursor, 0);
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(app.cursor, 2);
        app.handle_key(key(KeyCode::Char('w')));
        assert_eq!(app.selected().unwrap().name, "python-script");
    }

    #[test]
    fn test_preview_toggle() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('h')));
        assert!(app.show_preview);
        app.handle_key(key(KeyCode::Char('h')));
        assert!(!app.show_preview);
    }

    #[test]
    fn test_enter_then_default_count_spawns_once() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page, Page::Spawn);

        let action = app.handle_key(key(KeyCode::Enter));
        match action {
            Action::Spawn {
                template,
                repetitions,
            } => {
                assert_eq!(template.name, "go-packages");
                assert_eq!(repetitions, 1);
            }
            other => panic!("expected spawn, got {:?}", other),
        }
        assert_eq!(app.page, Page::Spawning);
    }

    #[test]
    fn test_iteration_input_digits_only_and_limited() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        for c in ['1', 'a', '2', '-', '3', '4'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.iterations.value(), "123");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.iterations.count(), 12);
    }

    #[test]
    fn test_zero_count_does_not_spawn() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('0')));
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Action::None);
        assert_eq!(app.page, Page::Spawn);
    }

    #[test]
    fn test_q_quits_from_spawn_page() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);
    }

    #[test]
    fn test_esc_returns_to_main() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.page, Page::Main);
    }

    #[test]
    fn test_edit_and_delete_are_noops() {
        let mut app = app();
        assert_eq!(app.handle_key(ctrl('e')), Action::None);
        assert_eq!(app.handle_key(key(KeyCode::Char('x'))), Action::None);
        assert_eq!(app.config.templates.len(), 3);
        assert_eq!(app.page, Page::Main);
    }

    #[test]
    fn test_filter_narrows_and_resets_cursor() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Char('/')));
        for c in "RUST".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.cursor, 0);
        assert_eq!(app.visible(), vec![2]);
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.filter.editing);
        assert_eq!(app.selected().unwrap().name, "rust-crate");

        // Esc clears the query before quitting.
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Action::None);
        assert_eq!(app.visible().len(), 3);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn test_no_templates_enter_is_ignored() {
        let mut app = App::new(Err(TesseraError::HomeDirNotFound));
        assert!(matches!(app.status, Some(Status::Error(_))));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page, Page::Main);
        assert!(app.selected().is_none());
    }

    #[test]
    fn test_spawning_ignores_keys_and_finish_quits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.handle_key(ctrl('c')), Action::None);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::None);

        app.on_progress(ProgressEvent::CreatedFile {
            path: PathBuf::from("pkg-1/mod.go"),
        });
        app.on_spawn_finished(Ok(()));
        assert_eq!(app.page, Page::Finished);
        assert!(!app.failed());
        assert_eq!(app.handle_key(key(KeyCode::Char('z'))), Action::Quit);
    }

    #[test]
    fn test_finish_error_appended_once() {
        let mut app = app();
        app.on_progress(ProgressEvent::Failed {
            message: "DIR_CREATE_FAILED: x".to_string(),
        });
        app.on_spawn_finished(Err("DIR_CREATE_FAILED: x".to_string()));
        assert_eq!(app.log.len(), 1);
        assert!(app.failed());

        let mut app2 = self::app();
        app2.on_spawn_finished(Err("worker failed: panic".to_string()));
        assert_eq!(app2.log.len(), 1);
        assert_eq!(app2.log[0].to_string(), "Error: worker failed: panic");
    }

    #[test]
    fn test_loaded_message_becomes_status() {
        let app = app();
        assert_eq!(
            app.status,
            Some(Status::Info("Successfully loaded 3 templates".to_string()))
        );
    }
}
