//! TUI application state and logic

use crate::core::{Constraints, WORD_LENGTH, WILDCARD, Word};
use crate::output::{display_rng, shuffled};
use crate::solver::{Assistance, Assistant};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Constraint input fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Exact,
    Include,
    Exclude,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Exact, Self::Include, Self::Exclude];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Exact => 0,
            Self::Include => 1,
            Self::Exclude => 2,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Exact => Self::Include,
            Self::Include => Self::Exclude,
            Self::Exclude => Self::Exact,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Exact => Self::Exclude,
            Self::Include => Self::Exact,
            Self::Exclude => Self::Include,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Exact => " Green (e.g. *oi*g) ",
            Self::Include => " Yellow (e.g. ***n*) ",
            Self::Exclude => " Grey (e.g. xyz) ",
        }
    }

    /// Check whether a typed character may be added to the field
    fn accepts(self, current: &str, c: char) -> bool {
        match self {
            Self::Exact | Self::Include => {
                current.chars().count() < WORD_LENGTH && (c.is_alphabetic() || c == WILDCARD)
            }
            Self::Exclude => c.is_alphabetic(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub assistant: Assistant<'a>,
    pub fields: [String; 3],
    pub focus: Field,
    pub assistance: Option<Assistance>,
    pub shown: Vec<Word>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a [Word], seed: Option<u64>) -> Self {
        Self {
            assistant: Assistant::new(words),
            fields: Default::default(),
            focus: Field::Exact,
            assistance: None,
            shown: Vec::new(),
            messages: vec![Message {
                text: format!(
                    "{} words loaded. Enter green, yellow and grey letters, then press Enter.",
                    words.len()
                ),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            rng: display_rng(seed),
        }
    }

    /// Text of one input field
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    /// Apply a key press to the state
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'd') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.reshuffle(),
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.fields[self.focus.index()].pop();
            }
            KeyCode::Char(c) if !ctrl => {
                let field = &mut self.fields[self.focus.index()];
                if self.focus.accepts(field, c) {
                    field.extend(c.to_lowercase());
                }
            }
            _ => {}
        }
    }

    /// Filter and rank with the current field contents
    pub fn submit(&mut self) {
        let constraints = match Constraints::new(
            self.field(Field::Exact),
            self.field(Field::Include),
            self.field(Field::Exclude),
        ) {
            Ok(constraints) => constraints,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let assistance = self.assistant.assist(&constraints);
        debug!(%constraints, matches = assistance.matches.len(), "submitted constraints");

        if assistance.is_empty() {
            self.add_message("No matching words found.", MessageStyle::Error);
        } else {
            self.add_message(
                &format!(
                    "{} of {} words match",
                    assistance.matches.len(),
                    self.assistant.words().len()
                ),
                MessageStyle::Success,
            );
        }

        self.shown = shuffled(&assistance.matches, &mut self.rng);
        self.assistance = Some(assistance);
    }

    /// Shuffle the displayed matches again
    pub fn reshuffle(&mut self) {
        if let Some(assistance) = &self.assistance {
            self.shown = shuffled(&assistance.matches, &mut self.rng);
        }
    }

    /// Clear all fields and results
    pub fn clear(&mut self) {
        self.fields = Default::default();
        self.focus = Field::Exact;
        self.assistance = None;
        self.shown.clear();
        self.add_message("Cleared.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const SAMPLE: &[&str] = &["spice", "slice", "space", "stage", "stale"];

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill(app: &mut App, exact: &str, include: &str, exclude: &str) {
        type_text(app, exact);
        press(app, KeyCode::Tab);
        type_text(app, include);
        press(app, KeyCode::Tab);
        type_text(app, exclude);
    }

    #[test]
    fn typing_fills_focused_field() {
        let words = words_from_slice(SAMPLE);
        let mut app = App::new(&words, Some(1));
        fill(&mut app, "S****", "*A***", "XY");

        assert_eq!(app.field(Field::Exact), "s****");
        assert_eq!(app.field(Field::Include), "*a***");
        assert_eq!(app.field(Field::Exclude), "xy");
    }

    #[test]
    fn pattern_fields_stop_at_five_characters() {
        let words = words_from_slice(SAMPLE);
        let mut app = App::new(&words, Some(1));
        type_text(&mut app, "abcdefg");
        assert_eq!(app.field(Field::Exact), "abcde");
    }

    #[test]
    fn invalid_characters_are_ignored() {
        let words = words_from_slice(SAMPLE);
        let mut app = App::new(&words, Some(1));
        type_text(&mut app, "a1*");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "e*");
        assert_eq!(app.field(Field::Exact), "a*");
        assert_eq!(app.field(Field::Exclude), "e");
    }

    #[test]
    fn backspace_and_focus_cycling() {
        let words = words_from_slice(SAMPLE);
        let mut app = App::new(&words, Some(1));
        type_text(&mut app, "ab");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.field(Field::Exact), "a");

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Field::Exclude);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::Exact);
    }

    #[test]
    fn submit_shows_matches_and_suggestions() {
        let words = words_from_slice(SAMPLE);
        let mut app = App::new(&words, Some(1));
        fill(&mut app, "s****", "*****", "");
        press(&mut app, KeyCode::Enter);

        let assistance = app.assistance.as_ref().unwrap();
        assert_eq!(assistance.matches.len(), 5);
        assert_eq!(assistance.suggestions[0].text(), "space");
        assert_eq!(app.shown.len(), 5);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn submit_with_short_pattern_reports_error() {
        let words = words_from_slice(SAMPLE);
        let mut app = App::new(&words, Some(1));
        fill(&mut app, "s**", "*****", "");
        press(&mut app, KeyCode::Enter);

        assert!(app.assistance.is_none());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("green letters"));
    }

    #[test]
    fn submit_without_matches_reports_error() {
        let words = words_from_slice(SAMPLE);
        let mut app = App::new(&words, Some(1));
        fill(&mut app, "*****", "*a***", "e");
        press(&mut app, KeyCode::Enter);

        assert!(app.assistance.as_ref().unwrap().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn reshuffle_keeps_the_same_words() {
        let words = words_from_slice(SAMPLE);
        let mut app = App::new(&words, Some(1));
        fill(&mut app, "*****", "*****", "");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'r');

        let mut shown: Vec<&str> = app.shown.iter().map(Word::text).collect();
        shown.sort_unstable();
        let mut expected = SAMPLE.to_vec();
        expected.sort_unstable();
        assert_eq!(shown, expected);
    }

    #[test]
    fn clear_resets_fields() {
        let words = words_from_slice(SAMPLE);
        let mut app = App::new(&words, Some(1));
        fill(&mut app, "s****", "*****", "x");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'l');

        assert!(Field::ALL.iter().all(|&f| app.field(f).is_empty()));
        assert!(app.assistance.is_none());
        assert_eq!(app.focus, Field::Exact);
    }

    #[test]
    fn quit_keys() {
        let words = words_from_slice(SAMPLE);
        let mut app = App::new(&words, None);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&words, None);
        ctrl(&mut app, 'd');
        assert!(app.should_quit);

        let mut app = App::new(&words, None);
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let words = words_from_slice(SAMPLE);
        let mut app = App::new(&words, None);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
