//! TUI rendering with ratatui
//!
//! Constraint inputs on top, matches and suggestions below.

use super::app::{App, Field, MessageStyle};
use crate::core::{WILDCARD, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Inputs
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_inputs(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Matches
            Constraint::Percentage(40), // Suggestions and messages
        ])
        .split(chunks[2]);

    render_matches(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ASSISTANT - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn field_color(field: Field) -> Color {
    match field {
        Field::Exact => Color::Green,
        Field::Include => Color::Yellow,
        Field::Exclude => Color::Gray,
    }
}

fn render_inputs(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for field in Field::ALL {
        let chunk = chunks[field.index()];
        let color = field_color(field);
        let focused = app.focus == field;

        let spans: Vec<Span> = app
            .field(field)
            .chars()
            .map(|c| {
                let style = if c == WILDCARD {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                };
                Span::styled(c.to_uppercase().to_string(), style)
            })
            .collect();

        let border_type = if focused {
            BorderType::Double
        } else {
            BorderType::Rounded
        };

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(field.title())
                .borders(Borders::ALL)
                .border_type(border_type)
                .style(Style::default().fg(if focused { color } else { Color::DarkGray })),
        );
        f.render_widget(input, chunk);

        if focused {
            let typed = cursor_offset(app.field(field), chunk.width);
            f.set_cursor_position((chunk.x + 1 + typed, chunk.y + 1));
        }
    }
}

/// Column of the cursor inside a bordered input box, kept off the right border
fn cursor_offset(text: &str, box_width: u16) -> u16 {
    let last_inner = box_width.saturating_sub(3);
    let typed = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    typed.min(last_inner)
}

fn word_spans(words: &[Word], style: Style) -> Vec<Span<'static>> {
    words
        .iter()
        .map(|word| Span::styled(format!("{}  ", word.text().to_uppercase()), style))
        .collect()
}

fn render_matches(f: &mut Frame, app: &App, area: Rect) {
    let (title, content) = match &app.assistance {
        None => (
            " Matches ".to_string(),
            vec![Line::from("Press Enter to filter the word list")],
        ),
        Some(assistance) if assistance.is_empty() => (
            " Matches (0) ".to_string(),
            vec![Line::from("No matching words found.")],
        ),
        Some(assistance) => (
            format!(" Matches ({}) ", assistance.matches.len()),
            vec![Line::from(word_spans(
                &app.shown,
                Style::default().fg(Color::White),
            ))],
        ),
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Suggestions
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_suggestions(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.assistance {
        Some(assistance) if assistance.has_distinct_suggestions() => vec![Line::from(word_spans(
            &assistance.suggestions,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))],
        Some(assistance) if !assistance.is_empty() => {
            vec![Line::from("All matches are equally good guesses")]
        }
        _ => Vec::new(),
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" 💡 Suggestions ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let words_text = format!("Words: {}", app.assistant.words().len());
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[0]);

    let help = Paragraph::new(
        "Enter: Filter | Tab: Next Field | Ctrl+R: Reshuffle | Ctrl+L: Clear | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn cursor_stays_inside_input_box() {
        assert_eq!(cursor_offset("abc", 20), 3);
        assert_eq!(cursor_offset(&"x".repeat(40), 20), 17);
        assert_eq!(cursor_offset("abc", 1), 0);
    }

    #[test]
    fn long_grey_field_renders() {
        let words = words_from_slice(&["spice", "space"]);
        let mut app = App::new(&words, Some(1));
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE));
        for c in "abcdefghijklmnopqrstuvwxyzabcdefghijklmnopqrstuvwxyz".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        // grey box is the last third of the screen; column 59 is its right border
        assert!((41..59).contains(&cursor.x));
    }

    #[test]
    fn renders_prompt_before_submit() {
        let words = words_from_slice(&["spice", "space"]);
        let app = App::new(&words, Some(1));
        assert!(screen(&app).contains("Press Enter to filter the word list"));
    }

    #[test]
    fn renders_matches_after_submit() {
        let words = words_from_slice(&["spice", "space"]);
        let mut app = App::new(&words, Some(1));
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        // empty fields are too short, so submit fills nothing
        assert!(app.assistance.is_none());

        for c in "s****".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        for c in "*****".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let text = screen(&app);
        assert!(text.contains("Matches (2)"));
        assert!(text.contains("SPICE"));
        assert!(text.contains("SPACE"));
    }
}
