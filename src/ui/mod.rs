//! Full-screen card interface
//!
//! Draws a loading indicator until the loader task reports back over an
//! mpsc channel, then reveals the card (or an error panel). The loader
//! never touches the card directly; the event loop owns it, which keeps
//! the reveal a single-writer operation.

use std::{error::Error, io, time::Duration};

use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use reqwest::Client;
use tokio::sync::mpsc;

use crate::core::card::{Card, CardPhase};
use crate::core::loader::{load_card, CardData};

/// Result of the loader task, delivered into the event loop.
#[derive(Debug)]
pub enum CardEvent {
    Loaded(CardData),
    Failed(String),
}

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

fn label_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn field_line(label: &'static str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, label_style()),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

/// Build the card body for the current phase. Loading gets the spinner,
/// a displayed card gets its five fields, a failed card gets the error.
fn build_card_lines(card: &Card, tick: usize) -> Vec<Line<'static>> {
    match &card.phase {
        CardPhase::Loading => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Loading profile...", spinner_frame(tick)),
                Style::default().fg(Color::DarkGray),
            )),
        ],
        CardPhase::Displayed => vec![
            Line::from(""),
            field_line("Date:    ", &card.date),
            Line::from(""),
            field_line("Name:    ", &card.name),
            Line::from(""),
            field_line("Bio:     ", &card.bio),
            Line::from(""),
            field_line("Profile: ", &card.link),
            Line::from(""),
            field_line("Avatar:  ", &card.avatar),
        ],
        CardPhase::Failed(message) => vec![
            Line::from(""),
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
        ],
    }
}

fn draw(f: &mut Frame, card: &Card, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let body = Paragraph::new(build_card_lines(card, tick))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("GitHub Profile Card"),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(body, chunks[0]);

    let hint = Paragraph::new("Press q or Ctrl+C to quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, chunks[1]);
}

/// Run the card interface until the user quits.
///
/// The load flow runs as one spawned task; its single result is drained
/// with `try_recv` between draws, the same way streaming updates feed the
/// draw loop elsewhere. Quitting while the loader is still in flight
/// simply drops the receiver — there is no cancellation of the flow.
pub async fn run_card(
    client: Client,
    endpoint: String,
    delay: Duration,
) -> Result<(), Box<dyn Error>> {
    let mut card = Card::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<CardEvent>();
    tokio::spawn(async move {
        let event = match load_card(&client, &endpoint, delay).await {
            Ok(data) => CardEvent::Loaded(data),
            Err(err) => CardEvent::Failed(err.to_string()),
        };
        let _ = tx.send(event);
    });

    let mut tick: usize = 0;
    let result = loop {
        terminal.draw(|f| draw(f, &card, tick))?;

        while let Ok(card_event) = rx.try_recv() {
            match card_event {
                CardEvent::Loaded(data) => {
                    card.set_date(data.date);
                    card.apply_profile(&data.profile);
                }
                CardEvent::Failed(message) => card.fail(message),
            }
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('c')
                            if key.modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            break Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
                        _ => {}
                    }
                }
            }
        }

        tick = tick.wrapping_add(1);
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
