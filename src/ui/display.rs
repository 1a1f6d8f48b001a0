use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::models::{Notice, Severity, Transcript};
use crate::surface::Screen;
use crate::ui::App;

const NAV_ITEMS: [&str; 4] = ["Transcripts", "Upload", "Settings", "About"];

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
        Severity::Success => Color::Green,
    }
}

pub fn draw(f: &mut Frame, app: &mut App, screen: &Screen, entries: &[Transcript]) {
    let has_messages = screen.messages.is_some();

    let constraints = if has_messages {
        vec![
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(2),
        ]
    } else {
        vec![Constraint::Min(0), Constraint::Length(2)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let main_area = if screen.nav_visible() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(0)])
            .split(chunks[0]);
        draw_nav_panel(f, columns[0]);
        columns[1]
    } else {
        chunks[0]
    };

    if entries.is_empty() {
        draw_empty_state(f, main_area);
    } else {
        draw_transcript_list(f, app, main_area, entries);
    }

    if has_messages {
        if let Some(board) = screen.messages.as_ref() {
            draw_messages(f, chunks[1], board.notices());
        }
    }

    let footer = Paragraph::new(
        "↑↓: Navigate  │  Enter: Copy  │  M: Menu  │  X: Clear All  │  Esc: Close",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);

    let footer_area = if has_messages { chunks[2] } else { chunks[1] };
    f.render_widget(footer, footer_area);
}

fn draw_nav_panel(f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .map(|item| ListItem::new(Line::from(format!("  {item}"))))
        .collect();

    let nav = List::new(items).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );

    f.render_widget(nav, area);
}

fn draw_transcript_list(f: &mut Frame, app: &mut App, area: Rect, entries: &[Transcript]) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(" 🎙 ", Style::default().fg(Color::White)),
                Span::styled(entry.summary(), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("  {}", entry.display_line()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!(" {}", entry.formatted_time()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Transcriptions ({}) ", entries.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_empty_state(f: &mut Frame, area: Rect) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No Transcriptions Yet",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Upload an audio file to the converter to get started",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(9),
            Constraint::Percentage(40),
        ])
        .split(area);

    f.render_widget(text, centered[1]);
}

fn draw_messages(f: &mut Frame, area: Rect, notices: &[Notice]) {
    let lines: Vec<Line> = notices
        .iter()
        .map(|notice| {
            let color = severity_color(notice.severity);
            Line::from(vec![
                Span::styled(
                    format!(" {} ", notice.severity.icon()),
                    Style::default().fg(color),
                ),
                Span::styled(&notice.text, Style::default().fg(color)),
                Span::styled(
                    format!("  {}", notice.formatted_time()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let messages = Paragraph::new(lines).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(messages, area);
}
