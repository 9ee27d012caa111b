use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::modes::TranslationMode;
use crate::tui::app::App;

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(2), // Header
                Constraint::Length(3), // Title
                Constraint::Length(5), // Message box
                Constraint::Length(3), // Mode buttons
                Constraint::Length(3), // Translate button
                Constraint::Min(6),    // Result card
                Constraint::Length(1), // Status bar
            ]
            .as_ref() as &[Constraint],
        )
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_title(frame, chunks[1]);
    render_input(frame, chunks[2], app);
    render_modes(frame, chunks[3], app);
    render_translate_button(frame, chunks[4], app);
    render_result(frame, chunks[5], app);
    render_status_bar(frame, chunks[6], app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("💘 ", Style::default().fg(Color::LightMagenta)),
        Span::styled(
            "Crushor",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);

    frame.render_widget(header, area);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from("What does your crush"),
        Line::from("really mean?"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let text = app.controller.input_text();
    let content = if text.is_empty() {
        Line::from(Span::styled(
            "Enter your crush's message...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(format!("{}▏", text))
    };

    let input = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Message ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(input, area);
}

fn render_modes(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.controller.selected_mode();
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4].as_ref() as &[Constraint])
        .split(area);

    for (idx, mode) in TranslationMode::ALL.iter().enumerate() {
        frame.render_widget(mode_button(*mode, *mode == selected, idx + 1), buttons[idx]);
    }
}

fn mode_button(mode: TranslationMode, selected: bool, key: usize) -> Paragraph<'static> {
    let (text_style, border_style) = if selected {
        (
            Style::default()
                .fg(Color::White)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(mode.color()),
        )
    } else {
        (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::DarkGray),
        )
    };

    Paragraph::new(Line::from(format!("{} {}", mode.glyph(), mode.as_str())))
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" F{} ", key))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
}

fn render_translate_button(frame: &mut Frame, area: Rect, app: &App) {
    let (label, style) = if app.controller.is_translating() {
        (
            format!("{} Translating...", app.spinner_frame()),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        )
    } else if app.controller.can_translate() {
        (
            "Translate ⏎".to_string(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "Translate".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    frame.render_widget(button, area);
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.controller.last_result() else {
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", result.glyph)),
            Span::styled(
                result.mode.display_name(),
                Style::default()
                    .fg(result.mode.color())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Original message:",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("\"{}\"", result.input_text),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            result.result.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    if app.show_timestamps {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            result.completed_at.format("%H:%M:%S").to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta)),
    );

    frame.render_widget(card, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(status) => Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            "Enter translate · Tab/Shift+Tab mode · F1-F4 pick mode · Ctrl+U clear · Esc quit",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}
