use crate::game::{Board, Cell, GameSession, Player, Stage, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    selected_color: Player,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Board or color chooser
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    if session.stage() == Stage::ChoosingColor {
        render_color_chooser(frame, selected_color, chunks[1]);
    } else {
        render_board(frame, session, selected_column, chunks[1]);
    }
    render_message(frame, session.stage(), message, chunks[2]);
    render_controls(frame, session.stage(), chunks[3]);
}

fn token_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, session: &GameSession, area: ratatui::layout::Rect) {
    let (status, color) = match session.stage() {
        Stage::ChoosingColor => ("Choose your color".to_string(), Color::White),
        Stage::PlayerTurn => match session.player_color() {
            Some(player) => (format!("Your turn ({})", player.name()), token_color(player)),
            None => ("Your turn".to_string(), Color::White),
        },
        Stage::AiTurn => ("Computer is thinking...".to_string(), Color::Cyan),
        Stage::PlayerWon => ("You won!".to_string(), Color::Green),
        Stage::AiWon => ("You lost!".to_string(), Color::Red),
        Stage::Draw => ("Board is full!".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

/// The opening screen: one token of each color, pick with arrows + Enter.
fn render_color_chooser(frame: &mut Frame, selected_color: Player, area: ratatui::layout::Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from("Choose red or yellow:"),
        Line::from(""),
    ];

    let cell = |text: &str| format!("{text:^9}");
    let name_style = |player: Player| {
        let style = Style::default().fg(token_color(player));
        if player == selected_color {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    };

    lines.push(Line::from(vec![
        Span::styled(cell("\u{25cf}"), Style::default().fg(Color::Red)),
        Span::styled(cell("\u{25cf}"), Style::default().fg(Color::Yellow)),
    ]));
    lines.push(Line::from(vec![
        Span::styled(cell("Red"), name_style(Player::Red)),
        Span::styled(cell("Yellow"), name_style(Player::Yellow)),
    ]));

    let indicator = |player: Player| {
        if player == selected_color {
            cell("\u{25b2}")
        } else {
            cell("")
        }
    };
    lines.push(Line::from(vec![
        Span::styled(indicator(Player::Red), Style::default().fg(Color::Cyan)),
        Span::styled(indicator(Player::Yellow), Style::default().fg(Color::Cyan)),
    ]));

    let chooser = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(chooser, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    area: ratatui::layout::Rect,
) {
    let board = session.board();
    let selecting = session.stage() == Stage::PlayerTurn;
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if selecting && col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else if selecting && !session.can_choose_column(col) {
            // Full columns are not playable; dim their labels.
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from("  ╔══════════════════════╗"));

    // Board rows, top row first
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            row_spans.push(cell_span(board, col, row));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..COLS {
        if selecting && col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// One cell, three characters wide. Cells of the detected winning line
/// render reversed so the four-in-a-row stands out.
fn cell_span(board: &Board, col: usize, row: usize) -> Span<'static> {
    let (symbol, color) = match board.get(col, row) {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Red => (" ● ", Color::Red),
        Cell::Yellow => (" ● ", Color::Yellow),
    };
    let mut style = Style::default().fg(color);
    if board.is_winning(col, row) {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn render_message(
    frame: &mut Frame,
    stage: Stage,
    message: &Option<String>,
    area: ratatui::layout::Rect,
) {
    let text = match message.as_deref() {
        Some(msg) => msg,
        None if stage.is_game_over() => "Press any key to play again.",
        None => "",
    };
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, stage: Stage, area: ratatui::layout::Rect) {
    let line1 = match stage {
        Stage::ChoosingColor => Line::from("←/→: Pick  |  Enter: Confirm  |  R: Red  Y: Yellow"),
        _ => Line::from("←/→: Move  |  Enter: Drop"),
    };
    let line2 = Line::from("Q/Esc: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
