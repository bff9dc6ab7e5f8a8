//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strictly_gato::{Board, KeyValueStore, Player, Position, Square};

use super::app::{App, Celebration, Outcome};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

const CONFETTI: [&str; 5] = ["*", "+", "o", "•", "x"];
const CONFETTI_COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

/// Renders the whole screen.
pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Title
            Constraint::Min(CELL_HEIGHT * 3),     // Board
            Constraint::Length(3),                // Turn indicator
            Constraint::Length(3),                // Status and keys
        ])
        .split(area);

    let title = Paragraph::new("Gato #")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.session().board(), app.cursor());
    draw_turn(frame, chunks[2], app.session().turn());

    let footer = Paragraph::new(vec![
        Line::from(app.status_message().to_string()),
        Line::from(Span::styled(
            "arrows/1-9: choose  enter: play  r: Reset game  q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[3]);

    if let Some(celebration) = app.celebration() {
        draw_confetti(frame, area, celebration);
    }

    if let Some(outcome) = app.dialog() {
        draw_dialog(frame, area, outcome);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);

    for pos in Position::ALL {
        let cell = Rect::new(
            board_area.x + pos.col() as u16 * CELL_WIDTH,
            board_area.y + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board_area);
        draw_cell(frame, cell, board, pos, pos == cursor);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, pos: Position, selected: bool) {
    let content = match board.get(pos) {
        Square::Empty => Span::styled(
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => Span::styled(player.to_string(), mark_style(player)),
    };

    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let paragraph = Paragraph::new(Line::from(content))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, area);
}

fn draw_turn(frame: &mut Frame, area: Rect, turn: Player) {
    let marker = |player: Player| {
        let style = if player == turn {
            mark_style(player).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", player), style)
    };

    let line = Line::from(vec![marker(Player::X), Span::raw("   "), marker(Player::O)]);
    let indicator = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).title("Turn"));
    frame.render_widget(indicator, center_rect(area, 21, 3));
}

fn draw_dialog(frame: &mut Frame, area: Rect, outcome: Outcome) {
    let dialog_area = center_rect(area, 26, 7);

    let (header, symbol) = match outcome {
        Outcome::Winner(player) => ("Winner:", Span::styled(player.to_string(), mark_style(player))),
        Outcome::Draw => ("Draw", Span::raw(".")),
    };

    let text = vec![
        Line::from(Span::styled(header, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(symbol),
        Line::from(""),
        Line::from(Span::styled("r: Start again", Style::default().fg(Color::Yellow))),
    ];

    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game over"));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(dialog, dialog_area);
}

/// Scatters falling confetti over `area`, driven by the celebration frame.
fn draw_confetti(frame: &mut Frame, area: Rect, celebration: Celebration) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let tick = u32::from(celebration.frame());
    let (width, height) = (u32::from(area.width), u32::from(area.height));
    let pieces = (width * height / 24).max(1);
    let buffer = frame.buffer_mut();

    for i in 0..pieces {
        let seed = i.wrapping_mul(2_654_435_761).rotate_left(13) ^ i;
        let x = area.x + (seed % width) as u16;
        let speed = 1 + seed % 3;
        let y = area.y + ((seed / width).wrapping_add(tick * speed) % height) as u16;

        if let Some(cell) = buffer.cell_mut((x, y)) {
            cell.set_symbol(CONFETTI[(seed % CONFETTI.len() as u32) as usize])
                .set_fg(CONFETTI_COLORS[((seed >> 7) % CONFETTI_COLORS.len() as u32) as usize]);
        }
    }
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
