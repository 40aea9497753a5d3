use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, CELL_WIDTH};
use crate::game::{Cell, Snapshot};

/// Color of every locked cell with `classic_colors`.
pub const CLASSIC_LOCKED: Color = Color::Rgb(255, 255, 255);

const FILLED: &str = "██";
const EMPTY_DARK: &str = "░░";
const EMPTY_LIGHT: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct UiOptions {
    pub classic_colors: bool,
    pub hold_on_game_over: bool,
}

pub fn ui(f: &mut Frame, snapshot: &Snapshot, options: &UiOptions) {
    let size = f.size();

    let board_height = BOARD_HEIGHT as u16 + 2;
    let board_width = BOARD_WIDTH as u16 * CELL_WIDTH + 2;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(20),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let info_area = horizontal_chunks[2];

    render_board(f, snapshot, options, board_area);
    render_info(f, snapshot, info_area);

    if snapshot.is_game_over() {
        render_game_over_overlay(f, options, board_area);
    }
}

/// One `Line` per board row, each cell `CELL_WIDTH` columns wide, with the
/// falling piece drawn over the locked cells.
pub fn board_lines(snapshot: &Snapshot, options: &UiOptions) -> Vec<Line<'static>> {
    let mut colors = [[None::<Color>; BOARD_WIDTH]; BOARD_HEIGHT];

    for (x, y, cell) in snapshot.board_cells() {
        if let Cell::Filled(color) = cell {
            colors[y][x] = Some(if options.classic_colors { CLASSIC_LOCKED } else { color });
        }
    }

    for (x, y) in snapshot.piece_cells() {
        // rows above the field are not drawn
        if x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32 {
            colors[y as usize][x as usize] = Some(snapshot.piece_color());
        }
    }

    colors
        .iter()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span<'static>> = row
                .iter()
                .enumerate()
                .map(|(x, color)| match color {
                    Some(color) => Span::styled(FILLED, Style::default().fg(*color)),
                    None if (x + y) % 2 == 0 => {
                        Span::styled(EMPTY_DARK, Style::default().fg(Color::DarkGray))
                    }
                    None => Span::raw(EMPTY_LIGHT),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, options: &UiOptions, area: Rect) {
    let board_widget = Paragraph::new(board_lines(snapshot, options))
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(9),
            Constraint::Min(1),
        ])
        .split(area);

    render_status(f, snapshot, chunks[0]);
    render_controls(f, chunks[1]);
}

fn render_status(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let (label, color) = if snapshot.is_game_over() {
        ("GAME OVER", Color::Red)
    } else {
        ("PLAYING", Color::Green)
    };

    let status_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(label, Style::default().fg(color))]),
        Line::from(vec![Span::raw(format!("{} blocks", snapshot.board.filled_count()))]),
    ];

    let status_widget = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .alignment(Alignment::Center);

    f.render_widget(status_widget, area);
}

fn render_controls(f: &mut Frame, area: Rect) {
    let key = Style::default().add_modifier(Modifier::BOLD);
    let controls_text = vec![
        Line::from(vec![Span::styled("← →", key), Span::raw("  move")]),
        Line::from(vec![Span::styled("↑ ↓", key), Span::raw("  rotate")]),
        Line::from(vec![Span::styled("A D", key), Span::raw("  move")]),
        Line::from(vec![Span::styled("W ␣", key), Span::raw("  rotate")]),
        Line::from(vec![Span::styled("R", key), Span::raw("    restart")]),
        Line::from(vec![Span::styled("Q", key), Span::raw("    quit")]),
    ];

    let controls_widget = Paragraph::new(controls_text)
        .block(Block::default().borders(Borders::ALL).title("Keys"));

    f.render_widget(controls_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_game_over_overlay(f: &mut Frame, options: &UiOptions, area: Rect) {
    let popup_area = centered_rect(80, 35, area);
    f.render_widget(Clear, popup_area);

    let mut text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
    ];
    if options.hold_on_game_over {
        text.push(Line::from(vec![Span::raw("R restart")]));
        text.push(Line::from(vec![Span::raw("Q quit")]));
    }

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(widget, popup_area);
}
