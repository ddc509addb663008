//! Board rendering.

use crate::config::Theme;
use noughts_engine::{CellView, Highlight, Mark, Position, Snapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the 3x3 board from a snapshot, marking the cursor cell.
pub fn render_board(f: &mut Frame, area: Rect, snapshot: &Snapshot, cursor: Position, theme: &Theme) {
    let board_area = board_area(area);
    let cells = snapshot.cells();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for (row, cells) in cells.chunks(3).enumerate() {
        if row > 0 {
            render_separator(f, rows[row * 2 - 1]);
        }
        render_row(f, rows[row * 2], cells, cursor, theme);
    }
}

/// The board's rectangle, centered in `area`.
pub(crate) fn board_area(area: Rect) -> Rect {
    center_rect(area, BOARD_WIDTH, BOARD_HEIGHT)
}

/// Screen coordinates of the mark (or key digit) of `position`.
#[cfg(test)]
pub(crate) fn symbol_point(board: Rect, position: Position) -> (u16, u16) {
    let column = position.column() as u16;
    let row = position.row() as u16;
    (
        board.x + column * (CELL_WIDTH + 1) + CELL_WIDTH / 2,
        board.y + row * (CELL_HEIGHT + 1) + 1,
    )
}

fn render_row(f: &mut Frame, area: Rect, cells: &[CellView], cursor: Position, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (col, cell) in cells.iter().enumerate() {
        if col > 0 {
            render_vertical_sep(f, cols[col * 2 - 1]);
        }
        render_cell(f, cols[col * 2], cell, cell.position == cursor, theme);
    }
}

fn render_cell(f: &mut Frame, area: Rect, cell: &CellView, is_cursor: bool, theme: &Theme) {
    let background = match cell.highlight {
        Highlight::None => theme.cell,
        Highlight::WinningLine => theme.win,
        Highlight::Draw => theme.draw,
    };
    let foreground = match cell.mark {
        Some(Mark::Cross) => theme.cross,
        Some(Mark::Nought) => theme.nought,
        None => Color::DarkGray,
    };

    let mut style = Style::default().fg(foreground).bg(background);
    if cell.mark.is_some() {
        style = style.add_modifier(Modifier::BOLD);
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Empty cells show their key so the digits are discoverable.
    let text = match cell.mark {
        Some(mark) => mark.symbol().to_string(),
        None => (cell.position.index() + 1).to_string(),
    };
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(text)])
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::GameEngine;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(indices: &[i64]) -> Buffer {
        let mut engine = GameEngine::new();
        for index in indices {
            engine.select_cell(*index).unwrap();
        }
        let snapshot = engine.snapshot();
        let theme = Theme::default();

        let mut terminal = Terminal::new(TestBackend::new(BOARD_WIDTH, BOARD_HEIGHT)).unwrap();
        terminal
            .draw(|f| render_board(f, f.area(), &snapshot, Position::Center, &theme))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn cell_at(buffer: &Buffer, position: Position) -> &ratatui::buffer::Cell {
        let area = board_area(buffer.area);
        buffer.cell(symbol_point(area, position)).unwrap()
    }

    #[test]
    fn test_marks_drawn_in_their_cells() {
        let theme = Theme::default();
        let buffer = render(&[0, 8]);

        let cross = cell_at(&buffer, Position::TopLeft);
        assert_eq!(cross.symbol(), "X");
        assert_eq!(cross.fg, theme.cross);
        assert_eq!(cross.bg, theme.cell);

        let nought = cell_at(&buffer, Position::BottomRight);
        assert_eq!(nought.symbol(), "O");
        assert_eq!(nought.fg, theme.nought);

        let empty = cell_at(&buffer, Position::TopCenter);
        assert_eq!(empty.symbol(), "2");
        assert_eq!(empty.fg, Color::DarkGray);
    }

    #[test]
    fn test_winning_cells_use_win_background() {
        let theme = Theme::default();
        // X takes the top row.
        let buffer = render(&[0, 3, 1, 4, 2]);

        for position in Position::ALL {
            let expected = if position.row() == 0 {
                theme.win
            } else {
                theme.cell
            };
            assert_eq!(cell_at(&buffer, position).bg, expected, "{}", position);
        }
    }

    #[test]
    fn test_draw_uses_draw_background_everywhere() {
        let theme = Theme::default();
        let buffer = render(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        for position in Position::ALL {
            assert_eq!(cell_at(&buffer, position).bg, theme.draw, "{}", position);
        }
    }

    #[test]
    fn test_cell_background_fills_whole_cell() {
        let theme = Theme::default();
        let buffer = render(&[0, 3, 1, 4, 2]);
        let area = board_area(buffer.area);

        // Corners of the top-left cell, away from the text.
        assert_eq!(buffer.cell((area.x, area.y)).unwrap().bg, theme.win);
        assert_eq!(
            buffer
                .cell((area.x + CELL_WIDTH - 1, area.y + CELL_HEIGHT - 1))
                .unwrap()
                .bg,
            theme.win
        );
    }
}
