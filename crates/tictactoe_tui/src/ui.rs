//! Board and status rendering.

use crate::app::App;
use crate::config::Palette;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use tictactoe_engine::{GameView, Player, Position, Square};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 5;

/// Draws the whole screen: status line, grid, key help.
pub fn render(f: &mut Frame, app: &App, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(CELL_HEIGHT * 3),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_status(f, rows[0], app, palette);
    render_board(f, rows[1], app, palette);
    render_help(f, rows[2]);
}

fn render_status(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let view = app.view();
    let color = match view.winner() {
        Some(player) => mark_color(player, palette),
        None if view.is_over() => Color::Gray,
        None => mark_color(view.active_player(), palette),
    };

    let mut lines = vec![Line::styled(
        app.status_text(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(notice) = app.notice() {
        lines.push(Line::styled(notice.to_string(), Style::default().fg(Color::DarkGray)));
    }

    let status = Paragraph::new(lines)
        .centered()
        .block(Block::bordered().title(" Tic Tac Toe "));
    f.render_widget(status, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let view = app.view();
    let board_area = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                render_square(f, *cell_area, &view, pos, app.cursor() == pos, palette);
            }
        }
    }
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    view: &GameView,
    pos: Position,
    selected: bool,
    palette: &Palette,
) {
    let (text, mut style) = match view.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.symbol().to_string(),
            Style::default()
                .fg(mark_color(player, palette))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if view.winning_line().is_some_and(|line| line.contains(pos)) {
        style = style.bg(palette.highlight);
    }

    let block = if selected && !view.is_over() {
        Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(palette.cursor))
    } else {
        Block::bordered().border_style(Style::default().fg(Color::DarkGray))
    };

    // Pad the mark onto the middle line of the cell.
    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![Line::raw(""); (inner_height / 2) as usize];
    lines.push(Line::raw(text));

    let square = Paragraph::new(lines).style(style).centered().block(block);
    f.render_widget(square, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("hjkl/arrows: move  enter: play  1-9: cell  r: reset  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .centered()
        .wrap(Wrap { trim: true });
    f.render_widget(help, area);
}

fn mark_color(player: Player, palette: &Palette) -> Color {
    match player {
        Player::X => palette.x,
        Player::O => palette.o,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    const WIDTH: u16 = 60;
    const HEIGHT: u16 = 24;

    fn palette() -> Palette {
        Theme::default().palette().expect("default palette")
    }

    fn draw_buffer(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
        terminal.draw(|f| render(f, app, &palette())).expect("draw");
        terminal.backend().buffer().clone()
    }

    fn draw(app: &App) -> String {
        let buffer = draw_buffer(app);
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn left_column_win() -> App {
        let mut app = App::new();
        for index in [0, 1, 3, 2, 6] {
            app.play(index);
        }
        app
    }

    #[test]
    fn test_renders_status_and_numbers() {
        let screen = draw(&App::new());
        assert!(screen.contains("Player X's turn"));
        assert!(screen.contains('5'));
        assert!(screen.contains("r: reset"));
        assert!(screen.contains("q: quit"));
    }

    #[test]
    fn test_renders_marks_and_win() {
        let screen = draw(&left_column_win());
        assert!(screen.contains("Player X wins!"));
        assert!(screen.contains('X'));
        assert!(screen.contains('O'));
    }

    #[test]
    fn test_highlights_only_winning_cells() {
        let highlight = palette().highlight;
        let buffer = draw_buffer(&left_column_win());
        let width = buffer.area.width as usize;

        let lit: Vec<(usize, usize)> = buffer
            .content()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.bg == highlight)
            .map(|(i, _)| (i % width, i / width))
            .collect();

        // Three whole cells stacked in one column.
        assert_eq!(lit.len(), (3 * CELL_WIDTH * CELL_HEIGHT) as usize);
        let min_x = lit.iter().map(|(x, _)| *x).min().expect("lit cells");
        let max_x = lit.iter().map(|(x, _)| *x).max().expect("lit cells");
        let min_y = lit.iter().map(|(_, y)| *y).min().expect("lit cells");
        let max_y = lit.iter().map(|(_, y)| *y).max().expect("lit cells");
        assert_eq!(max_x - min_x + 1, CELL_WIDTH as usize);
        assert_eq!(max_y - min_y + 1, (3 * CELL_HEIGHT) as usize);

        // Every X on the board is on the winning column; no O is lit.
        for (i, cell) in buffer.content().iter().enumerate() {
            let (x, y) = (i % width, i / width);
            let on_board = y > 2 && y < HEIGHT as usize - 2;
            if on_board && cell.symbol() == "X" {
                assert_eq!(cell.bg, highlight, "X at ({x}, {y}) not highlighted");
            }
            if cell.symbol() == "O" {
                assert_ne!(cell.bg, highlight, "O at ({x}, {y}) highlighted");
            }
        }
    }

    #[test]
    fn test_no_highlight_while_in_progress() {
        let highlight = palette().highlight;
        let mut app = App::new();
        app.play(0);
        let buffer = draw_buffer(&app);
        assert!(buffer.content().iter().all(|cell| cell.bg != highlight));
    }

    #[test]
    fn test_cursor_border_hidden_after_game_over() {
        assert!(draw(&App::new()).contains('┏'));
        assert!(!draw(&left_column_win()).contains('┏'));
    }
}
