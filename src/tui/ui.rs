//! Stateless rendering of a match view.

use noughts_core::{Cell, Coordinate, Mark, MatchView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Draws the title, the board with the cursor highlighted and the status lines.
pub fn draw(frame: &mut Frame, view: &MatchView, cursor: Coordinate, message: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts and Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], view, cursor);

    let mut lines = vec![Line::from(view.headline())];
    if !message.is_empty() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let status = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = if view.state().status().is_concluded() {
        "r: play again   q: quit"
    } else {
        "arrows: move   enter/space: place   1-9: place   r: restart   q: quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &MatchView, cursor: Coordinate) {
    let rows = view.snapshot().rows();
    let size = rows.len() as u16;
    let width = size * CELL_WIDTH + size.saturating_sub(1);
    let height = size * CELL_HEIGHT + size.saturating_sub(1);
    let board_area = center_rect(area, width, height);

    let mut row_constraints = Vec::new();
    for i in 0..size {
        if i > 0 {
            row_constraints.push(Constraint::Length(1));
        }
        row_constraints.push(Constraint::Length(CELL_HEIGHT));
    }
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(board_area);

    for (row, cells) in rows.iter().enumerate() {
        if row > 0 {
            draw_separator(frame, row_areas[row * 2 - 1]);
        }
        draw_row(frame, row_areas[row * 2], row, cells, cursor);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, row: usize, cells: &[Cell], cursor: Coordinate) {
    let mut constraints = Vec::new();
    for i in 0..cells.len() {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(CELL_WIDTH));
    }
    let col_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (column, cell) in cells.iter().enumerate() {
        if column > 0 {
            draw_separator_vertical(frame, col_areas[column * 2 - 1]);
        }
        let selected = cursor == Coordinate::new(column, row);
        draw_cell(frame, col_areas[column * 2], *cell, selected);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, selected: bool) {
    let (symbol, base_style) = match cell {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Marked(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::MatchController;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(view: &MatchView, message: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| draw(f, view, Coordinate::new(1, 1), message))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draws_marks_and_headline() {
        let mut game = MatchController::with_names("Ann", "Bob");
        let empty = rendered(&game.view(), "");
        assert!(!empty.contains('X'));
        assert!(!empty.contains('O'));

        game.play_turn(0, 0);
        game.play_turn(2, 2);

        let screen = rendered(&game.view(), "");
        assert!(screen.contains('X'));
        assert!(screen.contains('O'));
        assert!(screen.contains("Ann's turn..."));
    }

    #[test]
    fn test_draws_message() {
        let game = MatchController::default();
        let screen = rendered(&game.view(), "That cell is already taken");
        assert!(screen.contains("That cell is already taken"));
    }
}
