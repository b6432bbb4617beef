use crate::game::board::SIDE;
use crate::game::CELL_COUNT;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width and height of one board cell, separators excluded.
pub const CELL_WIDTH: u16 = 9;
pub const CELL_HEIGHT: u16 = 3;

/// Board including the outer border and the inner separator lines.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2 + 2;
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2 + 2;

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub help: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(5),    // Screen content
            Constraint::Length(1), // Key help
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        help: chunks[2],
        status_bar: chunks[3],
    }
}

pub struct BoardLayout {
    pub scoreboard: Rect,
    pub turn: Rect,
    pub grid: Rect,
    pub cells: [Rect; CELL_COUNT],
}

pub fn board_layout(body: Rect) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Scores
            Constraint::Length(1), // Turn / outcome line
            Constraint::Min(GRID_HEIGHT),
        ])
        .split(body);

    let grid = centered(chunks[2], GRID_WIDTH, GRID_HEIGHT);
    let inner_x = grid.x + 1;
    let inner_y = grid.y + 1;
    let cells = std::array::from_fn(|i| {
        let row = (i / SIDE) as u16;
        let col = (i % SIDE) as u16;
        Rect::new(
            inner_x + col * (CELL_WIDTH + 1),
            inner_y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(grid)
    });

    BoardLayout {
        scoreboard: chunks[0],
        turn: chunks[1],
        grid,
        cells,
    }
}

/// Board cell rectangles for a full terminal area.
pub fn board_cells(viewport: Rect) -> [Rect; CELL_COUNT] {
    board_layout(compute_layout(viewport).body).cells
}

/// Board cell under a terminal position, if any.
pub fn cell_at(viewport: Rect, column: u16, row: u16) -> Option<usize> {
    board_cells(viewport)
        .iter()
        .position(|cell| !cell.is_empty() && cell.contains((column, row).into()))
}

/// A `width`×`height` rect centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_fit_in_grid_and_do_not_overlap() {
        let layout = board_layout(Rect::new(0, 1, 100, 37));
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            assert_eq!(a.intersection(layout.grid), *a);
            for b in layout.cells.iter().skip(i + 1) {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_cell_at_maps_positions() {
        let viewport = Rect::new(0, 0, 80, 30);
        let cells = board_cells(viewport);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell_at(viewport, cell.x, cell.y), Some(i));
            assert_eq!(
                cell_at(viewport, cell.right() - 1, cell.bottom() - 1),
                Some(i)
            );
        }
        // Separator column between cell 0 and cell 1.
        assert_eq!(cell_at(viewport, cells[0].right(), cells[0].y), None);
        assert_eq!(cell_at(viewport, 0, 0), None);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let viewport = Rect::new(0, 0, 10, 6);
        let _ = board_cells(viewport);
        assert_eq!(cell_at(Rect::default(), 0, 0), None);
    }
}
