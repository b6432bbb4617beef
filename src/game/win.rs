//! Win and draw detection.

use super::board::{Board, Cell, WinningLine};

/// All winning triples, in the order they are checked: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const LINES: [WinningLine; 8] = [
    WinningLine::new([0, 1, 2]),
    WinningLine::new([3, 4, 5]),
    WinningLine::new([6, 7, 8]),
    WinningLine::new([0, 3, 6]),
    WinningLine::new([1, 4, 7]),
    WinningLine::new([2, 5, 8]),
    WinningLine::new([0, 4, 8]),
    WinningLine::new([2, 4, 6]),
];

/// Returns the first completed line in [`LINES`] order, if any.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.into_iter().find(|line| {
        let [a, b, c] = line.indices();
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_line() {
        assert_eq!(find_winning_line(&Board::new()), None);
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_every_single_line_is_found() {
        for line in LINES {
            for mark in ['X', 'O'] {
                let mut pattern = ['.'; 9];
                for i in line.indices() {
                    pattern[i] = mark;
                }
                let board = Board::from_pattern(&pattern.iter().collect::<String>());
                assert_eq!(find_winning_line(&board), Some(line), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_partial_boards_have_no_line() {
        for pattern in ["XX.......", "X...O...X", "XO.OX....", "XOXOOXX.."] {
            assert_eq!(find_winning_line(&Board::from_pattern(pattern)), None, "{}", pattern);
        }
    }

    #[test]
    fn test_mixed_marks_do_not_win() {
        assert_eq!(find_winning_line(&Board::from_pattern("XXO......")), None);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_pattern("XOXOXXOXO");
        assert!(board.is_full());
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = Board::from_pattern("XXXOOXOXO");
        assert!(!is_draw(&board));
        assert_eq!(find_winning_line(&board).map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_priority_order_on_invalid_board() {
        // Top row and left column both complete: rows are checked first.
        let board = Board::from_pattern("XXXX..X..");
        assert_eq!(find_winning_line(&board).map(|l| l.indices()), Some([0, 1, 2]));
        // Middle column and main diagonal: columns before diagonals.
        let board = Board::from_pattern("XX..X..XX");
        assert_eq!(find_winning_line(&board).map(|l| l.indices()), Some([1, 4, 7]));
    }

    #[test]
    fn test_detection_is_idempotent() {
        let board = Board::from_pattern("O.X.OX..O");
        let first = find_winning_line(&board);
        assert_eq!(first, find_winning_line(&board));
        assert_eq!(first.map(|l| l.indices()), Some([0, 4, 8]));
    }
}
