use crate::app::state::AppState;
use crate::game::board::{LineKind, WinningLine};
use crate::game::{Cell, GameSession, PlayerRole, RoundState};
use crate::game::CELL_COUNT;
use crate::ui::layout::{board_layout, CELL_HEIGHT, CELL_WIDTH};
use crate::ui::scoreboard;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const GLYPH_X: [&str; CELL_HEIGHT as usize] = ["╲   ╱", "  ╳  ", "╱   ╲"];
const GLYPH_O: [&str; CELL_HEIGHT as usize] = ["╭───╮", "│   │", "╰───╯"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = state.session.as_ref() else {
        return;
    };
    let layout = board_layout(area);

    scoreboard::render(frame, layout.scoreboard, session);

    let turn = Paragraph::new(turn_line(session))
        .style(Theme::turn())
        .alignment(Alignment::Center);
    frame.render_widget(turn, layout.turn);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Theme::grid());
    let inner = block.inner(layout.grid);
    frame.render_widget(block, layout.grid);
    frame.render_widget(Paragraph::new(separator_lines()).style(Theme::grid()), inner);

    let winning = session.winning_line();
    let show_cursor = !session.is_round_over();
    for (index, area) in layout.cells.iter().enumerate() {
        if area.is_empty() {
            continue;
        }
        let mut style = Style::default();
        if winning.is_some_and(|line| line.contains(index)) {
            style = Theme::winning_cell();
        } else if show_cursor && index == state.cursor {
            style = Theme::cursor_cell();
        }
        let cell = session.board().get(index).unwrap_or_default();
        frame.render_widget(Paragraph::new(cell_lines(cell, index)).style(style), *area);
    }

    if let Some(line) = winning {
        let grid = layout.grid;
        let buf = frame.buffer_mut();
        for (x, y, symbol) in strike_points(line, &layout.cells) {
            if !grid.contains((x, y).into()) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(Theme::winning_cell());
            }
        }
    }
}

/// Separator positions crossed by a winning line, with the glyph to draw
/// there. The marks themselves are left alone.
fn strike_points(
    line: WinningLine,
    cells: &[Rect; CELL_COUNT],
) -> Vec<(u16, u16, &'static str)> {
    let kind = line.kind();
    line.indices()
        .windows(2)
        .map(|pair| {
            let (a, b) = (cells[pair[0]], cells[pair[1]]);
            match kind {
                LineKind::Row(_) => (a.right(), a.y + CELL_HEIGHT / 2, "━"),
                LineKind::Column(_) => (a.x + CELL_WIDTH / 2, a.bottom(), "┃"),
                LineKind::Diagonal => (a.right(), a.bottom(), "╲"),
                LineKind::AntiDiagonal => (b.right(), a.bottom(), "╱"),
            }
        })
        .collect()
}

fn turn_line(session: &GameSession) -> String {
    match session.state() {
        RoundState::AwaitingMove { turn } => {
            format!("Your Turn: {} ({})", session.player_name(turn), turn.mark())
        }
        RoundState::Won { line, winner } => format!(
            "{} wins on the {}!",
            session.player_name(winner),
            describe_line(line.kind())
        ),
        RoundState::Drawn => "It's a Draw!".to_string(),
    }
}

fn describe_line(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Row(0) => "top row",
        LineKind::Row(1) => "middle row",
        LineKind::Row(_) => "bottom row",
        LineKind::Column(0) => "left column",
        LineKind::Column(1) => "middle column",
        LineKind::Column(_) => "right column",
        LineKind::Diagonal => "diagonal",
        LineKind::AntiDiagonal => "anti-diagonal",
    }
}

/// Inner grid lines: cells separated by `│` and `─┼─`.
fn separator_lines() -> Vec<Line<'static>> {
    let blank = " ".repeat(CELL_WIDTH as usize);
    let rule = "─".repeat(CELL_WIDTH as usize);
    let row = format!("{blank}│{blank}│{blank}");
    let divider = format!("{rule}┼{rule}┼{rule}");

    let mut lines = Vec::new();
    for r in 0..3 {
        if r > 0 {
            lines.push(Line::raw(divider.clone()));
        }
        for _ in 0..CELL_HEIGHT {
            lines.push(Line::raw(row.clone()));
        }
    }
    lines
}

fn cell_lines(cell: Cell, index: usize) -> Vec<Line<'static>> {
    let pad = " ".repeat((CELL_WIDTH as usize - 5) / 2);
    match cell {
        Cell::Mark(role) => {
            let glyph = match role {
                PlayerRole::First => GLYPH_X,
                PlayerRole::Second => GLYPH_O,
            };
            glyph
                .iter()
                .map(|row| Line::from(vec![Span::raw(pad.clone()), Span::styled(*row, Theme::mark(role))]))
                .collect()
        }
        // Empty cells show their number key, dimmed.
        Cell::Empty => vec![
            Line::raw(""),
            Line::from(Span::styled((index + 1).to_string(), Theme::placeholder())).centered(),
            Line::raw(""),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_fills_inner_grid() {
        let lines = separator_lines();
        assert_eq!(lines.len(), (CELL_HEIGHT * 3 + 2) as usize);
        assert!(lines.iter().all(|l| l.width() == (CELL_WIDTH * 3 + 2) as usize));
    }

    #[test]
    fn test_strike_points_sit_on_separators() {
        let cells = board_layout(Rect::new(0, 1, 80, 27)).cells;
        let row = strike_points(WinningLine::new([3, 4, 5]), &cells);
        assert_eq!(
            row,
            vec![
                (cells[3].right(), cells[3].y + 1, "━"),
                (cells[4].right(), cells[4].y + 1, "━"),
            ]
        );
        let anti = strike_points(WinningLine::new([2, 4, 6]), &cells);
        assert_eq!(anti[0], (cells[4].right(), cells[2].bottom(), "╱"));
        assert_eq!(anti[1], (cells[6].right(), cells[4].bottom(), "╱"));
        for (x, y, _) in row.into_iter().chain(anti) {
            assert!(cells.iter().all(|c| !c.contains((x, y).into())));
        }
    }

    #[test]
    fn test_won_board_draws_strike() {
        use crate::app::state::AppState;
        use crate::config::AppConfig;
        use ratatui::backend::TestBackend;

        let mut state = AppState::new(AppConfig::default());
        state.names.first.set_text("Alice".into());
        state.names.second.set_text("Bob".into());
        state.start_session().unwrap();
        for m in [0, 4, 1, 3, 2] {
            state.session.as_mut().unwrap().apply_move(m);
        }
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| render(f, Rect::new(0, 1, 80, 27), &state))
            .unwrap();
        let cells = board_layout(Rect::new(0, 1, 80, 27)).cells;
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(cells[0].right(), cells[0].y + 1)].symbol(), "━");
        assert_eq!(buffer[(cells[1].right(), cells[1].y + 1)].symbol(), "━");
        // Separator of an unused row stays plain.
        assert_eq!(buffer[(cells[3].right(), cells[3].y + 1)].symbol(), "│");
    }

    #[test]
    fn test_turn_line() {
        let mut session = GameSession::start("Alice", "Bob").unwrap();
        assert_eq!(turn_line(&session), "Your Turn: Alice (X)");
        for m in [0, 4, 1, 3, 2] {
            session.apply_move(m);
        }
        assert_eq!(turn_line(&session), "Alice wins on the top row!");
    }
}
