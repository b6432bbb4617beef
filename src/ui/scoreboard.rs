use crate::game::{GameSession, PlayerRole};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Both players side by side with their win counts. The player to move
/// gets the highlighted border.
pub fn render(frame: &mut Frame, area: Rect, session: &GameSession) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (role, half) in PlayerRole::ALL.into_iter().zip(halves.iter()) {
        let to_move = session.turn() == Some(role);
        let (border_style, border_type) = if to_move {
            (Theme::border_focused(), Theme::border_type_focused())
        } else {
            (Theme::border(), Theme::border_type())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);

        let line = Line::from(vec![
            Span::styled(format!("{} ", role.mark()), Theme::mark(role)),
            Span::styled(session.player_name(role).to_string(), Theme::player_name()),
            Span::raw("  "),
            Span::styled(session.score(role).to_string(), Theme::score()),
        ]);
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, *half);
    }
}
