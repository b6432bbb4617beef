use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Player to move
    if let Some(session) = state.session.as_ref() {
        if let Some(turn) = session.turn() {
            parts.push(Span::styled(
                format!(" [{}] ", turn.mark()),
                Theme::mark(turn).bg(Color::DarkGray),
            ));
        }
    }

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let screen_name = match state.screen {
        Screen::NameEntry => "NAMES",
        Screen::Game => "BOARD",
        Screen::Result => "RESULT",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + screen_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", screen_name),
        Style::default().fg(Theme::GOLD).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
