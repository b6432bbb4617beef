use crate::app::state::*;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Text columns inside a name field.
const FIELD_TEXT_WIDTH: u16 = 34;
/// Field text plus the field's border and padding, then the panel's.
const PANEL_WIDTH: u16 = FIELD_TEXT_WIDTH + 2 + 2 + 2 + 4;
const PANEL_HEIGHT: u16 = 13;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let panel = centered(area, PANEL_WIDTH, PANEL_HEIGHT);
    let block = Block::default()
        .title(" Enter Name ")
        .title_alignment(Alignment::Center)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(2));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Player 1
            Constraint::Length(3), // Player 2
            Constraint::Length(1), // Validation prompt
            Constraint::Length(1),
            Constraint::Length(1), // Start button
        ])
        .split(inner);

    let names = &state.names;
    render_field(frame, rows[0], "Player 1", &names.first, names.focus == NameField::First);
    render_field(frame, rows[1], "Player 2", &names.second, names.focus == NameField::Second);

    if let Some(ref error) = names.error {
        let prompt = Paragraph::new(error.as_str())
            .style(Theme::error_message())
            .alignment(Alignment::Center);
        frame.render_widget(prompt, rows[2]);
    }

    let button = Paragraph::new(Line::from(Span::styled(" Start Game ", Theme::button())))
        .alignment(Alignment::Center);
    frame.render_widget(button, rows[4]);
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, input: &InputState, focused: bool) {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if input.text.is_empty() {
        Line::from(Span::styled(label, Theme::placeholder()))
    } else {
        Line::from(Span::styled(input.text.as_str(), Theme::input_text()))
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 {
        let cursor_x = inner.x + input.cursor_column() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::names::MAX_SUGGESTION_LEN;

    #[test]
    fn test_longest_suggestion_is_fully_visible() {
        use crate::config::AppConfig;
        use ratatui::backend::TestBackend;

        let name = "N".repeat(MAX_SUGGESTION_LEN);
        let mut state = AppState::new(AppConfig::default());
        state.names.first.set_text(name.clone());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| render(f, Rect::new(0, 0, 60, 20), &state))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..20)
            .map(|y| (0..60).map(|x| buffer[(x, y)].symbol()).collect())
            .collect();
        assert!(rows.iter().any(|row| row.contains(&name)));
        assert!(MAX_SUGGESTION_LEN <= FIELD_TEXT_WIDTH as usize);
    }
}
