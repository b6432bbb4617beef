use crate::app::state::ResultState;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const TROPHY: [&str; 7] = [
    r"  ___________  ",
    r" '._==_==_=_.' ",
    r" .-\:      /-. ",
    r"| (|:.     |) |",
    r" '-|:.     |-' ",
    r"   \::.    /   ",
    r"    '::. .'    ",
];
const TROPHY_BASE: [&str; 3] = [r"      ) (      ", r"    _.' '._    ", r"   `-------`   "];

pub fn render(frame: &mut Frame, area: Rect, result: &ResultState) {
    let mut lines: Vec<Line> = Vec::new();
    if result.is_win {
        for row in TROPHY.iter().chain(TROPHY_BASE.iter()) {
            lines.push(Line::from(Span::styled(*row, Theme::title())));
        }
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled(result.message.as_str(), Theme::result_message())));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(" Play Again ", Theme::button())));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Enter: new players   c: next round   q: quit",
        Theme::help(),
    )));

    let height = lines.len() as u16 + 4;
    let panel = centered(area, 50, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Theme::border_focused());
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block.padding(Padding::vertical(1)));
    frame.render_widget(paragraph, panel);
}
