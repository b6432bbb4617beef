mod board;
pub mod layout;
mod name_entry;
mod result;
mod scoreboard;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Screen};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    let title = Paragraph::new(Span::styled(" Tic-Tac-Toe ", Theme::title()))
        .alignment(Alignment::Center);
    frame.render_widget(title, app_layout.header);

    match state.screen {
        Screen::NameEntry => name_entry::render(frame, app_layout.body, state),
        Screen::Game => board::render(frame, app_layout.body, state),
        Screen::Result => {
            if let Some(result) = state.result.as_ref() {
                result::render(frame, app_layout.body, result);
            }
        }
    }

    if state.config.ui.show_help {
        let help = Paragraph::new(Span::styled(help_text(state.screen), Theme::help()))
            .alignment(Alignment::Center);
        frame.render_widget(help, app_layout.help);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

fn help_text(screen: Screen) -> &'static str {
    match screen {
        Screen::NameEntry => "Tab: switch field  Enter: next/start  Ctrl+R: random name  Esc: quit",
        Screen::Game => "Arrows/hjkl + Enter, 1-9 or click: play  r: reset  Esc: new players",
        Screen::Result => "Enter/p: play again  c: next round  q: quit",
    }
}
