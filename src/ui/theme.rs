use crate::game::PlayerRole;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const GOLD: Color = Color::Rgb(255, 215, 0);
    pub const ACCENT: Color = Color::Rgb(255, 87, 34);
    pub const MARK_X: Color = Color::Rgb(91, 192, 235);
    pub const MARK_O: Color = Color::Rgb(255, 165, 0);
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const CURSOR_BG: Color = Color::Rgb(60, 60, 60);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::GOLD)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Self::GOLD).add_modifier(Modifier::BOLD)
    }

    pub fn mark(role: PlayerRole) -> Style {
        let color = match role {
            PlayerRole::First => Self::MARK_X,
            PlayerRole::Second => Self::MARK_O,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn grid() -> Style {
        Style::default().fg(Self::GOLD)
    }

    pub fn cursor_cell() -> Style {
        Style::default().bg(Self::CURSOR_BG)
    }

    pub fn winning_cell() -> Style {
        Style::default().bg(Self::GOLD).fg(Color::Black)
    }

    pub fn turn() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn player_name() -> Style {
        Style::default().fg(Self::GOLD)
    }

    pub fn score() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn result_message() -> Style {
        Style::default().fg(Self::GOLD).add_modifier(Modifier::BOLD)
    }

    pub fn help() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
