use ratatui::style::{Color, Modifier, Style};

use crate::model::RunState;

/// Color scheme for the console
pub struct Theme;

impl Theme {
    // Run-state colors
    pub fn state_color(state: RunState) -> Color {
        match state {
            RunState::Waiting => Color::Yellow,
            RunState::Running => Color::Blue,
            RunState::Done => Color::Green,
            RunState::Broken => Color::Red,
        }
    }

    // General styles
    pub fn title() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default()
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn highlight() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn button_enabled() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    pub fn status_message() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn help_key() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Style::default().fg(Color::White)
    }
}

/// Format run-state as styled text
pub fn format_state(state: RunState) -> (&'static str, Style) {
    let text = match state {
        RunState::Waiting => "waiting",
        RunState::Running => "running",
        RunState::Done => "done",
        RunState::Broken => "broken",
    };
    (text, Style::default().fg(Theme::state_color(state)))
}
