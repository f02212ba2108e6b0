//! Colors and frame settings, passed explicitly to every render call

use ratatui::style::{Color, Modifier, Style};
use tessera_core::BoxStyle;

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub field_name: Style,
    pub hint: Style,
    pub border: Style,
    pub status: Style,
    pub error: Style,
    pub selected: Style,
    pub item_description: Style,
    pub placeholder: Style,
    pub preview_box: BoxStyle,
}

impl Default for Theme {
    fn default() -> Self {
        let cream = Color::Rgb(0xFF, 0xFD, 0xF5);
        Self {
            title: Style::default().fg(cream).bg(Color::Rgb(0x25, 0xA0, 0x65)),
            field_name: Style::default().fg(cream).bg(Color::Rgb(0xB9, 0x84, 0xBE)),
            hint: Style::default().fg(Color::Rgb(0x7B, 0x7B, 0x7B)),
            border: Style::default().fg(Color::Rgb(0x5B, 0x5B, 0x5B)),
            status: Style::default().fg(Color::Rgb(0x04, 0xB5, 0x75)),
            error: Style::default().fg(Color::Red),
            selected: Style::default()
                .fg(Color::Rgb(0xEE, 0x6F, 0xF8))
                .add_modifier(Modifier::BOLD),
            item_description: Style::default().fg(Color::Rgb(0x77, 0x77, 0x77)),
            placeholder: Style::default().fg(Color::Rgb(0x5B, 0x5B, 0x5B)),
            preview_box: BoxStyle::default(),
        }
    }
}
