use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(24, 27, 27);
pub const SURFACE: Color = Color::Rgb(30, 34, 34);
pub const BORDER: Color = Color::Rgb(58, 66, 66);
pub const TEXT: Color = Color::Rgb(212, 217, 217);
pub const TEXT_DIM: Color = Color::Rgb(120, 130, 130);
pub const TEAL: Color = Color::Rgb(20, 161, 177);
pub const OLIVE: Color = Color::Rgb(167, 189, 50);
pub const RED: Color = Color::Rgb(230, 57, 70);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn teal() -> Style {
    Style::default().fg(TEAL)
}

pub fn olive() -> Style {
    Style::default().fg(OLIVE)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}
