use ratatui::style::Color;

pub const COUNTER_ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HINT_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const NEGATIVE: Color = Color::Rgb(0xef, 0x44, 0x44);
