use ratatui::style::Color;

pub const TEC_BLUE: Color = Color::Rgb(0x00, 0x33, 0xa0);
pub const TEC_GREEN: Color = Color::Rgb(0x10, 0xb9, 0x81);
pub const TEC_GRAY: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ALERT_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const WARN_YELLOW: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
