use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00a78bfa);
pub const SECONDARY: Color = Color::from_u32(0x00f472b6);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x00120b1f);
pub const ACCENT: Color = Color::from_u32(0x00fbbf24);
pub const ERROR: Color = Color::from_u32(0x00f87171);
