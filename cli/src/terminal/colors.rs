use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const SYMBOL: Color = Color::BrightMagenta;
pub const CONFIRMED: Color = Color::Green;
pub const UNEXPECTED: Color = Color::Yellow;
pub const SURVIVED: Color = Color::Red;
