use ratatui::style::Color;

pub const BG_PRIMARY: Color = Color::Rgb(0, 0, 0);
pub const BG_PANEL: Color = Color::Rgb(12, 16, 12);
pub const FG_PRIMARY: Color = Color::Rgb(200, 200, 190);
pub const FG_DIM: Color = Color::Rgb(128, 128, 120);
pub const FG_ERROR: Color = Color::Rgb(235, 96, 80);

pub const BAR_BG: Color = Color::Rgb(28, 84, 52);
pub const BAR_TEXT: Color = Color::Rgb(236, 244, 236);
pub const BAR_HIGHLIGHT_BG: Color = Color::Rgb(86, 150, 96);
pub const BAR_HIGHLIGHT_TEXT: Color = Color::Rgb(255, 255, 255);

pub const MENU_BG: Color = Color::Rgb(60, 66, 60);
pub const MENU_BORDER: Color = Color::Rgb(208, 214, 208);
pub const MENU_TEXT: Color = Color::Rgb(240, 240, 240);

pub const BORDER_IDLE: Color = Color::Rgb(70, 110, 80);
pub const BORDER_FOCUS: Color = Color::Rgb(214, 160, 40);
pub const PANEL_HIGHLIGHT_BG: Color = Color::Rgb(150, 200, 140);
