use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub cell_bg: Color,      // Background for unannotated value blocks
    pub comparing: Color,    // Yellow for compared pairs
    pub shifting: Color,     // Orange for elements moving right
    pub key: Color,          // Green for the held insertion key
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),         // Slightly lighter BG for the status bar
    cell_bg: Color::Rgb(69, 71, 90),
    comparing: Color::Rgb(249, 226, 175), // Yellow for compared pairs
    shifting: Color::Rgb(250, 179, 135),  // Orange for shifting elements
    key: Color::Rgb(166, 227, 161),       // Green for the insertion key
};
