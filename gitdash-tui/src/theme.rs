use ratatui::style::Color;

/// Colors used by the renderer. There is one fixed palette and nothing
/// changes it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Title banner text
    pub title_fg: Color,
    pub title_bg: Color,
    /// Menu heading and the selected entry
    pub accent: Color,
    pub spinner: Color,
    /// Output and input boxes
    pub border: Color,
    /// Descriptions, placeholders and footer text
    pub muted: Color,
    /// Key names in hints
    pub hint: Color,
}

impl Theme {
    pub const DEFAULT: Self = Self {
        title_fg: Color::Rgb(0xff, 0xfd, 0xf5),
        title_bg: Color::Rgb(0x00, 0x7b, 0xff),
        accent: Color::Rgb(0xd7, 0x5f, 0xd7),
        spinner: Color::Rgb(0xff, 0x5f, 0xaf),
        border: Color::Rgb(0x5f, 0x5f, 0xd7),
        muted: Color::Gray,
        hint: Color::Blue,
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
