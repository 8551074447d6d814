use ratatui::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Column headers and the focused column's border
    pub accent: Color,
    /// Borders of unfocused columns
    pub border: Color,
    /// Default task text
    pub text: Color,
    /// Done tasks and the help footer
    pub dim: Color,
    pub star: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            accent: Color::Indexed(12),
            border: Color::Indexed(240),
            text: Color::Reset,
            dim: Color::Indexed(245),
            star: Color::Indexed(214),
            selection_bg: Color::Indexed(236),
            selection_fg: Color::Indexed(229),
            error: Color::Indexed(9),
        }
    }
}
