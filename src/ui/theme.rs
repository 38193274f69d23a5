use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for the six kinds of output the shell prints: the listing
/// header, success/error/warn toasts, info lines, and the dimmed
/// labels on status rows.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    pub info: Style,
    pub dim: Style,
}

impl Theme {
    /// Colored on a terminal, plain when piped so captured output
    /// (json or otherwise) carries no escape codes.
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            info: Style::new().blue(),
            dim: Style::new().white().dimmed(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            info: Style::new(),
            dim: Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    #[test]
    fn test_plain_theme_adds_no_escape_codes() {
        let plain = Theme::plain();
        let styled = "CN Tower, Toronto, ON".style(plain.header.clone()).to_string();
        assert_eq!(styled, "CN Tower, Toronto, ON");
    }

    #[test]
    fn test_colored_theme_styles_text() {
        let colored = Theme::colored();
        let styled = "Added location".style(colored.success.clone()).to_string();
        assert!(styled.contains("Added location"));
        assert!(styled.contains('\u{1b}'));
    }
}
