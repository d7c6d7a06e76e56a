//! UI styling configuration.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== UiStyles =====

/// Styles for the search interface.
///
/// Provides distinct styling for card titles, error text, status
/// messages, key hints, and the selected card border. All styles
/// degrade to the terminal default when colors are disabled.
#[derive(Debug, Clone)]
pub struct UiStyles {
    /// Card title line.
    pub title: Style,
    /// Status-line error text.
    pub error: Style,
    /// Status-line loading/result text.
    pub status: Style,
    /// Footer key hints.
    pub hint: Style,
    /// Border of the selected card.
    pub selected_border: Style,
    /// Placeholder text ("No Image", "No results yet").
    pub placeholder: Style,
}

impl UiStyles {
    /// Create styles with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles honoring the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::Red),
                status: Style::default().fg(Color::Cyan),
                hint: Style::default().fg(Color::DarkGray),
                selected_border: Style::default().fg(Color::Blue),
                placeholder: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                title: Style::default(),
                error: Style::default(),
                status: Style::default(),
                hint: Style::default(),
                selected_border: Style::default(),
                placeholder: Style::default(),
            }
        }
    }
}

impl Default for UiStyles {
    fn default() -> Self {
        Self::new()
    }
}
