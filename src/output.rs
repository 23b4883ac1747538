//! # Output Configuration
//!
//! Controls whether the reporter decorates its summary with colors and
//! emojis, based on terminal capabilities and user preferences.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! Decoration never changes the words of a message, so output piped into
//! another program or a CI log reads the same as in a terminal.

use std::env;

use console::style;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of `--color`: "always", "never" or "auto".
    /// Anything else is treated as "auto".
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Create a configuration with colors always enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Render a summary header, bold yellow when colors are enabled.
    pub fn header(&self, text: &str) -> String {
        if self.use_color {
            style(text).yellow().bold().force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    /// Render a file path line, cyan when colors are enabled.
    pub fn path(&self, text: &str) -> String {
        if self.use_color {
            style(text).cyan().force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Plain output. Terminal detection only happens through
/// [`OutputConfig::from_env_and_flag`].
impl Default for OutputConfig {
    fn default() -> Self {
        Self::without_color()
    }
}

/// Returns the emoji when colors are enabled, the plain alternative otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("NEVER");
        assert!(!config.use_color);
    }

    #[test]
    fn test_default_is_plain() {
        assert_eq!(OutputConfig::default(), OutputConfig::without_color());
    }

    #[test]
    fn test_emoji_helper() {
        assert_eq!(emoji(&OutputConfig::with_color(), "✅ ", ""), "✅ ");
        assert_eq!(emoji(&OutputConfig::without_color(), "✅ ", ""), "");
    }

    #[test]
    fn test_plain_rendering_is_untouched() {
        let config = OutputConfig::without_color();
        assert_eq!(config.header("Header:"), "Header:");
        assert_eq!(config.path("    a.txt"), "    a.txt");
    }

    #[test]
    fn test_colored_rendering_keeps_text() {
        let config = OutputConfig::with_color();
        let rendered = config.header("Header:");
        assert!(rendered.contains("Header:"));
        assert_ne!(rendered, "Header:");
    }
}
