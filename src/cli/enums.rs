//! CLI enum types.

use clap::ValueEnum;

use crate::config::ColorMode;

/// Color depth override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect from COLORTERM
    #[default]
    Auto,
    /// 24-bit color
    Truecolor,
    /// xterm 256-color palette
    #[value(name = "ansi256")]
    Ansi256,
}

impl From<ColorChoice> for ColorMode {
    fn from(c: ColorChoice) -> Self {
        match c {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Truecolor => ColorMode::Truecolor,
            ColorChoice::Ansi256 => ColorMode::Ansi256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_choice_to_color_mode() {
        assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
        assert_eq!(ColorMode::from(ColorChoice::Truecolor), ColorMode::Truecolor);
        assert_eq!(ColorMode::from(ColorChoice::Ansi256), ColorMode::Ansi256);
    }

    #[test]
    fn test_color_choice_names() {
        let names: Vec<String> = ColorChoice::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["auto", "truecolor", "ansi256"]);
    }
}
