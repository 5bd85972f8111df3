//! Terminal color capability detection.

/// Color depth the output is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// 24-bit RGB escape sequences.
    TrueColor,
    /// The xterm 256-color palette.
    Ansi256,
}

impl ColorDepth {
    pub fn name(&self) -> &'static str {
        match self {
            ColorDepth::TrueColor => "truecolor",
            ColorDepth::Ansi256 => "ansi256",
        }
    }
}

/// Detect the color depth from the environment.
pub fn detect_color_depth() -> ColorDepth {
    depth_from_colorterm(std::env::var("COLORTERM").ok().as_deref())
}

/// Truecolor is signalled by `COLORTERM=truecolor` or `COLORTERM=24bit`.
pub fn depth_from_colorterm(value: Option<&str>) -> ColorDepth {
    match value.map(str::to_ascii_lowercase) {
        Some(v) if v.contains("truecolor") || v.contains("24bit") => ColorDepth::TrueColor,
        _ => ColorDepth::Ansi256,
    }
}
