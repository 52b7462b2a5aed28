use crate::types::ColorTag;

pub const RESET: &str = "\x1b[0m";

pub const ANSI_GOOD: &str = "\x1b[32m";
pub const ANSI_DEGRADED: &str = "\x1b[33m";
pub const ANSI_BAD: &str = "\x1b[31m";

pub const DEFAULT_GOOD: &str = "#00FF00";
pub const DEFAULT_DEGRADED: &str = "#FFFF00";
pub const DEFAULT_BAD: &str = "#FF0000";

/// Hex colors sent to i3bar for each tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorPalette {
    pub good: String,
    pub degraded: String,
    pub bad: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            good: DEFAULT_GOOD.to_string(),
            degraded: DEFAULT_DEGRADED.to_string(),
            bad: DEFAULT_BAD.to_string(),
        }
    }
}

impl ColorPalette {
    pub fn hex_for(&self, tag: ColorTag) -> &str {
        match tag {
            ColorTag::Good => &self.good,
            ColorTag::Degraded => &self.degraded,
            ColorTag::Bad => &self.bad,
        }
    }
}

pub fn ansi_for(tag: ColorTag) -> &'static str {
    match tag {
        ColorTag::Good => ANSI_GOOD,
        ColorTag::Degraded => ANSI_DEGRADED,
        ColorTag::Bad => ANSI_BAD,
    }
}

pub fn colorize(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            result.push(ch);
        }
    }
    result
}
