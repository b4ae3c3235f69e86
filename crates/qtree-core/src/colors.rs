//! ANSI color codes for dump listings.
//!
//! - Heading: `[header]` / `[records]` section titles
//! - Op: record op type names
//! - Literal: data pattern payloads
//! - Muted: word offsets, empty sections

/// ANSI palette keyed by what is being printed.
///
/// Standard 16-color codes only.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub heading: &'static str,
    pub op: &'static str,
    pub literal: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        heading: "\x1b[34m",
        op: "\x1b[1;34m",
        literal: "\x1b[32m",
        muted: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        heading: "",
        op: "",
        literal: "",
        muted: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// `[name]` section title.
    pub fn title(&self, name: &str) -> String {
        format!("{}[{name}]{}", self.heading, self.reset)
    }
}
