//! Indentation and line ending configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the default for generated stubs.
    pub const FOUR: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const TWO: Self = Self::Spaces(2);

    /// Build an indent from a width, where 0 selects tabs.
    pub fn from_width(width: u8) -> Self {
        if width == 0 {
            Self::Tab
        } else {
            Self::Spaces(width)
        }
    }

    /// The text of one indentation level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(usize::from(*n)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}

/// Line terminator written after every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}
