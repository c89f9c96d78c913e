use std::fmt;

/// An opaque highlight colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HighlightColor {
    pub const YELLOW: HighlightColor = HighlightColor::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, lowercase.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl Default for HighlightColor {
    fn default() -> Self {
        Self::YELLOW
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for HighlightColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}
