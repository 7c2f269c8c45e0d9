//! Resolver types and error definitions.

use thiserror::Error;

/// An RGB color triple.
///
/// Holding the resolved color as three bytes (rather than a pre-formatted
/// string) guarantees that whatever ends up interpolated into markup is
/// produced by [`Rgb::css_hex`] and cannot carry anything but hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The CSS hex form, lowercase `#rrggbb`.
    pub fn css_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.css_hex())
    }
}

/// Errors that can occur while resolving a color name.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The name is not in the color database.
    #[error("unknown color name: {name}")]
    UnknownName { name: String },

    /// The resolver backend could not be reached.
    ///
    /// Never produced by the embedded table; defined for resolvers that
    /// cross a process or network boundary. Fatal to the request only.
    #[error("color resolver unavailable: {0}")]
    Unavailable(String),
}

/// Maps a human-readable color name to its RGB value.
pub trait ColorNameResolver: Send + Sync {
    /// Resolve `name` to a color.
    fn resolve(&self, name: &str) -> Result<Rgb, ResolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0xff, 0x00, 0x00).css_hex(), "#ff0000");
        assert_eq!(Rgb::new(0x01, 0x02, 0x03).css_hex(), "#010203");
        assert_eq!(Rgb::new(0xab, 0xcd, 0xef).css_hex(), "#abcdef");
    }

    #[test]
    fn test_display_matches_css_hex() {
        let c = Rgb::new(0x64, 0x95, 0xed);
        assert_eq!(format!("{}", c), "#6495ed");
    }

    #[test]
    fn test_unknown_name_keeps_the_name() {
        let err = ResolveError::UnknownName {
            name: "notacolor123".into(),
        };
        assert_eq!(err.to_string(), "unknown color name: notacolor123");
    }
}
