//! Opaque stroke and fill colors
//!
//! Colors are carried verbatim into SVG attributes. Hex (`#ff0000`, `#f00`),
//! `rgb(r, g, b)` and `rgba(r, g, b, a)` strings are all expected, but nothing
//! here checks the syntax.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_any_syntax_through() {
        for raw in ["#00f", "rgb(1, 2, 3)", "rgba(1, 2, 3, 0.5)", "not-a-color"] {
            assert_eq!(Color::from(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_deserialize_transparent() {
        #[derive(Deserialize)]
        struct Holder {
            color: Color,
        }
        let holder: Holder = toml::from_str(r##"color = "#e0e""##).unwrap();
        assert_eq!(holder.color.as_str(), "#e0e");
    }
}
