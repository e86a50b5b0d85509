use std::fmt;

use crate::error::{GraphError, Result};

/// Normalized RGBA color, every channel in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Marker for excitatory (AMPA) edges and purely excitatory populations.
    pub const EXCITATORY: Color = Color::rgb(0.0, 0.0, 1.0);
    /// Marker for inhibitory (GABA) edges and purely inhibitory populations.
    pub const INHIBITORY: Color = Color::rgb(1.0, 0.0, 0.0);
    /// Marker for input source nodes and their edges.
    pub const INPUT: Color = Color::rgb(1.0, 1.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `"r g b"` or `"r g b a"`.
    pub fn parse(spec: &str) -> Result<Self> {
        let bad = |reason: String| GraphError::MalformedColorSpec {
            spec: spec.to_string(),
            reason,
        };

        let mut channels = Vec::with_capacity(4);
        for part in spec.split_whitespace() {
            let value: f64 = part
                .parse()
                .map_err(|_| bad(format!("'{part}' is not a number")))?;
            if !(0.0..=1.0).contains(&value) {
                return Err(bad(format!("component {value} is outside 0..=1")));
            }
            channels.push(value);
        }

        match channels[..] {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(bad(format!(
                "expected 3 or 4 components, found {}",
                channels.len()
            ))),
        }
    }

    /// `#rrggbbaa`, the form graphviz accepts for colors with alpha.
    pub fn to_hex(&self) -> String {
        let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            byte(self.a)
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_gets_opaque_alpha() {
        assert_eq!(Color::parse("0 0 1").unwrap(), Color::rgba(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn rgba_and_extra_whitespace() {
        let c = Color::parse("  0.25\t0.5 0.75   0.1 ").unwrap();
        assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.1));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        for spec in ["", "1", "0 1", "0 0 0 0 0"] {
            let err = Color::parse(spec).unwrap_err();
            assert!(
                matches!(err, GraphError::MalformedColorSpec { .. }),
                "{spec:?} -> {err}"
            );
        }
    }

    #[test]
    fn junk_and_out_of_range_are_rejected() {
        assert!(Color::parse("red green blue").is_err());
        assert!(Color::parse("0 0 2").is_err());
        assert!(Color::parse("0 -0.5 0").is_err());
    }

    #[test]
    fn hex() {
        assert_eq!(Color::INPUT.to_hex(), "#ffff00ff");
        assert_eq!(Color::rgba(0.0, 0.5, 1.0, 0.0).to_hex(), "#0080ff00");
    }
}
