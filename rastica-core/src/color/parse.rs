use crate::color::spaces::{Hsl, Hsv};
use crate::foundation::core::Rgba8;
use serde::{Deserialize, Serialize};

/// Flexible color input used by the scene format and the CLI.
///
/// Deserializes from hex strings (`#RRGGBB` / `#RRGGBBAA`), `{r,g,b[,a]}`
/// objects with unit-range channels, `{h,s,l[,a]}` and `{h,s,v[,a]}` objects
/// (hue in degrees), and `[r,g,b[,a]]` arrays. Serializes as a hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec(Rgba8);

impl ColorSpec {
    /// Fully transparent black, the default scene background.
    pub const TRANSPARENT: Self = Self(Rgba8::TRANSPARENT);

    /// Wrap a device color.
    pub const fn new(color: Rgba8) -> Self {
        Self(color)
    }

    /// The resolved device color.
    pub fn rgba8(self) -> Rgba8 {
        self.0
    }
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<Rgba8> for ColorSpec {
    fn from(color: Rgba8) -> Self {
        Self(color)
    }
}

impl Serialize for ColorSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let Rgba8 { r, g, b, a } = self.0;
        let s = if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        };
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for ColorSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            HslObj {
                h: f64,
                s: f64,
                l: f64,
                #[serde(default = "one")]
                a: f64,
            },
            HsvObj {
                h: f64,
                s: f64,
                v: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        fn unit_rgba(r: f64, g: f64, b: f64, a: f64) -> Rgba8 {
            fn to_u8(x: f64) -> u8 {
                (x.clamp(0.0, 1.0) * 255.0).round() as u8
            }
            Rgba8::rgba(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
        }

        let color = match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom)?,
            Repr::RgbaObj { r, g, b, a } => unit_rgba(r, g, b, a),
            Repr::HslObj { h, s, l, a } => Hsl { h, s, l, a }.to_rgba8(),
            Repr::HsvObj { h, s, v, a } => Hsv { h, s, v, a }.to_rgba8(),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => unit_rgba(*r, *g, *b, 1.0),
                [r, g, b, a] => unit_rgba(*r, *g, *b, *a),
                _ => {
                    return Err(serde::de::Error::custom(
                        "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                    ));
                }
            },
        };
        Ok(Self(color))
    }
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/parse.rs"]
mod tests;
