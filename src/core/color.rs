use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// CSS `gray` (#808080).
    pub const GRAY: Self = Self::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    /// CSS `red` (#ff0000).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// CSS `turquoise` (#40e0d0).
    pub const TURQUOISE: Self = Self::rgb(64.0 / 255.0, 224.0 / 255.0, 208.0 / 255.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb` or `#rrggbb` (case-insensitive).
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidData(format!("invalid hex color `{hex}`"));
        let digits = hex.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channels: Vec<u8> = match digits.len() {
            3 => digits
                .chars()
                .map(|c| u8::from_str_radix(&format!("{c}{c}"), 16))
                .collect::<Result<_, _>>()
                .map_err(|_| invalid())?,
            6 => (0..3)
                .map(|i| u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16))
                .collect::<Result<_, _>>()
                .map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        Ok(Self::rgb(
            f64::from(channels[0]) / 255.0,
            f64::from(channels[1]) / 255.0,
            f64::from(channels[2]) / 255.0,
        ))
    }

    /// Resolves the CSS color keywords used by chart states, then hex strings.
    pub fn parse(value: &str) -> ChartResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "gray" | "grey" => Ok(Self::GRAY),
            "red" => Ok(Self::RED),
            "turquoise" => Ok(Self::TURQUOISE),
            _ => Self::from_hex(value),
        }
    }

    /// `#rrggbb`, ignoring alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (red, green, blue) = self.to_rgb8();
        format!("#{red:02x}{green:02x}{blue:02x}")
    }

    /// 8-bit RGB channels, ignoring alpha.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            channel_to_byte(self.red),
            channel_to_byte(self.green),
            channel_to_byte(self.blue),
        )
    }

    /// Linear RGB interpolation; `t` is clamped to `0..=1`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::rgba(
            self.red + (other.red - self.red) * t,
            self.green + (other.green - self.green) * t,
            self.blue + (other.blue - self.blue) * t,
            self.alpha + (other.alpha - self.alpha) * t,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Fill or stroke value of a scene element. `None` paints nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Paint {
    #[default]
    None,
    Color(Color),
}

impl Paint {
    pub fn parse(value: &str) -> ChartResult<Self> {
        if value.trim().eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }
        Color::parse(value).map(Self::Color)
    }

    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Self::None => None,
            Self::Color(color) => Some(color),
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Color(color) if color.alpha > 0.0)
    }

    /// Intermediate paint `t` of the way to `target`.
    ///
    /// Two colors blend; anything involving `None` holds the start value until
    /// the transition completes.
    #[must_use]
    pub fn interpolate(self, target: Self, t: f64) -> Self {
        match (self, target) {
            (Self::Color(from), Self::Color(to)) => Self::Color(from.lerp(to, t)),
            _ if t >= 1.0 => target,
            _ => self,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::None => Ok(()),
            Self::Color(color) => color.validate(),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl TryFrom<String> for Paint {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        Self::parse(&value)
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> Self {
        paint.to_string()
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Color(color) => write!(f, "{color}"),
        }
    }
}

fn channel_to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
