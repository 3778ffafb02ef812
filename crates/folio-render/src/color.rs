#![forbid(unsafe_code)]

//! Paint colors as CSS-style hex values packed into a `u32`.

use std::fmt;

/// Straight-alpha color packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self::hex(0x000000);
    pub const WHITE: Self = Self::hex(0xffffff);
    pub const RED: Self = Self::hex(0xff0000);

    /// Opaque color from channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn hex(rgb: u32) -> Self {
        Self((rgb << 8) | 0xFF)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            3 => {
                let expand = |nibble: u32| (nibble * 17) as u8;
                Some(Self::rgb(
                    expand((value >> 8) & 0xF),
                    expand((value >> 4) & 0xF),
                    expand(value & 0xF),
                ))
            }
            6 => Some(Self::hex(value)),
            8 => Some(Self(value)),
            _ => None,
        }
    }

    /// Channels in `[r, g, b, a]` order.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.channels()[0]
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.channels()[1]
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.channels()[2]
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.channels()[3]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.channels();
        write!(f, "#{r:02x}{g:02x}{b:02x}")?;
        match a {
            u8::MAX => Ok(()),
            a => write!(f, "{a:02x}"),
        }
    }
}
