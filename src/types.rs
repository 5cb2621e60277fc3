use fixed::types::I32F32;

/// A length in PDF points, stored as fixed point so that identical inputs
/// always produce bit-identical trees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Pt(I32F32);

impl Pt {
    pub const ZERO: Pt = Pt(I32F32::from_bits(0));

    pub fn from_f32(value: f32) -> Pt {
        if !value.is_finite() {
            return Pt::ZERO;
        }
        let milli = (value as f64 * 1000.0).round();
        let milli = milli.clamp(i32::MIN as f64, i32::MAX as f64) as i64;
        Pt::from_milli_i64(milli)
    }

    pub fn from_i32(value: i32) -> Pt {
        Pt::from_milli_i64((value as i64) * 1000)
    }

    pub fn to_f32(self) -> f32 {
        self.0.to_num()
    }

    pub fn to_milli_i64(self) -> i64 {
        let bits = self.0.to_bits() as i128;
        let denom = 1i128 << 32;
        let scaled = bits * 1000;
        let adj = if scaled >= 0 { denom / 2 } else { -denom / 2 };
        ((scaled + adj) / denom) as i64
    }

    pub fn from_milli_i64(milli: i64) -> Pt {
        let denom = 1i128 << 32;
        let milli = milli as i128;
        let adj = if milli >= 0 { 500 } else { -500 };
        let bits = (milli * denom + adj) / 1000;
        let bits = bits.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
        Pt(I32F32::from_bits(bits))
    }

    pub fn abs_diff(self, other: Pt) -> Pt {
        Pt::from_milli_i64((self.to_milli_i64() - other.to_milli_i64()).abs())
    }
}

impl std::ops::Add for Pt {
    type Output = Pt;
    fn add(self, rhs: Pt) -> Pt {
        Pt::from_milli_i64(self.to_milli_i64() + rhs.to_milli_i64())
    }
}

impl std::ops::Sub for Pt {
    type Output = Pt;
    fn sub(self, rhs: Pt) -> Pt {
        Pt::from_milli_i64(self.to_milli_i64() - rhs.to_milli_i64())
    }
}

impl std::fmt::Display for Pt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let milli = self.to_milli_i64();
        let sign = if milli < 0 { "-" } else { "" };
        let milli = milli.abs();
        let whole = milli / 1000;
        let frac = milli % 1000;
        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else {
            let frac = format!("{frac:03}");
            write!(f, "{sign}{whole}.{}", frac.trim_end_matches('0'))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: Pt,
    pub height: Pt,
}

impl Size {
    pub fn a4() -> Self {
        Self {
            width: Pt::from_f32(595.28),
            height: Pt::from_f32(841.89),
        }
    }

    pub fn from_mm(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width: Pt::from_f32(width_mm * 72.0 / 25.4),
            height: Pt::from_f32(height_mm * 72.0 / 25.4),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.width > Pt::ZERO && self.height > Pt::ZERO
    }

    /// Both sides within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &Size, tolerance: Pt) -> bool {
        self.width.abs_diff(other.width) <= tolerance
            && self.height.abs_diff(other.height) <= tolerance
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    pub const WHITE: Color = Color::rgb8(255, 255, 255);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parses `#RRGGBB` or `#RGB`.
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return None,
        };
        let channel = |idx: usize| u8::from_str_radix(expanded.get(idx..idx + 2)?, 16).ok();
        Some(Color::rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pt_round_trips_through_milli() {
        let value = Pt::from_f32(595.28);
        assert_eq!(value.to_milli_i64(), 595_280);
        assert_eq!(Pt::from_i32(9).to_milli_i64(), 9000);
        assert_eq!((Pt::from_i32(3) + Pt::from_f32(0.5)).to_milli_i64(), 3500);
        assert_eq!((Pt::from_i32(3) - Pt::from_i32(5)).to_milli_i64(), -2000);
    }

    #[test]
    fn pt_display_trims_fraction() {
        assert_eq!(Pt::from_f32(8.5).to_string(), "8.5");
        assert_eq!(Pt::from_i32(28).to_string(), "28");
        assert_eq!(Pt::from_f32(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn a4_matches_millimetre_definition() {
        let a4 = Size::a4();
        let from_mm = Size::from_mm(210.0, 297.0);
        assert!(a4.approx_eq(&from_mm, Pt::from_f32(0.5)));
        assert!(a4.is_positive());
        assert!(!Size { width: Pt::ZERO, height: Pt::from_i32(10) }.is_positive());
    }

    #[test]
    fn color_hex_parsing() {
        assert_eq!(Color::from_hex("#36A09C"), Some(Color::rgb8(0x36, 0xA0, 0x9C)));
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("36A09C"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::rgb8(0x4A, 0x4A, 0x4A).to_hex(), "#4A4A4A");
    }
}
