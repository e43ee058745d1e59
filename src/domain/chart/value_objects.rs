use serde::{Deserialize, Serialize};

/// Value Object - outer margins of the plot area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self { top: 20.0, right: 20.0, bottom: 60.0, left: 60.0 }
    }
}

/// Value Object - canvas size and the plot area derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self { width, height, margin }
    }

    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// SVG transform of the plot group.
    pub fn plot_transform(&self) -> String {
        translate(self.margin.left, self.margin.top)
    }
}

pub fn translate(x: f64, y: f64) -> String {
    format!("translate({}, {})", x, y)
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8)
    }

    /// Parse `#rrggbb`.
    pub fn parse(css: &str) -> Option<Self> {
        let digits = css.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }

    pub fn to_hex(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }
}

/// The ten-colour categorical palette used by the ordinal colour scale.
pub const CATEGORY10: [Color; 10] = [
    Color::from_hex(0x1f77b4),
    Color::from_hex(0xff7f0e),
    Color::from_hex(0x2ca02c),
    Color::from_hex(0xd62728),
    Color::from_hex(0x9467bd),
    Color::from_hex(0x8c564b),
    Color::from_hex(0xe377c2),
    Color::from_hex(0x7f7f7f),
    Color::from_hex(0xbcbd22),
    Color::from_hex(0x17becf),
];

/// Value Object - pointer coordinates of the triggering event (page space)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_area_subtracts_margins() {
        let dims = ChartDimensions::new(1000.0, 500.0, Margin::default());
        assert_eq!(dims.inner_width(), 920.0);
        assert_eq!(dims.inner_height(), 420.0);
        assert_eq!(dims.plot_transform(), "translate(60, 20)");
    }

    #[test]
    fn color_css_round_trips() {
        let c = Color::parse("#ff7f0e").unwrap();
        assert_eq!(c, CATEGORY10[1]);
        assert_eq!(c.to_css(), "#ff7f0e");
        assert!(Color::parse("ff7f0e").is_none());
    }
}
