// Simple color struct, created from an unsigned 32 representing RRGGBB,
// rendered as CSS rgba() strings for canvas gradient stops

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    /// CSS color string with the given alpha, suitable for
    /// `CanvasGradient::add_color_stop`.
    pub fn to_css_rgba(&self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_unpacks_channels() {
        assert_eq!(Color::from_u32(0x7afcff), Color::new(122, 252, 255));
        assert_eq!(Color::from_u32(0x7b61ff), Color::new(123, 97, 255));
    }

    #[test]
    fn css_rgba_formatting() {
        assert_eq!(
            Color::new(122, 252, 255).to_css_rgba(0.16),
            "rgba(122,252,255,0.16)"
        );
        assert_eq!(Color::new(123, 97, 255).to_css_rgba(0.0), "rgba(123,97,255,0)");
    }
}
