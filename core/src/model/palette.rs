use serde::{Deserialize, Serialize};

/// Hue sequence used for the stock palette. 14 entries spread around the
/// color wheel so adjacent chart slices stay visually distinct.
const DEFAULT_HUES: [u16; 14] = [
    0, 20, 40, 60, 80, 110, 140, 170, 200, 230, 260, 290, 320, 340,
];

const DEFAULT_SATURATION: u8 = 65;
const DEFAULT_LIGHTNESS: u8 = 55;

/// An ordered list of hues plus a fixed saturation/lightness. Injected into
/// the present stage as configuration, so callers can swap the palette
/// without touching the aggregation logic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Palette {
    pub hues: Vec<u16>,
    pub saturation: u8,
    pub lightness: u8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            hues: DEFAULT_HUES.to_vec(),
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
        }
    }
}

impl Palette {
    /// Color for slice `index`. Hues repeat cyclically once the slice count
    /// exceeds the palette size, so the assignment is deterministic for any
    /// number of employees.
    pub fn color_at(&self, index: usize) -> HslColor {
        // An empty hue list would make the modulo panic; fall back to red.
        let hue = if self.hues.is_empty() {
            0
        } else {
            self.hues[index % self.hues.len()]
        };
        HslColor {
            hue,
            saturation: self.saturation,
            lightness: self.lightness,
        }
    }

    pub fn len(&self) -> usize {
        self.hues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hues.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslColor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl HslColor {
    /// CSS space-separated form, e.g. "hsl(200 65% 55%)". This is the string
    /// carried in the chart series for renderers that speak CSS.
    pub fn css(&self) -> String {
        format!("hsl({} {}% {}%)", self.hue, self.saturation, self.lightness)
    }

    /// Standard HSL -> RGB conversion, for terminal truecolor output.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let h = f64::from(self.hue % 360);
        let s = f64::from(self.saturation) / 100.0;
        let l = f64::from(self.lightness) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u16 {
            0..=59 => (c, x, 0.0),
            60..=119 => (x, c, 0.0),
            120..=179 => (0.0, c, x),
            180..=239 => (0.0, x, c),
            240..=299 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        (
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_shape() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 14);
        assert_eq!(palette.saturation, 65);
        assert_eq!(palette.lightness, 55);
    }

    #[test]
    fn test_colors_cycle_past_palette_size() {
        let palette = Palette::default();
        for i in 0..palette.len() {
            assert_eq!(palette.color_at(i), palette.color_at(i + palette.len()));
        }
        // Adjacent entries differ within one cycle.
        assert_ne!(palette.color_at(0), palette.color_at(1));
    }

    #[test]
    fn test_css_form() {
        let color = Palette::default().color_at(0);
        assert_eq!(color.css(), "hsl(0 65% 55%)");
        assert_eq!(Palette::default().color_at(8).css(), "hsl(200 65% 55%)");
    }

    #[test]
    fn test_hsl_to_rgb() {
        // Pure-ish primaries at full saturation / half lightness.
        let red = HslColor { hue: 0, saturation: 100, lightness: 50 };
        assert_eq!(red.to_rgb(), (255, 0, 0));
        let green = HslColor { hue: 120, saturation: 100, lightness: 50 };
        assert_eq!(green.to_rgb(), (0, 255, 0));
        let blue = HslColor { hue: 240, saturation: 100, lightness: 50 };
        assert_eq!(blue.to_rgb(), (0, 0, 255));
        let white = HslColor { hue: 0, saturation: 0, lightness: 100 };
        assert_eq!(white.to_rgb(), (255, 255, 255));
    }

    #[test]
    fn test_empty_palette_does_not_panic() {
        let palette = Palette {
            hues: vec![],
            saturation: 65,
            lightness: 55,
        };
        assert_eq!(palette.color_at(3).hue, 0);
    }
}
