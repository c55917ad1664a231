//! Fixed series palette
//!
//! Series are colored by their row position in the unfiltered table, so a
//! row keeps its color no matter which other rows a filter hides.

/// Fill alpha for the polygon interior
pub const FILL_ALPHA: f32 = 0.2;

/// Immutable RGB color of one series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColor {
    red: u8,
    green: u8,
    blue: u8,
}

pub const SERIES_PALETTE: [SeriesColor; 7] = [
    SeriesColor::new(255, 99, 132),
    SeriesColor::new(234, 99, 255),
    SeriesColor::new(99, 112, 255),
    SeriesColor::new(99, 252, 255),
    SeriesColor::new(168, 164, 50),
    SeriesColor::new(99, 255, 102),
    SeriesColor::new(247, 161, 0),
];

impl SeriesColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Palette entry for a series number, cycling past the end
    pub fn by_series_number(series_number: usize) -> SeriesColor {
        SERIES_PALETTE[series_number % SERIES_PALETTE.len()]
    }

    /// Translucent CSS color for the polygon fill
    pub fn background(&self) -> String {
        self.rgba(FILL_ALPHA)
    }

    /// Opaque CSS color for the polygon outline
    pub fn border(&self) -> String {
        self.rgba(1.0)
    }

    fn rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.red, self.green, self.blue, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_forms() {
        let color = SeriesColor::new(255, 99, 132);
        assert_eq!(color.background(), "rgba(255, 99, 132, 0.2)");
        assert_eq!(color.border(), "rgba(255, 99, 132, 1)");
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(SeriesColor::by_series_number(0), SERIES_PALETTE[0]);
        assert_eq!(SeriesColor::by_series_number(6), SERIES_PALETTE[6]);
        assert_eq!(SeriesColor::by_series_number(7), SERIES_PALETTE[0]);
        assert_eq!(SeriesColor::by_series_number(16), SERIES_PALETTE[2]);
        assert_eq!(
            SeriesColor::by_series_number(16).border(),
            "rgba(99, 112, 255, 1)"
        );
    }
}
