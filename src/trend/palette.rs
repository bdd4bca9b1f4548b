use serde::Serialize;

use super::classify::TrendDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hue(&'static str);

impl Hue {
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Hue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub hue: Hue,
    pub width: u8,
    /// Dash and gap lengths; empty for a solid line.
    pub dash: &'static [u8],
}

/// Maps trend directions to display hues.
///
/// Classification never looks at a palette, so swapping one only changes
/// how the same segments are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub rising: Hue,
    pub falling: Hue,
    pub flat: Hue,
    pub neutral: Hue,
    pub segment_width: u8,
    pub marker_radius: u8,
    pub guideline: LineStyle,
    pub weekend: Hue,
}

const RED: Hue = Hue::new("#ef4444");
const GREEN: Hue = Hue::new("#22c55e");
const SLATE: Hue = Hue::new("#94a3b8");
const SLATE_DARK: Hue = Hue::new("#64748b");
const SLATE_LIGHT: Hue = Hue::new("#e2e8f0");

const GUIDELINE: LineStyle = LineStyle {
    hue: SLATE,
    width: 2,
    dash: &[5, 5],
};

impl Palette {
    /// Rising remaining work is scope growth and drawn as risk.
    pub const RISK: Self = Self {
        name: "risk",
        rising: RED,
        falling: GREEN,
        flat: SLATE,
        neutral: SLATE_DARK,
        segment_width: 3,
        marker_radius: 3,
        guideline: GUIDELINE,
        weekend: SLATE_LIGHT,
    };

    /// Rising remaining work drawn green and falling drawn red.
    pub const INVERTED: Self = Self {
        name: "inverted",
        rising: GREEN,
        falling: RED,
        ..Self::RISK
    };

    pub fn hue(&self, direction: TrendDirection) -> Hue {
        match direction {
            TrendDirection::Rising => self.rising,
            TrendDirection::Falling => self.falling,
            TrendDirection::Flat => self.flat,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::RISK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_palette_marks_rising_as_risk() {
        let palette = Palette::RISK;

        assert_eq!(palette.hue(TrendDirection::Rising).as_str(), "#ef4444");
        assert_eq!(palette.hue(TrendDirection::Falling).as_str(), "#22c55e");
        assert_eq!(palette.hue(TrendDirection::Flat).as_str(), "#94a3b8");
    }

    #[test]
    fn test_inverted_palette_swaps_only_rising_and_falling() {
        let risk = Palette::RISK;
        let inverted = Palette::INVERTED;

        assert_eq!(inverted.hue(TrendDirection::Rising), risk.hue(TrendDirection::Falling));
        assert_eq!(inverted.hue(TrendDirection::Falling), risk.hue(TrendDirection::Rising));
        assert_eq!(inverted.hue(TrendDirection::Flat), risk.hue(TrendDirection::Flat));
        assert_eq!(inverted.neutral, risk.neutral);
        assert_eq!(inverted.guideline, risk.guideline);
    }

    #[test]
    fn test_default_palette_is_risk() {
        assert_eq!(Palette::default(), Palette::RISK);
    }

    #[test]
    fn test_guideline_is_dashed() {
        assert_eq!(Palette::RISK.guideline.dash, &[5, 5]);
    }

    #[test]
    fn test_hue_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&RED).unwrap(), r##""#ef4444""##);
    }
}
