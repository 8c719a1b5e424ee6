//! String formatting for consumers that want CSS-ready values instead of
//! the structured documents. The export pipeline itself never formats;
//! these helpers read the run preferences directly.

use vartok_protocol::{ColorFormat, ExportConfig, UnitFormat};

use crate::model::RawColor;

const REM_BASE: f64 = 16.0;

/// A dimension string: `px` as-is, or `rem` (px / 16) when the run
/// preferences ask for it. Rem values keep at most five fraction digits.
pub fn format_dimension(px: f64, config: &ExportConfig) -> String {
    match config.unit {
        Some(UnitFormat::Rem) => format!("{}rem", trim_fraction(px / REM_BASE, 5)),
        _ => format!("{}px", format_number(px)),
    }
}

/// A color string per the run preference; hex when unset.
pub fn format_color(color: &RawColor, config: &ExportConfig) -> String {
    match config.color {
        Some(ColorFormat::Rgba) => rgba_value(color),
        _ => hex_value(color),
    }
}

/// `#RRGGBB`, uppercase. Alpha does not survive this form.
pub fn hex_value(color: &RawColor) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

/// `rgba(r,g,b,a)` over the normalized 0–1 channels.
pub fn rgba_value(color: &RawColor) -> String {
    format!(
        "rgba({},{},{},{})",
        format_number(color.r),
        format_number(color.g),
        format_number(color.b),
        format_number(color.a)
    )
}

fn channel(normalized: f64) -> u8 {
    (normalized * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Whole values print without a decimal point, like a JS number would.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Round to `digits` fraction digits, then drop trailing zeros.
fn trim_fraction(value: f64, digits: usize) -> String {
    let text = format!("{value:.digits$}");
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rem_config() -> ExportConfig {
        ExportConfig {
            unit: Some(UnitFormat::Rem),
            color: None,
        }
    }

    #[test]
    fn px_is_the_default_unit() {
        let config = ExportConfig::default();
        assert_eq!(format_dimension(16.0, &config), "16px");
        assert_eq!(format_dimension(7.5, &config), "7.5px");
    }

    #[test]
    fn rem_divides_by_sixteen() {
        let config = rem_config();
        assert_eq!(format_dimension(16.0, &config), "1rem");
        assert_eq!(format_dimension(24.0, &config), "1.5rem");
        assert_eq!(format_dimension(5.0, &config), "0.3125rem");
    }

    #[test]
    fn rem_rounds_to_five_fraction_digits() {
        let config = rem_config();
        // 10 / 3 / 16 = 0.2083333…
        assert_eq!(format_dimension(10.0 / 3.0, &config), "0.20833rem");
        assert_eq!(format_dimension(0.0, &config), "0rem");
    }

    #[test]
    fn hex_is_uppercase_and_drops_alpha() {
        let color = RawColor {
            r: 0.2,
            g: 0.4,
            b: 0.6,
            a: 0.5,
        };
        assert_eq!(hex_value(&color), "#336699");
    }

    #[test]
    fn hex_clamps_out_of_range_channels() {
        let color = RawColor {
            r: 1.2,
            g: -0.1,
            b: 1.0,
            a: 1.0,
        };
        assert_eq!(hex_value(&color), "#FF00FF");
    }

    #[test]
    fn rgba_keeps_normalized_channels() {
        let color = RawColor {
            r: 0.2,
            g: 0.4,
            b: 0.6,
            a: 1.0,
        };
        assert_eq!(rgba_value(&color), "rgba(0.2,0.4,0.6,1)");
    }

    #[test]
    fn color_preference_picks_the_formatter() {
        let color = RawColor {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 1.0,
        };
        let hex = ExportConfig::default();
        let rgba = ExportConfig {
            unit: None,
            color: Some(ColorFormat::Rgba),
        };
        assert_eq!(format_color(&color, &hex), "#FFFFFF");
        assert_eq!(format_color(&color, &rgba), "rgba(1,1,1,1)");
    }
}
