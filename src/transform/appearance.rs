//! Visual sizing and style tokens derived from the modal component.

use crate::block::types::{Appearance, BORDER_COLOR, BorderRadius, CustomSize, Styles};
use crate::parse::types::DocumentNode;

/// Used when the component has no bounding box dimension.
pub const DEFAULT_DIMENSION: f64 = 0.0;

/// Alias emitted for any radius outside the token table.
pub const NO_RADIUS_ALIAS: &str = "none";

/// Radius token table, keyed by the textual forms a radius may take.
const RADIUS_ALIASES: &[(&[&str], &str)] = &[
    (&["2", "2.0"], "xxs"),
    (&["4", "4.0"], "xs"),
    (&["8", "8.0"], "md"),
    (&["10", "10.0"], "3xl"),
    (&["12", "12.0"], "5xl"),
];

pub fn derive_appearance(component: &DocumentNode) -> Appearance {
    Appearance {
        width: CustomSize {
            custom: pixel_size(component.width()),
        },
        height: CustomSize {
            custom: pixel_size(component.height()),
        },
        styles: Styles {
            border_color: BORDER_COLOR.to_string(),
            border_radius: BorderRadius {
                all: format!("rounded-{}", border_radius_alias(component.corner_radius)),
            },
        },
    }
}

/// Round to the nearest whole pixel, half away from zero: `119.6` → `"120px"`.
pub fn pixel_size(value: Option<f64>) -> String {
    let rounded = value.unwrap_or(DEFAULT_DIMENSION).round();
    // Avoid "-0px" for tiny negative inputs.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}px", rounded)
}

/// Exact-match lookup of a corner radius in the token table. No interpolation.
pub fn border_radius_alias(radius: Option<f64>) -> &'static str {
    let Some(radius) = radius else {
        return NO_RADIUS_ALIAS;
    };
    let text = radius.to_string();
    RADIUS_ALIASES
        .iter()
        .find(|(forms, _)| forms.contains(&text.as_str()))
        .map(|(_, alias)| *alias)
        .unwrap_or(NO_RADIUS_ALIAS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_rounds_half_away_from_zero() {
        assert_eq!(pixel_size(Some(119.6)), "120px");
        assert_eq!(pixel_size(Some(119.4)), "119px");
        assert_eq!(pixel_size(Some(0.5)), "1px");
        assert_eq!(pixel_size(Some(200.0)), "200px");
        assert_eq!(pixel_size(Some(-0.2)), "0px");
        assert_eq!(pixel_size(None), "0px");
    }

    #[test]
    fn radius_table_hits() {
        assert_eq!(border_radius_alias(Some(2.0)), "xxs");
        assert_eq!(border_radius_alias(Some(4.0)), "xs");
        assert_eq!(border_radius_alias(Some(8.0)), "md");
        assert_eq!(border_radius_alias(Some(10.0)), "3xl");
        assert_eq!(border_radius_alias(Some(12.0)), "5xl");
    }

    #[test]
    fn radius_misses_fall_back_to_none() {
        assert_eq!(border_radius_alias(None), "none");
        assert_eq!(border_radius_alias(Some(0.0)), "none");
        assert_eq!(border_radius_alias(Some(7.0)), "none");
        assert_eq!(border_radius_alias(Some(4.5)), "none");
        assert_eq!(border_radius_alias(Some(11.99)), "none");
    }
}
