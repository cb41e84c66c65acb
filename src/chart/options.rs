//! Render configuration.

use serde::{Deserialize, Serialize};

use crate::processing::CoercionPolicy;

/// Sizing, styling and coercion settings shared by every chart kind.
///
/// Deserializes from a partial JSON object; missing fields take their defaults.
///
/// ```rust
/// use csv_chart_shaper::chart::RenderOptions;
/// use csv_chart_shaper::processing::CoercionPolicy;
///
/// let opts: RenderOptions = serde_json::from_str(r#"{"width": 800, "coercion": "prefix"}"#).unwrap();
/// assert_eq!(opts.width, 800);
/// assert_eq!(opts.height, 370);
/// assert_eq!(opts.coercion, CoercionPolicy::LeadingPrefix);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Plot width in pixels.
    pub width: u32,
    /// Plot height in pixels (the bar chart leaves it to the renderer).
    pub height: u32,
    /// Axis label font size for scatter and bubble plots.
    pub font_size: u32,
    /// Bubble marker size = radius value × this factor.
    pub bubble_size_scale: f64,
    /// Bubble size used when no radius column is selected.
    pub default_bubble_size: f64,
    pub coercion: CoercionPolicy,
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 370,
            font_size: 14,
            bubble_size_scale: 4.0,
            default_bubble_size: 10.0,
            coercion: CoercionPolicy::Strict,
            palette: Palette::default(),
        }
    }
}

/// Radar fill.
pub const RADAR_BACKGROUND: &str = "rgba(54, 162, 235, 0.2)";
/// Radar outline.
pub const RADAR_BORDER: &str = "rgba(54, 162, 235, 1)";
/// Area fill.
pub const AREA_BACKGROUND: &str = "rgba(255,99,132,0.3)";
/// Area outline.
pub const AREA_BORDER: &str = "rgba(255,99,132,1)";

const BASE_COLORS: [&str; 10] = [
    "#6970dd", "#fd7e14", "#dc3545", "#28a745", "#fd51e8", "#12bbb6", "#cbd725", "#9681f7", "#b3d374", "#ff9a9a",
];

/// Per-point colours for pie, treemap and waterfall charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// A palette from explicit colours. An empty list falls back to the default palette.
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    /// The colours in palette order, before any cycling.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// `n` colours, repeating the palette as often as needed.
    pub fn cycle(&self, n: usize) -> Vec<String> {
        if self.colors.is_empty() {
            return Palette::default().cycle(n);
        }
        self.colors.iter().cycle().take(n).cloned().collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: BASE_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}
