//! Graph types and data structures

use pozos_config::GraphsConfig;
use pozos_i18n::ChartLabels;
use serde::{Deserialize, Serialize};

/// Figure size in inches; the pixel size is `inches × dpi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    /// 10 × 6 in, used by most charts.
    pub const WIDE: Self = Self {
        width: 10.0,
        height: 6.0,
    };
    /// 8 × 5 in, used by the scatter and daily line charts.
    pub const COMPACT: Self = Self {
        width: 8.0,
        height: 5.0,
    };
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::WIDE
    }
}

/// Font configuration; sizes are in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 10,
        }
    }
}

/// Margin configuration, in points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    pub outer: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            outer: 10,
            x_label_area: 40,
            y_label_area: 60,
        }
    }
}

/// Grid line configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub show_x: bool,
    pub show_y: bool,
    pub color: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            show_x: true,
            show_y: true,
            color: Some("#B0B0B0".to_string()),
        }
    }
}

/// Comprehensive styling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    pub background_color: Option<String>,
    pub title_font: FontConfig,
    pub axis_font: FontConfig,
    pub label_font: FontConfig,
    pub margins: MarginConfig,
    pub grid: GridConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: Some("#FFFFFF".to_string()),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 12,
            },
            axis_font: FontConfig::default(),
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
            grid: GridConfig::default(),
        }
    }
}

impl StyleConfig {
    /// Use one font family for every text element.
    pub fn with_font_family(mut self, family: &str) -> Self {
        for font in [
            &mut self.title_font,
            &mut self.axis_font,
            &mut self.label_font,
        ] {
            font.family = family.to_string();
        }
        self
    }
}

/// Graph configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// Depth axis of the 3D charts.
    pub z_label: Option<String>,
    pub legend: Vec<String>,
    pub figure: FigureSize,
    pub dpi: u32,
    pub style: StyleConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            title: "Graph".to_string(),
            x_label: None,
            y_label: None,
            z_label: None,
            legend: Vec::new(),
            figure: FigureSize::default(),
            dpi: 100,
            style: StyleConfig::default(),
        }
    }
}

impl GraphConfig {
    /// Build the configuration of one chart from its resolved labels and the
    /// report's rendering settings.
    pub fn from_settings(labels: ChartLabels, figure: FigureSize, settings: &GraphsConfig) -> Self {
        let mut style = StyleConfig::default().with_font_family(&settings.font_family);
        style.background_color = Some(settings.background_color.clone());

        Self {
            title: labels.title,
            x_label: Some(labels.x_label),
            y_label: Some(labels.y_label),
            z_label: labels.z_label,
            legend: labels.legend,
            figure,
            dpi: settings.dpi,
            style,
        }
    }

    /// Output size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.figure.width * dpi).round() as u32,
            (self.figure.height * dpi).round() as u32,
        )
    }

    /// Convert points to pixels at the configured dpi, never below one pixel.
    pub fn px(&self, points: u32) -> u32 {
        ((f64::from(points) * f64::from(self.dpi) / 72.0).round() as u32).max(1)
    }

    /// Legend entry at `index`, or an empty string.
    pub fn legend_at(&self, index: usize) -> &str {
        self.legend.get(index).map(String::as_str).unwrap_or_default()
    }
}
