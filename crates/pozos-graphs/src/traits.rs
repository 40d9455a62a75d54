//! Graph renderer trait shared by every chart.

use crate::types::{FigureSize, GraphConfig};
use async_trait::async_trait;
use plotters::style::RGBColor;
use pozos_common::Result;
use pozos_i18n::ChartMessages;
use std::path::Path;

/// A chart that owns its prepared data and can draw itself to a PNG file.
#[async_trait]
pub trait GraphRenderer: Send + Sync {
    /// Render the chart to `path`.
    async fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Output file name inside the report directory.
    fn file_name(&self) -> &'static str;

    /// Catalogue messages holding this chart's texts.
    fn messages(&self) -> ChartMessages;

    fn figure(&self) -> FigureSize {
        FigureSize::WIDE
    }

    /// Parse a `#RRGGBB` string, falling back to black.
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        RGBColor(0, 0, 0)
    }

    /// Get background color from style config
    fn get_background_color(&self, config: &GraphConfig) -> RGBColor {
        config
            .style
            .background_color
            .as_ref()
            .map(|color| self.parse_color(color))
            .unwrap_or(RGBColor(255, 255, 255))
    }

    fn get_grid_color(&self, config: &GraphConfig) -> RGBColor {
        config
            .style
            .grid
            .color
            .as_ref()
            .map(|color| self.parse_color(color))
            .unwrap_or(RGBColor(176, 176, 176))
    }
}
