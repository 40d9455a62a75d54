//! Drawing helpers shared by the chart modules.

use crate::traits::GraphRenderer;
use crate::types::{FontConfig, GraphConfig};
use plotters::coord::cartesian::{Cartesian2d, Cartesian3d};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use pozos_common::{PozosError, Result};
use std::ops::Range;
use std::path::Path;
use tracing::info;

/// Root drawing area of a PNG chart.
pub type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// A 2D chart over `f64` axes.
pub type Chart2d<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Matplotlib-compatible named colours.
pub mod palette {
    use plotters::style::RGBColor;

    /// Default series colour (`C0`).
    pub const TAB_BLUE: RGBColor = RGBColor(31, 119, 180);
    pub const BLUE: RGBColor = RGBColor(0, 0, 255);
    pub const GREEN: RGBColor = RGBColor(0, 128, 0);
    pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
    pub const RED: RGBColor = RGBColor(255, 0, 0);
    pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
}

/// Which grid lines a 2D chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLines {
    Both,
    HorizontalOnly,
}

/// Font at the configured dpi.
pub fn font<'a>(config: &GraphConfig, font: &'a FontConfig) -> FontDesc<'a> {
    FontDesc::new(
        FontFamily::from(font.family.as_str()),
        f64::from(config.px(font.size)),
        FontStyle::Normal,
    )
}

/// Axis range covering `values` with `pad` of the span added on both sides.
///
/// No values yields `0..1`; a single distinct value is centred in a unit span.
pub fn padded_range(values: impl IntoIterator<Item = f64>, pad: f64) -> Range<f64> {
    let bounds = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    match bounds {
        None => 0.0..1.0,
        Some((lo, hi)) if hi - lo <= f64::EPSILON * hi.abs().max(1.0) => (lo - 0.5)..(hi + 0.5),
        Some((lo, hi)) => {
            let margin = (hi - lo) * pad;
            (lo - margin)..(hi + margin)
        }
    }
}

/// Open the PNG at `path` and paint the background.
pub fn open_canvas<'a, R: GraphRenderer + ?Sized>(
    renderer: &R,
    config: &GraphConfig,
    path: &'a Path,
) -> Result<Canvas<'a>> {
    let root = BitMapBackend::new(path, config.pixel_size()).into_drawing_area();
    root.fill(&renderer.get_background_color(config))?;
    Ok(root)
}

/// Start a 2D chart with the configured title, margins and label areas.
pub fn build_chart_2d<'a, 'b>(
    root: &'a Canvas<'b>,
    config: &GraphConfig,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<Chart2d<'a, 'b>> {
    let margins = &config.style.margins;
    let chart = ChartBuilder::on(root)
        .caption(&config.title, font(config, &config.style.title_font))
        .margin(config.px(margins.outer))
        .x_label_area_size(config.px(margins.x_label_area))
        .y_label_area_size(config.px(margins.y_label_area))
        .build_cartesian_2d(x_range, y_range)?;
    Ok(chart)
}

/// Draw axes, tick labels, axis titles and grid lines.
///
/// Category axes pass `blank_x_ticks` and draw their names with
/// [`draw_category_labels`].
pub fn draw_mesh<R: GraphRenderer + ?Sized>(
    renderer: &R,
    chart: &mut Chart2d<'_, '_>,
    config: &GraphConfig,
    grid: GridLines,
    blank_x_ticks: bool,
) -> Result<()> {
    let grid_color = renderer.get_grid_color(config);
    let blank = |_: &f64| String::new();

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.x_label.as_deref().unwrap_or(""))
        .y_desc(config.y_label.as_deref().unwrap_or(""))
        .label_style(font(config, &config.style.label_font))
        .axis_desc_style(font(config, &config.style.axis_font))
        .bold_line_style(grid_color.stroke_width(config.px(1) / 2 + 1))
        .light_line_style(TRANSPARENT);

    if blank_x_ticks {
        mesh.x_label_formatter(&blank);
    }

    let show_x = config.style.grid.show_x && grid == GridLines::Both;
    let show_y = config.style.grid.show_y;
    match (show_x, show_y) {
        (true, true) => mesh.draw()?,
        (false, true) => mesh.disable_x_mesh().draw()?,
        (true, false) => mesh.disable_y_mesh().draw()?,
        (false, false) => mesh.disable_mesh().draw()?,
    }
    Ok(())
}

/// Write category names centred under their x positions.
pub fn draw_category_labels(
    root: &Canvas<'_>,
    chart: &Chart2d<'_, '_>,
    config: &GraphConfig,
    labels: &[(f64, &str)],
    y_bottom: f64,
) -> Result<()> {
    let style = TextStyle::from(font(config, &config.style.label_font))
        .pos(Pos::new(HPos::Center, VPos::Top));
    let gap = config.px(4) as i32;

    for (x, label) in labels {
        let (px, py) = chart.backend_coord(&(*x, y_bottom));
        root.draw(&Text::new(label.to_string(), (px, py + gap), style.clone()))?;
    }
    Ok(())
}

/// Draw the legend box in the upper right corner.
pub fn draw_legend<'a, DB, CT>(chart: &mut ChartContext<'a, DB, CT>, config: &GraphConfig) -> Result<()>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    CT: CoordTranslate,
{
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(font(config, &config.style.label_font))
        .background_style(WHITE.mix(0.8))
        .border_style(RGBColor(204, 204, 204))
        .margin(config.px(6))
        .draw()?;
    Ok(())
}

/// Default camera of the 3D charts.
pub fn apply_3d_projection<'a, DB: DrawingBackend + 'a, X: Ranged, Y: Ranged, Z: Ranged>(
    chart: &mut ChartContext<'a, DB, Cartesian3d<X, Y, Z>>,
) {
    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.35;
        pb.scale = 0.75;
        pb.into_matrix()
    });
}

/// Write the three axis titles of a 3D chart around its plotting area.
///
/// Labels follow the data axes: `x` goes under the front edge, `y` (depth)
/// to the lower right and `z` (height) runs up the left side.
pub fn draw_3d_axis_titles(root: &Canvas<'_>, config: &GraphConfig) -> Result<()> {
    let (width, height) = config.pixel_size();
    let (width, height) = (width as i32, height as i32);
    let base = font(config, &config.style.axis_font);
    fn centered(font: FontDesc<'_>) -> TextStyle<'_> {
        TextStyle::from(font).pos(Pos::new(HPos::Center, VPos::Center))
    }

    if let Some(x_label) = &config.x_label {
        root.draw(&Text::new(
            x_label.clone(),
            (width * 2 / 5, height * 19 / 20),
            centered(base.clone()),
        ))?;
    }
    if let Some(y_label) = &config.y_label {
        root.draw(&Text::new(
            y_label.clone(),
            (width * 4 / 5, height * 17 / 20),
            centered(base.clone()),
        ))?;
    }
    if let Some(z_label) = &config.z_label {
        root.draw(&Text::new(
            z_label.clone(),
            (width / 30, height / 2),
            centered(base.transform(FontTransform::Rotate270)),
        ))?;
    }
    Ok(())
}

/// Flush the image to disk.
pub fn finish(root: &Canvas<'_>, name: &str, path: &Path) -> Result<()> {
    root.present()
        .map_err(|e| PozosError::output_write_with_source(path, "failed to write chart image", e))?;
    info!("Successfully rendered {} chart to {}", name, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range(Vec::new(), 0.05), 0.0..1.0);
        assert_eq!(padded_range(vec![2.0, 2.0], 0.05), 1.5..2.5);

        let range = padded_range(vec![0.0, 10.0, 5.0], 0.05);
        assert!((range.start + 0.5).abs() < 1e-12);
        assert!((range.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_legend_on_2d_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leyenda.png");
        let config = GraphConfig {
            dpi: 40,
            legend: vec!["Gas".to_string()],
            ..Default::default()
        };

        let root = BitMapBackend::new(&path, config.pixel_size()).into_drawing_area();
        root.fill(&WHITE).unwrap();
        {
            let mut chart = build_chart_2d(&root, &config, 0.0..1.0, 0.0..1.0).unwrap();
            chart
                .draw_series(LineSeries::new(vec![(0.0, 0.0), (1.0, 1.0)], palette::ORANGE))
                .unwrap()
                .label(config.legend_at(0))
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], palette::ORANGE));
            draw_legend(&mut chart, &config).unwrap();
        }
        finish(&root, "legend", &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_padded_range_ignores_non_finite() {
        let range = padded_range(vec![f64::NAN, 1.0, 3.0, f64::INFINITY], 0.0);
        assert_eq!(range, 1.0..3.0);
    }
}
