//! Bar chart rendering: plotters draws SVG into memory, resvg rasterises it to PNG.

use std::sync::{Arc, OnceLock};

use plotters::coord::Shift;
use plotters::prelude::*;
use resvg::tiny_skia;
use resvg::usvg::{fontdb, Options, Tree};
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::model::Distribution;

/// 8 x 5 at 150 DPI
pub const CHART_WIDTH: u32 = 1200;
pub const CHART_HEIGHT: u32 = 750;

pub const CHART_TITLE: &str = "Department Distribution";
pub const X_AXIS_LABEL: &str = "Department";
pub const Y_AXIS_LABEL: &str = "Count of Employees";

const FONT_FAMILY: &str = "sans-serif";
const EMBEDDED_FONT_FAMILY: &str = "DejaVu Sans";
const EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Render one bar per label, in distribution order, as PNG bytes
pub fn render_bar_chart(distribution: &Distribution) -> Result<Vec<u8>> {
    let svg = render_svg(distribution)?;
    let png = rasterize(&svg)?;
    debug!(bars = distribution.len(), bytes = png.len(), "rendered chart");
    Ok(png)
}

/// Draw the chart as an SVG document.
///
/// The drawing area borrows `svg` for the whole inner scope and is dropped
/// before the buffer is handed back, whether drawing succeeded or not.
pub fn render_svg(distribution: &Distribution) -> Result<String> {
    let labels: Vec<&str> = distribution.labels().collect();
    let counts: Vec<u32> = distribution
        .iter()
        .map(|(_, count)| u32::try_from(count).unwrap_or(u32::MAX))
        .collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        draw_bars(&root, &labels, &counts).map_err(render_error)?;
        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

fn draw_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    labels: &[&str],
    counts: &[u32],
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    // An empty distribution still gets one empty slot so the axes have a range
    let segments = labels.len().max(1) as u32;
    let max_count = counts.iter().copied().max().unwrap_or(0);
    let y_top = max_count.saturating_add(max_count / 10).saturating_add(1);

    let mut chart = ChartBuilder::on(root)
        .caption(CHART_TITLE, (FONT_FAMILY, 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d((0u32..segments).into_segmented(), 0u32..y_top)?;

    let label_for = |value: &SegmentValue<u32>| match value {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).map(|s| s.to_string()).unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(segments as usize)
        .x_label_formatter(&label_for)
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .label_style((FONT_FAMILY, 18))
        .axis_desc_style((FONT_FAMILY, 22))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.filled())
            .margin(12)
            .data(counts.iter().enumerate().map(|(i, count)| (i as u32, *count))),
    )?;

    Ok(())
}

/// Font set used for chart text: only the embedded face, so output does
/// not depend on the fonts installed on the host.
pub fn chart_fonts() -> Arc<fontdb::Database> {
    static FONTS: OnceLock<Arc<fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut fontdb = fontdb::Database::new();
            fontdb.load_font_data(EMBEDDED_FONT.to_vec());
            fontdb.set_sans_serif_family(EMBEDDED_FONT_FAMILY);
            Arc::new(fontdb)
        })
        .clone()
}

/// Rasterise an SVG document to PNG bytes on a white background
pub fn rasterize(svg: &str) -> Result<Vec<u8>> {
    let mut options = Options::default();
    options.font_family = EMBEDDED_FONT_FAMILY.to_string();
    options.fontdb = chart_fonts();

    let tree = Tree::from_str(svg, &options).map_err(render_error)?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ReportError::Render(format!("invalid canvas size {}x{}", width, height)))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(render_error)
}

fn render_error<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Render(err.to_string())
}
