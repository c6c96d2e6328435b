//! Horizontal bar chart encoded as PNG.
//!
//! The most frequent word is drawn at the top. Bar length is proportional to
//! the count and bar colour follows the viridis gradient by rank: bar `i` of
//! `k` takes the colour at `i / k`. Every bar carries its label on the left
//! and its count at the tip. Tables too long for the configured height
//! stretch the canvas downwards.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageResult, Rgba, RgbaImage};

use super::font::{self, GLYPH_HEIGHT};
use super::viridis;
use super::{RenderedArtifact, Renderer};
use crate::frequency::FrequencyTable;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 1000;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 700;

const MIN_WIDTH: u32 = 240;
const MIN_HEIGHT: u32 = 160;
const MAX_SIDE: u32 = 8192;

const TOP_MARGIN: u32 = 60;
const BOTTOM_MARGIN: u32 = 40;
/// Smallest row pitch that still fits a scale-1 label.
const MIN_SLOT: u32 = GLYPH_HEIGHT + 2;

const TITLE: &str = "Palabras más frecuentes";
const AXIS_LABEL: &str = "Frecuencia";
const EMPTY_LABEL: &str = "no data";

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const INK: Rgba<u8> = Rgba([33, 33, 33, 255]);
const GRID: Rgba<u8> = Rgba([200, 200, 200, 255]);

/// 1x1 transparent PNG returned when encoding fails.
const FALLBACK_PNG: [u8; 68] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x60,
    0x00, 0x02, 0x00, 0x00, 0x05, 0x00, 0x01, 0x7a, 0x5e, 0xab, 0x3f, 0x00, 0x00, 0x00, 0x00,
    0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// PNG bar chart renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Pixel geometry of the plot area.
struct Layout {
    plot_left: u32,
    plot_right: u32,
    plot_top: u32,
    plot_bottom: u32,
    /// Bars actually drawn, never more than the table holds.
    rows: usize,
    /// Vertical pitch per bar.
    slot: u32,
    scale: u32,
}

impl ChartRenderer {
    /// Renderer with the given canvas size, clamped to a usable range.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width: width.clamp(MIN_WIDTH, MAX_SIDE),
            height: height.clamp(MIN_HEIGHT, MAX_SIDE),
        }
    }

    /// Canvas `(width, height)` in pixels.
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Draw the chart and encode it as PNG.
    ///
    /// Falls back to a 1x1 transparent PNG if encoding fails.
    #[tracing::instrument(skip_all, fields(entries = table.len(), width = self.width, height = self.height))]
    pub fn render_png(&self, table: &FrequencyTable) -> Vec<u8> {
        png_or_fallback(&self.draw(table))
    }

    /// Canvas height for a table of `entries` rows.
    ///
    /// The configured height is a floor. Long tables grow the canvas so each
    /// bar keeps room for a label, up to 8192 pixels.
    pub fn canvas_height(&self, entries: usize) -> u32 {
        let rows = u32::try_from(entries).unwrap_or(u32::MAX);
        let needed = rows
            .saturating_mul(MIN_SLOT)
            .saturating_add(TOP_MARGIN + BOTTOM_MARGIN);
        self.height.max(needed.min(MAX_SIDE))
    }

    /// Draw the chart onto a fresh canvas.
    ///
    /// If the table is too long even for the tallest canvas, the
    /// lowest-ranked entries are left out and a warning is logged.
    pub fn draw(&self, table: &FrequencyTable) -> RgbaImage {
        let height = self.canvas_height(table.len());
        let mut canvas = RgbaImage::from_pixel(self.width, height, BACKGROUND);

        let title_scale = if self.width >= 600 { 3 } else { 2 };
        let title_width = font::text_width(TITLE, title_scale);
        font::draw_text(
            &mut canvas,
            centered(self.width, title_width),
            16,
            TITLE,
            title_scale,
            INK,
        );

        let layout = self.layout(table, height);
        draw_grid(&mut canvas, &layout);

        let axis_width = font::text_width(AXIS_LABEL, 2);
        font::draw_text(
            &mut canvas,
            i64::from(layout.plot_left)
                + centered(layout.plot_right - layout.plot_left, axis_width),
            i64::from(layout.plot_bottom) + 12,
            AXIS_LABEL,
            2,
            INK,
        );

        let Some(max_count) = table.max_count().filter(|&m| m > 0) else {
            let empty_width = font::text_width(EMPTY_LABEL, 2);
            font::draw_text(
                &mut canvas,
                i64::from(layout.plot_left)
                    + centered(layout.plot_right - layout.plot_left, empty_width),
                i64::from((layout.plot_top + layout.plot_bottom) / 2),
                EMPTY_LABEL,
                2,
                INK,
            );
            return canvas;
        };

        if layout.rows < table.len() {
            tracing::warn!(
                entries = table.len(),
                drawn = layout.rows,
                "chart too tall, dropping lowest-ranked bars"
            );
        }

        let total = layout.rows;
        let slot = layout.slot;
        let plot_width = layout.plot_right - layout.plot_left;
        let bar_height = (slot * 4 / 5).max(1);
        let glyph_height = GLYPH_HEIGHT * layout.scale;
        let label_room = layout.plot_left.saturating_sub(16);

        for (rank, entry) in table.entries()[..total].iter().enumerate() {
            let top = layout.plot_top + rank as u32 * slot + slot.saturating_sub(bar_height) / 2;
            let length = ((entry.count as f64 / max_count as f64) * f64::from(plot_width))
                .round()
                .max(1.0) as u32;
            let [r, g, b] = viridis::for_rank(rank, total);
            fill_rect(
                &mut canvas,
                layout.plot_left,
                top,
                length,
                bar_height,
                Rgba([r, g, b, 255]),
            );

            let text_y = i64::from(top + bar_height / 2) - i64::from(glyph_height / 2);

            let label = fit_label(&entry.token, label_room, layout.scale);
            let label_width = font::text_width(&label, layout.scale);
            font::draw_text(
                &mut canvas,
                i64::from(layout.plot_left) - 8 - i64::from(label_width),
                text_y,
                &label,
                layout.scale,
                INK,
            );

            font::draw_text(
                &mut canvas,
                i64::from(layout.plot_left + length) + 6,
                text_y,
                &entry.count.to_string(),
                layout.scale,
                INK,
            );
        }

        canvas
    }

    fn layout(&self, table: &FrequencyTable, height: u32) -> Layout {
        let plot_top = TOP_MARGIN.min(height / 4);
        let plot_bottom = height.saturating_sub(BOTTOM_MARGIN).max(plot_top + 1);
        let plot_height = plot_bottom - plot_top;

        let capacity = usize::try_from((plot_height / MIN_SLOT).max(1)).unwrap_or(usize::MAX);
        let rows = table.len().min(capacity);
        let slot = if rows == 0 {
            plot_height
        } else {
            plot_height / rows as u32
        };
        let scale = if slot >= 2 * GLYPH_HEIGHT + 4 { 2 } else { 1 };

        let widest = table.entries()[..rows]
            .iter()
            .map(|e| font::text_width(&e.token, scale))
            .max()
            .unwrap_or(0);
        let plot_left = (widest + 24).clamp(40, self.width / 3);

        let count_room = font::text_width(&table.max_count().unwrap_or(0).to_string(), scale) + 24;
        let plot_right = self
            .width
            .saturating_sub(count_room.max(40))
            .max(plot_left + 1);

        Layout {
            plot_left,
            plot_right,
            plot_top,
            plot_bottom,
            rows,
            slot,
            scale,
        }
    }
}

impl Renderer for ChartRenderer {
    fn render(&self, table: &FrequencyTable) -> RenderedArtifact {
        let canvas = self.draw(table);
        RenderedArtifact::Image {
            png: png_or_fallback(&canvas),
            width: canvas.width(),
            height: canvas.height(),
        }
    }
}

fn png_or_fallback(canvas: &RgbaImage) -> Vec<u8> {
    match encode_png(canvas) {
        Ok(png) => png,
        Err(e) => {
            tracing::warn!(error = %e, "PNG encoding failed, returning blank image");
            FALLBACK_PNG.to_vec()
        }
    }
}

fn encode_png(canvas: &RgbaImage) -> ImageResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    PngEncoder::new(&mut buf).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgba8,
    )?;
    Ok(buf.into_inner())
}

fn centered(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)) / 2
}

/// Truncate a label so it fits in `room` pixels, marking the cut with `.`.
fn fit_label(token: &str, room: u32, scale: u32) -> String {
    if font::text_width(token, scale) <= room {
        return token.to_string();
    }
    let mut label: String = token.chars().collect();
    while !label.is_empty() && font::text_width(&format!("{label}."), scale) > room {
        label.pop();
    }
    format!("{label}.")
}

fn fill_rect(canvas: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let x_end = x.saturating_add(width).min(canvas.width());
    let y_end = y.saturating_add(height).min(canvas.height());
    for py in y..y_end {
        for px in x..x_end {
            canvas.put_pixel(px, py, color);
        }
    }
}

/// Axis line plus dashed vertical grid at quarters of the plot width.
fn draw_grid(canvas: &mut RgbaImage, layout: &Layout) {
    let plot_width = layout.plot_right - layout.plot_left;
    for quarter in 1..=4 {
        let x = layout.plot_left + plot_width * quarter / 4;
        if x >= canvas.width() {
            continue;
        }
        for y in (layout.plot_top..layout.plot_bottom).filter(|y| (y / 4) % 2 == 0) {
            canvas.put_pixel(x, y, GRID);
        }
    }
    let axis_height = layout.plot_bottom - layout.plot_top;
    fill_rect(canvas, layout.plot_left, layout.plot_top, 1, axis_height, INK);
    fill_rect(canvas, layout.plot_left, layout.plot_bottom, plot_width, 1, INK);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::top_frequent;
    use crate::tokenize::tokenize;
    use std::collections::HashSet;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn sample_table() -> FrequencyTable {
        let tokens = tokenize("salud salud salud digital digital pacientes hospital");
        top_frequent(&tokens, &HashSet::new(), 10, 2)
    }

    #[test]
    fn produces_png_with_requested_size() {
        let png = ChartRenderer::with_size(640, 480).render_png(&sample_table());
        assert_eq!(&png[..8], &PNG_SIGNATURE);
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (640, 480));
    }

    #[test]
    fn empty_table_still_renders() {
        let png = ChartRenderer::default().render_png(&FrequencyTable::new());
        assert_eq!(&png[..8], &PNG_SIGNATURE);
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn fallback_png_is_valid() {
        let decoded = image::load_from_memory(&FALLBACK_PNG).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1, 1));
    }

    #[test]
    fn top_bar_uses_gradient_start() {
        let renderer = ChartRenderer::default();
        let table = sample_table();
        let canvas = renderer.draw(&table);
        let layout = renderer.layout(&table, canvas.height());
        let pixel = canvas.get_pixel(layout.plot_left + 5, layout.plot_top + layout.slot / 2);
        let [r, g, b] = viridis::at(0.0);
        assert_eq!(pixel, &Rgba([r, g, b, 255]));
    }

    #[test]
    fn bar_length_proportional_to_count() {
        let renderer = ChartRenderer::default();
        let table = sample_table();
        let canvas = renderer.draw(&table);
        let layout = renderer.layout(&table, canvas.height());
        let slot = layout.slot;
        let plot_width = layout.plot_right - layout.plot_left;

        let bar_end = |rank: u32| {
            let y = layout.plot_top + rank * slot + slot / 2;
            let [r, g, b] = viridis::for_rank(rank as usize, table.len());
            (layout.plot_left..canvas.width())
                .take_while(|&x| canvas.get_pixel(x, y) == &Rgba([r, g, b, 255]))
                .count() as u32
        };

        // salud = 3 (full width), pacientes = 1 (a third).
        let full = bar_end(0);
        let third = bar_end(2);
        assert!(full.abs_diff(plot_width) <= 1);
        assert!(third.abs_diff(plot_width / 3) <= 2);
    }

    #[test]
    fn output_is_deterministic() {
        let table = sample_table();
        let renderer = ChartRenderer::default();
        assert_eq!(renderer.render_png(&table), renderer.render_png(&table));
    }

    #[test]
    fn sizes_are_clamped() {
        assert_eq!(ChartRenderer::with_size(1, 1).size(), (MIN_WIDTH, MIN_HEIGHT));
        assert_eq!(
            ChartRenderer::with_size(100_000, 100_000).size(),
            (MAX_SIDE, MAX_SIDE)
        );
    }

    fn uniform_table(entries: usize) -> FrequencyTable {
        let tokens: Vec<String> = (0..entries).map(|i| format!("termino{i:04}")).collect();
        top_frequent(&tokens, &HashSet::new(), entries, 2)
    }

    #[test]
    fn long_table_gets_one_row_per_entry() {
        let renderer = ChartRenderer::default();
        let table = uniform_table(700);
        let canvas = renderer.draw(&table);
        assert!(canvas.height() > DEFAULT_HEIGHT);
        assert!(canvas.height() <= MAX_SIDE);

        let layout = renderer.layout(&table, canvas.height());
        assert_eq!(layout.rows, 700);
        assert!(layout.slot >= MIN_SLOT);

        // All counts are equal, so every bar spans the full plot width.
        let x = layout.plot_left + 5;
        let mut bar_rows = 0;
        for rank in 0..layout.rows {
            let [r, g, b] = viridis::for_rank(rank, layout.rows);
            let colour = Rgba([r, g, b, 255]);
            let row_top = layout.plot_top + rank as u32 * layout.slot;
            if canvas.get_pixel(x, row_top + layout.slot / 2) == &colour {
                bar_rows += 1;
            }
            assert_ne!(canvas.get_pixel(x, row_top), &colour, "rows {rank} and above merge");
        }
        assert_eq!(bar_rows, table.len());
    }

    #[test]
    fn oversized_table_is_capped_at_max_canvas() {
        let renderer = ChartRenderer::default();
        let table = uniform_table(2000);
        let canvas = renderer.draw(&table);
        assert_eq!(canvas.height(), MAX_SIDE);

        let layout = renderer.layout(&table, canvas.height());
        assert!(layout.rows < table.len());
        assert!(layout.slot >= MIN_SLOT);
        assert!(layout.plot_top + layout.rows as u32 * layout.slot <= layout.plot_bottom);
    }

    #[test]
    fn artifact_reports_drawn_size() {
        let artifact = ChartRenderer::default().render(&uniform_table(700));
        let RenderedArtifact::Image { png, width, height } = artifact else {
            panic!("chart renders an image");
        };
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (width, height));
        assert!(height > DEFAULT_HEIGHT);
    }

    #[test]
    fn long_labels_are_truncated() {
        let label = fit_label("electroencefalografista", 60, 2);
        assert!(label.ends_with('.'));
        assert!(font::text_width(&label, 2) <= 60);
        assert_eq!(fit_label("sol", 60, 2), "sol");
    }
}
