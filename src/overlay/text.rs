use std::fmt::Write as _;

use anyhow::Context as _;
use usvg::fontdb;

use crate::assets::font::ResolvedFont;
use crate::foundation::core::{FrameRGBA, Position, Rgb8};
use crate::foundation::error::{SlideError, SlideResult};
use crate::foundation::math::over_premul_onto_straight;

/// Layout box of a laid-out string, relative to its baseline origin.
///
/// The box spans the text's advance and line extents as reported by `usvg`, so glyph ink sits a
/// few pixels inside it. `top` is normally negative (text sits above the baseline). A string that
/// produces no glyphs (empty, whitespace, or no usable font) has a zero-sized box at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBox {
    /// Left edge of the box relative to the origin.
    pub left: f32,
    /// Top edge of the box relative to the baseline.
    pub top: f32,
    /// Box width in pixels.
    pub width: f32,
    /// Box height in pixels.
    pub height: f32,
}

impl TextBox {
    /// Baseline origin that puts the layout box's top-left corner at `top_left`.
    pub fn origin_for(&self, top_left: Position) -> (f32, f32) {
        (top_left.x as f32 - self.left, top_left.y as f32 - self.top)
    }

    /// Top-left corner that centers the layout box in a `width x height` frame.
    pub fn centered_in(&self, width: u32, height: u32) -> Position {
        let w = self.width.ceil() as i64;
        let h = self.height.ceil() as i64;
        let x = (i64::from(width) - w).div_euclid(2);
        let y = (i64::from(height) - h).div_euclid(2);
        Position::new(clamp_i32(x), clamp_i32(y))
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Stroke painted beneath a run's fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    /// Stroke color.
    pub color: Rgb8,
    /// Width of the outline outside the glyph edge, in pixels.
    pub width: f32,
}

/// One string placed at a baseline origin.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun<'a> {
    /// Text to draw.
    pub text: &'a str,
    /// Baseline origin x.
    pub x: f32,
    /// Baseline origin y.
    pub y: f32,
    /// Fill color.
    pub fill: Rgb8,
    /// Optional outline.
    pub outline: Option<Outline>,
}

/// Lays out and rasterizes text at one size with a resolved font.
///
/// Text goes through `usvg` (shaping, font selection, glyph outlines) and `resvg` (raster) into a
/// transparent layer that is then composited over the frame. Pixels outside the glyphs are left
/// untouched.
pub struct TextPainter {
    opts: usvg::Options<'static>,
    family: String,
    size: f32,
}

impl TextPainter {
    /// Create a painter for `font` at `size` pixels.
    pub fn new(font: &ResolvedFont, size: f32) -> SlideResult<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(SlideError::argument(format!(
                "font size must be a positive number, got {size}"
            )));
        }
        let opts = usvg::Options {
            fontdb: font.database(),
            font_family: font.family().to_string(),
            font_size: size,
            font_resolver: text_font_resolver(),
            ..Default::default()
        };
        Ok(Self {
            opts,
            family: font.family().to_string(),
            size,
        })
    }

    /// Font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Measure the layout box of `text` laid out at the origin.
    pub fn measure(&self, text: &str) -> SlideResult<TextBox> {
        let mut svg = svg_header(1, 1);
        self.push_run(
            &mut svg,
            &TextRun {
                text,
                x: 0.0,
                y: 0.0,
                fill: Rgb8::BLACK,
                outline: None,
            },
        );
        svg.push_str("</svg>");

        let tree = usvg::Tree::from_str(&svg, &self.opts).context("lay out text for measuring")?;
        if !tree.root().has_children() {
            return Ok(TextBox::default());
        }
        let bb = tree.root().abs_bounding_box();
        Ok(TextBox {
            left: bb.x(),
            top: bb.y(),
            width: bb.width(),
            height: bb.height(),
        })
    }

    /// Rasterize `runs` in order (later runs on top) and composite them over `frame`.
    pub fn draw(&self, frame: &mut FrameRGBA, runs: &[TextRun<'_>]) -> SlideResult<()> {
        if runs.is_empty() || frame.width == 0 || frame.height == 0 {
            return Ok(());
        }

        let mut svg = svg_header(frame.width, frame.height);
        for run in runs {
            self.push_run(&mut svg, run);
        }
        svg.push_str("</svg>");

        let tree = usvg::Tree::from_str(&svg, &self.opts).context("lay out overlay text")?;
        if !tree.root().has_children() {
            return Ok(());
        }

        let mut pixmap = resvg::tiny_skia::Pixmap::new(frame.width, frame.height)
            .ok_or_else(|| SlideError::validation("failed to allocate text layer"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        for (d, s) in frame
            .data
            .chunks_exact_mut(4)
            .zip(pixmap.data().chunks_exact(4))
        {
            let out = over_premul_onto_straight([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
        Ok(())
    }

    fn push_run(&self, svg: &mut String, run: &TextRun<'_>) {
        let _ = write!(
            svg,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}""#,
            run.x,
            run.y,
            xml_escape(&self.family),
            self.size,
            run.fill.to_hex()
        );
        if let Some(outline) = run.outline.filter(|o| o.width > 0.0) {
            // The stroke is centered on the glyph edge and the fill covers its inner half.
            let _ = write!(
                svg,
                r#" stroke="{}" stroke-width="{}" stroke-linejoin="round" paint-order="stroke""#,
                outline.color.to_hex(),
                outline.width * 2.0
            );
        }
        let _ = write!(svg, ">{}</text>", xml_escape(run.text));
    }
}

fn svg_header(width: u32, height: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )
}

pub(crate) fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn text_font_resolver() -> usvg::FontResolver<'static> {
    usvg::FontResolver {
        select_font: Box::new(|font, db| {
            let mut families = Vec::<fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => fontdb::Family::Name(s),
                });
            }
            families.push(fontdb::Family::SansSerif);
            families.push(fontdb::Family::Serif);
            families.push(fontdb::Family::Monospace);

            let style = match font.style() {
                usvg::FontStyle::Normal => fontdb::Style::Normal,
                usvg::FontStyle::Italic => fontdb::Style::Italic,
                usvg::FontStyle::Oblique => fontdb::Style::Oblique,
            };

            let query = fontdb::Query {
                families: &families,
                weight: fontdb::Weight(font.weight()),
                stretch: fontdb::Stretch::Normal,
                style,
            };

            if let Some(id) = db.query(&query) {
                return Some(id);
            }
            db.faces().next().map(|f| f.id)
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/text.rs"]
mod tests;
