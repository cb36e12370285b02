//! Text overlays drawn onto source frames before transitions are synthesized.

/// Injectable random choice.
pub mod chooser;
/// Built-in quotes and palettes.
pub mod quotes;
/// Text layout and rasterization.
pub mod text;

use crate::assets::font::ResolvedFont;
use crate::foundation::core::{FrameRGBA, Position, Rgb8};
use crate::foundation::error::{SlideError, SlideResult};
use chooser::{Chooser, choose};
use text::{Outline, TextPainter, TextRun};

/// Which text, if any, is drawn on every source frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Overlay {
    /// Frames are left as decoded.
    #[default]
    None,
    /// The same caption at a fixed position on every frame.
    Caption(CaptionOverlay),
    /// A random quote, centered, with a sparkle outline.
    CenteredQuote(QuoteOverlay),
    /// A random quote at a fixed position, with a sparkle outline.
    PositionedQuote(PositionedQuoteOverlay),
}

/// Static caption with a thin dark outline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CaptionOverlay {
    /// Caption text.
    pub text: String,
    /// Top-left corner of the caption's layout box.
    pub position: Position,
    /// Font size in pixels.
    pub font_size: f32,
    /// Fill color.
    pub fill: Rgb8,
    /// Outline color.
    pub outline: Rgb8,
    /// Outline width in pixels; `0` disables it.
    pub outline_width: f32,
}

impl Default for CaptionOverlay {
    fn default() -> Self {
        Self {
            text: String::new(),
            position: Position::new(10, 10),
            font_size: 50.0,
            fill: Rgb8::WHITE,
            outline: Rgb8::BLACK,
            outline_width: 1.0,
        }
    }
}

impl CaptionOverlay {
    /// Caption with the default placement and style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Random quote drawn with the "sparkle" technique.
///
/// The chosen quote is drawn four times at diagonal offsets of `sparkle_offset` pixels, each copy
/// in a random palette color, then once more at the anchor in another random palette color.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct QuoteOverlay {
    /// Candidate quotes, one picked per frame.
    pub quotes: Vec<String>,
    /// Candidate colors, one picked per drawn copy.
    pub palette: Vec<Rgb8>,
    /// Font size in pixels.
    pub font_size: f32,
    /// Diagonal offset of the four accent copies.
    pub sparkle_offset: i32,
}

impl Default for QuoteOverlay {
    fn default() -> Self {
        Self::centered()
    }
}

impl QuoteOverlay {
    /// Defaults of the centered overlay.
    pub fn centered() -> Self {
        Self {
            quotes: quotes::CENTERED_QUOTES.iter().map(|s| s.to_string()).collect(),
            palette: quotes::CENTERED_PALETTE.to_vec(),
            font_size: 50.0,
            sparkle_offset: 2,
        }
    }

    /// Defaults of the positioned overlay.
    pub fn positioned() -> Self {
        Self {
            quotes: quotes::POSITIONED_QUOTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            palette: quotes::POSITIONED_PALETTE.to_vec(),
            font_size: 90.0,
            sparkle_offset: 1,
        }
    }

    /// Offsets of the accent copies, in drawing order.
    pub fn sparkle_offsets(&self) -> [(i32, i32); 4] {
        let o = self.sparkle_offset;
        [(-o, -o), (o, o), (-o, o), (o, -o)]
    }
}

/// Quote overlay anchored at a fixed position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PositionedQuoteOverlay {
    /// Top-left corner of the main quote's layout box.
    pub position: Position,
    /// Quote list and style.
    pub quote: QuoteOverlay,
}

impl Default for PositionedQuoteOverlay {
    fn default() -> Self {
        Self {
            position: Position::new(70, 670),
            quote: QuoteOverlay::positioned(),
        }
    }
}

impl Overlay {
    /// `true` unless this is [`Overlay::None`].
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Font size the overlay draws with, if any.
    pub fn font_size(&self) -> Option<f32> {
        match self {
            Self::None => None,
            Self::Caption(c) => Some(c.font_size),
            Self::CenteredQuote(q) => Some(q.font_size),
            Self::PositionedQuote(p) => Some(p.quote.font_size),
        }
    }

    /// Override the font size of whichever overlay is configured.
    pub fn set_font_size(&mut self, size: f32) {
        match self {
            Self::None => {}
            Self::Caption(c) => c.font_size = size,
            Self::CenteredQuote(q) => q.font_size = size,
            Self::PositionedQuote(p) => p.quote.font_size = size,
        }
    }

    /// Check sizes and lists before any frame is processed.
    pub fn validate(&self) -> SlideResult<()> {
        if let Some(size) = self.font_size()
            && (!size.is_finite() || size <= 0.0)
        {
            return Err(SlideError::argument(format!(
                "overlay font size must be a positive number, got {size}"
            )));
        }
        match self {
            Self::None => Ok(()),
            Self::Caption(c) => {
                if !c.outline_width.is_finite() || c.outline_width < 0.0 {
                    return Err(SlideError::argument(
                        "caption outline width must be finite and non-negative",
                    ));
                }
                Ok(())
            }
            Self::CenteredQuote(q) => validate_quote(q),
            Self::PositionedQuote(p) => validate_quote(&p.quote),
        }
    }
}

fn validate_quote(q: &QuoteOverlay) -> SlideResult<()> {
    if q.quotes.is_empty() {
        return Err(SlideError::argument("quote overlay needs at least one quote"));
    }
    if q.palette.is_empty() {
        return Err(SlideError::argument(
            "quote overlay needs at least one palette color",
        ));
    }
    Ok(())
}

/// Draw `overlay` onto `frame`.
///
/// Quote overlays consume six picks from `chooser` per frame: the quote, the four accent colors
/// in offset order, then the main color.
pub fn apply_overlay(
    frame: &mut FrameRGBA,
    overlay: &Overlay,
    font: &ResolvedFont,
    chooser: &mut dyn Chooser,
) -> SlideResult<()> {
    match overlay {
        Overlay::None => Ok(()),
        Overlay::Caption(c) => draw_caption(frame, c, font),
        Overlay::CenteredQuote(q) => draw_quote(frame, q, None, font, chooser),
        Overlay::PositionedQuote(p) => draw_quote(frame, &p.quote, Some(p.position), font, chooser),
    }
}

fn draw_caption(frame: &mut FrameRGBA, c: &CaptionOverlay, font: &ResolvedFont) -> SlideResult<()> {
    let painter = TextPainter::new(font, c.font_size)?;
    let bbox = painter.measure(&c.text)?;
    let (x, y) = bbox.origin_for(c.position);
    painter.draw(
        frame,
        &[TextRun {
            text: &c.text,
            x,
            y,
            fill: c.fill,
            outline: Some(Outline {
                color: c.outline,
                width: c.outline_width,
            }),
        }],
    )
}

fn draw_quote(
    frame: &mut FrameRGBA,
    q: &QuoteOverlay,
    position: Option<Position>,
    font: &ResolvedFont,
    chooser: &mut dyn Chooser,
) -> SlideResult<()> {
    validate_quote(q)?;
    let missing = || SlideError::validation("quote overlay list became empty");

    let quote = choose(chooser, &q.quotes).ok_or_else(missing)?;
    let painter = TextPainter::new(font, q.font_size)?;
    let bbox = painter.measure(quote)?;
    let anchor = position.unwrap_or_else(|| bbox.centered_in(frame.width, frame.height));
    let (x, y) = bbox.origin_for(anchor);

    let mut runs = Vec::with_capacity(5);
    for (dx, dy) in q.sparkle_offsets() {
        let fill = *choose(chooser, &q.palette).ok_or_else(missing)?;
        runs.push(TextRun {
            text: quote,
            x: x + dx as f32,
            y: y + dy as f32,
            fill,
            outline: None,
        });
    }
    let fill = *choose(chooser, &q.palette).ok_or_else(missing)?;
    runs.push(TextRun {
        text: quote,
        x,
        y,
        fill,
        outline: None,
    });

    tracing::trace!(%quote, x, y, "draw quote");
    painter.draw(frame, &runs)
}

#[cfg(test)]
#[path = "../tests/unit/overlay/overlay.rs"]
mod tests;
