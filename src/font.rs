//! Font selection and label drawing for the icon text.
//!
//! Fonts are resolved by probing an ordered list of well-known system font
//! paths; the first path that exists on disk wins. If no candidate exists, or
//! the chosen file fails to load as a TrueType font, rendering silently falls
//! back to a built-in 5×7 bitmap font that ignores the requested pixel size.

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::path::PathBuf;

/// A text bounding box `(x0, y0, x1, y1)` for a label laid out at the origin.
pub type BoundingBox = (i32, i32, i32, i32);

/// Built-in glyphs are 5 columns × 7 rows, one bit per pixel.
const BUILTIN_GLYPH_WIDTH: i32 = 5;
const BUILTIN_GLYPH_HEIGHT: i32 = 7;
const BUILTIN_GLYPH_SPACING: i32 = 1;

/// A font handle usable for measuring and drawing the icon label.
pub enum LabelFont {
    /// A TrueType font loaded from disk, rasterized at a fixed scale.
    Truetype { font: Font<'static>, scale: Scale },
    /// The built-in bitmap font. Fixed cell size, requested size is ignored.
    Builtin,
}

/// Ordered candidate font paths, most preferred first.
///
/// The Windows entries match the paths the extension's icon was originally
/// produced with; the Linux and macOS entries cover the same role on the
/// other desktop platforms.
pub fn candidate_font_paths() -> Vec<PathBuf> {
    [
        "C:/Windows/Fonts/segoeui.ttf",
        "C:/Windows/Fonts/arial.ttf",
        "C:/Windows/Fonts/msyh.ttc",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "/Library/Fonts/Arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// Resolve a font for the given pixel size.
///
/// Probes `candidates` in order and takes the first path that exists. Any
/// failure past that point (unreadable file, unparsable font data) degrades
/// to [`LabelFont::Builtin`] rather than surfacing an error.
pub fn select_font(candidates: &[PathBuf], size_px: u32) -> LabelFont {
    let Some(path) = candidates.iter().find(|p| p.exists()) else {
        return LabelFont::Builtin;
    };

    match std::fs::read(path).ok().and_then(Font::try_from_vec) {
        Some(font) => LabelFont::Truetype {
            font,
            scale: Scale::uniform(size_px as f32),
        },
        None => LabelFont::Builtin,
    }
}

impl LabelFont {
    pub fn is_builtin(&self) -> bool {
        matches!(self, LabelFont::Builtin)
    }

    /// Bounding box of `text` laid out at the origin, as `(x0, y0, x1, y1)`.
    ///
    /// For TrueType fonts the origin is the top-left of the layout line (the
    /// baseline sits at the font's ascent), so `y0` is the gap between the
    /// line top and the first inked row.
    pub fn bounding_box(&self, text: &str) -> BoundingBox {
        match self {
            LabelFont::Truetype { font, scale } => {
                let ascent = font.v_metrics(*scale).ascent;
                let mut bounds: Option<BoundingBox> = None;
                for glyph in font.layout(text, *scale, point(0.0, ascent)) {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        bounds = Some(match bounds {
                            None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                            Some((x0, y0, x1, y1)) => (
                                x0.min(bb.min.x),
                                y0.min(bb.min.y),
                                x1.max(bb.max.x),
                                y1.max(bb.max.y),
                            ),
                        });
                    }
                }
                bounds.unwrap_or((0, 0, 0, 0))
            }
            LabelFont::Builtin => {
                let n = text.chars().count() as i32;
                let width = if n == 0 {
                    0
                } else {
                    n * (BUILTIN_GLYPH_WIDTH + BUILTIN_GLYPH_SPACING) - BUILTIN_GLYPH_SPACING
                };
                (0, 0, width, BUILTIN_GLYPH_HEIGHT)
            }
        }
    }

    /// Draw `text` onto `canvas` with its layout origin at `(dx, dy)`.
    ///
    /// TrueType glyphs are composited by coverage so edges stay smooth against
    /// the background; the bitmap fallback writes fully opaque pixels. Pixels
    /// falling outside the canvas are skipped.
    pub fn draw(&self, canvas: &mut RgbaImage, text: &str, dx: i32, dy: i32, color: Rgba<u8>) {
        match self {
            LabelFont::Truetype { font, scale } => {
                let ascent = font.v_metrics(*scale).ascent;
                for glyph in font.layout(text, *scale, point(0.0, ascent)) {
                    let Some(bb) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|gx, gy, coverage| {
                        let px = dx + bb.min.x + gx as i32;
                        let py = dy + bb.min.y + gy as i32;
                        if coverage > 0.0 && in_canvas(canvas, px, py) {
                            blend_pixel(canvas, px as u32, py as u32, color, coverage);
                        }
                    });
                }
            }
            LabelFont::Builtin => {
                for (i, ch) in text.chars().enumerate() {
                    let Some(rows) = builtin_glyph(ch) else {
                        continue;
                    };
                    let left = dx + i as i32 * (BUILTIN_GLYPH_WIDTH + BUILTIN_GLYPH_SPACING);
                    for (row, bits) in rows.iter().enumerate() {
                        for col in 0..BUILTIN_GLYPH_WIDTH {
                            if bits >> (BUILTIN_GLYPH_WIDTH - 1 - col) & 1 == 1 {
                                let px = left + col;
                                let py = dy + row as i32;
                                if in_canvas(canvas, px, py) {
                                    canvas.put_pixel(px as u32, py as u32, color);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn in_canvas(canvas: &RgbaImage, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height()
}

/// Composite `color` over the existing pixel weighted by glyph coverage.
fn blend_pixel(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
    let alpha = (coverage * 255.0).round() as u16;
    let pixel = canvas.get_pixel_mut(x, y);
    for c in 0..3 {
        pixel[c] = ((alpha * color[c] as u16 + (255 - alpha) * pixel[c] as u16) / 255) as u8;
    }
    pixel[3] = pixel[3].max(alpha as u8);
}

/// Bit rows for the built-in glyphs. Only the characters the icon label needs
/// are defined; anything else renders as a blank cell.
fn builtin_glyph(ch: char) -> Option<[u8; 7]> {
    match ch {
        'A' => Some([
            0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001,
        ]),
        'G' => Some([
            0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110,
        ]),
        _ => None,
    }
}
