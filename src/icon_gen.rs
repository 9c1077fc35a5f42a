use crate::font::{candidate_font_paths, select_font, LabelFont};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

/// The extension manifest references exactly these three sizes.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Diagonal gradient endpoints, #0078D4 → #00BCF2.
const GRADIENT_START: [u8; 3] = [0, 120, 212];
const GRADIENT_END: [u8; 3] = [0, 188, 242];

const LABEL: &str = "AG";
const LABEL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Corner radius is 20% of the edge length, truncated.
pub fn corner_radius(edge: u32) -> u32 {
    edge / 5
}

/// Rounded-rectangle membership test for pixel `(x, y)`.
///
/// A pixel is outside only if it falls in one of the four `radius × radius`
/// corner squares and its squared distance to that corner's inset circle
/// center exceeds `radius²`. Squared distances avoid any square root.
pub fn in_rounded_rect(x: u32, y: u32, edge: u32, radius: u32) -> bool {
    let (x, y) = (x as i64, y as i64);
    let (edge, radius) = (edge as i64, radius as i64);

    let (cx, cy) = if x < radius && y < radius {
        (radius, radius)
    } else if x > edge - radius && y < radius {
        (edge - radius, radius)
    } else if x < radius && y > edge - radius {
        (radius, edge - radius)
    } else if x > edge - radius && y > edge - radius {
        (edge - radius, edge - radius)
    } else {
        return true;
    };

    let (dx, dy) = (x - cx, y - cy);
    dx * dx + dy * dy <= radius * radius
}

/// Gradient color for an inside pixel.
///
/// Linear interpolation along the normalized diagonal `t = (x + y) / (2 * edge)`.
/// The red endpoints are equal, so that channel is constant; the interpolation
/// is kept in place so all three channels read the same.
pub fn gradient_color(x: u32, y: u32, edge: u32) -> Rgba<u8> {
    let t = (x + y) as f32 / (2 * edge) as f32;
    let r = (GRADIENT_START[0] as f32 + t * (GRADIENT_END[0] as f32 - GRADIENT_START[0] as f32)) as u8;
    let g = (GRADIENT_START[1] as f32 + t * (GRADIENT_END[1] as f32 - GRADIENT_START[1] as f32)) as u8;
    let b = (GRADIENT_START[2] as f32 + t * (GRADIENT_END[2] as f32 - GRADIENT_START[2] as f32)) as u8;
    Rgba([r, g, b, 255])
}

/// Render one icon tile at the given edge length.
///
/// Probes the system font paths for the label; a failed probe or load falls
/// back to the built-in bitmap font and never fails the render.
pub fn render(edge: u32) -> RgbaImage {
    let font = select_font(&candidate_font_paths(), (edge as f32 * 0.4) as u32);
    render_with_font(edge, &font)
}

/// Render one icon tile with an already-resolved font.
pub fn render_with_font(edge: u32, font: &LabelFont) -> RgbaImage {
    let mut canvas = RgbaImage::new(edge, edge);
    let radius = corner_radius(edge);

    for y in 0..edge {
        for x in 0..edge {
            if in_rounded_rect(x, y, edge, radius) {
                canvas.put_pixel(x, y, gradient_color(x, y, edge));
            }
        }
    }

    // Center the label from its rendered bounding box. `y0` compensates for
    // the gap between the layout origin and the first inked row.
    let (x0, y0, x1, y1) = font.bounding_box(LABEL);
    let dx = (edge as i32 - (x1 - x0)) / 2;
    let dy = (edge as i32 - (y1 - y0)) / 2 - y0;
    font.draw(&mut canvas, LABEL, dx, dy, LABEL_COLOR);

    canvas
}

/// Render the full icon set into `out_dir`, one `icon{N}.png` per size.
pub fn generate_icons(out_dir: &Path) -> Result<()> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    for size in ICON_SIZES {
        let canvas = render(size);
        let filename = format!("icon{size}.png");
        let path = out_dir.join(&filename);

        let mut out_file = BufWriter::new(
            File::create(&path).with_context(|| format!("Failed to create {filename}"))?,
        );
        write_png(canvas.as_raw(), &mut out_file, size)
            .with_context(|| format!("Failed to encode {filename}"))?;
        out_file.flush()?;

        println!("✓ Generated {filename}");
    }

    println!("\nIcon set complete.");
    Ok(())
}

// Encode RGBA data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
