use image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "icon128.png".to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    // Corner pixel should be transparent (rounded off), center opaque
    let corner = rgba_img.get_pixel(0, 0);
    let center = rgba_img.get_pixel(width / 2, height / 2);

    println!("\nCorner pixel (0, 0):");
    println!(
        "  RGBA: [{}, {}, {}, {}]",
        corner[0], corner[1], corner[2], corner[3]
    );
    println!("Center pixel ({}, {}):", width / 2, height / 2);
    println!(
        "  RGBA: [{}, {}, {}, {}]",
        center[0], center[1], center[2], center[3]
    );

    let opaque = rgba_img.pixels().filter(|p| p[3] == 255).count();
    let transparent = rgba_img.pixels().filter(|p| p[3] == 0).count();
    println!("\nOpaque pixels: {opaque}");
    println!("Transparent pixels: {transparent}");

    if corner[3] == 0 && center[3] == 255 {
        println!("\n✓ Icon looks correct");
    } else {
        println!("\n✗ Unexpected alpha layout");
        std::process::exit(1);
    }
}
