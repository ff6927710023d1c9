//! PNG export with embedded viewport metadata (tEXt chunks).

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use panbrot_core::ViewportState;

use crate::raster::{Framebuffer, RasterTarget};

/// Metadata embedded in an exported PNG so a view can be recreated later.
pub struct ExportMetadata {
    pub viewport: ViewportState,
    pub max_iterations: u32,
}

/// Write a framebuffer as a PNG file with embedded viewport metadata.
///
/// Uses the `png` crate directly to inject custom tEXt chunks readable by
/// exiftool and most image viewers.
pub fn export_png(frame: &Framebuffer, path: &Path, metadata: &ExportMetadata) -> crate::Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);

    let (width, height) = (frame.width(), frame.height());
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    for (key, value) in metadata_pairs(metadata, width, height) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(frame.as_rgba())?;

    debug!("exported PNG {}x{} to {}", width, height, path.display());
    Ok(())
}

fn metadata_pairs(meta: &ExportMetadata, width: u32, height: u32) -> Vec<(String, String)> {
    vec![
        ("Software".into(), "panbrot".into()),
        ("panbrot.Zoom".into(), format!("{}", meta.viewport.zoom)),
        ("panbrot.OffsetX".into(), format!("{}", meta.viewport.offset_x)),
        ("panbrot.OffsetY".into(), format!("{}", meta.viewport.offset_y)),
        (
            "panbrot.MaxIterations".into(),
            meta.max_iterations.to_string(),
        ),
        ("panbrot.Resolution".into(), format!("{width}x{height}")),
    ]
}
