use anyhow::Context;

use crate::{error::FrostResult, raster::Raster};

/// Decode encoded image bytes (any format the `image` crate recognizes) into
/// a packed-ARGB raster.
pub fn decode_raster(bytes: &[u8]) -> FrostResult<Raster> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Raster::from_rgba8(width, height, rgba.as_raw())
}

/// Encode a raster as PNG bytes.
pub fn encode_png(raster: &Raster) -> FrostResult<Vec<u8>> {
    let rgba = raster.to_rgba8();
    let mut out = Vec::new();
    image::write_buffer_with_format(
        &mut std::io::Cursor::new(&mut out),
        &rgba,
        raster.width(),
        raster.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode png")?;
    Ok(out)
}
