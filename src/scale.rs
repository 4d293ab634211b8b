use crate::raster::{Argb8, Raster};

/// Resize with bilinear interpolation. Target dimensions are coerced to >= 1;
/// a same-size call returns the input unchanged.
pub fn scale(src: &Raster, target_width: u32, target_height: u32) -> Raster {
    let tw = target_width.max(1);
    let th = target_height.max(1);
    let sw = src.width();
    let sh = src.height();
    if tw == sw && th == sh {
        return src.clone();
    }

    let x_ratio = sw as f32 / tw as f32;
    let y_ratio = sh as f32 / th as f32;
    let pix = src.pixels();

    let mut out = Vec::with_capacity((tw as usize) * (th as usize));
    for y in 0..th {
        // Pixel-center mapping; negative lobes at the top/left edge clamp to 0.
        let sy = ((y as f32 + 0.5) * y_ratio - 0.5).max(0.0);
        let y0 = (sy as u32).min(sh - 1);
        let y1 = (y0 + 1).min(sh - 1);
        let fy = sy - y0 as f32;

        for x in 0..tw {
            let sx = ((x as f32 + 0.5) * x_ratio - 0.5).max(0.0);
            let x0 = (sx as u32).min(sw - 1);
            let x1 = (x0 + 1).min(sw - 1);
            let fx = sx - x0 as f32;

            let p00 = Argb8::from_packed(pix[(y0 * sw + x0) as usize]);
            let p10 = Argb8::from_packed(pix[(y0 * sw + x1) as usize]);
            let p01 = Argb8::from_packed(pix[(y1 * sw + x0) as usize]);
            let p11 = Argb8::from_packed(pix[(y1 * sw + x1) as usize]);

            out.push(
                Argb8 {
                    a: blend(p00.a, p10.a, p01.a, p11.a, fx, fy),
                    r: blend(p00.r, p10.r, p01.r, p11.r, fx, fy),
                    g: blend(p00.g, p10.g, p01.g, p11.g, fx, fy),
                    b: blend(p00.b, p10.b, p01.b, p11.b, fx, fy),
                }
                .to_packed(),
            );
        }
    }

    Raster::from_parts(tw, th, out)
}

fn blend(c00: u8, c10: u8, c01: u8, c11: u8, fx: f32, fy: f32) -> u8 {
    let top = f32::from(c00) + (f32::from(c10) - f32::from(c00)) * fx;
    let bottom = f32::from(c01) + (f32::from(c11) - f32::from(c01)) * fx;
    let v = top + (bottom - top) * fy;
    v.round().clamp(0.0, 255.0) as u8
}
