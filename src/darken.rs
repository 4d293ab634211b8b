use crate::raster::{Argb8, Raster};

/// Source-over composite of a full-canvas opaque-black layer at `alpha` on
/// top of the raster. Each color channel becomes `round(c * (1 - alpha))`;
/// the alpha channel is left unchanged, so an opaque input stays opaque.
pub fn darken(src: &Raster, alpha: f32) -> Raster {
    let alpha = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if alpha <= 0.0 {
        return src.clone();
    }

    let keep = 1.0 - alpha;
    let pixels = src
        .pixels()
        .iter()
        .map(|&p| {
            let px = Argb8::from_packed(p);
            Argb8 {
                a: px.a,
                r: shade(px.r, keep),
                g: shade(px.g, keep),
                b: shade(px.b, keep),
            }
            .to_packed()
        })
        .collect();

    Raster::from_parts(src.width(), src.height(), pixels)
}

fn shade(c: u8, keep: f32) -> u8 {
    (f32::from(c) * keep).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_0_is_identity() {
        let src = Raster::new(2, 1, vec![0x8001_0203, 0xfffe_fdfc]).unwrap();
        assert_eq!(darken(&src, 0.0), src);
    }

    #[test]
    fn alpha_1_blacks_out_rgb_and_keeps_alpha() {
        let src = Raster::filled(3, 3, Argb8::opaque(200, 100, 50)).unwrap();
        let out = darken(&src, 1.0);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(out.pixel(x, y), Argb8::opaque(0, 0, 0));
            }
        }
    }

    #[test]
    fn half_alpha_rounds_each_channel() {
        let src = Raster::filled(
            1,
            1,
            Argb8 {
                a: 255,
                r: 10,
                g: 20,
                b: 30,
            },
        )
        .unwrap();
        let out = darken(&src, 0.5);
        assert_eq!(
            out.pixel(0, 0),
            Argb8 {
                a: 255,
                r: 5,
                g: 10,
                b: 15
            }
        );
    }

    #[test]
    fn translucent_alpha_survives_darkening() {
        let src = Raster::filled(
            2,
            2,
            Argb8 {
                a: 42,
                r: 255,
                g: 255,
                b: 255,
            },
        )
        .unwrap();
        let out = darken(&src, 0.18);
        assert_eq!(out.pixel(1, 1).a, 42);
        assert_eq!(out.pixel(1, 1).r, 209); // round(255 * 0.82)
    }

    #[test]
    fn out_of_range_alpha_is_clamped() {
        let src = Raster::filled(1, 1, Argb8::opaque(100, 100, 100)).unwrap();
        assert_eq!(darken(&src, -2.0), src);
        assert_eq!(
            darken(&src, 7.5).pixel(0, 0),
            Argb8::opaque(0, 0, 0)
        );
        assert_eq!(darken(&src, f32::NAN), src);
    }

    #[test]
    fn input_raster_is_not_mutated() {
        let src = Raster::filled(2, 2, Argb8::opaque(80, 90, 100)).unwrap();
        let before = src.clone();
        let _ = darken(&src, 0.5);
        assert_eq!(src, before);
    }
}
