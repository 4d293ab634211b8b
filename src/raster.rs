use crate::error::{FrostError, FrostResult};

/// One packed ARGB color sample, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Argb8 {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb8 {
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    pub fn from_packed(p: u32) -> Self {
        Self {
            a: (p >> 24) as u8,
            r: (p >> 16) as u8,
            g: (p >> 8) as u8,
            b: p as u8,
        }
    }

    pub fn to_packed(self) -> u32 {
        (u32::from(self.a) << 24)
            | (u32::from(self.r) << 16)
            | (u32::from(self.g) << 8)
            | u32::from(self.b)
    }
}

/// A width x height grid of packed ARGB samples.
///
/// `pixels.len() == width * height` and both dimensions are >= 1; the
/// constructors enforce this, so every `Raster` in circulation is valid and
/// the filter stages never need to re-check it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Raster {
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> FrostResult<Self> {
        let expected = checked_area(width, height)?;
        if pixels.len() != expected {
            return Err(FrostError::evaluation(
                "Raster expects pixels matching width*height",
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn filled(width: u32, height: u32, px: Argb8) -> FrostResult<Self> {
        let area = checked_area(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![px.to_packed(); area],
        })
    }

    /// Build from an RGBA8 byte buffer (the layout the `image` crate produces).
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> FrostResult<Self> {
        let area = checked_area(width, height)?;
        let expected = area
            .checked_mul(4)
            .ok_or_else(|| FrostError::evaluation("raster buffer size overflow"))?;
        if bytes.len() != expected {
            return Err(FrostError::evaluation(
                "Raster::from_rgba8 expects bytes matching width*height*4",
            ));
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|px| {
                Argb8 {
                    a: px[3],
                    r: px[0],
                    g: px[1],
                    b: px[2],
                }
                .to_packed()
            })
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Flatten back into RGBA8 bytes for encoding.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &p in &self.pixels {
            let px = Argb8::from_packed(p);
            out.extend_from_slice(&[px.r, px.g, px.b, px.a]);
        }
        out
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Argb8 {
        Argb8::from_packed(self.pixels[(y * self.width + x) as usize])
    }

    // Stages build outputs whose invariants hold by construction.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            pixels,
        }
    }
}

fn checked_area(width: u32, height: u32) -> FrostResult<usize> {
    if width == 0 || height == 0 {
        return Err(FrostError::validation("Raster dimensions must be >= 1"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| FrostError::evaluation("raster buffer size overflow"))
}
