//! RGBA pixel buffers.

use crate::errors::BitmapError;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// A decoded image: `width * height` RGBA pixels in row-major order.
///
/// The buffer length is checked on construction, so every `Bitmap` holds
/// exactly `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wrap an RGBA buffer, rejecting it if its length does not match the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BitmapError> {
        let expected = expected_len(width, height)?;
        if data.len() != expected {
            return Err(BitmapError::ShapeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a bitmap filled with a single RGBA value.
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Result<Self, BitmapError> {
        let expected = expected_len(width, height)?;
        let data = pixel.iter().copied().cycle().take(expected).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.data.len() / CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable RGBA bytes. The length cannot change, so the shape invariant holds.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at (x, y), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let p = &self.data[idx..idx + CHANNELS];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Overwrite the pixel at (x, y). Returns `false` when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.data[idx..idx + CHANNELS].copy_from_slice(&pixel);
        true
    }

    /// Iterate over pixels as `[r, g, b, a]` slices.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(CHANNELS)
    }
}

/// Byte length an RGBA buffer of the given dimensions must have.
pub fn expected_len(width: u32, height: u32) -> Result<usize, BitmapError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(BitmapError::TooLarge { width, height })
}
