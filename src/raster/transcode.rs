use std::io::Cursor;

use crate::foundation::error::{SlideloomError, SlideloomResult};

/// Byte length of the [`RawBitmap`] header: width and height as `u32` LE.
const RAW_HEADER_LEN: usize = 8;

/// Narrow capability boundary for byte transcoding.
///
/// The pipeline only ever hands raw exported bytes to a transcoder and gets
/// standard raster bytes (PNG) back; where the transcoding actually runs is
/// an implementation concern. [`crate::WorkerTranscoder`] runs it on an
/// isolated worker thread, [`PngTranscoder`] in-process.
pub trait ByteTranscoder {
    /// Transcode one raw bitmap payload into PNG bytes.
    fn transcode(&mut self, bytes: &[u8]) -> SlideloomResult<Vec<u8>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// The raw interchange layout produced by container export.
///
/// Layout: `width: u32 LE`, `height: u32 LE`, then exactly
/// `width * height * 4` tightly packed RGBA8 bytes.
pub struct RawBitmap {
    /// Width in pixels, non-zero.
    pub width: u32,
    /// Height in pixels, non-zero.
    pub height: u32,
    /// Row-major RGBA8 pixel bytes.
    pub rgba8: Vec<u8>,
}

impl RawBitmap {
    /// Build a raw bitmap, validating dimensions against the payload length.
    pub fn new(width: u32, height: u32, rgba8: Vec<u8>) -> SlideloomResult<Self> {
        if width == 0 || height == 0 {
            return Err(SlideloomError::validation(
                "raw bitmap dimensions must be non-zero",
            ));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| SlideloomError::validation("raw bitmap dimensions overflow"))?;
        if rgba8.len() != expected {
            return Err(SlideloomError::validation(format!(
                "raw bitmap payload is {} bytes, expected {} for {}x{}",
                rgba8.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8,
        })
    }

    /// Serialize to the wire layout placed on the worker channel.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(RAW_HEADER_LEN + self.rgba8.len());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.rgba8);
        out
    }

    /// Parse the wire layout, rejecting truncated or oversized payloads.
    pub fn from_bytes(bytes: &[u8]) -> SlideloomResult<Self> {
        if bytes.len() < RAW_HEADER_LEN {
            return Err(SlideloomError::validation(
                "raw bitmap payload is shorter than its header",
            ));
        }
        let width = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let height = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        Self::new(width, height, bytes[RAW_HEADER_LEN..].to_vec())
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// In-process transcoder: decodes the raw bitmap layout and encodes PNG.
pub struct PngTranscoder;

impl ByteTranscoder for PngTranscoder {
    fn transcode(&mut self, bytes: &[u8]) -> SlideloomResult<Vec<u8>> {
        let raw = RawBitmap::from_bytes(bytes)?;
        let image = image::RgbaImage::from_raw(raw.width, raw.height, raw.rgba8)
            .ok_or_else(|| SlideloomError::transcode("raw bitmap rejected by image buffer"))?;

        let mut out = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .map_err(|e| SlideloomError::transcode(format!("png encode failed: {e}")))?;
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/transcode.rs"]
mod tests;
