pub use kurbo::{Point, Rect, Size, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Position and size of a source container, captured at collection time.
///
/// The capture is an independent copy: the source node may keep being mutated
/// by its owner afterwards without affecting slides already collected.
pub struct NodeGeometry {
    /// Top-left corner in page coordinates.
    pub position: Point,
    /// Width and height in scene units.
    pub size: Size,
}

impl NodeGeometry {
    /// Build a geometry record from position and size.
    pub fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
/// Opaque handle to a registered image payload.
///
/// Handles are issued by an [`crate::ImageRegistry`] and never fabricated by
/// the pipeline itself; one distinct byte payload maps to exactly one handle.
pub struct ImageHandle(pub(crate) u64);

impl ImageHandle {
    /// Construct an [`ImageHandle`] from a raw 64-bit value.
    pub fn from_u64(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw 64-bit identifier.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How an image paint maps its pixels onto the painted rectangle.
pub enum ScaleMode {
    /// The rectangle's aspect ratio wins; the image is cropped/stretched to
    /// cover it. Required wherever the destination deliberately distorts the
    /// image, like the previous-slide sliver.
    Crop,
    /// The image fills the rectangle while keeping its own aspect ratio.
    Fill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// An image fill descriptor, produced only by the rasterization bridge.
pub struct ImagePaint {
    /// Pixel mapping policy.
    pub scale_mode: ScaleMode,
    /// Registered image payload backing this paint.
    pub image: ImageHandle,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
