use crate::foundation::core::{ImagePaint, NodeGeometry};
use crate::foundation::error::SlideloomResult;

/// Capability surface the pipeline needs from a host visual container.
///
/// Hosts implement this for whatever node type backs their containers; the
/// pipeline never touches host nodes through any other channel, so test
/// doubles slot in freely.
pub trait VisualContainer {
    /// Human-readable node name, used for diagnostics.
    fn name(&self) -> &str;

    /// Current position and size of the container.
    fn geometry(&self) -> NodeGeometry;

    /// Export the rendered contents of the container, including all
    /// descendants, as a raw bitmap payload (see [`crate::RawBitmap`]).
    fn export_bytes(&self) -> SlideloomResult<Vec<u8>>;
}

/// Additional capabilities for hosts that allow in-place mutation.
///
/// Required only by [`crate::flatten_containers`].
pub trait MutableContainer: VisualContainer {
    /// Append a paint at the top of the container's paint list.
    fn push_paint(&mut self, paint: ImagePaint) -> SlideloomResult<()>;

    /// Hide every direct child of the container.
    fn hide_children(&mut self) -> SlideloomResult<()>;
}

/// Order containers left-to-right: ascending x, ties broken by ascending y.
///
/// This is the stock ordering the slideshow pipeline expects; it is a
/// caller-side policy, not an obligation of the collector.
pub fn order_left_to_right<C: VisualContainer + ?Sized>(nodes: &mut [&C]) {
    nodes.sort_by(|a, b| {
        let (pa, pb) = (a.geometry().position, b.geometry().position);
        pa.x.total_cmp(&pb.x).then(pa.y.total_cmp(&pb.y))
    });
}

#[cfg(test)]
#[path = "../tests/unit/source.rs"]
mod tests;
