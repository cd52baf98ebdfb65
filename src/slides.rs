use crate::foundation::core::{ImagePaint, NodeGeometry};
use crate::foundation::error::SlideloomResult;
use crate::raster::bridge::Rasterizer;
use crate::raster::registry::ImageRegistry;
use crate::raster::transcode::ByteTranscoder;
use crate::source::VisualContainer;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One rasterized slide: the paint plus the source geometry captured at
/// collection time.
pub struct RasterSlide {
    /// Paint backed by the registered rasterization of the source container.
    pub paint: ImagePaint,
    /// Captured source geometry; adjacency math in the carousel builder reads
    /// from this copy, never from the live node.
    pub geometry: NodeGeometry,
}

#[tracing::instrument(skip(nodes, rasterizer), fields(count = nodes.len()))]
/// Rasterize an ordered list of containers into an index-aligned slide list.
///
/// Nodes are processed strictly one at a time: slide `i` is fully resolved
/// before node `i + 1` is exported, keeping at most one transcode round-trip
/// in flight. Any failure aborts the whole collection with no partial list.
pub fn collect_slides<T, R>(
    nodes: &[&dyn VisualContainer],
    rasterizer: &mut Rasterizer<T, R>,
) -> SlideloomResult<Vec<RasterSlide>>
where
    T: ByteTranscoder,
    R: ImageRegistry,
{
    let mut slides = Vec::with_capacity(nodes.len());
    for node in nodes {
        let paint = rasterizer.rasterize(*node)?;
        slides.push(RasterSlide {
            paint,
            geometry: node.geometry(),
        });
    }
    Ok(slides)
}

#[cfg(test)]
#[path = "../tests/unit/slides.rs"]
mod tests;
