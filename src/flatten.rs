use crate::foundation::error::SlideloomResult;
use crate::raster::bridge::Rasterizer;
use crate::raster::registry::ImageRegistry;
use crate::raster::transcode::ByteTranscoder;
use crate::source::MutableContainer;

#[tracing::instrument(skip(nodes, rasterizer), fields(count = nodes.len()))]
/// Flatten containers in place instead of building a carousel.
///
/// For each container, sequentially: rasterize it, append the resulting
/// paint at the top of its paint list, and hide all of its children, leaving
/// a node that looks identical but is a single flat image. Fail-fast:
/// containers after a failing one are left untouched, while earlier ones
/// keep their new paint.
pub fn flatten_containers<T, R, C>(
    nodes: &mut [&mut C],
    rasterizer: &mut Rasterizer<T, R>,
) -> SlideloomResult<()>
where
    T: ByteTranscoder,
    R: ImageRegistry,
    C: MutableContainer + ?Sized,
{
    for node in nodes {
        let paint = rasterizer.rasterize(&**node)?;
        node.push_paint(paint)?;
        node.hide_children()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/flatten.rs"]
mod tests;
