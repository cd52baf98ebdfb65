use crate::foundation::core::{ImagePaint, ScaleMode};
use crate::foundation::error::SlideloomResult;
use crate::raster::registry::ImageRegistry;
use crate::raster::transcode::ByteTranscoder;
use crate::source::VisualContainer;

/// Converts a visual container into an image paint.
///
/// One rasterization is three stages, each fatal on failure: export the
/// container's rendered contents to raw bytes, transcode them to PNG through
/// the [`ByteTranscoder`], and register the PNG with the [`ImageRegistry`]
/// to obtain the paint's handle.
pub struct Rasterizer<T, R> {
    transcoder: T,
    registry: R,
}

impl<T, R> Rasterizer<T, R>
where
    T: ByteTranscoder,
    R: ImageRegistry,
{
    /// Compose a rasterizer from a transcoder and a registry.
    pub fn new(transcoder: T, registry: R) -> Self {
        Self {
            transcoder,
            registry,
        }
    }

    /// Access the registry, e.g. to look payloads back up after a run.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    #[tracing::instrument(skip(self, node), fields(node = node.name()))]
    /// Rasterize one container into an [`ImagePaint`].
    ///
    /// The paint's scale mode is always [`ScaleMode::Crop`]: the same paint
    /// is reused for the previous-slide sliver, whose rectangle deliberately
    /// breaks the image's aspect ratio.
    pub fn rasterize<N>(&mut self, node: &N) -> SlideloomResult<ImagePaint>
    where
        N: VisualContainer + ?Sized,
    {
        let raw = node.export_bytes()?;
        let png = self.transcoder.transcode(&raw)?;
        let image = self.registry.register(&png)?;

        Ok(ImagePaint {
            scale_mode: ScaleMode::Crop,
            image,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bridge.rs"]
mod tests;
