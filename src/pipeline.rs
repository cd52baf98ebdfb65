use crate::carousel::build_carousel;
use crate::flow::wire_transitions;
use crate::foundation::error::SlideloomResult;
use crate::raster::bridge::Rasterizer;
use crate::raster::registry::ImageRegistry;
use crate::raster::transcode::ByteTranscoder;
use crate::scene::model::CarouselPage;
use crate::slides::collect_slides;
use crate::source::VisualContainer;

/// Name of the derived page.
pub const PAGE_NAME: &str = "Slideshow";

#[tracing::instrument(skip(sources, rasterizer), fields(count = sources.len()))]
/// Run the whole pipeline: collect slides, build the carousel, wire
/// transitions.
///
/// Each stage fully consumes the previous one's output before the next
/// starts. Input order is preserved end-to-end and determines carousel
/// adjacency; callers wanting the stock left-to-right reading order sort
/// with [`crate::order_left_to_right`] first. An empty input is a no-op
/// producing an empty page with no entry point. Any failure aborts the run;
/// images already registered with the host are not reclaimed.
pub fn build_slideshow<T, R>(
    sources: &[&dyn VisualContainer],
    rasterizer: &mut Rasterizer<T, R>,
) -> SlideloomResult<CarouselPage>
where
    T: ByteTranscoder,
    R: ImageRegistry,
{
    let slides = collect_slides(sources, rasterizer)?;

    let mut page = CarouselPage {
        name: PAGE_NAME.to_string(),
        frames: build_carousel(&slides),
        entry_points: Vec::new(),
    };
    wire_transitions(&mut page);

    Ok(page)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
