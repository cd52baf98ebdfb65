use crate::foundation::core::{Point, Size};
use crate::scene::model::{CarouselFrame, FrameId, ImageLayer};
use crate::slides::RasterSlide;

/// Divisor applied to the previous slide's width to get its sliver width.
pub const SQUEEZE_DIVISOR: f64 = 12.0;

/// Gap in scene units between a frame's left edge and its sliver.
pub const SLIVER_GAP: f64 = 20.0;

/// Build one carousel frame per slide, index-aligned with the input.
///
/// Each frame sits at its slide's original position and size, does not clip,
/// and layers up to three image rectangles, appended bottom-to-top:
///
/// 1. `next-preview` (all but the last slide): the full next slide at local
///    origin, hidden underneath the current image until a navigation
///    animates it in.
/// 2. `current` (always): the slide's own image at local origin.
/// 3. `previous-sliver` (all but the first slide): the previous slide
///    squeezed to a twelfth of its width and parked just past the frame's
///    left edge, as a "peek back" cue.
pub fn build_carousel(slides: &[RasterSlide]) -> Vec<CarouselFrame> {
    let mut frames = Vec::with_capacity(slides.len());

    for (i, slide) in slides.iter().enumerate() {
        let mut layers = Vec::new();

        if let Some(next) = slides.get(i + 1) {
            layers.push(ImageLayer {
                name: "next-preview".to_string(),
                position: Point::ORIGIN,
                size: next.geometry.size,
                paint: next.paint,
            });
        }

        layers.push(ImageLayer {
            name: "current".to_string(),
            position: Point::ORIGIN,
            size: slide.geometry.size,
            paint: slide.paint,
        });

        if i > 0 {
            let previous = &slides[i - 1];
            let squeezed_width = previous.geometry.size.width / SQUEEZE_DIVISOR;
            layers.push(ImageLayer {
                name: "previous-sliver".to_string(),
                // Fully outside the frame: its own width plus a fixed gap.
                position: Point::new(-(squeezed_width + SLIVER_GAP), 0.0),
                size: Size::new(squeezed_width, previous.geometry.size.height),
                paint: previous.paint,
            });
        }

        frames.push(CarouselFrame {
            id: FrameId::from_index(i),
            name: format!("Slide {i}"),
            position: slide.geometry.position,
            size: slide.geometry.size,
            clips_content: false,
            layers,
            reactions: Vec::new(),
        });
    }

    frames
}

#[cfg(test)]
#[path = "../tests/unit/carousel.rs"]
mod tests;
