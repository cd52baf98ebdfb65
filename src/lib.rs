//! Slideloom rasterizes design containers and reassembles them into a
//! click-through slideshow carousel.
//!
//! Given an ordered list of host containers, the pipeline:
//!
//! 1. **Rasterize**: exports each container's rendered contents to raw bytes,
//!    transcodes them to PNG through an isolated worker thread, and registers
//!    the result with an image registry ([`Rasterizer`]).
//! 2. **Collect**: captures paint + original geometry per container, strictly
//!    in input order ([`collect_slides`]).
//! 3. **Build**: reconstructs one frame per slide with layered image
//!    rectangles: the slide's own image above a hidden full copy of the next
//!    slide, plus a squeezed sliver of the previous slide peeking past the
//!    left edge ([`build_carousel`]).
//! 4. **Wire**: chains consecutive frames with click-triggered smart-animate
//!    navigations and marks the first frame as the flow entry point
//!    ([`wire_transitions`]).
//!
//! The result is a pure [`CarouselPage`] data model, replayed into a host
//! document through the [`SceneBackend`] seam ([`install_page`]).
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Explicit collaborators**: hosts plug in through narrow traits
//!   ([`VisualContainer`], [`ByteTranscoder`], [`ImageRegistry`],
//!   [`SceneBackend`]); nothing reads ambient editor state.
//! - **One round-trip in flight**: collection is deliberately sequential and
//!   order-preserving; the worker protocol itself correlates each request
//!   with its own reply channel, so the ordering is policy, not fragility.
//! - **Fail-fast, no rollback**: any stage failure aborts the invocation;
//!   host mutations already committed are not undone.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod carousel;
mod flatten;
mod flow;
mod foundation;
mod pipeline;
mod raster;
mod scene;
mod slides;
mod source;

pub use carousel::{SLIVER_GAP, SQUEEZE_DIVISOR, build_carousel};
pub use flatten::flatten_containers;
pub use flow::{ENTRY_POINT_NAME, NAVIGATE_DURATION, wire_transitions};
pub use foundation::core::{
    ImageHandle, ImagePaint, NodeGeometry, Point, Rect, ScaleMode, Size, Vec2,
};
pub use foundation::error::{SlideloomError, SlideloomResult};
pub use pipeline::{PAGE_NAME, build_slideshow};
pub use raster::bridge::Rasterizer;
pub use raster::registry::{ImageRegistry, InMemoryImageRegistry};
pub use raster::transcode::{ByteTranscoder, PngTranscoder, RawBitmap};
pub use raster::worker::{DEFAULT_TRANSCODE_TIMEOUT, WorkerTranscoder};
pub use scene::backend::{ResolvedReaction, SceneBackend, SceneNodeId, install_page};
pub use scene::memory::{EntryPointRecord, InMemoryScene, NodeKind, NodeRecord};
pub use scene::model::{
    CarouselFrame, CarouselPage, Easing, FlowEntryPoint, FrameId, ImageLayer, NavigateAction,
    Reaction, TransitionEffect, TransitionKind, Trigger,
};
pub use slides::{RasterSlide, collect_slides};
pub use source::{MutableContainer, VisualContainer, order_left_to_right};
