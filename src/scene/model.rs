use std::collections::HashSet;

use crate::foundation::core::{ImagePaint, Point, Size};
use crate::foundation::error::{SlideloomError, SlideloomResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
/// Identifier of a carousel frame within one page.
///
/// Ids are index-derived and deterministic per invocation; reactions and
/// entry points reference frames through them.
pub struct FrameId(pub(crate) u32);

impl FrameId {
    /// Id of the frame built from slide index `index`.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Slide index this id was derived from.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// What fires a reaction.
pub enum Trigger {
    /// Pointer click on the frame.
    Click,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// What a reaction does.
pub enum NavigateAction {
    /// Navigate to another frame on the same page.
    Navigate {
        /// Destination frame.
        target: FrameId,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Animation used when a navigation fires.
pub enum TransitionKind {
    /// Jump with no animation.
    Instant,
    /// Animate matching layers between the two frames.
    SmartAnimate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Easing curve applied over a transition's duration.
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Accelerate in.
    EaseIn,
    /// Decelerate out.
    EaseOut,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Transition animation descriptor.
pub struct TransitionEffect {
    /// Animation kind.
    pub kind: TransitionKind,
    /// Easing curve.
    pub easing: Easing,
    /// Duration in the host's time unit.
    pub duration: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A trigger/action/effect tuple attached to a frame.
pub struct Reaction {
    /// What fires the reaction.
    pub trigger: Trigger,
    /// What it does.
    pub action: NavigateAction,
    /// How the change is animated.
    pub effect: TransitionEffect,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One image rectangle layered inside a carousel frame.
pub struct ImageLayer {
    /// Layer name (role), e.g. `current` or `previous-sliver`.
    pub name: String,
    /// Position in frame-local coordinates. Negative x places the layer
    /// outside the (non-clipping) frame's left edge.
    pub position: Point,
    /// Rectangle size.
    pub size: Size,
    /// Image fill.
    pub paint: ImagePaint,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A reconstructed slide frame.
///
/// Layers are ordered bottom-to-top; later entries paint above earlier ones.
/// A fully interior frame carries `[next-preview, current, previous-sliver]`
/// in append order, which stacks the current slide above the hidden next
/// preview and keeps the sliver topmost.
pub struct CarouselFrame {
    /// Frame id referenced by reactions and entry points.
    pub id: FrameId,
    /// Deterministic frame name, e.g. `Slide 2`.
    pub name: String,
    /// Position in page coordinates (the source container's position).
    pub position: Point,
    /// Frame size (the source container's size).
    pub size: Size,
    /// Always `false`: the previous-slide sliver must stay visible outside
    /// the frame bounds.
    pub clips_content: bool,
    /// Layered image rectangles, bottom-to-top.
    pub layers: Vec<ImageLayer>,
    /// Reactions attached to this frame.
    pub reactions: Vec<Reaction>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A designated starting frame for interactive navigation.
pub struct FlowEntryPoint {
    /// Entry point display name.
    pub name: String,
    /// Frame where the flow starts.
    pub frame: FrameId,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The derived page holding the whole carousel.
///
/// A pure data model: building it performs no host calls. It is replayed
/// into a host store by [`crate::install_page`] and serializes to JSON via
/// Serde for inspection or fixtures.
pub struct CarouselPage {
    /// Page name.
    pub name: String,
    /// Frames in input order (index-aligned with the collected slides).
    pub frames: Vec<CarouselFrame>,
    /// Flow entry points; the wired carousel has exactly one on non-empty
    /// pages.
    pub entry_points: Vec<FlowEntryPoint>,
}

impl CarouselPage {
    /// Look a frame up by id.
    pub fn frame(&self, id: FrameId) -> Option<&CarouselFrame> {
        self.frames.iter().find(|f| f.id == id)
    }

    /// Check referential integrity of the page.
    ///
    /// Frame ids must be unique, and every reaction target and entry point
    /// must reference a frame on this page.
    pub fn validate(&self) -> SlideloomResult<()> {
        let mut ids = HashSet::new();
        for frame in &self.frames {
            if !ids.insert(frame.id) {
                return Err(SlideloomError::validation(format!(
                    "frame '{}' reuses id {}",
                    frame.name, frame.id.0
                )));
            }
        }

        for frame in &self.frames {
            for reaction in &frame.reactions {
                let NavigateAction::Navigate { target } = reaction.action;
                if !ids.contains(&target) {
                    return Err(SlideloomError::validation(format!(
                        "frame '{}' reaction targets missing frame id {}",
                        frame.name, target.0
                    )));
                }
            }
        }

        for entry in &self.entry_points {
            if !ids.contains(&entry.frame) {
                return Err(SlideloomError::validation(format!(
                    "entry point '{}' references missing frame id {}",
                    entry.name, entry.frame.0
                )));
            }
        }

        Ok(())
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> SlideloomResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SlideloomError::serde(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json_str(s: &str) -> SlideloomResult<Self> {
        serde_json::from_str(s).map_err(|e| SlideloomError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
