use crate::scene::model::{
    CarouselPage, Easing, FlowEntryPoint, NavigateAction, Reaction, TransitionEffect,
    TransitionKind, Trigger,
};

/// Duration of the navigate animation, in the host's time unit.
pub const NAVIGATE_DURATION: f64 = 1.0;

/// Name of the carousel's flow entry point.
pub const ENTRY_POINT_NAME: &str = "Start Slideshow";

/// Chain consecutive frames with click-triggered navigations.
///
/// Frame `i` gets one click reaction navigating to frame `i + 1` with a
/// smart-animate/ease-out effect, forming a simple forward chain in frame
/// order. Wiring is set-once: re-wiring a page replaces rather than
/// accumulates. The first frame becomes the page's sole entry point. A page with
/// zero frames is left untouched (no reactions, no entry point); one frame
/// still gets the entry point but no reactions.
pub fn wire_transitions(page: &mut CarouselPage) {
    for i in 0..page.frames.len().saturating_sub(1) {
        let target = page.frames[i + 1].id;
        page.frames[i].reactions = vec![Reaction {
            trigger: Trigger::Click,
            action: NavigateAction::Navigate { target },
            effect: TransitionEffect {
                kind: TransitionKind::SmartAnimate,
                easing: Easing::EaseOut,
                duration: NAVIGATE_DURATION,
            },
        }];
    }

    if let Some(first) = page.frames.first() {
        page.entry_points = vec![FlowEntryPoint {
            name: ENTRY_POINT_NAME.to_string(),
            frame: first.id,
        }];
    }
}

#[cfg(test)]
#[path = "../tests/unit/flow.rs"]
mod tests;
