use std::collections::HashMap;

use crate::foundation::core::{ImagePaint, Point, Size};
use crate::foundation::error::{SlideloomError, SlideloomResult};
use crate::scene::model::{CarouselPage, FrameId, NavigateAction, TransitionEffect, Trigger};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
/// Identifier for a node created by a [`SceneBackend`].
pub struct SceneNodeId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// A [`crate::Reaction`] with its model frame target resolved to the node the
/// backend actually created for it.
pub struct ResolvedReaction {
    /// What fires the reaction.
    pub trigger: Trigger,
    /// Destination node on the same page.
    pub target: SceneNodeId,
    /// How the change is animated.
    pub effect: TransitionEffect,
}

/// Host scene-graph store seam.
///
/// The pipeline builds a pure [`CarouselPage`] and replays it through this
/// trait; a real host forwards the calls to its document model, and
/// [`crate::InMemoryScene`] records them for inspection.
pub trait SceneBackend {
    /// Create a new page node.
    fn create_page(&mut self, name: &str) -> SlideloomResult<SceneNodeId>;

    /// Create a container node with its properties set.
    fn create_container(
        &mut self,
        name: &str,
        position: Point,
        size: Size,
        clips_content: bool,
    ) -> SlideloomResult<SceneNodeId>;

    /// Create a rectangle node carrying an image paint.
    fn create_rectangle(
        &mut self,
        name: &str,
        position: Point,
        size: Size,
        paint: ImagePaint,
    ) -> SlideloomResult<SceneNodeId>;

    /// Append `child` as the last child of `parent`. Append order is paint
    /// order: later children render above earlier ones.
    fn append_child(&mut self, parent: SceneNodeId, child: SceneNodeId) -> SlideloomResult<()>;

    /// Replace the reactions attached to `node`.
    fn set_reactions(
        &mut self,
        node: SceneNodeId,
        reactions: &[ResolvedReaction],
    ) -> SlideloomResult<()>;

    /// Register `node` as a flow entry point of `page`.
    fn add_flow_entry_point(
        &mut self,
        page: SceneNodeId,
        name: &str,
        node: SceneNodeId,
    ) -> SlideloomResult<()>;
}

#[tracing::instrument(skip(backend, page), fields(frames = page.frames.len()))]
/// Replay a [`CarouselPage`] into a host backend.
///
/// Frames and their layers are installed strictly in model order so host
/// stacking matches model layering, then reactions and entry points are
/// attached with frame ids resolved to the created container nodes. There is
/// no rollback: nodes created before a failure stay in the host document.
pub fn install_page<B>(backend: &mut B, page: &CarouselPage) -> SlideloomResult<SceneNodeId>
where
    B: SceneBackend + ?Sized,
{
    page.validate()?;

    let page_id = backend.create_page(&page.name)?;
    let mut containers: HashMap<FrameId, SceneNodeId> = HashMap::new();

    for frame in &page.frames {
        let container = backend.create_container(
            &frame.name,
            frame.position,
            frame.size,
            frame.clips_content,
        )?;
        backend.append_child(page_id, container)?;

        for layer in &frame.layers {
            let rect =
                backend.create_rectangle(&layer.name, layer.position, layer.size, layer.paint)?;
            backend.append_child(container, rect)?;
        }

        containers.insert(frame.id, container);
    }

    for frame in &page.frames {
        if frame.reactions.is_empty() {
            continue;
        }
        let node = container_for(&containers, frame.id)?;
        let resolved = frame
            .reactions
            .iter()
            .map(|reaction| {
                let NavigateAction::Navigate { target } = reaction.action;
                Ok(ResolvedReaction {
                    trigger: reaction.trigger,
                    target: container_for(&containers, target)?,
                    effect: reaction.effect,
                })
            })
            .collect::<SlideloomResult<Vec<_>>>()?;
        backend.set_reactions(node, &resolved)?;
    }

    for entry in &page.entry_points {
        let node = container_for(&containers, entry.frame)?;
        backend.add_flow_entry_point(page_id, &entry.name, node)?;
    }

    Ok(page_id)
}

fn container_for(
    containers: &HashMap<FrameId, SceneNodeId>,
    id: FrameId,
) -> SlideloomResult<SceneNodeId> {
    containers
        .get(&id)
        .copied()
        .ok_or_else(|| SlideloomError::scene(format!("no installed container for frame id {}", id.0)))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/backend.rs"]
mod tests;
