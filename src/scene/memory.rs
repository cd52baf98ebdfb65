use crate::foundation::core::{ImagePaint, Point, Size};
use crate::foundation::error::{SlideloomError, SlideloomResult};
use crate::scene::backend::{ResolvedReaction, SceneBackend, SceneNodeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Node kinds a scene backend can create.
pub enum NodeKind {
    /// Top-level page.
    Page,
    /// Frame container.
    Container,
    /// Image rectangle.
    Rectangle,
}

#[derive(Clone, Debug)]
/// One recorded node of an [`InMemoryScene`].
pub struct NodeRecord {
    /// Node id (index into the scene's node table).
    pub id: SceneNodeId,
    /// What kind of node was created.
    pub kind: NodeKind,
    /// Node name.
    pub name: String,
    /// Node position.
    pub position: Point,
    /// Node size.
    pub size: Size,
    /// Clip flag (containers only; `false` otherwise).
    pub clips_content: bool,
    /// Image paint (rectangles only).
    pub paint: Option<ImagePaint>,
    /// Child ids in append order.
    pub children: Vec<SceneNodeId>,
    /// Reactions attached to this node.
    pub reactions: Vec<ResolvedReaction>,
}

#[derive(Clone, Debug)]
/// One recorded flow entry point.
pub struct EntryPointRecord {
    /// Owning page.
    pub page: SceneNodeId,
    /// Entry point name.
    pub name: String,
    /// Starting node.
    pub node: SceneNodeId,
}

#[derive(Clone, Debug, Default)]
/// Recording scene backend: the reference host and test double.
pub struct InMemoryScene {
    nodes: Vec<NodeRecord>,
    entry_points: Vec<EntryPointRecord>,
}

impl InMemoryScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded nodes, in creation order.
    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    /// Look a node up by id.
    pub fn node(&self, id: SceneNodeId) -> Option<&NodeRecord> {
        self.nodes.get(id.0 as usize)
    }

    /// All recorded flow entry points.
    pub fn entry_points(&self) -> &[EntryPointRecord] {
        &self.entry_points
    }

    /// Children of `id`, in append order.
    pub fn children_of(&self, id: SceneNodeId) -> SlideloomResult<Vec<&NodeRecord>> {
        let parent = self.require(id)?;
        parent
            .children
            .iter()
            .map(|&child| {
                self.node(child)
                    .ok_or_else(|| SlideloomError::scene(format!("unknown child node {}", child.0)))
            })
            .collect()
    }

    fn require(&self, id: SceneNodeId) -> SlideloomResult<&NodeRecord> {
        self.node(id)
            .ok_or_else(|| SlideloomError::scene(format!("unknown node {}", id.0)))
    }

    fn push(&mut self, mut record: NodeRecord) -> SceneNodeId {
        let id = SceneNodeId(self.nodes.len() as u64);
        record.id = id;
        self.nodes.push(record);
        id
    }
}

impl SceneBackend for InMemoryScene {
    fn create_page(&mut self, name: &str) -> SlideloomResult<SceneNodeId> {
        Ok(self.push(NodeRecord {
            id: SceneNodeId(0),
            kind: NodeKind::Page,
            name: name.to_string(),
            position: Point::ORIGIN,
            size: Size::ZERO,
            clips_content: false,
            paint: None,
            children: Vec::new(),
            reactions: Vec::new(),
        }))
    }

    fn create_container(
        &mut self,
        name: &str,
        position: Point,
        size: Size,
        clips_content: bool,
    ) -> SlideloomResult<SceneNodeId> {
        Ok(self.push(NodeRecord {
            id: SceneNodeId(0),
            kind: NodeKind::Container,
            name: name.to_string(),
            position,
            size,
            clips_content,
            paint: None,
            children: Vec::new(),
            reactions: Vec::new(),
        }))
    }

    fn create_rectangle(
        &mut self,
        name: &str,
        position: Point,
        size: Size,
        paint: ImagePaint,
    ) -> SlideloomResult<SceneNodeId> {
        Ok(self.push(NodeRecord {
            id: SceneNodeId(0),
            kind: NodeKind::Rectangle,
            name: name.to_string(),
            position,
            size,
            clips_content: false,
            paint: Some(paint),
            children: Vec::new(),
            reactions: Vec::new(),
        }))
    }

    fn append_child(&mut self, parent: SceneNodeId, child: SceneNodeId) -> SlideloomResult<()> {
        if self.node(child).is_none() {
            return Err(SlideloomError::scene(format!("unknown node {}", child.0)));
        }
        let parent = self
            .nodes
            .get_mut(parent.0 as usize)
            .ok_or_else(|| SlideloomError::scene(format!("unknown node {}", parent.0)))?;
        parent.children.push(child);
        Ok(())
    }

    fn set_reactions(
        &mut self,
        node: SceneNodeId,
        reactions: &[ResolvedReaction],
    ) -> SlideloomResult<()> {
        let node = self
            .nodes
            .get_mut(node.0 as usize)
            .ok_or_else(|| SlideloomError::scene(format!("unknown node {}", node.0)))?;
        node.reactions = reactions.to_vec();
        Ok(())
    }

    fn add_flow_entry_point(
        &mut self,
        page: SceneNodeId,
        name: &str,
        node: SceneNodeId,
    ) -> SlideloomResult<()> {
        self.require(page)?;
        self.require(node)?;
        self.entry_points.push(EntryPointRecord {
            page,
            name: name.to_string(),
            node,
        });
        Ok(())
    }
}
