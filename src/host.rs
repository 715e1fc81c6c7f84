//! Capability traits the host graph view implements.
//!
//! The gesture controllers never look at a concrete renderer type. They ask
//! the renderer what it can do once, at attach time, and then talk to it only
//! through [`HostRenderer`]. Node positions are read and written through
//! [`HostGraph`], which is implemented for Slint `VecModel`s of any
//! [`MovableNode`] type.

use crate::error::{AttachError, Capability};
use slint::{Model, VecModel};
use std::rc::Rc;

/// What a renderer supports, reported once at attach time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererCapabilities {
    /// The renderer maintains a rendered (container pixel) position per node.
    pub rendered_positions: bool,
    /// Whole-view dragging and hovering can be switched off during a node drag.
    pub view_interaction_toggle: bool,
    /// An extra drawing surface can be stacked over the view.
    pub overlay_layers: bool,
}

impl RendererCapabilities {
    /// All capabilities present.
    pub fn all() -> Self {
        Self {
            rendered_positions: true,
            view_interaction_toggle: true,
            overlay_layers: true,
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::RenderedPositions => self.rendered_positions,
            Capability::ViewInteractionToggle => self.view_interaction_toggle,
            Capability::OverlayLayers => self.overlay_layers,
        }
    }

    /// Fail with the first capability in `required` that is missing.
    pub fn require(
        &self,
        plugin: &'static str,
        required: &[Capability],
    ) -> Result<(), AttachError> {
        match required.iter().find(|&&c| !self.has(c)) {
            Some(&capability) => Err(AttachError::MissingCapability { plugin, capability }),
            None => Ok(()),
        }
    }
}

/// The renderer side of a graph view.
pub trait HostRenderer {
    fn capabilities(&self) -> RendererCapabilities;

    /// Container bounds in page coordinates: x, y, width, height.
    fn container_rect(&self) -> (f32, f32, f32, f32);

    /// Current camera rotation in radians.
    fn camera_angle(&self) -> f32;

    /// Last rendered position of a node in container pixels.
    fn rendered_position(&self, node_id: i32) -> Option<(f32, f32)>;

    /// Enable or disable whole-view dragging and node hovering.
    fn set_view_interaction(&mut self, enabled: bool);

    /// Request a redraw after node state changed.
    fn refresh(&mut self) {}
}

/// Trait for nodes that can be moved (dragged) in the view.
pub trait MovableNode: Clone + 'static {
    fn id(&self) -> i32;
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn set_x(&mut self, x: f32);
    fn set_y(&mut self, y: f32);
}

/// The graph side of a graph view: an ordered node listing with mutable
/// model positions.
pub trait HostGraph {
    fn node_count(&self) -> usize;

    /// Node id and model position at `index` in listing order.
    fn node_at(&self, index: usize) -> Option<(i32, (f32, f32))>;

    /// Overwrite a node's model position. Returns false if the id is unknown.
    fn set_position(&mut self, id: i32, position: (f32, f32)) -> bool;

    /// Model position of a node by id.
    fn position_of(&self, id: i32) -> Option<(f32, f32)> {
        (0..self.node_count())
            .filter_map(|i| self.node_at(i))
            .find(|&(node_id, _)| node_id == id)
            .map(|(_, position)| position)
    }
}

fn set_row_position<T: MovableNode>(model: &VecModel<T>, id: i32, (x, y): (f32, f32)) -> bool {
    for i in 0..model.row_count() {
        if let Some(mut node) = model.row_data(i) {
            if MovableNode::id(&node) == id {
                node.set_x(x);
                node.set_y(y);
                model.set_row_data(i, node);
                return true;
            }
        }
    }
    false
}

impl<T: MovableNode> HostGraph for VecModel<T> {
    fn node_count(&self) -> usize {
        self.row_count()
    }

    fn node_at(&self, index: usize) -> Option<(i32, (f32, f32))> {
        self.row_data(index)
            .map(|node| (MovableNode::id(&node), (node.x(), node.y())))
    }

    fn set_position(&mut self, id: i32, position: (f32, f32)) -> bool {
        set_row_position(self, id, position)
    }
}

impl<T: MovableNode> HostGraph for Rc<VecModel<T>> {
    fn node_count(&self) -> usize {
        self.row_count()
    }

    fn node_at(&self, index: usize) -> Option<(i32, (f32, f32))> {
        self.row_data(index)
            .map(|node| (MovableNode::id(&node), (node.x(), node.y())))
    }

    fn set_position(&mut self, id: i32, position: (f32, f32)) -> bool {
        set_row_position(self, id, position)
    }
}
