//! Drag & drop of individual nodes.
//!
//! [`NodeDrag`] follows the renderer's hover events to know which node sits
//! under the pointer, and on pointer-down starts a drag gesture for it. Every
//! pointer-move maps the pointer back into model space (see
//! [`crate::mapping`]) and writes the result into the host graph. While a
//! drag runs, whole-view dragging and hovering are switched off on the
//! renderer so the view does not pan underneath the node.

use crate::error::{AttachError, Capability, GestureError};
use crate::gesture::GestureState;
use crate::host::{HostGraph, HostRenderer};
use crate::mapping::{map_pointer_to_model, ReferencePair};
use log::{debug, trace, warn};

/// Result of a completed drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOutcome {
    pub node_id: i32,
    /// Last model position written, `None` if the pointer never moved.
    pub position: Option<(f32, f32)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveDrag {
    node_id: i32,
    last_position: Option<(f32, f32)>,
}

/// Per-view node drag controller.
#[derive(Debug, Default)]
pub struct NodeDrag {
    /// Nodes currently under the pointer, most recent last.
    hovered: Vec<i32>,
    /// Node a pointer-down would pick up.
    target: Option<i32>,
    state: GestureState<ActiveDrag>,
}

impl NodeDrag {
    pub const PLUGIN: &'static str = "node drag";

    /// Capabilities a renderer must report for dragging to work.
    pub const REQUIRED: [Capability; 2] = [
        Capability::RenderedPositions,
        Capability::ViewInteractionToggle,
    ];

    /// Create a drag controller for `renderer`.
    ///
    /// # Errors
    /// [`AttachError::MissingCapability`] if the renderer cannot report
    /// rendered node positions or toggle view interaction.
    pub fn attach<R>(renderer: &R) -> Result<Self, AttachError>
    where
        R: HostRenderer + ?Sized,
    {
        renderer.capabilities().require(Self::PLUGIN, &Self::REQUIRED)?;
        debug!("{} attached", Self::PLUGIN);
        Ok(Self::default())
    }

    /// Node a pointer-down would start dragging.
    pub fn target(&self) -> Option<i32> {
        self.target
    }

    pub fn hovered_nodes(&self) -> &[i32] {
        &self.hovered
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_active()
    }

    /// ID of the node being dragged, if any.
    pub fn dragged_node(&self) -> Option<i32> {
        self.state.accumulator().map(|drag| drag.node_id)
    }

    /// Renderer reported the pointer entering a node.
    ///
    /// Repeated enter events for the same node are ignored.
    pub fn node_hovered(&mut self, node_id: i32) {
        if self.hovered.contains(&node_id) {
            return;
        }
        self.hovered.push(node_id);
        if !self.is_dragging() {
            self.target = Some(node_id);
        }
    }

    /// Renderer reported the pointer leaving a node.
    ///
    /// Repeated leave events for the same node are ignored.
    pub fn node_left(&mut self, node_id: i32) {
        let Some(index) = self.hovered.iter().position(|&id| id == node_id) else {
            return;
        };
        self.hovered.remove(index);
        if !self.is_dragging() {
            self.target = self.hovered.last().copied();
        }
    }

    /// Pointer pressed.
    ///
    /// Returns the node that started dragging, or `Ok(None)` if the pointer is
    /// not over a node.
    ///
    /// # Errors
    /// - [`GestureError::AlreadyActive`] if a drag is running; it continues
    ///   undisturbed.
    /// - [`GestureError::TooFewNodes`] if fewer than two nodes are rendered,
    ///   since no reference pair could calibrate the mapping. The renderer
    ///   is left untouched.
    pub fn pointer_down<G, R>(
        &mut self,
        graph: &G,
        renderer: &mut R,
    ) -> Result<Option<i32>, GestureError>
    where
        G: HostGraph + ?Sized,
        R: HostRenderer + ?Sized,
    {
        if self.is_dragging() {
            warn!("{}: pointer down ignored, drag already in progress", Self::PLUGIN);
            return Err(GestureError::AlreadyActive);
        }
        let Some(node_id) = self.target else {
            return Ok(None);
        };

        if let Err(err) = ReferencePair::from_host(graph, &*renderer) {
            debug!("{}: drag of node {} suppressed: {}", Self::PLUGIN, node_id, err);
            return Err(err);
        }

        self.state.begin(ActiveDrag {
            node_id,
            last_position: None,
        })?;
        renderer.set_view_interaction(false);
        renderer.refresh();
        debug!("{}: started dragging node {}", Self::PLUGIN, node_id);
        Ok(Some(node_id))
    }

    /// Pointer moved to `page` (page coordinates, like the container rect).
    ///
    /// Writes and returns the dragged node's new model position. Moves while
    /// no drag runs are ignored.
    ///
    /// # Errors
    /// A degenerate reference pair, a graph shrunk below two rendered nodes,
    /// or a host that no longer knows the dragged node aborts the drag:
    /// view interaction is restored and the controller returns to Idle.
    pub fn pointer_move<G, R>(
        &mut self,
        page: (f32, f32),
        graph: &mut G,
        renderer: &mut R,
    ) -> Result<Option<(f32, f32)>, GestureError>
    where
        G: HostGraph + ?Sized,
        R: HostRenderer + ?Sized,
    {
        let Some(node_id) = self.dragged_node() else {
            return Ok(None);
        };

        let (left, top, _, _) = renderer.container_rect();
        let pointer = (page.0 - left, page.1 - top);

        let position = match Self::map_pointer(pointer, &*graph, &*renderer) {
            Ok(position) => position,
            Err(err) => {
                self.abort(renderer, &err);
                return Err(err);
            }
        };

        if !graph.set_position(node_id, position) {
            let err = GestureError::UnknownNode { id: node_id };
            self.abort(renderer, &err);
            return Err(err);
        }

        if let Some(drag) = self.state.accumulator_mut() {
            drag.last_position = Some(position);
        }
        trace!("{}: node {} -> ({}, {})", Self::PLUGIN, node_id, position.0, position.1);
        renderer.refresh();
        Ok(Some(position))
    }

    /// Pointer released: finish the drag and restore view interaction.
    pub fn pointer_up<R>(&mut self, renderer: &mut R) -> Option<DragOutcome>
    where
        R: HostRenderer + ?Sized,
    {
        let drag = self.state.finish()?;
        renderer.set_view_interaction(true);
        renderer.refresh();
        self.target = self.hovered.last().copied();
        debug!("{}: finished dragging node {}", Self::PLUGIN, drag.node_id);
        Some(DragOutcome {
            node_id: drag.node_id,
            position: drag.last_position,
        })
    }

    /// Drop all state, restoring view interaction if a drag was running.
    pub fn detach<R>(&mut self, renderer: &mut R)
    where
        R: HostRenderer + ?Sized,
    {
        if self.state.abort() {
            renderer.set_view_interaction(true);
            renderer.refresh();
        }
        self.hovered.clear();
        self.target = None;
        debug!("{} detached", Self::PLUGIN);
    }

    fn map_pointer<G, R>(
        pointer: (f32, f32),
        graph: &G,
        renderer: &R,
    ) -> Result<(f32, f32), GestureError>
    where
        G: HostGraph + ?Sized,
        R: HostRenderer + ?Sized,
    {
        let refs = ReferencePair::from_host(graph, renderer)?;
        map_pointer_to_model(pointer, renderer.camera_angle(), &refs)
    }

    fn abort<R>(&mut self, renderer: &mut R, reason: &GestureError)
    where
        R: HostRenderer + ?Sized,
    {
        if let Some(drag) = self.state.finish() {
            warn!("{}: aborted drag of node {}: {}", Self::PLUGIN, drag.node_id, reason);
            renderer.set_view_interaction(true);
            renderer.refresh();
        }
        self.target = self.hovered.last().copied();
    }
}
