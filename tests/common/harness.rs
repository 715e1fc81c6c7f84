//! Test harness for a graph view.
//!
//! Provides a `VecModel` of nodes, a renderer that projects them through a
//! [`Camera`] into a container offset inside the page, and a
//! [`GestureController`] wired to both.

#![allow(dead_code)]

use super::CallbackTracker;
use slint::{Model, VecModel};
use slint_node_gestures::{
    Camera, GestureController, HostRenderer, LassoSettings, MovableNode, RendererCapabilities,
};
use std::rc::Rc;

/// Container origin inside the page
pub const CONTAINER_LEFT: f32 = 100.0;
pub const CONTAINER_TOP: f32 = 50.0;
pub const CONTAINER_WIDTH: f32 = 800.0;
pub const CONTAINER_HEIGHT: f32 = 600.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NodeData {
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

impl NodeData {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

impl MovableNode for NodeData {
    fn id(&self) -> i32 { self.id }
    fn x(&self) -> f32 { self.x }
    fn y(&self) -> f32 { self.y }
    fn set_x(&mut self, x: f32) { self.x = x; }
    fn set_y(&mut self, y: f32) { self.y = y; }
}

/// Renderer projecting the node model through a camera.
///
/// Rendered positions are computed on demand from current model positions,
/// as if the view re-rendered after every refresh.
pub struct TestRenderer {
    pub nodes: Rc<VecModel<NodeData>>,
    pub camera: Camera,
    pub capabilities: RendererCapabilities,
    /// Nodes the renderer has not drawn (no rendered position)
    pub hidden: Vec<i32>,
    pub tracker: CallbackTracker,
}

impl TestRenderer {
    pub fn new(nodes: Rc<VecModel<NodeData>>, camera: Camera) -> Self {
        Self {
            nodes,
            camera,
            capabilities: RendererCapabilities::all(),
            hidden: Vec::new(),
            tracker: CallbackTracker::new(),
        }
    }

    pub fn with_capabilities(mut self, capabilities: RendererCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}

impl HostRenderer for TestRenderer {
    fn capabilities(&self) -> RendererCapabilities {
        self.capabilities
    }

    fn container_rect(&self) -> (f32, f32, f32, f32) {
        (CONTAINER_LEFT, CONTAINER_TOP, CONTAINER_WIDTH, CONTAINER_HEIGHT)
    }

    fn camera_angle(&self) -> f32 {
        self.camera.angle
    }

    fn rendered_position(&self, node_id: i32) -> Option<(f32, f32)> {
        if self.hidden.contains(&node_id) {
            return None;
        }
        (0..self.nodes.row_count())
            .filter_map(|i| self.nodes.row_data(i))
            .find(|node| node.id == node_id)
            .map(|node| {
                self.camera
                    .graph_position((node.x, node.y), (CONTAINER_WIDTH, CONTAINER_HEIGHT))
            })
    }

    fn set_view_interaction(&mut self, enabled: bool) {
        self.tracker.view_interaction.borrow_mut().push(enabled);
    }

    fn refresh(&mut self) {
        *self.tracker.refreshes.borrow_mut() += 1;
    }
}

pub type Controller = GestureController<Rc<VecModel<NodeData>>, TestRenderer>;

/// Test harness for a node view with both gestures attached.
pub struct GestureHarness {
    pub nodes: Rc<VecModel<NodeData>>,
    pub camera: Camera,
    pub ctrl: Controller,
    pub tracker: CallbackTracker,
}

impl GestureHarness {
    /// Three nodes under an identity camera.
    pub fn new() -> Self {
        Self::with_nodes(
            vec![
                NodeData::new(1, 0.0, 0.0),
                NodeData::new(2, 100.0, 50.0),
                NodeData::new(3, -80.0, 120.0),
            ],
            Camera::default(),
        )
    }

    pub fn with_nodes(nodes: Vec<NodeData>, camera: Camera) -> Self {
        Self::with_settings(nodes, camera, LassoSettings::default())
    }

    pub fn with_settings(nodes: Vec<NodeData>, camera: Camera, settings: LassoSettings) -> Self {
        let nodes = Rc::new(VecModel::from(nodes));
        let renderer = TestRenderer::new(nodes.clone(), camera);
        let tracker = renderer.tracker.clone();
        let ctrl = GestureController::new(nodes.clone(), renderer, settings)
            .expect("test renderer has every capability");

        Self {
            nodes,
            camera,
            ctrl,
            tracker,
        }
    }

    /// Page coordinates at which a model position is drawn.
    pub fn page_position(&self, model: (f32, f32)) -> (f32, f32) {
        let (x, y) = self
            .camera
            .graph_position(model, (CONTAINER_WIDTH, CONTAINER_HEIGHT));
        (x + CONTAINER_LEFT, y + CONTAINER_TOP)
    }

    /// Page coordinates from container-local coordinates.
    pub fn page(&self, local: (f32, f32)) -> (f32, f32) {
        (local.0 + CONTAINER_LEFT, local.1 + CONTAINER_TOP)
    }

    pub fn node_position(&self, id: i32) -> Option<(f32, f32)> {
        (0..self.nodes.row_count())
            .filter_map(|i| self.nodes.row_data(i))
            .find(|node| node.id == id)
            .map(|node| (node.x, node.y))
    }

    /// Hide a node from the renderer (it keeps its model position).
    pub fn hide(&self, id: i32) {
        self.ctrl.renderer().borrow_mut().hidden.push(id);
    }

    /// Press, move through `path`, release. Returns the release result.
    pub fn drag_along(&self, path: &[(f32, f32)]) -> bool {
        let Some((&first, rest)) = path.split_first() else {
            return false;
        };
        let _ = self.ctrl.handle_pointer_pressed(first.0, first.1);
        for &(x, y) in rest {
            let _ = self.ctrl.handle_pointer_moved(x, y);
        }
        self.ctrl.handle_pointer_released()
    }
}
