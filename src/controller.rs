//! High-level controller wiring both gestures to a Slint window.
//!
//! The [`GestureController`] owns the host graph and renderer adapters, a
//! [`NodeDrag`] and a [`Lasso`], and routes pointer events to whichever of
//! them should see them.
//!
//! # Example
//!
//! ```ignore
//! use slint_node_gestures::{GestureController, LassoSettings};
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let nodes = std::rc::Rc::new(slint::VecModel::from(initial_nodes()));
//!     let renderer = WindowRenderer::new(window.as_weak());
//!     let ctrl =
//!         GestureController::new(nodes.clone(), renderer, LassoSettings::default()).unwrap();
//!
//!     window.on_node_entered(ctrl.node_hovered_callback());
//!     window.on_node_exited(ctrl.node_left_callback());
//!     window.on_pointer_pressed(ctrl.pointer_pressed_callback());
//!     // The renderer's `refresh()` fires whenever the lasso overlay
//!     // changes; push the new commands to the `Path` after each event.
//!     let sync_lasso = {
//!         let ctrl = ctrl.clone();
//!         let w = window.as_weak();
//!         std::rc::Rc::new(move || {
//!             if let Some(w) = w.upgrade() {
//!                 w.set_lasso_commands(ctrl.lasso_commands());
//!             }
//!         })
//!     };
//!     window.on_pointer_moved({
//!         let (ctrl, sync_lasso) = (ctrl.clone(), sync_lasso.clone());
//!         move |x, y| {
//!             ctrl.handle_pointer_moved(x, y).ok();
//!             sync_lasso();
//!         }
//!     });
//!     window.on_pointer_released({
//!         let ctrl = ctrl.clone();
//!         move || {
//!             let consumed = ctrl.handle_pointer_released();
//!             sync_lasso();
//!             consumed
//!         }
//!     });
//!     window.on_toggle_lasso(ctrl.toggle_lasso_callback());
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::drag::NodeDrag;
use crate::error::{AttachError, GestureError};
use crate::hit_test::find_node_at;
use crate::host::{HostGraph, HostRenderer};
use crate::lasso::Lasso;
use crate::settings::LassoSettings;
use slint::{SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

/// Controller that owns gesture state and provides callback implementations.
///
/// Pointer events go to the drag controller while a drag is running,
/// otherwise to the lasso while lasso mode is active, otherwise back to the
/// drag controller. Pointer coordinates are in the same space as
/// [`HostRenderer::container_rect`].
///
/// Clone this controller to share it across callbacks.
pub struct GestureController<G, R> {
    graph: Rc<RefCell<G>>,
    renderer: Rc<RefCell<R>>,
    drag: Rc<RefCell<NodeDrag>>,
    lasso: Rc<RefCell<Lasso>>,
}

impl<G, R> Clone for GestureController<G, R> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            renderer: self.renderer.clone(),
            drag: self.drag.clone(),
            lasso: self.lasso.clone(),
        }
    }
}

impl<G, R> GestureController<G, R>
where
    G: HostGraph,
    R: HostRenderer,
{
    /// Attach both gestures to `renderer`.
    ///
    /// # Errors
    /// [`AttachError::MissingCapability`] if the renderer cannot host either
    /// the drag or the lasso gesture.
    pub fn new(graph: G, renderer: R, settings: LassoSettings) -> Result<Self, AttachError> {
        let drag = NodeDrag::attach(&renderer)?;
        let lasso = Lasso::attach(&renderer, settings)?;
        Ok(Self {
            graph: Rc::new(RefCell::new(graph)),
            renderer: Rc::new(RefCell::new(renderer)),
            drag: Rc::new(RefCell::new(drag)),
            lasso: Rc::new(RefCell::new(lasso)),
        })
    }

    /// Get access to the host graph adapter.
    pub fn graph(&self) -> Rc<RefCell<G>> {
        self.graph.clone()
    }

    /// Get access to the host renderer adapter.
    pub fn renderer(&self) -> Rc<RefCell<R>> {
        self.renderer.clone()
    }

    /// ID of the node currently being dragged.
    pub fn dragged_node_id(&self) -> Option<i32> {
        self.drag.borrow().dragged_node()
    }

    pub fn is_lasso_active(&self) -> bool {
        self.lasso.borrow().is_active()
    }

    /// SVG commands of the in-progress lasso, empty when nothing is drawn.
    pub fn lasso_commands(&self) -> SharedString {
        self.lasso
            .borrow()
            .overlay()
            .map(|overlay| overlay.commands())
            .unwrap_or_default()
    }

    /// Node IDs selected by the last lasso gesture.
    pub fn selected_nodes(&self) -> Vec<i32> {
        self.lasso.borrow().selected_nodes().to_vec()
    }

    /// Copy the lasso selection into a Slint model.
    pub fn sync_selection_to_model(&self, model: &VecModel<i32>) {
        self.lasso.borrow().selection().sync_to_model(model);
    }

    pub fn set_lasso_settings(&self, settings: LassoSettings) {
        self.lasso.borrow_mut().set_settings(settings);
    }

    /// Switch lasso mode on or off. Returns the new state.
    pub fn toggle_lasso(&self) -> bool {
        let mut lasso = self.lasso.borrow_mut();
        lasso.toggle_activation(&mut *self.renderer.borrow_mut());
        lasso.is_active()
    }

    pub fn set_lasso_active(&self, active: bool) {
        let mut lasso = self.lasso.borrow_mut();
        if active {
            lasso.activate(&mut *self.renderer.borrow_mut());
        } else {
            lasso.deactivate(&mut *self.renderer.borrow_mut());
        }
    }

    /// Tear down both gestures (view is going away).
    pub fn detach(&self) {
        let mut renderer = self.renderer.borrow_mut();
        self.drag.borrow_mut().detach(&mut *renderer);
        self.lasso.borrow_mut().clear(&mut *renderer);
    }

    // === Callback factories ===

    /// Returns a callback for node enter events.
    pub fn node_hovered_callback(&self) -> impl Fn(i32) {
        let drag = self.drag.clone();
        move |node_id| drag.borrow_mut().node_hovered(node_id)
    }

    /// Returns a callback for node exit events.
    pub fn node_left_callback(&self) -> impl Fn(i32) {
        let drag = self.drag.clone();
        move |node_id| drag.borrow_mut().node_left(node_id)
    }

    /// Returns a callback for pointer presses; it reports whether the event
    /// was consumed.
    pub fn pointer_pressed_callback(&self) -> impl Fn(f32, f32) -> bool {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_pressed(x, y).unwrap_or(false)
    }

    /// Returns a callback for pointer moves.
    pub fn pointer_moved_callback(&self) -> impl Fn(f32, f32) -> bool {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_pointer_moved(x, y).unwrap_or(false)
    }

    /// Returns a callback for pointer releases.
    pub fn pointer_released_callback(&self) -> impl Fn() -> bool {
        let ctrl = self.clone();
        move || ctrl.handle_pointer_released()
    }

    /// Returns a callback toggling lasso mode.
    pub fn toggle_lasso_callback(&self) -> impl Fn() -> bool {
        let ctrl = self.clone();
        move || ctrl.toggle_lasso()
    }

    // === Direct handlers ===

    fn lasso_takes_pointer(&self) -> bool {
        !self.drag.borrow().is_dragging() && self.lasso.borrow().is_active()
    }

    /// Handle a pointer press. Returns whether a gesture consumed it.
    pub fn handle_pointer_pressed(&self, x: f32, y: f32) -> Result<bool, GestureError> {
        if self.lasso_takes_pointer() {
            return self
                .lasso
                .borrow_mut()
                .pointer_down((x, y), &mut *self.renderer.borrow_mut());
        }
        self.drag
            .borrow_mut()
            .pointer_down(&*self.graph.borrow(), &mut *self.renderer.borrow_mut())
            .map(|node| node.is_some())
    }

    /// Handle a pointer move. Returns whether a gesture consumed it.
    pub fn handle_pointer_moved(&self, x: f32, y: f32) -> Result<bool, GestureError> {
        if self.lasso_takes_pointer() {
            return Ok(self
                .lasso
                .borrow_mut()
                .pointer_move((x, y), &mut *self.renderer.borrow_mut()));
        }
        self.drag
            .borrow_mut()
            .pointer_move(
                (x, y),
                &mut *self.graph.borrow_mut(),
                &mut *self.renderer.borrow_mut(),
            )
            .map(|position| position.is_some())
    }

    /// Handle a pointer release. Returns whether a gesture finished.
    pub fn handle_pointer_released(&self) -> bool {
        if self.lasso_takes_pointer() {
            return self
                .lasso
                .borrow_mut()
                .pointer_up(&*self.graph.borrow(), &mut *self.renderer.borrow_mut())
                .is_some();
        }
        self.drag
            .borrow_mut()
            .pointer_up(&mut *self.renderer.borrow_mut())
            .is_some()
    }

    /// Find the topmost node whose rendered position is within `hit_radius`
    /// of the pointer.
    pub fn node_at(&self, x: f32, y: f32, hit_radius: f32) -> Option<i32> {
        let graph = self.graph.borrow();
        let renderer = self.renderer.borrow();
        let (left, top, _, _) = renderer.container_rect();

        let nodes = (0..graph.node_count()).filter_map(|i| {
            let (id, _) = graph.node_at(i)?;
            Some((id, renderer.rendered_position(id)?))
        });
        find_node_at(x - left, y - top, nodes, hit_radius)
    }

    /// Derive hover enter/leave events from a pointer position, for hosts
    /// whose renderer does not report them.
    ///
    /// Returns the node now under the pointer.
    pub fn update_hover_at(&self, x: f32, y: f32, hit_radius: f32) -> Option<i32> {
        let hit = self.node_at(x, y, hit_radius);
        let mut drag = self.drag.borrow_mut();

        let stale: Vec<i32> = drag
            .hovered_nodes()
            .iter()
            .copied()
            .filter(|&id| Some(id) != hit)
            .collect();
        for id in stale {
            drag.node_left(id);
        }
        if let Some(id) = hit {
            drag.node_hovered(id);
        }
        hit
    }
}
