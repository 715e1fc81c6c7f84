//! # Slint Node Gestures
//!
//! Pointer gestures for graph views: drag individual nodes around a panned,
//! zoomed and rotated view, and select nodes by drawing a freehand lasso.
//!
//! ## Features
//!
//! - **Host-Agnostic** - Talks to the view only through the `HostGraph` and
//!   `HostRenderer` traits; `HostGraph` is implemented for Slint `VecModel`s
//! - **Capability Checks** - Plugins refuse to attach to renderers that
//!   cannot support them, instead of failing per event
//! - **Rotation-Aware Dragging** - Pointer positions are mapped back to model
//!   space by calibrating against two reference nodes
//! - **Lasso Selection** - Non-zero or even-odd containment, rendered as SVG
//!   path commands for a Slint `Path` overlay
//! - **Explicit Gesture State** - Idle/Active state machine per controller,
//!   re-entrant presses are rejected
//!
//! ## Core Types
//!
//! - [`NodeDrag`] - Hover tracking and node drag gesture
//! - [`Lasso`] - Lasso mode, overlay and selection gesture
//! - [`GestureController`] - Both gestures behind Slint-style callbacks
//!
//! ## Geometry Helpers
//!
//! - [`map_pointer_to_model`] - Container pixels → model coordinates
//! - [`nodes_in_lasso`] - Lasso hit-testing
//! - [`find_node_at`] - Radius hit-testing
//! - [`Camera`] - Model → container pixel projection

pub mod error;
pub mod host;
pub mod camera;
pub mod mapping;
pub mod path;
pub mod gesture;
pub mod selection;
pub mod settings;
pub mod drag;
pub mod lasso;
pub mod controller;

// Re-export traits and functions
pub use error::{AttachError, Axis, Capability, GestureError};
pub use host::{HostGraph, HostRenderer, MovableNode, RendererCapabilities};
pub use camera::Camera;
pub use mapping::{map_pointer_to_model, ReferenceNode, ReferencePair};
pub use path::{FillRule, LassoPath};
pub use hit_test::{find_node_at, nodes_in_lasso, NodePosition, SimpleNodePosition};
pub use gesture::GestureState;
pub use selection::LassoSelection;
pub use settings::{LassoSettings, LassoSettingsPatch, PatchColor};
pub use drag::{DragOutcome, NodeDrag};
pub use lasso::{Lasso, LassoOverlay};
pub use controller::GestureController;
