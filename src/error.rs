use thiserror::Error;

/// Axis of a coordinate, used to report which interpolation degenerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Renderer capabilities a plugin can require at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    RenderedPositions,
    ViewInteractionToggle,
    OverlayLayers,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::RenderedPositions => f.write_str("rendered node positions"),
            Capability::ViewInteractionToggle => f.write_str("view interaction toggle"),
            Capability::OverlayLayers => f.write_str("overlay layers"),
        }
    }
}

/// Setup-time failure: the renderer cannot host the plugin.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachError {
    #[error("{plugin} requires a renderer with {capability}")]
    MissingCapability {
        plugin: &'static str,
        capability: Capability,
    },
}

/// A pointer event that could not be turned into a gesture step.
///
/// Every variant leaves the controller Idle (or untouched, for
/// [`GestureError::AlreadyActive`]).
#[derive(Debug, Error, PartialEq)]
pub enum GestureError {
    #[error("dragging needs at least two nodes, graph has {count}")]
    TooFewNodes { count: usize },

    #[error("reference nodes share the same rendered {axis} coordinate")]
    DegenerateReference { axis: Axis },

    #[error("a gesture is already in progress")]
    AlreadyActive,

    #[error("host graph has no node with id {id}")]
    UnknownNode { id: i32 },
}
