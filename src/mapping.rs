//! Pointer-to-model coordinate mapping.
//!
//! The renderer only tells us where nodes ended up on screen. To turn a
//! pointer position back into model coordinates we calibrate against two
//! reference nodes whose model and rendered positions are both known:
//! de-rotate their model positions by the camera angle, linearly
//! interpolate each axis independently, then rotate the result back.

use crate::error::{Axis, GestureError};
use crate::host::{HostGraph, HostRenderer};

/// A node whose model and rendered positions are both known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceNode {
    pub model: (f32, f32),
    pub rendered: (f32, f32),
}

/// The two nodes used to calibrate a mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePair(pub ReferenceNode, pub ReferenceNode);

impl ReferencePair {
    /// Pick the first two nodes of the host listing.
    ///
    /// Nodes without a rendered position are skipped, so the pair is the
    /// first two *rendered* nodes. Fails when fewer than two exist.
    pub fn from_host<G, R>(graph: &G, renderer: &R) -> Result<Self, GestureError>
    where
        G: HostGraph + ?Sized,
        R: HostRenderer + ?Sized,
    {
        let count = graph.node_count();
        let mut refs = (0..count).filter_map(|i| {
            let (id, model) = graph.node_at(i)?;
            let rendered = renderer.rendered_position(id)?;
            Some(ReferenceNode { model, rendered })
        });

        match (refs.next(), refs.next()) {
            (Some(first), Some(second)) => Ok(Self(first, second)),
            _ => Err(GestureError::TooFewNodes { count }),
        }
    }
}

/// Rotate `(x, y)` by `-angle`, given its precomputed cos/sin.
fn derotate((x, y): (f32, f32), cos: f32, sin: f32) -> (f32, f32) {
    (x * cos + y * sin, y * cos - x * sin)
}

/// Inverse of [`derotate`].
fn rotate((x, y): (f32, f32), cos: f32, sin: f32) -> (f32, f32) {
    (x * cos - y * sin, y * cos + x * sin)
}

/// Map `value` from `[from0, from1]` onto `[to0, to1]`.
///
/// A zero-width source interval only maps its single point, and only when
/// the target interval is zero-width as well.
fn interpolate(
    value: f32,
    from0: f32,
    from1: f32,
    to0: f32,
    to1: f32,
    axis: Axis,
) -> Result<f32, GestureError> {
    let span = from1 - from0;
    if span == 0.0 && value == from0 && to0 == to1 {
        return Ok(to0);
    }
    if span == 0.0 || !span.is_finite() {
        return Err(GestureError::DegenerateReference { axis });
    }
    let t = (value - from0) / span;
    Ok(to0 + t * (to1 - to0))
}

/// Convert a pointer position in container pixels into model space.
///
/// `angle` is a single snapshot of the camera rotation; the same value is
/// used for de-rotation and re-rotation.
///
/// # Errors
/// [`GestureError::DegenerateReference`] if the references share a rendered
/// coordinate on either axis, or if the result would not be finite.
pub fn map_pointer_to_model(
    pointer: (f32, f32),
    angle: f32,
    refs: &ReferencePair,
) -> Result<(f32, f32), GestureError> {
    let (sin, cos) = angle.sin_cos();
    let ReferencePair(a, b) = refs;

    let a_model = derotate(a.model, cos, sin);
    let b_model = derotate(b.model, cos, sin);

    let x = interpolate(pointer.0, a.rendered.0, b.rendered.0, a_model.0, b_model.0, Axis::X)?;
    let y = interpolate(pointer.1, a.rendered.1, b.rendered.1, a_model.1, b_model.1, Axis::Y)?;

    let (fx, fy) = rotate((x, y), cos, sin);
    if !fx.is_finite() {
        return Err(GestureError::DegenerateReference { axis: Axis::X });
    }
    if !fy.is_finite() {
        return Err(GestureError::DegenerateReference { axis: Axis::Y });
    }
    Ok((fx, fy))
}
