//! Freehand lasso selection.
//!
//! While the lasso mode is active, a pointer-down starts recording a path,
//! every move extends it (and updates the overlay the host draws), and the
//! pointer-up selects every node whose rendered position lies inside the
//! closed path.
//!
//! The path is recorded in overlay pixels and the overlay covers the
//! container exactly, so nodes are tested by their *rendered* positions,
//! which live in the same space. Testing model positions would only agree
//! for an untransformed camera.

use crate::error::{AttachError, Capability, GestureError};
use crate::gesture::GestureState;
use crate::hit_test::nodes_in_lasso;
use crate::host::{HostGraph, HostRenderer};
use crate::path::LassoPath;
use crate::selection::LassoSelection;
use crate::settings::LassoSettings;
use log::{debug, trace, warn};
use slint::{Color, SharedString};

/// Drawing surface stacked over the view while the lasso mode is active.
///
/// Bind it to a Slint `Path` element: `commands`, `stroke`,
/// `stroke-width` and `fill`.
#[derive(Debug, Clone, PartialEq)]
pub struct LassoOverlay {
    width: f32,
    height: f32,
    commands: SharedString,
    stroke_color: Color,
    fill_color: Option<Color>,
    line_width: f32,
}

impl LassoOverlay {
    fn new(width: f32, height: f32, settings: &LassoSettings) -> Self {
        let mut overlay = Self {
            width,
            height,
            commands: SharedString::default(),
            stroke_color: settings.stroke_color,
            fill_color: None,
            line_width: settings.line_width,
        };
        overlay.apply_style(settings);
        overlay
    }

    fn apply_style(&mut self, settings: &LassoSettings) {
        self.stroke_color = settings.stroke_color;
        self.line_width = settings.line_width;
        self.fill_color = settings.fill_while_drawing.then_some(settings.fill_color);
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// SVG path commands of the in-progress lasso; empty when idle.
    pub fn commands(&self) -> SharedString {
        self.commands.clone()
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Fill while drawing, `None` when the lasso is only stroked.
    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }
}

/// Per-view lasso controller.
#[derive(Debug, Default)]
pub struct Lasso {
    settings: LassoSettings,
    overlay: Option<LassoOverlay>,
    state: GestureState<LassoPath>,
    selection: LassoSelection,
}

impl Lasso {
    pub const PLUGIN: &'static str = "lasso";

    /// Capabilities a renderer must report for lasso selection to work.
    pub const REQUIRED: [Capability; 2] =
        [Capability::OverlayLayers, Capability::RenderedPositions];

    /// Create an inactive lasso for `renderer`.
    ///
    /// # Errors
    /// [`AttachError::MissingCapability`] if the renderer cannot stack an
    /// overlay or report rendered node positions.
    pub fn attach<R>(renderer: &R, settings: LassoSettings) -> Result<Self, AttachError>
    where
        R: HostRenderer + ?Sized,
    {
        renderer.capabilities().require(Self::PLUGIN, &Self::REQUIRED)?;
        debug!("{} attached with {:?}", Self::PLUGIN, settings);
        Ok(Self {
            settings,
            ..Default::default()
        })
    }

    pub fn settings(&self) -> &LassoSettings {
        &self.settings
    }

    /// Replace the settings; an open overlay picks up the new style.
    pub fn set_settings(&mut self, settings: LassoSettings) {
        self.settings = settings;
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.apply_style(&self.settings);
        }
    }

    pub fn is_active(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_active()
    }

    pub fn overlay(&self) -> Option<&LassoOverlay> {
        self.overlay.as_ref()
    }

    /// Node IDs selected by the last completed lasso, in host listing order.
    pub fn selected_nodes(&self) -> &[i32] {
        self.selection.as_slice()
    }

    pub fn selection(&self) -> &LassoSelection {
        &self.selection
    }

    /// Enter lasso mode, creating an overlay sized to the container.
    pub fn activate<R>(&mut self, renderer: &mut R)
    where
        R: HostRenderer + ?Sized,
    {
        if self.is_active() {
            return;
        }
        let (_, _, width, height) = renderer.container_rect();
        self.overlay = Some(LassoOverlay::new(width, height, &self.settings));
        renderer.refresh();
        debug!("{} activated ({}x{})", Self::PLUGIN, width, height);
    }

    /// Leave lasso mode, dropping the overlay and any path being drawn.
    pub fn deactivate<R>(&mut self, renderer: &mut R)
    where
        R: HostRenderer + ?Sized,
    {
        if self.overlay.take().is_none() {
            return;
        }
        if self.state.abort() {
            warn!("{}: deactivated while drawing, path discarded", Self::PLUGIN);
        }
        renderer.refresh();
        debug!("{} deactivated", Self::PLUGIN);
    }

    pub fn toggle_activation<R>(&mut self, renderer: &mut R)
    where
        R: HostRenderer + ?Sized,
    {
        if self.is_active() {
            self.deactivate(renderer);
        } else {
            self.activate(renderer);
        }
    }

    /// Deactivate and forget the last selection.
    pub fn clear<R>(&mut self, renderer: &mut R)
    where
        R: HostRenderer + ?Sized,
    {
        self.deactivate(renderer);
        self.selection.clear();
    }

    /// Pointer pressed at `client` (same space as the container rect).
    ///
    /// Returns whether the event was consumed; it is not while the lasso
    /// mode is inactive.
    ///
    /// # Errors
    /// [`GestureError::AlreadyActive`] if a path is already being drawn; the
    /// recorded points are kept.
    pub fn pointer_down<R>(
        &mut self,
        client: (f32, f32),
        renderer: &mut R,
    ) -> Result<bool, GestureError>
    where
        R: HostRenderer + ?Sized,
    {
        if !self.is_active() {
            return Ok(false);
        }
        let point = Self::to_canvas(client, &*renderer);
        if let Err(err) = self.state.begin(LassoPath::starting_at(point)) {
            warn!("{}: pointer down ignored, lasso already in progress", Self::PLUGIN);
            return Err(err);
        }
        self.selection.clear();
        self.redraw(renderer);
        debug!("{}: started drawing at ({}, {})", Self::PLUGIN, point.0, point.1);
        Ok(true)
    }

    /// Pointer moved: extend the path. Returns whether the event was consumed.
    pub fn pointer_move<R>(&mut self, client: (f32, f32), renderer: &mut R) -> bool
    where
        R: HostRenderer + ?Sized,
    {
        if !self.is_active() {
            return false;
        }
        let point = Self::to_canvas(client, &*renderer);
        let Some(path) = self.state.accumulator_mut() else {
            return false;
        };
        path.push(point);
        trace!("{}: point {} at ({}, {})", Self::PLUGIN, path.len(), point.0, point.1);
        self.redraw(renderer);
        true
    }

    /// Pointer released: select the nodes inside the path and wipe the
    /// stroke from the overlay.
    ///
    /// Returns the new selection, or `None` if no path was being drawn.
    pub fn pointer_up<G, R>(&mut self, graph: &G, renderer: &mut R) -> Option<&[i32]>
    where
        G: HostGraph + ?Sized,
        R: HostRenderer + ?Sized,
    {
        let path = self.state.finish()?;

        let rendered = (0..graph.node_count()).filter_map(|i| {
            let (id, _) = graph.node_at(i)?;
            Some((id, renderer.rendered_position(id)?))
        });
        self.selection
            .replace_selection(nodes_in_lasso(&path, rendered, self.settings.fill_rule));

        if let Some(overlay) = self.overlay.as_mut() {
            overlay.commands = SharedString::default();
        }
        renderer.refresh();
        debug!(
            "{}: {} point path selected {} node(s)",
            Self::PLUGIN,
            path.len(),
            self.selection.len()
        );
        Some(self.selection.as_slice())
    }

    fn to_canvas<R>(client: (f32, f32), renderer: &R) -> (f32, f32)
    where
        R: HostRenderer + ?Sized,
    {
        let (left, top, _, _) = renderer.container_rect();
        (client.0 - left, client.1 - top)
    }

    fn redraw<R>(&mut self, renderer: &mut R)
    where
        R: HostRenderer + ?Sized,
    {
        let (Some(overlay), Some(path)) = (self.overlay.as_mut(), self.state.accumulator()) else {
            return;
        };
        overlay.commands = path.to_commands(false).into();
        renderer.refresh();
    }
}
