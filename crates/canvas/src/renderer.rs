//! Frame renderer
//!
//! [`Renderer`] owns a drawing surface, an option snapshot and a pan/zoom
//! transform. Each [`Renderer::draw`] call clears the visible area and paints
//! one frame: every link first, then every node on top.

use forcegraph_core::{FrameData, RenderOption, Transform};
use tracing::{trace, warn};

use crate::error::Result;
use crate::links::draw_link;
use crate::nodes::draw_node;
use crate::surface::{DrawingSurface, TextAlign, TextBaseline, with_saved_state};

/// Immediate-mode renderer for force-directed graph frames
#[derive(Debug, Clone)]
pub struct Renderer<S: DrawingSurface> {
    context: S,
    option: RenderOption,
    transform: Transform,
}

impl<S: DrawingSurface> Renderer<S> {
    /// Creates a renderer with the identity transform
    #[must_use]
    pub fn new(context: S, option: RenderOption) -> Self {
        Self {
            context,
            option,
            transform: Transform::identity(),
        }
    }

    /// Creates a renderer from a JSON option document
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidOption`](crate::RenderError::InvalidOption)
    /// if the document is malformed or fails validation.
    pub fn from_json_option(context: S, json: &str) -> Result<Self> {
        let option = RenderOption::from_json(json)?;
        Ok(Self::new(context, option))
    }

    /// Replaces the surface, returning the previous one
    pub fn set_context(&mut self, context: S) -> S {
        std::mem::replace(&mut self.context, context)
    }

    pub const fn set_option(&mut self, option: RenderOption) {
        self.option = option;
    }

    pub const fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    #[must_use]
    pub const fn context(&self) -> &S {
        &self.context
    }

    pub const fn context_mut(&mut self) -> &mut S {
        &mut self.context
    }

    /// Consumes the renderer, handing back its surface
    #[must_use]
    pub fn into_context(self) -> S {
        self.context
    }

    #[must_use]
    pub const fn option(&self) -> &RenderOption {
        &self.option
    }

    #[must_use]
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// Paints one frame
    ///
    /// The surface state is saved before and restored after the frame, also
    /// when drawing fails part way.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects any operation.
    pub fn draw(&mut self, frame: &FrameData<'_>) -> Result<()> {
        let layout = self.option.layout;
        let transform = self.transform;
        trace!(
            links = frame.links.len(),
            nodes = frame.nodes.len(),
            zoom = transform.k,
            "Drawing frame"
        );

        with_saved_state(&mut self.context, |surface| {
            surface.set_text_align(TextAlign::Center);
            surface.set_text_baseline(TextBaseline::Middle);
            surface.clear_rect(0.0, 0.0, layout.width, layout.height);
            surface.translate(transform.x, transform.y)?;
            surface.scale(transform.k, transform.k)?;

            frame
                .links
                .iter()
                .try_for_each(|link| draw_link(surface, link))?;
            frame
                .nodes
                .iter()
                .try_for_each(|node| draw_node(surface, node))
        })
        .inspect_err(|err| warn!(error = %err, "Frame draw failed"))
    }
}
