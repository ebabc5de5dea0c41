//! Per-frame input to the renderer

use super::link::RenderLink;
use super::node::RenderNode;

/// Nodes and links for one frame, borrowed for the duration of one draw
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    pub links: &'a [RenderLink<'a>],
    pub nodes: &'a [RenderNode],
}

impl<'a> FrameData<'a> {
    #[must_use]
    pub const fn new(links: &'a [RenderLink<'a>], nodes: &'a [RenderNode]) -> Self {
        Self { links, nodes }
    }

    /// A frame with nothing to draw
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            links: &[],
            nodes: &[],
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.links.is_empty() && self.nodes.is_empty()
    }
}
