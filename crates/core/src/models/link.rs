//! Link view data structure for graph rendering

use serde::{Deserialize, Serialize};

use super::label::LabelStyle;
use super::node::RenderNode;

/// Geometry used to draw a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkShape {
    /// Straight segment between two distinct nodes
    #[default]
    Line,
    /// Circular arc between two distinct nodes, curved by the offset multiple
    Arc,
    /// Loop from a node back to itself
    #[serde(rename = "self")]
    SelfLoop,
}

/// Per-link drawing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkCfg {
    pub shape: LinkShape,
    /// Stroke color of the link and fill color of its arrowhead
    pub stroke: String,
    /// Perpendicular distance between parallel arcs, per unit of offset multiple
    pub curve_offset: f64,
    pub label: LabelStyle,
}

impl Default for LinkCfg {
    fn default() -> Self {
        Self {
            shape: LinkShape::Line,
            stroke: "#999".to_string(),
            curve_offset: 20.0,
            label: LabelStyle::default(),
        }
    }
}

/// Immutable per-frame view of a link between two rendered nodes
///
/// `offset_multiple` is assigned by the multi-edge separation stage before the
/// frame is handed to the renderer. Its sign picks the side an arc bulges
/// toward and its magnitude scales `cfg.curve_offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLink<'a> {
    pub source: &'a RenderNode,
    pub target: &'a RenderNode,
    pub name: String,
    pub cfg: LinkCfg,
    pub offset_multiple: i32,
}

impl<'a> RenderLink<'a> {
    /// Creates a straight link with the default configuration
    #[must_use]
    pub fn new(source: &'a RenderNode, target: &'a RenderNode, name: impl Into<String>) -> Self {
        Self {
            source,
            target,
            name: name.into(),
            cfg: LinkCfg::default(),
            offset_multiple: 0,
        }
    }

    /// Replaces the drawing configuration
    #[must_use]
    pub fn with_cfg(mut self, cfg: LinkCfg) -> Self {
        self.cfg = cfg;
        self
    }

    /// Sets the link shape
    #[must_use]
    pub fn with_shape(mut self, shape: LinkShape) -> Self {
        self.cfg.shape = shape;
        self
    }

    /// Sets the signed offset multiple
    #[must_use]
    pub fn with_offset_multiple(mut self, offset_multiple: i32) -> Self {
        self.offset_multiple = offset_multiple;
        self
    }

    /// True when both ends are the same node
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        std::ptr::eq(self.source, self.target) || self.source.id == self.target.id
    }

    /// Signed perpendicular displacement of the arc's offset point
    #[must_use]
    pub fn curve_displacement(&self) -> f64 {
        self.cfg.curve_offset * f64::from(self.offset_multiple)
    }
}
