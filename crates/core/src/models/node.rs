//! Node data structure for graph rendering

use serde::{Deserialize, Serialize};

use super::label::LabelStyle;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Per-node drawing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeCfg {
    /// Circle radius, never negative
    pub radius: f64,
    /// Circle fill color
    pub background_color: String,
    /// Label style for the node name
    pub label: LabelStyle,
}

impl Default for NodeCfg {
    fn default() -> Self {
        Self {
            radius: 20.0,
            background_color: "#5B8FF9".to_string(),
            label: LabelStyle::default(),
        }
    }
}

/// A node with a layout-resolved position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub name: String,
    #[serde(default)]
    pub cfg: NodeCfg,
}

impl RenderNode {
    /// Creates a node at `(x, y)` with the default configuration
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            name: name.into(),
            cfg: NodeCfg::default(),
        }
    }

    /// Replaces the drawing configuration
    #[must_use]
    pub fn with_cfg(mut self, cfg: NodeCfg) -> Self {
        self.cfg = cfg;
        self
    }

    /// Sets the circle radius
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.cfg.radius = radius;
        self
    }

    /// Center of the node
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Circle radius
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.cfg.radius
    }

    /// Validates position, radius and label style
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] for a non-finite position or a negative
    /// radius, and propagates label style errors.
    pub fn validate(&self) -> Result<()> {
        if !self.position().is_finite() {
            return Err(Error::invalid_node(&self.id, "position is not finite"));
        }
        if !self.cfg.radius.is_finite() || self.cfg.radius < 0.0 {
            return Err(Error::invalid_node(
                &self.id,
                format!("radius {} must be a non-negative number", self.cfg.radius),
            ));
        }
        self.cfg.label.validate()
    }
}
