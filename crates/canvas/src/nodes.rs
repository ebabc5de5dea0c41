//! Node drawing

use std::f64::consts::TAU;

use forcegraph_core::RenderNode;

use crate::error::Result;
use crate::labels::draw_node_label;
use crate::surface::DrawingSurface;

/// Fills the node's disc, then draws its label
///
/// # Errors
///
/// Returns an error if the surface rejects the disc or the label.
pub fn draw_node<S: DrawingSurface + ?Sized>(surface: &mut S, node: &RenderNode) -> Result<()> {
    surface.begin_path();
    surface.arc(node.x, node.y, node.radius(), 0.0, TAU)?;
    surface.close_path();
    surface.set_fill_style(&node.cfg.background_color);
    surface.fill();

    draw_node_label(surface, node)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::recording::{RecordingSurface, SurfaceOp};

    #[test]
    fn test_disc_then_label() {
        let mut surface = RecordingSurface::new();
        let node = RenderNode::new("n", "Node", 5.0, 6.0).with_radius(12.0);
        draw_node(&mut surface, &node).unwrap();

        let ops = surface.ops();
        assert_eq!(ops[0], SurfaceOp::BeginPath);
        assert_eq!(
            ops[1],
            SurfaceOp::Arc {
                x: 5.0,
                y: 6.0,
                radius: 12.0,
                start_angle: 0.0,
                end_angle: TAU,
            }
        );
        assert_eq!(ops[2], SurfaceOp::ClosePath);
        assert_eq!(ops[3], SurfaceOp::SetFillStyle("#5B8FF9".to_string()));
        assert_eq!(ops[4], SurfaceOp::Fill);
        assert_eq!(surface.drawn_text().collect::<Vec<_>>(), vec!["Node"]);
    }
}
