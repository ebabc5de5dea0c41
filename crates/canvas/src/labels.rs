//! Link and node label drawing
//!
//! Both kinds of label are truncated to `LabelStyle::width` and drawn over a
//! filled background box so they stay legible on top of links.

use forcegraph_core::geometry::{
    Point, readable_angle, rect_corners_from_center, rotate_points,
};
use forcegraph_core::{LabelStyle, RenderNode};

use crate::error::Result;
use crate::links::LabelPlacement;
use crate::path::{Path, rounded_rect_path, trace_path};
use crate::surface::{DrawingSurface, with_saved_state};
use crate::text::truncate_text;

/// Horizontal padding added to a link label's measured width
pub const LINK_LABEL_PADDING: f64 = 4.0;

/// Padding added to a node label's measured width and font size
pub const NODE_LABEL_PADDING: f64 = 2.0;

/// Gap between a node's rim and its label anchor
pub const NODE_LABEL_OFFSET: f64 = 10.0;

/// Draws a link label centered at `placement`
///
/// The background box is rotated by the placement angle; the text is rotated
/// by the readable version of that angle so it never renders upside down.
///
/// # Errors
///
/// Returns an error if measuring or drawing fails.
pub fn draw_link_label<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    name: &str,
    style: &LabelStyle,
    placement: LabelPlacement,
) -> Result<()> {
    surface.set_font(&style.font());
    let text = truncate_text(surface, name, style.width)?;
    let text_width = surface.measure_text(&text)? + LINK_LABEL_PADDING;

    let corners = rect_corners_from_center(placement.point, text_width, style.font_size);
    let background = rotate_points(&corners, placement.point, placement.angle);
    trace_path(surface, &Path::polygon(&background))?;
    surface.set_fill_style(&style.background_color);
    surface.fill();

    with_saved_state(surface, |s| {
        s.translate(placement.point.x, placement.point.y)?;
        s.rotate(readable_angle(placement.angle))?;
        s.set_fill_style(&style.color);
        s.fill_text(&text, 0.0, 0.0, Some(style.width))
    })
}

/// Point a node's label is centered on
#[must_use]
pub fn node_label_anchor(node: &RenderNode) -> Point {
    Point::new(node.x, node.y + node.radius() + NODE_LABEL_OFFSET)
}

/// Draws a node's name in a rounded box below the node
///
/// # Errors
///
/// Returns an error if measuring or drawing fails.
pub fn draw_node_label<S: DrawingSurface + ?Sized>(surface: &mut S, node: &RenderNode) -> Result<()> {
    let style = &node.cfg.label;
    let anchor = node_label_anchor(node);

    surface.set_font(&style.font());
    let text = truncate_text(surface, &node.name, style.width)?;
    let text_width = surface.measure_text(&text)? + NODE_LABEL_PADDING;

    let height = style.font_size + NODE_LABEL_PADDING;
    let width = text_width + height;
    let [top_left, ..] = rect_corners_from_center(anchor, width, height);
    let radius = style.border_radius.min(width / 2.0).min(height / 2.0);

    trace_path(
        surface,
        &rounded_rect_path(top_left.x, top_left.y, width, height, radius),
    )?;
    surface.set_fill_style(&style.background_color);
    surface.fill();

    surface.set_fill_style(&style.color);
    surface.fill_text(&text, anchor.x, anchor.y, Some(text_width))
}
