//! Link geometry and drawing
//!
//! Geometry is computed first as plain values ([`LinkGeometry`]) and painted
//! afterwards, so every shape can be tested without a surface.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use forcegraph_core::geometry::{
    Point, checked_circle_center, circle_point_from_angle, normalize_angle,
};
use forcegraph_core::{LinkShape, RenderLink, RenderNode};
use tracing::debug;

use crate::error::Result;
use crate::labels::draw_link_label;
use crate::path::{arrow_head_path, trace_path};
use crate::surface::{DrawingSurface, with_saved_state};

/// Gap between the source node's rim and the start of a link
pub const SOURCE_GAP: f64 = 2.0;

/// Gap between the target node's rim and the arrow tip
pub const TARGET_GAP: f64 = 4.0;

/// Half the vertical spread between a self-loop's two anchors
pub const SELF_LOOP_SPREAD: f64 = 8.0;

/// Distance of a self-loop's control point beyond the node rim
pub const SELF_LOOP_REACH: f64 = 80.0;

/// Distance of a self-loop's label beyond the node rim
pub const SELF_LOOP_LABEL_DISTANCE: f64 = 50.0;

/// Where an arrowhead goes and which way it points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPlacement {
    pub tip: Point,
    pub angle: f64,
}

/// Where a link label is centered and the angle of its background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub point: Point,
    pub angle: f64,
}

/// Straight segment between two node rims
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineGeometry {
    pub start: Point,
    pub end: Point,
    pub arrow: ArrowPlacement,
    pub label: LabelPlacement,
}

/// Circular arc through both node centers and the offset point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point,
    pub radius: f64,
    /// Angle the stroke starts at; the stroke sweeps toward increasing angles
    pub start_angle: f64,
    pub end_angle: f64,
    /// Midpoint displaced perpendicular to the chord
    pub offset_point: Point,
    pub arrow: ArrowPlacement,
    pub label: LabelPlacement,
}

/// Quadratic loop leaving and re-entering the right side of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelfLoopGeometry {
    pub start: Point,
    pub control: Point,
    pub end: Point,
    pub arrow: ArrowPlacement,
    pub label: LabelPlacement,
}

/// Resolved geometry of one link
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkGeometry {
    Line(LineGeometry),
    Arc(ArcGeometry),
    SelfLoop(SelfLoopGeometry),
}

impl LinkGeometry {
    #[must_use]
    pub const fn arrow(&self) -> ArrowPlacement {
        match self {
            Self::Line(g) => g.arrow,
            Self::Arc(g) => g.arrow,
            Self::SelfLoop(g) => g.arrow,
        }
    }

    #[must_use]
    pub const fn label(&self) -> LabelPlacement {
        match self {
            Self::Line(g) => g.label,
            Self::Arc(g) => g.label,
            Self::SelfLoop(g) => g.label,
        }
    }

    /// Begins a path and adds the link's stroke to it
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the arc.
    pub fn trace<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.begin_path();
        match self {
            Self::Line(g) => {
                surface.move_to(g.start.x, g.start.y);
                surface.line_to(g.end.x, g.end.y);
            }
            Self::Arc(g) => {
                surface.arc(g.center.x, g.center.y, g.radius, g.start_angle, g.end_angle)?;
            }
            Self::SelfLoop(g) => {
                surface.move_to(g.start.x, g.start.y);
                surface.quadratic_curve_to(g.control.x, g.control.y, g.end.x, g.end.y);
            }
        }
        Ok(())
    }
}

/// Straight link from the rim of `source` to just short of the rim of `target`
#[must_use]
pub fn line_geometry(source: &RenderNode, target: &RenderNode) -> LineGeometry {
    let (from, to) = (source.position(), target.position());
    let angle = from.angle_to(to);
    let start = circle_point_from_angle(from.x, from.y, source.radius() + SOURCE_GAP, angle);
    let end = circle_point_from_angle(to.x, to.y, target.radius() + TARGET_GAP, angle + PI);

    LineGeometry {
        start,
        end,
        arrow: ArrowPlacement { tip: end, angle },
        label: LabelPlacement {
            point: from.midpoint(to),
            angle,
        },
    }
}

/// Arc from `source` to `target` bulging by `displacement` to one side
///
/// `offset_multiple` picks the side and `displacement` is the already scaled
/// perpendicular offset (`curve_offset * offset_multiple`). Returns `None`
/// when no finite circle passes through the three points: a zero multiple,
/// coincident endpoints, or a collinear triple.
#[must_use]
pub fn arc_geometry(
    source: &RenderNode,
    target: &RenderNode,
    displacement: f64,
    offset_multiple: i32,
) -> Option<ArcGeometry> {
    if offset_multiple == 0 {
        return None;
    }

    let (from, to) = (source.position(), target.position());
    let angle = from.angle_to(to);
    let mid = from.midpoint(to);
    let offset_point = circle_point_from_angle(mid.x, mid.y, displacement, angle - FRAC_PI_2);

    let center = checked_circle_center(from, offset_point, to)?;
    let radius = from.distance_to(center);
    if !radius.is_finite() || radius <= 0.0 {
        return None;
    }

    let mut source_angle = normalize_angle(center.angle_to(from));
    let target_angle = normalize_angle(center.angle_to(to));
    if offset_multiple < 0 && source_angle < target_angle {
        source_angle += TAU;
    }

    let sign = f64::from(offset_multiple.signum());
    let start = source_angle + (source.radius() + SOURCE_GAP) / radius * sign;
    let end = target_angle - (target.radius() + TARGET_GAP) / radius * sign;
    let (start_angle, end_angle) = if offset_multiple < 0 && start > end {
        (end, start)
    } else {
        (start, end)
    };

    let terminal = circle_point_from_angle(center.x, center.y, radius, end);

    Some(ArcGeometry {
        center,
        radius,
        start_angle,
        end_angle,
        offset_point,
        arrow: ArrowPlacement {
            tip: terminal,
            angle: terminal.angle_to(to),
        },
        label: LabelPlacement {
            point: offset_point,
            angle,
        },
    })
}

/// Loop on the right side of `node`
///
/// The anchors sit where the horizontal lines `y = ±SELF_LOOP_SPREAD` cross
/// the vertical tangent `x = cx + r`; the second anchor is pushed out by the
/// source gap so the arrowhead clears the rim.
#[must_use]
pub fn self_loop_geometry(node: &RenderNode) -> SelfLoopGeometry {
    let c = node.position();
    let r = node.radius();
    let t = (SELF_LOOP_SPREAD / r).atan();
    let h = r / t.cos();

    let start = circle_point_from_angle(c.x, c.y, h, t);
    let end = circle_point_from_angle(c.x, c.y, h + SOURCE_GAP, -t);
    let control = circle_point_from_angle(c.x, c.y, r + SELF_LOOP_REACH, 0.0);

    SelfLoopGeometry {
        start,
        control,
        end,
        arrow: ArrowPlacement {
            tip: end,
            angle: control.angle_to(end),
        },
        label: LabelPlacement {
            point: circle_point_from_angle(c.x, c.y, r + SELF_LOOP_LABEL_DISTANCE, FRAC_PI_2),
            angle: FRAC_PI_2,
        },
    }
}

/// Resolves the geometry for `link` according to its shape
///
/// Arcs that have no finite circle are drawn as lines.
#[must_use]
pub fn link_geometry(link: &RenderLink<'_>) -> LinkGeometry {
    match link.cfg.shape {
        LinkShape::Line => LinkGeometry::Line(line_geometry(link.source, link.target)),
        LinkShape::Arc => arc_geometry(
            link.source,
            link.target,
            link.curve_displacement(),
            link.offset_multiple,
        )
        .map_or_else(
            || {
                debug!(
                    link = %link.name,
                    source = %link.source.id,
                    target = %link.target.id,
                    offset_multiple = link.offset_multiple,
                    "Arc has no finite circle, drawing as line"
                );
                LinkGeometry::Line(line_geometry(link.source, link.target))
            },
            LinkGeometry::Arc,
        ),
        LinkShape::SelfLoop => LinkGeometry::SelfLoop(self_loop_geometry(link.source)),
    }
}

/// Fills the arrowhead at `placement` with `color`
///
/// # Errors
///
/// Returns an error if the surface rejects the transform.
pub fn draw_arrow_head<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    placement: ArrowPlacement,
    color: &str,
) -> Result<()> {
    with_saved_state(surface, |s| {
        s.translate(placement.tip.x, placement.tip.y)?;
        s.rotate(placement.angle)?;
        trace_path(s, &arrow_head_path())?;
        s.set_fill_style(color);
        s.fill();
        Ok(())
    })
}

/// Strokes `link`, then draws its arrowhead and label
///
/// # Errors
///
/// Returns an error if any surface operation fails.
pub fn draw_link<S: DrawingSurface + ?Sized>(surface: &mut S, link: &RenderLink<'_>) -> Result<()> {
    let geometry = link_geometry(link);

    geometry.trace(surface)?;
    surface.set_stroke_style(&link.cfg.stroke);
    surface.stroke();

    draw_arrow_head(surface, geometry.arrow(), &link.cfg.stroke)?;
    draw_link_label(surface, &link.name, &link.cfg.label, geometry.label())
}
