//! Pure path builders for arrowheads and rounded rectangles
//!
//! Shapes are built as a [`Path`] value first and traced onto a surface
//! afterwards, so their geometry can be checked without a surface.

use std::f64::consts::{FRAC_PI_2, PI};

use forcegraph_core::geometry::Point;

use crate::error::Result;
use crate::surface::DrawingSurface;

/// Arrowhead length from tip to base, in pixels
pub const ARROW_LENGTH: f64 = 12.0;

/// Arrowhead width at the base, in pixels
pub const ARROW_WIDTH: f64 = 8.0;

/// One step of a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Clockwise arc around `center`
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    QuadraticCurveTo {
        control: Point,
        end: Point,
    },
    Close,
}

/// Ordered list of path commands
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn move_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(point));
        self
    }

    #[must_use]
    pub fn line_to(mut self, point: Point) -> Self {
        self.commands.push(PathCommand::LineTo(point));
        self
    }

    #[must_use]
    pub fn arc(mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        self
    }

    #[must_use]
    pub fn quadratic_curve_to(mut self, control: Point, end: Point) -> Self {
        self.commands
            .push(PathCommand::QuadraticCurveTo { control, end });
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Closed polygon through `points` in order
    #[must_use]
    pub fn polygon(points: &[Point]) -> Self {
        let mut iter = points.iter().copied();
        let Some(first) = iter.next() else {
            return Self::new();
        };
        iter.fold(Self::new().move_to(first), Self::line_to).close()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Starts a new path on `surface` and replays `path` into it
///
/// # Errors
///
/// Returns an error if the surface rejects an arc.
pub fn trace_path<S: DrawingSurface + ?Sized>(surface: &mut S, path: &Path) -> Result<()> {
    surface.begin_path();
    path.commands().iter().try_for_each(|command| match *command {
        PathCommand::MoveTo(p) => {
            surface.move_to(p.x, p.y);
            Ok(())
        }
        PathCommand::LineTo(p) => {
            surface.line_to(p.x, p.y);
            Ok(())
        }
        PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => surface.arc(center.x, center.y, radius, start_angle, end_angle),
        PathCommand::QuadraticCurveTo { control, end } => {
            surface.quadratic_curve_to(control.x, control.y, end.x, end.y);
            Ok(())
        }
        PathCommand::Close => {
            surface.close_path();
            Ok(())
        }
    })
}

/// Arrowhead triangle in its local frame
///
/// The tip sits at the origin pointing along +x; the base corners are at
/// `(-ARROW_LENGTH, ±ARROW_WIDTH / 2)`. Callers translate to the tip and
/// rotate by the direction of travel before tracing.
#[must_use]
pub fn arrow_head_path() -> Path {
    let half = ARROW_WIDTH / 2.0;
    Path::polygon(&[
        Point::origin(),
        Point::new(-ARROW_LENGTH, half),
        Point::new(-ARROW_LENGTH, -half),
    ])
}

/// Corner radius actually used for a `width` x `height` rectangle
///
/// Clamped into `[0, min(width, height) / 2]`.
#[must_use]
pub fn effective_corner_radius(width: f64, height: f64, radius: f64) -> f64 {
    radius.min(width.min(height) / 2.0).max(0.0)
}

/// Closed rounded rectangle with top-left corner `(x, y)`
///
/// Traced clockwise starting on the top edge. A radius of zero yields a plain
/// rectangle.
///
/// # Example
///
/// ```
/// use forcegraph_canvas::path::{rounded_rect_path, PathCommand};
/// use forcegraph_core::geometry::Point;
///
/// let path = rounded_rect_path(0.0, 0.0, 40.0, 20.0, 0.0);
/// assert_eq!(path.commands().first(), Some(&PathCommand::MoveTo(Point::new(0.0, 0.0))));
/// assert_eq!(path.commands().len(), 5);
/// ```
#[must_use]
pub fn rounded_rect_path(x: f64, y: f64, width: f64, height: f64, radius: f64) -> Path {
    let r = effective_corner_radius(width, height, radius);
    let (right, bottom) = (x + width, y + height);

    if r == 0.0 {
        return Path::polygon(&[
            Point::new(x, y),
            Point::new(right, y),
            Point::new(right, bottom),
            Point::new(x, bottom),
        ]);
    }

    Path::new()
        .move_to(Point::new(x + r, y))
        .line_to(Point::new(right - r, y))
        .arc(Point::new(right - r, y + r), r, -FRAC_PI_2, 0.0)
        .line_to(Point::new(right, bottom - r))
        .arc(Point::new(right - r, bottom - r), r, 0.0, FRAC_PI_2)
        .line_to(Point::new(x + r, bottom))
        .arc(Point::new(x + r, bottom - r), r, FRAC_PI_2, PI)
        .line_to(Point::new(x, y + r))
        .arc(Point::new(x + r, y + r), r, PI, PI + FRAC_PI_2)
        .close()
}
