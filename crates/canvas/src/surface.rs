//! Immediate-mode drawing surface abstraction
//!
//! [`DrawingSurface`] is the subset of the HTML canvas 2D API the renderer
//! needs. Operations the browser may reject return [`Result`]; the rest mutate
//! surface state unconditionally, mirroring the canvas contract.

use crate::error::Result;

/// Horizontal text anchoring relative to the draw position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

impl TextAlign {
    /// Canvas keyword for this alignment
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Vertical text anchoring relative to the draw position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

impl TextBaseline {
    /// Canvas keyword for this baseline
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Hanging => "hanging",
            Self::Middle => "middle",
            Self::Alphabetic => "alphabetic",
            Self::Ideographic => "ideographic",
            Self::Bottom => "bottom",
        }
    }
}

/// A 2D drawing context with a save/restore state stack
///
/// Angles are radians, measured clockwise on screen since the y axis points
/// down. `arc` always sweeps clockwise from `start_angle` to `end_angle`.
pub trait DrawingSurface {
    /// Pushes the current transform and style state
    fn save(&mut self);
    /// Pops the most recently saved state
    fn restore(&mut self);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// # Errors
    ///
    /// Returns an error if the surface rejects the transform.
    fn translate(&mut self, x: f64, y: f64) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the surface rejects the transform.
    fn scale(&mut self, x: f64, y: f64) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the surface rejects the transform.
    fn rotate(&mut self, angle: f64) -> Result<()>;

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    /// Sets the CSS font shorthand used by text measurement and drawing
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);

    /// Adds a clockwise circular arc to the current path
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the arc, e.g. a negative radius.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64)
    -> Result<()>;

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Width of `text` in the current font
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot measure text.
    fn measure_text(&self, text: &str) -> Result<f64>;

    /// Draws `text` at `(x, y)`, squeezed to `max_width` when given
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the draw.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>) -> Result<()>;
}

/// Runs `draw` between `save` and `restore`
///
/// The state is restored even when `draw` fails, so a failed draw never
/// leaks a transform or style into the next one.
///
/// # Errors
///
/// Returns whatever error `draw` returns.
pub fn with_saved_state<S, T, F>(surface: &mut S, draw: F) -> Result<T>
where
    S: DrawingSurface + ?Sized,
    F: FnOnce(&mut S) -> Result<T>,
{
    surface.save();
    let result = draw(surface);
    surface.restore();
    result
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::RenderError;
    use crate::recording::{RecordingSurface, SurfaceOp};

    #[test]
    fn test_keywords() {
        assert_eq!(TextAlign::Center.as_str(), "center");
        assert_eq!(TextBaseline::Middle.as_str(), "middle");
        assert_eq!(TextAlign::default(), TextAlign::Start);
        assert_eq!(TextBaseline::default(), TextBaseline::Alphabetic);
    }

    #[test]
    fn test_with_saved_state_restores_on_error() {
        let mut surface = RecordingSurface::new();
        let result: Result<()> = with_saved_state(&mut surface, |s| {
            s.begin_path();
            Err(RenderError::surface("test", "boom"))
        });

        assert!(result.is_err());
        assert_eq!(
            surface.ops(),
            &[SurfaceOp::Save, SurfaceOp::BeginPath, SurfaceOp::Restore]
        );
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_with_saved_state_returns_value() {
        let mut surface = RecordingSurface::new();
        let width = with_saved_state(&mut surface, |s| s.measure_text("abc")).unwrap();
        assert!(width > 0.0);
    }
}
