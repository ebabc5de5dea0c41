//! Browser backend: [`DrawingSurface`] for `CanvasRenderingContext2d`
//!
//! All JS interop failures are mapped to [`RenderError`] instead of panicking.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{RenderError, Result};
use crate::surface::{DrawingSurface, TextAlign, TextBaseline};

/// Gets the 2D rendering context of a canvas element
///
/// # Errors
///
/// Returns [`RenderError::ContextUnavailable`] if:
/// - the browser throws while creating the context
/// - context creation returns nothing
/// - the returned object is not a `CanvasRenderingContext2d`
///
/// # Example
///
/// ```no_run
/// use forcegraph_canvas::web::get_2d_context;
/// use forcegraph_canvas::Renderer;
/// use forcegraph_core::RenderOption;
/// # fn run(canvas: web_sys::HtmlCanvasElement) -> forcegraph_canvas::Result<()> {
/// let context = get_2d_context(&canvas)?;
/// let renderer = Renderer::new(context, RenderOption::default());
/// # Ok(())
/// # }
/// ```
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| RenderError::context_unavailable(format!("getContext threw: {e:?}")))?
        .ok_or_else(|| RenderError::context_unavailable("getContext returned None"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| RenderError::context_unavailable("object is not a CanvasRenderingContext2d"))
}

fn js_error(operation: &'static str) -> impl FnOnce(JsValue) -> RenderError {
    move |e| RenderError::surface(operation, format!("{e:?}"))
}

// Inherent methods are called by path: `self.save()` would resolve to the
// trait method and recurse.
impl DrawingSurface for CanvasRenderingContext2d {
    fn save(&mut self) {
        Self::save(self);
    }

    fn restore(&mut self) {
        Self::restore(self);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        Self::clear_rect(self, x, y, width, height);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        Self::translate(self, x, y).map_err(js_error("translate"))
    }

    fn scale(&mut self, x: f64, y: f64) -> Result<()> {
        Self::scale(self, x, y).map_err(js_error("scale"))
    }

    fn rotate(&mut self, angle: f64) -> Result<()> {
        Self::rotate(self, angle).map_err(js_error("rotate"))
    }

    fn set_fill_style(&mut self, color: &str) {
        Self::set_fill_style_str(self, color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        Self::set_stroke_style_str(self, color);
    }

    fn set_font(&mut self, font: &str) {
        Self::set_font(self, font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        Self::set_text_align(self, align.as_str());
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        Self::set_text_baseline(self, baseline.as_str());
    }

    fn begin_path(&mut self) {
        Self::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        Self::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        Self::line_to(self, x, y);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<()> {
        Self::arc(self, x, y, radius, start_angle, end_angle).map_err(js_error("arc"))
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        Self::quadratic_curve_to(self, cpx, cpy, x, y);
    }

    fn close_path(&mut self) {
        Self::close_path(self);
    }

    fn fill(&mut self) {
        Self::fill(self);
    }

    fn stroke(&mut self) {
        Self::stroke(self);
    }

    fn measure_text(&self, text: &str) -> Result<f64> {
        Self::measure_text(self, text)
            .map(|metrics| metrics.width())
            .map_err(js_error("measureText"))
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>) -> Result<()> {
        match max_width {
            Some(max_width) => Self::fill_text_with_max_width(self, text, x, y, max_width),
            None => Self::fill_text(self, text, x, y),
        }
        .map_err(js_error("fillText"))
    }
}
