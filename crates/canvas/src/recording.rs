//! In-memory surface that records every drawing operation
//!
//! Used by headless callers and tests. Text metrics are deterministic: each
//! character is `font_px * char_width_ratio` wide, where `font_px` is read
//! from the first `<n>px` token of the current font.

use crate::error::Result;
use crate::surface::{DrawingSurface, TextAlign, TextBaseline};

/// Canvas default font
pub const DEFAULT_FONT: &str = "10px sans-serif";

/// Default width of one character relative to the font size
pub const DEFAULT_CHAR_WIDTH_RATIO: f64 = 0.5;

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Save,
    Restore,
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Translate {
        x: f64,
        y: f64,
    },
    Scale {
        x: f64,
        y: f64,
    },
    Rotate {
        angle: f64,
    },
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetFont(String),
    SetTextAlign(TextAlign),
    SetTextBaseline(TextBaseline),
    BeginPath,
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    QuadraticCurveTo {
        cpx: f64,
        cpy: f64,
        x: f64,
        y: f64,
    },
    ClosePath,
    Fill,
    Stroke,
    FillText {
        text: String,
        x: f64,
        y: f64,
        max_width: Option<f64>,
    },
}

/// Surface that keeps an operation log instead of painting pixels
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    font: String,
    saved_fonts: Vec<String>,
    char_width_ratio: f64,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            font: DEFAULT_FONT.to_string(),
            saved_fonts: Vec::new(),
            char_width_ratio: DEFAULT_CHAR_WIDTH_RATIO,
        }
    }

    /// Uses a different character width relative to the font size
    #[must_use]
    pub fn with_char_width_ratio(mut self, ratio: f64) -> Self {
        self.char_width_ratio = ratio;
        self
    }

    /// Operations recorded so far, oldest first
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drains the operation log
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Current font shorthand
    #[must_use]
    pub fn font(&self) -> &str {
        &self.font
    }

    /// Number of `save` calls not yet matched by `restore`
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved_fonts.len()
    }

    /// Text drawn so far, in draw order
    pub fn drawn_text(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn font_px(&self) -> f64 {
        font_px(&self.font).unwrap_or(10.0)
    }

    fn record(&mut self, op: SurfaceOp) {
        self.ops.push(op);
    }
}

/// Pixel size from a CSS font shorthand such as `bold 14px Inter`
#[must_use]
pub fn font_px(font: &str) -> Option<f64> {
    font.split_whitespace()
        .filter_map(|token| token.strip_suffix("px"))
        .find_map(|size| size.parse::<f64>().ok())
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) {
        self.saved_fonts.push(self.font.clone());
        self.record(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        if let Some(font) = self.saved_fonts.pop() {
            self.font = font;
        }
        self.record(SurfaceOp::Restore);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(SurfaceOp::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        self.record(SurfaceOp::Translate { x, y });
        Ok(())
    }

    fn scale(&mut self, x: f64, y: f64) -> Result<()> {
        self.record(SurfaceOp::Scale { x, y });
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<()> {
        self.record(SurfaceOp::Rotate { angle });
        Ok(())
    }

    fn set_fill_style(&mut self, color: &str) {
        self.record(SurfaceOp::SetFillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.record(SurfaceOp::SetStrokeStyle(color.to_string()));
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
        self.record(SurfaceOp::SetFont(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.record(SurfaceOp::SetTextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.record(SurfaceOp::SetTextBaseline(baseline));
    }

    fn begin_path(&mut self) {
        self.record(SurfaceOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record(SurfaceOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record(SurfaceOp::LineTo { x, y });
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<()> {
        self.record(SurfaceOp::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
        Ok(())
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.record(SurfaceOp::QuadraticCurveTo { cpx, cpy, x, y });
    }

    fn close_path(&mut self) {
        self.record(SurfaceOp::ClosePath);
    }

    fn fill(&mut self) {
        self.record(SurfaceOp::Fill);
    }

    fn stroke(&mut self) {
        self.record(SurfaceOp::Stroke);
    }

    fn measure_text(&self, text: &str) -> Result<f64> {
        let chars = text.chars().count() as f64;
        Ok(chars * self.font_px() * self.char_width_ratio)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>) -> Result<()> {
        self.record(SurfaceOp::FillText {
            text: text.to_string(),
            x,
            y,
            max_width,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_font_px_parsing() {
        assert_eq!(font_px("normal 12px sans-serif"), Some(12.0));
        assert_eq!(font_px("bold 9.5px Inter"), Some(9.5));
        assert_eq!(font_px("sans-serif"), None);
    }

    #[test]
    fn test_measure_uses_current_font() {
        let mut surface = RecordingSurface::new();
        assert_eq!(surface.measure_text("abcd").unwrap(), 20.0);

        surface.set_font("normal 12px sans-serif");
        assert_eq!(surface.measure_text("abcd").unwrap(), 24.0);
    }

    #[test]
    fn test_measure_counts_chars_not_bytes() {
        let surface = RecordingSurface::new();
        assert_eq!(surface.measure_text("héé").unwrap(), 15.0);
    }

    #[test]
    fn test_restore_reverts_font() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.set_font("normal 20px serif");
        assert_eq!(surface.depth(), 1);
        surface.restore();

        assert_eq!(surface.font(), DEFAULT_FONT);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut surface = RecordingSurface::new();
        surface.restore();
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.ops(), &[SurfaceOp::Restore]);
    }

    #[test]
    fn test_take_ops_drains_log() {
        let mut surface = RecordingSurface::new();
        surface.begin_path();
        surface.fill_text("hi", 1.0, 2.0, None).unwrap();

        assert_eq!(surface.drawn_text().collect::<Vec<_>>(), vec!["hi"]);
        assert_eq!(surface.take_ops().len(), 2);
        assert!(surface.ops().is_empty());
    }
}
