//! Renderer option snapshot
//!
//! Options are produced by the external configuration layer, usually from
//! JSON. The renderer holds one snapshot and reads it during each draw.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Size of the visible drawing area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOption {
    pub width: f64,
    pub height: f64,
}

impl Default for LayoutOption {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Options read by the renderer on every draw
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOption {
    pub layout: LayoutOption,
}

impl RenderOption {
    /// Option with the given visible area
    #[must_use]
    pub const fn with_size(width: f64, height: f64) -> Self {
        Self {
            layout: LayoutOption { width, height },
        }
    }

    /// Parses and validates an option document
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonParseFailed`] for malformed JSON and
    /// [`Error::InvalidOption`] if validation fails.
    ///
    /// # Example
    ///
    /// ```
    /// use forcegraph_core::option::RenderOption;
    ///
    /// let option = RenderOption::from_json(r#"{"layout": {"width": 1024}}"#)?;
    /// assert_eq!(option.layout.width, 1024.0);
    /// assert_eq!(option.layout.height, 600.0);
    /// # Ok::<(), forcegraph_core::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let option: Self = serde_json::from_str(json)?;
        option.validate()?;
        debug!(
            width = option.layout.width,
            height = option.layout.height,
            "Loaded render option"
        );
        Ok(option)
    }

    /// Checks that the layout size is usable
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if width or height is negative or not
    /// finite.
    pub fn validate(&self) -> Result<()> {
        check_dimension("layout.width", self.layout.width)?;
        check_dimension("layout.height", self.layout.height)
    }
}

fn check_dimension(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::invalid_option(
            field,
            format!("must be a non-negative finite number, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        let option = RenderOption::default();
        assert_eq!(option.layout.width, 800.0);
        assert_eq!(option.layout.height, 600.0);
        assert!(option.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() -> Result<()> {
        let option = RenderOption::from_json(r#"{"layout": {"height": 300}}"#)?;
        assert_eq!(option.layout.width, 800.0);
        assert_eq!(option.layout.height, 300.0);
        Ok(())
    }

    #[test]
    fn test_from_json_empty_object() -> Result<()> {
        assert_eq!(RenderOption::from_json("{}")?, RenderOption::default());
        Ok(())
    }

    #[test]
    fn test_from_json_rejects_negative() {
        let result = RenderOption::from_json(r#"{"layout": {"width": -5}}"#);
        assert!(matches!(
            result,
            Err(Error::InvalidOption {
                field: "layout.width",
                ..
            })
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = RenderOption::from_json("{layout");
        assert!(matches!(result, Err(Error::JsonParseFailed { .. })));
    }

    #[test]
    fn test_with_size() {
        let option = RenderOption::with_size(100.0, 50.0);
        assert_eq!(option.layout, LayoutOption { width: 100.0, height: 50.0 });
    }
}
