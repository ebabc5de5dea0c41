//! Label styling shared by nodes and links

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Visual style for a node or link label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelStyle {
    /// Font size in surface units
    pub font_size: f64,
    /// CSS font weight (`normal`, `bold`, `600`, ...)
    pub font_weight: String,
    /// CSS font family list
    pub font_family: String,
    /// Text color
    pub color: String,
    /// Fill color of the box drawn behind the text
    pub background_color: String,
    /// Corner radius of the node label box
    pub border_radius: f64,
    /// Maximum rendered text width before truncation
    pub width: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            font_weight: "normal".to_string(),
            font_family: "sans-serif".to_string(),
            color: "#333".to_string(),
            background_color: "rgba(255,255,255,0.8)".to_string(),
            border_radius: 4.0,
            width: 80.0,
        }
    }
}

impl LabelStyle {
    /// CSS font shorthand for this style, e.g. `bold 14px Inter`
    #[must_use]
    pub fn font(&self) -> String {
        format!("{} {}px {}", self.font_weight, self.font_size, self.font_family)
    }

    /// Validates numeric fields
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLabelStyle`] if the font size, width or border
    /// radius is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        non_negative("fontSize", self.font_size)?;
        non_negative("width", self.width)?;
        non_negative("borderRadius", self.border_radius)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_label_style(field, format!("{value} is not finite")));
    }
    if value < 0.0 {
        return Err(Error::invalid_label_style(field, format!("{value} is negative")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_font_shorthand() {
        let style = LabelStyle {
            font_size: 14.0,
            font_weight: "bold".to_string(),
            font_family: "Inter".to_string(),
            ..LabelStyle::default()
        };
        assert_eq!(style.font(), "bold 14px Inter");
    }

    #[test]
    fn test_default_is_valid() {
        assert!(LabelStyle::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_width() {
        let style = LabelStyle {
            width: -1.0,
            ..LabelStyle::default()
        };
        let err = style.validate();
        assert!(matches!(err, Err(Error::InvalidLabelStyle { field: "width", .. })));
    }

    #[test]
    fn test_validate_rejects_nan_font_size() {
        let style = LabelStyle {
            font_size: f64::NAN,
            ..LabelStyle::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let style: LabelStyle =
            serde_json::from_str(r##"{"fontSize": 16, "backgroundColor": "#fff"}"##).unwrap();
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.background_color, "#fff");
        assert_eq!(style.width, LabelStyle::default().width);
    }
}
