//! Core types for forcegraph rendering
//!
//! This crate holds everything the renderer reads but never draws with
//! directly:
//!
//! ## Module Structure
//! - `geometry`: pure point, circle, rectangle and rotation math
//! - `models`: per-frame nodes, links and label styles
//! - `transform`: pan/zoom transform
//! - `option`: renderer option snapshot and JSON loading
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod models;
pub mod option;
pub mod transform;

pub use error::{Error, Result};
pub use geometry::Point;
pub use models::{FrameData, LabelStyle, LinkCfg, LinkShape, NodeCfg, RenderLink, RenderNode};
pub use option::{LayoutOption, RenderOption};
pub use transform::Transform;
