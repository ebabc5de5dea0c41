//! Canvas renderer for force-directed graphs
//!
//! Draws one frame of nodes and links onto any [`DrawingSurface`]: straight
//! lines, circular arcs for parallel edges and loops for self-edges, each with
//! an arrowhead and a truncated label.
//!
//! ## Module Structure
//! - `renderer`: [`Renderer`], the per-frame entry point
//! - `links`: link geometry and drawing
//! - `nodes`: node discs
//! - `labels`: link and node labels
//! - `text`: label truncation
//! - `path`: arrowhead and rounded rectangle paths
//! - `surface`: the [`DrawingSurface`] trait
//! - `recording`: in-memory surface for headless use and tests
//! - `web`: `CanvasRenderingContext2d` backend (feature `web`)
//!
//! # Example
//!
//! ```
//! use forcegraph_canvas::{RecordingSurface, Renderer};
//! use forcegraph_core::{FrameData, LinkShape, RenderLink, RenderNode, RenderOption};
//!
//! let a = RenderNode::new("a", "Alpha", 0.0, 0.0);
//! let b = RenderNode::new("b", "Beta", 120.0, 40.0);
//! let nodes = [a.clone(), b.clone()];
//! let links = [
//!     RenderLink::new(&a, &b, "first"),
//!     RenderLink::new(&a, &b, "second").with_shape(LinkShape::Arc).with_offset_multiple(1),
//!     RenderLink::new(&a, &a, "loop").with_shape(LinkShape::SelfLoop),
//! ];
//!
//! let mut renderer = Renderer::new(RecordingSurface::new(), RenderOption::default());
//! renderer.draw(&FrameData::new(&links, &nodes))?;
//! assert_eq!(renderer.context().depth(), 0);
//! # Ok::<(), forcegraph_canvas::RenderError>(())
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod labels;
pub mod links;
pub mod nodes;
pub mod path;
pub mod recording;
pub mod renderer;
pub mod surface;
pub mod text;
#[cfg(feature = "web")]
pub mod web;

pub use error::{RenderError, Result};
pub use links::{LinkGeometry, link_geometry};
pub use path::{Path, PathCommand, arrow_head_path, rounded_rect_path};
pub use recording::{RecordingSurface, SurfaceOp};
pub use renderer::Renderer;
pub use surface::{DrawingSurface, TextAlign, TextBaseline};
pub use text::truncate_text;
