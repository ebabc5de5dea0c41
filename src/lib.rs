#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # forcegraph
//!
//! Immediate-mode rendering for force-directed graphs. Nodes are drawn as
//! labelled discs; links as straight lines, circular arcs (to separate
//! parallel edges) or self-loops, each with an arrowhead and a label.
//!
//! This library re-exports the workspace crates for convenience:
//! - [`forcegraph_core`]: geometry, per-frame models, options and transforms
//! - [`forcegraph_canvas`]: the drawing surface abstraction and the
//!   [`Renderer`](forcegraph_canvas::Renderer)
//!
//! ```
//! use forcegraph::prelude::*;
//!
//! let a = RenderNode::new("a", "Alpha", 0.0, 0.0);
//! let b = RenderNode::new("b", "Beta", 100.0, 0.0);
//! let links = [RenderLink::new(&a, &b, "a to b")];
//! let nodes = [a.clone(), b.clone()];
//!
//! let mut renderer = Renderer::new(RecordingSurface::new(), RenderOption::default());
//! renderer.draw(&FrameData::new(&links, &nodes))?;
//! # Ok::<(), RenderError>(())
//! ```

// Re-export workspace crates
pub use forcegraph_canvas;
pub use forcegraph_core;

pub mod prelude;
