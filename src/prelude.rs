//! Prelude module - common imports for forcegraph
//!
//! ```rust
//! use forcegraph::prelude::*;
//! ```

// Renderer and surfaces
pub use forcegraph_canvas::{
    DrawingSurface, RecordingSurface, RenderError, Renderer, SurfaceOp, TextAlign, TextBaseline,
};

// Frame models and configuration
pub use forcegraph_core::{
    FrameData, LabelStyle, LinkCfg, LinkShape, NodeCfg, Point, RenderLink, RenderNode,
    RenderOption, Transform,
};
