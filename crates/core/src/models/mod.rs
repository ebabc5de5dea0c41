//! Render models handed to the renderer once per frame
//!
//! Positions are resolved externally by the layout stage. The renderer only
//! reads these values; nothing here is mutated during a draw.

pub mod frame;
pub mod label;
pub mod link;
pub mod node;

pub use frame::FrameData;
pub use label::LabelStyle;
pub use link::{LinkCfg, LinkShape, RenderLink};
pub use node::{NodeCfg, RenderNode};
