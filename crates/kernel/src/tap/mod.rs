//! Tap system for extension points.
//!
//! Taps are named extension points that components can implement. When a tap is invoked,
//! all handlers that implement it are called in weight order (lower = higher priority).

mod dispatcher;
mod registry;

pub use dispatcher::TapDispatcher;
pub use registry::{
    InitAction, RenderFilter, TAP_INIT, TAP_RENDER_BLOCK, TapHandler, TapRegistry,
};
