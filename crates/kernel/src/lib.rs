//! Menudrawer Kernel Library
//!
//! Render-time mobile menus for the navigation block: block definitions,
//! the tap system, host services and the navigation pipeline.
//! The command-line entry point is the `menudrawer` binary.

pub mod block;
pub mod config;
pub mod error;
pub mod host;
pub mod html;
pub mod navigation;
pub mod state;
pub mod tap;
