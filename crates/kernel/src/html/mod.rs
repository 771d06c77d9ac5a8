//! Markup utilities for render-time HTML rewriting.

mod tag_processor;

pub use tag_processor::TagProcessor;
