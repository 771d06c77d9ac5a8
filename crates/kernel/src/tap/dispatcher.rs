//! Tap dispatcher - invokes taps in weight order.
//!
//! Render filters are chained: each receives the previous filter's output.
//! A filter that panics is logged and skipped, and the chain continues with
//! the markup it was given, so a broken enhancement never breaks rendering.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use tracing::{debug, error};

use super::{TAP_INIT, TAP_RENDER_BLOCK, TapRegistry};
use crate::block::{BlockTypeRegistry, RenderedBlock};
use crate::host::RenderContext;

/// Dispatcher for invoking taps.
#[derive(Debug, Clone)]
pub struct TapDispatcher {
    registry: Arc<TapRegistry>,
}

impl TapDispatcher {
    /// Create a new tap dispatcher.
    pub fn new(registry: Arc<TapRegistry>) -> Self {
        Self { registry }
    }

    /// Get the tap registry for handler introspection.
    pub fn registry(&self) -> &TapRegistry {
        &self.registry
    }

    /// Run every `tap_init` action against the block registry.
    pub fn init(&self, blocks: &mut BlockTypeRegistry) {
        for handler in self.registry.init_handlers() {
            let result = catch_unwind(AssertUnwindSafe(|| (handler.handler)(&mut *blocks)));
            if result.is_err() {
                error!(owner = %handler.owner, tap = TAP_INIT, "tap invocation panicked");
            }
        }
        debug!(
            tap = TAP_INIT,
            handlers = self.registry.init_handlers().len(),
            "dispatch complete"
        );
    }

    /// Pass rendered block markup through every `tap_render_block` filter.
    pub fn render_block(
        &self,
        block: &RenderedBlock,
        markup: String,
        ctx: &RenderContext<'_>,
    ) -> String {
        let filters = self.registry.render_filters();
        if filters.is_empty() {
            return markup;
        }

        let mut current = markup;
        for handler in filters {
            let input = current.clone();
            match catch_unwind(AssertUnwindSafe(|| handler.handler.filter(block, input, ctx))) {
                Ok(output) => current = output,
                Err(_) => {
                    error!(
                        owner = %handler.owner,
                        tap = TAP_RENDER_BLOCK,
                        block = %block.name,
                        "render filter panicked, keeping previous markup"
                    );
                }
            }
        }

        debug!(
            tap = TAP_RENDER_BLOCK,
            block = %block.name,
            handlers = filters.len(),
            "dispatch complete"
        );
        current
    }
}
