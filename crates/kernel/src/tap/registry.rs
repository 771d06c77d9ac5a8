//! Tap registry - indexes which handlers implement which taps.
//!
//! The kernel exposes two taps: `tap_init`, run once at startup to extend
//! block definitions, and `tap_render_block`, a filter chain applied to the
//! rendered markup of every block instance. Handlers are sorted by weight
//! (lower = higher priority, called first); equal weights keep registration
//! order.

use std::sync::Arc;

use crate::block::{BlockTypeRegistry, RenderedBlock};
use crate::host::RenderContext;

/// Startup tap name.
pub const TAP_INIT: &str = "tap_init";

/// Block render filter tap name.
pub const TAP_RENDER_BLOCK: &str = "tap_render_block";

/// Startup action that may extend block definitions.
pub type InitAction = Box<dyn Fn(&mut BlockTypeRegistry) + Send + Sync>;

/// A filter over the rendered markup of one block instance.
///
/// Filters must not fail: anything they cannot handle is passed through.
pub trait RenderFilter: Send + Sync {
    /// Filter name for logging.
    fn name(&self) -> &str;

    /// Transform `markup`, returning the replacement.
    fn filter(&self, block: &RenderedBlock, markup: String, ctx: &RenderContext<'_>) -> String;
}

/// A registered tap handler with its owner and priority.
pub struct TapHandler<H> {
    /// Name of the plugin or component that registered the handler.
    pub owner: String,
    /// Weight for ordering (lower = higher priority).
    pub weight: i32,
    /// The handler itself.
    pub handler: H,
}

impl<H> std::fmt::Debug for TapHandler<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TapHandler")
            .field("owner", &self.owner)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// Registry mapping taps to ordered handlers.
#[derive(Debug, Default)]
pub struct TapRegistry {
    init: Vec<TapHandler<InitAction>>,
    render_block: Vec<TapHandler<Arc<dyn RenderFilter>>>,
}

impl TapRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a startup action on `tap_init`.
    pub fn on_init<F>(&mut self, owner: &str, weight: i32, action: F)
    where
        F: Fn(&mut BlockTypeRegistry) + Send + Sync + 'static,
    {
        self.init.push(TapHandler {
            owner: owner.to_string(),
            weight,
            handler: Box::new(action),
        });
        self.init.sort_by_key(|h| h.weight);
    }

    /// Register a filter on `tap_render_block`.
    pub fn on_render_block(&mut self, weight: i32, filter: Arc<dyn RenderFilter>) {
        self.render_block.push(TapHandler {
            owner: filter.name().to_string(),
            weight,
            handler: filter,
        });
        self.render_block.sort_by_key(|h| h.weight);
    }

    /// Startup actions, in weight order.
    pub fn init_handlers(&self) -> &[TapHandler<InitAction>] {
        &self.init
    }

    /// Render filters, in weight order.
    pub fn render_filters(&self) -> &[TapHandler<Arc<dyn RenderFilter>>] {
        &self.render_block
    }

    /// Check if anything implements a tap.
    pub fn has_tap(&self, tap_name: &str) -> bool {
        self.handler_count(tap_name) > 0
    }

    /// Get the count of handlers for a tap.
    pub fn handler_count(&self, tap_name: &str) -> usize {
        match tap_name {
            TAP_INIT => self.init.len(),
            TAP_RENDER_BLOCK => self.render_block.len(),
            _ => 0,
        }
    }

    /// Names of taps with at least one handler.
    pub fn tap_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        [TAP_INIT, TAP_RENDER_BLOCK]
            .into_iter()
            .filter(|name| self.has_tap(name))
    }
}
