//! Shared application state.
//!
//! Holds the block registry and tap dispatcher built once at startup. Each
//! page render creates its own ID generator and style registry so IDs and
//! page CSS never leak between requests.

use std::sync::Arc;

use tracing::info;

use crate::block::{BlockTypeRegistry, RenderedBlock};
use crate::config::Config;
use crate::host::{
    FsTemplatePartRenderer, RenderContext, SequentialIdGenerator, StyleRegistry,
    TemplatePartRenderer,
};
use crate::navigation::{MobileMenuFilter, register_taps};
use crate::tap::{TapDispatcher, TapRegistry};

/// Application state shared across page renders.
pub struct AppState {
    blocks: BlockTypeRegistry,
    dispatcher: TapDispatcher,
    template_parts: Box<dyn TemplatePartRenderer>,
}

impl AppState {
    /// Build state from configuration, reading template parts from disk.
    pub fn new(config: &Config) -> Self {
        let parts = FsTemplatePartRenderer::new(&config.template_parts_dir);
        Self::with_template_parts(config, Box::new(parts))
    }

    /// Build state with a custom template part renderer.
    ///
    /// Registers the mobile menu taps and runs `tap_init` against the core
    /// block types.
    pub fn with_template_parts(config: &Config, template_parts: Box<dyn TemplatePartRenderer>) -> Self {
        let mut taps = TapRegistry::new();
        register_taps(
            &mut taps,
            config.tap_weight,
            MobileMenuFilter::new(&config.stylesheet_handle),
        );

        let dispatcher = TapDispatcher::new(Arc::new(taps));
        let mut blocks = BlockTypeRegistry::with_core_types();
        dispatcher.init(&mut blocks);

        info!(
            block_types = blocks.len(),
            render_filters = dispatcher.registry().render_filters().len(),
            "kernel initialized"
        );

        Self {
            blocks,
            dispatcher,
            template_parts,
        }
    }

    /// Registered block types, after `tap_init`.
    pub fn blocks(&self) -> &BlockTypeRegistry {
        &self.blocks
    }

    /// The tap dispatcher.
    pub fn dispatcher(&self) -> &TapDispatcher {
        &self.dispatcher
    }

    /// Start rendering a page.
    pub fn page(&self) -> PageRender<'_> {
        PageRender {
            state: self,
            ids: SequentialIdGenerator::new(),
            styles: StyleRegistry::new(),
        }
    }
}

/// Per-page render scope.
pub struct PageRender<'a> {
    state: &'a AppState,
    ids: SequentialIdGenerator,
    styles: StyleRegistry,
}

impl PageRender<'_> {
    /// Pass one block's rendered markup through the render filters.
    ///
    /// Registry defaults are applied to the block's attributes first.
    pub fn render_block(&self, block: &RenderedBlock, markup: String) -> String {
        let block = block.clone().with_defaults(&self.state.blocks);
        let ctx = RenderContext::new(self.state.template_parts.as_ref(), &self.ids, &self.styles);
        self.state.dispatcher.render_block(&block, markup, &ctx)
    }

    /// Page-level CSS collected so far.
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }
}
