pub mod blocks;
pub mod config;
pub mod error;
pub mod providers;
pub mod render;
pub mod threshold;
pub mod types;

use config::{
    build_output_config, build_render_context, parse_config, BarblocksConfig, BlockConfig,
    OutputConfig, RenderContext,
};
use error::ConfigError;
use providers::{
    FileSystemPathProbe, MemInfoCollector, PathProbe, ProcMemInfoCollector,
};
use tracing::debug;
use types::{ColorTag, RenderedOutput};

/// Renders configured blocks with a memory collector and a path probe.
#[derive(Debug, Default)]
pub struct BlockRunner<M = ProcMemInfoCollector, P = FileSystemPathProbe> {
    meminfo_collector: M,
    path_probe: P,
}

impl<M: MemInfoCollector, P: PathProbe> BlockRunner<M, P> {
    pub fn new(meminfo_collector: M, path_probe: P) -> Self {
        Self {
            meminfo_collector,
            path_probe,
        }
    }

    /// Runs every block once, in configuration order.
    pub fn render_blocks(
        &self,
        blocks: &[BlockConfig],
        ctx: &RenderContext,
    ) -> Vec<RenderedOutput> {
        blocks
            .iter()
            .map(|block| {
                let output = match block {
                    BlockConfig::Memory(cfg) => {
                        blocks::render_memory(&self.meminfo_collector, cfg, ctx)
                    }
                    BlockConfig::PathExists(cfg) => {
                        blocks::render_path_exists(&self.path_probe, cfg)
                    }
                };
                debug!(
                    block = output.name,
                    color = output.color.map_or("none", ColorTag::as_str),
                    text = %output.full_text,
                    "rendered block"
                );
                output
            })
            .collect()
    }

    /// Renders one status line for `config`.
    pub fn run(&self, config: &BarblocksConfig, output: &OutputConfig) -> Result<String, String> {
        let ctx = build_render_context(&config.general);
        let rendered = self.render_blocks(&config.blocks, &ctx);
        render::output::format_status_line(&rendered, output)
            .map_err(|error| format!("failed to encode status line: {error}"))
    }

    pub fn run_from_str(&self, input: &str) -> Result<String, String> {
        let config = parse_config(input).map_err(|error: ConfigError| error.to_string())?;
        self.run(&config, &build_output_config(&config.general))
    }
}

/// Parses a TOML config and renders one status line against the live system.
pub fn run_from_str(input: &str) -> Result<String, String> {
    BlockRunner::<ProcMemInfoCollector, FileSystemPathProbe>::default().run_from_str(input)
}
