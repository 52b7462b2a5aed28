use tracing::error;

use crate::{
    config::{MemoryBlockConfig, RenderContext},
    providers::MemInfoCollector,
    render::{
        fmt::{format_bytes_human, format_percentage, percent_of},
        placeholder::format_placeholders,
    },
    threshold::memory_absolute,
    types::{ColorTag, MemInfoSnapshot, Placeholder, RenderedOutput},
};

pub const NAME: &str = "memory";
pub const MEMORY_ERROR_TEXT: &str = "can't read memory";

const KIB: i64 = 1024;

/// How `%used` is derived from the kernel figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsedMemoryMethod {
    /// total - available
    MemAvailable,
    /// total - free - buffers - cached
    Classical,
}

impl UsedMemoryMethod {
    /// Prefix match, so `"memavailable_v2"` still selects `MemAvailable`.
    pub fn from_config(method: &str) -> Option<Self> {
        if method.starts_with("memavailable") {
            Some(Self::MemAvailable)
        } else if method.starts_with("classical") {
            Some(Self::Classical)
        } else {
            None
        }
    }
}

/// Memory figures converted to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub total: i64,
    pub free: i64,
    pub available: i64,
    pub buffers: i64,
    pub cached: i64,
    pub shared: i64,
    /// Zero when the configured method is not recognized.
    pub used: i64,
}

impl MemoryUsage {
    pub fn from_snapshot(snapshot: &MemInfoSnapshot, method: Option<UsedMemoryMethod>) -> Self {
        let bytes = |kb: u64| i64::try_from(kb).unwrap_or(i64::MAX).saturating_mul(KIB);

        let total = bytes(snapshot.total_kb);
        let free = bytes(snapshot.free_kb);
        let available = bytes(snapshot.available_kb);
        let buffers = bytes(snapshot.buffers_kb);
        let cached = bytes(snapshot.cached_kb);
        let shared = bytes(snapshot.shared_kb);

        let used = match method {
            Some(UsedMemoryMethod::MemAvailable) => total.saturating_sub(available),
            Some(UsedMemoryMethod::Classical) => total
                .saturating_sub(free)
                .saturating_sub(buffers)
                .saturating_sub(cached),
            None => 0,
        };

        Self {
            total,
            free,
            available,
            buffers,
            cached,
            shared,
            used,
        }
    }
}

/// Degraded is tested first and critical second, so `Bad` overrides
/// `Degraded` when both thresholds are crossed.
pub fn threshold_color(usage: &MemoryUsage, config: &MemoryBlockConfig) -> Option<ColorTag> {
    let mut color = None;

    if let Some(threshold) = config.threshold_degraded.as_deref() {
        if usage.available < memory_absolute(usage.total, threshold) {
            color = Some(ColorTag::Degraded);
        }
    }

    if let Some(threshold) = config.threshold_critical.as_deref() {
        if usage.available < memory_absolute(usage.total, threshold) {
            color = Some(ColorTag::Bad);
        }
    }

    color
}

/// Reads memory figures from `collector` and renders the memory block.
#[cfg(target_os = "linux")]
pub fn render_memory<C: MemInfoCollector + ?Sized>(
    collector: &C,
    config: &MemoryBlockConfig,
    ctx: &RenderContext,
) -> RenderedOutput {
    match collector.collect_meminfo() {
        Ok(snapshot) => render_memory_snapshot(&snapshot, config, ctx),
        Err(err) => {
            error!(
                source = %collector.source(),
                "Cannot read system memory using /proc/meminfo: {err}"
            );
            RenderedOutput::new(NAME, MEMORY_ERROR_TEXT)
        }
    }
}

#[cfg(not(target_os = "linux"))]
pub fn render_memory<C: MemInfoCollector + ?Sized>(
    _collector: &C,
    _config: &MemoryBlockConfig,
    _ctx: &RenderContext,
) -> RenderedOutput {
    error!("Memory status information is not supported on this system");
    RenderedOutput::new(NAME, "")
}

pub fn render_memory_snapshot(
    snapshot: &MemInfoSnapshot,
    config: &MemoryBlockConfig,
    ctx: &RenderContext,
) -> RenderedOutput {
    let usage = MemoryUsage::from_snapshot(
        snapshot,
        UsedMemoryMethod::from_config(&config.memory_used_method),
    );

    let color = threshold_color(&usage, config);
    let template = match (color, config.format_degraded.as_deref()) {
        (Some(_), Some(degraded)) => degraded,
        _ => config.format.as_str(),
    };

    let human = |bytes: i64| format_bytes_human(u64::try_from(bytes).unwrap_or(0));
    let pct = |part: i64| format_percentage(percent_of(part, usage.total), &ctx.pct_mark);

    let total = human(usage.total);
    let used = human(usage.used);
    let free = human(usage.free);
    let available = human(usage.available);
    let shared = human(usage.shared);
    let percentage_free = pct(usage.free);
    let percentage_available = pct(usage.available);
    let percentage_used = pct(usage.used);
    let percentage_shared = pct(usage.shared);

    let placeholders = [
        Placeholder::new("%total", &total),
        Placeholder::new("%used", &used),
        Placeholder::new("%free", &free),
        Placeholder::new("%available", &available),
        Placeholder::new("%shared", &shared),
        Placeholder::new("%percentage_free", &percentage_free),
        Placeholder::new("%percentage_available", &percentage_available),
        Placeholder::new("%percentage_used", &percentage_used),
        Placeholder::new("%percentage_shared", &percentage_shared),
    ];

    RenderedOutput::new(NAME, format_placeholders(template, &placeholders)).with_color(color)
}
