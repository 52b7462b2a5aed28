use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::render::color::{ColorPalette, DEFAULT_BAD, DEFAULT_DEGRADED, DEFAULT_GOOD};

// ── Barblocks Config (TOML file) ─────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_pct_mark() -> String {
    "%".to_string()
}
fn default_good() -> String {
    DEFAULT_GOOD.to_string()
}
fn default_degraded() -> String {
    DEFAULT_DEGRADED.to_string()
}
fn default_bad() -> String {
    DEFAULT_BAD.to_string()
}
fn default_memory_format() -> String {
    "%used %free %available".to_string()
}
fn default_memory_used_method() -> String {
    "memavailable".to_string()
}
fn default_path_exists_format() -> String {
    "%title: %status".to_string()
}
fn default_blocks() -> Vec<BlockConfig> {
    vec![BlockConfig::Memory(MemoryBlockConfig::default())]
}

#[derive(Debug, Clone, Deserialize)]
pub struct BarblocksConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default = "default_blocks", rename = "block")]
    pub blocks: Vec<BlockConfig>,
}

impl Default for BarblocksConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            blocks: default_blocks(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    I3bar,
    Term,
    #[serde(rename = "none")]
    Plain,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
    #[serde(default = "default_true")]
    pub colors: bool,
    #[serde(default = "default_good")]
    pub color_good: String,
    #[serde(default = "default_degraded")]
    pub color_degraded: String,
    #[serde(default = "default_bad")]
    pub color_bad: String,
    #[serde(default = "default_pct_mark")]
    pub percent_mark: String,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::I3bar
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            colors: true,
            color_good: default_good(),
            color_degraded: default_degraded(),
            color_bad: default_bad(),
            percent_mark: default_pct_mark(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BlockConfig {
    #[serde(rename = "memory")]
    Memory(MemoryBlockConfig),
    #[serde(rename = "path_exists")]
    PathExists(PathExistsBlockConfig),
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemoryBlockConfig {
    #[serde(default = "default_memory_format")]
    pub format: String,
    pub format_degraded: Option<String>,
    pub threshold_degraded: Option<String>,
    pub threshold_critical: Option<String>,
    #[serde(default = "default_memory_used_method")]
    pub memory_used_method: String,
}

impl Default for MemoryBlockConfig {
    fn default() -> Self {
        Self {
            format: default_memory_format(),
            format_degraded: None,
            threshold_degraded: None,
            threshold_critical: None,
            memory_used_method: default_memory_used_method(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathExistsBlockConfig {
    pub title: String,
    pub path: String,
    #[serde(default = "default_path_exists_format")]
    pub format: String,
    pub format_down: Option<String>,
}

impl PathExistsBlockConfig {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            format: default_path_exists_format(),
            format_down: None,
        }
    }
}

/// Resolution order: `$BARBLOCKS_CONFIG`, then
/// `$XDG_CONFIG_HOME/barblocks/config.toml`, then `~/.config/barblocks/config.toml`.
pub fn config_path() -> PathBuf {
    if let Ok(explicit) = std::env::var("BARBLOCKS_CONFIG") {
        return PathBuf::from(explicit);
    }

    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("barblocks").join("config.toml")
}

pub fn parse_config(contents: &str) -> Result<BarblocksConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

pub fn read_config(path: &Path) -> Result<BarblocksConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}

/// Load config from disk, falling back to defaults if file is missing or invalid.
pub fn load_config(path: &Path) -> BarblocksConfig {
    match read_config(path) {
        Ok(config) => {
            debug!("loaded config from {}", path.display());
            config
        }
        Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config at {}, using defaults", path.display());
            BarblocksConfig::default()
        }
        Err(err) => {
            warn!("{err}; using default config");
            BarblocksConfig::default()
        }
    }
}

/// Generate the default config file content.
pub fn default_config_toml() -> &'static str {
    r##"[general]
output_format = "i3bar"   # i3bar | term | none
colors = true
color_good = "#00FF00"
color_degraded = "#FFFF00"
color_bad = "#FF0000"
percent_mark = "%"

[[block]]
type = "memory"
format = "%used / %total"
format_degraded = "MEMORY LOW: %available"
threshold_degraded = "10%"    # N% of total, or N with K/M/G/T suffix
threshold_critical = "5%"
memory_used_method = "memavailable"   # memavailable | classical

[[block]]
type = "path_exists"
title = "VPN"
path = "/proc/sys/net/ipv4/conf/tun0"
format = "%title: %status"
"##
}

// ── Runtime config (built from BarblocksConfig + env) ────────────────

/// Per-call values the producers need besides their own block config.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderContext {
    pub pct_mark: String,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            pct_mark: default_pct_mark(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_enabled: bool,
    pub palette: ColorPalette,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::I3bar,
            color_enabled: true,
            palette: ColorPalette::default(),
        }
    }
}

pub fn build_render_context(general: &GeneralConfig) -> RenderContext {
    RenderContext {
        pct_mark: general.percent_mark.clone(),
    }
}

pub fn build_output_config(general: &GeneralConfig) -> OutputConfig {
    OutputConfig {
        format: general.output_format,
        color_enabled: general.colors,
        palette: ColorPalette {
            good: general.color_good.clone(),
            degraded: general.color_degraded.clone(),
            bad: general.color_bad.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.general.output_format, OutputFormat::I3bar);
        assert!(config.general.colors);
        assert_eq!(config.general.percent_mark, "%");
        assert_eq!(config.blocks.len(), 1);
        assert!(matches!(config.blocks[0], BlockConfig::Memory(_)));
    }

    #[test]
    fn default_config_toml_parses() {
        let config = parse_config(default_config_toml()).unwrap();
        assert_eq!(config.blocks.len(), 2);
        let BlockConfig::Memory(memory) = &config.blocks[0] else {
            panic!("first block should be memory");
        };
        assert_eq!(memory.threshold_degraded.as_deref(), Some("10%"));
        assert_eq!(memory.threshold_critical.as_deref(), Some("5%"));
        let BlockConfig::PathExists(path) = &config.blocks[1] else {
            panic!("second block should be path_exists");
        };
        assert_eq!(path.title, "VPN");
        assert!(path.format_down.is_none());
    }

    #[test]
    fn memory_block_field_defaults() {
        let config = parse_config("[[block]]\ntype = \"memory\"\n").unwrap();
        let BlockConfig::Memory(memory) = &config.blocks[0] else {
            panic!("expected memory block");
        };
        assert_eq!(memory.format, "%used %free %available");
        assert_eq!(memory.memory_used_method, "memavailable");
        assert!(memory.format_degraded.is_none());
    }

    #[test]
    fn path_exists_requires_path() {
        let result = parse_config("[[block]]\ntype = \"path_exists\"\ntitle = \"x\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_block_type_is_rejected() {
        let result = parse_config("[[block]]\ntype = \"battery\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn output_format_none_maps_to_plain() {
        let config = parse_config("[general]\noutput_format = \"none\"\n").unwrap();
        assert_eq!(config.general.output_format, OutputFormat::Plain);
    }

    #[test]
    fn runtime_configs_follow_general_section() {
        let config = parse_config(
            "[general]\ncolors = false\ncolor_bad = \"#AA0000\"\npercent_mark = \" pct\"\n",
        )
        .unwrap();
        let output = build_output_config(&config.general);
        assert!(!output.color_enabled);
        assert_eq!(output.palette.bad, "#AA0000");
        assert_eq!(output.palette.good, "#00FF00");
        assert_eq!(build_render_context(&config.general).pct_mark, " pct");
    }

    #[test]
    fn load_config_falls_back_on_missing_file() {
        let config = load_config(Path::new("/nonexistent/barblocks/config.toml"));
        assert_eq!(config.blocks.len(), 1);
    }
}
