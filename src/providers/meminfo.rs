use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use crate::{error::MemInfoError, types::MemInfoSnapshot};

pub const PROC_MEMINFO: &str = "/proc/meminfo";

pub trait MemInfoCollector {
    fn collect_meminfo(&self) -> Result<MemInfoSnapshot, MemInfoError>;

    /// Where the figures come from, for diagnostics.
    fn source(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct ProcMemInfoCollector {
    path: PathBuf,
}

impl Default for ProcMemInfoCollector {
    fn default() -> Self {
        Self::new(PROC_MEMINFO)
    }
}

impl ProcMemInfoCollector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MemInfoCollector for ProcMemInfoCollector {
    fn collect_meminfo(&self) -> Result<MemInfoSnapshot, MemInfoError> {
        let file = File::open(&self.path).map_err(|source| MemInfoError::Open {
            path: self.path.clone(),
            source,
        })?;
        parse_meminfo(BufReader::new(file))
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves fixed meminfo text, for tests and benches.
#[derive(Debug, Default, Clone)]
pub struct StubMemInfoCollector {
    pub contents: String,
}

impl StubMemInfoCollector {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }
}

impl MemInfoCollector for StubMemInfoCollector {
    fn collect_meminfo(&self) -> Result<MemInfoSnapshot, MemInfoError> {
        parse_meminfo(self.contents.as_bytes())
    }

    fn source(&self) -> String {
        "stub".to_string()
    }
}

#[derive(Default)]
struct PartialMemInfo {
    total: Option<u64>,
    free: Option<u64>,
    available: Option<u64>,
    buffers: Option<u64>,
    cached: Option<u64>,
    shared: Option<u64>,
}

impl PartialMemInfo {
    fn complete(&self) -> Option<MemInfoSnapshot> {
        Some(MemInfoSnapshot {
            total_kb: self.total?,
            free_kb: self.free?,
            available_kb: self.available?,
            buffers_kb: self.buffers?,
            cached_kb: self.cached?,
            shared_kb: self.shared?,
        })
    }

    fn first_missing(&self) -> &'static str {
        [
            ("MemTotal", self.total),
            ("MemFree", self.free),
            ("MemAvailable", self.available),
            ("Buffers", self.buffers),
            ("Cached", self.cached),
            ("Shmem", self.shared),
        ]
        .into_iter()
        .find(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .unwrap_or("MemTotal")
    }
}

/// Reads `Key: <n> kB` lines until all six required fields are seen.
pub fn parse_meminfo<R: BufRead>(reader: R) -> Result<MemInfoSnapshot, MemInfoError> {
    let mut partial = PartialMemInfo::default();

    for line in reader.lines() {
        let line = line?;
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };

        let slot = match key {
            "MemTotal" => &mut partial.total,
            "MemFree" => &mut partial.free,
            "MemAvailable" => &mut partial.available,
            "Buffers" => &mut partial.buffers,
            "Cached" => &mut partial.cached,
            "Shmem" => &mut partial.shared,
            _ => continue,
        };
        *slot = Some(parse_kb(rest));

        if let Some(snapshot) = partial.complete() {
            return Ok(snapshot);
        }
    }

    Err(MemInfoError::MissingField(partial.first_missing()))
}

/// Leading digits of the value column; no digits reads as 0 and values past
/// `u64::MAX` saturate.
fn parse_kb(s: &str) -> u64 {
    s.trim_start()
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .fold(0u64, |acc, byte| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(byte - b'0'))
        })
}
