pub mod meminfo;
pub mod path;

pub use meminfo::{MemInfoCollector, ProcMemInfoCollector, StubMemInfoCollector, PROC_MEMINFO};
pub use path::{FileSystemPathProbe, PathProbe, StubPathProbe};
