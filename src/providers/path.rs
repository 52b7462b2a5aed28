use std::{collections::HashSet, fs, path::Path};

pub trait PathProbe {
    /// True when a stat of `path` succeeds. Permission errors count as absent.
    fn path_exists(&self, path: &str) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemPathProbe;

impl PathProbe for FileSystemPathProbe {
    fn path_exists(&self, path: &str) -> bool {
        fs::metadata(Path::new(path)).is_ok()
    }
}

/// Reports only the listed paths as present.
#[derive(Debug, Default, Clone)]
pub struct StubPathProbe {
    pub present: HashSet<String>,
}

impl StubPathProbe {
    pub fn with_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            present: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl PathProbe for StubPathProbe {
    fn path_exists(&self, path: &str) -> bool {
        self.present.contains(path)
    }
}
