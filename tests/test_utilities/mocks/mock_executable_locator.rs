use distro_sbom::prelude::*;
use std::path::PathBuf;

/// Mock ExecutableLocator that knows a fixed set of program names
#[derive(Default, Clone)]
pub struct MockExecutableLocator {
    pub available: Vec<String>,
    pub probed: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockExecutableLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(names: &[&str]) -> Self {
        Self {
            available: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

impl ExecutableLocator for MockExecutableLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.probed.lock().unwrap().push(name.to_string());
        self.available
            .iter()
            .any(|n| n == name)
            .then(|| PathBuf::from("/usr/bin").join(name))
    }
}
