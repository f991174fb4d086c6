use std::path::PathBuf;

/// ExecutableLocator port for finding programs on the executable search path
pub trait ExecutableLocator {
    /// Returns the full path of `name` if it is an executable on the search path
    fn locate(&self, name: &str) -> Option<PathBuf>;

    fn is_available(&self, name: &str) -> bool {
        self.locate(name).is_some()
    }
}
