//! Build Options

/// Options for the build use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Rebuild even when the cache directory is already complete
    pub force: bool,
    /// Folded into the cache stamp so a new release invalidates old output
    pub tool_version: String,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self {
            force: false,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_tool_version(mut self, version: impl Into<String>) -> Self {
        self.tool_version = version.into();
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new()
    }
}
