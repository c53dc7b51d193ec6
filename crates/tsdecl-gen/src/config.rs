//! Generation configuration.

/// Configuration for the rendered declaration document.
#[derive(Debug, Clone)]
pub struct Config {
    /// Identifier of the `declare const` binding that anchors the document.
    pub(crate) binding_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binding_name: "k".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier of the root binding constant (default: `k`).
    pub fn binding_name(mut self, value: impl Into<String>) -> Self {
        self.binding_name = value.into();
        self
    }
}
