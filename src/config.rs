//! Loader configuration
//!
//! Names the manifest variables that hold each example list and sets how strict loading is.

use examples_core::snapshot::{COMPILED_LIST_NAME, SCRIPT_LIST_NAME};

/// Manifest loading configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    /// Variable holding compiled-language examples
    pub compiled_list: String,
    /// Variable holding script-language examples
    pub script_list: String,
    /// Whether assignments to any other variable are errors instead of being ignored
    pub reject_unknown_lists: bool,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            compiled_list: COMPILED_LIST_NAME.to_string(),
            script_list: SCRIPT_LIST_NAME.to_string(),
            reject_unknown_lists: false,
        }
    }
}

impl LoadConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compiled-example list variable
    pub fn with_compiled_list(mut self, name: impl Into<String>) -> Self {
        self.compiled_list = name.into();
        self
    }

    /// Set the script-example list variable
    pub fn with_script_list(mut self, name: impl Into<String>) -> Self {
        self.script_list = name.into();
        self
    }

    /// Reject (or ignore) assignments to unknown variables
    pub fn with_reject_unknown_lists(mut self, reject: bool) -> Self {
        self.reject_unknown_lists = reject;
        self
    }
}
