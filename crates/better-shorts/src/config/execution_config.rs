use better_shorts_core::ExecutionPolicy;

use serde::{Deserialize, Serialize};

/// Gate for `code` shortcuts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Run `code` shortcuts. Off unless the user opts in.
    #[serde(default)]
    pub allow_code: bool,

    /// Programs `code` shortcuts may start. Empty allows any shell command.
    #[serde(default)]
    pub allowed_programs: Vec<String>,
}

impl ExecutionConfig {
    /// Policy handed to the executor.
    pub fn policy(&self) -> ExecutionPolicy {
        ExecutionPolicy {
            allow_code: self.allow_code,
            allowed_programs: self.allowed_programs.clone(),
        }
    }
}
