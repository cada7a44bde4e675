use serde::{Deserialize, Serialize};

/// Capability switch for `code` shortcuts.
///
/// Stored shortcut text is otherwise run with the full privileges of this
/// process, so nothing runs unless `allow_code` is set. A non-empty
/// `allowed_programs` further restricts commands to the listed programs,
/// which are then started directly rather than through a shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPolicy {
    /// Run `code` shortcuts at all.
    #[serde(default)]
    pub allow_code: bool,

    /// Program names a `code` shortcut may start. Empty means any command.
    #[serde(default)]
    pub allowed_programs: Vec<String>,
}

impl ExecutionPolicy {
    /// Whether `program` passes the allow-list.
    ///
    /// Matching uses the file name, so `/usr/bin/notify-send` matches
    /// `notify-send`.
    pub fn permits(&self, program: &str) -> bool {
        if self.allowed_programs.is_empty() {
            return true;
        }

        let name = std::path::Path::new(program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(program);

        self.allowed_programs
            .iter()
            .any(|allowed| allowed == program || allowed == name)
    }
}
