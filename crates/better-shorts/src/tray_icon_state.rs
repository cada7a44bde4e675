/// Tray icon states reflecting the live bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// At least one hotkey is bound.
    Active,
    /// No hotkey is bound.
    Inactive,
}
