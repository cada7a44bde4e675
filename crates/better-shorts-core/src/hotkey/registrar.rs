//! Projection of the shortcut list onto OS hotkeys.
//!
//! Bindings are never patched. Every change runs [`Registrar::register_all`],
//! which releases everything this registrar holds and binds the enabled
//! records again from the file on disk.

use crate::{
    CoreResult, ShortcutError, ShortcutRecord, ShortcutStore, hotkey::HotkeyBackend,
};

use std::panic::Location;

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyEvent, HotKeyState, hotkey::HotKey};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

/// One live hotkey and the record it dispatches to.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The hotkey claimed from the backend.
    pub hotkey: HotKey,
    /// Snapshot of the record at registration time.
    pub record: ShortcutRecord,
}

/// A record that could not be bound during a pass.
#[derive(Debug)]
pub struct BindingFailure {
    /// Position of the record in the stored list.
    pub index: usize,
    /// The record's accelerator.
    pub keys: String,
    /// What went wrong.
    pub error: ShortcutError,
}

/// Outcome of one [`Registrar::register_all`] pass.
#[derive(Debug)]
pub struct RegistrationReport {
    /// Correlates the log lines of this pass.
    pub generation: Uuid,
    /// Accelerators bound, in list order.
    pub bound: Vec<String>,
    /// Records skipped because `enabled` is false.
    pub skipped_disabled: usize,
    /// Records that failed to bind.
    pub failures: Vec<BindingFailure>,
}

/// Owner of every hotkey this process has bound.
///
/// Construct once at startup on the event-loop thread. Dropping the
/// registrar releases all of its bindings.
///
/// A hotkey whose release the backend refused is still held by the OS. It
/// is kept as stranded and released again on the next pass, or taken back
/// if the new list binds the same keys.
pub struct Registrar<B: HotkeyBackend> {
    backend: B,
    store: ShortcutStore,
    bindings: Vec<Binding>,
    stranded: Vec<HotKey>,
}

impl<B: HotkeyBackend> Registrar<B> {
    /// Create a registrar with no bindings.
    pub fn new(backend: B, store: ShortcutStore) -> Self {
        Self {
            backend,
            store,
            bindings: Vec::new(),
            stranded: Vec::new(),
        }
    }

    /// Release every binding. Safe to call with nothing bound.
    ///
    /// Hotkeys the backend refuses to release are kept and retried on the
    /// next call. Returns how many hotkeys were released cleanly.
    pub fn unregister_all(&mut self) -> usize {
        let mut released = 0;
        let mut held = Vec::new();

        let pending = self
            .stranded
            .drain(..)
            .map(|hotkey| (hotkey, None))
            .chain(
                self.bindings
                    .drain(..)
                    .map(|binding| (binding.hotkey, Some(binding.record.keys))),
            )
            .collect::<Vec<_>>();

        for (hotkey, keys) in pending {
            match self.backend.unregister(hotkey) {
                Ok(()) => released += 1,
                Err(reason) => {
                    warn!(
                        id = hotkey.id(),
                        keys = keys.as_deref().unwrap_or_default(),
                        reason = %reason,
                        "Failed to release hotkey, will retry"
                    );
                    held.push(hotkey);
                }
            }
        }

        self.stranded = held;

        if released > 0 {
            debug!(released, "Hotkeys released");
        }

        released
    }

    /// Rebuild all bindings from the stored shortcut list.
    ///
    /// A record that fails to bind is logged and reported; the rest of the
    /// list is still processed.
    pub fn register_all(&mut self) -> RegistrationReport {
        let generation = Uuid::new_v4();
        let span = info_span!("register_all", generation = %generation);
        let _enter = span.enter();

        self.unregister_all();

        let mut report = RegistrationReport {
            generation,
            bound: Vec::new(),
            skipped_disabled: 0,
            failures: Vec::new(),
        };

        for (index, record) in self.store.load().into_iter().enumerate() {
            if !record.enabled {
                report.skipped_disabled += 1;
                continue;
            }

            match self.bind(&record) {
                Ok(hotkey) => {
                    debug!(index, keys = %record.keys, kind = %record.kind, "Hotkey bound");
                    report.bound.push(record.keys.clone());
                    self.bindings.push(Binding { hotkey, record });
                }
                Err(error) => {
                    warn!(index, keys = %record.keys, error = %error, "Skipping shortcut");
                    report.failures.push(BindingFailure {
                        index,
                        keys: record.keys,
                        error,
                    });
                }
            }
        }

        info!(
            bound = report.bound.len(),
            failed = report.failures.len(),
            disabled = report.skipped_disabled,
            "Hotkeys registered"
        );

        report
    }

    /// Record bound to the hotkey with `id`, if any.
    pub fn record_for(&self, id: u32) -> Option<&ShortcutRecord> {
        self.bindings
            .iter()
            .find(|binding| binding.hotkey.id() == id)
            .map(|binding| &binding.record)
    }

    /// Record to run for a hotkey event.
    ///
    /// Only the press dispatches; the matching release yields `None`, so one
    /// keystroke runs its shortcut exactly once.
    pub fn record_for_event(&self, event: &GlobalHotKeyEvent) -> Option<&ShortcutRecord> {
        if !matches!(event.state, HotKeyState::Pressed) {
            return None;
        }

        let record = self.record_for(event.id);
        if record.is_none() {
            warn!(id = event.id, "Hotkey fired with no binding");
        }
        record
    }

    /// Live bindings in list order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[track_caller]
    fn bind(&mut self, record: &ShortcutRecord) -> CoreResult<HotKey> {
        let hotkey = record
            .keys
            .parse::<HotKey>()
            .map_err(|e| ShortcutError::InvalidAccelerator {
                keys: record.keys.clone(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // First enabled record wins; later claims on the same hotkey are refused.
        if self.record_for(hotkey.id()).is_some() {
            return Err(ShortcutError::DuplicateBinding {
                keys: record.keys.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // Still held from a release the backend refused: take it back.
        if let Some(position) = self.stranded.iter().position(|h| h.id() == hotkey.id()) {
            self.stranded.swap_remove(position);
            debug!(keys = %record.keys, "Reclaimed stranded hotkey");
            return Ok(hotkey);
        }

        self.backend
            .register(hotkey)
            .map_err(|reason| ShortcutError::BindingFailed {
                keys: record.keys.clone(),
                reason,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(hotkey)
    }
}

impl<B: HotkeyBackend> Drop for Registrar<B> {
    fn drop(&mut self) {
        self.unregister_all();
    }
}
