use crate::{HotkeyBackend, Launcher, Registrar, ShortcutStore};

use std::{
    collections::HashSet,
    io,
    sync::{Arc, Mutex},
};

use global_hotkey::hotkey::HotKey;

/// In-memory hotkey backend that behaves like the OS: a hotkey can be
/// claimed once, and ids in `refuse` are always rejected. The next
/// `fail_unregister` releases are refused and leave the hotkey held.
#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    pub(crate) registered: Vec<HotKey>,
    pub(crate) refuse: HashSet<u32>,
    pub(crate) unregister_calls: usize,
    pub(crate) fail_unregister: usize,
}

impl FakeBackend {
    pub(crate) fn registered_ids(&self) -> Vec<u32> {
        self.registered.iter().map(|h| h.id()).collect()
    }
}

impl HotkeyBackend for FakeBackend {
    fn register(&mut self, hotkey: HotKey) -> Result<(), String> {
        if self.refuse.contains(&hotkey.id()) {
            return Err("claimed by another application".to_string());
        }
        if self.registered.iter().any(|h| h.id() == hotkey.id()) {
            return Err("already registered".to_string());
        }
        self.registered.push(hotkey);
        Ok(())
    }

    fn unregister(&mut self, hotkey: HotKey) -> Result<(), String> {
        self.unregister_calls += 1;
        if self.fail_unregister > 0 {
            self.fail_unregister -= 1;
            return Err("release refused".to_string());
        }
        let before = self.registered.len();
        self.registered.retain(|h| h.id() != hotkey.id());
        if self.registered.len() == before {
            return Err("not registered".to_string());
        }
        Ok(())
    }
}

/// A launcher call captured by [`RecordingLauncher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LaunchCall {
    OpenPath(String),
    OpenUrl(String),
    Spawn(String, Vec<String>),
    Shell(String),
}

/// Launcher that records calls instead of touching the desktop.
#[derive(Debug, Default)]
pub(crate) struct RecordingLauncher {
    pub(crate) calls: Mutex<Vec<LaunchCall>>,
    pub(crate) fail: bool,
}

impl RecordingLauncher {
    pub(crate) fn calls(&self) -> Vec<LaunchCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: LaunchCall) -> io::Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no handler"));
        }
        Ok(())
    }
}

impl Launcher for RecordingLauncher {
    fn open_path(&self, path: &str) -> io::Result<()> {
        self.record(LaunchCall::OpenPath(path.to_string()))
    }

    fn open_url(&self, url: &str) -> io::Result<()> {
        self.record(LaunchCall::OpenUrl(url.to_string()))
    }

    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<()> {
        self.record(LaunchCall::Spawn(
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ))
    }

    fn spawn_shell(&self, command: &str) -> io::Result<()> {
        self.record(LaunchCall::Shell(command.to_string()))
    }
}

/// Rebind hook that runs the registrar pass immediately.
pub(crate) struct InlineRebind {
    pub(crate) registrar: Mutex<Registrar<FakeBackend>>,
}

impl InlineRebind {
    pub(crate) fn new(store: ShortcutStore) -> Arc<Self> {
        Arc::new(Self {
            registrar: Mutex::new(Registrar::new(FakeBackend::default(), store)),
        })
    }
}

impl crate::RebindHook for InlineRebind {
    fn rebind(&self) {
        if let Ok(mut registrar) = self.registrar.lock() {
            registrar.register_all();
        }
    }
}

pub(crate) fn hotkey_id(keys: &str) -> u32 {
    keys.parse::<HotKey>().unwrap().id()
}
