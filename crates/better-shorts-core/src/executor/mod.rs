#[allow(clippy::module_inception)]
mod executor;
mod launcher;
mod policy;

pub use {
    executor::Executor,
    launcher::{Launcher, SystemLauncher},
    policy::ExecutionPolicy,
};
