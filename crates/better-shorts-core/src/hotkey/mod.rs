mod backend;
mod registrar;

pub use {
    backend::HotkeyBackend,
    registrar::{Binding, BindingFailure, Registrar, RegistrationReport},
};
