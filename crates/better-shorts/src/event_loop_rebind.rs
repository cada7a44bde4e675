use crate::UiEvent;

use std::sync::Mutex;

use better_shorts_core::RebindHook;
use tao::event_loop::EventLoopProxy;
use tracing::{debug, warn};

/// [`RebindHook`] that hands the rebind to the main thread.
///
/// The registrar lives on the event-loop thread, so the HTTP thread only
/// posts [`UiEvent::Rebind`] and returns.
pub struct EventLoopRebind {
    proxy: Mutex<EventLoopProxy<UiEvent>>,
}

impl EventLoopRebind {
    /// Wrap the event-loop proxy.
    pub fn new(proxy: EventLoopProxy<UiEvent>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }
}

impl RebindHook for EventLoopRebind {
    fn rebind(&self) {
        let Ok(proxy) = self.proxy.lock() else {
            warn!("Event loop proxy lock poisoned, rebind dropped");
            return;
        };

        match proxy.send_event(UiEvent::Rebind) {
            Ok(()) => debug!("Rebind requested"),
            Err(e) => warn!(error = ?e, "Event loop closed, rebind dropped"),
        }
    }
}
