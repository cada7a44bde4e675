//! BetterShorts: global keyboard shortcuts that launch apps, URLs and commands.

mod app;
mod config;
mod error;
mod event_loop_rebind;
mod installation;
mod logging;
mod server;
#[cfg(test)]
mod tests;
mod tray_icon_state;
mod tray_manager;
mod ui_event;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    event_loop_rebind::EventLoopRebind,
    tray_icon_state::TrayIconState,
    tray_manager::TrayManager,
    ui_event::UiEvent,
};

use std::sync::Mutex;

use global_hotkey::GlobalHotKeyEvent;
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{error, info, warn};
use tray_icon::menu::MenuEvent;

/// Application entry point.
fn main() {
    // Flushes the log file on exit.
    let _log_guard = logging::init();

    let event_loop = EventLoopBuilder::<UiEvent>::with_user_event().build();

    // Hotkey and menu callbacks fire on platform threads; forward them into
    // the event loop where the registrar and tray live.
    let hotkey_proxy = Mutex::new(event_loop.create_proxy());
    GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
        if let Ok(proxy) = hotkey_proxy.lock() {
            let _ = proxy.send_event(UiEvent::Hotkey(event));
        }
    }));

    let menu_proxy = Mutex::new(event_loop.create_proxy());
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        if let Ok(proxy) = menu_proxy.lock() {
            let _ = proxy.send_event(UiEvent::Menu(event));
        }
    }));

    let signal_proxy = Mutex::new(event_loop.create_proxy());
    if let Err(e) = ctrlc::set_handler(move || {
        if let Ok(proxy) = signal_proxy.lock() {
            let _ = proxy.send_event(UiEvent::Shutdown);
        }
    }) {
        warn!(error = ?e, "Failed to install Ctrl+C handler");
    }

    let app_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    // Created inside the loop so the platform app is initialized first.
    let mut app: Option<App> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                let tray_manager = match TrayManager::new() {
                    Ok(tm) => tm,
                    Err(e) => {
                        error!("Failed to create TrayManager: {:?}", e);
                        std::process::exit(1);
                    }
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                match App::start(app_proxy.clone(), tray_manager) {
                    Ok(started) => app = Some(started),
                    Err(e) => {
                        error!("Failed to start: {:?}", e);
                        std::process::exit(1);
                    }
                }
            }
            Event::UserEvent(ui_event) => match app.as_mut() {
                Some(running) => {
                    if !running.handle(ui_event) {
                        // Dropping the app releases every hotkey.
                        app = None;
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
                None if ui_event.is_shutdown() => {
                    info!("Shutdown requested before startup finished");
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
                None => warn!(event = ?ui_event, "Event before startup, ignored"),
            },
            _ => {}
        }
    });
}
