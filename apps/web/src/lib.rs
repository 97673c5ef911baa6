//! Clinic Portal browser binding
//!
//! Implements the core's platform traits with `web-sys` and mounts the
//! controllers registered for the page that just loaded:
//! - `fetch` transport
//! - `sessionStorage` session keys
//! - toast notices on `gloo-timers`
//! - console logging (`console_log`) and panic hook

mod document;
mod fetch;
mod storage;
mod toast;

use std::rc::Rc;

use clinic_core::controllers::bind_logout;
use clinic_core::{ClientConfig, ClinicApi, Context, Router, SessionStore, Spawner};
use futures::future::LocalBoxFuture;
use log::Level;
use wasm_bindgen::prelude::*;

pub use document::BrowserDocument;
pub use fetch::FetchClient;
pub use storage::TabStorage;
pub use toast::ToastNotifier;

/// `<meta name="clinic-api-base" content="...">` overrides the backend address
pub const API_BASE_META: &str = "clinic-api-base";

/// Runs tasks on the browser's microtask queue
struct EventLoop;

impl Spawner for EventLoop {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        log::warn!("logger already installed");
    }

    let Some(document) = BrowserDocument::new() else {
        log::error!("no document available; portal not started");
        return;
    };

    let config = ClientConfig::default().with_override(document.meta_content(API_BASE_META).as_deref());
    log::debug!("backend at {}", config.api_base);

    let page = document.page();
    let notifier = Rc::new(ToastNotifier::new(document.raw().clone()));
    let ctx = Context::new(
        ClinicApi::new(config, Rc::new(FetchClient)),
        SessionStore::new(Rc::new(TabStorage::open())),
        Rc::new(document),
        notifier,
        Rc::new(EventLoop),
    );

    match page {
        Some(page) => {
            Router::clinic().mount(page, &ctx);
        }
        None => {
            log::warn!("unrecognized page; only logout is bound");
            bind_logout(&ctx);
        }
    }
}
