//! Client-side behavior for the static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page through the
//! `wasm-bindgen` glue. It takes over an existing, server-rendered document:
//! it applies the saved theme, smooth-scrolls in-page links, highlights the
//! nav link for the section in view, and drives the about and projects
//! modals, including client-side filtering of the project catalog.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Testable [`page::PageCore`] state machine and the [`page::Action`]s it emits |
//! | [`mount`] | Composition root: element lookup and event wiring |
//! | [`view`] | Element handles and action application |
//! | [`theme`] | Light/dark theme rules |
//! | [`nav`] | Anchor fragments, active-section detection, nav link pairing |
//! | [`modal`] | About and projects modal hooks |
//! | [`catalog`] | Static project list and technology filtering |
//! | [`render`] | Project card markup |
//! | [`dom`] | Result-bearing DOM lookups and listener helpers |
//! | [`storage`] | `localStorage` preference access |
//! | [`config`] | Runtime configuration |
//! | [`consts`] | DOM contract strings and fixed values |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod dom;
pub mod modal;
pub mod mount;
pub mod nav;
pub mod page;
pub mod render;
pub mod storage;
pub mod theme;
pub mod view;

use wasm_bindgen::prelude::*;

use crate::config::PageConfig;

/// Mount the page with default configuration.
///
/// # Errors
///
/// Returns a JS error string when the window or document is unavailable.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    start(&PageConfig::default())
}

/// Mount the page with a JSON configuration object (missing fields default).
///
/// # Errors
///
/// Returns a JS error string when `config` is malformed or the document is
/// unavailable.
#[wasm_bindgen(js_name = bootWithConfig)]
pub fn boot_with_config(config: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
    start(&config)
}

fn start(config: &PageConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config.level()) {
        log::debug!("console logger already installed: {err}");
    }

    let window = dom::window()?;
    let report = mount::mount(&window, config)?;
    report.log();
    if !report.is_complete() {
        log::warn!("page mounted with {} of {} features", report.wired.len(), page::Feature::ALL.len());
    }
    Ok(())
}
