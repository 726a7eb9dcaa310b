// ============================================================================
// TEA FACTORY UI - BROWSER CLIENT
// ============================================================================
// Core layers (session, access gate, client seam, controllers) are
// platform-neutral so the test suite runs natively; everything that touches
// the browser (gloo-net client, localStorage, Yew views) is wasm-only.
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod views;
