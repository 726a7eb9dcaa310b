pub mod api;
pub mod notify;

pub use api::ResourceApi;
pub use notify::NotificationSink;

#[cfg(target_arch = "wasm32")]
pub mod auth_service;
#[cfg(target_arch = "wasm32")]
pub mod resource_client;

#[cfg(target_arch = "wasm32")]
pub use auth_service::{perform_login, register};
#[cfg(target_arch = "wasm32")]
pub use resource_client::{AuthMode, HttpResourceClient};
