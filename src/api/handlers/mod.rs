//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint.

pub mod greeting;
pub mod health;
pub mod index;
pub mod redirect;
pub mod shorten;

pub use greeting::hello_handler;
pub use health::health_handler;
pub use index::index_handler;
pub use redirect::{redirect_handler, redirect_new_handler};
pub use shorten::create_short_url_handler;
