//! Core domain logic for the storefront's account sign-up flow

#[cfg(feature = "ssr")]
pub mod config;
mod api;
mod form;
mod notify;
mod session;
mod signup;
mod validation;

pub use api::*;
pub use form::*;
pub use notify::*;
pub use session::*;
pub use signup::*;
pub use validation::*;
