//! Account UI module
//!
//! This module provides the sign-up form and session context
//! for the Vestra storefront.

mod context;
mod sign_up;

pub use context::{SessionState, UserContext, provide_user_context, use_user_context};
pub use sign_up::SignUpForm;
