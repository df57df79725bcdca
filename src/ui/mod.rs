pub mod auth;
pub mod snackbar;

pub use auth::{SignUpForm, provide_user_context, use_user_context};
pub use snackbar::{SnackbarHost, provide_snackbar_context, use_snackbar};
