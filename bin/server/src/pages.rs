//! Page components.
//!
//! Only the login page has its own component; every other page kind is
//! rendered by [`DefaultPage`].

pub mod default;
pub mod login;

pub use default::DefaultPage;
pub use login::Login;
