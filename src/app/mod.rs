//! Route shell: owns the stores and pages, routes input, and applies the
//! session guard on every navigation.

mod actions;
mod init;
mod keyboard;
mod login;
mod mouse;
mod router;
mod state;
mod tick;

pub use login::{LoginField, LoginState};
pub use state::{App, CommandAction, HitRegistry, Route};

#[cfg(test)]
pub(crate) mod tests;
