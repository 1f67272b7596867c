//! Chrome lifecycle management and page objects for the storefront harness.
//!
//! The session model is one browser per scenario: the results tab is the
//! anchor, at most one detail tab is open at a time, and the detail tab is
//! always closed before the next product request starts.

pub mod pages;

mod error;
mod finder;
mod launcher;
mod profile;
mod session;
mod wait;

pub use error::{Error, Result};
pub use finder::ChromeFinder;
pub use launcher::ChromeLauncher;
pub use profile::BrowserProfile;
pub use session::{BrowserSession, SessionOptions};
pub use wait::{WaitPolicy, wait_for_element};
