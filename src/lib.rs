#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod feedback;
mod game;
mod multi;
mod single;
mod validator;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use common::*;
pub use config::*;
pub use feedback::*;
pub use game::*;
pub use multi::*;
pub use single::*;
pub use validator::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
