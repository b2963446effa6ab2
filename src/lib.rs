#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod auth;
#[cfg(feature = "std")]
pub mod cli;
pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;

pub use auth::{validate_credentials, AuthError, CredentialStore, MemoryCredentialStore};
#[cfg(feature = "std")]
pub use auth::FileCredentialStore;
pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::{Player, RandomPlayer};
#[cfg(feature = "std")]
pub use player::CliPlayer;
