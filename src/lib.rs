#![doc = include_str!("../README.md")]

pub mod config;
pub mod email;
pub mod error;
pub mod provider;
pub mod recipient;
pub mod resolver;

pub use config::ConfigFormat;
pub use email::is_likely_email;
pub use error::{Error, Result};
pub use provider::{FileRecipientProvider, RecipientLists, RecipientProvider};
pub use recipient::{Recipient, NULL_RECIPIENT};
pub use resolver::RecipientResolver;
