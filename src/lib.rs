pub mod changelog;
pub mod config;
pub mod detector;
pub mod document;
pub mod domain;
pub mod error;
pub mod resolver;
pub mod ui;

pub use error::{ChangelogWatchError, Result};
