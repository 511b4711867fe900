//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `seed` - Seed the stock catalog and a bootstrap admin

pub mod args;

pub use args::{Cli, Commands};
