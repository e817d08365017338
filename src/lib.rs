//! Environment setup checks for the support automation scripts.
//!
//! [`loader::load`] merges `.env.local` into an [`env::EnvSnapshot`] without
//! overriding values the shell already set, and [`validator::validate`]
//! checks a [`catalog::Catalog`] of required and optional names against it.

pub mod catalog;
pub mod env;
pub mod loader;
pub mod logging;
pub mod report;
pub mod validator;
