//! Error types and result aliases for Floe.
//!
//! This module provides the core error handling infrastructure shared by
//! every crate in the workspace.

mod error;

pub use error::{FloeError, FloeResult, GenericError};
