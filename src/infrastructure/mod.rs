//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `workspace` - The manifest-backed [`BuildContext`](crate::domain::ports::BuildContext)

pub mod workspace;

pub use workspace::Workspace;
