//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_context;

pub use build_context::{BuildContext, SrcResolution, ToolResolution};
