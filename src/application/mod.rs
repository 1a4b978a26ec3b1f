//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain planning rules (those are in Domain)
//! - Coordinates between Config, Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PlanUseCase` - Load a manifest, resolve settings, plan modules

pub mod plan;

pub use plan::{PlanOptions, PlanResult, PlanUseCase};
