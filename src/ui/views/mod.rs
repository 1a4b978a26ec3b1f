//! Text views, one module per command

pub mod expand;
pub mod plan;
