//! # riskdir-core
//!
//! Shared types for the risk-owner directory service:
//! - Domain types (`RiskOwner`, `DepartmentFilter`)
//! - The `RiskOwnerStore` trait implemented by database adapters

pub mod domain;
pub mod store;

pub use domain::{DepartmentFilter, RiskOwner};
pub use store::RiskOwnerStore;
