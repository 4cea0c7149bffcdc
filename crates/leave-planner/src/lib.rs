//! Vacation scheduling rules and conformance checking for department
//! managers: the domain model, the rule engine, directory lookup ports,
//! and the HTTP surface the API service composes.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
