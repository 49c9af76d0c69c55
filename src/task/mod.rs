//! Task CRUD module.
//!
//! Manages the single `tasks` table behind a set of server-rendered pages:
//! a paginated list, a create/edit form, a detail page and a two-step
//! delete. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Form conversion and validation in [`form`]
//! - Workflow orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod form;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
