//! Taskboard: a server-rendered CRUD module for a single `tasks` table.
//!
//! The crate provides a paginated task list, create/edit forms with
//! validation, detail pages and a confirmed delete, served over HTTP behind
//! an optional admin token.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, storage, form handling and page workflow
//! - [`session`]: Per-browser page-size preference and flash messages
//! - [`web`]: `axum` routes, admin gate and page rendering
//! - [`config`]: Command-line and environment configuration
//! - [`server`]: Start-up and serving

pub mod config;
pub mod server;
pub mod session;
pub mod task;
pub mod web;
