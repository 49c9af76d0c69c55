//! Step definitions for task CRUD behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
