//! City Registry Service.
//!
//! An HTTP service keeping an ordered, in-memory collection of city records
//! with list/get/create/replace/delete routes and generated OpenAPI docs.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
