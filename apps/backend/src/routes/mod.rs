//! HTTP route handlers

pub mod auth;
pub mod planner;
pub mod revisions;
pub mod session;
pub mod topics;
