//! In-process services backing the API.

pub mod sessions;
