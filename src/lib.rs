//! festival-labels library
//!
//! Fetches festival line-ups, regroups them by record label and serves the
//! result from a one-shot snapshot file.

pub mod aggregate;
pub mod cache;
pub mod cli;
pub mod data;
pub mod observe;
pub mod server;
pub mod service;
