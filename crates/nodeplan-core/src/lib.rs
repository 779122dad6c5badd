//! Nodeplan Core Library
//!
//! Network model, ownership loading and the minimum contribution point
//! connection search behind the nodeplan CLI.

pub mod config;
pub mod error;
pub mod logging;
pub mod network;
pub mod ownership;
pub mod solver;
pub mod summary;
pub mod table;
