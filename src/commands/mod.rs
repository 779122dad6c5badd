//! CLI commands for nodeplan

pub mod dispatch;
pub mod nodes;
pub mod path;
pub mod search;
pub mod table;
