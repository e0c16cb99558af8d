//! CLI commands for trains

pub mod dispatch;
pub mod edge;
pub mod init;
pub mod inspect;
pub mod query;
pub mod records;
pub mod report;
pub mod source;
