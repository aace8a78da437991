// Library for the host binary and tests to access modules

pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod pipeline;
pub mod stats;
pub mod timeline;
pub mod version;
