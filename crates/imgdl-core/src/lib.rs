pub mod config;
pub mod logging;

pub mod fetch;
pub mod http;
pub mod pipeline;
pub mod search;
