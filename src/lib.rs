pub mod config;
pub mod dispatcher;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod identity;
pub mod models;
pub mod util;
