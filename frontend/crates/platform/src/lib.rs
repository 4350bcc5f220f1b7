//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie reading (browser cookie strings and `Cookie` headers)
//! - HTTP transport abstraction and its `reqwest` implementation
//! - API client configuration

pub mod client;
pub mod config;
pub mod cookie;
