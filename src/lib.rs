//! Serve a tree of media folders as podcast RSS feeds, plus the files themselves.

pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod http;
pub mod identity;
pub mod media;
pub mod sandbox;
