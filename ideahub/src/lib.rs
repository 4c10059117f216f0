//! IdeaHub library
//!
//! This library exposes the core functionality of IdeaHub for testing
//! and for embedding in other front ends.

pub mod api;
pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod services;
pub mod storage;
