//! API module for HTTP endpoints
//!
//! This module provides the REST API consumed by the marketplace UI.

pub mod http;
pub mod rest;
pub mod state;
