//! Middleware Module

pub mod logging;
