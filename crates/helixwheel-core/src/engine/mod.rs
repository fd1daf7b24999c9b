//! # Engine Module
//!
//! Configuration and error handling shared by every stage of the wheel pipeline.
//!
//! - **Configuration** ([`config`]) - Geometry parameters, render style and palette,
//!   assembled and validated through [`config::WheelConfigBuilder`]
//! - **Error Handling** ([`error`]) - [`error::EngineError`], which separates invalid
//!   input from rendering failures and names the stage that failed

pub mod config;
pub mod error;
