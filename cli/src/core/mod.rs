//! # mbedrs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Repository: https://github.com/mbedrs/mbedrs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for the mbedrs application. These components
//! handle configuration, error management, and construction of the external
//! tool's command lines.
//!
//! ## Architecture
//!
//! The core infrastructure consists of three key components:
//! - `config`: Configuration loading and merging
//! - `error`: Error types and error handling utilities
//! - `invocation`: The build-configuration data model and command builder
//!
//! ## Usage
//!
//! Core infrastructure is imported by command handlers:
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{MbedrsError, Result}; // For error handling
//! use crate::core::invocation; // For building mbed command lines
//! ```
//!
//! These modules provide foundational capabilities that are used across
//! different parts of the application, ensuring consistent behavior.
//!
pub mod config;
pub mod error;
pub mod invocation;
