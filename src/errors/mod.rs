//! Error types and error handling for the compiler.
//!
//! This module defines the fatal error types used throughout the
//! pipeline. It includes:
//!
//! - Error structures with source line information
//! - Specific error variants for each compilation stage
//! - Classification of errors by originating stage
//! - Error formatting and display functionality

pub mod errors;
