//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code generation and custom-alias validation
//! - [`qr`] - QR code PNG rendering for short links

pub mod code_generator;
pub mod qr;
