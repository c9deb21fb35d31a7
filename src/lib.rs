//! Inkframe
//!
//! Converts images into fixed-size, palette-quantized BMPs for 7-color
//! e-ink photo frames. This library exposes modules for integration testing.

pub mod batch;
pub mod error;
pub mod models;
pub mod pipeline;
