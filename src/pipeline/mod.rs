//! The per-file conversion pipeline.
//!
//! Stages run leaf-first: [`decode`] validates and loads the source,
//! [`geometry`] picks the canvas and cover scale, [`compose`] resizes and
//! centers onto a white canvas, and [`convert`] ties the stages together
//! with quantization and the BMP save.

pub mod compose;
pub mod convert;
pub mod decode;
pub mod geometry;

pub use convert::convert_file;
pub use geometry::GeometryPlan;
