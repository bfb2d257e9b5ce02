//! Vectra Core - vector algebra over variable-dimension tuples
//!
//! This crate provides:
//! - `Vector` - non-empty numeric tuples with arithmetic and 2D/3D geometry
//! - `VectorSource` - the input shapes a vector can be built from
//! - `Point` - `{x, y, z?}` records for display/position consumers
//! - `angle` - degree/radian conversion
//! - Error types and Result alias

pub mod angle;
mod error;
mod point;
mod report;
mod source;
mod vector;

pub use angle::AngleUnit;
pub use error::{Result, VectraError};
pub use point::Point;
pub use report::{ReportEntry, VectorReport};
pub use source::VectorSource;
pub use vector::Vector;
