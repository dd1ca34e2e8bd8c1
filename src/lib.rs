//! Transient heat diffusion over a rectangular plate.
//!
//! The plate is discretised on a regular grid and advanced with an explicit
//! forward-time, centred-space stencil. See [`d2`] for the solver.

pub mod d2;
pub mod error;

pub use error::{HeatError, Result};
