//! Heat diffusion on a rectangular 2D plate.
//!
//! A [`Grid`] is created cool, a [`HotCircle`] is installed with
//! [`apply_hot_circle`], and [`Grid::step`] advances the field with the
//! explicit scheme in [`stencil`]. [`Frames`] wraps the three into an
//! endless, restartable sequence of snapshots.

mod frames;
mod grid;
mod initial;
pub mod stencil;

pub use frames::{Frame, Frames};
pub use grid::{stable_dt, Grid, PlateParams};
pub use initial::{apply_hot_circle, HotCircle};
