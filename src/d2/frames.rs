use ndarray::Array2;
use tracing::debug;

use super::grid::{Grid, PlateParams};
use super::initial::{apply_hot_circle, HotCircle};
use crate::error::Result;

/// Snapshot of the plate after one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Position in the sequence since the last restart, starting at 0.
    pub index: usize,
    /// Simulated time of `field`, `(index + 1) * dt`. The first frame already
    /// holds one step, so it reads `dt` rather than zero.
    pub elapsed: f64,
    pub field: Array2<f64>,
}

/// Endless sequence of plate snapshots.
///
/// Each call to `next` advances the grid by one step and yields a copy of
/// the new field, so it never returns `None`. [`Frames::restart`] puts the
/// plate back to its cool state with the hot circle installed.
#[derive(Debug, Clone)]
pub struct Frames {
    circle: HotCircle,
    grid: Grid,
    index: usize,
}

impl Frames {
    pub fn new(params: &PlateParams, circle: HotCircle) -> Result<Self> {
        let mut grid = Grid::new(params)?;
        apply_hot_circle(&mut grid, &circle);

        Ok(Self {
            circle,
            grid,
            index: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn restart(&mut self) {
        self.grid.reset();
        apply_hot_circle(&mut self.grid, &self.circle);
        self.index = 0;

        debug!("restarted plate sequence");
    }
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let field = self.grid.step().clone();
        let frame = Frame {
            index: self.index,
            elapsed: self.grid.elapsed(),
            field,
        };
        self.index += 1;

        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::point2;

    fn params() -> PlateParams {
        PlateParams {
            width: 1.0,
            height: 1.0,
            ..PlateParams::default()
        }
    }

    fn circle() -> HotCircle {
        HotCircle::new(point2(0.5, 0.5), 0.25).unwrap()
    }

    #[test]
    fn test_first_frame_is_one_step() {
        let frames = Frames::new(&params(), circle()).unwrap();
        let mut grid = frames.grid().clone();

        let frame = frames.clone().next().unwrap();

        assert_eq!(frame.index, 0);
        assert_relative_eq!(frame.elapsed, grid.dt());
        assert_eq!(&frame.field, grid.step());
    }

    #[test]
    fn test_indices_and_time_advance() {
        let frames = Frames::new(&params(), circle()).unwrap();
        let dt = frames.grid().dt();

        for (n, frame) in frames.take(5).enumerate() {
            assert_eq!(frame.index, n);
            assert_relative_eq!(frame.elapsed, (n + 1) as f64 * dt);
        }
    }

    #[test]
    fn test_restart_replays_sequence() {
        let mut frames = Frames::new(&params(), circle()).unwrap();
        let first: Vec<Frame> = frames.by_ref().take(4).collect();

        frames.restart();
        assert_eq!(frames.grid().steps(), 0);

        let second: Vec<Frame> = frames.by_ref().take(4).collect();
        assert_eq!(first, second);
    }
}
