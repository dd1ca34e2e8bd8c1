use cgmath::{point2, MetricSpace, Point2};
use ndarray::indices;
use tracing::debug;

use super::grid::{positive, Grid};
use crate::error::Result;

/// Disc of `t_hot` installed into a cool plate before the run starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotCircle {
    center: Point2<f64>,
    radius: f64,
}

impl HotCircle {
    /// `center` is in physical plate coordinates. Fails unless `radius` is
    /// positive and finite.
    pub fn new(center: Point2<f64>, radius: f64) -> Result<Self> {
        positive("radius", radius)?;
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point2<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether `p` lies strictly inside the circle.
    pub fn contains(&self, p: Point2<f64>) -> bool {
        p.distance2(self.center) < self.radius * self.radius
    }
}

impl Default for HotCircle {
    fn default() -> Self {
        Self {
            center: point2(5.0, 5.0),
            radius: 2.0,
        }
    }
}

/// Set every grid point strictly inside `circle` to the plate's `t_hot`.
///
/// Points outside the circle keep their value. Parts of the circle that fall
/// off the plate are ignored.
pub fn apply_hot_circle(grid: &mut Grid, circle: &HotCircle) {
    let inside: Vec<(usize, usize)> = indices(grid.field().dim())
        .into_iter()
        .filter(|&(i, j)| circle.contains(grid.position(i, j)))
        .collect();

    let t_hot = grid.t_hot();
    let field = grid.field_mut();
    for &ij in &inside {
        field[ij] = t_hot;
    }

    debug!(
        cx = circle.center.x,
        cy = circle.center.y,
        radius = circle.radius,
        count = inside.len(),
        "installed hot circle"
    );
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::d2::PlateParams;
    use crate::error::HeatError;

    fn unit_plate() -> Grid {
        Grid::new(&PlateParams {
            width: 5.0,
            height: 5.0,
            dx: 1.0,
            dy: 1.0,
            diffusivity: 1.0,
            t_cool: 300.0,
            t_hot: 700.0,
        })
        .unwrap()
    }

    #[test]
    fn test_strict_inequality() {
        let mut grid = unit_plate();
        let circle = HotCircle::new(point2(2.0, 2.0), 1.0).unwrap();

        apply_hot_circle(&mut grid, &circle);

        let hot: Vec<_> = grid
            .field()
            .indexed_iter()
            .filter(|&(_, &t)| t == 700.0)
            .map(|(ij, _)| ij)
            .collect();
        assert_eq!(hot, vec![(2, 2)]);

        for &(i, j) in &[(1, 2), (3, 2), (2, 1), (2, 3)] {
            assert_eq!(grid.field()[[i, j]], 300.0);
        }
    }

    #[test]
    fn test_sets_points_within_radius() {
        let mut grid = unit_plate();
        let circle = HotCircle::new(point2(2.0, 2.0), 1.5).unwrap();

        apply_hot_circle(&mut grid, &circle);

        for ((i, j), &t) in grid.field().indexed_iter() {
            let d2 = (i as f64 - 2.0).powi(2) + (j as f64 - 2.0).powi(2);
            if d2 < 2.25 {
                assert_eq!(t, 700.0, "({}, {})", i, j);
            } else {
                assert_eq!(t, 300.0, "({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_uses_physical_positions() {
        let mut grid = Grid::new(&PlateParams {
            width: 3.0,
            height: 2.0,
            dx: 0.5,
            dy: 0.25,
            diffusivity: 1.0,
            t_cool: 300.0,
            t_hot: 700.0,
        })
        .unwrap();
        assert_eq!(grid.field().dim(), (6, 8));
        let circle = HotCircle::new(point2(1.0, 1.0), 0.6).unwrap();

        apply_hot_circle(&mut grid, &circle);

        for ((i, j), &t) in grid.field().indexed_iter() {
            let expected = if circle.contains(grid.position(i, j)) {
                700.0
            } else {
                300.0
            };
            assert_eq!(t, expected, "({}, {})", i, j);
        }
        // (2, 4) sits on the centre, (2, 6) is 0.5 above it, (3, 4) 0.5 right.
        assert_eq!(grid.field()[[2, 4]], 700.0);
        assert_eq!(grid.field()[[2, 6]], 700.0);
        assert_eq!(grid.field()[[3, 4]], 700.0);
        assert_eq!(grid.field()[[4, 4]], 300.0);
        assert_eq!(grid.field()[[2, 7]], 300.0);
    }

    #[test]
    fn test_idempotent() {
        let mut once = unit_plate();
        let circle = HotCircle::new(point2(1.0, 3.0), 1.8).unwrap();
        apply_hot_circle(&mut once, &circle);

        let mut twice = unit_plate();
        apply_hot_circle(&mut twice, &circle);
        apply_hot_circle(&mut twice, &circle);

        assert_eq!(once.field(), twice.field());
    }

    #[test]
    fn test_partly_off_plate() {
        let mut grid = unit_plate();
        let circle = HotCircle::new(point2(-0.5, 0.0), 1.2).unwrap();

        apply_hot_circle(&mut grid, &circle);

        assert_eq!(grid.field()[[0, 0]], 700.0);
        assert_eq!(grid.field()[[0, 1]], 700.0);
        assert_eq!(grid.field()[[1, 0]], 300.0);
        assert_eq!(grid.field().iter().filter(|&&t| t == 700.0).count(), 2);
    }

    #[test]
    fn test_fully_off_plate() {
        let mut grid = unit_plate();
        let circle = HotCircle::new(point2(50.0, -20.0), 3.0).unwrap();

        apply_hot_circle(&mut grid, &circle);

        assert!(grid.field().iter().all(|&t| t == 300.0));
    }

    #[test]
    fn test_keeps_existing_hot_points() {
        let mut grid = unit_plate();
        apply_hot_circle(&mut grid, &HotCircle::new(point2(0.0, 0.0), 0.5).unwrap());
        apply_hot_circle(&mut grid, &HotCircle::new(point2(4.0, 4.0), 0.5).unwrap());

        assert_eq!(grid.field()[[0, 0]], 700.0);
        assert_eq!(grid.field()[[4, 4]], 700.0);
    }

    #[test]
    fn test_invalid_radius() {
        assert!(matches!(
            HotCircle::new(point2(1.0, 1.0), 0.0),
            Err(HeatError::InvalidParameter { name: "radius", .. })
        ));
        assert!(HotCircle::new(point2(1.0, 1.0), -2.0).is_err());
        assert!(HotCircle::new(point2(1.0, 1.0), f64::NAN).is_err());
    }
}
