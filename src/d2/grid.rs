use cgmath::{point2, Point2};
use ndarray::{Array, Array2};
use tracing::{debug, trace};

use super::stencil::{diffuse_explicit, Coefficients};
use crate::error::{HeatError, Result};

/// Physical description of the plate and its two temperature levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateParams {
    pub width: f64,
    pub height: f64,
    pub dx: f64,
    pub dy: f64,
    pub diffusivity: f64,
    pub t_cool: f64,
    pub t_hot: f64,
}

impl Default for PlateParams {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            dx: 0.1,
            dy: 0.1,
            diffusivity: 10.0,
            t_cool: 300.0,
            t_hot: 700.0,
        }
    }
}

impl PlateParams {
    fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("dx", self.dx)?;
        positive("dy", self.dy)?;
        positive("diffusivity", self.diffusivity)?;
        finite("t_cool", self.t_cool)?;
        finite("t_hot", self.t_hot)?;
        Ok(())
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(HeatError::invalid(name, value))
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HeatError::invalid(name, value))
    }
}

/// Truncated number of points along one axis; at least one, at most
/// `isize::MAX`.
fn point_count(name: &'static str, extent: f64, spacing: f64) -> Result<usize> {
    let n = (extent / spacing).trunc();
    if n >= 1.0 && n < isize::MAX as f64 {
        Ok(n as usize)
    } else {
        Err(HeatError::invalid(name, extent))
    }
}

/// Largest time step for which the explicit scheme stays bounded.
pub fn stable_dt(dx: f64, dy: f64, diffusivity: f64) -> f64 {
    let dx2 = dx * dx;
    let dy2 = dy * dy;
    dx2 * dy2 / (2.0 * diffusivity * (dx2 + dy2))
}

/// Temperature field of the plate together with its discretisation.
///
/// Two buffers are kept: `current` holds step `n`, `next` receives step
/// `n + 1` and the two are swapped afterwards. The time step is always
/// derived from the spacing and diffusivity through [`stable_dt`].
/// Every step writes `t_cool` to the outermost ring, so a hot circle that
/// reaches the edge only lasts there until the first step.
#[derive(Debug, Clone)]
pub struct Grid {
    params: PlateParams,
    nx: usize,
    ny: usize,
    dt: f64,
    current: Array2<f64>,
    next: Array2<f64>,
    steps: usize,
}

impl Grid {
    /// Allocate a plate filled with `t_cool`.
    ///
    /// The point counts are `width / dx` and `height / dy`, truncated.
    pub fn new(params: &PlateParams) -> Result<Self> {
        params.validate()?;

        let nx = point_count("width", params.width, params.dx)?;
        let ny = point_count("height", params.height, params.dy)?;
        nx.checked_mul(ny)
            .and_then(|n| n.checked_mul(std::mem::size_of::<f64>()))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or_else(|| HeatError::invalid("width", params.width))?;

        let dt = stable_dt(params.dx, params.dy, params.diffusivity);
        let current = Array::from_elem((nx, ny), params.t_cool);
        let next = current.clone();

        debug!(nx, ny, dt, "created plate grid");

        Ok(Self {
            params: *params,
            nx,
            ny,
            dt,
            current,
            next,
            steps: 0,
        })
    }

    pub fn params(&self) -> &PlateParams {
        &self.params
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn dx(&self) -> f64 {
        self.params.dx
    }

    pub fn dy(&self) -> f64 {
        self.params.dy
    }

    pub fn diffusivity(&self) -> f64 {
        self.params.diffusivity
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn t_cool(&self) -> f64 {
        self.params.t_cool
    }

    pub fn t_hot(&self) -> f64 {
        self.params.t_hot
    }

    /// Number of steps taken since creation or the last [`Grid::reset`].
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Simulated time since creation or the last reset.
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.dt
    }

    /// Physical position of grid point `(i, j)`.
    pub fn position(&self, i: usize, j: usize) -> Point2<f64> {
        point2(i as f64 * self.params.dx, j as f64 * self.params.dy)
    }

    pub fn field(&self) -> &Array2<f64> {
        &self.current
    }

    pub(crate) fn field_mut(&mut self) -> &mut Array2<f64> {
        &mut self.current
    }

    /// Advance the field by one `dt` and return the new state.
    pub fn step(&mut self) -> &Array2<f64> {
        let coeff = Coefficients::new(
            self.params.dx,
            self.params.dy,
            self.params.diffusivity,
            self.dt,
            self.params.t_cool,
        );
        diffuse_explicit(&mut self.next, &self.current, coeff);
        std::mem::swap(&mut self.current, &mut self.next);
        self.steps += 1;

        trace!(step = self.steps, "advanced plate");

        &self.current
    }

    /// Re-fill both buffers with `t_cool` and forget the elapsed steps.
    pub fn reset(&mut self) {
        self.current.fill(self.params.t_cool);
        self.next.fill(self.params.t_cool);
        self.steps = 0;
    }
}
