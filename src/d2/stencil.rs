//! Forward-time, centred-space update for `u_t = D (u_xx + u_yy)`.

use ndarray::Array2;

/// Constants of the five-point update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub dx2: f64,
    pub dy2: f64,
    /// `D * dt`
    pub d_dt: f64,
    /// Fixed temperature of the outermost ring.
    pub boundary: f64,
}

impl Coefficients {
    pub fn new(dx: f64, dy: f64, diffusivity: f64, dt: f64, boundary: f64) -> Self {
        Self {
            dx2: dx * dx,
            dy2: dy * dy,
            d_dt: diffusivity * dt,
            boundary,
        }
    }
}

/// Advance `prev` by one time step, writing the result into `out`.
///
/// Interior points receive
/// `prev + D dt ((prev[i+1,j] - 2 prev + prev[i-1,j]) / dx² + (prev[i,j+1] - 2 prev + prev[i,j-1]) / dy²)`.
/// The outermost ring is set to `coeff.boundary`, whatever `prev` holds there.
/// Every read comes from `prev`, so `out` never feeds back into the same pass.
pub fn diffuse_explicit(out: &mut Array2<f64>, prev: &Array2<f64>, coeff: Coefficients) {
    assert_eq!(out.dim(), prev.dim());

    let (w, h) = prev.dim();

    out.indexed_iter_mut().for_each(|((i, j), e)| {
        if i == 0 || j == 0 || i + 1 == w || j + 1 == h {
            *e = coeff.boundary;
            return;
        }

        let u = prev[[i, j]];

        let uxx = (prev[[i + 1, j]] - 2.0 * u + prev[[i - 1, j]]) / coeff.dx2;
        let uyy = (prev[[i, j + 1]] - 2.0 * u + prev[[i, j - 1]]) / coeff.dy2;

        *e = u + coeff.d_dt * (uxx + uyy);
    })
}
