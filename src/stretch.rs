//! Log-stretched time axis.
//!
//! Real time `t` maps to the stretched coordinate `y = log(t + b)`.  Lobe
//! centers are uniform in `y`, so in real time they spread out with lag:
//!
//! ```text
//!   y :  |----|----|----|----|        uniform spacing dctr
//!   t :  |-|--|----|--------|         widening intervals
//! ```
//!
//! The logarithm carries a tiny additive guard ([`LOG_GUARD`]) so that an
//! argument of exactly zero maps to a large negative number instead of `-inf`.
use ndarray::Array1;
use tracing::trace;

use crate::error::{BasisError, Result};
use crate::grid::MAX_ELEMENTS;

/// Additive guard inside the stretch logarithm.
///
/// Only changes the result when the argument is exactly `0.0`; for anything
/// bounded away from zero it is far below one ulp.
pub const LOG_GUARD: f64 = 1e-20;

/// Forward stretch: `log(x + LOG_GUARD)`.
#[inline]
pub fn nl(x: f64) -> f64 {
    (x + LOG_GUARD).ln()
}

/// Inverse stretch: `exp(y) - LOG_GUARD`.
#[inline]
pub fn invnl(y: f64) -> f64 {
    y.exp() - LOG_GUARD
}

/// Stretched coordinate system of one basis: offset, lobe centers, spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct StretchedAxis {
    /// Stretch offset `b` (real time units).
    pub b: f64,
    /// Lobe centers in stretched coordinates, increasing; `centers[0] =
    /// nl(e0 + b)`, `centers[nh-1] = nl(e1 + b)`.
    pub centers: Array1<f64>,
    /// Distance between adjacent centers (`dctr`).
    pub spacing: f64,
}

impl StretchedAxis {
    /// Place `nh` centers evenly in stretched coordinates between the two
    /// endpoints (given in real time).
    pub fn new(nh: usize, endpoints: [f64; 2], b: f64) -> Result<Self> {
        check_axis(nh, endpoints, b)?;

        let y0 = nl(endpoints[0] + b);
        let y1 = nl(endpoints[1] + b);
        let spacing = (y1 - y0) / (nh - 1) as f64;
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(BasisError::domain(
                "dctr",
                format!("center spacing {spacing} for stretched endpoints ({y0}, {y1})"),
            ));
        }

        // Same as linspace: the last center is pinned to y1 exactly.
        let mut centers = Array1::from_shape_fn(nh, |j| y0 + j as f64 * spacing);
        centers[nh - 1] = y1;

        trace!(nh, y0, y1, spacing, "stretched axis");
        Ok(Self { b, centers, spacing })
    }

    /// Number of lobes (`nh`).
    pub fn n_basis(&self) -> usize {
        self.centers.len()
    }

    /// Real time → stretched coordinate.
    #[inline]
    pub fn to_stretched(&self, t: f64) -> f64 {
        nl(t + self.b)
    }

    /// Stretched coordinate → real time.
    #[inline]
    pub fn to_time(&self, y: f64) -> f64 {
        invnl(y) - self.b
    }

    /// Last real time the grid has to reach: two spacings past the last
    /// center, where the final lobe decays to zero.
    pub fn max_time(&self) -> Result<f64> {
        let last = self.centers[self.n_basis() - 1];
        let maxt = self.to_time(last + 2.0 * self.spacing);
        if !maxt.is_finite() {
            return Err(BasisError::domain("maxt", format!("{maxt} is not finite")));
        }
        Ok(maxt)
    }

    /// Real-time interval `(lo, hi)` outside which lobe `j` is zero.
    ///
    /// `lo` may be negative, i.e. before the start of the grid.
    ///
    /// # Panics
    /// If `j >= n_basis()`.
    pub fn support(&self, j: usize) -> (f64, f64) {
        let c = self.centers[j];
        let half = 2.0 * self.spacing;
        (self.to_time(c - half), self.to_time(c + half))
    }
}

/// Validate the parameters that define the stretched axis.
pub(crate) fn check_axis(nh: usize, endpoints: [f64; 2], b: f64) -> Result<()> {
    if nh < 2 {
        return Err(BasisError::invalid(
            "nh",
            format!("need at least 2 basis functions, got {nh}"),
        ));
    }
    if nh > MAX_ELEMENTS {
        return Err(BasisError::invalid(
            "nh",
            format!("{nh} basis functions exceed the {MAX_ELEMENTS}-element allocation limit"),
        ));
    }
    if !b.is_finite() || b <= 0.0 {
        return Err(BasisError::invalid("b", format!("must be finite and > 0, got {b}")));
    }
    let [e0, e1] = endpoints;
    if !e0.is_finite() || !e1.is_finite() {
        return Err(BasisError::invalid(
            "endpoints",
            format!("must be finite, got ({e0}, {e1})"),
        ));
    }
    if e0 >= e1 {
        return Err(BasisError::invalid(
            "endpoints",
            format!("must be strictly increasing, got ({e0}, {e1})"),
        ));
    }
    for e in endpoints {
        if e + b <= 0.0 {
            return Err(BasisError::invalid(
                "endpoints",
                format!("endpoint + b must be > 0, got {e} + {b} = {}", e + b),
            ));
        }
    }
    Ok(())
}
