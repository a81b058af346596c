//! Raised-cosine basis evaluation.
//!
//! Each lobe is one period of `(cos + 1) / 2` in stretched coordinates,
//! centered on its stretched center with half-width `2 · dctr`:
//!
//! ```text
//!   phi_j(t) = 0.5 · (cos(clamp((nl(t + b) − c_j) · π / (2 · dctr), −π, π)) + 1)
//! ```
//!
//! Outside `[c_j − 2·dctr, c_j + 2·dctr]` the argument saturates at `±π` and
//! the lobe is exactly zero.  Adjacent lobes overlap; interior rows sum to
//! roughly 2, the matrix is not normalised.
use std::f64::consts::PI;

use ndarray::{Array1, Array2, ArrayView1};
use tracing::debug;

use crate::config::BasisConfig;
use crate::error::{BasisError, Result};
use crate::grid::{grid_len, time_grid, MAX_ELEMENTS};
use crate::stretch::StretchedAxis;

/// Raised-cosine lobe at stretched position `x`, center `c`, spacing `dc`.
///
/// Returns a value in `[0, 1]`: `1` at `x == c`, `0` for `|x − c| >= 2·dc`.
#[inline]
pub fn raised_cosine(x: f64, c: f64, dc: f64) -> f64 {
    let arg = ((x - c) * PI / dc / 2.0).clamp(-PI, PI);
    0.5 * (arg.cos() + 1.0)
}

/// A sampled raised-cosine basis together with the axis it was built on.
#[derive(Debug, Clone, PartialEq)]
pub struct RaisedCosineBasis {
    /// Time lattice `[nt]`: `0, dt, 2·dt, …`, last entry `>= maxt`.
    pub ttgrid: Array1<f64>,
    /// Basis matrix `[nt, nh]`; column `j` is lobe `j` sampled on `ttgrid`.
    pub basis: Array2<f64>,
    /// Stretch offset, centers and spacing.
    pub axis: StretchedAxis,
    /// Real time two spacings past the last center.
    pub maxt: f64,
}

impl RaisedCosineBasis {
    /// Build the basis described by `cfg`.
    pub fn from_config(cfg: &BasisConfig) -> Result<Self> {
        cfg.validate()?;

        let axis = StretchedAxis::new(cfg.nh, cfg.endpoints, cfg.b)?;
        let maxt = axis.max_time()?;
        let nt = grid_len(maxt, cfg.dt)?;
        let nh = axis.n_basis();
        match nt.checked_mul(nh) {
            Some(n) if n <= MAX_ELEMENTS => {}
            _ => {
                return Err(BasisError::domain(
                    "basis",
                    format!("{nt} x {nh} matrix exceeds the {MAX_ELEMENTS}-element allocation limit"),
                ));
            }
        }
        let ttgrid = time_grid(maxt, cfg.dt)?;

        // Stretch each grid time once, then evaluate every (row, center) pair.
        let x = ttgrid.mapv(|t| axis.to_stretched(t));
        let basis = Array2::from_shape_fn((nt, nh), |(i, j)| {
            raised_cosine(x[i], axis.centers[j], axis.spacing)
        });

        debug!(nh, nt, maxt, dctr = axis.spacing, dt = cfg.dt, "built raised-cosine basis");
        Ok(Self { ttgrid, basis, axis, maxt })
    }

    /// Number of grid points (`nt`).
    pub fn nt(&self) -> usize {
        self.ttgrid.len()
    }

    /// Number of basis functions (`nh`).
    pub fn nh(&self) -> usize {
        self.basis.ncols()
    }

    /// Lobe centers in stretched coordinates.
    pub fn centers(&self) -> &Array1<f64> {
        &self.axis.centers
    }

    /// Center spacing in stretched coordinates (`dctr`).
    pub fn spacing(&self) -> f64 {
        self.axis.spacing
    }

    /// Column `j` of the basis matrix.
    ///
    /// # Panics
    /// If `j >= nh()`.
    pub fn lobe(&self, j: usize) -> ArrayView1<'_, f64> {
        self.basis.column(j)
    }

    /// Split into `(ttgrid, basis)`.
    pub fn into_parts(self) -> (Array1<f64>, Array2<f64>) {
        (self.ttgrid, self.basis)
    }
}

/// Build a basis from loosely typed parameters.
///
/// `endpoints` must contain exactly two values.  See [`BasisConfig`] for the
/// constraints on each parameter.
pub fn build_raised_cosine_basis(
    nh: usize,
    endpoints: &[f64],
    b: f64,
    dt: f64,
) -> Result<RaisedCosineBasis> {
    BasisConfig::from_parts(nh, endpoints, b, dt)?.build()
}

/// Column index of the maximum of each row, `None` for all-zero rows.
///
/// Rows outside every lobe's support (before the first lobe reaches the
/// grid, or at the far edge of the last one) have no peak.  Ties between
/// non-zero values resolve to the lower column.
pub fn peak_columns(basis: &Array2<f64>) -> Vec<Option<usize>> {
    basis
        .rows()
        .into_iter()
        .map(|row| {
            let mut best: Option<(usize, f64)> = None;
            for (j, &v) in row.iter().enumerate() {
                if v > best.map_or(0.0, |(_, m)| m) {
                    best = Some((j, v));
                }
            }
            best.map(|(j, _)| j)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lobe_shape() {
        let (c, dc) = (2.0, 0.5);
        assert_eq!(raised_cosine(c, c, dc), 1.0);
        approx::assert_abs_diff_eq!(raised_cosine(c + dc, c, dc), 0.5, epsilon = 1e-15);
        approx::assert_abs_diff_eq!(raised_cosine(c - dc, c, dc), 0.5, epsilon = 1e-15);
        approx::assert_abs_diff_eq!(raised_cosine(c + 2.0 * dc, c, dc), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn lobe_saturates_outside_support() {
        for x in [-10.0, 0.9, 3.1, 50.0] {
            assert_eq!(raised_cosine(x, 2.0, 0.5), 0.0, "x={x}");
        }
    }

    #[test]
    fn default_example_end_to_end() {
        let rcb = BasisConfig::default().build().unwrap();
        assert_eq!(rcb.nh(), 5);
        assert_eq!(rcb.basis.dim(), (rcb.nt(), 5));
        assert_eq!(rcb.ttgrid[0], 0.0);
        assert!(rcb.maxt > 100.0);
        assert!(rcb.ttgrid[rcb.nt() - 1] >= rcb.maxt);
        assert!(rcb.ttgrid[rcb.nt() - 2] < rcb.maxt);

        // The last row sits on the far edge of lobe 4, where every lobe is 0.
        let peaks = peak_columns(&rcb.basis);
        assert_eq!(peaks[0], Some(0));
        assert_eq!(peaks[peaks.len() - 1], None);
        assert_eq!(peaks[peaks.len() - 2], Some(4));
    }

    #[test]
    fn each_lobe_peaks_at_its_center() {
        // b = 1 and endpoints 1..15 put center j at t = 2^(j+1) - 1.
        let rcb = build_raised_cosine_basis(4, &[1.0, 15.0], 1.0, 1.0).unwrap();
        approx::assert_abs_diff_eq!(rcb.spacing(), 2.0_f64.ln(), epsilon = 1e-12);
        for (j, t) in [1usize, 3, 7, 15].into_iter().enumerate() {
            approx::assert_abs_diff_eq!(rcb.basis[[t, j]], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn two_lobes_mirror_about_midpoint() {
        let rcb = build_raised_cosine_basis(2, &[0.0, 10.0], 1.0, 0.5).unwrap();
        let c = rcb.centers();
        let mid = 0.5 * (c[0] + c[1]);
        for k in 0..=40 {
            let d = k as f64 * 0.1 * rcb.spacing();
            let left = raised_cosine(mid - d, c[0], rcb.spacing());
            let right = raised_cosine(mid + d, c[1], rcb.spacing());
            approx::assert_abs_diff_eq!(left, right, epsilon = 1e-12);
        }
    }

    #[test]
    fn lobe_accessor_matches_column() {
        let rcb = BasisConfig::default().build().unwrap();
        assert_eq!(rcb.lobe(2), rcb.basis.column(2));
    }

    #[test]
    fn into_parts_keeps_shapes() {
        let (t, b) = BasisConfig::default().build().unwrap().into_parts();
        assert_eq!(b.nrows(), t.len());
    }

    #[test]
    fn peak_columns_skip_empty_rows() {
        let m = Array2::from_shape_vec((3, 3), vec![
            0.2, 0.9, 0.1,
            0.0, 0.5, 0.5,
            0.0, 0.0, 0.0,
        ])
        .unwrap();
        assert_eq!(peak_columns(&m), vec![Some(1), Some(1), None]);
    }
}
