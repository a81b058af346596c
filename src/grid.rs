//! Time lattice on which the basis is sampled.
//!
//! `0, dt, 2·dt, …` up to and including the first value `>= maxt`, with at
//! least one sample, so a non-positive `maxt` yields `[0.0]`.
//!
//! The last index starts from `ceil(maxt / dt)` and is then nudged until
//! `n·dt >= maxt > (n − 1)·dt` holds for the products actually stored in
//! the grid; the division alone can be off by one in either direction.
use ndarray::Array1;

use crate::error::{BasisError, Result};

/// Largest number of `f64` elements a single allocation can hold.
pub(crate) const MAX_ELEMENTS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Number of grid points needed to reach `maxt` with step `dt`.
pub fn grid_len(maxt: f64, dt: f64) -> Result<usize> {
    check_step(dt)?;
    if !maxt.is_finite() {
        return Err(BasisError::domain("maxt", format!("{maxt} is not finite")));
    }
    if maxt <= 0.0 {
        return Ok(1);
    }

    let approx = (maxt / dt).ceil();
    if !approx.is_finite() || approx >= MAX_ELEMENTS as f64 {
        return Err(BasisError::domain(
            "nt",
            format!("grid to {maxt} with step {dt} needs about {approx} points, limit {MAX_ELEMENTS}"),
        ));
    }

    // Index of the last sample: smallest n with n·dt >= maxt.
    let mut n = approx as usize;
    while (n as f64) * dt < maxt {
        n += 1;
    }
    while n > 0 && ((n - 1) as f64) * dt >= maxt {
        n -= 1;
    }

    let nt = n + 1;
    if nt > MAX_ELEMENTS {
        return Err(BasisError::domain(
            "nt",
            format!("grid to {maxt} with step {dt} has {nt} points, limit {MAX_ELEMENTS}"),
        ));
    }
    Ok(nt)
}

/// Grid `[0, dt, …]` covering `maxt`; entry `i` is exactly `i as f64 * dt`.
pub fn time_grid(maxt: f64, dt: f64) -> Result<Array1<f64>> {
    let nt = grid_len(maxt, dt)?;
    Ok(Array1::from_shape_fn(nt, |i| i as f64 * dt))
}

pub(crate) fn check_step(dt: f64) -> Result<()> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(BasisError::invalid("dt", format!("must be finite and > 0, got {dt}")));
    }
    Ok(())
}
