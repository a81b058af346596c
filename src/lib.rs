//! # cosbasis — raised-cosine temporal basis in pure Rust
//!
//! `cosbasis` builds a basis of raised-cosine bumps on a logarithmically
//! stretched time axis.  Lobes are evenly spaced in `log(t + b)`, so they are
//! narrow at short lags and widen at long lags.  The columns are meant to be
//! used as a low-dimensional, smooth design matrix for temporal filters
//! (stimulus kernels, post-spike filters, GLM history terms).
//!
//! ## Construction overview
//!
//! ```text
//! (nh, [e0, e1], b, dt)
//!   │
//!   ├─ stretch        y = log(t + b + 1e-20)
//!   ├─ centers        nh points, uniform in y from y(e0) to y(e1), step dctr
//!   ├─ maxt           last center + 2·dctr, mapped back to real time
//!   ├─ grid           0, dt, 2·dt, … up to the first value ≥ maxt   → [nt]
//!   └─ lobes          0.5·(cos(clamp((y − c)·π / 2dctr, −π, π)) + 1) → [nt, nh]
//! ```
//!
//! ## Quick start
//!
//! ```
//! use cosbasis::build;
//!
//! let (ttgrid, basis) = build(5, &[1.0, 100.0], 5.0, 1.0).unwrap();
//! assert_eq!(basis.dim(), (ttgrid.len(), 5));
//! assert_eq!(ttgrid[0], 0.0);
//! assert!(basis.iter().all(|&v| (0.0..=1.0).contains(&v)));
//! ```
//!
//! The richer [`RaisedCosineBasis`] also exposes the stretched centers, the
//! spacing and `maxt`:
//!
//! ```
//! use cosbasis::BasisConfig;
//!
//! let rcb = BasisConfig { nh: 8, endpoints: [0.0, 50.0], b: 2.0, dt: 0.5 }
//!     .build()
//!     .unwrap();
//! assert_eq!(rcb.centers().len(), 8);
//! assert!(rcb.maxt > 50.0);
//! ```
//!
//! Invalid parameters are rejected up front:
//!
//! ```
//! use cosbasis::{build, BasisError};
//!
//! let err = build(1, &[1.0, 100.0], 5.0, 1.0).unwrap_err();
//! assert!(matches!(err, BasisError::InvalidArgument { name: "nh", .. }));
//! ```

pub mod basis;
pub mod config;
pub mod error;
pub mod grid;
pub mod stretch;

use ndarray::{Array1, Array2};

// ── Crate-root re-exports ─────────────────────────────────────────────────

// config
pub use config::BasisConfig;

// error
pub use error::{BasisError, Result};

// basis
pub use basis::{build_raised_cosine_basis, peak_columns, raised_cosine, RaisedCosineBasis};

// grid
pub use grid::{grid_len, time_grid};

// stretch
pub use stretch::{invnl, nl, StretchedAxis, LOG_GUARD};

/// Build a raised-cosine basis with log-stretched time axis.
///
/// # Arguments
///
/// * `nh`        – Number of basis functions, at least 2.
/// * `endpoints` – Real-time centers of the first and last lobe; exactly two
///   strictly increasing values with `endpoints[i] + b > 0`.
/// * `b`         – Stretch offset, `> 0`.  The axis is `log(t + b)`.
/// * `dt`        – Grid step, `> 0`.
///
/// # Returns
///
/// * `ttgrid` — shape `[nt]`, `0, dt, 2·dt, …`, last entry `>= maxt`.
/// * `basis`  — shape `[nt, nh]`, values in `[0, 1]`.
///
/// # Errors
///
/// [`BasisError::InvalidArgument`] for out-of-domain parameters,
/// [`BasisError::NumericDomain`] when an intermediate value overflows.
pub fn build(nh: usize, endpoints: &[f64], b: f64, dt: f64) -> Result<(Array1<f64>, Array2<f64>)> {
    Ok(build_raised_cosine_basis(nh, endpoints, b, dt)?.into_parts())
}
