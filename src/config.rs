//! Basis configuration.
//!
//! [`BasisConfig`] holds the four parameters that fully determine a
//! raised-cosine basis.  All fields have defaults, so a basis can be described
//! by overriding only what differs.

use crate::basis::RaisedCosineBasis;
use crate::error::{BasisError, Result};
use crate::grid::check_step;
use crate::stretch::check_axis;

/// Parameters of a raised-cosine basis on a log-stretched time axis.
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use cosbasis::BasisConfig;
///
/// let cfg = BasisConfig {
///     nh: 8,            // eight lobes instead of five
///     dt: 0.5,          // half-unit bins
///     ..BasisConfig::default()
/// };
/// let basis = cfg.build().unwrap();
/// assert_eq!(basis.nh(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BasisConfig {
    /// Number of basis functions.
    ///
    /// Must be at least 2: with a single lobe the center spacing is undefined.
    ///
    /// Default: `5`.
    pub nh: usize,

    /// Real-time centers of the first and last lobe, `[e0, e1]` with
    /// `e0 < e1`.
    ///
    /// Both `e0 + b` and `e1 + b` must be positive.
    ///
    /// Default: `[1.0, 100.0]`.
    pub endpoints: [f64; 2],

    /// Offset of the stretch `y = log(t + b)`.
    ///
    /// Small values make the axis strongly logarithmic near `t = 0` (narrow
    /// early lobes); large values make it nearly linear over the endpoints.
    ///
    /// Default: `5.0`.
    pub b: f64,

    /// Grid step in real time units.
    ///
    /// Default: `1.0`.
    pub dt: f64,
}

impl Default for BasisConfig {
    /// Five lobes centered from 1 to 100 time units, `b = 5`, unit bins.
    fn default() -> Self {
        Self {
            nh: 5,
            endpoints: [1.0, 100.0],
            b: 5.0,
            dt: 1.0,
        }
    }
}

impl BasisConfig {
    /// Build a config from loosely typed parameters.
    ///
    /// `endpoints` must hold exactly two values; everything is validated.
    pub fn from_parts(nh: usize, endpoints: &[f64], b: f64, dt: f64) -> Result<Self> {
        let endpoints: [f64; 2] = endpoints.try_into().map_err(|_| {
            BasisError::invalid(
                "endpoints",
                format!("expected exactly 2 values, got {}", endpoints.len()),
            )
        })?;
        let cfg = Self { nh, endpoints, b, dt };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every parameter; returns the first [`BasisError::InvalidArgument`].
    pub fn validate(&self) -> Result<()> {
        check_axis(self.nh, self.endpoints, self.b)?;
        check_step(self.dt)
    }

    /// Build the basis described by this config.
    pub fn build(&self) -> Result<RaisedCosineBasis> {
        RaisedCosineBasis::from_config(self)
    }
}
