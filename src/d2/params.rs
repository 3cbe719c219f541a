use std::error::Error;
use std::fmt;

/// Errors from constructing [`DiffusionParams`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A physical parameter was zero, negative, or non-finite.
    NonPositive {
        /// Which parameter (`"alpha"`, `"dx"` or `"dt"`).
        name: &'static str,
        value: f64,
    },
    /// The diffusion number `alpha * dt / dx^2` exceeds the stability
    /// bound of 1/4 for the explicit five-point stencil.
    Unstable { gamma: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { name, value } => {
                write!(f, "{} must be a positive finite number, got {}", name, value)
            }
            Self::Unstable { gamma } => write!(
                f,
                "diffusion number gamma = {} exceeds the stability bound 0.25",
                gamma
            ),
        }
    }
}

impl Error for ConfigError {}

/// Largest stable time step for the explicit five-point stencil,
/// `dx^2 / (4 * alpha)`.
pub fn max_stable_dt(alpha: f64, dx: f64) -> f64 {
    dx * dx / (4.0 * alpha)
}

/// Validated parameters for the explicit heat diffusion scheme.
///
/// The stencil only ever uses the derived diffusion number
/// `gamma = alpha * dt / dx^2`; it is computed here and never set directly.
/// All validation, including the `gamma <= 0.25` stability bound, happens at
/// construction. [`step`](crate::d2::step) trusts it and does not re-check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffusionParams {
    alpha: f64,
    dx: f64,
    dt: f64,
    gamma: f64,
}

impl DiffusionParams {
    pub fn new(alpha: f64, dx: f64, dt: f64) -> Result<Self, ConfigError> {
        for &(name, value) in &[("alpha", alpha), ("dx", dx), ("dt", dt)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let gamma = alpha * dt / (dx * dx);
        if gamma > 0.25 {
            return Err(ConfigError::Unstable { gamma });
        }

        Ok(DiffusionParams {
            alpha,
            dx,
            dt,
            gamma,
        })
    }

    /// Parameters with the largest stable time step for the given `alpha`
    /// and `dx`, so `gamma` comes out at exactly 0.25.
    pub fn with_max_dt(alpha: f64, dx: f64) -> Result<Self, ConfigError> {
        Self::new(alpha, dx, max_stable_dt(alpha, dx))
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// The diffusion number `alpha * dt / dx^2`, in `(0, 0.25]`.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}
