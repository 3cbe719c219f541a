use ndarray::{Array, Array2};
use std::error::Error;
use std::fmt;

pub mod params;

pub use params::{max_stable_dt, ConfigError, DiffusionParams};

/// An N×N temperature grid. Border cells hold the fixed Dirichlet value 0.
pub type Field = Array2<f64>;

/// Errors from [`check_field`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    NotSquare { rows: usize, cols: usize },
    /// Fewer than 3 cells per side, so no interior cell exists.
    TooSmall { side: usize },
    /// NaN or infinity at the given cell.
    NonFinite { row: usize, col: usize },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { rows, cols } => {
                write!(f, "field must be square, got {}x{}", rows, cols)
            }
            Self::TooSmall { side } => {
                write!(f, "field side {} is below the minimum of 3", side)
            }
            Self::NonFinite { row, col } => {
                write!(f, "non-finite value at cell ({}, {})", row, col)
            }
        }
    }
}

impl Error for FieldError {}

/// Validate a field before the first step: square, at least 3×3 so an
/// interior exists, and free of NaN/infinity.
///
/// Drivers run this once on the initial field; [`step`] does not re-check.
pub fn check_field(u: &Field) -> Result<(), FieldError> {
    let (rows, cols) = u.dim();

    if rows != cols {
        return Err(FieldError::NotSquare { rows, cols });
    }

    if rows < 3 {
        return Err(FieldError::TooSmall { side: rows });
    }

    for ((row, col), &e) in u.indexed_iter() {
        if !e.is_finite() {
            return Err(FieldError::NonFinite { row, col });
        }
    }

    Ok(())
}

/// Advance `u` by one explicit forward-Euler step of the heat equation.
///
/// Every interior cell gets the five-point Laplacian update
///
/// ```text
/// gamma * (u[i+1,j] + u[i-1,j] + u[i,j+1] + u[i,j-1] - 4*u[i,j]) + u[i,j]
/// ```
///
/// while border cells are copied unchanged (fixed Dirichlet boundary). The
/// result is a freshly allocated grid, so every read on the right-hand side
/// comes from the pre-step snapshot; `u` is never written through.
///
/// Stability (`gamma <= 1/4`) is the caller's guarantee, established when
/// the [`DiffusionParams`] were constructed. A grid with a side shorter
/// than 3 has no interior and comes back unchanged.
pub fn step(u: &Field, params: &DiffusionParams) -> Field {
    let (h, w) = u.dim();
    let gamma = params.gamma();

    Array::from_shape_fn(u.dim(), |(i, j)| {
        if i == 0 || i + 1 == h || j == 0 || j + 1 == w {
            u[[i, j]]
        } else {
            gamma
                * (u[[i + 1, j]] + u[[i - 1, j]] + u[[i, j + 1]] + u[[i, j - 1]]
                    - 4.0 * u[[i, j]])
                + u[[i, j]]
        }
    })
}

/// Apply [`step`] `n` times.
pub fn steps(u: &Field, params: &DiffusionParams, n: usize) -> Field {
    let mut u = u.clone();

    for _ in 0..n {
        u = step(&u, params);
    }

    u
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn quarter() -> DiffusionParams {
        DiffusionParams::with_max_dt(2.0, 1.0).unwrap()
    }

    #[test]
    fn test_hot_cell_spreads_to_neighbours() {
        let mut u: Field = Array::zeros((5, 5));
        u[[2, 2]] = 100.0;

        let v = step(&u, &quarter());

        // gamma = 0.25: the centre empties, each direct neighbour gets 25
        assert_abs_diff_eq!(v[[2, 2]], 0.0);
        assert_abs_diff_eq!(v[[1, 2]], 25.0);
        assert_abs_diff_eq!(v[[3, 2]], 25.0);
        assert_abs_diff_eq!(v[[2, 1]], 25.0);
        assert_abs_diff_eq!(v[[2, 3]], 25.0);

        let touched = [(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)];
        for ((i, j), &e) in v.indexed_iter() {
            if !touched.contains(&(i, j)) {
                assert_abs_diff_eq!(e, 0.0);
            }
        }
    }

    #[test]
    fn test_flat_region_is_steady() {
        let u = array![
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 100.0, 100.0, 100.0, 0.0],
            [0.0, 100.0, 100.0, 100.0, 0.0],
            [0.0, 100.0, 100.0, 100.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0],
        ];

        let v = step(&u, &quarter());

        // all four neighbours of the centre equal the centre, so the
        // Laplacian vanishes there
        assert_abs_diff_eq!(v[[2, 2]], 100.0);
    }

    #[test]
    fn test_borders_fixed_over_many_steps() {
        const N: usize = 9;

        let mut u: Field = Array::from_shape_fn((N, N), |(i, j)| ((i * 31 + j * 17) % 13) as f64);
        for k in 0..N {
            u[[k, 0]] = 0.0;
            u[[k, N - 1]] = 0.0;
            u[[0, k]] = 0.0;
            u[[N - 1, k]] = 0.0;
        }

        let v = steps(&u, &quarter(), 20);

        for k in 0..N {
            assert_eq!(v[[k, 0]], 0.0);
            assert_eq!(v[[k, N - 1]], 0.0);
            assert_eq!(v[[0, k]], 0.0);
            assert_eq!(v[[N - 1, k]], 0.0);
        }
    }

    #[test]
    fn test_step_is_deterministic() {
        let u: Field = Array::from_shape_fn((7, 7), |(i, j)| ((i * 13 + j * 7) % 11) as f64);
        let params = quarter();

        assert_eq!(step(&u, &params), step(&u, &params));
    }

    #[test]
    fn test_grid_without_interior_is_unchanged() {
        let u = array![[1.0, 2.0], [3.0, 4.0]];

        assert_eq!(step(&u, &quarter()), u);
    }

    #[test]
    fn test_steps_composes() {
        let u: Field = Array::from_shape_fn((6, 6), |(i, j)| ((i + 2 * j) % 5) as f64);
        let params = quarter();

        assert_eq!(steps(&u, &params, 0), u);
        assert_eq!(steps(&u, &params, 2), step(&step(&u, &params), &params));
    }

    #[test]
    fn test_check_field() {
        assert_eq!(check_field(&Array::zeros((5, 5))), Ok(()));

        assert_eq!(
            check_field(&Array::zeros((3, 4))),
            Err(FieldError::NotSquare { rows: 3, cols: 4 })
        );

        assert_eq!(
            check_field(&Array::zeros((2, 2))),
            Err(FieldError::TooSmall { side: 2 })
        );

        let mut u: Field = Array::zeros((4, 4));
        u[[1, 2]] = f64::NAN;
        assert_eq!(
            check_field(&u),
            Err(FieldError::NonFinite { row: 1, col: 2 })
        );
    }
}
