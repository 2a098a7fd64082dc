#![allow(non_snake_case)]
//! The dense-tableau simplex solver.
//!
//! [`Simplex`] drives the pivoting engine of [`Tableau`] from the starting
//! basis of a [`Problem`] to a terminal status: it lays out the starting
//! tableau, calls [`Tableau::step`] until the tableau is optimal or the
//! problem turns out to be unbounded, and reads the solution off the final
//! tableau. The number of pivots is bounded because the engine itself gives
//! no anti-cycling guarantee.

use ndarray::{Array1, ArrayView2};

use crate::error::LinearProgramError;
use crate::float::Float;
use crate::linear_program::Problem;
use crate::solvers::{OptimizeResult, Solver};
use crate::tableau::{Status, Tableau};

/// Builder struct to customize the [`Simplex`] solver.
///
/// After constructing the default builder with [`Simplex::custom`], use the
/// other methods to update specific settings, and finally call
/// [`build`](SimplexBuilder::build) to validate the customized settings and
/// create the solver.
pub struct SimplexBuilder<F> {
    tol: F,
    disp: bool,
    max_iter: usize,
}

impl<F: Float> SimplexBuilder<F> {
    pub(crate) fn new() -> SimplexBuilder<F> {
        SimplexBuilder {
            tol: F::zero(),
            disp: false,
            max_iter: 1000,
        }
    }

    /// Tolerance for the sign comparisons in the optimality test, the
    /// entering-column scan and the ratio test. The default of zero keeps
    /// the comparisons exact; a small positive value such as `1e-9` guards
    /// against roundoff drift over many pivots.
    pub fn tol(mut self, tol: F) -> Self {
        self.tol = tol;
        self
    }

    /// Set to true to print the tableau to stdout before iterating and after
    /// every pivot.
    pub fn disp(mut self, disp: bool) -> Self {
        self.disp = disp;
        self
    }

    /// Maximum number of pivots before we give up on trying to solve the
    /// problem. The engine makes no anti-cycling guarantee, so this bound is
    /// what keeps a cycling tableau from iterating forever.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Validate the provided settings and construct the solver.
    /// Returns an `InvalidParameter` error if one of the input constraints is violated.
    pub fn build(self) -> Result<Simplex<F>, LinearProgramError<F>> {
        if self.tol < F::zero() || !self.tol.is_finite() {
            return Err(LinearProgramError::InvalidParameter(
                "The tolerance must be a finite non-negative value.",
            ));
        }
        if self.max_iter == 0 {
            return Err(LinearProgramError::InvalidParameter(
                "At least one pivot must be allowed.",
            ));
        }
        Ok(Simplex {
            tol: self.tol,
            disp: self.disp,
            max_iter: self.max_iter,
        })
    }
}

/// Simplex solver that can be used to solve linear programs in standard
/// maximization form.
///
/// To get started quickly, use the [`default`](Simplex::default) method to
/// initialize the solver with default parameters. See
/// [`custom`](Simplex::custom) for customization options through the builder
/// pattern.
#[derive(PartialEq, Debug)]
pub struct Simplex<F> {
    tol: F,
    disp: bool,
    max_iter: usize,
}

impl<F: Float> Default for Simplex<F> {
    /// The simplex solver with default configuration.
    fn default() -> Self {
        SimplexBuilder::new().build().unwrap()
    }
}

impl<F: Float> Simplex<F> {
    /// Construct a new solver, to be customized through the builder pattern.
    ///
    /// ```rust
    /// use approx::assert_abs_diff_eq;
    /// use ndarray::array;
    /// use simplex::prelude::*;
    ///
    /// let A = array![[1.0, 0.0], [0.0, 2.0], [3.0, 2.0]];
    /// let b = array![4.0, 12.0, 18.0];
    /// let c = array![3.0, 5.0];
    ///
    /// let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();
    /// let solver = Simplex::custom().max_iter(100).build().unwrap();
    /// let res = solver.solve(&problem).unwrap();
    ///
    /// assert_abs_diff_eq!(*res.fun(), 36.0, epsilon = 1e-9);
    /// ```
    pub fn custom() -> SimplexBuilder<F> {
        SimplexBuilder::new()
    }

    /// Read the decision variables off a tableau: a decision variable is
    /// basic iff its reduced cost vanished and its column is a unit column
    /// over the constraint rows, and then its value is the right-hand side
    /// of the row holding the one. Every other decision variable is zero.
    /// Each row backs at most one basic variable, so rows are claimed at
    /// most once, leftmost column first.
    fn read_solution(&self, problem: &Problem<F>, tableau: &Tableau<F>) -> Array1<F> {
        // eliminated columns carry roundoff dust even when the sign tests
        // are exact, so the read-off never compares exactly
        let eps = self.tol.max(F::cast(1e-9));
        let table = tableau.table();
        let (rows, cols) = table.dim();
        let mut x = Array1::zeros(problem.num_variables());
        let mut claimed = vec![false; problem.num_constraints()];
        for j in 0..problem.num_variables() {
            if table[[rows - 1, j]].abs() > eps {
                continue;
            }
            if let Some(row) = unit_row(&table, j, eps) {
                if !claimed[row] {
                    claimed[row] = true;
                    x[j] = table[[row, cols - 1]];
                }
            }
        }
        x
    }
}

/// The constraint row on which `column` carries a one, provided every other
/// entry of the column vanishes.
fn unit_row<F: Float>(table: &ArrayView2<F>, column: usize, eps: F) -> Option<usize> {
    let mut unit = None;
    for row in 0..table.nrows() - 1 {
        let entry = table[[row, column]];
        if (entry - F::one()).abs() <= eps {
            if unit.is_some() {
                return None;
            }
            unit = Some(row);
        } else if entry.abs() > eps {
            return None;
        }
    }
    unit
}

impl<F: Float> Solver<F> for Simplex<F> {
    fn solve(&self, problem: &Problem<F>) -> Result<OptimizeResult<F>, LinearProgramError<F>> {
        let mut tableau = problem.initial_tableau().tol(self.tol);
        if self.disp {
            println!("{tableau}");
        }
        for iteration in 0..self.max_iter {
            match tableau.step() {
                Status::Optimal => {
                    let x = self.read_solution(problem, &tableau);
                    return Ok(OptimizeResult::new(x, tableau.objective(), iteration));
                }
                Status::Unbounded => return Err(LinearProgramError::Unbounded),
                Status::NotOptimal => {
                    if self.disp {
                        println!("{tableau}");
                    }
                }
            }
        }
        // the budget may run out on the very pivot that reached the optimum
        if tableau.is_optimal() {
            let x = self.read_solution(problem, &tableau);
            return Ok(OptimizeResult::new(x, tableau.objective(), self.max_iter));
        }
        Err(LinearProgramError::IterationLimitExceeded(
            self.read_solution(problem, &tableau),
        ))
    }
}
