#![allow(non_snake_case)]
//! Definition of a linear program in standard maximization form.
//!
//! To get started, see the documentation of [`Problem`] on how to build a
//! [`Problem`] through the builder pattern.
use crate::{error::LinearProgramError, float::Float, tableau::Tableau};
use ndarray::{s, Array1, Array2};

/// A linear program in standard maximization form:
///
/// ```text
/// max_x c ' x
/// st  A ' x <= b
///         x >= 0
/// ```
///
/// with `b >= 0`, so that after appending one slack variable per constraint
/// the slack columns encode a feasible starting basis. Problems that would
/// need a phase-1 search to find a starting basis are rejected at build time.
///
/// To construct a problem, use [`ProblemBuilder::new`] or
/// [`Problem::maximize`].
pub struct Problem<F> {
    A: Array2<F>,
    b: Array1<F>,
    c: Array1<F>,
}

impl<F: Float> Problem<F> {
    /// Build a problem using the builder pattern.
    ///
    /// Specify the cost vector `c` for which we will maximize `c'x`.
    /// Returns a [`ProblemBuilder`] that takes the inequality constraints.
    pub fn maximize(c: &Array1<F>) -> ProblemBuilder<F> {
        ProblemBuilder::new(c)
    }

    /// Return the constraint matrix
    pub fn A(&self) -> &Array2<F> {
        &self.A
    }

    /// Return the constraint vector
    pub fn b(&self) -> &Array1<F> {
        &self.b
    }

    /// Return the cost vector
    pub fn c(&self) -> &Array1<F> {
        &self.c
    }

    pub fn num_constraints(&self) -> usize {
        self.A.nrows()
    }

    /// Number of decision variables, slack variables excluded.
    pub fn num_variables(&self) -> usize {
        self.A.ncols()
    }

    /// Lay out the starting tableau `[A | I | b]`, with the slack identity
    /// block encoding the starting basis and the negated costs in the
    /// objective row. Under this encoding the last cell of the solution
    /// column converges to the maximum of `c'x`.
    pub fn initial_tableau(&self) -> Tableau<F> {
        let (m, n) = self.A.dim();
        let mut table = Array2::zeros((m + 1, n + m + 1));
        table.slice_mut(s![..m, ..n]).assign(&self.A);
        for i in 0..m {
            table[[i, n + i]] = F::one();
        }
        table.slice_mut(s![..m, n + m]).assign(&self.b);
        for (j, &cost) in self.c.iter().enumerate() {
            table[[m, j]] = -cost;
        }
        Tableau::from_matrix(table)
    }
}

/// Construct a [`Problem`] from a cost vector and inequality constraints.
pub struct ProblemBuilder<'a, F> {
    c: &'a Array1<F>,
    constraints: Option<(&'a Array2<F>, &'a Array1<F>)>,
}

impl<'a, F: Float> ProblemBuilder<'a, F> {
    /// Start building a problem. Takes the cost vector `c` for which the
    /// goal is to maximize `c'x`.
    pub fn new(c: &'a Array1<F>) -> ProblemBuilder<'a, F> {
        ProblemBuilder {
            c,
            constraints: None,
        }
    }

    /// Bound the problem, such that `A ' x <= b`.
    ///
    /// Every entry of `b` must be non-negative. To prevent numerical
    /// problems, it is advisable to remove redundant constraints and to
    /// scale all constraints to roughly the same order of magnitude.
    pub fn subject_to(mut self, A: &'a Array2<F>, b: &'a Array1<F>) -> Self {
        self.constraints = Some((A, b));
        self
    }

    /// Construct a linear program from the provided inputs, validating the
    /// input values.
    ///
    /// Returns an error if the dimensions do not align, if there are no
    /// constraints, or if the right-hand side has negative entries (the
    /// slack basis would not be a feasible starting point, and there is no
    /// phase-1 search to repair it).
    pub fn build(self) -> Result<Problem<F>, LinearProgramError<F>> {
        let Some((A, b)) = self.constraints else {
            return Err(LinearProgramError::Unconstrained);
        };
        if self.c.is_empty() {
            return Err(LinearProgramError::InvalidParameter(
                "the cost vector must not be empty",
            ));
        }
        let (nrows, ncols) = A.dim();
        if nrows == 0 {
            return Err(LinearProgramError::Unconstrained);
        }
        if ncols != self.c.len() || nrows != b.len() {
            return Err(LinearProgramError::IncompatibleInputDimensions);
        }
        if b.iter().any(|&bound| bound < F::zero()) {
            return Err(LinearProgramError::Infeasible);
        }
        Ok(Problem {
            A: A.to_owned(),
            b: b.to_owned(),
            c: self.c.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn build_requires_constraints() {
        let c = array![1.0, 2.0];
        assert!(matches!(
            Problem::maximize(&c).build(),
            Err(LinearProgramError::Unconstrained)
        ));
    }

    #[test]
    fn build_rejects_misaligned_dimensions() {
        let c = array![1.0, 2.0];
        let A = array![[1.0]];
        let b = array![1.0];
        assert!(matches!(
            Problem::maximize(&c).subject_to(&A, &b).build(),
            Err(LinearProgramError::IncompatibleInputDimensions)
        ));
    }

    #[test]
    fn build_rejects_negative_bounds() {
        let c = array![1.0];
        let A = array![[1.0], [2.0]];
        let b = array![3.0, -1.0];
        assert!(matches!(
            Problem::maximize(&c).subject_to(&A, &b).build(),
            Err(LinearProgramError::Infeasible)
        ));
    }

    #[test]
    fn build_rejects_an_empty_cost_vector() {
        let c = Array1::<f64>::zeros(0);
        let A = Array2::<f64>::zeros((1, 0));
        let b = array![1.0];
        assert!(matches!(
            Problem::maximize(&c).subject_to(&A, &b).build(),
            Err(LinearProgramError::InvalidParameter(_))
        ));
    }

    #[test]
    fn initial_tableau_lays_out_the_slack_identity() {
        let c = array![3.0, 5.0];
        let A = array![[1.0, 0.0], [0.0, 2.0], [3.0, 2.0]];
        let b = array![4.0, 12.0, 18.0];
        let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();

        let tableau = problem.initial_tableau();
        assert_eq!(
            tableau.table(),
            array![
                [1.0, 0.0, 1.0, 0.0, 0.0, 4.0],
                [0.0, 2.0, 0.0, 1.0, 0.0, 12.0],
                [3.0, 2.0, 0.0, 0.0, 1.0, 18.0],
                [-3.0, -5.0, 0.0, 0.0, 0.0, 0.0],
            ]
            .view()
        );
    }
}
