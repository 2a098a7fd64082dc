//! The dense simplex tableau and its pivoting engine.
//!
//! A [`Tableau`] holds the coefficient matrix of a linear program in standard
//! maximization form, with the starting basis already encoded through slack
//! columns. Driving it is a loop around [`Tableau::step`]: every call either
//! performs one Gauss-Jordan pivot or reports a terminal [`Status`].

use std::fmt;

use ndarray::{s, Array2, ArrayView1, ArrayView2};

use crate::error::LinearProgramError;
use crate::float::Float;

/// Outcome of a single [`Tableau::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A pivot was performed; step again.
    NotOptimal,
    /// Every reduced cost is non-negative, the current solution is optimal.
    Optimal,
    /// The entering column has no positive entry, so the objective can grow
    /// without limit.
    Unbounded,
}

/// A simplex tableau of `num_constraints + 1` rows and `num_unknowns + 1`
/// columns.
///
/// Rows `0..rows-1` hold the constraint equations, the final row holds the
/// reduced costs of the objective. Columns `0..cols-1` correspond to the
/// decision and slack variables, the final column is the right-hand side and
/// doubles as the current solution column. The shape is fixed at
/// construction; pivots mutate the matrix in place.
///
/// # Example
///
/// Maximize `3x + 5y` subject to `x <= 4`, `2y <= 12`, `3x + 2y <= 18` with
/// slack columns appended:
///
/// ```
/// use ndarray::array;
/// use simplex::tableau::{Status, Tableau};
///
/// let standardized = array![
///     [1.0, 0.0, 1.0, 0.0, 0.0, 4.0],
///     [0.0, 2.0, 0.0, 1.0, 0.0, 12.0],
///     [3.0, 2.0, 0.0, 0.0, 1.0, 18.0],
///     [-3.0, -5.0, 0.0, 0.0, 0.0, 0.0],
/// ];
///
/// let mut tableau = Tableau::new(3, 5).unwrap();
/// tableau.load(standardized.view()).unwrap();
/// while tableau.step() == Status::NotOptimal {}
///
/// assert!(tableau.is_optimal());
/// assert_eq!(tableau.objective(), 36.0);
/// ```
#[derive(Debug, Clone)]
pub struct Tableau<F> {
    table: Array2<F>,
    tol: F,
}

impl<F: Float> Tableau<F> {
    /// Allocate a zero-initialized tableau for `num_constraints` constraint
    /// rows and `num_unknowns` variable columns (one extra row holds the
    /// objective, one extra column the right-hand side).
    pub fn new(num_constraints: usize, num_unknowns: usize) -> Result<Self, LinearProgramError<F>> {
        if num_constraints == 0 || num_unknowns == 0 {
            return Err(LinearProgramError::InvalidParameter(
                "a tableau needs at least one constraint and one unknown",
            ));
        }
        Ok(Tableau {
            table: Array2::zeros((num_constraints + 1, num_unknowns + 1)),
            tol: F::zero(),
        })
    }

    pub(crate) fn from_matrix(table: Array2<F>) -> Self {
        Tableau {
            table,
            tol: F::zero(),
        }
    }

    /// Set the tolerance used by the sign comparisons in the optimality test,
    /// the entering-column scan and the ratio test. The default of zero
    /// reproduces exact comparisons; a small positive value makes the engine
    /// robust against roundoff drift over many pivots.
    pub fn tol(mut self, tol: F) -> Self {
        self.tol = tol;
        self
    }

    /// Overwrite the whole tableau with `data`, which must match the
    /// tableau's shape exactly.
    pub fn load(&mut self, data: ArrayView2<F>) -> Result<(), LinearProgramError<F>> {
        if data.dim() != self.table.dim() {
            return Err(LinearProgramError::IncompatibleInputDimensions);
        }
        self.table.assign(&data);
        Ok(())
    }

    /// True iff no reduced cost in the objective row is negative, which is
    /// the sole termination condition for an optimal solution.
    pub fn is_optimal(&self) -> bool {
        self.table
            .row(self.nrows() - 1)
            .iter()
            .take(self.ncols() - 1)
            .all(|&cost| cost >= -self.tol)
    }

    /// Run one iteration of the simplex method.
    ///
    /// Returns [`Status::Optimal`] or [`Status::Unbounded`] without touching
    /// the tableau, or performs the selected pivot in place and returns
    /// [`Status::NotOptimal`]. Terminal statuses are idempotent: further
    /// calls re-evaluate the same side-effect-free tests.
    pub fn step(&mut self) -> Status {
        if self.is_optimal() {
            return Status::Optimal;
        }
        let column = self.entering_column();
        let ratios = self.ratios(column);
        let Some(row) = Self::leaving_row(&ratios) else {
            return Status::Unbounded;
        };
        self.pivot(row, column);
        Status::NotOptimal
    }

    /// Index of the column whose variable enters the basis next.
    ///
    /// With more than one negative reduced cost, the column holding the
    /// largest-magnitude cost cell is chosen, whether or not that cell is
    /// itself negative. A lone negative cost selects the first column,
    /// wherever the negative sits.
    fn entering_column(&self) -> usize {
        let costs = self.table.row(self.nrows() - 1);
        let costs = costs.slice(s![..self.ncols() - 1]);
        let negative = costs.iter().filter(|&&cost| cost < -self.tol).count();
        if negative > 1 {
            let mut column = 0;
            let mut largest = costs[0].abs();
            for (j, &cost) in costs.iter().enumerate().skip(1) {
                if cost.abs() > largest {
                    largest = cost.abs();
                    column = j;
                }
            }
            column
        } else {
            debug_assert_eq!(negative, 1, "entering column requested on an optimal tableau");
            negative - 1
        }
    }

    /// Candidate ratios of the ratio test for the given pivot column, one
    /// per tableau row. `None` marks rows whose entry in the pivot column is
    /// not positive and which therefore cannot leave the basis; a
    /// `Some(0.0)` is a genuine degenerate candidate, not an absence.
    fn ratios(&self, column: usize) -> Vec<Option<F>> {
        let rhs = self.ncols() - 1;
        (0..self.nrows())
            .map(|i| {
                let entry = self.table[[i, column]];
                (entry > self.tol).then(|| self.table[[i, rhs]] / entry)
            })
            .collect()
    }

    /// Row of the variable that leaves the basis: the smallest strictly
    /// positive ratio, earliest row winning ties. When every candidate is
    /// zero the first candidate row is taken, so degenerate problems pivot
    /// instead of stalling. `None` means no candidate exists at all and the
    /// problem is unbounded along the chosen column.
    fn leaving_row(ratios: &[Option<F>]) -> Option<usize> {
        let mut best: Option<(usize, F)> = None;
        for (row, ratio) in ratios.iter().enumerate() {
            if let Some(ratio) = *ratio {
                if ratio > F::zero() && best.map_or(true, |(_, smallest)| ratio < smallest) {
                    best = Some((row, ratio));
                }
            }
        }
        best.map(|(row, _)| row)
            .or_else(|| ratios.iter().position(Option::is_some))
    }

    /// Gauss-Jordan elimination on the pivot column: normalize the pivot row
    /// by the pivot element, then clear the column from every other row.
    /// Afterwards the pivot column is a unit column.
    fn pivot(&mut self, row: usize, column: usize) {
        let pivot_value = self.table[[row, column]];
        debug_assert!(pivot_value != F::zero(), "pivot on a zero element");
        let normalized = self.table.row(row).mapv(|v| v / pivot_value);
        for i in 0..self.nrows() {
            if i == row {
                continue;
            }
            let factor = self.table[[i, column]];
            let eliminated = &self.table.row(i) - &(&normalized * factor);
            self.table.row_mut(i).assign(&eliminated);
        }
        self.table.row_mut(row).assign(&normalized);
    }

    /// Read-only view of the whole tableau.
    pub fn table(&self) -> ArrayView2<'_, F> {
        self.table.view()
    }

    /// The right-hand-side column, holding the values of the basic variables
    /// and, in its last cell, the current objective value.
    pub fn solution_column(&self) -> ArrayView1<'_, F> {
        self.table.column(self.ncols() - 1)
    }

    /// The right-hand-side cell of a single row.
    pub fn solution_value(&self, row: usize) -> F {
        self.table[[row, self.ncols() - 1]]
    }

    /// The current objective value.
    pub fn objective(&self) -> F {
        self.solution_value(self.nrows() - 1)
    }

    pub fn nrows(&self) -> usize {
        self.table.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.table.ncols()
    }
}

impl<F: Float> fmt::Display for Tableau<F> {
    /// Render every cell with two decimals, tab-separated, one tableau row
    /// per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.table.rows() {
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{cell:.2}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn wyndor() -> Tableau<f64> {
        let mut tableau = Tableau::new(3, 5).unwrap();
        tableau
            .load(
                array![
                    [1.0, 0.0, 1.0, 0.0, 0.0, 4.0],
                    [0.0, 2.0, 0.0, 1.0, 0.0, 12.0],
                    [3.0, 2.0, 0.0, 0.0, 1.0, 18.0],
                    [-3.0, -5.0, 0.0, 0.0, 0.0, 0.0],
                ]
                .view(),
            )
            .unwrap();
        tableau
    }

    #[test]
    fn load_round_trips() {
        let m = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let mut tableau = Tableau::new(1, 2).unwrap();
        tableau.load(m.view()).unwrap();
        assert_eq!(tableau.table(), m.view());
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            Tableau::<f64>::new(0, 3),
            Err(LinearProgramError::InvalidParameter(_))
        ));
        assert!(matches!(
            Tableau::<f64>::new(3, 0),
            Err(LinearProgramError::InvalidParameter(_))
        ));
    }

    #[test]
    fn load_rejects_mismatched_shapes() {
        let mut tableau = Tableau::new(2, 2).unwrap();
        assert!(matches!(
            tableau.load(array![[1.0, 2.0], [3.0, 4.0]].view()),
            Err(LinearProgramError::IncompatibleInputDimensions)
        ));
    }

    #[test]
    fn optimality_is_the_sign_of_the_cost_cells() {
        let mut tableau = Tableau::new(1, 2).unwrap();
        tableau
            .load(array![[1.0, 1.0, 4.0], [0.0, 2.0, 0.0]].view())
            .unwrap();
        assert!(tableau.is_optimal());
        tableau
            .load(array![[1.0, 1.0, 4.0], [0.0, -2.0, 0.0]].view())
            .unwrap();
        assert!(!tableau.is_optimal());
        // the right-hand-side cell of the objective row is not a cost
        tableau
            .load(array![[1.0, 1.0, 4.0], [0.0, 2.0, -7.0]].view())
            .unwrap();
        assert!(tableau.is_optimal());
    }

    #[test]
    fn step_on_an_optimal_tableau_is_an_idempotent_no_op() {
        let mut tableau = Tableau::new(1, 2).unwrap();
        tableau
            .load(array![[1.0, 1.0, 4.0], [0.0, 2.0, 5.0]].view())
            .unwrap();
        let before = tableau.table().to_owned();
        assert_eq!(tableau.step(), Status::Optimal);
        assert_eq!(tableau.step(), Status::Optimal);
        assert_eq!(tableau.table(), before.view());
    }

    #[test]
    fn entering_column_takes_the_largest_magnitude_cell() {
        // two negative costs, but the largest cell by magnitude is the
        // non-negative 5.0, and the implemented rule picks it
        let mut tableau = Tableau::new(1, 4).unwrap();
        tableau
            .load(array![[1.0, 1.0, 1.0, 1.0, 10.0], [-1.0, -2.0, 5.0, 0.0, 0.0]].view())
            .unwrap();
        assert_eq!(tableau.entering_column(), 2);
    }

    #[test]
    fn lone_negative_cost_selects_the_first_column() {
        let mut tableau = Tableau::new(1, 3).unwrap();
        tableau
            .load(array![[1.0, 1.0, 1.0, 10.0], [4.0, -2.0, 0.0, 0.0]].view())
            .unwrap();
        assert_eq!(tableau.entering_column(), 0);
    }

    #[test]
    fn ratio_candidates_are_absent_for_nonpositive_entries() {
        let tableau = wyndor();
        // the objective row takes part in the scan but its entry is negative
        assert_eq!(tableau.ratios(1), vec![None, Some(6.0), Some(9.0), None]);
    }

    #[test]
    fn leaving_row_is_the_smallest_positive_ratio() {
        assert_eq!(
            Tableau::<f64>::leaving_row(&[Some(4.0), Some(2.0), None]),
            Some(1)
        );
    }

    #[test]
    fn leaving_row_ties_break_on_the_earliest_row() {
        assert_eq!(
            Tableau::<f64>::leaving_row(&[None, Some(3.0), Some(3.0)]),
            Some(1)
        );
    }

    #[test]
    fn zero_ratios_pivot_only_when_nothing_positive_remains() {
        assert_eq!(
            Tableau::<f64>::leaving_row(&[Some(0.0), Some(5.0)]),
            Some(1)
        );
        assert_eq!(Tableau::<f64>::leaving_row(&[None, Some(0.0)]), Some(1));
        assert_eq!(Tableau::<f64>::leaving_row(&[None, None]), None);
    }

    #[test]
    fn pivot_leaves_a_unit_column() {
        let mut tableau = wyndor();
        tableau.pivot(1, 1);
        assert_abs_diff_eq!(
            tableau.table().column(1).to_owned(),
            array![0.0, 1.0, 0.0, 0.0],
            epsilon = 1e-12
        );

        let mut tableau = wyndor();
        tableau.pivot(2, 0);
        assert_abs_diff_eq!(
            tableau.table().column(0).to_owned(),
            array![0.0, 0.0, 1.0, 0.0],
            epsilon = 1e-12
        );
    }

    #[test]
    fn unbounded_column_reports_without_mutating() {
        let mut tableau = Tableau::new(1, 2).unwrap();
        tableau
            .load(array![[-1.0, 1.0, 4.0], [-3.0, 0.0, 0.0]].view())
            .unwrap();
        let before = tableau.table().to_owned();
        assert_eq!(tableau.step(), Status::Unbounded);
        assert_eq!(tableau.step(), Status::Unbounded);
        assert_eq!(tableau.table(), before.view());
    }

    #[test]
    fn objective_value_never_decreases() {
        let mut tableau = wyndor();
        let mut previous = tableau.objective();
        while tableau.step() == Status::NotOptimal {
            assert!(tableau.objective() >= previous);
            previous = tableau.objective();
        }
    }

    #[test]
    fn wyndor_reaches_its_known_optimum() {
        let mut tableau = wyndor();
        assert_eq!(tableau.step(), Status::NotOptimal);
        assert_eq!(tableau.step(), Status::NotOptimal);
        assert_eq!(tableau.step(), Status::Optimal);
        assert_abs_diff_eq!(tableau.objective(), 36.0, epsilon = 1e-9);
        // y entered the basis on row 1, x on row 2
        assert_abs_diff_eq!(tableau.solution_value(1), 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tableau.solution_value(2), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn terminates_within_the_area_bound() {
        let mut tableau = wyndor();
        let bound = tableau.nrows() * tableau.ncols();
        let mut steps = 0;
        while tableau.step() == Status::NotOptimal {
            steps += 1;
            assert!(steps <= bound);
        }
    }

    #[test]
    fn solution_column_is_the_last_column() {
        let tableau = wyndor();
        assert_eq!(
            tableau.solution_column().to_owned(),
            array![4.0, 12.0, 18.0, 0.0]
        );
    }

    #[test]
    fn display_uses_two_decimals_and_tabs() {
        let mut tableau = Tableau::new(1, 1).unwrap();
        tableau
            .load(array![[1.5, 2.25], [0.0, -3.0]].view())
            .unwrap();
        assert_eq!(tableau.to_string(), "1.50\t2.25\n0.00\t-3.00\n");
    }

    #[test]
    fn tolerance_absorbs_roundoff_noise_in_the_cost_row() {
        let m = array![[1.0, 1.0, 4.0], [-1e-12, 0.0, 0.0]];
        let mut exact = Tableau::new(1, 2).unwrap();
        exact.load(m.view()).unwrap();
        assert!(!exact.is_optimal());

        let mut tolerant = Tableau::new(1, 2).unwrap().tol(1e-9);
        tolerant.load(m.view()).unwrap();
        assert!(tolerant.is_optimal());
        assert_eq!(tolerant.step(), Status::Optimal);
    }
}
