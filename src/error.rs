use ndarray::Array1;
use std::fmt::Debug;
use thiserror::Error;

/// Everything that can go wrong while building or solving a linear program.
#[derive(Error, Debug)]
pub enum LinearProgramError<F: Debug> {
    #[error("The problem has no constraints, meaning the solution is the all-zeros vector if `c` is nonpositive, or unbounded otherwise.")]
    Unconstrained,
    #[error("A parameter was set to an invalid value: {0}")]
    InvalidParameter(&'static str),
    #[error("The dimensions of your cost- and constraint arrays do not align.")]
    IncompatibleInputDimensions,
    #[error("The right-hand side has negative entries, so the slack columns do not encode a feasible starting basis.")]
    Infeasible,
    #[error("The objective can be improved without limit, your problem is unbounded.")]
    Unbounded,
    #[error("The solver failed to reach an optimum within the maximum number of pivots. Best solution after the final pivot:\n{0:#?}")]
    IterationLimitExceeded(Array1<F>),
}
