#[doc(no_inline)]
pub use crate::error::LinearProgramError;
#[doc(no_inline)]
pub use crate::linear_program::{Problem, ProblemBuilder};
#[doc(no_inline)]
pub use crate::solvers::simplex::{Simplex, SimplexBuilder};
#[doc(no_inline)]
pub use crate::solvers::{OptimizeResult, Solver};
#[doc(no_inline)]
pub use crate::tableau::{Status, Tableau};
