//! A pure-Rust dense-tableau simplex solver for linear programs in standard maximization form.
//!
//! # Linear programs
//!
//! A linear program is a mathematical optimization problem defined as:
//!
//! ```text
//!    max_x c'x
//!    st A'x <= b
//!          x >= 0
//! ```
//!
//! with `b >= 0`, so that appending one slack variable per constraint yields
//! a feasible starting basis and no phase-1 search is needed.
//!
//!
//!
//! # Example
//! ```
//! use approx::assert_abs_diff_eq;
//! use ndarray::array;
//!
//! use simplex::Problem;
//! use simplex::solvers::{Simplex, Solver};
//!
//! // Maximize 3x + 5y subject to x <= 4, 2y <= 12, 3x + 2y <= 18.
//! let A = array![[1.0f64, 0.], [0., 2.], [3., 2.]];
//! let b = array![4., 12., 18.];
//! let c = array![3., 5.];
//!
//! let problem = Problem::maximize(&c)
//!     .subject_to(&A, &b)
//!     .build()
//!     .unwrap();
//!
//!     // These are the default values you can overwrite.
//!     // You may omit any option for which the default is good enough for you
//! let solver = Simplex::custom()
//!     .tol(0.0)
//!     .disp(false)
//!     .max_iter(1000)
//!     .build()
//!     .unwrap();
//!
//! let res = solver.solve(&problem).unwrap();
//!
//! assert_abs_diff_eq!(*res.x(), array![2., 6.], epsilon = 1e-9);
//! assert_abs_diff_eq!(*res.fun(), 36., epsilon = 1e-9);
//! ```
//!
//! The pivoting engine underneath the solver is usable on its own: see
//! [`tableau::Tableau`] for driving a pre-standardized tableau step by step.

pub mod error;
pub(crate) mod float;
pub mod linear_program;
pub mod prelude;
pub mod solvers;
pub mod tableau;

pub use linear_program::{Problem, ProblemBuilder};
pub use solvers::OptimizeResult;
