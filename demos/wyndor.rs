#![allow(non_snake_case)]
//! The introductory Wyndor Glass product-mix problem: two products, three
//! plants with limited capacity, and an optimum you can verify by hand.

use approx::assert_abs_diff_eq;
use ndarray::prelude::*;
use simplex::prelude::*;

fn main() {
    let A = array![[1.0, 0.0], [0.0, 2.0], [3.0, 2.0]];
    let b = array![4.0, 12.0, 18.0];
    let c = array![3.0, 5.0];

    let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();
    let solver = Simplex::custom().disp(true).build().unwrap();

    let solution = solver.solve(&problem).unwrap();

    println!("solution found, maximal profit: {}", solution.fun());
    println!("required number of pivots: {}", solution.iteration());

    assert_abs_diff_eq!(solution.x(), &array![2.0, 6.0], epsilon = 1e-9);
}
