#![allow(non_snake_case)]
//! The classic two-product planning example: maximize the total profit of two
//! products that compete for three limited plant capacities. Small enough to
//! follow every pivot by hand with the verbose printer switched on.

use approx::assert_abs_diff_eq;
use ndarray::prelude::*;
use simplex_lp::prelude::*;

fn main() {
    let c = array![3., 5.];
    let A = array![[1., 0.], [0., 2.], [3., 2.]];
    let b = array![4., 12., 18.];

    let problem = Problem::maximize(&c).subject_to(&A, &b).build().unwrap();
    let solver = Simplex::custom().verbose(true).build().unwrap();

    let solution = solver.solve(&problem).unwrap();

    println!("status: {:?}", solution.status());
    println!("maximal profit: {}", solution.objective().unwrap());
    println!("required number of pivots: {}", solution.iterations());
    for &(variable, value) in solution.solution().unwrap() {
        println!("x{variable} = {value}");
    }

    assert_abs_diff_eq!(*solution.objective().unwrap(), 36., epsilon = 1e-9);
}
