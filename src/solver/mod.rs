// Solver adapters module

pub mod good_lp_solver;

pub use good_lp_solver::GoodLpSolver;
