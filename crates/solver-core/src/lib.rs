//! # solver-core
//!
//! Upload client, solution model and click controller for the puzzle-solver
//! front end. Everything here runs on the host as well as in WASM, so the
//! browser crate stays a thin DOM shell.
//!
//! ## Flow
//!
//! ```text
//!  click ──▶ SolveController ──▶ Solver (SolverClient) ──▶ POST /solve
//!                 │                                          │
//!                 ▼                                          ▼
//!            Notifier (alert)                     SolveResult ──▶ SolutionView
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod solution;
pub mod solver;

pub use client::SolverClient;
pub use config::SolverConfig;
pub use controller::{ClickOutcome, Notifier, SolveController, MISSING_FILE_MESSAGE};
pub use error::{Result, SolveError, UPLOAD_FAILED_MESSAGE};
pub use solution::{SolutionView, SolveResult, NO_SOLUTION_MESSAGE, SOLUTION_HEADING};
pub use solver::{ImageUpload, Solver};
