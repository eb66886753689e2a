//! Solve Results
//!
//! Wire format returned by the solver and the view model rendered from it.

use serde::Deserialize;

/// Heading shown above the step list
pub const SOLUTION_HEADING: &str = "Solution Steps";

/// Message shown when there is nothing to list
pub const NO_SOLUTION_MESSAGE: &str = "No solution found. Please try a different image.";

/// JSON body returned by the solver service
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SolveResult {
    /// Ordered, human-readable solution steps
    #[serde(default)]
    pub steps: Option<Vec<String>>,
}

impl SolveResult {
    pub fn with_steps<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: Some(steps.into_iter().map(Into::into).collect()),
        }
    }

    /// Steps, if the solver found any
    pub fn steps(&self) -> Option<&[String]> {
        self.steps.as_deref().filter(|steps| !steps.is_empty())
    }
}

/// What the output container shows after a render
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolutionView {
    /// Fixed "no solution" message
    NoSolution,
    /// Heading plus one formatted entry per step
    Steps { items: Vec<String> },
}

impl SolutionView {
    /// Build the view for a (possibly absent) result.
    ///
    /// An absent result, a missing `steps` field and an empty `steps`
    /// list all render the same message.
    pub fn from_result(result: Option<&SolveResult>) -> Self {
        match result.and_then(SolveResult::steps) {
            Some(steps) => SolutionView::Steps {
                items: steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| format_step(i + 1, step))
                    .collect(),
            },
            None => SolutionView::NoSolution,
        }
    }

    /// Number of listed steps
    pub fn len(&self) -> usize {
        match self {
            SolutionView::NoSolution => 0,
            SolutionView::Steps { items } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `Step <n>: <text>` with a 1-based index
pub fn format_step(number: usize, step: &str) -> String {
    format!("Step {number}: {step}")
}
