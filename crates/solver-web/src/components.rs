//! UI Components

use leptos::prelude::*;
use solver_core::{SolutionView, NO_SOLUTION_MESSAGE, SOLUTION_HEADING};

/// Output container; its whole content is replaced on every change
#[component]
pub fn SolutionPanel(solution: ReadSignal<Option<SolutionView>>) -> impl IntoView {
    view! {
        <div id="solution">
            {move || solution.get().map(|s| view! { <SolutionBody solution=s /> })}
        </div>
    }
}

#[component]
fn SolutionBody(solution: SolutionView) -> impl IntoView {
    match solution {
        SolutionView::NoSolution => view! { <p>{NO_SOLUTION_MESSAGE}</p> }.into_any(),
        SolutionView::Steps { items } => view! {
            <h2>{SOLUTION_HEADING}</h2>
            <ul>
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}
