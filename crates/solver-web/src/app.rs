//! Main App Component

use std::rc::Rc;

use leptos::html::Input;
use leptos::prelude::*;
use solver_core::{SolveController, SolverClient, SolverConfig};

use crate::api::{self, BrowserAlert, BrowserSolver};
use crate::components::SolutionPanel;

type Controller = SolveController<BrowserSolver, BrowserAlert>;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let client = match SolverClient::from_config(SolverConfig::from_build_env()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "invalid solver config, using localhost");
            SolverClient::localhost()
        }
    };
    tracing::info!(endpoint = %client.config().endpoint, "puzzle solver ready");

    let controller: Rc<Controller> =
        Rc::new(SolveController::new(BrowserSolver::new(client), BrowserAlert));

    let input_ref: NodeRef<Input> = NodeRef::new();
    let (solution, set_solution) = signal(None);
    let (loading, set_loading) = signal(false);

    let solve = move |_| {
        let selection = input_ref.get().and_then(|input| api::selected_file(&input));
        let controller = Rc::clone(&controller);

        leptos::task::spawn_local(async move {
            set_loading.set(true);
            let outcome = controller.on_solve_clicked(selection).await;
            set_loading.set(controller.is_busy());
            if let Some(view) = outcome.into_view() {
                set_solution.set(Some(view));
            }
        });
    };

    view! {
        <h1>"Puzzle Solver"</h1>
        <div id="uploader">
            <input type="file" id="imageInput" accept="image/*" node_ref=input_ref />
            <button id="solveButton" on:click=solve disabled=move || loading.get()>
                "Upload and Solve"
            </button>
        </div>
        <SolutionPanel solution=solution />
    }
}
