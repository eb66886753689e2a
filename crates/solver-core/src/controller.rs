//! Solve Button Controller
//!
//! Chains file selection → upload → render for one click, with an
//! in-flight guard so overlapping uploads cannot race on the output.

use std::cell::Cell;

use crate::error::SolveError;
use crate::solution::SolutionView;
use crate::solver::Solver;

/// Alert shown when the button is clicked without a file
pub const MISSING_FILE_MESSAGE: &str = "Please upload an image.";

/// Blocking user-facing notification channel (`window.alert` in the browser)
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// What happened for one click
#[derive(Debug)]
pub enum ClickOutcome {
    /// No file was selected; nothing was sent
    MissingFile,
    /// Another upload is still running; nothing was sent
    Busy,
    /// Solver answered
    Solved(SolutionView),
    /// Upload failed; `view` is what the output should show
    Failed {
        error: SolveError,
        view: SolutionView,
    },
}

impl ClickOutcome {
    /// View to render, if this click changes the output
    pub fn into_view(self) -> Option<SolutionView> {
        match self {
            ClickOutcome::Solved(view) | ClickOutcome::Failed { view, .. } => Some(view),
            ClickOutcome::MissingFile | ClickOutcome::Busy => None,
        }
    }
}

/// Drives the solve button
pub struct SolveController<S, N> {
    solver: S,
    notifier: N,
    in_flight: Cell<bool>,
}

impl<S, N> SolveController<S, N>
where
    S: Solver,
    N: Notifier,
{
    pub fn new(solver: S, notifier: N) -> Self {
        Self {
            solver,
            notifier,
            in_flight: Cell::new(false),
        }
    }

    /// True while an upload is awaiting the solver
    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    #[cfg(test)]
    pub(crate) const fn solver(&self) -> &S {
        &self.solver
    }

    /// Handle one click on the solve button
    pub async fn on_solve_clicked(&self, selection: Option<S::File>) -> ClickOutcome {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            tracing::debug!("upload already in flight, ignoring click");
            return ClickOutcome::Busy;
        };

        let Some(file) = selection else {
            self.notifier.alert(MISSING_FILE_MESSAGE);
            return ClickOutcome::MissingFile;
        };

        match self.solver.solve(file).await {
            Ok(result) => {
                let view = SolutionView::from_result(Some(&result));
                tracing::info!(steps = view.len(), "solver answered");
                ClickOutcome::Solved(view)
            }
            Err(error) => {
                tracing::error!(error = %error, "image upload failed");
                self.notifier.alert(error.user_message());
                ClickOutcome::Failed {
                    error,
                    view: SolutionView::NoSolution,
                }
            }
        }
    }
}

/// Holds the in-flight flag until dropped
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use futures::channel::oneshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{Result, UPLOAD_FAILED_MESSAGE};
    use crate::solution::SolveResult;

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        alerts: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingNotifier {
        fn alerts(&self) -> Vec<String> {
            self.alerts.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    /// Collects formatted log lines for the current thread
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn capture() -> (Self, tracing::subscriber::DefaultGuard) {
            let buf = Self::default();
            let writer = buf.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .without_time()
                .with_max_level(tracing::Level::INFO)
                .finish();
            (buf, tracing::subscriber::set_default(subscriber))
        }

        /// Lines logged at WARN or ERROR
        fn diagnostics(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .lines()
                .map(str::trim_start)
                .filter(|line| line.starts_with("ERROR") || line.starts_with("WARN"))
                .map(String::from)
                .collect()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Answers every file with a canned response
    struct CannedSolver {
        calls: Cell<usize>,
        respond: fn() -> Result<SolveResult>,
    }

    impl CannedSolver {
        fn new(respond: fn() -> Result<SolveResult>) -> Self {
            Self {
                calls: Cell::new(0),
                respond,
            }
        }
    }

    #[async_trait(?Send)]
    impl Solver for CannedSolver {
        type File = &'static str;

        async fn solve(&self, _file: &'static str) -> Result<SolveResult> {
            self.calls.set(self.calls.get() + 1);
            (self.respond)()
        }
    }

    /// Waits on a channel before answering
    struct GatedSolver {
        calls: Cell<usize>,
        release: RefCell<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait(?Send)]
    impl Solver for GatedSolver {
        type File = &'static str;

        async fn solve(&self, _file: &'static str) -> Result<SolveResult> {
            self.calls.set(self.calls.get() + 1);
            let release = self.release.borrow_mut().take();
            if let Some(release) = release {
                let _ = release.await;
            }
            Ok(SolveResult::with_steps(["done"]))
        }
    }

    #[tokio::test]
    async fn test_missing_file_alerts_without_request() {
        let notifier = RecordingNotifier::default();
        let controller =
            SolveController::new(CannedSolver::new(|| Ok(SolveResult::default())), notifier.clone());

        let outcome = controller.on_solve_clicked(None).await;

        assert!(matches!(outcome, ClickOutcome::MissingFile));
        assert!(outcome.into_view().is_none());
        assert_eq!(controller.solver().calls.get(), 0);
        assert_eq!(notifier.alerts(), vec![MISSING_FILE_MESSAGE.to_string()]);
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_success_renders_steps() {
        let notifier = RecordingNotifier::default();
        let controller = SolveController::new(
            CannedSolver::new(|| Ok(SolveResult::with_steps(["rotate piece A", "insert piece B"]))),
            notifier.clone(),
        );

        let view = controller
            .on_solve_clicked(Some("puzzle.png"))
            .await
            .into_view();

        assert_eq!(
            view,
            Some(SolutionView::Steps {
                items: vec![
                    "Step 1: rotate piece A".to_string(),
                    "Step 2: insert piece B".to_string(),
                ]
            })
        );
        assert!(notifier.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_failure_alerts_once_and_shows_no_solution() {
        let notifier = RecordingNotifier::default();
        let controller = SolveController::new(
            CannedSolver::new(|| Err(SolveError::Network("connection refused".into()))),
            notifier.clone(),
        );

        let outcome = controller.on_solve_clicked(Some("puzzle.png")).await;

        match outcome {
            ClickOutcome::Failed { error, view } => {
                assert!(matches!(error, SolveError::Network(_)));
                assert_eq!(view, SolutionView::NoSolution);
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(notifier.alerts(), vec![UPLOAD_FAILED_MESSAGE.to_string()]);
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_each_failed_click_logs_one_error() {
        let failures: [fn() -> Result<SolveResult>; 2] = [
            || Err(SolveError::Network("connection refused".into())),
            || Err(SolveError::Status { status: 502 }),
        ];

        for respond in failures {
            let (logs, _guard) = LogBuffer::capture();
            let notifier = RecordingNotifier::default();
            let controller = SolveController::new(CannedSolver::new(respond), notifier.clone());

            let outcome = controller.on_solve_clicked(Some("puzzle.png")).await;

            assert!(matches!(outcome, ClickOutcome::Failed { .. }));
            let diagnostics = logs.diagnostics();
            assert_eq!(diagnostics.len(), 1, "{diagnostics:?}");
            assert!(diagnostics[0].starts_with("ERROR"));
            assert!(diagnostics[0].contains("image upload failed"));
            assert_eq!(notifier.alerts().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_successful_click_logs_no_diagnostics() {
        let (logs, _guard) = LogBuffer::capture();
        let controller = SolveController::new(
            CannedSolver::new(|| Ok(SolveResult::with_steps(["a"]))),
            RecordingNotifier::default(),
        );

        controller.on_solve_clicked(Some("puzzle.png")).await;

        assert!(logs.diagnostics().is_empty());
    }

    #[tokio::test]
    async fn test_click_while_in_flight_is_ignored() {
        let (release, gate) = oneshot::channel();
        let notifier = RecordingNotifier::default();
        let controller = SolveController::new(
            GatedSolver {
                calls: Cell::new(0),
                release: RefCell::new(Some(gate)),
            },
            notifier.clone(),
        );

        let mut first = std::pin::pin!(controller.on_solve_clicked(Some("a.png")));
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert!(controller.is_busy());

        let second = controller.on_solve_clicked(Some("b.png")).await;
        assert!(matches!(second, ClickOutcome::Busy));

        release.send(()).unwrap();
        let first = first.await;
        assert!(matches!(first, ClickOutcome::Solved(_)));

        assert_eq!(controller.solver().calls.get(), 1);
        assert!(!controller.is_busy());
        assert!(notifier.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_repeat_clicks_rerun_the_sequence() {
        let notifier = RecordingNotifier::default();
        let controller = SolveController::new(
            CannedSolver::new(|| Ok(SolveResult::with_steps(["a"]))),
            notifier,
        );

        let first = controller.on_solve_clicked(Some("a.png")).await.into_view();
        let second = controller.on_solve_clicked(Some("a.png")).await.into_view();

        assert_eq!(first, second);
        assert_eq!(controller.solver().calls.get(), 2);
    }
}
