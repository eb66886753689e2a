//! Browser Adapters
//!
//! Bridges `web_sys` file handles and `window.alert` to the solver-core traits.

use async_trait::async_trait;
use solver_core::{ImageUpload, Notifier, Result, SolveError, SolveResult, Solver, SolverClient};
use wasm_bindgen::JsCast;

/// Solver that reads a picked `File` and uploads it
pub struct BrowserSolver {
    client: SolverClient,
}

impl BrowserSolver {
    pub fn new(client: SolverClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Solver for BrowserSolver {
    type File = web_sys::File;

    async fn solve(&self, file: web_sys::File) -> Result<SolveResult> {
        let upload = read_upload(&file).await?;
        self.client.upload(upload).await
    }
}

/// Shows messages with `window.alert`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// First file selected in an `<input type="file">`, if any
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}

async fn read_upload(file: &web_sys::File) -> Result<ImageUpload> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| SolveError::Read(format!("{e:?}")))?
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| SolveError::Read("expected ArrayBuffer".into()))?;

    Ok(ImageUpload::new(js_sys::Uint8Array::new(&buffer).to_vec())
        .with_file_name(file.name())
        .with_mime_type(file.type_()))
}

/// `#root`, created under `<body>` when the page does not provide one
pub fn root_element() -> std::result::Result<web_sys::HtmlElement, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;

    if let Some(root) = document.get_element_by_id("root") {
        return root
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| "#root is not an HTML element".to_string());
    }

    let body = document.body().ok_or("no body")?;
    let root = document
        .create_element("div")
        .map_err(|_| "document: create_element failed".to_string())?;
    root.set_id("root");
    body.append_child(&root)
        .map_err(|_| "body: append_child failed".to_string())?;
    root.dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| "#root is not an HTML element".to_string())
}
