//! Solver Abstraction
//!
//! The `Solver` trait lets the click controller drive either the HTTP client
//! directly or a browser adapter that first has to read a picked file.

use async_trait::async_trait;

use crate::error::Result;
use crate::solution::SolveResult;

/// An image picked by the user, held only for one upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    /// Raw file bytes
    pub bytes: Vec<u8>,

    /// Original file name, if the picker reported one
    pub file_name: Option<String>,

    /// MIME type, if the picker reported one
    pub mime_type: Option<String>,
}

impl ImageUpload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: None,
            mime_type: None,
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into()).filter(|n: &String| !n.is_empty());
        self
    }

    pub fn with_mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into()).filter(|m: &String| !m.is_empty());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Something that turns a picked file into a solve result.
///
/// Futures are `?Send`: in the browser everything runs on the event loop
/// and `web_sys` handles are not thread-safe.
#[async_trait(?Send)]
pub trait Solver {
    /// File handle this solver accepts
    type File;

    /// Upload one file and return the solver's answer
    async fn solve(&self, file: Self::File) -> Result<SolveResult>;
}
