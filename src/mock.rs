//! Mock implementations for testing
//!
//! Provides a fake notebook tool that returns canned results without
//! needing `jupyter` installed.

use crate::tool::{NotebookTool, Operation, OperationResult};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One recorded call to the fake tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub operation: Operation,
    pub source: PathBuf,
}

/// Fake notebook tool for testing
///
/// Returns success for every file unless a failure has been registered for
/// its file name.
#[derive(Debug, Default)]
pub struct FakeTool {
    failures: HashMap<String, OperationResult>,
    invocations: Mutex<Vec<Invocation>>,
}

impl FakeTool {
    /// Create a fake that succeeds for every file
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: make invocations on files named `file_name` fail with `exit_code`
    pub fn failing_on(mut self, file_name: impl Into<String>, exit_code: i32) -> Self {
        self.failures.insert(
            file_name.into(),
            OperationResult::failed(exit_code, "fake failure"),
        );
        self
    }

    /// All invocations seen so far
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Number of invocations seen so far
    pub fn call_count(&self) -> usize {
        self.invocations().len()
    }
}

impl NotebookTool for FakeTool {
    fn invoke(&self, operation: &Operation, source: &Path) -> OperationResult {
        if let Ok(mut calls) = self.invocations.lock() {
            calls.push(Invocation {
                operation: operation.clone(),
                source: source.to_path_buf(),
            });
        }

        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.failures
            .get(&name)
            .cloned()
            .unwrap_or_else(|| OperationResult::ok(format!("{} {}", operation, name)))
    }
}
