//! Mock implementation of CodeGenerator for testing

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::errors::{ProcessingError, ProcessingResult};

use super::CodeGenerator;

/// Deterministic code generator for tests
///
/// Yields the queued codes in order; once the queue is drained it keeps
/// returning the last queued code. Can be switched to fail to exercise the
/// generation-failure path.
pub struct MockCodeGenerator {
    codes: Mutex<VecDeque<String>>,
    last: Mutex<Option<String>>,
    fail: Mutex<bool>,
}

impl MockCodeGenerator {
    /// Generator that always returns `code`
    pub fn fixed(code: &str) -> Self {
        Self::sequence(&[code])
    }

    /// Generator that yields `codes` in order, then repeats the last one
    pub fn sequence(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            last: Mutex::new(None),
            fail: Mutex::new(false),
        }
    }

    /// Generator whose every call fails with a generation error
    pub fn failing() -> Self {
        let generator = Self::sequence(&[]);
        *generator.fail.lock().unwrap() = true;
        generator
    }
}

impl CodeGenerator for MockCodeGenerator {
    fn generate(&self) -> ProcessingResult<String> {
        if *self.fail.lock().unwrap() {
            return Err(ProcessingError::Generation {
                message: "mock generator set to fail".to_string(),
            });
        }

        let mut codes = self.codes.lock().unwrap();
        let mut last = self.last.lock().unwrap();
        if let Some(code) = codes.pop_front() {
            *last = Some(code.clone());
            return Ok(code);
        }
        last.clone().ok_or(ProcessingError::Generation {
            message: "mock generator has no codes queued".to_string(),
        })
    }
}
