use std::fmt;

use crate::error::{Error, Result};
use crate::report::Reporter;

/// Integer stack over a `Vec`, top at the end.
///
/// Popping an empty stack is not an error: it emits a warning through the
/// stack's [`Reporter`] and leaves the stack as it was.
#[derive(Clone)]
pub struct Stack {
    data: Vec<i32>,
    reporter: Reporter,
}

impl Stack {
    pub fn new() -> Self {
        Self::with_reporter(Reporter::stderr())
    }

    pub fn with_reporter(reporter: Reporter) -> Self {
        Stack {
            data: Vec::new(),
            reporter,
        }
    }

    pub fn push(&mut self, value: i32) {
        self.data.push(value);
    }

    pub fn pop(&mut self) -> Option<i32> {
        let value = self.data.pop();
        if value.is_none() {
            self.reporter.warn("Stack is empty. Cannot pop.");
        }
        value
    }

    pub fn top(&self) -> Result<i32> {
        self.data.last().copied().ok_or(Error::EmptyStack)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Arithmetic mean of every value, `0.0` for an empty stack
    pub fn average(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }

        let sum: i64 = self.data.iter().map(|&value| i64::from(value)).sum();
        sum as f64 / self.data.len() as f64
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Bottom-to-top traversal
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.data.iter().copied()
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "NULL")
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
