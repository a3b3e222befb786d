//! Sequential reading of pre-segmented sentences
//!
//! [`ListReader`] exposes an already segmented corpus as a pull-based
//! sequence of unlabeled [`Instance`]s for training or evaluation pipelines.

use serde::{Deserialize, Serialize};

/// One sentence's word sequence with an optional label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Words of the sentence
    pub data: Vec<String>,
    /// Label, attached by a later stage
    pub label: Option<String>,
}

impl Instance {
    /// Create an instance
    pub fn new(data: Vec<String>, label: Option<String>) -> Self {
        Self { data, label }
    }
}

/// Pull-based source of instances
pub trait InstanceReader {
    /// Whether another instance is available
    fn has_next(&self) -> bool;

    /// Take the next instance
    ///
    /// # Panics
    ///
    /// May panic when [`has_next`](Self::has_next) is false.
    fn next_instance(&mut self) -> Instance;
}

/// Reads instances from an in-memory list of sentences
#[derive(Debug, Clone, Default)]
pub struct ListReader {
    data: Vec<Vec<String>>,
    index: usize,
}

impl ListReader {
    /// Create a reader over pre-segmented sentences
    pub fn new(data: Vec<Vec<String>>) -> Self {
        Self { data, index: 0 }
    }

    /// Parse one sentence per non-empty line, words separated by whitespace
    pub fn from_lines(text: &str) -> Self {
        let data = text
            .lines()
            .map(|line| {
                line.split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|words| !words.is_empty())
            .collect();
        Self::new(data)
    }

    /// Total number of sentences
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the reader holds no sentences
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of sentences not yet read
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.index)
    }
}

impl From<Vec<Vec<String>>> for ListReader {
    fn from(data: Vec<Vec<String>>) -> Self {
        Self::new(data)
    }
}

impl InstanceReader for ListReader {
    fn has_next(&self) -> bool {
        self.index < self.data.len()
    }

    /// # Panics
    ///
    /// Panics with an index out of bounds error past the last sentence.
    fn next_instance(&mut self) -> Instance {
        let instance = Instance::new(self.data[self.index].clone(), None);
        self.index += 1;
        instance
    }
}

impl Iterator for ListReader {
    type Item = Instance;

    fn next(&mut self) -> Option<Instance> {
        if self.has_next() {
            Some(self.next_instance())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ListReader {}
