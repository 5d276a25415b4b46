use std::collections::VecDeque;

use super::{EventSource, InputEvent};

/// Replays prepared batches, one batch per poll. Used to drive a session
/// without a window.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_batch(&mut self, batch: impl IntoIterator<Item = InputEvent>) -> &mut Self {
        self.batches.push_back(batch.into_iter().collect());
        self
    }

    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.batches.pop_front().unwrap_or_default()
    }
}
