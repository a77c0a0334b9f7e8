//! Deferred teardown steps of mounted notices.

use std::{cmp::Reverse, collections::BinaryHeap, time::Duration};

use crate::fragment::NodeId;

/// What a teardown step does when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StepKind {
    /// Start the notice's exit transition.
    Hide,
    /// Detach the notice's container.
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub at: Duration,
    pub node: NodeId,
    pub kind: StepKind,
}

/// Min-ordered queue of teardown steps. Steps sharing a deadline come out in
/// the order they were scheduled.
#[derive(Debug, Default)]
pub struct Timeline {
    // (deadline, insertion sequence) keeps equal deadlines FIFO.
    steps: BinaryHeap<Reverse<(Duration, u64, NodeId, StepKind)>>,
    sequence: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, step: Step) {
        self.steps
            .push(Reverse((step.at, self.sequence, step.node, step.kind)));
        self.sequence += 1;
    }

    /// Removes and returns the earliest step if it is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Step> {
        let Reverse((at, ..)) = self.steps.peek()?;
        if *at > now {
            return None;
        }

        self.steps
            .pop()
            .map(|Reverse((at, _, node, kind))| Step { at, node, kind })
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.steps.peek().map(|Reverse((at, ..))| *at)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
