//! Short-lived notifications shown to the player

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    /// Ticks until the message disappears
    pub remaining: u32,
}

/// Bounded log of the most recent messages, oldest first
#[derive(Debug, Clone)]
pub struct MessageLog {
    entries: VecDeque<Message>,
    capacity: usize,
    lifetime: u32,
}

impl MessageLog {
    pub fn new(capacity: usize, lifetime: u32) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            lifetime,
        }
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.entries.push_back(Message {
            text: text.into(),
            remaining: self.lifetime,
        });
        self.truncate();
    }

    /// Count every message down by one tick and drop the expired ones
    pub fn tick(&mut self) {
        for message in &mut self.entries {
            message.remaining = message.remaining.saturating_sub(1);
        }
        self.entries.retain(|m| m.remaining > 0);
        self.truncate();
    }

    fn truncate(&mut self) {
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
