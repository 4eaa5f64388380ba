// SPDX-License-Identifier: MPL-2.0
//! Priority queue of pending bulletins.
//!
//! Index 0 is the bottom of the queue (shows last); the last element is the
//! top, which is the bulletin on screen or about to be. Admission decides
//! whether a newcomer waits its turn or pushes the top off the queue.

use super::request::{Bulletin, BulletinId, Priority};
use std::fmt;

/// Ordered collection of bulletins waiting for (or holding) the screen.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    bulletins: Vec<Bulletin<T>>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            bulletins: Vec::new(),
        }
    }
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a bulletin, returning the top item if admission evicted it.
    ///
    /// - `Required` always pops the top and takes its place.
    /// - Otherwise the newcomer is inserted right below the first (lowest)
    ///   item of equal priority, or failing that below the first item of
    ///   greater priority, so it waits its turn.
    /// - When every queued item has a lower priority the top is popped and
    ///   the newcomer takes its place.
    pub fn admit(&mut self, bulletin: Bulletin<T>) -> Option<Bulletin<T>> {
        if bulletin.priority == Priority::Required {
            let evicted = self.pop();
            self.bulletins.push(bulletin);
            return evicted;
        }

        if self.bulletins.is_empty() {
            self.bulletins.push(bulletin);
            return None;
        }

        let priority = bulletin.priority;
        let slot = self
            .bulletins
            .iter()
            .position(|queued| queued.priority == priority)
            .or_else(|| {
                self.bulletins
                    .iter()
                    .position(|queued| queued.priority > priority)
            });

        match slot {
            Some(index) => {
                self.bulletins.insert(index, bulletin);
                None
            }
            None => {
                let evicted = self.pop();
                self.bulletins.push(bulletin);
                evicted
            }
        }
    }

    /// Removes and returns the top bulletin.
    pub fn pop(&mut self) -> Option<Bulletin<T>> {
        self.bulletins.pop()
    }

    /// Returns the top bulletin without removing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Bulletin<T>> {
        self.bulletins.last()
    }

    /// Removes a bulletin wherever it sits in the queue.
    pub fn remove(&mut self, id: BulletinId) -> Option<Bulletin<T>> {
        let index = self.bulletins.iter().position(|b| b.id() == id)?;
        Some(self.bulletins.remove(index))
    }

    /// Returns whether a bulletin with the given ID is queued.
    #[must_use]
    pub fn contains(&self, id: BulletinId) -> bool {
        self.bulletins.iter().any(|b| b.id() == id)
    }

    /// Iterates from bottom (shows last) to top (shows first).
    pub fn iter(&self) -> impl Iterator<Item = &Bulletin<T>> {
        self.bulletins.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bulletins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bulletins.is_empty()
    }

    /// Drops every queued bulletin.
    pub fn clear(&mut self) {
        self.bulletins.clear();
    }
}

impl<T> fmt::Display for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bulletins.is_empty() {
            return write!(f, "<BulletinQueue - 0 elements>");
        }

        let tags: Vec<String> = self
            .bulletins
            .iter()
            .map(|b| b.priority.tag().to_string())
            .collect();
        write!(
            f,
            "<BulletinQueue: {} element(s), [{}]>",
            self.bulletins.len(),
            tags.join(", ")
        )
    }
}
