//! Registry of the scroll containers whose `scroll` events trigger visibility detection.
//!
//! Scroll events do not bubble, so every scroll container clipping a tracked element needs a
//! listener of its own. The registry counts how many tracked items depend on each container and
//! keeps exactly one listener per container.

use crate::prelude::*;

use crate::environment::Environment;

use std::mem;



// =============
// === Entry ===
// =============

#[derive(Clone,Debug)]
struct Entry<Element> {
    element : Element,
    users   : usize,
}



// ======================
// === ScrollRegistry ===
// ======================

/// Reference-counted set of watched scroll containers.
#[derive(Debug)]
pub struct ScrollRegistry<Element> {
    logger  : Logger,
    prune   : bool,
    entries : Vec<Entry<Element>>,
}

impl<Element:Clone+Debug+PartialEq> ScrollRegistry<Element> {
    /// Constructor. With `prune` set, containers nobody depends on are unwatched; otherwise the
    /// registry only grows.
    pub fn new(parent:impl AnyLogger, prune:bool) -> Self {
        let logger  = Logger::sub(parent,"ScrollRegistry");
        let entries = default();
        Self {logger,prune,entries}
    }

    /// Makes sure the scroll events of the container are watched and records one more user.
    pub fn ensure_scroll_listener_registered<Env>(&mut self, env:&Env, element:&Element)
    where Env:Environment<Element=Element> {
        match self.entries.iter_mut().find(|entry| &entry.element == element) {
            Some(entry) => entry.users += 1,
            None        => {
                logger::debug!(self.logger,"Watching scroll events of {element:?}.");
                env.watch_scroll(element);
                self.entries.push(Entry {element:element.clone(),users:1});
            }
        }
    }

    /// Records one user less of the container. Unwatches it when that was the last user and
    /// pruning is enabled.
    pub fn release<Env>(&mut self, env:&Env, element:&Element)
    where Env:Environment<Element=Element> {
        let position = self.entries.iter().position(|entry| &entry.element == element);
        if let Some(index) = position {
            let entry = &mut self.entries[index];
            entry.users = entry.users.saturating_sub(1);
            if entry.users == 0 && self.prune {
                logger::debug!(self.logger,"Unwatching scroll events of {element:?}.");
                env.unwatch_scroll(element);
                self.entries.remove(index);
            }
        }
    }

    /// Registers every container of the chain.
    pub fn acquire_all<Env>(&mut self, env:&Env, elements:&[Element])
    where Env:Environment<Element=Element> {
        for element in elements {
            self.ensure_scroll_listener_registered(env,element)
        }
    }

    /// Releases every container of the chain.
    pub fn release_all<Env>(&mut self, env:&Env, elements:&[Element])
    where Env:Environment<Element=Element> {
        for element in elements {
            self.release(env,element)
        }
    }

    /// Unwatches every container regardless of its users.
    pub fn clear<Env>(&mut self, env:&Env)
    where Env:Environment<Element=Element> {
        for entry in mem::take(&mut self.entries) {
            env.unwatch_scroll(&entry.element);
        }
    }

    /// Checks whether the container's scroll events are watched.
    pub fn contains(&self, element:&Element) -> bool {
        self.entries.iter().any(|entry| &entry.element == element)
    }

    /// Number of watched containers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether no container is watched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}



// =============
// === Tests ===
// =============
