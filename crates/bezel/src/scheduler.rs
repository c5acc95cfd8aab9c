//! Cooperative task scheduler modeling the host runtime's event loop.
//!
//! Everything in bezel runs on a single control thread interleaved with the
//! host runtime. Work that must happen *after* the current synchronous turn —
//! attribute-mutation batch delivery, deferred unmounts, the manifest-fetch
//! continuation — is queued here and runs when the host drains the queue.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// A single-threaded FIFO task queue, shared by `Rc`.
#[derive(Default)]
pub struct Scheduler {
    queue: RefCell<VecDeque<Task>>,
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Queue a task to run after the current synchronous turn.
    pub fn schedule(&self, task: impl FnOnce() + 'static) {
        self.queue.borrow_mut().push_back(Box::new(task));
    }

    /// Number of queued tasks.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run queued tasks until the queue is empty. Tasks may schedule further
    /// tasks; those run within the same drain.
    pub fn run_until_idle(&self) {
        loop {
            let task = self.queue.borrow_mut().pop_front();
            match task {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.pending())
            .finish()
    }
}
