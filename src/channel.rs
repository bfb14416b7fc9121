//! A minimal blocking single-producer/single-consumer channel.
//!
//! Unlike `std::sync::mpsc`, neither end is cloneable and closure is a
//! first-class operation: either side may [`close`](Sender::close) the
//! channel, and dropping an end closes it too.  A closed channel still
//! drains; the receiver keeps yielding queued items and only then reports
//! the closure.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};

struct State<T> {
    queue: VecDeque<T>,
    closed: bool,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    available: Condvar,
}

impl<T> Shared<T> {
    fn close(&self) -> bool {
        let mut state = self.state.lock().expect("internal error - channel state poisoned");

        if state.closed {
            return false;
        }

        state.closed = true;
        self.available.notify_one();
        true
    }
}

/// Create a connected sender/receiver pair.
pub fn channel<T>() -> (Sender<T>, Receiver<T>) {
    let shared = Arc::new(Shared {
        state: Mutex::new(State {
            queue: VecDeque::default(),
            closed: false,
        }),
        available: Condvar::new(),
    });
    (
        Sender {
            shared: Arc::clone(&shared),
        },
        Receiver { shared },
    )
}

/// The producing end.  Dropping it closes the channel.
pub struct Sender<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Sender<T> {
    /// Queue an item, waking the receiver.  Returns `false` once the
    /// channel is closed.
    pub fn send(&self, item: T) -> bool {
        let mut state = self
            .shared
            .state
            .lock()
            .expect("internal error - channel state poisoned");

        if state.closed {
            return false;
        }

        state.queue.push_back(item);
        self.shared.available.notify_one();
        true
    }

    /// Close the channel.  Returns `false` if it was already closed.
    pub fn close(&self) -> bool {
        self.shared.close()
    }
}

impl<T> Drop for Sender<T> {
    fn drop(&mut self) {
        self.shared.close();
    }
}

/// The consuming end.  Dropping it closes the channel.
pub struct Receiver<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Receiver<T> {
    /// Take the next item, blocking while the channel is open and empty.
    ///
    /// Returns `None` only once the channel is closed and drained.
    pub fn recv(&self) -> Option<T> {
        let mut state = self
            .shared
            .state
            .lock()
            .expect("internal error - channel state poisoned");

        while state.queue.is_empty() && !state.closed {
            state = self
                .shared
                .available
                .wait(state)
                .expect("internal error - channel state poisoned");
        }

        state.queue.pop_front()
    }

    /// Close the channel.  Returns `false` if it was already closed.
    pub fn close(&self) -> bool {
        self.shared.close()
    }
}

impl<T> Drop for Receiver<T> {
    fn drop(&mut self) {
        self.shared.close();
    }
}
