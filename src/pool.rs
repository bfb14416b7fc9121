//! A fixed-size worker pool for fire-and-forget jobs.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

type Job = Box<dyn FnOnce() + Send + 'static>;

struct State {
    jobs: VecDeque<Job>,
    stop: bool,
}

struct Shared {
    state: Mutex<State>,
    available: Condvar,
}

/// A pool of worker threads consuming a shared job queue.
///
/// Dropping the pool stops the workers, but only after the queue drains;
/// every submitted job runs.
pub struct Pool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl Pool {
    /// Spawn a pool of `size` workers.  A `size` of `0` falls back to the
    /// available hardware parallelism (or `2` when that is unknown).
    pub fn new(size: usize) -> Self {
        let size = if size == 0 {
            thread::available_parallelism().map(|n| n.get()).unwrap_or(2)
        } else {
            size
        };
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                jobs: VecDeque::default(),
                stop: false,
            }),
            available: Condvar::new(),
        });
        let workers = (0..size)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || worker_loop(shared))
            })
            .collect();

        Self { shared, workers }
    }

    /// Queue a job for the next free worker.
    pub fn submit(&self, job: impl FnOnce() + Send + 'static) {
        let mut state = self
            .shared
            .state
            .lock()
            .expect("internal error - pool state poisoned");
        state.jobs.push_back(Box::new(job));
        self.shared.available.notify_one();
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        {
            let mut state = self
                .shared
                .state
                .lock()
                .expect("internal error - pool state poisoned");
            state.stop = true;
        }
        self.shared.available.notify_all();

        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

fn worker_loop(shared: Arc<Shared>) {
    loop {
        let job = {
            let mut state = shared
                .state
                .lock()
                .expect("internal error - pool state poisoned");

            while state.jobs.is_empty() && !state.stop {
                state = shared
                    .available
                    .wait(state)
                    .expect("internal error - pool state poisoned");
            }

            match state.jobs.pop_front() {
                Some(job) => job,
                None => return,
            }
        };
        job();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn runs_submitted_jobs() {
        let counter = Arc::new(AtomicUsize::new(0));

        {
            let pool = Pool::new(4);

            for _ in 0..100 {
                let counter = Arc::clone(&counter);
                pool.submit(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                });
            }
        }

        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn drains_queue_on_drop() {
        let counter = Arc::new(AtomicUsize::new(0));

        {
            let pool = Pool::new(1);

            for _ in 0..10 {
                let counter = Arc::clone(&counter);
                pool.submit(move || {
                    thread::sleep(Duration::from_millis(1));
                    counter.fetch_add(1, Ordering::SeqCst);
                });
            }
        }

        // The single worker cannot have kept up; drop waits for the rest.
        assert_eq!(counter.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn zero_size_falls_back() {
        let counter = Arc::new(AtomicUsize::new(0));

        {
            let pool = Pool::new(0);
            let counter = Arc::clone(&counter);
            pool.submit(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
