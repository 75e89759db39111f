//! Background search with a single-slot result channel.

use std::thread::{self, JoinHandle};

use chess_core::{GameState, Move, SearchResult};
use crossbeam_channel::{bounded, Receiver};

use crate::search::{find_best_move, SearchConfig};

/// A search running on its own thread. It delivers exactly one
/// [`SearchResult`] and cannot be interrupted; dropping the handle just
/// discards the result once the worker finishes.
pub struct SearchHandle {
    rx: Receiver<SearchResult>,
    worker: Option<JoinHandle<()>>,
}

impl SearchHandle {
    /// The result if the search has finished, without blocking.
    pub fn try_result(&self) -> Option<SearchResult> {
        self.rx.try_recv().ok()
    }

    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().is_none_or(|w| w.is_finished())
    }

    /// Block until the search completes.
    ///
    /// Returns `None` if the result was already taken through
    /// [`SearchHandle::try_result`] or the worker panicked.
    pub fn wait(mut self) -> Option<SearchResult> {
        let result = self.rx.recv().ok();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        result
    }
}

/// Start `find_best_move` on a worker thread. The worker owns its copy of the
/// position, so the caller keeps full use of its own state meanwhile.
pub fn spawn_search(state: GameState, valid_moves: Vec<Move>, config: SearchConfig) -> SearchHandle {
    let (tx, rx) = bounded(1);
    let worker = thread::spawn(move || {
        let result = find_best_move(&state, &valid_moves, &config);
        // The receiver may already be gone; the result is simply dropped then
        let _ = tx.send(result);
    });
    SearchHandle {
        rx,
        worker: Some(worker),
    }
}

#[cfg(test)]
#[path = "handoff_tests.rs"]
mod handoff_tests;
