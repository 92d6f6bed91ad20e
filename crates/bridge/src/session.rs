//! Single-slot conversion session.
//!
//! A [`Session`] owns one logical output slot. Each request bumps a shared
//! generation counter and carries a [`Ticket`] stamped with the generation it
//! was issued under; a later request supersedes every earlier ticket at once.
//! Superseded work is abandoned at the next stage boundary and its output is
//! never delivered.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::convert::convert_cancellable;
use crate::options::{ConvertMode, ConvertOptions};

#[derive(Debug, Default)]
pub struct Session {
    generation: Arc<AtomicU64>,
}

/// Cancellation token for one conversion request.
#[derive(Debug, Clone)]
pub struct Ticket {
    issued: u64,
    generation: Arc<AtomicU64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a new request, superseding all earlier tickets.
    pub fn begin(&self) -> Ticket {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            issued,
            generation: Arc::clone(&self.generation),
        }
    }

    /// Runs a conversion on a worker thread. `deliver` is called with the
    /// output only if the request is still current when the pipeline
    /// finishes; superseded requests complete silently.
    pub fn spawn<F>(
        &self,
        input: String,
        mode: ConvertMode,
        options: ConvertOptions,
        deliver: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(String) + Send + 'static,
    {
        let ticket = self.begin();
        thread::spawn(move || {
            match convert_cancellable(&input, mode, options, Some(&ticket)) {
                Some(output) => deliver(output),
                None => log::debug!("conversion superseded, output discarded"),
            }
        })
    }
}

impl Ticket {
    /// True once a newer request has been issued on the same session.
    pub fn is_superseded(&self) -> bool {
        self.generation.load(Ordering::SeqCst) != self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn fresh_ticket_is_current() {
        let session = Session::new();
        let ticket = session.begin();
        assert!(!ticket.is_superseded());
    }

    #[test]
    fn newer_request_supersedes_older_tickets() {
        let session = Session::new();
        let first = session.begin();
        let second = session.begin();
        assert!(first.is_superseded());
        assert!(!second.is_superseded());

        let third = session.begin();
        assert!(second.is_superseded());
        assert!(!third.is_superseded());
    }

    #[test]
    fn sessions_are_independent() {
        let a = Session::new();
        let b = Session::new();
        let ticket = a.begin();
        b.begin();
        assert!(!ticket.is_superseded());
    }

    #[test]
    fn current_request_delivers_output() {
        let session = Session::new();
        let (tx, rx) = mpsc::channel();
        let handle = session.spawn(
            r#"{"a":1}"#.to_string(),
            ConvertMode::JsonToMsgpackBase64,
            ConvertOptions::default(),
            move |output| tx.send(output).unwrap(),
        );
        handle.join().unwrap();
        assert_eq!(rx.recv().unwrap(), "gaFhAQ==");
    }

    #[test]
    fn superseded_request_is_discarded() {
        let session = Session::new();
        let ticket = session.begin();
        // A newer request lands before this one starts.
        session.begin();
        let result = convert_cancellable(
            r#"{"a":1}"#,
            ConvertMode::JsonToMsgpackBase64,
            ConvertOptions::default(),
            Some(&ticket),
        );
        assert_eq!(result, None);
    }
}
