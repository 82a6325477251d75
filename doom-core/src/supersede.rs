//! Tickets for discarding responses to superseded requests.
//!
//! Every request takes a [`Ticket`] from a shared [`RequestSequence`]. Starting
//! another request on the same sequence makes all earlier tickets stale, and
//! a response is applied only while its ticket is still current. Whichever
//! response resolves last, the state always reflects the newest request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct Ticket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request, superseding all earlier ones.
    pub fn begin(&self) -> Ticket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            id,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Make every outstanding ticket stale without starting a request.
    pub fn cancel_all(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

/// A finished request checked against its ticket.
#[derive(Debug, PartialEq)]
pub enum Settled<T, E> {
    Applied(T),
    Failed(E),
    /// A newer request started, or the sequence was cancelled.
    Superseded,
}

impl Ticket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }

    /// Pass the result through while the ticket is current, success or not.
    pub fn settle<T, E>(&self, result: std::result::Result<T, E>) -> Settled<T, E> {
        if !self.is_current() {
            return Settled::Superseded;
        }
        match result {
            Ok(value) => Settled::Applied(value),
            Err(e) => Settled::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_the_newest_ticket_is_current() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        assert!(first.is_current());
        let second = seq.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_late_response_of_stale_request_is_dropped() {
        let seq = RequestSequence::new();
        let mut applied = Vec::new();
        let slow = seq.begin();
        let fast = seq.begin();
        // fast resolves first, slow resolves last
        for (ticket, value) in [(&fast, "abcd"), (&slow, "abc")] {
            if ticket.is_current() {
                applied.push(value);
            }
        }
        assert_eq!(applied, vec!["abcd"]);
    }

    #[test]
    fn test_cancel_all_stales_outstanding_tickets() {
        let seq = RequestSequence::new();
        let ticket = seq.begin();
        seq.cancel_all();
        assert!(!ticket.is_current());
        assert!(seq.begin().is_current());
    }

    #[test]
    fn test_late_reply_to_earlier_question_is_superseded() {
        let chats = RequestSequence::new();
        let first = chats.begin();
        let second = chats.begin();
        // second answers first, first answers last
        assert_eq!(
            second.settle::<_, String>(Ok("answer 2")),
            Settled::Applied("answer 2")
        );
        assert_eq!(first.settle::<_, String>(Ok("answer 1")), Settled::Superseded);
    }

    #[test]
    fn test_cancelled_failure_is_superseded() {
        let chats = RequestSequence::new();
        let ticket = chats.begin();
        assert_eq!(
            ticket.settle::<(), _>(Err("timeout")),
            Settled::Failed("timeout")
        );
        chats.cancel_all();
        assert_eq!(ticket.settle::<(), _>(Err("timeout")), Settled::Superseded);
    }

    #[test]
    fn test_clones_share_the_sequence() {
        let seq = RequestSequence::new();
        let other = seq.clone();
        let ticket = seq.begin();
        other.begin();
        assert!(!ticket.is_current());
    }
}
