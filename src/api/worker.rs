//! Background fetch worker.
//!
//! Runs one catalog request per short-lived thread and delivers a
//! single [`FetchOutcome`] over an mpsc channel. The TUI event loop
//! polls the receiver on its timer tick, keeping the UI responsive
//! while a request is in flight.
//!
//! There is no cancellation: a request superseded by a newer one still
//! completes and its outcome is still delivered and applied, in
//! whatever order the responses arrive.

use crate::api::CatalogClient;
use crate::state::{FetchOutcome, FetchRequest};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Spawn a background thread that performs `request` against `client`
/// and sends exactly one [`FetchOutcome`] on `tx`.
///
/// A closed receiver (application shutting down) is not an error; the
/// outcome is dropped silently.
pub fn spawn_fetch(
    client: Arc<dyn CatalogClient>,
    request: FetchRequest,
    tx: Sender<FetchOutcome>,
) {
    thread::spawn(move || {
        debug!(query = %request.query, page = request.page, "fetch started");
        let result = client.search(&request.query, request.page);
        if let Err(err) = &result {
            warn!(query = %request.query, page = request.page, %err, "fetch failed");
        }
        // Receiver may already be gone on shutdown.
        let _ = tx.send(FetchOutcome { request, result });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, FetchError};
    use crate::state::FetchMode;
    use std::sync::mpsc;
    use std::time::Duration;

    struct ScriptedClient {
        result: Result<Vec<Book>, FetchError>,
    }

    impl CatalogClient for ScriptedClient {
        fn search(&self, _query: &str, _page: u32) -> Result<Vec<Book>, FetchError> {
            self.result.clone()
        }
    }

    fn request() -> FetchRequest {
        FetchRequest {
            query: "dune".to_string(),
            page: 1,
            mode: FetchMode::Replace,
        }
    }

    #[test]
    fn delivers_success_outcome_with_original_request() {
        let client = Arc::new(ScriptedClient {
            result: Ok(vec![serde_json::from_str(r#"{"title":"Dune"}"#).unwrap()]),
        });
        let (tx, rx) = mpsc::channel();

        spawn_fetch(client, request(), tx);

        let outcome = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker should deliver an outcome");
        assert_eq!(outcome.request, request());
        assert_eq!(outcome.result.unwrap().len(), 1);
    }

    #[test]
    fn delivers_failure_outcome() {
        let client = Arc::new(ScriptedClient {
            result: Err(FetchError::Status { status: 500 }),
        });
        let (tx, rx) = mpsc::channel();

        spawn_fetch(client, request(), tx);

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome.result, Err(FetchError::Status { status: 500 }));
    }

    #[test]
    fn dropped_receiver_does_not_panic_worker() {
        let client = Arc::new(ScriptedClient {
            result: Ok(vec![]),
        });
        let (tx, rx) = mpsc::channel();
        drop(rx);

        spawn_fetch(client, request(), tx);
        // Nothing to assert beyond the absence of a panic; give the
        // thread a moment to run its send.
        thread::sleep(Duration::from_millis(50));
    }

    #[test]
    fn delivers_exactly_one_outcome_per_request() {
        let client = Arc::new(ScriptedClient {
            result: Ok(vec![]),
        });
        let (tx, rx) = mpsc::channel();

        spawn_fetch(client, request(), tx);

        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        // Sender was moved into the finished thread, so the channel
        // must now be disconnected rather than holding a second message.
        assert!(matches!(
            rx.recv_timeout(Duration::from_millis(100)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        ));
    }
}
