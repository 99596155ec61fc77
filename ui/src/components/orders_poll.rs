use chrono::Utc;
use dioxus::prelude::*;
use futures::{FutureExt, StreamExt};

use edo_common::board::OrderBoard;

use super::api_client;
use super::session_store::{use_session, SessionStore};

/// One fetch cycle: ask the backend for the caller's order scope and fold
/// the outcome into the board. The response is adopted verbatim; scoping
/// and filtering are the server's job.
async fn refresh_board(session: Signal<SessionStore>, mut board: Signal<OrderBoard>) {
    let current = session.peek().session.clone();
    let Some(current) = current else { return };
    let result = api_client::get_orders(&current).await;
    if let Err(error) = &result {
        tracing::warn!("order fetch failed: {error}");
    }
    board.write().apply_fetch(result.map(|r| r.orders), Utc::now());
}

/// Keep `board` eventually consistent with backend state: fetch immediately
/// on mount, then re-fetch unconditionally every polling period. Failures
/// leave the last snapshot rendered and never stop the schedule; the
/// cadence itself is the retry mechanism.
///
/// Send `()` to the returned handle to cut the current sleep short and
/// re-fetch at once (after creating or advancing an order). Cycles are
/// sequential within the loop; a forced refresh that overlaps an in-flight
/// response resolves last-write-wins.
pub fn use_orders_poller(board: Signal<OrderBoard>) -> Coroutine<()> {
    let session = use_session();
    use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        loop {
            refresh_board(session, board).await;

            let delay = api_client::poll_delay().fuse();
            futures::pin_mut!(delay);
            futures::select! {
                _ = rx.next() => {}
                _ = delay => {}
            }
        }
    })
}
