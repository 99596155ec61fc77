use chrono::{DateTime, Utc};

use crate::api::ApiError;
use crate::order::{Order, OrderStatus};

/// Fixed period between automatic re-fetches of order state.
pub const POLL_INTERVAL_MS: u32 = 5_000;

/// The last rendered snapshot of the order collection for one view.
///
/// Each successful fetch replaces the collection wholesale: exactly what the
/// backend returned, with no client-side merging or ownership filtering. A
/// failed fetch keeps the previous snapshot visible and records a transient
/// error; the regular polling cadence is the retry mechanism.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBoard {
    orders: Vec<Order>,
    last_updated: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

/// Counts derived from a single snapshot, never mixed across fetch cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// When the currently rendered snapshot was fetched. Unset until the
    /// first successful fetch.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fold one fetch cycle's outcome into the board.
    pub fn apply_fetch(&mut self, result: Result<Vec<Order>, ApiError>, now: DateTime<Utc>) {
        match result {
            Ok(orders) => {
                self.orders = orders;
                self.last_updated = Some(now);
                self.last_error = None;
            }
            Err(error) => {
                // Last known collection stays visible; only the indicator
                // changes.
                self.last_error = Some(error.to_string());
            }
        }
    }

    /// Dashboard statistics over the current snapshot.
    pub fn stats(&self) -> BoardStats {
        let total = self.orders.len();
        let completed = self
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered)
            .count();
        BoardStats {
            total,
            pending: total - completed,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderId;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            order_id: OrderId(id.into()),
            tenant_id: "edo-lima".into(),
            status,
            total: 4800,
            customer_email: Some("cliente@mail.com".into()),
            created_at: Utc::now(),
            task_token: None,
        }
    }

    #[test]
    fn test_successful_fetch_replaces_the_snapshot() {
        let mut board = OrderBoard::new();
        let now = Utc::now();

        board.apply_fetch(Ok(vec![order("a", OrderStatus::Received)]), now);
        assert_eq!(board.orders().len(), 1);
        assert_eq!(board.last_updated(), Some(now));

        // The next cycle's result is adopted verbatim, including orders
        // disappearing; no merging with the previous snapshot.
        let later = now + chrono::Duration::seconds(5);
        board.apply_fetch(Ok(vec![order("b", OrderStatus::Cooking)]), later);
        assert_eq!(board.orders().len(), 1);
        assert_eq!(board.orders()[0].order_id, OrderId("b".into()));
        assert_eq!(board.last_updated(), Some(later));
    }

    #[test]
    fn test_failed_fetch_keeps_last_snapshot_visible() {
        let mut board = OrderBoard::new();
        let now = Utc::now();
        board.apply_fetch(
            Ok(vec![
                order("a", OrderStatus::WaitingKitchen),
                order("b", OrderStatus::Delivered),
            ]),
            now,
        );

        board.apply_fetch(
            Err(ApiError::Network("fetch failed".into())),
            now + chrono::Duration::seconds(5),
        );
        assert_eq!(board.orders().len(), 2);
        assert_eq!(board.last_updated(), Some(now));
        assert!(board.last_error().is_some());

        // A later success clears the indicator.
        board.apply_fetch(Ok(vec![]), now + chrono::Duration::seconds(10));
        assert_eq!(board.last_error(), None);
    }

    #[test]
    fn test_stats_come_from_one_snapshot() {
        let mut board = OrderBoard::new();
        board.apply_fetch(
            Ok(vec![
                order("a", OrderStatus::Received),
                order("b", OrderStatus::Cooking),
                order("c", OrderStatus::Delivered),
            ]),
            Utc::now(),
        );
        let stats = board.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.completed, 1);

        // A failed refresh leaves the stats on the rendered snapshot.
        board.apply_fetch(Err(ApiError::Network("down".into())), Utc::now());
        assert_eq!(board.stats(), stats);
    }

    #[test]
    fn test_empty_board_stats() {
        assert_eq!(
            OrderBoard::new().stats(),
            BoardStats {
                total: 0,
                pending: 0,
                completed: 0
            }
        );
    }
}
