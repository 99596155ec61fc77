use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money;

/// Unique order identifier, assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    /// Shortened form for display, e.g. `#a1b2c3d4`.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

/// Order lifecycle status. The backend is the only writer; clients never
/// invent a status value locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Received,
    WaitingKitchen,
    Cooking,
    WaitingPackaging,
    Packaged,
    WaitingDelivery,
    Delivered,
}

impl OrderStatus {
    /// The staff step out of this status: resulting status plus the action
    /// button label. `None` for statuses that are not awaiting staff.
    pub fn staff_step(self) -> Option<(OrderStatus, &'static str)> {
        match self {
            OrderStatus::WaitingKitchen => Some((OrderStatus::Cooking, "Iniciar Cocina")),
            OrderStatus::WaitingPackaging => Some((OrderStatus::Packaged, "Empaquetar")),
            OrderStatus::WaitingDelivery => Some((OrderStatus::Delivered, "Entregar")),
            OrderStatus::Received
            | OrderStatus::Cooking
            | OrderStatus::Packaged
            | OrderStatus::Delivered => None,
        }
    }

    /// The status this one advances to, if a staff step exists.
    pub fn next_step(self) -> Option<OrderStatus> {
        self.staff_step().map(|(next, _)| next)
    }

    /// `Delivered` is terminal: no transition out of it is ever offered.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Customer-facing label.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Received => "Recibido",
            OrderStatus::WaitingKitchen => "Esperando Cocina",
            OrderStatus::Cooking => "Cocinando",
            OrderStatus::WaitingPackaging => "Esperando Empaquetado",
            OrderStatus::Packaged => "Empaquetado",
            OrderStatus::WaitingDelivery => "Esperando Delivery",
            OrderStatus::Delivered => "Entregado",
        }
    }

    /// CSS class for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            OrderStatus::Received => "badge badge-received",
            OrderStatus::WaitingKitchen
            | OrderStatus::WaitingPackaging
            | OrderStatus::WaitingDelivery => "badge badge-waiting",
            OrderStatus::Cooking => "badge badge-cooking",
            OrderStatus::Packaged => "badge badge-packaged",
            OrderStatus::Delivered => "badge badge-delivered",
        }
    }
}

/// One customer transaction as reported by the backend.
///
/// `task_token` is an opaque, step-scoped capability: present only while the
/// order awaits a staff action, handed back verbatim on advance, never
/// parsed or inspected client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub tenant_id: String,
    pub status: OrderStatus,
    #[serde(with = "money::soles_wire")]
    pub total: u64,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_token: Option<String>,
}

/// A staff action offered for an order: the target status, the token to hand
/// back, and the button label.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvanceAction {
    pub next: OrderStatus,
    pub task_token: String,
    pub label: &'static str,
}

impl Order {
    /// The advance affordance for this order, offered if and only if the
    /// status is awaiting a staff step AND a task token is attached. Orders
    /// failing either condition render read-only.
    pub fn advance_action(&self) -> Option<AdvanceAction> {
        let (next, label) = self.status.staff_step()?;
        let task_token = self.task_token.clone()?;
        Some(AdvanceAction {
            next,
            task_token,
            label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: OrderStatus, task_token: Option<&str>) -> Order {
        Order {
            order_id: OrderId("7c9e6679-7425-40de-944b-e07fc1f90ae7".into()),
            tenant_id: "edo-lima".into(),
            status,
            total: 4800,
            customer_email: Some("cliente@mail.com".into()),
            created_at: Utc::now(),
            task_token: task_token.map(str::to_string),
        }
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(
            OrderStatus::WaitingKitchen.next_step(),
            Some(OrderStatus::Cooking)
        );
        assert_eq!(
            OrderStatus::WaitingPackaging.next_step(),
            Some(OrderStatus::Packaged)
        );
        assert_eq!(
            OrderStatus::WaitingDelivery.next_step(),
            Some(OrderStatus::Delivered)
        );

        assert_eq!(OrderStatus::Received.next_step(), None);
        assert_eq!(OrderStatus::Cooking.next_step(), None);
        assert_eq!(OrderStatus::Packaged.next_step(), None);
        assert_eq!(OrderStatus::Delivered.next_step(), None);
        assert!(OrderStatus::Delivered.is_terminal());
    }

    #[test]
    fn test_affordance_requires_waiting_status_and_token() {
        // Waiting status + token → offered.
        let action = order(OrderStatus::WaitingDelivery, Some("tok-1"))
            .advance_action()
            .expect("affordance offered");
        assert_eq!(action.next, OrderStatus::Delivered);
        assert_eq!(action.task_token, "tok-1");
        assert_eq!(action.label, "Entregar");

        // Waiting status without a token → read-only.
        assert_eq!(order(OrderStatus::WaitingKitchen, None).advance_action(), None);

        // Token on a non-waiting status → read-only.
        assert_eq!(
            order(OrderStatus::Cooking, Some("stale")).advance_action(),
            None
        );
        assert_eq!(
            order(OrderStatus::Delivered, Some("stale")).advance_action(),
            None
        );
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::WaitingKitchen).unwrap(),
            "\"WAITING_KITCHEN\""
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"DELIVERED\"").unwrap(),
            OrderStatus::Delivered
        );
        // The enumeration is closed: unknown wire statuses fail to decode.
        assert!(serde_json::from_str::<OrderStatus>("\"REFUNDED\"").is_err());
    }

    #[test]
    fn test_order_decodes_backend_shape() {
        let json = r#"{
            "tenant_id": "edo-lima",
            "order_id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "customer_email": "cliente@mail.com",
            "items": [{"name": "Gyoza", "quantity": 1, "price": 12.0}],
            "total": 48.0,
            "status": "WAITING_KITCHEN",
            "created_at": 1700000000000,
            "updated_at": 1700000000000,
            "task_token": "AAAAKg=="
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::WaitingKitchen);
        assert_eq!(order.total, 4800);
        assert_eq!(order.task_token.as_deref(), Some("AAAAKg=="));
        assert_eq!(order.created_at.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(order.order_id.short(), "7c9e6679");

        // task_token absent once no step is pending.
        let json = r#"{
            "tenant_id": "edo-lima",
            "order_id": "x",
            "total": 12.0,
            "status": "COOKING",
            "created_at": 1700000000000
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.task_token, None);
        assert_eq!(order.customer_email, None);
        assert_eq!(order.advance_action(), None);
    }

    #[test]
    fn test_labels_cover_every_status() {
        for status in [
            OrderStatus::Received,
            OrderStatus::WaitingKitchen,
            OrderStatus::Cooking,
            OrderStatus::WaitingPackaging,
            OrderStatus::Packaged,
            OrderStatus::WaitingDelivery,
            OrderStatus::Delivered,
        ] {
            assert!(!status.label().is_empty());
            assert!(status.badge_class().starts_with("badge"));
        }
    }
}
