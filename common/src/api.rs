//! Wire types for the order backend, plus the client-side error taxonomy.
//! Field names follow the backend's JSON contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money;
use crate::order::{Order, OrderId, OrderStatus};
use crate::session::Role;

/// Failures at the network boundary. All of them are recoverable: they are
/// converted into user-facing messages at the call site, never propagated as
/// faults that could take down a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("error de red: {0}")]
    Network(String),
    /// Non-success HTTP status; `message` comes from the response body when
    /// the backend provided one.
    #[error("{message}")]
    Status { code: u16, message: String },
    /// The response arrived but its body was not the expected shape.
    #[error("respuesta inválida del servidor: {0}")]
    Decode(String),
}

/// Error bodies carry `message` and/or `error` depending on the service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Extract the human-readable message from a non-success response body,
/// preferring `message`, then `error`, then the bare status code.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.filter(|m| !m.is_empty()) {
            return message;
        }
        if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
            return error;
        }
    }
    format!("HTTP {status}")
}

// ─── /auth/login ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    pub role: Role,
    pub tenant_id: String,
}

// ─── POST /orders ────────────────────────────────────────────────────────────

/// One order line as submitted at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price in céntimos; soles on the wire.
    #[serde(with = "money::soles_wire")]
    pub price: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub tenant_id: String,
    pub items: Vec<OrderItem>,
    /// Total in céntimos, fixed at submission time; soles on the wire.
    #[serde(with = "money::soles_wire")]
    pub total: u64,
    pub customer_info: CustomerInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub order_id: OrderId,
    pub status: OrderStatus,
}

// ─── GET /orders ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub count: Option<u32>,
}

// ─── POST /orders/advance ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct AdvanceRequest {
    pub order_id: OrderId,
    pub tenant_id: String,
    /// Opaque capability from the order, forwarded verbatim.
    pub task_token: String,
    pub step: OrderStatus,
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdvanceResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub order_id: OrderId,
    pub new_status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_message_then_error() {
        assert_eq!(
            error_message(401, r#"{"message": "Credenciales inválidas"}"#),
            "Credenciales inválidas"
        );
        assert_eq!(
            error_message(500, r#"{"error": "Error al crear pedido"}"#),
            "Error al crear pedido"
        );
        assert_eq!(
            error_message(403, r#"{"message": "Solo STAFF puede avanzar pedidos", "error": "forbidden"}"#),
            "Solo STAFF puede avanzar pedidos"
        );
        assert_eq!(error_message(502, "<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(error_message(400, "{}"), "HTTP 400");
    }

    #[test]
    fn test_create_order_request_wire_shape() {
        let request = CreateOrderRequest {
            tenant_id: "edo-lima".into(),
            items: vec![OrderItem {
                name: "Gyoza".into(),
                quantity: 1,
                price: 1200,
            }],
            total: 1200,
            customer_info: CustomerInfo {
                name: "cliente".into(),
                email: "cliente@mail.com".into(),
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["tenant_id"], "edo-lima");
        assert_eq!(value["items"][0]["price"], 12.0);
        assert_eq!(value["total"], 12.0);
        assert_eq!(value["customer_info"]["email"], "cliente@mail.com");
    }

    #[test]
    fn test_advance_request_carries_step_wire_name() {
        let request = AdvanceRequest {
            order_id: OrderId("abc".into()),
            tenant_id: "edo-lima".into(),
            task_token: "AAAAKg==".into(),
            step: OrderStatus::Delivered,
            notes: "Avanzado por mozo@edo.pe".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["step"], "DELIVERED");
        assert_eq!(value["task_token"], "AAAAKg==");
    }

    #[test]
    fn test_orders_response_tolerates_missing_fields() {
        let parsed: OrdersResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.orders.is_empty());
        assert_eq!(parsed.role, None);

        let parsed: OrdersResponse = serde_json::from_str(
            r#"{"orders": [], "role": "STAFF", "count": 0}"#,
        )
        .unwrap();
        assert_eq!(parsed.role, Some(Role::Staff));
        assert_eq!(parsed.count, Some(0));
    }
}
