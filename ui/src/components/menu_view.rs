use dioxus::prelude::*;

use edo_common::api::{CreateOrderRequest, CustomerInfo};
use edo_common::board::OrderBoard;
use edo_common::cart::Cart;
use edo_common::menu::menu_items;
use edo_common::money::format_soles;

use super::api_client;
use super::orders_poll::use_orders_poller;
use super::session_store::use_session;

#[derive(Clone, PartialEq)]
enum Flash {
    Success(String),
    Error(String),
}

/// Customer view: the menu, the cart, and the customer's own orders kept
/// fresh by polling.
#[component]
pub fn MenuView() -> Element {
    let session = use_session();
    let mut cart = use_signal(Cart::new);
    let board = use_signal(OrderBoard::new);
    let mut flash = use_signal(|| None::<Flash>);

    let poller = use_orders_poller(board);

    let place_order = move |_| {
        let Some(current) = session.read().session.clone() else {
            return;
        };
        let items = cart.read().order_items();
        let total = cart.read().total();
        if items.is_empty() {
            return;
        }

        spawn(async move {
            let request = CreateOrderRequest {
                tenant_id: current.tenant_id.clone(),
                items,
                total,
                customer_info: CustomerInfo {
                    name: current.display_name().to_string(),
                    email: current.email.clone(),
                },
            };
            match api_client::create_order(&current, &request).await {
                Ok(resp) => {
                    flash.set(Some(Flash::Success(format!(
                        "Pedido #{} creado exitosamente!",
                        resp.order_id.short()
                    ))));
                    // Cleared only once the backend confirmed the order.
                    cart.write().clear();
                    poller.send(());
                    api_client::delay_ms(3_000).await;
                    flash.set(None);
                }
                Err(error) => {
                    // Cart left intact so the customer can retry.
                    flash.set(Some(Flash::Error(format!(
                        "Error al crear pedido: {error}"
                    ))));
                }
            }
        });
    };

    let cart_entries = cart.read().entries().to_vec();
    let cart_total = format_soles(cart.read().total());
    let orders = board.read().orders().to_vec();
    let poll_error = board.read().last_error().map(str::to_string);

    rsx! {
        div { class: "menu-page",
            {match flash.read().as_ref() {
                Some(Flash::Success(msg)) => rsx! {
                    div { class: "alert alert-success", "✓ {msg}" }
                },
                Some(Flash::Error(msg)) => rsx! {
                    div { class: "alert alert-error", "✗ {msg}" }
                },
                None => rsx! {},
            }}

            div { class: "menu-layout",
                section { class: "menu-section",
                    h2 { "Nuestra Carta" }
                    div { class: "menu-grid",
                        {menu_items().into_iter().map(|item| {
                            let id = item.id;
                            let name = item.name.clone();
                            let description = item.description.clone();
                            let price_str = format_soles(item.price);
                            rsx! {
                                div { class: "menu-item", key: "{id}",
                                    div { class: "menu-item-name", "{name}" }
                                    div { class: "menu-item-description", "{description}" }
                                    div { class: "menu-item-price", "{price_str}" }
                                    button {
                                        class: "btn btn-primary btn-sm",
                                        onclick: move |_| cart.write().add(&item),
                                        "Agregar al carrito"
                                    }
                                }
                            }
                        })}
                    }
                }

                aside { class: "cart-section",
                    h2 { "Tu Pedido" }
                    if cart_entries.is_empty() {
                        p { class: "empty-state", "Tu carrito está vacío" }
                    } else {
                        div { class: "cart-items",
                            {cart_entries.iter().map(|entry| {
                                let id = entry.item.id;
                                let name = entry.item.name.clone();
                                let unit_str = format_soles(entry.item.price);
                                let line_str = format_soles(entry.line_total());
                                rsx! {
                                    div { class: "cart-item", key: "{id}",
                                        div { class: "cart-item-info",
                                            div { class: "cart-item-name", "{name}" }
                                            div { class: "cart-item-quantity",
                                                button {
                                                    class: "btn btn-sm",
                                                    onclick: move |_| cart.write().change_quantity(id, -1),
                                                    "-"
                                                }
                                                span { "{entry.quantity}x {unit_str}" }
                                                button {
                                                    class: "btn btn-sm",
                                                    onclick: move |_| cart.write().change_quantity(id, 1),
                                                    "+"
                                                }
                                            }
                                        }
                                        div { class: "cart-item-line",
                                            strong { "{line_str}" }
                                            button {
                                                class: "btn btn-secondary btn-sm",
                                                onclick: move |_| cart.write().remove(id),
                                                "✕"
                                            }
                                        }
                                    }
                                }
                            })}
                        }
                        div { class: "cart-footer",
                            div { class: "cart-total",
                                span { "Total:" }
                                strong { "{cart_total}" }
                            }
                            button {
                                class: "btn btn-primary",
                                onclick: place_order,
                                "Realizar Pedido"
                            }
                        }
                    }
                }
            }

            section { class: "my-orders-section",
                h2 { "Mis Pedidos" }
                if let Some(err) = poll_error {
                    p { class: "poll-error", "No se pudo actualizar: {err}" }
                }
                if orders.is_empty() {
                    p { class: "empty-state", "No tienes pedidos activos" }
                } else {
                    div { class: "order-list",
                        {orders.iter().map(|order| {
                            let card_key = order.order_id.0.clone();
                            let short = order.order_id.short().to_string();
                            let when = order.created_at.format("%d/%m/%Y %H:%M").to_string();
                            let total_str = format_soles(order.total);
                            let badge_class = order.status.badge_class();
                            let status_label = order.status.label();
                            rsx! {
                                div { class: "order-card", key: "{card_key}",
                                    div { class: "order-header",
                                        strong { "Pedido #{short}" }
                                        span { class: "{badge_class}", "{status_label}" }
                                    }
                                    div { class: "order-meta", "{when}" }
                                    div { class: "order-total", "Total: {total_str}" }
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
