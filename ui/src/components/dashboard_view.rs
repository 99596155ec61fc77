use dioxus::prelude::*;

use edo_common::api::AdvanceRequest;
use edo_common::board::OrderBoard;
use edo_common::money::format_soles;

use super::api_client;
use super::orders_poll::use_orders_poller;
use super::session_store::use_session;

#[derive(Clone, PartialEq)]
enum Flash {
    Success(String),
    Error(String),
}

/// Staff view: every order in the tenant, statistics over the current
/// snapshot, and the advance button for orders awaiting a staff step.
#[component]
pub fn DashboardView() -> Element {
    let session = use_session();
    let board = use_signal(OrderBoard::new);
    let mut flash = use_signal(|| None::<Flash>);

    let poller = use_orders_poller(board);

    let snapshot = board.read();
    let stats = snapshot.stats();
    let orders = snapshot.orders().to_vec();
    let last_updated = snapshot
        .last_updated()
        .map(|t| t.format("%H:%M:%S").to_string());
    let poll_error = snapshot.last_error().map(str::to_string);
    drop(snapshot);

    rsx! {
        div { class: "dashboard-page",
            h2 { "Panel de Pedidos" }

            {match flash.read().as_ref() {
                Some(Flash::Success(msg)) => rsx! {
                    div { class: "alert alert-success", "✓ {msg}" }
                },
                Some(Flash::Error(msg)) => rsx! {
                    div { class: "alert alert-error", "✗ {msg}" }
                },
                None => rsx! {},
            }}
            if let Some(err) = poll_error {
                div { class: "alert alert-error", "✗ Error al cargar pedidos: {err}" }
            }

            div { class: "stats-row",
                div { class: "stat-card",
                    div { class: "stat-value", "{stats.total}" }
                    div { class: "stat-label", "Total Pedidos" }
                }
                div { class: "stat-card",
                    div { class: "stat-value", "{stats.pending}" }
                    div { class: "stat-label", "En Proceso" }
                }
                div { class: "stat-card",
                    div { class: "stat-value", "{stats.completed}" }
                    div { class: "stat-label", "Completados" }
                }
            }
            if let Some(at) = last_updated {
                p { class: "last-update", "Última actualización: {at}" }
            }

            table { class: "orders-table",
                thead {
                    tr {
                        th { "Pedido" }
                        th { "Cliente" }
                        th { "Fecha" }
                        th { "Total" }
                        th { "Estado" }
                        th { "Acción" }
                    }
                }
                tbody {
                    if orders.is_empty() {
                        tr {
                            td { colspan: "6", class: "empty-state", "No hay pedidos activos" }
                        }
                    } else {
                        {orders.iter().map(|order| {
                            let row_key = order.order_id.0.clone();
                            let short = order.order_id.short().to_string();
                            let customer = order
                                .customer_email
                                .clone()
                                .unwrap_or_else(|| "N/A".into());
                            let when = order.created_at.format("%d/%m/%Y %H:%M").to_string();
                            let total_str = format_soles(order.total);
                            let badge_class = order.status.badge_class();
                            let status_label = order.status.label();
                            let is_done = order.status.is_terminal();
                            let action = order.advance_action();
                            let order_id = order.order_id.clone();
                            let tenant_id = order.tenant_id.clone();
                            rsx! {
                                tr { key: "{row_key}",
                                    td { strong { "#{short}" } }
                                    td { "{customer}" }
                                    td { "{when}" }
                                    td { strong { "{total_str}" } }
                                    td { span { class: "{badge_class}", "{status_label}" } }
                                    td {
                                        if let Some(action) = action {
                                            {
                                                let label = action.label;
                                                let next = action.next;
                                                let token = action.task_token;
                                                rsx! {
                                                    button {
                                                        class: "btn btn-success btn-sm",
                                                        onclick: move |_| {
                                                            let Some(current) = session.read().session.clone() else {
                                                                return;
                                                            };
                                                            let request = AdvanceRequest {
                                                                order_id: order_id.clone(),
                                                                tenant_id: tenant_id.clone(),
                                                                task_token: token.clone(),
                                                                step: next,
                                                                notes: format!("Avanzado por {}", current.email),
                                                            };
                                                            let short = short.clone();
                                                            spawn(async move {
                                                                match api_client::advance_order(&current, &request).await {
                                                                    Ok(_) => {
                                                                        flash.set(Some(Flash::Success(format!(
                                                                            "Pedido #{short} avanzado exitosamente"
                                                                        ))));
                                                                        // The authoritative post-transition state
                                                                        // (including any new token) only comes
                                                                        // from a re-fetch.
                                                                        poller.send(());
                                                                        api_client::delay_ms(3_000).await;
                                                                        flash.set(None);
                                                                    }
                                                                    Err(error) => {
                                                                        flash.set(Some(Flash::Error(format!(
                                                                            "Error al avanzar pedido: {error}"
                                                                        ))));
                                                                        api_client::delay_ms(5_000).await;
                                                                        flash.set(None);
                                                                    }
                                                                }
                                                            });
                                                        },
                                                        "{label}"
                                                    }
                                                }
                                            }
                                        } else if is_done {
                                            span { class: "done-note", "✓ Completado" }
                                        } else {
                                            span { class: "progress-note", "⏳ En proceso..." }
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
