use dioxus::prelude::*;

use edo_common::session::Session;

use super::api_client;
use super::app::home_route;
use super::session_store::use_session;

#[component]
pub fn LoginView() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let can_submit = use_memo(move || {
        !email.read().trim().is_empty() && !password.read().is_empty() && !busy()
    });

    let submit = move |_| {
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }
        busy.set(true);
        error_msg.set(None);

        spawn(async move {
            match api_client::login(&email_value, &password_value).await {
                Ok(resp) => {
                    let role = resp.role;
                    session.write().sign_in(Session {
                        token: resp.token,
                        email: resp.email,
                        role,
                        tenant_id: resp.tenant_id,
                    });
                    nav.replace(home_route(role));
                }
                Err(error) => {
                    // A rejected login leaves the stored session untouched.
                    error_msg.set(Some(error.to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h1 { "EDO Sushi Bar" }
                p { class: "login-subtitle", "Ingresa para pedir online" }

                if let Some(err) = error_msg.read().as_ref() {
                    div { class: "alert alert-error", "✗ {err}" }
                }

                div { class: "form-group",
                    label { "Email:" }
                    input {
                        r#type: "email",
                        placeholder: "tu@email.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { "Contraseña:" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    disabled: !can_submit(),
                    onclick: submit,
                    if busy() { "Ingresando..." } else { "Ingresar" }
                }
            }
        }
    }
}
