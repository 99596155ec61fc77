use dioxus::prelude::*;

use edo_common::session::Role;

use super::dashboard_view::DashboardView;
use super::landing::LandingPage;
use super::login_view::LoginView;
use super::menu_view::MenuView;
use super::session_store::{use_session, SessionStore};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/menu")]
    Menu {},
    #[route("/dashboard")]
    Dashboard {},
    #[end_layout]
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
}

/// The view a signed-in actor belongs on.
pub fn home_route(role: Role) -> Route {
    match role {
        Role::Staff => Route::Dashboard {},
        Role::Cliente => Route::Menu {},
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(SessionStore::load()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}

/// Shared chrome for the authenticated views, plus the authentication gate:
/// without a stored credential every protected route bounces to the login
/// page. The gate is a convenience only; the backend re-checks role and
/// tenant on every request.
#[component]
fn AppLayout() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let Some(current) = session.read().session.clone() else {
        nav.replace(Route::Login {});
        return rsx! {};
    };

    rsx! {
        div { class: "edo-app",
            header { class: "app-header",
                h1 { "EDO Sushi Bar" }
                div { class: "user-info",
                    span { class: "user-email", "{current.email}" }
                    span { class: "user-role", " · {current.role}" }
                    button {
                        class: "btn btn-secondary btn-sm",
                        onclick: move |_| {
                            session.write().sign_out();
                            nav.push(Route::Landing {});
                        },
                        "Cerrar Sesión"
                    }
                }
            }
            main { Outlet::<Route> {} }
        }
    }
}

#[component]
fn Landing() -> Element {
    rsx! { LandingPage {} }
}

#[component]
fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Already signed in: straight to the role's own view.
    if let Some(role) = session.read().session.as_ref().map(|s| s.role) {
        nav.replace(home_route(role));
        return rsx! {};
    }

    rsx! { LoginView {} }
}

#[component]
fn Menu() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let role = session.read().session.as_ref().map(|s| s.role);
    match role {
        Some(Role::Cliente) => rsx! { MenuView {} },
        // Wrong role: send the actor to their own view, not an error page.
        Some(role) => {
            nav.replace(home_route(role));
            rsx! {}
        }
        None => rsx! {},
    }
}

#[component]
fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let role = session.read().session.as_ref().map(|s| s.role);
    match role {
        Some(Role::Staff) => rsx! { DashboardView {} },
        Some(role) => {
            nav.replace(home_route(role));
            rsx! {}
        }
        None => rsx! {},
    }
}
