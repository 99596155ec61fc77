use dioxus::prelude::*;

use edo_common::money::format_soles;

use super::app::Route;

/// A dish featured on the landing page.
struct Featured {
    name: &'static str,
    description: &'static str,
    /// Price in céntimos.
    price: u64,
    image: &'static str,
}

const FEATURED: [Featured; 4] = [
    Featured {
        name: "ACEVICHADO",
        description: "Langostino empanizado y palta. Cubierto con láminas de atún y salsa acevichada.",
        price: 3900,
        image: "https://images.unsplash.com/photo-1558985250-27a406d64cb3?q=80&w=2070&auto=format&fit=crop",
    },
    Featured {
        name: "PARRILLERO",
        description: "Langostino furai y queso crema. Cubierto con carne flambeada y salsa parrillera.",
        price: 3500,
        image: "https://images.unsplash.com/photo-1617196034496-64ac7960f271?q=80&w=2070&auto=format&fit=crop",
    },
    Featured {
        name: "EDO MAKI",
        description: "Salmón, queso crema y palta. Envuelto en ajonjolí negro.",
        price: 3200,
        image: "https://images.unsplash.com/photo-1611143669185-af224c5e3252?q=80&w=1932&auto=format&fit=crop",
    },
    Featured {
        name: "RAMEN EDO",
        description: "Fideos artesanales, caldo de cerdo, chashu, huevo y verduras.",
        price: 4200,
        image: "https://images.unsplash.com/photo-1569718212165-3a8278d5f624?q=80&w=2070&auto=format&fit=crop",
    },
];

/// Marketing landing page: hero, featured dishes, footer. Stateless view
/// glue; the only behavior is the call to action into the ordering flow.
#[component]
pub fn LandingPage() -> Element {
    rsx! {
        div { class: "landing",
            Hero {}
            Favorites {}
            Footer {}
        }
    }
}

#[component]
fn Hero() -> Element {
    let nav = use_navigator();

    rsx! {
        section { class: "hero",
            div { class: "hero-overlay" }
            div { class: "hero-content",
                h1 {
                    "EXPERIENCIA "
                    span { class: "accent", "EDO" }
                }
                p {
                    "Disfruta de la mejor fusión nikkei en la comodidad de tu hogar o en nuestros locales."
                }
                button {
                    class: "btn btn-primary btn-lg",
                    onclick: move |_| { nav.push(Route::Login {}); },
                    "Pide Online"
                }
            }
        }
    }
}

#[component]
fn Favorites() -> Element {
    rsx! {
        section { class: "favorites",
            h2 {
                "Nuestros "
                span { class: "accent", "Favoritos" }
            }
            div { class: "favorites-grid",
                {FEATURED.iter().map(|dish| {
                    let price_str = format_soles(dish.price);
                    rsx! {
                        div { class: "favorite-card", key: "{dish.name}",
                            img { src: "{dish.image}", alt: "{dish.name}" }
                            div { class: "favorite-body",
                                h3 { "{dish.name}" }
                                p { "{dish.description}" }
                                span { class: "favorite-price", "{price_str}" }
                            }
                        }
                    }
                })}
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "landing-footer",
            div { class: "footer-grid",
                div {
                    h3 { "EDO SUSHI BAR" }
                    p { "La mejor experiencia de sushi en Lima." }
                }
                div {
                    h3 { class: "accent", "Contacto" }
                    p { "info@edosushibar.com" }
                    p { "Lima, Perú" }
                }
            }
            p { class: "footer-note", "© Edo Sushi Bar. Todos los derechos reservados." }
        }
    }
}
