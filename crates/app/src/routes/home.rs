use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

use crate::components::ContactForm;

/// Landing page with the contact card.
#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "contact-page",
            Card {
                class: "contact-card",

                CardHeader {
                    CardTitle { "Entre em Contato" }
                    CardDescription { "Envie sua mensagem e retornaremos em breve" }
                }

                CardContent {
                    ContactForm {}
                }

                CardFooter {
                    "Respondemos em até dois dias úteis."
                }
            }
        }
    }
}
