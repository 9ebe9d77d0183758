use dioxus::prelude::*;
use shared_types::{ContactRequest, SubmitStatus};
use shared_ui::{Button, Form, Input, Label, Textarea};

use crate::submit;

/// Contact form: collects name, email, subject and message, posts them as
/// JSON to the contact endpoint and shows the outcome in a status banner.
///
/// All form state lives in this component. While a submission is in flight
/// every control is disabled — that is the only re-entry guard; the handler
/// does not re-check the flag. Input is kept on failure so the user can
/// correct and resubmit; it is cleared only on success.
#[component]
pub fn ContactForm() -> Element {
    let mut form = use_signal(ContactRequest::default);
    let mut submitting = use_signal(|| false);
    let mut status = use_signal(|| SubmitStatus::Idle);

    let handle_submit = move |_evt: FormEvent| async move {
        submitting.set(true);
        status.set(SubmitStatus::Idle);

        let outcome = submit::send_contact(&form()).await;
        if outcome.is_success() {
            form.write().clear();
        }
        status.set(outcome);

        submitting.set(false);
    };

    let banner = match status() {
        SubmitStatus::Idle => None,
        SubmitStatus::Success(msg) => Some(("contact-status-success", msg)),
        SubmitStatus::Error(msg) => Some(("contact-status-error", msg)),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./contact_form.css") }

        Form { onsubmit: handle_submit, class: "contact-form",
            if let Some((kind, msg)) = banner {
                div {
                    class: "contact-status {kind}",
                    role: "alert",
                    aria_live: "polite",
                    "{msg}"
                }
            }

            div { class: "contact-grid",
                div { class: "contact-field",
                    Label { html_for: "name", "Nome Completo" }
                    Input {
                        id: "name",
                        input_type: "text",
                        value: form().name,
                        required: true,
                        disabled: submitting(),
                        on_input: move |e: FormEvent| form.write().set_field("name", e.value()),
                    }
                }
                div { class: "contact-field",
                    Label { html_for: "email-contact", "E-mail" }
                    Input {
                        id: "email-contact",
                        input_type: "email",
                        value: form().email,
                        required: true,
                        disabled: submitting(),
                        on_input: move |e: FormEvent| form.write().set_field("email", e.value()),
                    }
                }
            }

            div { class: "contact-field",
                Label { html_for: "subject", "Assunto" }
                Input {
                    id: "subject",
                    input_type: "text",
                    value: form().subject,
                    required: true,
                    disabled: submitting(),
                    on_input: move |e: FormEvent| form.write().set_field("subject", e.value()),
                }
            }

            div { class: "contact-field",
                Label { html_for: "message", "Mensagem" }
                Textarea {
                    id: "message",
                    rows: 5,
                    placeholder: "Digite sua mensagem aqui...",
                    value: form().message,
                    required: true,
                    disabled: submitting(),
                    on_input: move |e: FormEvent| form.write().set_field("message", e.value()),
                }
            }

            Button {
                button_type: "submit",
                class: "contact-submit",
                disabled: submitting(),
                aria_busy: if submitting() { "true" } else { "false" },
                if submitting() { "Enviando..." } else { "Enviar Mensagem" }
            }
        }
    }
}
