use gloo_console::log;
use serde::Serialize;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Notification;

#[derive(Serialize)]
struct ConsultationRequest {
    name: String,
    email: String,
    message: String,
}

/// Accepts the same addresses as the pattern `^[^\s@]+@[^\s@]+\.[^\s@]+$`:
/// no whitespace, exactly one `@`, a non-empty local part, and a domain with
/// a dot that has characters on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(3, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if parts.next().is_some() || local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notify: Callback<Notification>,
}

/// Consultation request form. Submission is simulated: the payload is
/// validated, logged, and acknowledged with a notification, but no request
/// ever leaves the page.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let on_notify = props.on_notify.clone();
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default();

            if !is_valid_email(&email) {
                on_notify.emit(Notification::error("Please enter a valid email address"));
                return;
            }

            let request = ConsultationRequest { name, email, message };
            match serde_json::to_string(&request) {
                // Simulated submission: there is no backend to send this to.
                Ok(payload) => log!("consultation request:", payload),
                Err(err) => log::warn!("failed to serialize consultation request: {err}"),
            }

            on_notify.emit(Notification::success(
                "Thank you! We'll contact you soon to discuss your design needs.",
            ));

            if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }
        })
    };

    html! {
        <form id="consultationForm" ref={form_ref} {onsubmit}>
            <div class="form-row">
                <input ref={name_ref} type="text" name="name" placeholder="Your name" required=true />
                <input ref={email_ref} type="email" name="email" placeholder="Email address" required=true />
            </div>
            <textarea
                ref={message_ref}
                name="message"
                rows="5"
                placeholder="Tell us about your space"
            />
            <button type="submit" class="cta-button">{"Request a Consultation"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("hello@vellura.space"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        assert!(is_valid_email("user+tag@example.com"));
    }

    #[test]
    fn rejects_missing_or_misplaced_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no-domain@"));
        assert!(!is_valid_email("@no-local.com"));
        assert!(!is_valid_email("no-dot@domain"));
        assert!(!is_valid_email("dot-first@.com"));
        assert!(!is_valid_email("dot-last@domain."));
    }

    #[test]
    fn rejects_whitespace_and_extra_at_signs() {
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("a@b.c@d.com"));
        assert!(!is_valid_email("spaced name@example.com"));
        assert!(!is_valid_email("name@exa mple.com"));
        assert!(!is_valid_email(" leading@example.com"));
    }

    #[test]
    fn interior_dot_is_judged_within_the_domain_only() {
        // The dot requirement applies after the @, not to the local part.
        assert!(is_valid_email("nodotlocal@example.com"));
        assert!(!is_valid_email("dotted.local@nodomaindot"));
    }
}
