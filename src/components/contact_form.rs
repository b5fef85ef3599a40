use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Interest {
    #[default]
    HostKiosk,
    Franchise,
    Investment,
    General,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::HostKiosk,
        Interest::Franchise,
        Interest::Investment,
        Interest::General,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Interest::HostKiosk => "Host a Kiosk",
            Interest::Franchise => "Franchise Opportunity",
            Interest::Investment => "Investment Opportunity",
            Interest::General => "General Inquiry",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.label() == label)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub interest: Interest,
    pub message: String,
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            format!("{} inquiry", self.interest.label())
        } else {
            format!("{} inquiry from {}", self.interest.label(), name)
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nInterest: {}\n\n{}",
            self.name.trim(),
            self.email.trim(),
            self.interest.label(),
            self.message.trim(),
        )
    }

    /// `mailto:` link that opens the visitor's mail client with the message filled in.
    pub fn mailto_href(&self, to: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body()),
        )
    }
}

/// Whether handing the `mailto:` link to the browser went through. Failures are logged.
fn mail_client_opened(result: Result<(), JsValue>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!("Failed to open mail client: {:?}", err);
            false
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let message = use_state(ContactMessage::default);
    let notice_visible = use_state(|| false);
    let notice_timeout = use_mut_ref(|| None::<Timeout>);

    let on_name = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            message.set(ContactMessage { name: input.value(), ..(*message).clone() });
        })
    };

    let on_email = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            message.set(ContactMessage { email: input.value(), ..(*message).clone() });
        })
    };

    let on_interest = {
        let message = message.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let interest = Interest::from_label(&select.value()).unwrap_or_default();
            message.set(ContactMessage { interest, ..(*message).clone() });
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(ContactMessage { message: textarea.value(), ..(*message).clone() });
        })
    };

    // The page has no backend: hand the message to the visitor's mail client instead of
    // letting the browser post the form.
    let on_submit = {
        let message = message.clone();
        let notice_visible = notice_visible.clone();
        let notice_timeout = notice_timeout.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Ok(json) = serde_json::to_string(&*message) {
                debug!("Composing contact message: {}", json);
            }
            info!("Opening mail client for {} inquiry", message.interest.label());

            let Some(window) = web_sys::window() else {
                return;
            };
            let href = message.mailto_href(config::CONTACT_EMAIL);
            if !mail_client_opened(window.location().set_href(&href)) {
                return;
            }

            notice_visible.set(true);
            let notice_visible = notice_visible.clone();
            // Replacing the old timeout drops and cancels it.
            *notice_timeout.borrow_mut() = Some(Timeout::new(config::NOTICE_DURATION_MS, move || {
                notice_visible.set(false);
            }));
        })
    };

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <div class="form-field">
                <label for="contact-name">{"Name"}</label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="Your name"
                    required={true}
                    value={message.name.clone()}
                    oninput={on_name}
                />
            </div>

            <div class="form-field">
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    type="email"
                    placeholder="your.email@example.com"
                    required={true}
                    value={message.email.clone()}
                    oninput={on_email}
                />
            </div>

            <div class="form-field">
                <label for="contact-interest">{"Interest"}</label>
                <select id="contact-interest" onchange={on_interest}>
                    { for Interest::ALL.into_iter().map(|interest| html! {
                        <option
                            value={interest.label()}
                            selected={message.interest == interest}
                        >
                            {interest.label()}
                        </option>
                    }) }
                </select>
            </div>

            <div class="form-field">
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    rows="4"
                    placeholder="Tell us about your location or interest..."
                    value={message.message.clone()}
                    oninput={on_message}
                />
            </div>

            <button type="submit" class="form-submit">{"Send Message"}</button>
            {
                if *notice_visible {
                    html! { <p class="form-notice">{"Opening your email app…"}</p> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }

                .form-field input,
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    color: white;
                    background: rgba(31, 41, 55, 0.5);
                    border: 1px solid #4b5563;
                    border-radius: 0.5rem;
                    transition: border-color 0.2s ease;
                }

                .form-field textarea {
                    resize: none;
                }

                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    border-color: #a855f7;
                    outline: none;
                }

                .form-submit {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                    background: linear-gradient(to right, #9333ea, #7e22ce);
                    transition: transform 0.3s ease;
                }

                .form-submit:hover {
                    transform: scale(1.05);
                }

                .form-notice {
                    color: #d8b4fe;
                    text-align: center;
                }
                "#}
            </style>
        </form>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn notice_only_follows_a_successful_hand_off() {
        assert!(mail_client_opened(Ok(())));
        assert!(!mail_client_opened(Err(JsValue::from_str("navigation blocked"))));
    }
}
