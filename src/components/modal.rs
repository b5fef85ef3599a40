use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct LearnMoreModalProps {
    pub on_close: Callback<()>,
    /// Fired by the "Contact Us" button. The parent closes the modal and navigates.
    pub on_contact: Callback<()>,
}

#[function_component(LearnMoreModal)]
pub fn learn_more_modal(props: &LearnMoreModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let contact = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_contact.emit(());
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal-card" role="dialog" aria-modal="true" aria-labelledby="learn-more-title">
                <button class="modal-close" aria-label="Close" onclick={close}>
                    {"×"}
                </button>
                <h2 id="learn-more-title">{"Host a Galaxy Coffee Kiosk"}</h2>
                <p>
                    {"Transform your space with a fully autonomous, barista-quality coffee kiosk. \
                      Delight your customers, boost your revenue, and join the future of food & beverage."}
                </p>
                <ul>
                    <li>{"Minimal space required (~2.5 m²)"}</li>
                    <li>{"No plumbing or kitchen needed"}</li>
                    <li>{"24/7 operation & self-cleaning"}</li>
                    <li>{"Social-media-ready experience"}</li>
                </ul>
                <button class="modal-cta" onclick={contact}>
                    {"Contact Us"}
                </button>
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                    animation: fade-in 0.3s ease;
                }

                .modal-card {
                    position: relative;
                    max-width: 28rem;
                    width: 100%;
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(168, 85, 247, 0.4);
                    background: linear-gradient(to bottom right, rgba(88, 28, 135, 0.9), rgba(107, 33, 168, 0.8));
                    animation: pop-up 0.3s cubic-bezier(.4, 2, .3, 1) forwards;
                }

                .modal-card h2 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(to right, #c084fc, #9333ea);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .modal-card p {
                    color: #d1d5db;
                    margin-bottom: 1rem;
                }

                .modal-card ul {
                    color: #d8b4fe;
                    margin-bottom: 1rem;
                    list-style: disc inside;
                }

                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #d8b4fe;
                    font-size: 1.5rem;
                    font-weight: 700;
                    cursor: pointer;
                }

                .modal-cta {
                    width: 100%;
                    margin-top: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                    background: linear-gradient(to right, #9333ea, #7e22ce);
                    transition: transform 0.3s ease;
                }

                .modal-cta:hover {
                    transform: scale(1.05);
                }

                @keyframes pop-up {
                    0% { transform: scale(0.8); opacity: 0; }
                    100% { transform: scale(1); opacity: 1; }
                }

                @keyframes fade-in {
                    0% { opacity: 0; }
                    100% { opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
