use chrono::Datelike;
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <img src={config::LOGO_URL} alt="Galaxy Coffee Co. Logo" class="footer-logo" />
                    <span class="brand-name">{"Galaxy Coffee Co."}</span>
                </div>
                <p class="footer-slogan">{"Barista-quality. Robotic precision. Zero hassle."}</p>
            </div>
            <div class="footer-legal">
                <p>{format!("© {} Galaxy Coffee Company LLC. All rights reserved.", year)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    z-index: 10;
                    padding: 3rem 1rem;
                    border-top: 1px solid rgba(168, 85, 247, 0.2);
                }

                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    align-items: center;
                    justify-content: space-between;
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .footer-logo {
                    width: 2rem;
                    height: 2rem;
                }

                .footer-slogan {
                    color: #9ca3af;
                }

                .footer-legal {
                    max-width: 80rem;
                    margin: 2rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #374151;
                    text-align: center;
                    color: #6b7280;
                }
                "#}
            </style>
        </footer>
    }
}
