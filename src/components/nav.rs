use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Section,
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct NavLinksProps {
    active: Section,
    on_navigate: Callback<Section>,
    class: &'static str,
}

/// The six section links. Shared by the desktop bar and the mobile panel.
#[function_component(NavLinks)]
fn nav_links(props: &NavLinksProps) -> Html {
    html! {
        <div class={props.class}>
            { for Section::ALL.into_iter().map(|section| {
                let onclick = {
                    let on_navigate = props.on_navigate.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_navigate.emit(section);
                    })
                };
                html! {
                    <button
                        key={section.id()}
                        class={classes!("nav-link", (props.active == section).then(|| "active"))}
                        {onclick}
                    >
                        {section.label()}
                    </button>
                }
            }) }
        </div>
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, scrolled, menu_open, on_navigate, on_toggle_menu } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-brand">
                    <img src={config::LOGO_URL} alt="Galaxy Coffee Co. Logo" class="nav-logo" />
                    <span class="brand-name">{"Galaxy Coffee Co."}</span>
                </div>

                <NavLinks active={*active} on_navigate={on_navigate.clone()} class="nav-desktop" />

                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <NavLinks active={*active} on_navigate={on_navigate.clone()} class="nav-mobile" />
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(17, 24, 39, 0.95);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(168, 85, 247, 0.2);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .nav-logo {
                    width: 2.5rem;
                    height: 2.5rem;
                }

                .brand-name {
                    font-size: 1.25rem;
                    font-weight: 700;
                    font-family: Andaro, Montserrat, Arial, Helvetica, sans-serif;
                    background: linear-gradient(to right, #c084fc, #9333ea);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .nav-desktop {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    color: #d1d5db;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: #c084fc;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #c084fc;
                    font-size: 2rem;
                    cursor: pointer;
                }

                .nav-mobile {
                    display: none;
                }

                @media (max-width: 767px) {
                    .nav-desktop {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .nav-mobile {
                        position: absolute;
                        top: 4rem;
                        left: 0;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 1rem 0;
                        gap: 0.5rem;
                        background: rgba(17, 24, 39, 0.95);
                        backdrop-filter: blur(16px);
                        border-bottom: 1px solid rgba(168, 85, 247, 0.2);
                    }

                    .nav-mobile .nav-link {
                        width: 100%;
                        padding: 0.5rem 0;
                        font-size: 1.125rem;
                        font-weight: 600;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
