use yew::prelude::*;
use yew_hooks::use_event_with_window;
use log::{debug, info};
use web_sys::KeyboardEvent;

use crate::components::{footer::Footer, modal::LearnMoreModal, nav::Nav};
use crate::pages::sections::{About, Contact, Features, Hero, Locations, Scale, Starfield};
use crate::state::{PageAction, PageState, Section};
use crate::viewport::{self, ScrollListener};

fn scrolled_action() -> PageAction {
    PageAction::Scrolled {
        offset: viewport::scroll_offset(),
        bounds: viewport::measure_sections(),
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let state = use_reducer_eq(PageState::default);

    // Listen for scrolling while the page is mounted; dropping the guard detaches it.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                info!("Home mounted, tracking scroll position");
                dispatcher.dispatch(scrolled_action());

                let listener = ScrollListener::attach(move || {
                    dispatcher.dispatch(scrolled_action());
                });

                move || drop(listener)
            },
            (),
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatcher.dispatch(PageAction::CloseModal);
            }
        });
    }

    // Every navigation goes through here so the menu is always collapsed afterwards.
    let navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |section: Section| {
            debug!("Navigating to '{}'", section.id());
            viewport::scroll_to_section(section);
            dispatcher.dispatch(PageAction::Navigate(section));
        })
    };

    let toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(PageAction::ToggleMenu))
    };

    let open_modal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| {
            debug!("Opening host-a-kiosk dialog");
            dispatcher.dispatch(PageAction::OpenModal);
        })
    };

    let close_modal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(PageAction::CloseModal))
    };

    let contact_from_modal = {
        let dispatcher = state.dispatcher();
        let navigate = navigate.clone();
        Callback::from(move |_| {
            dispatcher.dispatch(PageAction::CloseModal);
            navigate.emit(Section::Contact);
        })
    };

    html! {
        <div class="home-page">
            <Starfield />

            {
                if state.modal_open {
                    html! { <LearnMoreModal on_close={close_modal} on_contact={contact_from_modal} /> }
                } else {
                    html! {}
                }
            }

            <Nav
                active={state.active}
                scrolled={state.scrolled}
                menu_open={state.menu_open}
                on_navigate={navigate.clone()}
                on_toggle_menu={toggle_menu}
            />

            <Hero on_navigate={navigate.clone()} />
            <About />
            <Features />
            <Locations />
            <Scale on_navigate={navigate} on_learn_more={open_modal} />
            <Contact />
            <Footer />

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    color: #ffffff;
                    position: relative;
                    overflow: hidden;
                    font-family: Montserrat, Arial, Helvetica, sans-serif;
                }

                .home-background {
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                    background-size: cover;
                    background-position: center center;
                    background-repeat: no-repeat;
                    background-attachment: fixed;
                }

                .home-background-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, #1a093680, #1a093660, #1a0936b3);
                }

                .starfield {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    pointer-events: none;
                }

                .star {
                    position: absolute;
                    width: 0.25rem;
                    height: 0.25rem;
                    border-radius: 9999px;
                    background: #ffffff;
                    opacity: 0.6;
                    animation: twinkle 3s ease-in-out infinite;
                }

                @keyframes twinkle {
                    0%, 100% { opacity: 0.6; }
                    50% { opacity: 0.2; }
                }

                .gradient-text {
                    background: linear-gradient(to right, #c084fc, #9333ea);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero {
                    position: relative;
                    height: 100vh;
                    min-height: 100vh;
                    padding: 4rem 1rem 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .hero-logo {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    display: flex;
                    justify-content: center;
                    padding-top: 4rem;
                    z-index: 20;
                }

                .hero-logo img {
                    height: 10rem;
                    max-width: 380px;
                    width: auto;
                    filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
                }

                .particles {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }

                .particle {
                    position: absolute;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #c084fc;
                    opacity: 0.6;
                    animation: float 4s ease-in-out infinite;
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }

                .hero-content {
                    text-align: center;
                    z-index: 10;
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .hero-tagline {
                    color: #d8b4fe;
                    font-size: 1.5rem;
                    margin: 2rem 0;
                }

                .hero-title {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    color: #d1d5db;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    justify-content: center;
                }

                .cta-primary,
                .cta-secondary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    color: white;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }

                .cta-primary {
                    border: none;
                    background: linear-gradient(to right, #9333ea, #7e22ce);
                }

                .cta-secondary {
                    border: 2px solid #a855f7;
                    background: transparent;
                }

                .cta-primary:hover,
                .cta-secondary:hover {
                    transform: scale(1.05);
                }

                .scroll-down {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: none;
                    border: none;
                    color: #c084fc;
                    font-size: 2rem;
                    cursor: pointer;
                }

                .section {
                    position: relative;
                    z-index: 10;
                    padding: 5rem 1rem;
                }

                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-header h2 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .section-header p {
                    color: #d1d5db;
                    font-size: 1.25rem;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .card-grid {
                    display: grid;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }

                .card-grid.three {
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                }

                .card-grid.four {
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                }

                .card {
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(168, 85, 247, 0.2);
                    background: linear-gradient(to bottom right, rgba(88, 28, 135, 0.5), rgba(107, 33, 168, 0.3));
                    backdrop-filter: blur(4px);
                    transition: all 0.3s ease;
                }

                .card.centered {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .card.centered:hover {
                    transform: scale(1.05);
                    border-color: rgba(192, 132, 252, 0.4);
                }

                .card p {
                    color: #d1d5db;
                }

                .icon-box {
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    border-radius: 0.5rem;
                    background: rgba(168, 85, 247, 0.2);
                    color: #c084fc;
                    font-size: 1.5rem;
                }

                .icon-box.small {
                    width: 2rem;
                    height: 2rem;
                    font-size: 1rem;
                    margin-bottom: 0;
                }

                .icon-box.round {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                }

                .features-layout,
                .contact-layout {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 3rem;
                    align-items: center;
                }

                .feature-list {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .feature-row {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }

                .feature-row p {
                    color: #d1d5db;
                }

                .machine-showcase {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .machine-frame {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(168, 85, 247, 0.3);
                    background: linear-gradient(to bottom right, rgba(88, 28, 135, 0.6), rgba(107, 33, 168, 0.4));
                }

                .machine-frame img {
                    height: 16rem;
                    width: auto;
                    object-fit: contain;
                    border-radius: 1.5rem;
                }

                .machine-caption {
                    color: #d8b4fe;
                    font-weight: 600;
                    font-size: 1.125rem;
                    margin-top: 1.5rem;
                    text-align: center;
                }

                .machine-note {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin-top: 0.5rem;
                    text-align: center;
                }

                .requirements h3 {
                    text-align: center;
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .requirement {
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .requirement p {
                    font-size: 0.875rem;
                }

                .requirements-summary {
                    text-align: center;
                    font-size: 1.125rem;
                    color: #d8b4fe !important;
                }

                .card-button {
                    margin-top: auto;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #9333ea;
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .card-button:hover {
                    background: #7e22ce;
                }

                .card.closing {
                    text-align: center;
                    border-color: rgba(168, 85, 247, 0.3);
                }

                .closing-pitch {
                    font-size: clamp(1.5rem, 3vw, 1.875rem);
                    font-weight: 700;
                    color: #ffffff !important;
                    margin-bottom: 1rem;
                }

                .closing-line {
                    font-size: 1.25rem;
                    color: #d8b4fe !important;
                }

                .contact-layout {
                    align-items: start;
                }

                .contact-details h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .contact-item {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    margin-bottom: 1rem;
                }

                .contact-item .icon-box {
                    margin-bottom: 0;
                }

                .contact-label {
                    font-weight: 600;
                }

                .contact-item a {
                    color: #c084fc;
                    text-decoration: none;
                }

                .contact-item a:hover {
                    color: #d8b4fe;
                }

                .contact-address {
                    color: #d1d5db;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::sleep;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, HtmlElement, KeyboardEventInit};
    use yew::AppHandle;

    wasm_bindgen_test_configure!(run_in_browser);

    fn window() -> web_sys::Window {
        web_sys::window().unwrap()
    }

    fn document() -> web_sys::Document {
        window().document().unwrap()
    }

    /// Mounts `Home` followed by a viewport-tall spacer so the last section can reach the top.
    fn mount() -> (AppHandle<Home>, Element) {
        window().scroll_to_with_x_and_y(0.0, 0.0);

        let wrapper = document().create_element("div").unwrap();
        let app_root = document().create_element("div").unwrap();
        let spacer = document().create_element("div").unwrap();
        spacer.set_attribute("style", "height: 100vh;").unwrap();
        wrapper.append_child(&app_root).unwrap();
        wrapper.append_child(&spacer).unwrap();
        document().body().unwrap().append_child(&wrapper).unwrap();

        let handle = yew::Renderer::<Home>::with_root(app_root).render();
        (handle, wrapper)
    }

    fn unmount(handle: AppHandle<Home>, wrapper: Element) {
        handle.destroy();
        wrapper.remove();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no element for {}", selector))
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn active_link(root: &Element) -> String {
        root.query_selector(".nav-desktop .nav-link.active")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap()
    }

    async fn settle() {
        sleep(Duration::from_millis(50)).await;
    }

    /// Long enough for a smooth scroll to finish and its last scroll event to be handled.
    async fn settle_scroll() {
        sleep(Duration::from_millis(1500)).await;
    }

    #[wasm_bindgen_test]
    async fn initial_render() {
        let (handle, root) = mount();
        settle().await;

        let desktop = root.query_selector_all(".nav-desktop .nav-link").unwrap();
        assert_eq!(desktop.length(), 6);
        assert_eq!(active_link(&root), "Home");

        assert!(root.query_selector(".modal-backdrop").unwrap().is_none());
        assert!(root.query_selector(".nav-mobile").unwrap().is_none());
        for section in Section::ALL {
            assert!(root.query_selector(&format!("#{}", section.id())).unwrap().is_some());
        }

        unmount(handle, root);
    }

    #[wasm_bindgen_test]
    async fn each_nav_entry_makes_its_section_active() {
        let (handle, root) = mount();
        settle().await;

        // Walk forward then back to the top, so every entry is clicked from elsewhere.
        let order = [1, 2, 3, 4, 5, 0];
        for index in order {
            let section = Section::ALL[index];
            click(&root, &format!(".nav-desktop .nav-link:nth-child({})", index + 1));
            settle_scroll().await;
            assert_eq!(active_link(&root), section.label(), "after clicking {}", section.id());
        }

        unmount(handle, root);
    }

    #[wasm_bindgen_test]
    async fn learn_more_then_contact_closes_modal() {
        let (handle, root) = mount();
        settle().await;

        click(&root, ".learn-more");
        settle().await;
        assert!(root.query_selector(".modal-backdrop").unwrap().is_some());

        click(&root, ".modal-cta");
        settle_scroll().await;
        assert!(root.query_selector(".modal-backdrop").unwrap().is_none());
        assert_eq!(active_link(&root), "Contact");

        unmount(handle, root);
    }

    #[wasm_bindgen_test]
    async fn close_button_dismisses_modal() {
        let (handle, root) = mount();
        settle().await;

        click(&root, ".learn-more");
        settle().await;
        click(&root, ".modal-close");
        settle().await;
        assert!(root.query_selector(".modal-backdrop").unwrap().is_none());

        unmount(handle, root);
    }

    #[wasm_bindgen_test]
    async fn escape_key_dismisses_modal() {
        let (handle, root) = mount();
        settle().await;

        click(&root, ".learn-more");
        settle().await;
        assert!(root.query_selector(".modal-backdrop").unwrap().is_some());

        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        window().dispatch_event(&event).unwrap();
        settle().await;
        assert!(root.query_selector(".modal-backdrop").unwrap().is_none());

        unmount(handle, root);
    }

    #[wasm_bindgen_test]
    async fn other_keys_leave_modal_open() {
        let (handle, root) = mount();
        settle().await;

        click(&root, ".learn-more");
        settle().await;

        let init = KeyboardEventInit::new();
        init.set_key("Enter");
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        window().dispatch_event(&event).unwrap();
        settle().await;
        assert!(root.query_selector(".modal-backdrop").unwrap().is_some());

        unmount(handle, root);
    }

    #[wasm_bindgen_test]
    async fn mobile_navigation_collapses_menu_and_scrolls() {
        let (handle, root) = mount();
        settle().await;

        click(&root, ".burger-menu");
        settle().await;
        let links = root.query_selector_all(".nav-mobile .nav-link").unwrap();
        assert_eq!(links.length(), 6);

        click(&root, ".nav-mobile .nav-link:nth-child(4)");
        settle().await;
        assert!(root.query_selector(".nav-mobile").unwrap().is_none());

        settle_scroll().await;
        assert!(window().scroll_y().unwrap() > 0.0);
        assert_eq!(active_link(&root), "Locations");

        unmount(handle, root);
    }

    #[wasm_bindgen_test]
    async fn unmounted_page_ignores_scroll_events() {
        let (handle, root) = mount();
        settle().await;
        unmount(handle, root);
        settle().await;

        // The listener is gone with the page, so this reaches no dropped reducer.
        let event = Event::new("scroll").unwrap();
        assert!(window().dispatch_event(&event).unwrap());
        settle().await;
    }

    #[wasm_bindgen_test]
    fn scrolling_to_missing_section_is_noop() {
        assert!(document().get_element_by_id(Section::Locations.id()).is_none());
        assert!(!viewport::scroll_to_section(Section::Locations));
        assert!(viewport::measure_sections().is_empty());
    }
}
