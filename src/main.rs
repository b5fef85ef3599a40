use yew::prelude::*;
use log::info;

mod config;
mod state;
mod viewport;
mod components {
    pub mod contact_form;
    pub mod footer;
    pub mod modal;
    pub mod nav;
}
mod pages {
    pub mod home;
    pub mod sections;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Galaxy Coffee Co. site");
    yew::Renderer::<App>::new().render();
}
