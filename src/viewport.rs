use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::state::{Section, SectionBounds};

/// Current vertical scroll offset, 0 when it can't be read.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Measures every rendered section against the viewport. Missing ones are left out.
pub fn measure_sections() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.id())?;
            let rect = element.get_bounding_client_rect();
            Some(SectionBounds::new(section, rect.top(), rect.bottom()))
        })
        .collect()
}

/// Smoothly scrolls `section` into view. Returns false when it isn't in the document.
pub fn scroll_to_section(section: Section) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            debug!("No element for section '{}', skipping scroll", section.id());
            false
        }
    }
}

/// Window scroll listener that lives as long as the value does.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach<F>(handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);

        if let Err(err) = window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to register scroll listener: {:?}", err);
            return None;
        }

        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}
