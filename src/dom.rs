use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::error::PageError;
use crate::head::tags::PageLocation;
use crate::state::nav::Section;

pub fn current_location() -> Result<PageLocation, PageError> {
    let location = window().ok_or(PageError::MissingWindow)?.location();
    Ok(PageLocation {
        href: location.href()?,
        origin: location.origin()?,
    })
}

/// Smooth-scrolls to a section. A section that isn't on the page is not an error.
pub fn scroll_to_section(section: Section) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    else {
        debug!("No #{} section to scroll to", section.id());
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Window scroll handler that stays registered until dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(on_scroll: impl FnMut() + 'static) -> Result<Self, PageError> {
        let window = window().ok_or(PageError::MissingWindow)?;
        let callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}
