use web_sys::{Event, ScrollBehavior, ScrollIntoViewOptions};

use crate::config::ScrollMode;
use crate::error::BrowserError;
use crate::view::nav::Anchor;

/// Scrolls the element with the anchor's id into view. Returns `Ok(false)`
/// when the document has no such element.
pub fn scroll_to_anchor(anchor: &Anchor, mode: ScrollMode) -> Result<bool, BrowserError> {
    let document = web_sys::window()
        .ok_or(BrowserError::NoWindow)?
        .document()
        .ok_or(BrowserError::NoDocument)?;

    let Some(element) = document.get_element_by_id(anchor.id()) else {
        return Ok(false);
    };

    let mut options = ScrollIntoViewOptions::new();
    options.behavior(match mode {
        ScrollMode::Smooth => ScrollBehavior::Smooth,
        ScrollMode::Instant => ScrollBehavior::Instant,
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(true)
}

/// Handles a click on an in-page link: suppresses the browser's jump, closes
/// the menu, then scrolls to the target. The menu closes even when the
/// target does not exist.
pub fn follow_anchor<F>(event: &Event, anchor: &Anchor, mode: ScrollMode, close_menu: F) -> bool
where
    F: FnOnce(),
{
    event.prevent_default();
    close_menu();
    match scroll_to_anchor(anchor, mode) {
        Ok(true) => true,
        Ok(false) => {
            log::debug!("No element for {}, staying put", anchor);
            false
        }
        Err(e) => {
            log::warn!("Could not scroll to {}: {}", anchor, e);
            false
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::view::{PageAction, PageState};
    use std::cell::RefCell;
    use wasm_bindgen_test::*;
    use web_sys::EventInit;

    fn click() -> Event {
        let mut init = EventInit::new();
        init.cancelable(true);
        Event::new_with_event_init_dict("click", &init).unwrap()
    }

    fn open_menu() -> RefCell<PageState> {
        let mut state = PageState::default();
        state.apply(PageAction::Activate);
        state.apply(PageAction::ToggleMenu);
        assert!(state.menu.is_open());
        RefCell::new(state)
    }

    #[wasm_bindgen_test]
    fn missing_anchor_is_a_no_op() {
        let window = web_sys::window().unwrap();
        let before = window.scroll_y().unwrap();
        let anchor = Anchor::parse("#nao-existe").unwrap();
        assert_eq!(scroll_to_anchor(&anchor, ScrollMode::Smooth).unwrap(), false);
        assert_eq!(window.scroll_y().unwrap(), before);
    }

    #[wasm_bindgen_test]
    fn present_anchor_is_found() {
        let document = web_sys::window().unwrap().document().unwrap();
        let target = document.create_element("section").unwrap();
        target.set_id("contato");
        document.body().unwrap().append_child(&target).unwrap();

        let anchor = Anchor::parse("#contato").unwrap();
        assert!(scroll_to_anchor(&anchor, ScrollMode::Instant).unwrap());

        target.remove();
    }

    #[wasm_bindgen_test]
    fn follow_missing_anchor_still_closes_menu() {
        let state = open_menu();
        let event = click();
        let anchor = Anchor::parse("#sem-destino").unwrap();

        let scrolled = follow_anchor(&event, &anchor, ScrollMode::Smooth, || {
            state.borrow_mut().apply(PageAction::CloseMenu);
        });

        assert!(!scrolled);
        assert!(event.default_prevented());
        assert!(!state.borrow().menu.is_open());
    }

    #[wasm_bindgen_test]
    fn follow_present_anchor_closes_menu_and_scrolls() {
        let document = web_sys::window().unwrap().document().unwrap();
        let target = document.create_element("section").unwrap();
        target.set_id("produtos");
        document.body().unwrap().append_child(&target).unwrap();

        let state = open_menu();
        let event = click();
        let anchor = Anchor::parse("#produtos").unwrap();

        let scrolled = follow_anchor(&event, &anchor, ScrollMode::Instant, || {
            state.borrow_mut().apply(PageAction::CloseMenu);
        });

        assert!(scrolled);
        assert!(event.default_prevented());
        assert!(!state.borrow().menu.is_open());
        target.remove();
    }
}
