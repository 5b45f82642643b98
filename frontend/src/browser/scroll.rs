use gloo_events::EventListener;

use crate::error::BrowserError;

/// Reports `window.scrollY` now and on every scroll event until the returned
/// listener is dropped. The listener is passive.
pub fn track_scroll<F>(on_scroll: F) -> Result<EventListener, BrowserError>
where
    F: Fn(f64) + 'static,
{
    let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
    on_scroll(window.scroll_y()?);

    let source = window.clone();
    Ok(EventListener::new(&window, "scroll", move |_| {
        if let Ok(scroll_y) = source.scroll_y() {
            on_scroll(scroll_y);
        }
    }))
}

/// Jumps to the top of the document, used once when the page mounts.
pub fn scroll_to_top() -> Result<(), BrowserError> {
    let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
    window.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}
