use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::error::BrowserError;
use crate::view::revealed::crosses_threshold;

/// Watches every element matching a selector and reports each element id
/// once, the first time enough of it is on screen. Dropping the value
/// disconnects the observer.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe<F>(selector: &str, threshold: f64, on_reveal: F) -> Result<Self, BrowserError>
    where
        F: Fn(String) + 'static,
    {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        if !intersection_supported(&window) {
            return Err(BrowserError::IntersectionObserverUnavailable);
        }
        let document = window.document().ok_or(BrowserError::NoDocument)?;

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = match entry.dyn_into() {
                        Ok(entry) => entry,
                        Err(_) => continue,
                    };
                    if !crosses_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                        continue;
                    }
                    // Revealed elements are never looked at again.
                    let target = entry.target();
                    observer.unobserve(&target);
                    let id = target.id();
                    if id.is_empty() {
                        log::debug!("Skipping reveal target without an id");
                        continue;
                    }
                    on_reveal(id);
                }
            },
        );

        let mut init = IntersectionObserverInit::new();
        init.threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let nodes = document.query_selector_all(selector)?;
        let mut watched = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&element);
                watched += 1;
            }
        }
        log::debug!("Observing {} elements matching {}", watched, selector);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn intersection_supported(window: &Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    fn pinned_target(id: &str, marker: &str) -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let element: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        element.set_id(id);
        element.set_attribute(marker, "").unwrap();
        element
            .set_attribute("style", "position: fixed; top: 0; left: 0; width: 50px; height: 50px;")
            .unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |id| sink.borrow_mut().push(id))
    }

    #[wasm_bindgen_test]
    fn missing_constructor_is_reported() {
        let window = web_sys::window().unwrap();
        let global: &js_sys::Object = window.as_ref();
        let key = JsValue::from_str("IntersectionObserver");
        let constructor = js_sys::Reflect::get(global, &key).unwrap();
        assert!(js_sys::Reflect::delete_property(global, &key).unwrap());

        let result = VisibilityObserver::observe("[data-animate]", 0.1, |_| {});

        js_sys::Reflect::set(global, &key, &constructor).unwrap();
        assert!(matches!(result, Err(BrowserError::IntersectionObserverUnavailable)));
    }

    #[wasm_bindgen_test]
    async fn visible_target_is_reported_once() {
        let element = pinned_target("reveal-visible", "data-reveal-visible");
        let (seen, on_reveal) = recorder();

        let observer = VisibilityObserver::observe("[data-reveal-visible]", 0.1, on_reveal).unwrap();
        TimeoutFuture::new(200).await;

        assert_eq!(*seen.borrow(), vec!["reveal-visible".to_owned()]);
        drop(observer);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn dropped_observer_reports_nothing() {
        let element = pinned_target("reveal-dropped", "data-reveal-dropped");
        let (seen, on_reveal) = recorder();

        let observer = VisibilityObserver::observe("[data-reveal-dropped]", 0.1, on_reveal).unwrap();
        drop(observer);
        TimeoutFuture::new(200).await;

        assert!(seen.borrow().is_empty());
        element.remove();
    }
}
