use gloo_events::EventListener;
use web_sys::{HtmlVideoElement, MouseEvent};
use yew::prelude::*;

use crate::browser::media::LoopingVideo;
use crate::browser::navigation::follow_anchor;
use crate::browser::scroll::{scroll_to_top, track_scroll};
use crate::browser::visibility::VisibilityObserver;
use crate::config::{ScrollMode, ViewConfig};
use crate::view::media::LoopPolicy;
use crate::view::nav::Anchor;
use crate::view::{PageAction, PageState};

/// Handles returned by [`use_page_view`]. Both callbacks keep their
/// identity across renders.
pub struct PageView {
    pub state: UseReducerHandle<PageState>,
    pub video_ref: NodeRef,
    pub toggle_menu: Callback<MouseEvent>,
    pub navigate: Callback<(MouseEvent, Anchor)>,
}

/// Starts reveal-on-scroll for the page. When the host cannot observe
/// intersections, everything is revealed at once and `None` is returned.
pub fn observe_reveals<F>(config: &ViewConfig, dispatch: F) -> Option<VisibilityObserver>
where
    F: Fn(PageAction) + Clone + 'static,
{
    let reveal = dispatch.clone();
    match VisibilityObserver::observe(config.reveal_selector(), config.reveal_threshold(), move |id| {
        reveal(PageAction::Reveal(id))
    }) {
        Ok(observer) => Some(observer),
        Err(e) => {
            log::warn!("Reveal-on-scroll disabled, showing all content: {}", e);
            dispatch(PageAction::RevealAll);
            None
        }
    }
}

/// The three live registrations of a mounted page. Dropping this releases
/// all of them.
struct ViewSubscriptions {
    _visibility: Option<VisibilityObserver>,
    _scroll: Option<EventListener>,
    _video: Option<LoopingVideo>,
}

impl ViewSubscriptions {
    fn attach(
        config: &ViewConfig,
        video_ref: &NodeRef,
        dispatcher: UseReducerDispatcher<PageState>,
    ) -> Self {
        let visibility = {
            let dispatcher = dispatcher.clone();
            observe_reveals(config, move |action| dispatcher.dispatch(action))
        };

        if let Err(e) = scroll_to_top() {
            log::debug!("Could not reset scroll position: {}", e);
        }
        let scroll = match track_scroll(move |y| dispatcher.dispatch(PageAction::Scrolled(y))) {
            Ok(listener) => Some(listener),
            Err(e) => {
                log::warn!("Scroll tracking unavailable: {}", e);
                None
            }
        };

        let video = video_ref
            .cast::<HtmlVideoElement>()
            .map(|element| LoopingVideo::attach(&element, LoopPolicy::new(config.loop_epsilon())));

        Self {
            _visibility: visibility,
            _scroll: scroll,
            _video: video,
        }
    }
}

/// Owns the state of one landing page view and its browser subscriptions.
/// Everything is attached after the first render and released on unmount.
#[hook]
pub fn use_page_view(config: &ViewConfig) -> PageView {
    let state = use_reducer_eq(PageState::default);
    let video_ref = use_node_ref();

    {
        let dispatcher = state.dispatcher();
        let video_ref = video_ref.clone();
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(PageAction::Activate);
                let subscriptions = ViewSubscriptions::attach(&config, &video_ref, dispatcher.clone());
                log::debug!("Page view active");
                move || {
                    dispatcher.dispatch(PageAction::Teardown);
                    drop(subscriptions);
                    log::debug!("Page view torn down");
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let dispatcher = state.dispatcher();
        use_callback(
            move |_: MouseEvent, _: &()| dispatcher.dispatch(PageAction::ToggleMenu),
            (),
        )
    };

    let navigate = {
        let dispatcher = state.dispatcher();
        use_callback(
            move |(e, anchor): (MouseEvent, Anchor), mode: &ScrollMode| {
                follow_anchor(&e, &anchor, *mode, || dispatcher.dispatch(PageAction::CloseMenu));
            },
            config.scroll_mode(),
        )
    };

    PageView {
        state,
        video_ref,
        toggle_menu,
        navigate,
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use web_sys::js_sys;

    #[wasm_bindgen_test]
    fn missing_observer_reveals_everything() {
        let window = web_sys::window().unwrap();
        let global: &js_sys::Object = window.as_ref();
        let key = JsValue::from_str("IntersectionObserver");
        let constructor = js_sys::Reflect::get(global, &key).unwrap();
        assert!(js_sys::Reflect::delete_property(global, &key).unwrap());

        let state = Rc::new(RefCell::new(PageState::default()));
        let observer = {
            let state = state.clone();
            observe_reveals(&ViewConfig::default(), move |action| {
                state.borrow_mut().apply(action);
            })
        };

        js_sys::Reflect::set(global, &key, &constructor).unwrap();
        assert!(observer.is_none());
        assert!(state.borrow().revealed.is_fail_open());
        assert!(state.borrow().revealed.is_revealed("contact-card"));
    }
}
