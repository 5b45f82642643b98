use gloo_events::EventListener;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;

use crate::view::media::LoopPolicy;

/// Keeps the hero video playing muted and rewinds it just before the end.
/// Both listeners go away when this is dropped.
pub struct LoopingVideo {
    _time_update: EventListener,
    _error: EventListener,
}

impl LoopingVideo {
    pub fn attach(video: &HtmlVideoElement, policy: LoopPolicy) -> Self {
        let source = video.clone();
        let time_update = EventListener::new(video, "timeupdate", move |_| {
            if let Some(position) = policy.next_position(source.current_time(), source.duration()) {
                source.set_current_time(position);
            }
        });

        // The background colour behind the video is the fallback.
        let failed = video.clone();
        let error = EventListener::new(video, "error", move |_| {
            log::warn!("Hero video failed to load: {}", failed.current_src());
        });

        video.set_muted(true);
        match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Hero video autoplay was rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("Hero video could not start: {:?}", e),
        }

        Self {
            _time_update: time_update,
            _error: error,
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn attaching_mutes_the_video() {
        let document = web_sys::window().unwrap().document().unwrap();
        let video: HtmlVideoElement = document.create_element("video").unwrap().unchecked_into();
        let looping = LoopingVideo::attach(&video, LoopPolicy::new(0.1));
        assert!(video.muted());
        drop(looping);
    }
}
