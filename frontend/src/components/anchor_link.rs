use web_sys::MouseEvent;
use yew::prelude::*;

use crate::view::nav::Anchor;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub anchor: Anchor,
    pub on_navigate: Callback<(MouseEvent, Anchor)>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link. The href stays a real fragment so the page still works
/// before the wasm bundle has loaded.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let anchor = props.anchor.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| on_navigate.emit((e, anchor.clone())))
    };

    html! {
        <a href={props.anchor.href()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
