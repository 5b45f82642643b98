use std::rc::Rc;

use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::view::revealed::RevealedSet;

/// Hidden-state offset of a reveal-on-scroll element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Up,
    FromLeft,
    FromRight,
    Scale,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::Up => "reveal-up",
            Motion::FromLeft => "reveal-left",
            Motion::FromRight => "reveal-right",
            Motion::Scale => "reveal-scale",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub id: AttrValue,
    #[prop_or(Motion::Up)]
    pub motion: Motion,
    #[prop_or("div")]
    pub tag: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content that fades in the first time it scrolls into view. The
/// element carries `data-animate` so the page's observer picks it up.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    // Without a provider there is nothing to drive the transition: show it.
    let revealed = use_context::<Rc<RevealedSet>>().unwrap_or_else(|| {
        let mut all = RevealedSet::default();
        all.reveal_all();
        Rc::new(all)
    });

    let class = if revealed.is_fail_open() {
        props.class.clone()
    } else {
        classes!(
            "reveal",
            props.motion.class(),
            revealed.is_revealed(props.id.as_str()).then_some("revealed"),
            props.class.clone()
        )
    };
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <@{props.tag} id={props.id.clone()} data-animate="" {class} {style}>
            { for props.children.iter() }
        </@>
    }
}
