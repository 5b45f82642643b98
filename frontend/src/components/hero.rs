use web_sys::MouseEvent;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::components::anchor_link::AnchorLink;
use crate::view::nav::Anchor;

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        padding-top: 5rem;
        background-color: var(--primary);
    }
    .hero-background {
        position: absolute;
        inset: 0;
        z-index: 0;
        transition: transform 0.1s ease-out;
    }
    .hero-video {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(14, 116, 144, 0.8), rgba(14, 116, 144, 0.6), rgba(14, 116, 144, 0.8));
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 1200px;
        padding: 0 1rem;
        text-align: center;
        color: #fff;
        animation: fade-in 1s ease-out both;
    }
    .hero-title {
        font-size: 3rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
        letter-spacing: -0.02em;
        animation: slide-up 0.8s ease-out both;
    }
    .hero-lead {
        font-size: 1.25rem;
        margin: 0 auto 1rem;
        max-width: 48rem;
        animation: slide-up 0.8s ease-out 0.2s both;
    }
    .hero-sub {
        font-size: 1.125rem;
        margin: 0 auto 3rem;
        max-width: 42rem;
        opacity: 0.9;
        animation: slide-up 0.8s ease-out 0.4s both;
    }
    .hero-cta-group {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        justify-content: center;
        animation: slide-up 0.8s ease-out 0.6s both;
    }
    .hero-cta {
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        font-weight: 600;
        transition: all 0.3s;
    }
    .hero-cta:hover {
        transform: scale(1.05);
    }
    .hero-cta.solid {
        background: #fff;
        color: var(--primary);
    }
    .hero-cta.outline {
        border: 2px solid #fff;
        color: #fff;
    }
    @media (min-width: 640px) {
        .hero-cta-group {
            flex-direction: row;
        }
    }
    @media (min-width: 768px) {
        .hero-title {
            font-size: 4.5rem;
        }
        .hero-lead {
            font-size: 1.5rem;
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Transform applied to the background layer.
    pub parallax: AttrValue,
    pub video_ref: NodeRef,
    pub video_src: AttrValue,
    pub on_navigate: Callback<(MouseEvent, Anchor)>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let products = Anchor::parse("#produtos");
    let about = Anchor::parse("#sobre");

    html! {
        <section class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-background" style={format!("transform: {};", props.parallax)}>
                // Native loop stays on as a backstop; the page view rewinds
                // before the end to avoid the seam.
                <video
                    ref={props.video_ref.clone()}
                    class="hero-video"
                    src={props.video_src.clone()}
                    autoplay=true
                    loop=true
                    muted=true
                    playsinline=true
                    preload="auto"
                ></video>
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <h1 class="hero-title">{"DO MAR PARA A GARRAFA"}</h1>
                <p class="hero-lead">{"Um novo conceito em água."}</p>
                <p class="hero-sub">
                    {"Água purificada do oceano, enriquecida com mais de 63 minerais naturais através de nanotecnologia avançada e princípios de thalassoterapia."}
                </p>
                <div class="hero-cta-group">
                    if let Some(anchor) = products {
                        <AnchorLink anchor={anchor} on_navigate={props.on_navigate.clone()} class={classes!("hero-cta", "solid")}>
                            {"Descubra Nossos Produtos"}
                        </AnchorLink>
                    }
                    if let Some(anchor) = about {
                        <AnchorLink anchor={anchor} on_navigate={props.on_navigate.clone()} class={classes!("hero-cta", "outline")}>
                            {"Conheça a Tecnologia"}
                        </AnchorLink>
                    }
                </div>
            </div>
        </section>
    }
}
