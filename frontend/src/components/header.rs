use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::view::menu::MenuState;
use crate::view::nav::{Anchor, NAV_LINKS};

const HEADER_CSS: &str = r#"
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(4px);
        border-bottom: 1px solid var(--border);
    }
    .site-nav {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0.75rem 1rem;
    }
    .site-nav-row {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .brand {
        font-size: 1.5rem;
        font-weight: 700;
        letter-spacing: -0.02em;
        color: var(--primary);
        transition: transform 0.3s;
    }
    .brand:hover {
        transform: scale(1.05);
    }
    .desktop-links {
        display: none;
        gap: 2rem;
    }
    .desktop-links a {
        white-space: nowrap;
        transition: all 0.3s;
    }
    .desktop-links a:hover {
        color: var(--primary);
        transform: translateY(-2px);
    }
    .menu-button {
        background: none;
        border: none;
        padding: 0.5rem;
        color: var(--foreground);
        cursor: pointer;
        transition: transform 0.3s;
    }
    .menu-button:hover {
        transform: scale(1.1);
    }
    .menu-button svg {
        width: 1.5rem;
        height: 1.5rem;
    }
    .mobile-drawer {
        overflow: hidden;
        max-height: 0;
        opacity: 0;
        transition: all 0.3s ease-in-out;
    }
    .mobile-drawer.open {
        max-height: 20rem;
        opacity: 1;
        margin-top: 1rem;
    }
    .mobile-drawer-links {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        padding: 1rem 0;
        border-top: 1px solid var(--border);
    }
    .mobile-drawer-links a {
        padding: 0.5rem 1rem;
        border-radius: 0.375rem;
        transition: all 0.3s;
    }
    .mobile-drawer-links a:hover {
        color: var(--primary);
        background: rgba(14, 116, 144, 0.1);
    }
    @media (min-width: 768px) {
        .desktop-links {
            display: flex;
        }
        .menu-button,
        .mobile-drawer {
            display: none;
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu: MenuState,
    pub on_toggle: Callback<MouseEvent>,
    pub on_navigate: Callback<(MouseEvent, Anchor)>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|link| {
                html! {
                    <AnchorLink key={link.target} anchor={link.anchor()} on_navigate={props.on_navigate.clone()} class={classes!(class)}>
                        {link.label}
                    </AnchorLink>
                }
            })
            .collect()
    };

    html! {
        <header class="site-header">
            <style>{HEADER_CSS}</style>
            <nav class="site-nav">
                <div class="site-nav-row">
                    <div class="brand">{"ONE Water"}</div>
                    <div class="desktop-links">
                        { links("desktop-link") }
                    </div>
                    <button class="menu-button" onclick={props.on_toggle.clone()} aria-label="Toggle menu">
                        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={props.menu.icon_path()} />
                        </svg>
                    </button>
                </div>
                <div class={props.menu.drawer_class()}>
                    <div class="mobile-drawer-links">
                        { links("drawer-link") }
                    </div>
                </div>
            </nav>
        </header>
    }
}
