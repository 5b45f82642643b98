use web_sys::{js_sys, MouseEvent};
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::content::{COMPANY_NAME, FOOTER_CERTIFICATIONS};
use crate::view::nav::{Anchor, NAV_LINKS};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<(MouseEvent, Anchor)>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{"ONE Water"}</h3>
                    <p class="footer-muted">
                        {"Água premium purificada do oceano, enriquecida com mais de 63 minerais naturais."}
                    </p>
                </div>
                <div>
                    <h4>{"Navegação"}</h4>
                    <ul class="footer-list">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <li key={link.target}>
                                <AnchorLink anchor={link.anchor()} on_navigate={props.on_navigate.clone()} class={classes!("footer-link")}>
                                    {link.label}
                                </AnchorLink>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Certificações Internacionais"}</h4>
                    <ul class="footer-list footer-muted">
                        { for FOOTER_CERTIFICATIONS.iter().map(|cert| html! { <li key={*cert}>{*cert}</li> }) }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {} Todos os direitos reservados.", year, COMPANY_NAME)}</p>
            </div>
        </footer>
    }
}
