use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::components::anchor_link::AnchorLink;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::reveal::{Motion, Reveal};
use crate::config::ViewConfig;
use crate::content::{
    certification_line, stagger_ms, CertificationLine, CERTIFICATIONS, COMPANY_NAME,
    CONTACT_PHONE, MICROBIOLOGY, MINERALS, NUTRITION, PROCESS_STEPS, PRODUCTS,
};
use crate::hooks::use_page_view;
use crate::view::nav::Anchor;
use crate::view::revealed::RevealedSet;
use crate::view::scroll::parallax_transform;

const PAGE_CSS: &str = r#"
    :root {
        --primary: #0e7490;
        --primary-foreground: #ffffff;
        --background: #ffffff;
        --foreground: #0f172a;
        --muted: #f1f5f9;
        --muted-foreground: #64748b;
        --card: #ffffff;
        --border: #e2e8f0;
    }
    .landing-page {
        min-height: 100vh;
        color: var(--foreground);
        background: var(--background);
    }
    .landing-page a {
        color: inherit;
        text-decoration: none;
    }
    .section {
        padding: 5rem 1rem;
    }
    .section.muted {
        background: var(--muted);
    }
    .section-inner {
        max-width: 72rem;
        margin: 0 auto;
    }
    .section-inner.narrow {
        max-width: 56rem;
    }
    .section-title {
        font-size: 2.25rem;
        font-weight: 700;
        text-align: center;
        margin-bottom: 3rem;
    }
    .card {
        background: var(--card);
        padding: 2rem;
        border-radius: 0.75rem;
        border: 1px solid var(--border);
        transition: box-shadow 0.3s, transform 0.3s;
    }
    .card:hover {
        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.12);
    }
    .card.primary {
        background: var(--primary);
        color: var(--primary-foreground);
        border: none;
    }
    .card h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .accent {
        color: var(--primary);
    }
    .grid-2,
    .grid-3,
    .grid-4 {
        display: grid;
        gap: 2rem;
    }
    .prose p {
        font-size: 1.125rem;
        line-height: 1.75;
        margin-bottom: 1.5rem;
    }

    /* reveal-on-scroll */
    .reveal {
        transition: opacity 1s, transform 1s;
    }
    .reveal-up:not(.revealed) {
        opacity: 0;
        transform: translateY(2.5rem);
    }
    .reveal-left:not(.revealed) {
        opacity: 0;
        transform: translateX(-2.5rem);
    }
    .reveal-right:not(.revealed) {
        opacity: 0;
        transform: translateX(2.5rem);
    }
    .reveal-scale:not(.revealed) {
        opacity: 0;
        transform: scale(0.95);
    }

    .ocean-image img {
        width: 100%;
        border-radius: 0.75rem;
        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.15);
    }
    .highlight-box {
        margin-top: 2rem;
        padding: 1.5rem;
        border-radius: 0.75rem;
        background: rgba(14, 116, 144, 0.1);
        text-align: center;
        font-size: 1.25rem;
        font-weight: 700;
        color: var(--primary);
    }
    .step-number {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1rem;
        border-radius: 9999px;
        background: var(--primary);
        color: var(--primary-foreground);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.5rem;
        font-weight: 700;
        transition: transform 0.7s;
    }
    .detail-list {
        list-style: none;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .detail-list li {
        display: flex;
        justify-content: space-between;
        transition: transform 0.3s;
    }
    .detail-list li:hover {
        transform: translateX(0.5rem);
    }
    .badge {
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: #dcfce7;
        color: #166534;
        font-size: 0.875rem;
        font-weight: 600;
    }
    .mineral-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1rem;
        text-align: center;
    }
    .mineral-chip {
        padding: 0.75rem;
        border-radius: 0.5rem;
        background: rgba(255, 255, 255, 0.1);
        animation: fade-in 0.5s ease-out both;
    }
    .cert-row {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
        margin-bottom: 1.5rem;
        animation: fade-in 0.5s ease-out both;
    }
    .cert-check {
        flex-shrink: 0;
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        background: var(--primary);
        color: var(--primary-foreground);
        display: flex;
        align-items: center;
        justify-content: center;
        margin-top: 0.25rem;
        transition: transform 0.7s;
    }
    .step-number:hover,
    .cert-check:hover {
        transform: rotate(360deg);
    }
    .cta-title {
        animation: pulse-slow 3s ease-in-out infinite;
    }
    .product-image {
        aspect-ratio: 1 / 1;
        border-radius: 0.5rem;
        margin-bottom: 1rem;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(135deg, rgba(103, 232, 249, 0.2), rgba(14, 116, 144, 0.2));
    }
    .product-image img {
        width: 100%;
        height: 100%;
        object-fit: contain;
        padding: 1rem;
        transition: transform 0.5s;
    }
    .product-image:hover img {
        transform: scale(1.1);
    }
    .product-meta {
        font-size: 0.875rem;
        color: var(--muted-foreground);
    }
    .cta-section {
        background: linear-gradient(135deg, var(--primary), rgba(14, 116, 144, 0.8));
        color: var(--primary-foreground);
        text-align: center;
    }
    .cta-button {
        display: inline-block;
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        background: #fff;
        color: var(--primary) !important;
        font-weight: 600;
        transition: all 0.3s;
    }
    .cta-button:hover {
        transform: scale(1.1);
    }
    .contact-line {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        font-size: 1.125rem;
    }
    .contact-line svg {
        width: 1.5rem;
        height: 1.5rem;
        color: var(--primary);
    }
    .site-footer {
        background: var(--primary);
        color: var(--primary-foreground);
        padding: 3rem 1rem;
    }
    .footer-grid {
        max-width: 72rem;
        margin: 0 auto 2rem;
        display: grid;
        gap: 2rem;
    }
    .footer-list {
        list-style: none;
        padding: 0;
        font-size: 0.875rem;
    }
    .footer-list li {
        margin-bottom: 0.5rem;
    }
    .footer-muted {
        opacity: 0.9;
    }
    .footer-bottom {
        border-top: 1px solid rgba(255, 255, 255, 0.2);
        padding-top: 2rem;
        text-align: center;
        font-size: 0.875rem;
        opacity: 0.8;
    }

    @keyframes fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes pulse-slow {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.8; }
    }
    @keyframes slide-up {
        from { opacity: 0; transform: translateY(1.5rem); }
        to { opacity: 1; transform: translateY(0); }
    }

    @media (min-width: 768px) {
        .section-title {
            font-size: 3rem;
        }
        .grid-2 {
            grid-template-columns: repeat(2, 1fr);
        }
        .grid-3,
        .footer-grid {
            grid-template-columns: repeat(3, 1fr);
        }
        .grid-4 {
            grid-template-columns: repeat(2, 1fr);
        }
        .mineral-grid {
            grid-template-columns: repeat(4, 1fr);
        }
    }
    @media (min-width: 1024px) {
        .grid-4 {
            grid-template-columns: repeat(4, 1fr);
        }
        .mineral-grid {
            grid-template-columns: repeat(6, 1fr);
        }
    }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_context::<ViewConfig>().unwrap_or_default();
    let view = use_page_view(&config);
    let state = &*view.state;
    let parallax = parallax_transform(state.scroll, config.parallax_factor());

    html! {
        <div class="landing-page">
            <style>{PAGE_CSS}</style>
            <Header menu={state.menu} on_toggle={view.toggle_menu.clone()} on_navigate={view.navigate.clone()} />
            <Hero
                parallax={AttrValue::from(parallax)}
                video_ref={view.video_ref.clone()}
                video_src={config.video_src()}
                on_navigate={view.navigate.clone()}
            />
            <ContextProvider<Rc<RevealedSet>> context={state.revealed.clone()}>
                <Sections on_navigate={view.navigate.clone()} />
            </ContextProvider<Rc<RevealedSet>>>
            <Footer on_navigate={view.navigate.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionsProps {
    on_navigate: Callback<(MouseEvent, Anchor)>,
}

/// Everything between the hero and the footer. Its props only change with
/// the navigate callback, so scrolling does not re-render it.
#[function_component(Sections)]
fn sections(props: &SectionsProps) -> Html {
    html! {
        <>
            { about_section() }
            { mission_section() }
            { benefits_section() }
            { product_concept_section() }
            { process_section() }
            { composition_section() }
            { certifications_section() }
            { products_section() }
            { cta_section(&props.on_navigate) }
            { contact_section() }
        </>
    }
}

fn about_section() -> Html {
    html! {
        <section id="sobre" class="section">
            <Reveal id="about-content" class={classes!("section-inner", "narrow")}>
                <h2 class="section-title">{"Pioneirismo e Inovação"}</h2>
                <div class="prose">
                    <p>
                        {"A "}<strong>{"One"}</strong>{" é uma empresa 100% brasileira, pioneira no desenvolvimento de tecnologias revolucionárias no segmento de produtos saudáveis. Nossa missão é proporcionar bem-estar excepcional e qualidade de vida superior através da inovação científica."}
                    </p>
                    <p>
                        {"Após 12 anos de pesquisas intensivas e investimentos estratégicos dedicados ao controle preciso de minerais em água dessalinizada, desenvolvemos uma tecnologia avançada e exclusiva para a purificação da água do mar. Nosso processo utiliza o princípio da nanotecnologia de última geração, associado ao conceito milenar de thalassoterapia."}
                    </p>
                    <p>
                        {"Esta tecnologia inovadora estabelece um novo paradigma para o segmento de água potável e produtos saudáveis, posicionando a One como referência em inovação e excelência no mercado nacional e internacional."}
                    </p>
                </div>
            </Reveal>
        </section>
    }
}

fn mission_section() -> Html {
    html! {
        <section class="section muted">
            <div class={classes!("section-inner", "grid-2")}>
                <Reveal id="mission-card-1" motion={Motion::FromLeft} class={classes!("card")}>
                    <h3 class="accent">{"Nossa Missão"}</h3>
                    <p>
                        {"Ser a empresa de referência absoluta no desenvolvimento de produtos saudáveis, oferecendo benefícios incomparáveis à saúde e ao bem-estar de nossos consumidores. Comprometemo-nos com credibilidade inabalável, padrão de qualidade excepcional, tecnologia inovadora de ponta e segurança total em cada produto."}
                    </p>
                </Reveal>
                <Reveal id="mission-card-2" motion={Motion::FromRight} class={classes!("card")} delay_ms={200}>
                    <h3 class="accent">{"Compromisso Socioambiental"}</h3>
                    <p>
                        {"A One defende e pratica ativamente o conceito de responsabilidade socioambiental, estimulando o respeito profundo ao meio ambiente e valorizando iniciativas ligadas à qualidade de vida sustentável. Conscientes de nosso compromisso com o planeta, investimos continuamente em tecnologias e práticas sustentáveis, utilizando insumos 100% recicláveis e processos que não exploram recursos hídricos de água doce."}
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

fn benefits_section() -> Html {
    html! {
        <section id="beneficios" class="section">
            <div class="section-inner">
                <Reveal id="benefits-title" tag="h2" class={classes!("section-title")}>
                    {"O Oceano e Suas Riquezas Naturais"}
                </Reveal>
                <div class="grid-2">
                    <Reveal id="ocean-image" motion={Motion::Scale} class={classes!("ocean-image")}>
                        <img src="/bixo-na-agua.jpg" alt="Vida marinha" loading="lazy" />
                    </Reveal>
                    <Reveal id="ocean-text" motion={Motion::FromRight} class={classes!("prose")} delay_ms={300}>
                        <p>
                            {"Para cientistas e pesquisadores renomados mundialmente, o oceano é considerado o berço primordial de toda a vida na Terra. A água marinha contém naturalmente pelo menos "}
                            <strong>{"86 minerais essenciais"}</strong>
                            {" e uma diversidade extraordinária de nutrientes, criando um ecossistema único e propício para a imensa biodiversidade encontrada neste sistema complexo e fascinante."}
                        </p>
                    </Reveal>
                </div>
                <Reveal id="thalasso-card" class={classes!("card", "primary", "prose")}>
                    <h3>{"THALASSOTERAPIA — O Oceano Como Fonte de Cura"}</h3>
                    <p>
                        {"Os benefícios terapêuticos das águas marinhas são aplicados há milênios em tratamentos como a Thalassoterapia, termo derivado do grego \"Thalasso\" (mar) e \"Therapia\" (cura). Este método natural, conhecido e reverenciado desde a Antiguidade, foi utilizado por civilizações gregas e romanas para diversos tratamentos medicinais e de bem-estar."}
                    </p>
                    <p>
                        {"A terapia consiste em utilizar as virtudes curativas excepcionais dos elementos marinhos para reequilibrar o organismo vivo de forma holística: estimulando a eliminação eficiente de toxinas, reestruturando o sistema celular, favorecendo a metabolização de gorduras e promovendo a hidratação profunda da pele através da ação benéfica das algas e minerais marinhos."}
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

fn product_concept_section() -> Html {
    html! {
        <section class="section">
            <div class={classes!("section-inner", "narrow")}>
                <Reveal id="aqua-title" tag="h2" motion={Motion::Scale} class={classes!("section-title")}>
                    {"One - Água super premium"}
                </Reveal>
                <Reveal id="aqua-card" class={classes!("card", "prose")}>
                    <p>
                        {"A "}<strong>{"One"}</strong>{" representa uma revolução no conceito de hidratação premium. Trata-se de uma água extraordinariamente rica em oligoelementos essenciais que o corpo humano necessita em doses precisas diárias, incluindo ferro, cobalto, lítio, manganês, selênio, zinco, fósforo e vanádio, entre muitos outros."}
                    </p>
                    <p>
                        {"Com o objetivo de preservar integralmente as propriedades benéficas das águas marinhas e auxiliar o organismo na missão vital de manter-se equilibrado e saudável, a fórmula exclusiva da One conseguiu manter mais de 60 destes minerais preciosos em estrutura de oligoelementos — ou seja, em concentrações inferiores a 0,002 mg/L — através do princípio revolucionário da nanotecnologia associado ao conceito milenar de thalassoterapia."}
                    </p>
                    <div class="highlight-box">{"DIFERENCIAL EXCLUSIVO: 63 Minerais Naturais"}</div>
                </Reveal>
                <p class="prose">
                    {"A diversidade excepcional e a quantidade precisa destes oligoelementos representam o grande diferencial competitivo entre a One e as demais águas disponíveis no mercado, que oferecem, em média, apenas 12 minerais."}
                </p>
            </div>
        </section>
    }
}

fn process_section() -> Html {
    html! {
        <section id="processo" class="section muted">
            <div class="section-inner">
                <Reveal id="process-title" tag="h2" class={classes!("section-title")}>
                    {"Processo de Purificação Avançada"}
                </Reveal>
                <div class="grid-3">
                    { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                        <Reveal key={step.id} id={step.id} class={classes!("card")} delay_ms={stagger_ms(index, 200)}>
                            <div class="step-number">{step.number.to_string()}</div>
                            <h3>{step.title}</h3>
                            <p>{step.text}</p>
                        </Reveal>
                    }) }
                </div>
                <Reveal id="process-info" class={classes!("card", "prose")}>
                    <p>
                        {"Nenhum tipo de substância química é adicionado durante o processo de purificação. O resultado é uma água com qualidade premium de consumo, rigorosamente dentro dos padrões internacionais mais exigentes estabelecidos pela Organização Mundial da Saúde (OMS)."}
                    </p>
                    <p>
                        {"A água é purificada e processada em nossa usina de tratamento própria e exclusiva, estrategicamente localizada em "}
                        <strong>{"Bertioga, litoral norte de São Paulo"}</strong>
                        {", garantindo controle total de qualidade em todas as etapas do processo."}
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

fn composition_section() -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <Reveal id="composition-title" tag="h2" class={classes!("section-title")}>
                    {"Composição Físico-Química Premium"}
                </Reveal>
                <div class="grid-2">
                    <Reveal id="composition-card-1" motion={Motion::FromLeft} class={classes!("card")}>
                        <h3 class="accent">{"Características Nutricionais"}</h3>
                        <ul class="detail-list">
                            { for NUTRITION.iter().map(|row| html! {
                                <li key={row.label}>
                                    <span>{row.label}</span>
                                    <strong>{row.value}</strong>
                                </li>
                            }) }
                        </ul>
                    </Reveal>
                    <Reveal id="composition-card-2" motion={Motion::FromRight} class={classes!("card")}>
                        <h3 class="accent">{"Análise Microbiológica"}</h3>
                        <ul class="detail-list">
                            { for MICROBIOLOGY.iter().map(|row| html! {
                                <li key={row.label}>
                                    <span>{row.label}</span>
                                    <span class="badge">{row.value}</span>
                                </li>
                            }) }
                        </ul>
                    </Reveal>
                </div>
                <Reveal id="minerals-card" motion={Motion::Scale} class={classes!("card", "primary")}>
                    <h3>{"Minerais Naturais Presentes na One"}</h3>
                    <div class="mineral-grid">
                        { for MINERALS.iter().enumerate().map(|(index, mineral)| html! {
                            <div
                                key={*mineral}
                                class="mineral-chip"
                                style={format!("animation-delay: {}ms;", stagger_ms(index, 20))}
                            >
                                {*mineral}
                            </div>
                        }) }
                    </div>
                    <p class="footer-muted">
                        {"Todos os oligoelementos relacionados estão presentes em frações inferiores a 0,002 mg/L, rigorosamente dentro dos padrões internacionais estabelecidos pela OMS — Organização Mundial da Saúde."}
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

fn certification_row(text: &'static str) -> Html {
    match certification_line(text) {
        CertificationLine::Plain(text) => html! { {text} },
        CertificationLine::Cited { lead, rest } => html! {
            <>
                <strong>{lead}</strong>
                if let Some(rest) = rest {
                    {format!(" — {}", rest)}
                }
            </>
        },
    }
}

fn certifications_section() -> Html {
    html! {
        <section class="section muted">
            <div class={classes!("section-inner", "narrow")}>
                <Reveal id="cert-title" tag="h2" class={classes!("section-title")}>
                    {"Certificações e Padrões Internacionais"}
                </Reveal>
                <Reveal id="cert-card" class={classes!("card")}>
                    { for CERTIFICATIONS.iter().enumerate().map(|(index, text)| html! {
                        <div key={index} class="cert-row" style={format!("animation-delay: {}ms;", stagger_ms(index, 100))}>
                            <div class="cert-check">{"✓"}</div>
                            <p>{ certification_row(*text) }</p>
                        </div>
                    }) }
                </Reveal>
            </div>
        </section>
    }
}

fn products_section() -> Html {
    html! {
        <section id="produtos" class="section">
            <div class="section-inner">
                <Reveal id="products-title" tag="h2" class={classes!("section-title")}>
                    {"Linha Premium de Produtos"}
                </Reveal>
                <div class="grid-4">
                    { for PRODUCTS.iter().enumerate().map(|(index, product)| html! {
                        <Reveal key={product.id} id={product.id} class={classes!("card")} delay_ms={stagger_ms(index, 150)}>
                            <div class="product-image">
                                <img src={product.image} alt={product.title} loading="lazy" />
                            </div>
                            <h3>{product.title}</h3>
                            <div class="product-meta">
                                <p>{product.pack}</p>
                                <p>{format!("Dimensões: {}", product.size)}</p>
                                <p>{format!("Peso: {}", product.weight)}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn cta_section(on_navigate: &Callback<(MouseEvent, Anchor)>) -> Html {
    html! {
        <Reveal id="cta-section" tag="section" motion={Motion::Scale} class={classes!("section", "cta-section")}>
            <div class={classes!("section-inner", "narrow")}>
                <h2 class={classes!("section-title", "cta-title")}>{"Experimente a Excelência da One"}</h2>
                <p class="prose">
                    {"Descubra a diferença incomparável de uma água premium enriquecida com mais de 63 minerais naturais do oceano."}
                </p>
                if let Some(anchor) = Anchor::parse("#contato") {
                    <AnchorLink anchor={anchor} on_navigate={on_navigate.clone()} class={classes!("cta-button")}>
                        {"Solicite Informações"}
                    </AnchorLink>
                }
            </div>
        </Reveal>
    }
}

fn contact_section() -> Html {
    html! {
        <section id="contato" class="section">
            <div class={classes!("section-inner", "narrow")}>
                <Reveal id="contact-title" tag="h2" class={classes!("section-title")}>
                    {"Entre em Contato"}
                </Reveal>
                <Reveal id="contact-card" class={classes!("card")}>
                    <h3>{COMPANY_NAME}</h3>
                    <div class="contact-line">
                        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"
                            />
                        </svg>
                        <span>{CONTACT_PHONE}</span>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_css_defines_cta_pulse_and_check_spin() {
        assert!(PAGE_CSS.contains("@keyframes pulse-slow"));
        assert!(PAGE_CSS.contains("animation: pulse-slow"));
        assert!(PAGE_CSS.contains(".cert-check:hover"));
        assert!(PAGE_CSS.contains("rotate(360deg)"));
    }
}
