use yew::prelude::*;
use yew_hooks::prelude::use_title;

use crate::components::card::Card;
use crate::config;
use crate::content::PageContent;
use crate::layout::{sections, Section};

#[derive(Properties, PartialEq)]
pub struct ContentPageProps {
    pub page: &'static PageContent,
}

fn render_section(section: Section<'static>) -> Html {
    let class = section.kind().class();
    match section {
        Section::Hero(hero) => html! {
            <section class={class} style={format!("background-image: url('{}');", hero.background)}>
                <div class="page-hero-overlay">
                    <h1>{hero.title}</h1>
                    <p class="page-hero-subtitle">{hero.subtitle}</p>
                </div>
            </section>
        },
        Section::Grid { kind, heading, cards } => html! {
            <section class={classes!("card-section", class)}>
                { for heading.map(|heading| html! { <h2>{heading}</h2> }) }
                <div class="card-grid">
                    {
                        for cards.iter().enumerate().map(|(i, item)| html! {
                            <Card key={i.to_string()} item={*item} kind={kind} />
                        })
                    }
                </div>
            </section>
        },
        Section::CallToAction(cta) => html! {
            <section class={class}>
                <h2>{cta.heading}</h2>
                <p>{cta.body}</p>
                <a class="cta-button" href={cta.href()}>{cta.label}</a>
            </section>
        },
    }
}

#[function_component(ContentPage)]
pub fn content_page(props: &ContentPageProps) -> Html {
    let page = props.page;
    use_title(config::page_title(page.hero.title));

    html! {
        <div class="content-page">
            { for sections(page).into_iter().map(render_section) }
            <style>
                {r#"
.content-page {
    padding-top: 74px;
    min-height: 100vh;
    color: #ffffff;
    background: #1a1a1a;
}

.page-hero {
    position: relative;
    min-height: 60vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background-size: cover;
    background-position: center;
    background-repeat: no-repeat;
    text-align: center;
}

.page-hero-overlay {
    padding: 4rem 2rem;
    max-width: 900px;
    background: rgba(26, 26, 26, 0.75);
    backdrop-filter: blur(5px);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 16px;
}

.page-hero h1 {
    font-size: 3.5rem;
    margin-bottom: 1.5rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.page-hero-subtitle {
    font-size: 1.25rem;
    color: #999;
    line-height: 1.6;
}

.card-section {
    max-width: 1200px;
    margin: 0 auto;
    padding: 4rem 2rem;
    text-align: center;
}

.card-section h2 {
    font-size: 2.5rem;
    margin-bottom: 2.5rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 2rem;
}

.card {
    background: rgba(30, 30, 30, 0.7);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 16px;
    padding: 2rem;
    transition: transform 0.3s ease, border-color 0.3s ease;
}

.card:hover {
    transform: translateY(-5px);
    border-color: rgba(30, 144, 255, 0.3);
}

.card-icon {
    font-size: 2rem;
    color: #7EB2FF;
    margin-bottom: 1rem;
}

.stat-card .card-title {
    font-size: 2.5rem;
    color: #7EB2FF;
}

.card-title {
    font-size: 1.3rem;
    margin-bottom: 0.75rem;
}

.card-description {
    color: #999;
    line-height: 1.6;
}

.cta-section {
    text-align: center;
    padding: 5rem 2rem;
    background: linear-gradient(180deg, rgba(26, 26, 26, 0) 0%, rgba(30, 144, 255, 0.1) 100%);
}

.cta-section p {
    color: #999;
    max-width: 600px;
    margin: 1rem auto 2rem;
}

.cta-button {
    display: inline-block;
    padding: 1rem 2.5rem;
    background: linear-gradient(45deg, #1E90FF, #4169E1);
    color: white;
    text-decoration: none;
    border-radius: 8px;
    font-size: 1.1rem;
    transition: opacity 0.3s ease;
}

.cta-button:hover {
    opacity: 0.9;
}

@media (max-width: 768px) {
    .page-hero h1 {
        font-size: 2.5rem;
    }

    .card-section {
        padding: 3rem 1rem;
    }
}
                "#}
            </style>
        </div>
    }
}
