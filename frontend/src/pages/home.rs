use yew::prelude::*;
use yew_hooks::prelude::use_title;
use yew_router::prelude::*;

use crate::config::{self, SITE_NAME};
use crate::content::PAGES;
use crate::Route;

/// Index of every registered content page.
#[function_component(Home)]
pub fn home() -> Html {
    use_title(SITE_NAME.to_string());

    html! {
        <div class="home-page">
            <section class="home-hero">
                <h1>{SITE_NAME}</h1>
                <p>{"Data and automation solutions for the industries that keep the world running."}</p>
            </section>

            <section class="solutions">
                <h2>{"Our Solutions"}</h2>
                <div class="solutions-grid">
                    {
                        for PAGES.iter().map(|page| html! {
                            <Link<Route>
                                to={Route::Solution { slug: page.slug.to_string() }}
                                classes="solution-link"
                            >
                                <div class="solution-item">
                                    <h3>{page.hero.title}</h3>
                                    <p>{page.hero.subtitle}</p>
                                </div>
                            </Link<Route>>
                        })
                    }
                </div>
            </section>

            <section class="home-contact">
                <p>
                    {"Not sure where to start? Write to us at "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </p>
            </section>

            <style>
                {r#"
.home-page {
    padding-top: 74px;
    min-height: 100vh;
    color: #ffffff;
    background: #1a1a1a;
}

.home-hero {
    text-align: center;
    padding: 6rem 2rem 4rem;
}

.home-hero h1 {
    font-size: 3.5rem;
    margin-bottom: 1.5rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.home-hero p {
    color: #999;
    font-size: 1.25rem;
}

.solutions {
    max-width: 1000px;
    margin: 0 auto;
    padding: 2rem;
    text-align: center;
}

.solutions-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 2rem;
    margin-top: 2rem;
}

.solution-link {
    text-decoration: none;
    color: inherit;
}

.solution-item {
    height: 100%;
    padding: 2rem;
    background: rgba(30, 30, 30, 0.7);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 16px;
    transition: transform 0.3s ease, border-color 0.3s ease;
}

.solution-item:hover {
    transform: translateY(-5px);
    border-color: rgba(30, 144, 255, 0.3);
}

.solution-item p {
    color: #999;
    line-height: 1.6;
}

.home-contact {
    text-align: center;
    padding: 4rem 2rem;
    color: #999;
}

.home-contact a {
    color: #7EB2FF;
}
                "#}
            </style>
        </div>
    }
}
