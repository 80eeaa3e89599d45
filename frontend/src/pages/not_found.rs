use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::use_title;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    debug!("Activating fallback page for unknown location");
    use_title(config::page_title("Page Not Found"));

    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"Sorry, the page you were looking for doesn't exist or has been moved."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the home page"}
            </Link<Route>>
            <style>
                {r#"
.not-found-page {
    min-height: 100vh;
    padding: 74px 2rem 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    color: #ffffff;
    background: #1a1a1a;
}

.not-found-page h1 {
    font-size: 6rem;
    margin-bottom: 1rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.not-found-page p {
    color: #999;
    font-size: 1.2rem;
    margin-bottom: 2rem;
}

.not-found-link {
    color: #7EB2FF;
    text-decoration: none;
    border-bottom: 1px solid rgba(126, 178, 255, 0.4);
    padding-bottom: 2px;
}

.not-found-link:hover {
    border-bottom-color: #7EB2FF;
}
                "#}
            </style>
        </div>
    }
}
