use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, info};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod layout;
mod components {
    pub mod card;
    pub mod content_page;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::content_page::ContentPage;
use content::{PageContent, PAGES};
use pages::{home::Home, not_found::NotFound};


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/solutions/:slug")]
    Solution { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// What a matched route ends up rendering.
#[derive(Debug, PartialEq)]
enum View {
    Home,
    Content(&'static PageContent),
    NotFound,
}

fn resolve(route: &Route) -> View {
    match route {
        Route::Home => View::Home,
        Route::Solution { slug } => match content::find(slug) {
            Some(page) => View::Content(page),
            None => {
                debug!("No content page registered for slug {:?}", slug);
                View::NotFound
            }
        },
        Route::NotFound => View::NotFound,
    }
}

fn switch(route: Route) -> Html {
    match resolve(&route) {
        View::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        View::Content(page) => {
            info!("Rendering {} page", page.hero.title);
            html! { <ContentPage page={page} /> }
        },
        View::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = window().map(|window| {
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_scroll_top().unwrap_or(0);
                    is_scrolled.set(scroll_top > config::NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::SITE_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for PAGES.iter().map(|page| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route>
                                    to={Route::Solution { slug: page.slug.to_string() }}
                                    classes="nav-link"
                                >
                                    {page.nav_label}
                                </Link<Route>>
                            </div>
                        })
                    }
                    <a class="nav-contact-button" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                        {"Contact"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    padding: 1rem 2rem;
    background: transparent;
    transition: background 0.3s ease;
}

.top-nav.scrolled {
    background: rgba(26, 26, 26, 0.95);
    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
}

.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    font-size: 1.5rem;
    font-weight: 600;
    color: #ffffff;
    text-decoration: none;
}

.nav-right {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.nav-link {
    color: #ffffff;
    text-decoration: none;
    opacity: 0.8;
}

.nav-link:hover {
    opacity: 1;
}

.nav-contact-button {
    padding: 0.5rem 1.25rem;
    border: 1px solid #7EB2FF;
    border-radius: 8px;
    color: #7EB2FF;
    text-decoration: none;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}

.burger-menu span {
    width: 24px;
    height: 2px;
    background: #ffffff;
}

@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }

    .nav-right {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        padding: 1.5rem;
        background: rgba(26, 26, 26, 0.98);
    }

    .nav-right.mobile-menu-open {
        display: flex;
    }
}
                "#}
            </style>
        </nav>
    }
}

fn window_scroll_top() -> Option<i32> {
    let element = window()?.document()?.document_element()?;
    Some(element.scroll_top())
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{big_data_analytics, manufacturing};

    #[test]
    fn test_registered_slug_resolves_to_content_page() {
        let route = Route::Solution { slug: "manufacturing".to_string() };
        assert_eq!(resolve(&route), View::Content(&manufacturing::PAGE));

        let route = Route::Solution { slug: "big-data-analytics".to_string() };
        assert_eq!(resolve(&route), View::Content(&big_data_analytics::PAGE));
    }

    #[test]
    fn test_unknown_slug_falls_back() {
        let route = Route::Solution { slug: "blockchain".to_string() };
        assert_eq!(resolve(&route), View::NotFound);
    }

    #[test]
    fn test_unregistered_path_recognizes_as_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/solutions/manufacturing/extra"), Some(Route::NotFound));
        assert_eq!(resolve(&Route::NotFound), View::NotFound);
    }

    #[test]
    fn test_solution_path_recognizes_slug() {
        assert_eq!(
            Route::recognize("/solutions/big-data-analytics"),
            Some(Route::Solution { slug: "big-data-analytics".to_string() })
        );
    }

    #[test]
    fn test_fallback_link_targets_root() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(resolve(&Route::Home), View::Home);
    }

    #[test]
    fn test_every_registered_page_is_reachable() {
        for page in PAGES {
            let path = Route::Solution { slug: page.slug.to_string() }.to_path();
            let route = Route::recognize(&path).unwrap();
            assert_eq!(resolve(&route), View::Content(*page));
        }
    }
}
