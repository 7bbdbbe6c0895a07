use std::rc::Rc;

use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod lead;
mod links;
mod theme;

mod components {
    pub mod footer;
    pub mod lead_form;
    pub mod nav;
    pub mod notice;
    pub mod reveal;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod imprint;
}

use components::{footer::Footer, nav::Nav};
use config::SiteConfig;
use pages::{
    contact::Contact,
    home::Home,
    imprint::{Imprint, NotFound},
};
use theme::{apply_theme, load_theme, toggle_theme, LocalStorage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[at("/imprint")]
    Imprint,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Imprint => {
            info!("Rendering Imprint page");
            html! { <Imprint /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    // Read once; every toggle writes it back.
    let theme = use_state(|| load_theme(&LocalStorage));

    use_effect_with_deps(
        move |theme| {
            apply_theme(*theme);
            || ()
        },
        *theme,
    );

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            theme.set(toggle_theme(&LocalStorage, *theme));
        })
    };

    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <BrowserRouter>
                <style>
                    {r#"
                    :root { --bg: #ffffff; --fg: #1b2530; --accent: #1f8a70; --card: #f3f6f8; }
                    :root[data-theme="dark"] { --bg: #11171d; --fg: #e8eef3; --accent: #43c59e; --card: #1b242d; }
                    body { background: var(--bg); color: var(--fg); margin: 0; font-family: system-ui, sans-serif; }
                    .top-nav { position: sticky; top: 0; background: var(--bg); z-index: 10; }
                    .nav-content { display: flex; align-items: center; gap: 1rem; padding: 1rem 1.5rem; }
                    .nav-right { display: flex; gap: 1rem; margin-left: auto; }
                    .burger-menu { display: none; background: none; border: 0; }
                    .burger-menu span { display: block; width: 22px; height: 2px; margin: 4px 0; background: var(--fg); }
                    .mobile-nav { padding: 0 1.5rem 1rem; }
                    .card-grid { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
                    .card, .step { background: var(--card); border-radius: 12px; padding: 1.25rem; }
                    .reveal { opacity: 0; transform: translateY(16px); transition: opacity .6s ease, transform .6s ease; }
                    .reveal.is-visible { opacity: 1; transform: none; }
                    .success-message { color: var(--accent); margin-bottom: 1rem; }
                    .lead-form .form-row { display: flex; flex-direction: column; margin-bottom: .75rem; }
                    .btn[disabled] { opacity: .6; cursor: wait; }
                    @media (max-width: 768px) {
                        .nav-right { display: none; }
                        .burger-menu { display: block; margin-left: auto; }
                    }
                    @media (min-width: 769px) {
                        .mobile-nav { display: none; }
                    }
                    "#}
                </style>
                <Nav theme={*theme} on_toggle_theme={on_toggle_theme} />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    let config = SiteConfig::load();
    info!("Starting PrimaClean site");
    #[cfg(debug_assertions)]
    info!("{}", config::describe_delivery(&config));

    yew::Renderer::<App>::with_props(AppProps {
        config: config.into_shared(),
    })
    .render();
}
