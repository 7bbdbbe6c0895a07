use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::theme::Theme;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { theme, on_toggle_theme } = props;
    let menu_open = use_state(|| false);

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

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let theme_label = match theme {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    };

    let links = |on_click: Callback<MouseEvent>| {
        html! {
            <>
                <div onclick={on_click.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                </div>
                <div onclick={on_click.clone()}>
                    <Link<Route> to={Route::Contact} classes="nav-link">{"Contact"}</Link<Route>>
                </div>
                <div onclick={on_click}>
                    <Link<Route> to={Route::Imprint} classes="nav-link">{"Imprint"}</Link<Route>>
                </div>
            </>
        }
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"PrimaClean"}
                </Link<Route>>

                <nav class="nav-right">
                    { links(close_menu.clone()) }
                </nav>

                <button
                    id="themeToggle"
                    class="theme-toggle"
                    type="button"
                    aria-label={theme_label}
                    title={theme_label}
                    onclick={toggle_theme}
                >
                    { if *theme == Theme::Dark { "☀" } else { "☾" } }
                </button>

                <button
                    id="burger"
                    class="burger-menu"
                    type="button"
                    aria-controls="mobileNav"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <nav id="mobileNav" class="mobile-nav" hidden={!*menu_open}>
                { links(close_menu) }
            </nav>
        </header>
    }
}
