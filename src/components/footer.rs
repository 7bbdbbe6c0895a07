use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::use_site_config;
use crate::links;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_site_config();
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div>
                    <strong>{&config.business_name}</strong>
                    <p>{"Cleaning services in Magdeburg and surroundings"}</p>
                </div>
                <div class="footer-contact">
                    <a href={links::tel(&config)}>{&config.phone_display}</a>
                    <a href={links::general_mail(&config)}>{&config.email}</a>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                    <Link<Route> to={Route::Imprint}>{"Imprint"}</Link<Route>>
                </div>
            </div>
            <p class="footer-copy">
                {"© "}<span id="year">{year.to_string()}</span>{" "}{&config.business_name}
            </p>
        </footer>
    }
}
