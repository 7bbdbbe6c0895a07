use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::use_site_config;
use crate::Route;

#[function_component(Imprint)]
pub fn imprint() -> Html {
    let config = use_site_config();

    html! {
        <main class="legal-page">
            <h1>{"Imprint"}</h1>
            <section>
                <h2>{"Information according to § 5 DDG"}</h2>
                <p>
                    {&config.business_name}<br />
                    {"Musterstraße 1"}<br />
                    {"39104 Magdeburg"}
                </p>
            </section>
            <section>
                <h2>{"Contact"}</h2>
                <p>
                    {"Phone: "}<span id="impPhone">{&config.phone_display}</span><br />
                    {"Email: "}<span id="impMail">{&config.email}</span>
                </p>
            </section>
        </main>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="legal-page">
            <h1>{"Page not found"}</h1>
            <p>
                {"This page does not exist. "}
                <Link<Route> to={Route::Home}>{"Back to the start page"}</Link<Route>>
            </p>
        </main>
    }
}
