use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::reveal::Reveal;
use crate::config::use_site_config;
use crate::lead::FormVariant;
use crate::links;
use crate::Route;

const SERVICES: &[(&str, &str)] = &[
    ("Apartment cleaning", "Regular or one-off cleaning of flats and houses, kitchen and bathroom included."),
    ("Office cleaning", "Desks, floors, kitchens and sanitary areas, outside your working hours if needed."),
    ("Stairwell cleaning", "Weekly or fortnightly care of stairwells and entrance areas for landlords and owners."),
    ("Window cleaning", "Streak-free windows, frames and sills for private and commercial clients."),
];

const STEPS: &[(&str, &str)] = &[
    ("1. Send a request", "Tell us what needs cleaning and how often."),
    ("2. Get an offer", "We call you back and agree on a fixed price."),
    ("3. Lean back", "Our team arrives on the agreed date."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_site_config();

    html! {
        <main class="home-page">
            <section class="hero">
                <Reveal class="hero-content">
                    <h1>{"Clean spaces, no hassle."}</h1>
                    <p>{"Reliable cleaning for homes, offices and stairwells in Magdeburg."}</p>
                    <div class="hero-actions">
                        <a href="#request" class="btn btn-primary">{"Request a quote"}</a>
                        <Link<Route> to={Route::Contact} classes="btn btn-secondary">{"Contact us"}</Link<Route>>
                    </div>
                </Reveal>
            </section>

            <section class="services">
                <h2>{"What we do"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|(title, text)| html! {
                        <Reveal class="card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="process">
                <h2>{"How it works"}</h2>
                <div class="card-grid">
                    { for STEPS.iter().map(|(title, text)| html! {
                        <Reveal class="step">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="request" class="request">
                <Reveal class="request-intro">
                    <h2>{"Request a cleaning"}</h2>
                    <p>{"Fields marked with * are required. We usually answer within one working day."}</p>
                    <a id="waQuick" class="btn btn-whatsapp" href={links::whatsapp(&config)} target="_blank" rel="noopener">
                        {"Prefer WhatsApp? Write to us"}
                    </a>
                </Reveal>
                <LeadForm variant={FormVariant::Home} />
            </section>
        </main>
    }
}
