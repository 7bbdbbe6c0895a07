use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::reveal::Reveal;
use crate::config::use_site_config;
use crate::lead::FormVariant;
use crate::links;

#[function_component(Contact)]
pub fn contact() -> Html {
    let config = use_site_config();

    html! {
        <main class="contact-page">
            <Reveal class="contact-header">
                <h1>{"Contact"}</h1>
                <p>{"Call, message or write to us. Or leave your details and we get back to you."}</p>
            </Reveal>

            <Reveal class="contact-ctas">
                <a id="ctaCall" class="btn btn-primary" href={links::tel(&config)}>
                    {format!("Call {}", config.phone_display)}
                </a>
                <a id="ctaWA" class="btn btn-whatsapp" href={links::whatsapp(&config)} target="_blank" rel="noopener">
                    {"WhatsApp"}
                </a>
                <a id="ctaMail" class="btn btn-secondary" href={links::general_mail(&config)}>
                    {"Email"}
                </a>
            </Reveal>

            <section class="request">
                <h2>{"Contact form"}</h2>
                <LeadForm variant={FormVariant::Contact} />
            </section>
        </main>
    }
}
