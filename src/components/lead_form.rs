use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlFormElement, Node};
use yew::prelude::*;

use crate::components::notice::Notice;
use crate::config::use_site_config;
use crate::lead::dispatcher::dispatch;
use crate::lead::transport::HttpTransport;
use crate::lead::{prepare_lead, DispatchSurface, FormVariant, LeadFields};

const SERVICES: &[&str] = &[
    "Apartment cleaning",
    "Office cleaning",
    "Stairwell cleaning",
    "Window cleaning",
    "Move-out cleaning",
];

const FREQUENCIES: &[&str] = &["One-time", "Weekly", "Every two weeks", "Monthly"];

/// Browser-side effects of a finished submission.
struct FormSurface {
    form: NodeRef,
    notice: UseStateHandle<Option<AttrValue>>,
}

impl DispatchSurface for FormSurface {
    fn notify_success(&self, message: &str) {
        self.notice.set(Some(AttrValue::from(message.to_string())));
    }

    fn navigate(&self, target: &str) {
        if let Some(window) = window() {
            let _ = window.location().set_href(target);
        }
    }

    fn reset_form(&self) {
        reset_form_node(self.form.get());
    }
}

/// Restores every control of a mounted form to its initial value.
fn reset_form_node(node: Option<Node>) {
    if let Some(form) = node.and_then(|node| node.dyn_into::<HtmlFormElement>().ok()) {
        form.reset();
    }
}

#[derive(Clone)]
struct FieldRefs {
    service: NodeRef,
    frequency: NodeRef,
    area: NodeRef,
    start: NodeRef,
    notes: NodeRef,
    name: NodeRef,
    phone: NodeRef,
    email: NodeRef,
}

impl FieldRefs {
    fn lead_fields(&self, variant: FormVariant) -> LeadFields<NodeRef> {
        LeadFields {
            service: self.service.clone(),
            frequency: self.frequency.clone(),
            area_size: variant.has_area_field().then(|| self.area.clone()),
            start_date: variant.has_start_field().then(|| self.start.clone()),
            notes: self.notes.clone(),
            contact_name: self.name.clone(),
            contact_phone: self.phone.clone(),
            contact_email: self.email.clone(),
        }
    }
}

fn options(placeholder: &str, values: &[&str]) -> Html {
    html! {
        <>
            <option value="" selected=true>{placeholder}</option>
            { for values.iter().map(|value| html! { <option value={value.to_string()}>{*value}</option> }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub variant: FormVariant,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let variant = props.variant;
    let config = use_site_config();
    let form_ref = use_node_ref();
    let refs = FieldRefs {
        service: use_node_ref(),
        frequency: use_node_ref(),
        area: use_node_ref(),
        start: use_node_ref(),
        notes: use_node_ref(),
        name: use_node_ref(),
        phone: use_node_ref(),
        email: use_node_ref(),
    };
    let notice = use_state(|| None::<AttrValue>);
    let submitting = use_state(|| false);
    // Set while a submission is in flight; further submits are ignored.
    let in_flight = use_mut_ref(|| false);

    let onsubmit = {
        let refs = refs.clone();
        let form_ref = form_ref.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        let in_flight = in_flight.clone();
        let config = config.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() {
                debug!("{}: submission already in flight", variant.form_id());
                return;
            }
            let lead = match prepare_lead(variant, &refs.lead_fields(variant)) {
                Ok(lead) => lead,
                Err(_) => return,
            };
            *in_flight.borrow_mut() = true;
            submitting.set(true);

            let surface = FormSurface {
                form: form_ref.clone(),
                notice: notice.clone(),
            };
            let config = config.clone();
            let submitting = submitting.clone();
            let in_flight = in_flight.clone();

            spawn_local(async move {
                let outcome = dispatch(&config, &HttpTransport, &surface, &lead).await;
                info!("{} finished: {:?}", variant.form_id(), outcome);
                *in_flight.borrow_mut() = false;
                submitting.set(false);
            });
        })
    };

    let dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let id = |field: &str| variant.field_id(field);

    html! {
        <form id={variant.form_id()} class="lead-form" ref={form_ref} onsubmit={onsubmit}>
            <Notice message={(*notice).clone()} on_dismiss={dismiss} />

            <div class="form-row">
                <label for={id("service")}>{"Service *"}</label>
                <select id={id("service")} name="service" ref={refs.service.clone()}>
                    { options("Please choose", SERVICES) }
                </select>
            </div>

            <div class="form-row">
                <label for={id("frequency")}>{"Frequency *"}</label>
                <select id={id("frequency")} name="frequency" ref={refs.frequency.clone()}>
                    { options("Please choose", FREQUENCIES) }
                </select>
            </div>

            if variant.has_area_field() {
                <div class="form-row">
                    <label for={id("area")}>{"Area (m²)"}</label>
                    <input id={id("area")} name="area" type="text" inputmode="numeric" placeholder="e.g. 80" ref={refs.area.clone()} />
                </div>
            }

            if variant.has_start_field() {
                <div class="form-row">
                    <label for={id("start")}>{"Preferred start *"}</label>
                    <input id={id("start")} name="start" type="date" ref={refs.start.clone()} />
                </div>
            }

            <div class="form-row">
                <label for={id("note")}>{"Notes"}</label>
                <textarea id={id("note")} name="note" rows="4" placeholder="Access, pets, special wishes…" ref={refs.notes.clone()} />
            </div>

            <div class="form-grid">
                <div class="form-row">
                    <label for={id("name")}>{"Name *"}</label>
                    <input id={id("name")} name="name" type="text" autocomplete="name" ref={refs.name.clone()} />
                </div>
                <div class="form-row">
                    <label for={id("phone")}>{"Phone *"}</label>
                    <input id={id("phone")} name="phone" type="tel" autocomplete="tel" ref={refs.phone.clone()} />
                </div>
                <div class="form-row">
                    <label for={id("email")}>{"Email"}</label>
                    <input id={id("email")} name="email" type="email" autocomplete="email" ref={refs.email.clone()} />
                </div>
            </div>

            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                { if *submitting { "Sending…" } else { "Send request" } }
            </button>
            if config.form_endpoint.is_none() {
                <p class="form-hint">
                    {"Sending opens your mail program with the request pre-filled, addressed to "}
                    {config.email.clone()}
                </p>
            }
        </form>
    }
}
