use gloo_timers::callback::Timeout;
use yew::prelude::*;

const NOTICE_MS: u32 = 6_000;

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: Option<AttrValue>,
    pub on_dismiss: Callback<()>,
}

/// Success banner that hides itself after a few seconds.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |message: &Option<AttrValue>| {
                let timeout = message
                    .as_ref()
                    .map(|_| Timeout::new(NOTICE_MS, move || on_dismiss.emit(())));
                // dropping the handle cancels a pending dismiss
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    match &props.message {
        Some(message) => html! {
            <div class="success-message" role="status">
                {message.to_string()}
            </div>
        },
        None => html! {},
    }
}
