use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Share of the element that must be on screen before it is revealed.
const REVEAL_THRESHOLD: f64 = 0.12;
const VISIBLE_CLASS: &str = "is-visible";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn mark_visible(element: &Element) {
    let _ = element.class_list().add_1(VISIBLE_CLASS);
}

fn observer_supported() -> bool {
    let Some(window) = window() else {
        return false;
    };
    let window: JsValue = window.into();
    Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Starts watching `element`. Without IntersectionObserver support the element
/// is shown straight away.
fn observe(element: &Element) -> Option<(IntersectionObserver, ObserverCallback)> {
    if !observer_supported() {
        mark_visible(element);
        return None;
    }

    let callback: ObserverCallback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                mark_visible(&target);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(_) => {
            mark_visible(element);
            None
        }
    }
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let watch = node.cast::<Element>().and_then(|element| observe(&element));
                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
