use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{ContactFormState, Field};
use crate::services::contact::ContactClient;

#[component]
pub fn ContactForm() -> impl IntoView {
    let client = ContactClient::new();
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let submission = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(err)) => {
                focus_field(err.field());
                return;
            }
            None => return,
        };

        let client = client.clone();
        spawn_local(async move {
            let outcome = client.send(&submission).await;
            form.update(|f| f.finish_submit(outcome));
        });
    };

    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <form class="contact-form" on:submit=on_submit>
            {Field::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <div class="form-group">
                            <label for=field.id()>{field.label()}</label>
                            <input
                                type=field.input_type()
                                id=field.id()
                                name=field.id()
                                required
                                prop:value=move || form.with(|f| f.value(field).to_string())
                                on:input=move |ev| {
                                    form.update(|f| f.set(field, event_target_value(&ev)))
                                }
                            />
                        </div>
                    }
                })
                .collect_view()}

            {move || form.with(|f| f.status().cloned()).map(|status| {
                view! { <p class=format!("form-status {}", status.kind.css_class())>{status.message}</p> }
            })}

            <button type="submit" class="btn btn-primary" disabled=submitting>
                {move || if submitting() { "送信中..." } else { "送信する" }}
            </button>
        </form>
    }
}

fn focus_field(field: Field) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::web_sys;
        use wasm_bindgen::JsCast;

        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(field.id()))
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            let _ = input.focus();
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = field;
}
