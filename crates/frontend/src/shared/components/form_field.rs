use leptos::prelude::*;

/// Labelled text input bound to a string signal
#[component]
pub fn TextField(
    label: &'static str,
    /// ID for the input element
    id: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)]
    placeholder: &'static str,
    /// "text" (default), "password", "url", ...
    #[prop(optional)]
    input_type: Option<&'static str>,
    /// Help text shown under the input
    #[prop(optional)]
    hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                id=id
                class="form__input"
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                placeholder=placeholder
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {hint.map(|h| view! { <div class="form__hint">{h}</div> })}
        </div>
    }
}

/// Labelled select over static (value, label) options
#[component]
pub fn SelectField(
    label: &'static str,
    id: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <select
                id=id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        view! {
                            <option value=val selected=move || value.get() == val>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
