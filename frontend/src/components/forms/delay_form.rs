use diary_core::validation::DelayFormInput;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const DELAY_TYPES: [&str; 5] = [
    "Weather",
    "Material Shortage",
    "Equipment Failure",
    "Manpower",
    "Other",
];

const IMPACT_LEVELS: [&str; 4] = ["Minor", "Moderate", "Major", "Critical"];

#[derive(Properties, PartialEq)]
pub struct DelayFormProps {
    pub on_add: Callback<DelayFormInput, bool>,
}

/// Delay records: schedule impact only, no cost. Duration is derived
/// from the start/end clock times by the domain layer.
#[function_component(DelayForm)]
pub fn delay_form(props: &DelayFormProps) -> Html {
    let input = use_state(DelayFormInput::default);

    let on_type_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut updated = (*input).clone();
            updated.delay_type = select.value();
            input.set(updated);
        })
    };

    let on_impact_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut updated = (*input).clone();
            updated.impact = select.value();
            input.set(updated);
        })
    };

    let on_description_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut updated = (*input).clone();
            updated.description = value;
            input.set(updated);
        })
    };

    let on_start_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut updated = (*input).clone();
            updated.start_time = value;
            input.set(updated);
        })
    };

    let on_end_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut updated = (*input).clone();
            updated.end_time = value;
            input.set(updated);
        })
    };

    let on_solution_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut updated = (*input).clone();
            updated.solution = value;
            input.set(updated);
        })
    };

    let on_add_click = {
        let input = input.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| {
            if on_add.emit((*input).clone()) {
                input.set(DelayFormInput::default());
            }
        })
    };

    html! {
        <section class="entry-section delays-section">
            <h3>{"Delays"}</h3>

            <div class="entry-fields">
                <select onchange={on_type_change}>
                    <option value="" selected={input.delay_type.is_empty()}>{"Delay type"}</option>
                    {for DELAY_TYPES.iter().map(|delay_type| {
                        html! {
                            <option value={*delay_type} selected={input.delay_type == *delay_type}>
                                {*delay_type}
                            </option>
                        }
                    })}
                </select>

                <select onchange={on_impact_change}>
                    <option value="" selected={input.impact.is_empty()}>{"Schedule impact"}</option>
                    {for IMPACT_LEVELS.iter().map(|impact| {
                        html! {
                            <option value={*impact} selected={input.impact == *impact}>
                                {*impact}
                            </option>
                        }
                    })}
                </select>

                <textarea
                    placeholder="What happened?"
                    value={input.description.clone()}
                    onchange={on_description_change}
                />

                <label>{"From"}
                    <input type="time" value={input.start_time.clone()} onchange={on_start_change} />
                </label>
                <label>{"To"}
                    <input type="time" value={input.end_time.clone()} onchange={on_end_change} />
                </label>

                <input
                    type="text"
                    placeholder="Resolution (optional)"
                    value={input.solution.clone()}
                    onchange={on_solution_change}
                />
            </div>

            <button type="button" class="btn btn-add" onclick={on_add_click}>
                {"Add Delay"}
            </button>
        </section>
    }
}
