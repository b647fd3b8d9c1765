use diary_core::validation::OtherCostFormInput;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OtherCostFormProps {
    pub on_add: Callback<OtherCostFormInput, bool>,
}

#[function_component(OtherCostForm)]
pub fn other_cost_form(props: &OtherCostFormProps) -> Html {
    let input = use_state(OtherCostFormInput::default);

    let on_name_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut updated = (*input).clone();
            updated.name = value;
            input.set(updated);
        })
    };

    let on_cost_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut updated = (*input).clone();
            updated.cost = value;
            input.set(updated);
        })
    };

    let on_add_click = {
        let input = input.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| {
            if on_add.emit((*input).clone()) {
                input.set(OtherCostFormInput::default());
            }
        })
    };

    html! {
        <section class="entry-section other-costs-section">
            <h3>{"Other Costs"}</h3>

            <div class="entry-fields">
                <input
                    type="text"
                    placeholder="Description (permits, hauling...)"
                    value={input.name.clone()}
                    onchange={on_name_change}
                />
                <input
                    type="number"
                    placeholder="Cost"
                    min="0"
                    step="0.01"
                    value={input.cost.clone()}
                    onchange={on_cost_change}
                />
            </div>

            <button type="button" class="btn btn-add" onclick={on_add_click}>
                {"Add Cost"}
            </button>
        </section>
    }
}
