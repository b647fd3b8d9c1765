use diary_core::validation::SubcontractorFormInput;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SubcontractorFormProps {
    /// Picklist of known subcontractors; "custom" switches to free text
    pub names: Vec<String>,
    /// The sentinel picklist value that reveals the free-text name field
    pub custom_sentinel: AttrValue,
    pub on_add: Callback<SubcontractorFormInput, bool>,
}

#[function_component(SubcontractorForm)]
pub fn subcontractor_form(props: &SubcontractorFormProps) -> Html {
    let input = use_state(SubcontractorFormInput::default);

    let on_select_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut updated = (*input).clone();
            updated.selected = select.value();
            input.set(updated);
        })
    };

    let on_custom_name_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut updated = (*input).clone();
            updated.custom_name = value;
            input.set(updated);
        })
    };

    let on_company_change = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut updated = (*input).clone();
            updated.company = value;
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
                input.set(SubcontractorFormInput::default());
            }
        })
    };

    let custom_selected = input.selected == props.custom_sentinel.as_str();

    html! {
        <section class="entry-section subcontractors-section">
            <h3>{"Subcontractors"}</h3>

            <div class="entry-fields">
                <select onchange={on_select_change}>
                    <option value="" selected={input.selected.is_empty()}>
                        {"Select subcontractor"}
                    </option>
                    {for props.names.iter().map(|name| {
                        html! {
                            <option value={name.clone()} selected={input.selected == *name}>
                                {name}
                            </option>
                        }
                    })}
                    <option value={props.custom_sentinel.clone()} selected={custom_selected}>
                        {"Other (type a name)"}
                    </option>
                </select>

                {if custom_selected {
                    html! {
                        <input
                            type="text"
                            placeholder="Subcontractor name"
                            value={input.custom_name.clone()}
                            onchange={on_custom_name_change}
                        />
                    }
                } else { html! {} }}

                <input
                    type="text"
                    placeholder="Company / trade (optional)"
                    value={input.company.clone()}
                    onchange={on_company_change}
                />
                <textarea
                    placeholder="Work description"
                    value={input.description.clone()}
                    onchange={on_description_change}
                />
                <input
                    type="number"
                    placeholder="Daily cost (optional)"
                    min="0"
                    step="0.01"
                    value={input.cost.clone()}
                    onchange={on_cost_change}
                />
            </div>

            <button type="button" class="btn btn-add" onclick={on_add_click}>
                {"Add Subcontractor"}
            </button>
        </section>
    }
}
