use diary_core::validation::MaterialFormInput;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MaterialFormProps {
    /// Returns true when the entry was accepted; an accepted add is the
    /// cue to clear the fields
    pub on_add: Callback<MaterialFormInput, bool>,
}

fn field_setter(
    input: &UseStateHandle<MaterialFormInput>,
    apply: fn(&mut MaterialFormInput, String),
) -> Callback<Event> {
    let input = input.clone();
    Callback::from(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        let mut updated = (*input).clone();
        apply(&mut updated, value);
        input.set(updated);
    })
}

#[function_component(MaterialForm)]
pub fn material_form(props: &MaterialFormProps) -> Html {
    let input = use_state(MaterialFormInput::default);

    let on_add_click = {
        let input = input.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| {
            if on_add.emit((*input).clone()) {
                input.set(MaterialFormInput::default());
            }
        })
    };

    html! {
        <section class="entry-section materials-section">
            <h3>{"Materials"}</h3>

            <div class="entry-fields">
                <input
                    type="text"
                    placeholder="Material name"
                    value={input.name.clone()}
                    onchange={field_setter(&input, |i, v| i.name = v)}
                />
                <input
                    type="number"
                    placeholder="Quantity"
                    min="0"
                    step="0.01"
                    value={input.quantity.clone()}
                    onchange={field_setter(&input, |i, v| i.quantity = v)}
                />
                <input
                    type="text"
                    placeholder="Unit (bags, cu.m, pcs)"
                    value={input.unit.clone()}
                    onchange={field_setter(&input, |i, v| i.unit = v)}
                />
                <input
                    type="number"
                    placeholder="Total cost"
                    min="0"
                    step="0.01"
                    value={input.cost.clone()}
                    onchange={field_setter(&input, |i, v| i.cost = v)}
                />
                <input
                    type="text"
                    placeholder="Supplier (optional)"
                    value={input.supplier.clone()}
                    onchange={field_setter(&input, |i, v| i.supplier = v)}
                />
                <input
                    type="text"
                    placeholder="Delivery time (optional)"
                    value={input.delivery_time.clone()}
                    onchange={field_setter(&input, |i, v| i.delivery_time = v)}
                />
            </div>

            <button type="button" class="btn btn-add" onclick={on_add_click}>
                {"Add Material"}
            </button>
        </section>
    }
}
