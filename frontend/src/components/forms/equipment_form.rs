use diary_core::validation::EquipmentFormInput;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EquipmentFormProps {
    pub on_add: Callback<EquipmentFormInput, bool>,
}

fn field_setter(
    input: &UseStateHandle<EquipmentFormInput>,
    apply: fn(&mut EquipmentFormInput, String),
) -> Callback<Event> {
    let input = input.clone();
    Callback::from(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        let mut updated = (*input).clone();
        apply(&mut updated, value);
        input.set(updated);
    })
}

#[function_component(EquipmentForm)]
pub fn equipment_form(props: &EquipmentFormProps) -> Html {
    let input = use_state(EquipmentFormInput::default);

    let on_add_click = {
        let input = input.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| {
            if on_add.emit((*input).clone()) {
                input.set(EquipmentFormInput::default());
            }
        })
    };

    html! {
        <section class="entry-section equipment-section">
            <h3>{"Equipment"}</h3>

            <div class="entry-fields">
                <input
                    type="text"
                    placeholder="Equipment name"
                    value={input.name.clone()}
                    onchange={field_setter(&input, |i, v| i.name = v)}
                />
                <input
                    type="text"
                    placeholder="Operator (optional)"
                    value={input.operator.clone()}
                    onchange={field_setter(&input, |i, v| i.operator = v)}
                />
                <input
                    type="number"
                    placeholder="Hours used"
                    min="0"
                    step="0.5"
                    value={input.hours.clone()}
                    onchange={field_setter(&input, |i, v| i.hours = v)}
                />
                <input
                    type="number"
                    placeholder="Fuel, liters (optional)"
                    min="0"
                    step="0.1"
                    value={input.fuel.clone()}
                    onchange={field_setter(&input, |i, v| i.fuel = v)}
                />
                <input
                    type="number"
                    placeholder="Rental/operating cost"
                    min="0"
                    step="0.01"
                    value={input.cost.clone()}
                    onchange={field_setter(&input, |i, v| i.cost = v)}
                />
            </div>

            <button type="button" class="btn btn-add" onclick={on_add_click}>
                {"Add Equipment"}
            </button>
        </section>
    }
}
