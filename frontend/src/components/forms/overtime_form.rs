use diary_core::validation::OvertimeFormInput;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OvertimeFormProps {
    pub on_add: Callback<OvertimeFormInput, bool>,
}

fn field_setter(
    input: &UseStateHandle<OvertimeFormInput>,
    apply: fn(&mut OvertimeFormInput, String),
) -> Callback<Event> {
    let input = input.clone();
    Callback::from(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        let mut updated = (*input).clone();
        apply(&mut updated, value);
        input.set(updated);
    })
}

/// Overtime blocks: headcount, role, hours, and hourly rate. The block's
/// cost is implied, so there is no cost field to type.
#[function_component(OvertimeForm)]
pub fn overtime_form(props: &OvertimeFormProps) -> Html {
    let input = use_state(OvertimeFormInput::default);

    let on_add_click = {
        let input = input.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| {
            if on_add.emit((*input).clone()) {
                input.set(OvertimeFormInput::default());
            }
        })
    };

    html! {
        <section class="entry-section overtime-section">
            <h3>{"Overtime"}</h3>

            <div class="entry-fields">
                <input
                    type="number"
                    placeholder="No. of personnel"
                    min="1"
                    value={input.personnel.clone()}
                    onchange={field_setter(&input, |i, v| i.personnel = v)}
                />
                <input
                    type="text"
                    placeholder="Role (Mason, Laborer...)"
                    value={input.role.clone()}
                    onchange={field_setter(&input, |i, v| i.role = v)}
                />
                <input
                    type="number"
                    placeholder="Overtime hours"
                    min="1"
                    value={input.hours.clone()}
                    onchange={field_setter(&input, |i, v| i.hours = v)}
                />
                <input
                    type="number"
                    placeholder="Hourly rate"
                    min="0"
                    step="0.01"
                    value={input.rate.clone()}
                    onchange={field_setter(&input, |i, v| i.rate = v)}
                />
            </div>

            <button type="button" class="btn btn-add" onclick={on_add_click}>
                {"Add Overtime"}
            </button>
        </section>
    }
}
