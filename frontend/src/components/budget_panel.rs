use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BudgetPanelProps {
    /// Pre-formatted currency strings; running/remaining only exist when
    /// a project is selected
    pub daily_total: String,
    pub running_cost: Option<String>,
    pub remaining: Option<String>,
}

/// Read-only budget summary the recompute writes into.
#[function_component(BudgetPanel)]
pub fn budget_panel(props: &BudgetPanelProps) -> Html {
    html! {
        <section class="budget-summary">
            <h3>{"Budget Summary"}</h3>

            <div class="summary-line">
                <label for="daily-cost">{"Total daily cost"}</label>
                <input type="text" id="daily-cost" readonly={true} value={props.daily_total.clone()} />
            </div>

            {if let Some(running_cost) = props.running_cost.as_ref() {
                html! {
                    <div class="summary-line">
                        <label for="running-cost">{"Running project cost"}</label>
                        <input type="text" id="running-cost" readonly={true} value={running_cost.clone()} />
                    </div>
                }
            } else { html! {} }}

            {if let Some(remaining) = props.remaining.as_ref() {
                html! {
                    <div class="summary-line">
                        <label for="remaining-budget">{"Remaining budget"}</label>
                        <input type="text" id="remaining-budget" readonly={true} value={remaining.clone()} />
                    </div>
                }
            } else { html! {} }}
        </section>
    }
}
