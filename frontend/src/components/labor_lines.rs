use shared::LaborLine;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LaborLinesProps {
    /// Fired on every keystroke with the parsed count/rate pairs
    pub on_change: Callback<Vec<LaborLine>>,
}

fn to_labor_lines(raw: &[(String, String)]) -> Vec<LaborLine> {
    raw.iter()
        .map(|(count, rate)| LaborLine {
            count: count.trim().parse().unwrap_or(0.0),
            rate: rate.trim().parse().unwrap_or(0.0),
        })
        .collect()
}

/// Editable count/rate labor pairs. Values stay as typed; parsing (with
/// the usual 0 fallback) happens only for the budget recompute.
#[function_component(LaborLinesEditor)]
pub fn labor_lines_editor(props: &LaborLinesProps) -> Html {
    let lines = use_state(|| vec![(String::new(), String::new())]);

    let on_add_line = {
        let lines = lines.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = (*lines).clone();
            updated.push((String::new(), String::new()));
            lines.set(updated);
        })
    };

    html! {
        <section class="labor-lines">
            <h3>{"Labor"}</h3>
            {for (*lines).iter().enumerate().map(|(index, (count, rate))| {
                let on_count_input = {
                    let lines = lines.clone();
                    let on_change = props.on_change.clone();
                    Callback::from(move |e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlInputElement>().value();
                        let mut updated = (*lines).clone();
                        updated[index].0 = value;
                        on_change.emit(to_labor_lines(&updated));
                        lines.set(updated);
                    })
                };

                let on_rate_input = {
                    let lines = lines.clone();
                    let on_change = props.on_change.clone();
                    Callback::from(move |e: InputEvent| {
                        let value = e.target_unchecked_into::<HtmlInputElement>().value();
                        let mut updated = (*lines).clone();
                        updated[index].1 = value;
                        on_change.emit(to_labor_lines(&updated));
                        lines.set(updated);
                    })
                };

                let on_remove_line = {
                    let lines = lines.clone();
                    let on_change = props.on_change.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut updated = (*lines).clone();
                        updated.remove(index);
                        on_change.emit(to_labor_lines(&updated));
                        lines.set(updated);
                    })
                };

                html! {
                    <div class="labor-line">
                        <input
                            type="number"
                            placeholder="Workers"
                            min="0"
                            value={count.clone()}
                            oninput={on_count_input}
                        />
                        <input
                            type="number"
                            placeholder="Daily rate"
                            step="0.01"
                            min="0"
                            value={rate.clone()}
                            oninput={on_rate_input}
                        />
                        <button type="button" class="btn-remove" onclick={on_remove_line}>
                            {"Remove"}
                        </button>
                    </div>
                }
            })}
            <button type="button" class="btn btn-secondary" onclick={on_add_line}>
                {"Add labor line"}
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_labor_lines_parses_with_zero_fallback() {
        let raw = vec![
            ("10".to_string(), "550".to_string()),
            ("".to_string(), "600".to_string()),
            ("abc".to_string(), "".to_string()),
        ];

        let lines = to_labor_lines(&raw);
        assert_eq!(lines[0], LaborLine { count: 10.0, rate: 550.0 });
        assert_eq!(lines[1], LaborLine { count: 0.0, rate: 600.0 });
        assert_eq!(lines[2], LaborLine { count: 0.0, rate: 0.0 });
    }
}
