use diary_core::render::EntryRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EntryListProps {
    pub rows: Vec<EntryRow>,
    /// Receives the stable id of the row to delete
    pub on_remove: Callback<String>,
}

/// Removable rows for one category. The delete action carries the
/// entry's id, so rows never go stale when earlier entries are removed.
#[function_component(EntryList)]
pub fn entry_list(props: &EntryListProps) -> Html {
    if props.rows.is_empty() {
        return html! {};
    }

    html! {
        <ul class="entry-list">
            {for props.rows.iter().map(|row| {
                let on_remove = props.on_remove.clone();
                let id = row.id.clone();
                let on_click = Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()));

                html! {
                    <li class="entry-row" key={row.id.clone()}>
                        <span class="entry-summary">{&row.summary}</span>
                        <button type="button" class="btn-remove" onclick={on_click}>
                            {"Remove"}
                        </button>
                    </li>
                }
            })}
        </ul>
    }
}
