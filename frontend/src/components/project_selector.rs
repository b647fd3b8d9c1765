use shared::ProjectInfo;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectSelectorProps {
    pub projects: Vec<ProjectInfo>,
    /// Receives the selected project id, or "" when cleared
    pub on_select: Callback<String>,
}

#[function_component(ProjectSelector)]
pub fn project_selector(props: &ProjectSelectorProps) -> Html {
    let on_change = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(select.value());
        })
    };

    html! {
        <div class="form-group">
            <label for="project">{"Project"}</label>
            <select id="project" name="project" onchange={on_change}>
                <option value="">{"Select a project"}</option>
                {for props.projects.iter().map(|project| {
                    html! {
                        <option value={project.id.clone()}>{&project.name}</option>
                    }
                })}
            </select>
        </div>
    }
}
