use std::rc::Rc;

use leptos::*;
use marketplace::data::project::Project;

use super::format_amount;

#[component]
pub fn ProjectCard(cx: Scope, project: Project, on_apply: Rc<dyn Fn(Project)>) -> impl IntoView {
    let speciality = project.speciality().map(|speciality| {
        view! { cx, <span class="badge text-bg-info">{format!("Spécialité: {speciality}")}</span> }
    });
    let deadline = project.deadline_label().map(|deadline| {
        view! { cx, <span class="badge text-bg-light">{format!("Date limite: {deadline}")}</span> }
    });
    let budget = format!("Budget: {}", format_amount(project.budget));
    let client = format!("Publié par : {}", project.client_name());
    let title = project.titre.clone();
    let description = project.description.clone();

    view! { cx,
        <div class="card shadow-sm h-100">
            <div class="card-body d-flex justify-content-between align-items-start">
                <div class="flex-grow-1">
                    <h3 class="card-title">{title}</h3>
                    <p class="card-text text-muted">{description}</p>
                    <div class="d-flex flex-wrap gap-2 mt-3">
                        <span class="badge text-bg-success">{budget}</span>
                        {speciality}
                        {deadline}
                    </div>
                    <p class="mt-3 small text-muted">{client}</p>
                </div>
                <button
                    type="button"
                    class="btn btn-primary ms-3"
                    on:click=move |_| on_apply(project.clone())
                >
                    "Postuler"
                </button>
            </div>
        </div>
    }
}
