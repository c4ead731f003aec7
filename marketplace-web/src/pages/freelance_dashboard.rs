use std::rc::Rc;

use leptos::*;
use marketplace::{
    dashboard::{view::Tab, Dashboard},
    data::{application::DraftField, project::Project},
};

use crate::{
    components::{
        application_card::ApplicationCard, apply_modal::ApplyModal, nav::Nav,
        project_card::ProjectCard,
    },
    reactive::{alert, use_store},
    Portal,
};

#[component]
fn TabButton<F>(cx: Scope, tab: Tab, active: Memo<Tab>, on_select: F) -> impl IntoView
where
    F: Fn(Tab) + 'static,
{
    let class = move || {
        if active.get() == tab {
            "nav-link active"
        } else {
            "nav-link"
        }
    };
    view! { cx,
        <li class="nav-item">
            <button type="button" class=class on:click=move |_| on_select(tab)>
                {tab.label()}
            </button>
        </li>
    }
}

/// Freelancer dashboard: open projects, own applications and the application modal
#[component]
pub fn FreelanceDashboard(cx: Scope, portal: Portal) -> impl IntoView {
    let dashboard = Dashboard::new(portal.api(), portal.session(), portal.notices());
    let state = use_store(cx, dashboard.view());
    let projects = use_store(cx, dashboard.projects());
    let applications = use_store(cx, dashboard.applications());
    let active_tab = create_memo(cx, move |_| state.with(|state| state.active_tab));
    let selected = create_memo(cx, move |_| {
        state.with(|state| state.selected_project().cloned())
    });
    let loading = create_memo(cx, move |_| projects.with(|list| list.loading));

    {
        let dashboard = dashboard.clone();
        spawn_local(async move { dashboard.mount().await });
    }
    {
        let dashboard = dashboard.clone();
        on_cleanup(cx, move || dashboard.teardown());
    }

    let on_select: Rc<dyn Fn(Tab)> = {
        let dashboard = dashboard.clone();
        Rc::new(move |tab| dashboard.select_tab(tab))
    };
    let on_apply: Rc<dyn Fn(Project)> = {
        let dashboard = dashboard.clone();
        Rc::new(move |project| dashboard.open_modal(project))
    };
    let on_edit: Rc<dyn Fn(DraftField, String)> = {
        let dashboard = dashboard.clone();
        Rc::new(move |field, value| dashboard.edit_draft(field, value))
    };
    let on_close: Rc<dyn Fn()> = {
        let dashboard = dashboard.clone();
        Rc::new(move || dashboard.close_modal())
    };
    let on_submit: Rc<dyn Fn()> = Rc::new(move || {
        let dashboard = dashboard.clone();
        spawn_local(async move {
            // backend failures are already reported as notices
            if let Err(error) = dashboard.submit_application().await {
                if error.is_local() {
                    alert(&error.user_message());
                }
            }
        });
    });

    let projects_tab = move || {
        let list = projects.get().projects;
        if list.is_empty() {
            return view! { cx,
                <p class="text-muted text-center">"Aucun projet disponible pour le moment."</p>
            }
            .into_view(cx);
        }
        let cards = list
            .into_iter()
            .map(|project| {
                let on_apply = Rc::clone(&on_apply);
                view! { cx,
                    <div class="col">
                        <ProjectCard project=project on_apply=on_apply/>
                    </div>
                }
            })
            .collect::<Vec<_>>();
        view! { cx, <div class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">{cards}</div> }
            .into_view(cx)
    };
    let applications_tab = move || {
        let entries = applications.get().entries;
        if entries.is_empty() {
            return view! { cx,
                <p class="text-muted text-center">"Vous n'avez postulé à aucun projet."</p>
            }
            .into_view(cx);
        }
        entries
            .into_iter()
            .map(|entry| view! { cx, <ApplicationCard entry=entry/> })
            .collect::<Vec<_>>()
            .into_view(cx)
    };
    let content = move || {
        if loading.get() {
            return view! { cx, <p class="text-muted">"Chargement..."</p> }.into_view(cx);
        }
        match active_tab.get() {
            Tab::Projects => projects_tab(),
            Tab::Applications => applications_tab(),
        }
    };
    let modal = move || {
        selected.get().map(|project| {
            view! { cx,
                <ApplyModal
                    project=project
                    state=state
                    on_edit=Rc::clone(&on_edit)
                    on_submit=Rc::clone(&on_submit)
                    on_close=Rc::clone(&on_close)
                />
            }
        })
    };
    let projects_select = Rc::clone(&on_select);
    let applications_select = on_select;

    view! { cx,
        <Nav portal=portal/>
        <div class="p-4">
            <ul class="nav nav-tabs mb-4">
                <TabButton
                    tab=Tab::Projects
                    active=active_tab
                    on_select=move |tab| projects_select(tab)
                />
                <TabButton
                    tab=Tab::Applications
                    active=active_tab
                    on_select=move |tab| applications_select(tab)
                />
            </ul>
            {content}
            {modal}
        </div>
    }
}
