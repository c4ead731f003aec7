use std::rc::Rc;

use leptos::*;
use marketplace::{
    dashboard::view::DashboardView,
    data::{application::DraftField, project::Project},
};

use super::format_amount;

/// Application modal for `project`. Inputs read the draft held in `state` and report edits
/// through `on_edit`.
#[component]
pub fn ApplyModal(
    cx: Scope,
    project: Project,
    state: ReadSignal<DashboardView>,
    on_edit: Rc<dyn Fn(DraftField, String)>,
    on_submit: Rc<dyn Fn()>,
    on_close: Rc<dyn Fn()>,
) -> impl IntoView {
    let draft_value = move |field: DraftField| {
        move || {
            state.with(|state| {
                state
                    .draft()
                    .map(|draft| draft.get(field).to_owned())
                    .unwrap_or_default()
            })
        }
    };
    let submitting = move || state.with(|state| state.submitting);
    let on_message = Rc::clone(&on_edit);
    let on_price = Rc::clone(&on_edit);
    let on_delay = on_edit;
    let on_dismiss = Rc::clone(&on_close);
    let on_cancel = on_close;

    view! { cx,
        <div class="modal-backdrop fade show" style="display: block;"></div>
        <div class="modal fade show" tabindex="-1" style="display:block;">
            <div class="modal-dialog modal-lg modal-dialog-centered">
                <div class="modal-content">
                    <div class="modal-header">
                        <div>
                            <h5 class="modal-title">{project.titre.clone()}</h5>
                            <p class="text-muted mb-0">{format!("Budget: {}", format_amount(project.budget))}</p>
                        </div>
                        <button type="button" class="btn-close" aria-label="Close" on:click=move |_| on_dismiss()></button>
                    </div>
                    <div class="modal-body">
                        <div class="mb-3">
                            <label class="form-label" for="message">"Votre proposition *"</label>
                            <textarea
                                class="form-control"
                                id="message"
                                rows=5
                                placeholder="Expliquez pourquoi vous êtes le meilleur choix..."
                                prop:value=draft_value(DraftField::Message)
                                on:input=move |ev| on_message(DraftField::Message, event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="row g-3">
                            <div class="col">
                                <label class="form-label" for="prixPropose">"Votre prix (TND) *"</label>
                                <input
                                    class="form-control"
                                    type="number"
                                    id="prixPropose"
                                    placeholder="Ex: 800"
                                    prop:value=draft_value(DraftField::PrixPropose)
                                    on:input=move |ev| on_price(DraftField::PrixPropose, event_target_value(&ev))
                                />
                            </div>
                            <div class="col">
                                <label class="form-label" for="delaiPropose">"Délai (jours) *"</label>
                                <input
                                    class="form-control"
                                    type="number"
                                    id="delaiPropose"
                                    placeholder="Ex: 14"
                                    prop:value=draft_value(DraftField::DelaiPropose)
                                    on:input=move |ev| on_delay(DraftField::DelaiPropose, event_target_value(&ev))
                                />
                            </div>
                        </div>
                    </div>
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn btn-primary"
                            prop:disabled=submitting
                            on:click=move |_| on_submit()
                        >
                            "Envoyer ma candidature"
                        </button>
                        <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel()>
                            "Annuler"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
