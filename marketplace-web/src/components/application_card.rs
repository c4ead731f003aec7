use leptos::*;
use marketplace::data::application::ApplicationEntry;

use super::format_amount;

#[component]
pub fn ApplicationCard(cx: Scope, entry: ApplicationEntry) -> impl IntoView {
    let ApplicationEntry {
        publication,
        candidature,
    } = entry;
    view! { cx,
        <div class="card shadow-sm mb-3">
            <div class="card-body">
                <div class="d-flex justify-content-between align-items-start mb-3">
                    <h3 class="card-title h5">{publication.titre}</h3>
                    <span class=candidature.statut.badge_class()>
                        {candidature.statut.as_str().to_owned()}
                    </span>
                </div>
                <p class="card-text text-muted small">{candidature.message}</p>
                <div class="d-flex flex-wrap gap-4 small">
                    <div>
                        <span class="fw-semibold">"Votre prix:"</span>
                        <span class="ms-2 text-success">{format_amount(candidature.prix_propose)}</span>
                    </div>
                    <div>
                        <span class="fw-semibold">"Délai proposé:"</span>
                        <span class="ms-2 text-primary">{format!("{} jours", candidature.delai_propose)}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
