use std::{cell::Cell, rc::Rc};

use leptos::*;
use marketplace::notice::{Notice, Notices, NOTICE_DURATION};

use crate::reactive::use_store;

/// Toast area showing the current notices. Each notice is dismissed after [NOTICE_DURATION] or
/// when closed by the user.
#[component]
pub fn NoticeArea(cx: Scope, notices: Notices) -> impl IntoView {
    let current = use_store(cx, notices.store());

    let next_unscheduled = Rc::new(Cell::new(0_u64));
    let dismisser = notices.clone();
    let subscription = notices.store().subscribe(move |current: &Vec<Notice>| {
        for notice in current.iter().filter(|n| n.id >= next_unscheduled.get()) {
            let notices = dismisser.clone();
            let id = notice.id;
            set_timeout(move || notices.dismiss(id), NOTICE_DURATION);
            next_unscheduled.set(id + 1);
        }
    });
    let store = notices.store().clone();
    on_cleanup(cx, move || store.unsubscribe(subscription));

    view! { cx,
        <div class="toast-container position-fixed top-0 end-0 p-3" id="notices">
            <For
                each=move || current.get()
                key=|notice| notice.id
                view=move |cx, notice: Notice| {
                    let notices = notices.clone();
                    let id = notice.id;
                    view! { cx,
                        <div class=format!("{} alert-dismissible", notice.kind.alert_class()) role="alert">
                            {notice.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| notices.dismiss(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
