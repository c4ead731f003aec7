use leptos::*;
use marketplace::store::Store;

/// Mirror `store` into a signal owned by `cx`. The subscription is dropped with the scope so a
/// late store update never touches a disposed signal.
pub fn use_store<T>(cx: Scope, store: &Store<T>) -> ReadSignal<T>
where
    T: Clone + 'static,
{
    let (value, set_value) = create_signal(cx, store.get());
    let id = store.subscribe(move |next: &T| set_value.set(next.clone()));
    let store = store.clone();
    on_cleanup(cx, move || store.unsubscribe(id));
    value
}

/// Show a blocking browser alert
pub fn alert(message: &str) {
    if let Err(error) = window().alert_with_message(message) {
        log::error!("Could not display alert. {error:?}");
    }
}
