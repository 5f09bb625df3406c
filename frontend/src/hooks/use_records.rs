use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Rows loaded from one list endpoint plus their loading state
pub struct UseRecordsHandle<T> {
    pub rows: Rc<Vec<T>>,
    pub loading: bool,
    pub error: Option<String>,
    /// Re-fetch the rows, e.g. after a create or delete
    pub refresh: Callback<()>,
}

/// Fetch rows once on mount with `fetch`, and again whenever `refresh` is emitted
#[hook]
pub fn use_records<T, F, Fut>(component: &'static str, fetch: F) -> UseRecordsHandle<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, String>> + 'static,
{
    let rows = use_state(|| Rc::new(Vec::<T>::new()));
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let fetch = Rc::new(fetch);
        let rows = rows.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |_: ()| {
            let request = fetch();
            let rows = rows.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match request.await {
                    Ok(data) => {
                        rows.set(Rc::new(data));
                        error.set(None);
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch records:", e.clone());
                        Logger::error_with_component(component, &format!("Failed to fetch records: {}", e));
                        error.set(Some(e));
                    }
                }

                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseRecordsHandle {
        rows: (*rows).clone(),
        loading: *loading,
        error: (*error).clone(),
        refresh,
    }
}
