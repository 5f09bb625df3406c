use shared::DashboardStats;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::PageProps;
use crate::components::toast::Toast;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

fn stat_card(label: &'static str, value: i64) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &PageProps) -> Html {
    let stats = use_state(|| Option::<DashboardStats>::None);

    {
        let stats = stats.clone();
        let notify = props.notify.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::new().dashboard_stats().await {
                    Ok(data) => stats.set(Some(data)),
                    Err(e) => {
                        Logger::error_with_component("dashboard", &format!("Failed to load stats: {}", e));
                        notify.emit(Toast::failure("Failed to load dashboard"));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="page dashboard">
            <h1>{"Dashboard"}</h1>
            {match stats.as_ref() {
                Some(stats) => html! {
                    <div class="stat-grid">
                        {stat_card("Students", stats.student_count)}
                        {stat_card("Faculty", stats.faculty_count)}
                        {stat_card("Subjects", stats.subject_count)}
                        {stat_card("Classes", stats.class_count)}
                    </div>
                },
                None => html! { <div class="loading">{"Loading..."}</div> },
            }}
        </div>
    }
}
