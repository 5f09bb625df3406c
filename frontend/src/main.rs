use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::toast::TOAST_DURATION_MS;
use components::{Page, Sidebar, Toast, ToastStack};
use pages::{AssignmentsPage, ClassesPage, DashboardPage, FacultyPage, MarksPage, StudentsPage, SubjectsPage};
use services::logging::Logger;

enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| Page::Dashboard);
    let toasts = use_reducer(ToastList::default);
    let next_toast_id = use_mut_ref(|| 0u32);

    let notify = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |mut toast: Toast| {
            let id = {
                let mut next = next_toast_id.borrow_mut();
                *next += 1;
                *next
            };
            toast.id = id;
            dispatcher.dispatch(ToastAction::Push(toast));

            let dispatcher = dispatcher.clone();
            Timeout::new(TOAST_DURATION_MS, move || dispatcher.dispatch(ToastAction::Dismiss(id))).forget();
        })
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| {
            Logger::debug_with_component("navigation", &format!("Opening {}", target.title()));
            page.set(target);
        })
    };

    let content = match *page {
        Page::Dashboard => html! { <DashboardPage notify={notify.clone()} /> },
        Page::Students => html! { <StudentsPage notify={notify.clone()} /> },
        Page::Faculty => html! { <FacultyPage notify={notify.clone()} /> },
        Page::Subjects => html! { <SubjectsPage notify={notify.clone()} /> },
        Page::Classes => html! { <ClassesPage notify={notify.clone()} /> },
        Page::Assignments => html! { <AssignmentsPage notify={notify.clone()} /> },
        Page::Marks => html! { <MarksPage notify={notify.clone()} /> },
    };

    html! {
        <div class="app-layout">
            <Sidebar current={*page} on_navigate={on_navigate} />
            <main class="main-content">
                {content}
            </main>
            <ToastStack toasts={toasts.toasts.clone()} on_dismiss={on_dismiss} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
