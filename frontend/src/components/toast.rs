use yew::prelude::*;

/// Message shown to the user when a request fails; the cause stays in the logs
pub const RETRY_MESSAGE: &str = "Please try again.";

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            kind: ToastKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Generic failure toast; `title` names the action that failed
    pub fn failure(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            kind: ToastKind::Error,
            title: title.into(),
            message: RETRY_MESSAGE.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            {for props.toasts.iter().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast success",
                    ToastKind::Error => "toast error",
                };
                let on_dismiss = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                html! {
                    <div class={class} key={toast.id}>
                        <div class="toast-body">
                            <strong>{&toast.title}</strong>
                            <p>{&toast.message}</p>
                        </div>
                        <button class="toast-close" onclick={on_dismiss}>{"×"}</button>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_failure_toast_hides_cause() {
        let toast = Toast::failure("Failed to add student");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, RETRY_MESSAGE);
    }
}
