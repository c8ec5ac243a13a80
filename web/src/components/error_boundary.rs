use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::error::ErrorView;
use crate::server::log_client_error;

/// Wraps a page section so an error raised while rendering it (a bad query
/// parameter, a failed fetch) shows a notice with a refresh button instead of
/// taking the whole page down.
#[component]
pub fn SectionBoundary(#[prop(into)] name: String, children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback={move |errors: ArcRwSignal<Errors>| {
            let name = name.clone();
            let message = errors.with(|errors| {
                errors.iter().next().map(|(_, e)| e.to_string())
            });
            leptos::logging::error!("{name} failed to render: {message:?}");

            view! {
                <section class="section-error">
                    <ErrorView message=message.unwrap_or_else(|| {
                        "Something went wrong loading this section.".to_string()
                    }) show_refresh=true/>
                </section>
            }
        }}>
            {children()}
        </ErrorBoundary>
    }
}

/// Reports a client-side failure to the server log. Fire and forget.
pub fn log_component_error(
    error_message: String,
    component_name: String,
    detail: Option<String>,
) {
    let url = window().location().href().ok();
    spawn_local(async move {
        if let Err(e) = log_client_error(component_name, error_message, detail, url).await {
            leptos::logging::warn!("failed to report client error: {e}");
        }
    });
}
