use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, MessageBar, MessageBarIntent};

/// Error notice for a section that failed to render. With `show_refresh`
/// the visitor gets a button that reloads the page.
#[component]
pub fn ErrorView(
    #[prop(optional)] message: Option<String>,
    #[prop(optional)] show_refresh: bool,
) -> impl IntoView {
    view! {
        <div class="error-view">
            <MessageBar intent=MessageBarIntent::Error>
                {message.unwrap_or_else(|| "An error occurred. Please try again.".to_string())}
            </MessageBar>
            {show_refresh.then(|| view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        let _ = window().location().reload();
                    }
                >
                    "Refresh page"
                </Button>
            })}
        </div>
    }
}
