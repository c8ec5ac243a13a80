use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - Pine Ink Tattoo"/>
        <div class="not-found">
            <div class="not-found__code">"404"</div>
            <h1 class="not-found__title">"Page Not Found"</h1>
            <p class="not-found__text">
                "Looks like this page got lost in the ink! The page you're looking for doesn't exist or may have been moved."
            </p>
            <div class="not-found__actions">
                <button
                    class="button button--primary"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| navigate("/", Default::default())
                    }
                >
                    "Go Home"
                </button>
                <button
                    class="button button--secondary"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| navigate("/gallery", Default::default())
                    }
                >
                    "View Our Work"
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| navigate("/booking", Default::default())
                >
                    "Book an Appointment"
                </button>
            </div>
        </div>
    }
}
