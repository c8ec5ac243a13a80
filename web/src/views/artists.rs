use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use shared_types::catalog::DIRECTORY;

use crate::components::ArtistCard;

#[component]
pub fn ArtistsPage() -> impl IntoView {
    view! {
        <Title text="Our Artists - Pine Ink Tattoo"/>
        <section class="page-hero">
            <h1 class="page-hero__title">"Meet Our Artists"</h1>
            <p class="page-hero__subtitle">
                "Each artist brings their own style. Browse their work and find the right fit for your piece."
            </p>
        </section>

        <section class="artists-grid">
            {DIRECTORY.iter().map(|artist| view! { <ArtistCard artist=artist/> }).collect_view()}
        </section>

        <section class="cta-band">
            <h2>"Not sure who to book?"</h2>
            <p>"Choose \"Any Available Artist\" and we'll match you with the best fit for your style."</p>
            <A href="/booking" attr:class="button button--primary">"Start Your Booking"</A>
        </section>
    }
}
