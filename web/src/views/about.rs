use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use shared_types::catalog::{STUDIO, STUDIO_SERVICES};

use crate::components::{BusinessHours, StudioPolicies};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About - Pine Ink Tattoo"/>
        <section class="page-hero">
            <h1 class="page-hero__title">"About " {STUDIO.name}</h1>
            <p class="page-hero__subtitle">
                "A private studio on Yonge Street in midtown Toronto, focused on custom work and a comfortable, clean experience."
            </p>
        </section>

        <section class="services">
            <h2 class="section-title">"Services"</h2>
            <div class="services__grid">
                {STUDIO_SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <article class="service-card">
                                <h3 class="service-card__title">{service.title}</h3>
                                <p class="service-card__description">{service.description}</p>
                                <p class="service-card__details">{service.details}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="about-info">
            <BusinessHours/>
            <StudioPolicies with_safety=true/>
        </section>

        <section class="cta-band">
            <h2>"Ready for your next piece?"</h2>
            <A href="/booking" attr:class="button button--primary">"Book a Consultation"</A>
            <A href="/contact" attr:class="button button--secondary">"Ask a Question"</A>
        </section>
    }
}
