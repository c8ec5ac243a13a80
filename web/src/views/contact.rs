use leptos::prelude::*;
use leptos_meta::Title;
use shared_types::catalog::STUDIO;

use crate::components::{BusinessHours, ContactInquiryForm, StudioContactCard, StudioLocation};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact - Pine Ink Tattoo"/>
        <section class="page-hero">
            <h1 class="page-hero__title">"Get in Touch"</h1>
            <p class="page-hero__subtitle">
                "Questions about a design, pricing or aftercare? Send us a message."
            </p>
        </section>

        <div class="contact-layout">
            <ContactInquiryForm/>
            <aside class="contact-layout__info">
                <StudioContactCard/>
                <BusinessHours/>
                <div class="info-card">
                    <h3 class="info-card__title">"Follow Us"</h3>
                    <p><a href=STUDIO.instagram target="_blank" rel="noopener noreferrer">"Instagram"</a></p>
                    <p><a href=STUDIO.facebook target="_blank" rel="noopener noreferrer">"Facebook"</a></p>
                </div>
            </aside>
        </div>

        <StudioLocation/>
    }
}
