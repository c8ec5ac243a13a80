use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{BookingWizardForm, BusinessHours, StudioContactCard, StudioPolicies};

#[component]
pub fn BookingPage() -> impl IntoView {
    view! {
        <Title text="Book an Appointment - Pine Ink Tattoo"/>
        <section class="page-hero">
            <h1 class="page-hero__title">"Book an Appointment"</h1>
            <p class="page-hero__subtitle">
                "Tell us about your idea and pick a time. We'll confirm within 24 hours."
            </p>
        </section>

        <div class="booking-layout">
            <div class="booking-layout__form">
                <BookingWizardForm/>
            </div>
            <aside class="booking-layout__info">
                <StudioContactCard/>
                <BusinessHours/>
                <StudioPolicies with_safety=true/>
            </aside>
        </div>
    }
}
