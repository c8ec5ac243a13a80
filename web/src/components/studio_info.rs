use leptos::prelude::*;
use shared_types::catalog::{BUSINESS_HOURS, PARKING_AND_TRANSIT, POLICIES, SAFETY_FEATURES, STUDIO};

#[component]
pub fn StudioContactCard() -> impl IntoView {
    view! {
        <div class="info-card">
            <h3 class="info-card__title">"Studio Location"</h3>
            <p>{STUDIO.address_line_1}</p>
            <p>{STUDIO.address_line_2}</p>
            <p class="info-card__row">
                <span class="info-card__label">"Phone: "</span>
                <a href=STUDIO.phone_href>{STUDIO.phone}</a>
            </p>
            <p class="info-card__row">
                <span class="info-card__label">"Email: "</span>
                <a href=format!("mailto:{}", STUDIO.email)>{STUDIO.email}</a>
            </p>
        </div>
    }
}

#[component]
pub fn BusinessHours() -> impl IntoView {
    view! {
        <div class="info-card">
            <h3 class="info-card__title">"Business Hours"</h3>
            <ul class="hours-list">
                {BUSINESS_HOURS
                    .iter()
                    .map(|(day, hours)| {
                        view! {
                            <li class="hours-list__row">
                                <span>{*day}</span>
                                <span>{*hours}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Studio policies, optionally followed by the safety checklist.
#[component]
pub fn StudioPolicies(#[prop(optional)] with_safety: bool) -> impl IntoView {
    view! {
        <div class="info-card">
            <h3 class="info-card__title">"Studio Policies"</h3>
            <ul class="bullet-list">
                {POLICIES.iter().map(|policy| view! { <li>{*policy}</li> }).collect_view()}
            </ul>
            {with_safety.then(|| view! {
                <h3 class="info-card__title">"Health & Safety"</h3>
                <ul class="bullet-list bullet-list--check">
                    {SAFETY_FEATURES.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            })}
        </div>
    }
}

/// Map, directions and transit notes for the contact page.
#[component]
pub fn StudioLocation() -> impl IntoView {
    view! {
        <section class="studio-location">
            <h2 class="studio-location__title">"Find Our Studio"</h2>
            <p class="studio-location__intro">
                "Located in the heart of Toronto, our studio is easily accessible with plenty of parking and public transport options."
            </p>

            <div class="studio-location__map">
                <iframe
                    src=STUDIO.map_embed_url
                    title="Pine Ink Tattoo Studio Location"
                    referrerpolicy="no-referrer-when-downgrade"
                    allowfullscreen=true
                    {leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                ></iframe>
                <div class="studio-location__overlay">
                    <p class="studio-location__name">{STUDIO.name}</p>
                    <p>{STUDIO.address_line_1}</p>
                    <p>{STUDIO.address_line_2}</p>
                    <p class="studio-location__hours">"Open until 8:00 PM"</p>
                </div>
            </div>

            <div class="studio-location__details">
                <div class="info-card">
                    <h3 class="info-card__title">"Directions"</h3>
                    <p>
                        <a href=STUDIO.directions_url target="_blank" rel="noopener noreferrer">
                            "Get Directions"
                        </a>
                    </p>
                    <p><a href=STUDIO.phone_href>"Call for Directions"</a></p>
                </div>
                <div class="info-card">
                    <h3 class="info-card__title">"Parking & Transport"</h3>
                    <ul class="bullet-list">
                        {PARKING_AND_TRANSIT.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="info-card">
                    <h3 class="info-card__title">"Need Help Finding Us?"</h3>
                    <p>"Call us and we'll help guide you to our studio"</p>
                    <p><a href=STUDIO.phone_href>{format!("Call {}", STUDIO.phone)}</a></p>
                </div>
            </div>
        </section>
    }
}
