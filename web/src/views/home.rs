use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use shared_types::catalog::{
    BUSINESS_HOURS, DIRECTORY, GALLERY, GALLERY_CATEGORIES, STUDIO, TESTIMONIALS,
};

use crate::components::ArtistCard;

const FEATURED_ARTISTS: usize = 3;
const SHOWCASE_PIECES: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Pine Ink Tattoo - Custom Tattoos in Toronto"/>
        <div class="homepage-container">
            <section class="hero">
                <h1 class="hero__title">{STUDIO.name}</h1>
                <p class="hero__tagline">"Custom tattoos on Yonge Street, midtown Toronto"</p>
                <div class="hero__actions">
                    <A href="/booking" attr:class="button button--primary">"Book Appointment"</A>
                    <A href="/gallery" attr:class="button button--secondary">"View Our Work"</A>
                </div>
            </section>

            <section class="shop-info">
                <div class="shop-info__item">
                    <h3>"Visit"</h3>
                    <p>{STUDIO.address_line_1}</p>
                    <p>{STUDIO.address_line_2}</p>
                </div>
                <div class="shop-info__item">
                    <h3>"Hours"</h3>
                    <p>"Mon - Sat: " {BUSINESS_HOURS[0].1}</p>
                    <p>"Sunday: " {BUSINESS_HOURS[6].1}</p>
                </div>
                <div class="shop-info__item">
                    <h3>"Call"</h3>
                    <p><a href=STUDIO.phone_href>{STUDIO.phone}</a></p>
                </div>
            </section>

            <section class="featured-artists">
                <h2 class="section-title">"Featured Artists"</h2>
                <div class="artists-grid">
                    {DIRECTORY
                        .iter()
                        .take(FEATURED_ARTISTS)
                        .map(|artist| view! { <ArtistCard artist=artist/> })
                        .collect_view()}
                </div>
                <A href="/artists" attr:class="section-link">"Meet all artists →"</A>
            </section>

            <section class="gallery-showcase">
                <h2 class="section-title">"Recent Work"</h2>
                <div class="gallery-showcase__grid">
                    {GALLERY
                        .iter()
                        .take(SHOWCASE_PIECES)
                        .map(|piece| {
                            view! {
                                <A href=format!("/gallery?style={}", piece.category.as_str()) attr:class="gallery-showcase__item">
                                    <img src=piece.src alt=piece.alt loading="lazy"/>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="gallery-showcase__styles">
                    {GALLERY_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <A href=format!("/gallery?style={}", category.as_str()) attr:class="filter-chip">
                                    {category.label()}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="testimonials">
                <h2 class="section-title">"What Our Clients Say"</h2>
                <div class="testimonials__grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <blockquote class="testimonial">
                                    <div class="testimonial__rating" aria-label=format!("{} out of 5 stars", t.rating)>
                                        {"★".repeat(usize::from(t.rating))}
                                    </div>
                                    <p class="testimonial__text">{t.text}</p>
                                    <footer class="testimonial__name">{t.name}</footer>
                                </blockquote>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta-band">
                <h2>"Ready to get inked?"</h2>
                <p>"Free consultations for all new clients."</p>
                <A href="/booking" attr:class="button button--primary">"Book Your Consultation"</A>
            </section>
        </div>
    }
}
