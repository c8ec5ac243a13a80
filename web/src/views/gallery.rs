use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use shared_types::catalog::{gallery_pieces, GalleryCategory, GALLERY_CATEGORIES};

use crate::components::{MasonryGallery, SectionBoundary};

/// Portfolio grid filtered by `?style=<category>`. An unknown style is an
/// error rendered by the section boundary.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let query = use_query_map();
    let filter = Memo::new(move |_| {
        query.with(|q| GalleryCategory::parse_filter(q.get("style").as_deref()))
    });
    let active = move || filter.get().ok().flatten();

    view! {
        <Title text="Gallery - Pine Ink Tattoo"/>
        <section class="page-hero">
            <h1 class="page-hero__title">"Our Work"</h1>
            <p class="page-hero__subtitle">"Recent pieces from the studio. Tap a tattoo for details."</p>
        </section>

        <nav class="gallery-filters" aria-label="Filter by style">
            <A
                href="/gallery"
                attr:class=move || if active().is_none() { "filter-chip filter-chip--active" } else { "filter-chip" }
            >
                "All"
            </A>
            {GALLERY_CATEGORIES
                .iter()
                .copied()
                .map(|category| {
                    view! {
                        <A
                            href=format!("/gallery?style={}", category.as_str())
                            attr:class=move || {
                                if active() == Some(category) {
                                    "filter-chip filter-chip--active"
                                } else {
                                    "filter-chip"
                                }
                            }
                        >
                            {category.label()}
                        </A>
                    }
                })
                .collect_view()}
        </nav>

        <SectionBoundary name="GalleryPage">
            {move || {
                filter.get().map(|category| {
                    view! { <MasonryGallery pieces=Signal::derive(move || gallery_pieces(category))/> }
                })
            }}
        </SectionBoundary>
    }
}
