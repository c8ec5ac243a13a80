use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::catalog::DirectoryArtist;

use crate::components::error_boundary::log_component_error;

/// Roster card. When the photo fails to load the card falls back to the
/// artist's initials and the failure is reported to the server.
#[component]
pub fn ArtistCard(artist: &'static DirectoryArtist) -> impl IntoView {
    let image_failed = RwSignal::new(false);

    let on_image_error = move |_| {
        if image_failed.get_untracked() {
            return;
        }
        image_failed.set(true);
        log_component_error(
            format!("artist photo failed to load: {}", artist.image),
            "ArtistCard".to_string(),
            Some(artist.name.to_string()),
        );
    };

    view! {
        <article class="artist-card">
            <div class="artist-card__photo">
                <Show
                    when=move || !image_failed.get()
                    fallback=move || view! {
                        <div class="artist-card__monogram" aria-label=artist.name>
                            {artist.monogram()}
                        </div>
                    }
                >
                    <img
                        src=artist.image
                        alt=format!("{} - tattoo artist", artist.name)
                        loading="lazy"
                        on:error=on_image_error
                    />
                </Show>
                <span class="artist-card__experience">{artist.experience}</span>
            </div>
            <div class="artist-card__body">
                <h3 class="artist-card__name">{artist.name}</h3>
                <p class="artist-card__specialty">{artist.specialty}</p>
                <p class="artist-card__description">{artist.description}</p>
                <div class="artist-card__actions">
                    <a href=artist.instagram target="_blank" rel="noopener noreferrer" class="artist-card__link">
                        "View Portfolio"
                    </a>
                    <A href="/booking" attr:class="artist-card__link artist-card__link--primary">
                        "Book"
                    </A>
                </div>
            </div>
        </article>
    }
}
