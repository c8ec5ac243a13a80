use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::catalog::GalleryPiece;
use shared_types::masonry::{column_count_for_width, masonry_columns};
use thaw::Tag;

use crate::utils::viewport::use_viewport_width;

/// Width the server renders for. 3 columns, same as a desktop viewport.
const SSR_VIEWPORT_WIDTH: u32 = 1200;

#[component]
pub fn MasonryGallery(#[prop(into)] pieces: Signal<Vec<GalleryPiece>>) -> impl IntoView {
    let width = use_viewport_width(SSR_VIEWPORT_WIDTH);
    let column_count = Memo::new(move |_| column_count_for_width(width.get()));
    let columns = Memo::new(move |_| pieces.with(|p| masonry_columns(p, column_count.get())));
    let selected = RwSignal::new(None::<GalleryPiece>);

    view! {
        <Show
            when=move || pieces.with(|p| !p.is_empty())
            fallback=|| view! {
                <div class="gallery-empty">
                    <p>"No tattoos found in this category."</p>
                </div>
            }
        >
            <div
                class="masonry-grid"
                style:grid-template-columns=move || format!("repeat({}, minmax(0, 1fr))", column_count.get())
            >
                {move || {
                    columns
                        .get()
                        .into_iter()
                        .map(|column| {
                            view! {
                                <div class="masonry-column">
                                    {column
                                        .into_iter()
                                        .map(|piece| view! { <GalleryTile piece=piece selected=selected/> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>

        {move || selected.get().map(|piece| view! { <PieceDetail piece=piece selected=selected/> })}
    }
}

#[component]
fn GalleryTile(piece: GalleryPiece, selected: RwSignal<Option<GalleryPiece>>) -> impl IntoView {
    let open = {
        let piece = piece.clone();
        move |_| selected.set(Some(piece.clone()))
    };

    view! {
        <button class="gallery-tile" on:click=open>
            <img
                src=piece.src
                alt=piece.alt
                loading="lazy"
                style:aspect-ratio=format!("300 / {}", piece.height)
            />
            <div class="gallery-tile__overlay">
                <span class="gallery-tile__artist">{piece.artist}</span>
                <span class="gallery-tile__likes">{format!("♥ {}", piece.likes)}</span>
            </div>
        </button>
    }
}

#[component]
fn PieceDetail(piece: GalleryPiece, selected: RwSignal<Option<GalleryPiece>>) -> impl IntoView {
    let close = move |_| selected.set(None);

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal__close" aria-label="Close" on:click=close>"✕"</button>
                <img class="modal__image" src=piece.src alt=piece.alt/>
                <div class="modal__body">
                    <Tag>{piece.category.label()}</Tag>
                    <h3>{piece.alt}</h3>
                    {piece.description.map(|d| view! { <p class="modal__description">{d}</p> })}
                    <dl class="modal__facts">
                        <dt>"Artist"</dt><dd>{piece.artist}</dd>
                        <dt>"Placement"</dt><dd>{piece.body_part}</dd>
                        <dt>"Completed"</dt><dd>{piece.date}</dd>
                        <dt>"Likes"</dt><dd>{piece.likes}</dd>
                    </dl>
                    <A href="/booking" attr:class="button button--primary">"Book Similar Design"</A>
                </div>
            </div>
        </div>
    }
}
