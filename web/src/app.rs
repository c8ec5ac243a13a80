use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::{Footer, Navbar};
use crate::views::{
    about::AboutPage, artists::ArtistsPage, booking::BookingPage, contact::ContactPage,
    gallery::GalleryPage, home::HomePage, not_found::NotFoundPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <meta
                        name="description"
                        content="Pine Ink Tattoo - custom tattoos in midtown Toronto. Book a consultation with our artists."
                    />
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/pine-ink.css"/>
        <Title text="Pine Ink Tattoo"/>

        <ConfigProvider>
            <Router>
                <Navbar/>
                <main class="site-main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("artists") view=ArtistsPage/>
                        <Route path=StaticSegment("gallery") view=GalleryPage/>
                        <Route path=StaticSegment("booking") view=BookingPage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                    </Routes>
                </main>
                <Footer/>
            </Router>
        </ConfigProvider>
    }
}
