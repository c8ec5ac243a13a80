use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/artists", "Artists"),
    ("/gallery", "Gallery"),
    ("/booking", "Booking"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let location = use_location();

    // Close the mobile menu after every navigation
    Effect::new(move |_| {
        location.pathname.track();
        menu_open.set(false);
    });

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Pine Ink"
                    </A>
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>

                <div class="navbar__links" class=("navbar__links--open", move || menu_open.get())>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <A href=*href attr:class="navbar__link">
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                    <A href="/booking" attr:class="navbar__link navbar__link--cta">
                        "Book Now"
                    </A>
                </div>
            </div>
        </nav>
    }
}
