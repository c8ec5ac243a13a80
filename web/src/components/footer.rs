use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::catalog::{BUSINESS_HOURS, STUDIO};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div>
                    <h3 class="footer__title">{STUDIO.name}</h3>
                    <p>{STUDIO.address_line_1}<br/>{STUDIO.address_line_2}</p>
                    <p><a href=STUDIO.phone_href>{STUDIO.phone}</a></p>
                    <p><a href=format!("mailto:{}", STUDIO.email)>{STUDIO.email}</a></p>
                </div>
                <div>
                    <h3 class="footer__title">"Hours"</h3>
                    <ul class="footer__hours">
                        // Weekdays share hours; show the range plus Saturday and Sunday
                        <li>"Mon - Fri: " {BUSINESS_HOURS[0].1}</li>
                        <li>"Saturday: " {BUSINESS_HOURS[5].1}</li>
                        <li>"Sunday: " {BUSINESS_HOURS[6].1}</li>
                    </ul>
                </div>
                <div>
                    <h3 class="footer__title">"Follow"</h3>
                    <p><a href=STUDIO.instagram target="_blank" rel="noopener noreferrer">"Instagram"</a></p>
                    <p><a href=STUDIO.facebook target="_blank" rel="noopener noreferrer">"Facebook"</a></p>
                    <p><A href="/booking">"Book an appointment"</A></p>
                </div>
            </div>
        </footer>
    }
}
