//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__inner">
                <div class="footer__brand">
                    <h3>"BeautyBook"</h3>
                    <p>"Brows, waxing, aesthetics and facials, booked in a few clicks."</p>
                </div>
                <div class="footer__links">
                    <h4>"Explore"</h4>
                    <a href="/services">"Services"</a>
                    <a href="/providers">"Providers"</a>
                    <a href="/reviews">"Reviews"</a>
                    <a href="/contact">"Contact"</a>
                </div>
                <div class="footer__links">
                    <h4>"Account"</h4>
                    <a href="/login">"Login"</a>
                    <a href="/register">"Register"</a>
                    <a href="/appointments">"My Appointments"</a>
                </div>
            </div>
            <p class="footer__copy">"© BeautyBook. All rights reserved."</p>
        </footer>
    }
}
