//! Contact form, cancellation policy, and WhatsApp link. The form is not
//! sent anywhere; submitting only thanks the visitor.

use leptos::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::state::notice::{BOOKING_NOTICE_TTL, NoticeKind, NoticeState, flash};

const INTERESTS: [(&str, &str); 6] = [
    ("brows", "Brows"),
    ("lashes", "Lashes"),
    ("waxing", "Waxing"),
    ("makeup", "Makeup"),
    ("skincare", "Skincare"),
    ("other", "Other"),
];

const POLICY: [(&str, &str); 4] = [
    ("24+ hours notice:", "Full refund or free reschedule"),
    ("12-24 hours notice:", "50% cancellation fee applies"),
    ("Less than 12 hours notice:", "Full charge applies"),
    ("No-shows:", "Full charge and may affect future bookings"),
];

const WHATSAPP_URL: &str = "https://wa.me/447123456789";

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let interest = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let notices = RwSignal::new(NoticeState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!("contact form submitted (interest: {:?})", interest.get_untracked());
        name.set(String::new());
        email.set(String::new());
        interest.set(String::new());
        message.set(String::new());
        flash(
            notices,
            NoticeKind::Success,
            "Thank you for your message! I'll get back to you soon.",
            BOOKING_NOTICE_TTL,
        );
    };

    view! {
        <div class="contact-page">
            <div class="page-header">
                <div class="container">
                    <h1>"Contact Us"</h1>
                    <p>"Get in touch - I'd love to hear from you!"</p>
                </div>
            </div>
            <div class="container contact-container">
                <section class="contact-section">
                    <h2>"Get In Touch"</h2>
                    <p class="section-description">
                        "Have a question or want to book an appointment? Fill out the form below and I'll get back to you as soon as possible."
                    </p>
                    <NoticeBanner notices=notices/>
                    <form class="contact-form" on:submit=on_submit>
                        <div class="form-group">
                            <label for="contact-name">"Your Name *"</label>
                            <input
                                id="contact-name"
                                type="text"
                                required
                                placeholder="Enter your name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="contact-email">"Email Address *"</label>
                            <input
                                id="contact-email"
                                type="email"
                                required
                                placeholder="Enter your email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="contact-interest">"Service You're Interested In"</label>
                            <select
                                id="contact-interest"
                                prop:value=move || interest.get()
                                on:change=move |ev| interest.set(event_target_value(&ev))
                            >
                                <option value="">"Select a service"</option>
                                {INTERESTS
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="contact-message">"Your Message *"</label>
                            <textarea
                                id="contact-message"
                                rows="5"
                                required
                                placeholder="Tell me more about what you're looking for..."
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button type="submit" class="btn btn-primary btn-lg">"Send Message"</button>
                    </form>
                </section>
                <section class="policy-section">
                    <h2>"Cancellation Policy"</h2>
                    <div class="policy-content">
                        <p>
                            "I understand that sometimes plans change. To ensure the best experience for all clients, please note the following cancellation policy:"
                        </p>
                        <ul>
                            {POLICY
                                .iter()
                                .map(|(term, rule)| view! { <li><strong>{*term}</strong> " " {*rule}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                        <p>
                            "To cancel or reschedule, please contact me via WhatsApp, email, or phone as soon as possible."
                        </p>
                    </div>
                </section>
                <section class="whatsapp-section">
                    <h2>"Message Us on WhatsApp"</h2>
                    <p>"For quick responses and easy booking, reach out on WhatsApp!"</p>
                    <a href=WHATSAPP_URL target="_blank" rel="noopener noreferrer" class="whatsapp-btn">
                        <span class="whatsapp-icon">"📱"</span>
                        "Chat on WhatsApp"
                    </a>
                    <p class="whatsapp-note">"Available Monday - Saturday, 9am - 7pm"</p>
                </section>
            </div>
        </div>
    }
}
