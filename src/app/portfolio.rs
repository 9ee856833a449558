use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::Contact;
use super::footer::Footer;
use super::hero::Hero;
use super::journey::Journey;
use super::nav::NavBar;
use super::projects::Projects;
use super::services::Services;
use crate::motion::PAGE_FADE_SECS;

/// The whole page. Owns the page-level `is_loaded` flag: sections hold their
/// entrance animations until the page itself has faded in.
#[component]
pub fn Portfolio() -> impl IntoView {
    let (is_loaded, set_is_loaded) = signal(false);

    // effects only run in the browser, so the server always renders unloaded
    Effect::new(move |_| {
        set_timeout(
            move || set_is_loaded(true),
            Duration::from_secs_f64(PAGE_FADE_SECS),
        );
    });

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-[#F5F5F5] text-black animate-fade-in">
            <NavBar />
            <main>
                <Hero is_loaded />
                <Services is_loaded />
                <Journey is_loaded />
                <Projects is_loaded />
                <Contact is_loaded />
            </main>
            <Footer />
        </div>
    }
}
