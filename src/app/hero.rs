use leptos::prelude::*;

use super::icon::IconSvg;
use super::reveal::use_reveal_on_view;
use crate::content::{Icon, HERO_TITLE, PROFILE_IMAGE, TECHNOLOGIES};
use crate::motion::Reveal;
use crate::reveal::DEFAULT_THRESHOLD;

#[component]
pub fn Hero(#[prop(into)] is_loaded: Signal<bool>) -> impl IntoView {
    let (target, revealed) = use_reveal_on_view(DEFAULT_THRESHOLD);
    let shown = Signal::derive(move || is_loaded.get() && revealed.get());
    let motion = Reveal::HERO;
    // letters cascade from where the heading itself would start
    let letters = motion.after(motion.delay(1));

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center pt-20">
            <div node_ref=target class="container mx-auto px-4 text-center">
                <div class="mb-8" style=move || motion.style(0, shown.get())>
                    <img
                        src=PROFILE_IMAGE
                        alt="Profile"
                        class="w-32 h-32 rounded-full mx-auto border-2 border-gray-200"
                    />
                </div>
                <h1 class="text-4xl font-bold mb-6 text-black">
                    {HERO_TITLE
                        .chars()
                        .enumerate()
                        .map(|(i, c)| {
                            let letter = if c == ' ' { '\u{00A0}' } else { c };
                            view! {
                                <span
                                    class="inline-block"
                                    style=move || letters.style(i, shown.get())
                                >
                                    {letter.to_string()}
                                </span>
                            }
                        })
                        .collect_view()}
                </h1>
                <div style=move || motion.style(2, shown.get())>
                    <a
                        href="#contact"
                        class="inline-flex items-center px-8 py-3 bg-black text-white rounded-full font-medium hover:bg-gray-900 transition-colors"
                    >
                        "Latest Work"
                        <IconSvg icon=Icon::ArrowRight class="w-5 h-5 ml-2" />
                    </a>
                </div>
                <Show when=move || shown.get()>
                    <TechMarquee />
                </Show>
            </div>
        </section>
    }
}

#[component]
fn TechMarquee() -> impl IntoView {
    // rendered twice so the loop has no visible seam
    let items = move || {
        TECHNOLOGIES
            .iter()
            .map(|tech| {
                view! {
                    <div class="w-1/4 shrink-0 text-sm font-medium text-gray-600 text-center">
                        {*tech}
                    </div>
                }
            })
            .collect_view()
    };
    view! {
        <div class="mt-16 overflow-hidden grayscale opacity-70 animate-fade-up">
            <div class="flex w-max animate-marquee gap-8">{items()} {items()}</div>
        </div>
    }
}
