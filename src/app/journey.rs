use leptos::prelude::*;

use super::icon::IconSvg;
use super::reveal::use_reveal_on_view;
use crate::content::JOURNEY;
use crate::motion::Reveal;

/// The timeline is tall on mobile, so it waits for a larger share on screen.
const JOURNEY_THRESHOLD: f64 = 0.2;

#[component]
pub fn Journey(#[prop(into)] is_loaded: Signal<bool>) -> impl IntoView {
    let (target, revealed) = use_reveal_on_view(JOURNEY_THRESHOLD);
    let shown = Signal::derive(move || is_loaded.get() && revealed.get());
    let motion = Reveal::JOURNEY;
    let last = JOURNEY.len() - 1;

    view! {
        <section id="journey" class="py-10 bg-gray-100">
            <div node_ref=target class="flex flex-col items-center">
                <h2
                    class="text-3xl font-bold mb-8"
                    style=move || Reveal::SECTION.style(0, shown.get())
                >
                    "My Journey"
                </h2>
                <div class="flex flex-col md:flex-row items-center md:items-start gap-6">
                    {JOURNEY
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <div class="flex items-center relative">
                                    <div
                                        class="flex flex-col items-center text-center"
                                        style=move || motion.style(i, shown.get())
                                    >
                                        <div class="w-14 h-14 flex items-center justify-center bg-gray-200 text-gray-600 rounded-full text-2xl mb-4">
                                            <IconSvg icon=step.icon class="w-7 h-7" />
                                        </div>
                                        <h3 class="text-lg font-semibold">{step.title}</h3>
                                        <p class="text-sm text-gray-600">{step.description}</p>
                                    </div>
                                    {(i < last)
                                        .then(|| {
                                            view! {
                                                <div
                                                    class="hidden md:block w-24 border-dotted border-t-2 border-gray-400 absolute left-full top-7"
                                                    aria-hidden="true"
                                                ></div>
                                                <div
                                                    class="md:hidden h-24 border-dotted border-l-2 border-gray-400 absolute top-full left-7"
                                                    aria-hidden="true"
                                                ></div>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
