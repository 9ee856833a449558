use leptos::prelude::*;

use super::icon::IconSvg;
use super::reveal::use_reveal_on_view;
use crate::content::SERVICES;
use crate::motion::Reveal;
use crate::reveal::DEFAULT_THRESHOLD;

#[component]
pub fn Services(#[prop(into)] is_loaded: Signal<bool>) -> impl IntoView {
    let (target, revealed) = use_reveal_on_view(DEFAULT_THRESHOLD);
    let shown = Signal::derive(move || is_loaded.get() && revealed.get());
    let motion = Reveal::SECTION;

    view! {
        <section id="services" class="py-20 bg-white">
            <div node_ref=target class="container mx-auto px-4">
                <h2
                    class="text-3xl md:text-4xl font-bold text-center mb-16 text-black"
                    style=move || motion.style(0, shown.get())
                >
                    "What I Do"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            view! {
                                <div
                                    class="p-6 rounded-lg bg-gray-50 hover:bg-gray-100 transition-colors"
                                    style=move || motion.style(i + 1, shown.get())
                                >
                                    <div class="w-16 h-16 rounded-full bg-black flex items-center justify-center mb-4 text-white">
                                        <IconSvg icon=service.icon class="w-8 h-8" />
                                    </div>
                                    <h3 class="text-xl font-semibold mb-2 text-black">
                                        {service.title}
                                    </h3>
                                    <p class="text-gray-600">{service.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
