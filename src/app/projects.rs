use leptos::prelude::*;

use super::icon::IconSvg;
use super::reveal::use_reveal_on_view;
use crate::content::{Icon, Project, PROJECTS};
use crate::motion::Reveal;
use crate::reveal::DEFAULT_THRESHOLD;

#[component]
pub fn Projects(#[prop(into)] is_loaded: Signal<bool>) -> impl IntoView {
    let (target, revealed) = use_reveal_on_view(DEFAULT_THRESHOLD);
    let shown = Signal::derive(move || is_loaded.get() && revealed.get());
    let motion = Reveal::SECTION;

    view! {
        <section id="projects" class="py-20 bg-gray-50">
            <div node_ref=target class="container mx-auto px-4">
                <h2
                    class="text-3xl md:text-4xl font-bold text-center mb-16 text-black"
                    style=move || motion.style(0, shown.get())
                >
                    "Featured Projects"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <ProjectCard
                                    project
                                    style=Signal::derive(move || motion.style(i + 1, shown.get()))
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, style: Signal<String>) -> impl IntoView {
    let overlay_link = |href: Option<&'static str>, icon: Icon, label: &'static str| {
        href.map(|href| {
            view! {
                <a
                    href=href
                    class="flex items-center gap-2 px-3 py-2 rounded-full bg-white/40 hover:bg-white/60 text-white text-sm font-medium transition-colors"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <IconSvg icon class="w-6 h-6" />
                    {label}
                </a>
            }
        })
    };

    // the overlay only shows on hover, so touch screens get plain links too
    let text_link = |href: Option<&'static str>, label: &'static str| {
        href.map(|href| {
            view! {
                <a
                    href=href
                    class="underline text-gray-700 hover:text-black"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {label}
                </a>
            }
        })
    };

    view! {
        <div
            class="rounded-lg overflow-hidden bg-white shadow-lg hover:shadow-xl transition-shadow"
            style=style
        >
            <div class="relative group">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full aspect-video object-cover"
                />
                <div class="absolute inset-0 bg-black/60 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center gap-4">
                    {overlay_link(project.links.github, Icon::Github, "Source code")}
                    {overlay_link(project.links.live, Icon::Link, "Live site")}
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2 text-black">{project.title}</h3>
                <p class="text-gray-600 mb-4">{project.description}</p>
                <div class="flex gap-4 mb-4 text-sm">
                    {text_link(project.links.github, "Source code")}
                    {text_link(project.links.live, "Live site")}
                </div>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 text-sm rounded-full bg-gray-100 text-gray-600">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
