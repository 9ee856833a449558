use leptos::prelude::*;

use crate::content::{NAV_LINKS, OWNER};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-[#F5F5F5]/90 backdrop-blur shadow-sm">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold text-black">
                    {OWNER}
                </a>
                <nav class="hidden md:flex gap-6">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=format!("#{}", link.anchor)
                                    class="text-gray-600 hover:text-black transition-colors"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
