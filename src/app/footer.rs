use leptos::prelude::*;

use crate::config::build_year;
use crate::content::OWNER;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 bg-gray-50">
            <div class="container mx-auto px-4 text-center text-gray-600">
                <p class="animate-fade-in">
                    {format!("© {} {OWNER}. All rights reserved.", build_year())}
                </p>
            </div>
        </footer>
    }
}
