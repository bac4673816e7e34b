use leptos::prelude::*;

use crate::content::PROFILE;

static BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-neutral-200 dark:border-neutral-800">
            <div class="max-w-4xl mx-auto px-5 py-10 text-sm flex items-center justify-between">
                <span>{format!("© {} {}", BUILD_YEAR, PROFILE.name)}</span>
                <a href="#top" class="text-xs underline underline-offset-4">
                    "Back to top"
                </a>
            </div>
        </footer>
    }
}
