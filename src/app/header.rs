use leptos::prelude::*;

use crate::content::{PROFILE, SECTIONS};
use crate::theme::use_theme;

use super::button::{Button, ButtonSize, ButtonVariant};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 backdrop-blur supports-[backdrop-filter]:bg-white/60 dark:supports-[backdrop-filter]:bg-neutral-950/60 border-b border-neutral-200 dark:border-neutral-800">
            <div class="w-full max-w-4xl mx-auto px-4 sm:px-6 h-16 flex items-center justify-between">
                <a href="#top" class="font-semibold tracking-tight">
                    {PROFILE.name}
                </a>
                <nav class="hidden md:flex items-center gap-6 text-sm">
                    {SECTIONS
                        .iter()
                        .map(|s| {
                            view! {
                                <a class="hover:opacity-70" href=format!("#{}", s.id)>
                                    {s.nav}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <Button
            variant=ButtonVariant::Ghost
            size=ButtonSize::Icon
            aria_label="Toggle theme"
            on_click=move |_| theme.toggle()
        >
            // sun while dark, moon while light
            <i class=move || {
                if theme.get().is_dark() { "extra-sun text-xl" } else { "extra-moon text-xl" }
            } />
        </Button>
    }
}
