use leptos::{either::Either, prelude::*};

use crate::content::{PROFILE, SOCIAL_LINKS};
use crate::overlay::{BrowserScheduler, OverlayController};
use crate::theme::{use_theme, Theme};

use super::sections::LinkButton;

#[component]
pub fn Hero(id: &'static str) -> impl IntoView {
    let overlay = expect_context::<OverlayController>();
    let link_class = "text-neutral-700 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white transition-colors font-medium";

    view! {
        <section id=id class="max-w-4xl mx-auto px-5 py-14 md:py-20">
            <div class="flex flex-col md:flex-row items-center md:items-center text-center md:text-left gap-6 md:gap-10">
                <Avatar />
                <div class="flex-1">
                    <h1 class="text-2xl sm:text-3xl md:text-4xl font-semibold leading-tight tracking-tight mb-3">
                        {PROFILE.greeting}
                    </h1>
                    <p class="text-neutral-700 dark:text-neutral-300 max-w-2xl mx-auto md:mx-0 text-base sm:text-lg">
                        {PROFILE.tagline}
                    </p>
                    <ul class="list-disc text-left mx-auto md:mx-0 pl-5 mt-3 space-y-2 text-sm sm:text-base text-neutral-700 dark:text-neutral-300">
                        <li>
                            <strong>{PROFILE.years}</strong>
                            " of experience in tech."
                        </li>
                        <li>
                            "Currently working as a " {PROFILE.role} " @ "
                            <a
                                href=PROFILE.employer_href
                                target="_blank"
                                rel="noreferrer"
                                class=link_class
                            >
                                <strong>{PROFILE.employer}</strong>
                            </a>
                        </li>
                        <li class="relative">
                            {PROFILE.fan_line}
                            <button
                                type="button"
                                class=format!("{link_class} cursor-pointer")
                                on:click=move |_| {
                                    overlay.trigger(&BrowserScheduler);
                                }
                            >
                                <strong>{PROFILE.fan_button}</strong>
                            </button>
                        </li>
                    </ul>
                    <div class="mt-6 flex flex-col sm:flex-row sm:flex-wrap items-center sm:items-start gap-3">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <LinkButton
                                        link=*link
                                        class="w-full sm:w-auto justify-center"
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Profile picture for the current theme. Falls back to initials when the
/// image for that theme can't be loaded.
#[component]
fn Avatar() -> impl IntoView {
    let theme = use_theme();
    let (failed, set_failed) = signal(None::<Theme>);
    let alt = format!("{} avatar", PROFILE.name);

    view! {
        <div class="w-28 h-28 md:w-32 md:h-32 rounded-full border border-neutral-200 dark:border-neutral-800 overflow-hidden select-none">
            {move || {
                // rebuilt on every theme change so the fade-in replays
                let current = theme.get();
                if failed.get() == Some(current) {
                    Either::Left(
                        view! {
                            <span
                                role="img"
                                aria-label=alt.clone()
                                class="flex w-full h-full items-center justify-center text-3xl font-semibold"
                            >
                                {PROFILE.initials}
                            </span>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <img
                                src=current.avatar_src()
                                alt=alt.clone()
                                data-theme=current.key()
                                class="w-full h-full object-cover transition-all duration-500 ease-in-out transform hover:scale-105 opacity-100 animate-fade-in"
                                on:error=move |_| {
                                    log::warn!("avatar {} failed to load", current.avatar_src());
                                    set_failed.set(Some(current));
                                }
                            />
                        },
                    )
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeController;
    use leptos::tachys::view::RenderHtml;

    fn render_hero() -> String {
        let owner = Owner::new();
        owner.set();
        provide_context(ThemeController::default());
        provide_context(OverlayController::new());
        view! { <Hero id="about" /> }.to_html()
    }

    #[test]
    fn test_hero_copy_rendered_verbatim() {
        let html = render_hero();
        assert!(html.contains(
            "At the intersection of product, UX, and engineering — I help ideas become clear, usable, and real."
        ));
        assert!(html.contains("Proud Madridista — "));
        assert!(html.contains("¡Hala Madrid Y Nada Más!"));
        assert!(!html.contains("Proud Madridista: "));
    }

    #[test]
    fn test_hero_uses_dark_avatar_by_default() {
        let html = render_hero();
        assert!(html.contains("/avatar-dark.png"));
        assert!(html.contains("id=\"about\""));
    }
}
