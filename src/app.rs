mod button;
mod celebration;
mod footer;
mod header;
mod hero;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{SectionKind, PROFILE, SECTIONS};
use crate::overlay::OverlayController;
use crate::theme::{provide_theme, Theme};

use celebration::Celebration;
use footer::Footer;
use header::Header;
use hero::Hero;
use sections::{ContactBlock, EntryGrid, EntryList, Section};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        // matches the default preference so the first paint is already dark
        <html lang="en" class=Theme::default().marker()>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;600;700&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <style>"html{scroll-behavior:smooth}"</style>
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();
    provide_context(OverlayController::new());

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <div
                style="font-family: Poppins, sans-serif"
                class="min-h-screen bg-white text-black dark:bg-neutral-950 dark:text-neutral-100"
            >
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=Portfolio />
                    </Routes>
                </main>
                <Footer />
                <Celebration />
            </div>
        </Router>
    }
}

/// The whole page, one section per entry in `SECTIONS`.
#[component]
fn Portfolio() -> impl IntoView {
    let sections = SECTIONS
        .iter()
        .map(|s| match s.kind {
            SectionKind::About => view! { <Hero id=s.id /> }.into_any(),
            SectionKind::Skills => view! {
                <Section id=s.id title=s.title.unwrap_or(s.nav)>
                    <EntryGrid entries=crate::content::SKILLS />
                </Section>
            }
            .into_any(),
            SectionKind::Experience => view! {
                <Section id=s.id title=s.title.unwrap_or(s.nav)>
                    <EntryList entries=crate::content::EXPERIENCE />
                </Section>
            }
            .into_any(),
            SectionKind::Education => view! {
                <Section id=s.id title=s.title.unwrap_or(s.nav)>
                    <EntryList entries=crate::content::EDUCATION />
                </Section>
            }
            .into_any(),
            SectionKind::Projects => view! {
                <Section id=s.id title=s.title.unwrap_or(s.nav)>
                    <EntryGrid entries=crate::content::PROJECTS />
                </Section>
            }
            .into_any(),
            SectionKind::Contact => view! {
                <Section id=s.id title=s.title.unwrap_or(s.nav)>
                    <ContactBlock />
                </Section>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <Title text="Portfolio" />
        <a id="top" />
        {sections}
    }
}
