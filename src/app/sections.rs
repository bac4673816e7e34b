use leptos::{either::EitherOf3, prelude::*};

use crate::content::{Entry, Link, LinkStyle, Span, CONTACT_BLURB, CONTACT_LINKS};

#[component]
pub fn Section(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        // scroll-mt keeps the heading clear of the sticky header
        <section id=id class="scroll-mt-28 w-full max-w-4xl mx-auto px-4 sm:px-6 py-10 sm:py-14">
            <h2 class="text-2xl md:text-3xl font-semibold tracking-tight mb-6">{title}</h2>
            <div class="space-y-4 text-base leading-relaxed">{children()}</div>
        </section>
    }
}

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("rounded-2xl shadow-sm {class}")>
            <div class="p-5">{children()}</div>
        </div>
    }
}

fn rich_text(spans: &'static [Span]) -> impl IntoView {
    spans
        .iter()
        .map(|s| match s {
            Span::Text(t) => EitherOf3::A(*t),
            Span::Strong(t) => EitherOf3::B(view! { <b>{*t}</b> }),
            Span::Break => EitherOf3::C(view! { <br /> }),
        })
        .collect_view()
}

#[component]
pub fn Item(entry: Entry) -> impl IntoView {
    view! {
        <Card class="border border-neutral-200 dark:border-neutral-800 bg-white dark:bg-neutral-900">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-2">
                <div>
                    <h3 class="font-medium text-lg">{entry.heading}</h3>
                    {entry
                        .sub
                        .map(|sub| {
                            view! {
                                <p class="text-sm text-neutral-600 dark:text-neutral-400">{sub}</p>
                            }
                        })}
                </div>
                {entry
                    .meta
                    .map(|meta| {
                        view! {
                            <span class="text-xs rounded-full px-3 py-1 border border-neutral-200 dark:border-neutral-700">
                                {meta}
                            </span>
                        }
                    })}
            </div>
            {(!entry.body.is_empty())
                .then(|| {
                    view! {
                        <div class="mt-3 text-sm text-neutral-700 dark:text-neutral-300">
                            {rich_text(entry.body)}
                        </div>
                    }
                })}
        </Card>
    }
}

#[component]
pub fn EntryGrid(entries: &'static [Entry]) -> impl IntoView {
    view! {
        <div class="grid sm:grid-cols-2 gap-4">
            {entries.iter().map(|e| view! { <Item entry=*e /> }).collect_view()}
        </div>
    }
}

#[component]
pub fn EntryList(entries: &'static [Entry]) -> impl IntoView {
    entries
        .iter()
        .map(|e| view! { <Item entry=*e /> })
        .collect_view()
}

pub fn link_class(style: LinkStyle, extra: &str) -> String {
    let base = match style {
        LinkStyle::Primary => "inline-flex items-center justify-center gap-2 text-sm px-5 py-2.5 rounded-lg bg-neutral-900 text-white dark:bg-white dark:text-black hover:opacity-90 transition",
        LinkStyle::Outline => "inline-flex items-center gap-2 text-sm border px-4 py-2 rounded-lg hover:bg-neutral-50 dark:hover:bg-neutral-900 transition",
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// An outbound link styled as a button. Web links open in a new tab.
#[component]
pub fn LinkButton(link: Link, #[prop(optional, into)] class: String) -> impl IntoView {
    let external = link.is_external();
    view! {
        <a
            href=link.href
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            class=link_class(link.style, &class)
        >
            <i class=link.icon.class() />
            {link.label}
            <i class="extra-arrow-up-right" />
        </a>
    }
}

#[component]
pub fn ContactBlock() -> impl IntoView {
    view! {
        <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-2">{CONTACT_BLURB}</p>
        <div class="mt-6 flex flex-col sm:flex-row sm:flex-wrap gap-3">
            {CONTACT_LINKS.iter().map(|link| view! { <LinkButton link=*link /> }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_class() {
        let primary = link_class(LinkStyle::Primary, "");
        assert!(primary.contains("bg-neutral-900"));
        assert!(!primary.ends_with(' '));

        let outline = link_class(LinkStyle::Outline, "w-full sm:w-auto");
        assert!(outline.contains("border"));
        assert!(outline.ends_with(" w-full sm:w-auto"));
    }
}
