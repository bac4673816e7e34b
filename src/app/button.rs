use leptos::{ev::MouseEvent, prelude::*};

const BASE: &str = "inline-flex items-center justify-center rounded-2xl border text-sm transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:pointer-events-none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    Default,
    #[default]
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Icon,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-black text-white border-black hover:opacity-90 dark:bg-white dark:text-black dark:border-white",
            ButtonVariant::Ghost => "bg-transparent text-black border-neutral-200 hover:bg-neutral-50 dark:text-white dark:border-neutral-800 dark:hover:bg-neutral-900",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "h-8 px-3",
            ButtonSize::Md => "h-10 px-4",
            ButtonSize::Icon => "h-10 w-10 p-0",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    [BASE, variant.class(), size.class(), extra]
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn Button<F>(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional)] aria_label: Option<&'static str>,
    on_click: F,
    children: Children,
) -> impl IntoView
where
    F: FnMut(MouseEvent) + 'static,
{
    view! {
        <button
            type="button"
            class=button_class(variant, size, &class)
            aria-label=aria_label
            on:click=on_click
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_ghost_md() {
        let class = button_class(ButtonVariant::default(), ButtonSize::default(), "");
        assert!(class.starts_with(BASE));
        assert!(class.contains("bg-transparent"));
        assert!(class.ends_with("h-10 px-4"));
    }

    #[test]
    fn test_icon_button_with_extra() {
        let class = button_class(ButtonVariant::Default, ButtonSize::Icon, "ml-2");
        assert!(class.contains("dark:bg-white"));
        assert!(class.contains("h-10 w-10 p-0"));
        assert!(class.ends_with(" ml-2"));
        assert!(!class.contains("  "));
    }
}
