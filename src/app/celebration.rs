use leptos::{either::Either, prelude::*};

use crate::overlay::{
    OverlayController, OverlayLayer, OverlayPhase, CAPTION, LOGO_ALT, LOGO_SRC,
    OPACITY_TRANSITION, TRANSFORM_TRANSITION,
};

const CAPTION_STYLE: &str = "color: white; font-size: 1.5rem; font-weight: 600; \
    margin-top: 12px; text-shadow: 0 2px 6px rgba(0,0,0,0.5);";

fn backdrop_style(phase: OverlayPhase) -> String {
    format!(
        "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; \
         background: rgba(0,0,0,0.4); backdrop-filter: blur(5px); \
         opacity: {}; transition: opacity {}ms ease-in-out; z-index: 9998;",
        phase.backdrop_opacity(),
        OPACITY_TRANSITION.as_millis(),
    )
}

fn container_style(phase: OverlayPhase) -> String {
    format!(
        "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%) scale({}); \
         display: flex; flex-direction: column; align-items: center; \
         opacity: {}; transition: opacity {}ms ease-in-out, transform {}ms ease-in-out; z-index: 9999;",
        phase.container_scale(),
        phase.container_opacity(),
        OPACITY_TRANSITION.as_millis(),
        TRANSFORM_TRANSITION.as_millis(),
    )
}

/// Full screen overlay driven by the shared [`OverlayController`]. The
/// rendered nodes are exactly `OverlayPhase::layers`; keying them keeps the
/// same elements alive from `Entering` to `Exiting` so the CSS transitions run.
#[component]
pub fn Celebration() -> impl IntoView {
    let phase = expect_context::<OverlayController>().phase();

    view! {
        <For
            each=move || phase.get().layers().to_vec()
            key=|layer| *layer
            children=move |layer| match layer {
                OverlayLayer::Backdrop => Either::Left(
                    view! {
                        <div aria-hidden="true" style=move || backdrop_style(phase.get()) />
                    },
                ),
                OverlayLayer::Container => Either::Right(
                    view! {
                        <div role="status" style=move || container_style(phase.get())>
                            <img src=LOGO_SRC alt=LOGO_ALT style="width: 120px" />
                            <span style=CAPTION_STYLE>{CAPTION}</span>
                        </div>
                    },
                ),
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render_in(phase: OverlayPhase) -> String {
        let owner = Owner::new();
        owner.set();
        provide_context(OverlayController::starting_at(phase));
        view! { <Celebration /> }.to_html()
    }

    #[test]
    fn test_renders_one_backdrop_and_container_at_peak() {
        let html = render_in(OverlayPhase::Holding);
        assert_eq!(html.matches("z-index: 9998").count(), 1);
        assert_eq!(html.matches("z-index: 9999").count(), 1);
        assert!(html.contains(CAPTION));
        assert!(html.contains(LOGO_SRC));
        assert!(html.contains("opacity: 1;"));
    }

    #[test]
    fn test_renders_nothing_when_idle() {
        let html = render_in(OverlayPhase::Idle);
        assert_eq!(html.matches("z-index: 9998").count(), 0);
        assert_eq!(html.matches("z-index: 9999").count(), 0);
        assert!(!html.contains(CAPTION));
    }

    #[test]
    fn test_entering_and_exiting_stay_rendered() {
        for phase in [OverlayPhase::Entering, OverlayPhase::Exiting] {
            let html = render_in(phase);
            assert_eq!(html.matches("z-index: 9998").count(), 1, "{phase:?}");
            assert_eq!(html.matches("z-index: 9999").count(), 1, "{phase:?}");
        }
    }

    #[test]
    fn test_entering_styles_are_transparent() {
        let backdrop = backdrop_style(OverlayPhase::Entering);
        let container = container_style(OverlayPhase::Entering);
        assert!(backdrop.contains("opacity: 0;"));
        assert!(backdrop.contains("z-index: 9998"));
        assert!(container.contains("opacity: 0;"));
        assert!(container.contains("scale(0.9)"));
        assert!(container.contains("z-index: 9999"));
    }

    #[test]
    fn test_holding_styles_are_opaque() {
        let backdrop = backdrop_style(OverlayPhase::Holding);
        let container = container_style(OverlayPhase::Holding);
        assert!(backdrop.contains("opacity: 1;"));
        assert!(container.contains("opacity: 1;"));
        assert!(container.contains("scale(1)"));
        assert!(container.contains("transform 400ms"));
    }

    #[test]
    fn test_exiting_shrinks() {
        let container = container_style(OverlayPhase::Exiting);
        assert!(container.contains("scale(0.8)"));
        assert!(container.contains("opacity: 0;"));
        assert!(backdrop_style(OverlayPhase::Exiting).contains("transition: opacity 300ms"));
    }
}
