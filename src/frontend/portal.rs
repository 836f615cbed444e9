//! Portal transition: the component that drives a modal through its
//! Entering/Active/Exiting phases and renders the animation layers.
//!
//! The phase machine itself lives in [`crate::state::ModalState`] and is
//! owned by the shell; this component arms the timers that complete each
//! animated phase, wires up the dismissal triggers, and turns
//! `(phase, origin, viewport)` into CSS custom properties and phase
//! classes. Timer handles and event listeners are held in hook refs so
//! that a phase change or unmount drops (and thereby cancels) them.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, Node};
use yew::prelude::*;

use crate::content::Language;
use crate::frontend::modals::SectionModal;
use crate::frontend::viewport_size;
use crate::state::{ModalState, Phase, Point, ENTER_DURATION_MS, EXIT_DURATION_MS};

const RING_PARTICLES: usize = 12;

#[derive(Properties, PartialEq)]
pub struct PortalTransitionProps {
    pub modal: ModalState,
    pub language: Language,
    pub on_phase_complete: Callback<()>,
    pub on_request_close: Callback<()>,
}

#[function_component(PortalTransition)]
pub fn portal_transition(props: &PortalTransitionProps) -> Html {
    let phase = props.modal.phase();
    let content_ref = use_node_ref();
    let viewport = use_state(viewport_size);

    // One timer per animated phase. Writing the new handle drops any
    // pending one, so a stale timer can never complete a phase the
    // portal has already left.
    let phase_timer = use_mut_ref(|| None::<Timeout>);
    use_effect_with(phase, {
        let phase_timer = phase_timer.clone();
        let on_phase_complete = props.on_phase_complete.clone();
        move |phase: &Phase| {
            let duration = match phase {
                Phase::Entering => Some(ENTER_DURATION_MS),
                Phase::Exiting => Some(EXIT_DURATION_MS),
                Phase::Closed | Phase::Active => None,
            };
            *phase_timer.borrow_mut() = duration.map(|ms| {
                let on_phase_complete = on_phase_complete.clone();
                Timeout::new(ms, move || on_phase_complete.emit(()))
            });
            move || {
                phase_timer.borrow_mut().take();
            }
        }
    });

    // Dismissal triggers, armed only while Active: Escape anywhere, or a
    // pointer-down outside the content boundary. Both funnel into the
    // same close request as the explicit button; the state machine
    // ignores repeats.
    use_effect_with(phase, {
        let content_ref = content_ref.clone();
        let on_request_close = props.on_request_close.clone();
        move |phase: &Phase| {
            let mut listeners = Vec::new();
            if *phase == Phase::Active {
                if let Some(document) = window().and_then(|w| w.document()) {
                    let close = on_request_close.clone();
                    listeners.push(EventListener::new(&document, "keydown", move |event| {
                        let is_escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|key| key.key() == "Escape");
                        if is_escape {
                            close.emit(());
                        }
                    }));

                    let close = on_request_close.clone();
                    let content_ref = content_ref.clone();
                    listeners.push(EventListener::new(&document, "mousedown", move |event| {
                        let Some(content) = content_ref.cast::<Node>() else {
                            return;
                        };
                        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                        if !content.contains(target.as_ref()) {
                            close.emit(());
                        }
                    }));
                }
            }
            move || drop(listeners)
        }
    });

    // The origin-relative offset depends on where the screen center is,
    // so track viewport resizes while the portal is up.
    use_effect_with((), {
        let viewport = viewport.clone();
        move |()| {
            let listener = window().map(|w| {
                EventListener::new(&w, "resize", move |_| {
                    viewport.set(viewport_size());
                })
            });
            move || drop(listener)
        }
    });

    let Some(section) = props.modal.section() else {
        return html! {};
    };

    let phase_class = match phase {
        Phase::Closed => "phase-closed",
        Phase::Entering => "phase-entering",
        Phase::Active => "phase-active",
        Phase::Exiting => "phase-exiting",
    };

    let filter_markup = Html::from_html_unchecked(AttrValue::from(portal_filter(phase)));
    let shell_style = shell_style(props.modal.origin(), *viewport);

    // Content mounts only once Active is reached; a glowing placeholder
    // fills the frame during the entrance so nothing inside the modal
    // can receive input before the animation finishes.
    let content = if matches!(phase, Phase::Active | Phase::Exiting) {
        html! {
            <div class="portal-body">
                <SectionModal
                    section={section}
                    language={props.language}
                    on_request_close={props.on_request_close.clone()}
                />
            </div>
        }
    } else {
        html! { <div class="portal-placeholder" /> }
    };

    html! {
        <div class={classes!("portal-layer", phase_class)}>
            <svg class="portal-defs" aria-hidden="true">
                {filter_markup}
            </svg>

            <div class="portal-backdrop" />

            <div class="portal-ring" style="filter: url(#portal-distortion);">
                <div class="portal-ring-circle" />
            </div>

            <div class="portal-particles">
                { for (0..RING_PARTICLES).map(ring_particle) }
            </div>

            <div class="portal-frame">
                <div class="portal-shell" style={shell_style}>
                    <div class="portal-content" ref={content_ref}>
                        {content}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// SVG displacement filter applied to the ring layer, a stateless
/// function of phase: entrance and exit churn the turbulence hard, the
/// idle phase keeps a faint shimmer.
fn portal_filter(phase: Phase) -> String {
    let (base_frequency, displacement) = match phase {
        Phase::Entering | Phase::Exiting => (0.06, 50),
        Phase::Closed | Phase::Active => (0.02, 10),
    };
    format!(
        r#"<defs>
  <filter id="portal-distortion">
    <feTurbulence type="fractalNoise" baseFrequency="{base_frequency}" numOctaves="2" result="noise"/>
    <feDisplacementMap in="SourceGraphic" in2="noise" scale="{displacement}"/>
  </filter>
</defs>"#
    )
}

/// Custom properties anchoring the entrance at the click point. With no
/// origin the shell rises from below the final position instead. The
/// exit path is handled purely in CSS and deliberately does not return
/// to the origin: the close animation drifts upward at reduced scale.
fn shell_style(origin: Option<Point>, viewport: (f64, f64)) -> String {
    let (width, height) = viewport;
    match origin {
        Some(point) => format!(
            "--origin-dx: {:.1}px; --origin-dy: {:.1}px; --origin-scale: 0.1;",
            point.x - width / 2.0,
            point.y - height / 2.0
        ),
        None => "--origin-dx: 0px; --origin-dy: 120px; --origin-scale: 0.5;".to_string(),
    }
}

fn ring_particle(index: usize) -> Html {
    let angle = (index as f64) * (360.0 / RING_PARTICLES as f64);
    let radians = angle.to_radians();
    let style = format!(
        "--particle-x: {:.2}%; --particle-y: {:.2}%; animation-delay: {}ms;",
        50.0 + 42.0 * radians.cos(),
        50.0 + 42.0 * radians.sin(),
        index * 150
    );
    html! { <span class="portal-particle" style={style} /> }
}
