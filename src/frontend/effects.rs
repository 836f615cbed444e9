//! Decorative ambient layers: the animated page backdrop, a field of
//! slowly drifting particles, and the mouse trail. None of these touch
//! the interaction state; removing them changes nothing functional.

use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

const TRAIL_SPAWN_GAP_MS: f64 = 40.0;
const TRAIL_LIFESPAN_MS: f64 = 700.0;
const TRAIL_PRUNE_INTERVAL_MS: u32 = 120;
const FIELD_PARTICLES: u64 = 18;

/// Full-page gradient and grid backdrop, behind everything else.
#[function_component(AnimatedBackdrop)]
pub fn animated_backdrop() -> Html {
    html! {
        <div class="page-backdrop" aria-hidden="true">
            <svg class="backdrop-grid" xmlns="http://www.w3.org/2000/svg">
                <defs>
                    <pattern id="backdrop-grid-cell" width="80" height="80" patternUnits="userSpaceOnUse">
                        <path d="M 80 0 L 0 0 0 80" fill="none" stroke="currentColor" stroke-width="1" />
                    </pattern>
                </defs>
                <rect width="100%" height="100%" fill="url(#backdrop-grid-cell)" />
            </svg>
            <div class="backdrop-glow" />
        </div>
    }
}

/// Floating particles scattered deterministically from their index, so
/// the field is stable across re-renders without any stored state.
#[function_component(ParticleField)]
pub fn particle_field() -> Html {
    html! {
        <div class="particle-field" aria-hidden="true">
            { for (0..FIELD_PARTICLES).map(|index| {
                let style = format!(
                    "left: {:.1}%; top: {:.1}%; width: {size}px; height: {size}px; \
                     animation-duration: {:.1}s; animation-delay: {:.1}s;",
                    scatter(index, 1) * 100.0,
                    scatter(index, 2) * 100.0,
                    6.0 + scatter(index, 3) * 10.0,
                    scatter(index, 4) * 8.0,
                    size = 3.0 + scatter(index, 0) * 5.0,
                );
                html! { <span class="field-particle" style={style} /> }
            }) }
        </div>
    }
}

/// Cheap hash-to-unit-interval for particle placement.
fn scatter(index: u64, salt: u64) -> f64 {
    let mut x = index
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(salt.wrapping_mul(1_442_695_040_888_963_407));
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    (x % 10_000) as f64 / 10_000.0
}

#[derive(Clone, PartialEq)]
struct TrailDot {
    id: u64,
    x: f64,
    y: f64,
    size: f64,
    born_ms: f64,
}

enum TrailAction {
    Spawn(TrailDot),
    Prune { now_ms: f64 },
}

#[derive(PartialEq, Default)]
struct Trail {
    dots: Vec<TrailDot>,
}

impl Reducible for Trail {
    type Action = TrailAction;

    fn reduce(self: std::rc::Rc<Self>, action: TrailAction) -> std::rc::Rc<Self> {
        match action {
            TrailAction::Spawn(dot) => {
                let mut dots = self.dots.clone();
                dots.push(dot);
                Self { dots }.into()
            }
            TrailAction::Prune { now_ms } => {
                if self
                    .dots
                    .iter()
                    .all(|dot| now_ms - dot.born_ms <= TRAIL_LIFESPAN_MS)
                {
                    return self;
                }
                let dots = self
                    .dots
                    .iter()
                    .filter(|dot| now_ms - dot.born_ms <= TRAIL_LIFESPAN_MS)
                    .cloned()
                    .collect();
                Self { dots }.into()
            }
        }
    }
}

/// Dots trailing the pointer. A window `mousemove` listener spawns
/// throttled dots; an interval prunes expired ones. Both handles are
/// dropped on unmount, detaching the listener and stopping the timer.
#[function_component(MouseTrail)]
pub fn mouse_trail() -> Html {
    let trail = use_reducer(Trail::default);
    let next_id = use_mut_ref(|| 0_u64);
    let last_spawn_ms = use_mut_ref(|| 0.0_f64);

    use_effect_with((), {
        let trail = trail.dispatcher();
        move |()| {
            let spawn = {
                let trail = trail.clone();
                window().map(|w| {
                    EventListener::new(&w, "mousemove", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let now = js_sys::Date::now();
                        if now - *last_spawn_ms.borrow() < TRAIL_SPAWN_GAP_MS {
                            return;
                        }
                        *last_spawn_ms.borrow_mut() = now;

                        let id = *next_id.borrow();
                        *next_id.borrow_mut() = id + 1;

                        trail.dispatch(TrailAction::Spawn(TrailDot {
                            id,
                            x: f64::from(event.client_x()),
                            y: f64::from(event.client_y()),
                            size: 4.0 + scatter(id, 7) * 6.0,
                            born_ms: now,
                        }));
                    })
                })
            };

            let prune = Interval::new(TRAIL_PRUNE_INTERVAL_MS, move || {
                trail.dispatch(TrailAction::Prune {
                    now_ms: js_sys::Date::now(),
                });
            });

            move || {
                drop(spawn);
                drop(prune);
            }
        }
    });

    html! {
        <div class="mouse-trail" aria-hidden="true">
            { for trail.dots.iter().map(|dot| {
                let style = format!(
                    "left: {:.1}px; top: {:.1}px; width: {size:.1}px; height: {size:.1}px;",
                    dot.x,
                    dot.y,
                    size = dot.size,
                );
                html! { <span key={dot.id.to_string()} class="trail-dot" style={style} /> }
            }) }
        </div>
    }
}
