//! Page shell: owns the interaction state (open modal, hovered preview,
//! theme, language), wires the nav cards to the portal and preview
//! overlay, and renders the hero plus the ambient layers.

mod effects;
mod modals;
mod nav;
mod portal;
mod prefs;
mod preview;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

use crate::content::{self, Language, IDENTITY};
use crate::state::{show_preview, ModalState, Point, PreviewState, SectionId};
use effects::{AnimatedBackdrop, MouseTrail, ParticleField};
use nav::{accent, NavCard};
use portal::PortalTransition;
use prefs::{
    apply_theme, apply_theme_with_transition, persist_language, persist_theme, resolve_language,
    resolve_theme, Theme,
};
use preview::PreviewOverlay;

/// How long the boot spinner stays up before the page reveals itself.
const BOOT_DELAY_MS: u32 = 2_000;

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(resolve_theme);
    let language = use_state(resolve_language);
    let loading = use_state(|| true);
    let modal = use_state(ModalState::closed);
    let preview = use_state(PreviewState::inactive);

    {
        let current = *theme;
        use_effect_with((), move |()| {
            apply_theme(current);
            || ()
        });
    }

    {
        let loading = loading.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                TimeoutFuture::new(BOOT_DELAY_MS).await;
                loading.set(false);
            });
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let on_select_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            persist_language(next);
            language.set(next);
        })
    };

    let on_hover_start = {
        let preview = preview.clone();
        Callback::from(move |section: SectionId| {
            let mut next = *preview;
            next.set(Some(section));
            preview.set(next);
        })
    };

    let on_hover_end = {
        let preview = preview.clone();
        Callback::from(move |()| {
            let mut next = *preview;
            next.set(None);
            preview.set(next);
        })
    };

    let on_open = {
        let modal = modal.clone();
        Callback::from(move |(section, origin): (SectionId, Point)| {
            let mut next = *modal;
            if next.open(section, Some(origin)) {
                modal.set(next);
            }
        })
    };

    let on_request_close = {
        let modal = modal.clone();
        Callback::from(move |()| {
            let mut next = *modal;
            if next.request_close() {
                modal.set(next);
            }
        })
    };

    let on_phase_complete = {
        let modal = modal.clone();
        Callback::from(move |()| {
            let mut next = *modal;
            next.phase_complete();
            modal.set(next);
        })
    };

    if *loading {
        return html! {
            <div class="boot-screen">
                <div class="boot-spinner">
                    <div class="boot-ring" />
                    <span class="boot-spark">{"✨"}</span>
                </div>
            </div>
        };
    }

    // One combined predicate keeps the preview and the hero swap in
    // lockstep: opening a modal suppresses both instantly.
    let previewed = show_preview(&preview, &modal);

    let shell_style = previewed.map(|section| {
        let accent = accent(section);
        format!(
            "background-color: {}; box-shadow: inset 0 0 200px 60px {}40;",
            accent.background(*theme),
            accent.glow(*theme)
        )
    });

    html! {
        <main class="page-shell" style={shell_style}>
            <AnimatedBackdrop />
            <ParticleField />

            <PreviewOverlay section={previewed} language={*language} />

            <header class="site-header">
                <div class="language-switcher" role="group" aria-label="Language">
                    { for Language::ALL.into_iter().map(|option| {
                        let onclick = {
                            let on_select_language = on_select_language.clone();
                            Callback::from(move |_| on_select_language.emit(option))
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    "language-option",
                                    (option == *language).then_some("is-active"),
                                )}
                                onclick={onclick}
                            >
                                {option.label()}
                            </button>
                        }
                    }) }
                </div>
                <button
                    type="button"
                    class="theme-toggle"
                    aria-label={(*theme).toggle_label()}
                    aria-pressed={(*theme).is_dark().to_string()}
                    onclick={on_toggle_theme}
                >
                    <span aria-hidden="true">{(*theme).icon()}</span>
                </button>
            </header>

            <section class="hero">
                <h1 class="hero-name" aria-label={IDENTITY.name}>
                    { for IDENTITY.name.chars().enumerate().map(|(index, ch)| {
                        let style = format!("animation-delay: {}ms;", index * 50);
                        html! {
                            <span class="hero-letter" style={style} aria-hidden="true">
                                { (if ch == ' ' { '\u{a0}' } else { ch }).to_string() }
                            </span>
                        }
                    }) }
                </h1>
                <div class="hero-underline" />

                <div class="hero-chips">
                    <a class="hero-chip" href={format!("mailto:{}", IDENTITY.email)}>
                        {"📧 "}{IDENTITY.email}
                    </a>
                    <a
                        class="hero-chip"
                        href={format!("tel:{}", IDENTITY.phone.replace(' ', ""))}
                    >
                        {"📞 "}{IDENTITY.phone}
                    </a>
                    <span class="hero-chip">{"📍 "}{IDENTITY.location}</span>
                </div>

                <div class="hero-orb">
                    { match previewed {
                        Some(section) => {
                            let nav = content::nav(section, *language);
                            html! {
                                <div key={section.as_str()} class="orb-face">
                                    <span class="orb-emoji">{nav.emoji}</span>
                                    <span class="orb-label">{nav.label}</span>
                                </div>
                            }
                        }
                        None => html! {
                            <div key="monogram" class="orb-face">
                                <span class="orb-emoji">{"👨‍💻"}</span>
                                <span class="orb-label">{"MA"}</span>
                            </div>
                        },
                    } }
                </div>
            </section>

            <nav class="nav-grid">
                { for SectionId::ALL.into_iter().enumerate().map(|(index, section)| html! {
                    <NavCard
                        section={section}
                        index={index}
                        theme={*theme}
                        language={*language}
                        on_hover_start={on_hover_start.clone()}
                        on_hover_end={on_hover_end.clone()}
                        on_open={on_open.clone()}
                    />
                }) }
            </nav>

            <PortalTransition
                modal={*modal}
                language={*language}
                on_phase_complete={on_phase_complete}
                on_request_close={on_request_close}
            />

            <MouseTrail />
        </main>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
