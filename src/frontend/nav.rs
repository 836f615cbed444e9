//! Navigation cards: one hoverable, clickable tile per section.

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{self, Language};
use crate::frontend::prefs::Theme;
use crate::state::{Point, SectionId};

/// Accent colors a section tints the page and its card with. Each pair
/// carries a light and a dark variant so the tint follows the theme.
#[derive(Clone, Copy, PartialEq)]
pub struct Accent {
    bg: &'static str,
    dark_bg: &'static str,
    glow: &'static str,
    dark_glow: &'static str,
}

impl Accent {
    pub fn background(&self, theme: Theme) -> &'static str {
        if theme.is_dark() {
            self.dark_bg
        } else {
            self.bg
        }
    }

    pub fn glow(&self, theme: Theme) -> &'static str {
        if theme.is_dark() {
            self.dark_glow
        } else {
            self.glow
        }
    }
}

pub fn accent(section: SectionId) -> Accent {
    match section {
        SectionId::About => Accent {
            bg: "#FF5A5F",
            dark_bg: "#8B3E40",
            glow: "#FF8A8F",
            dark_glow: "#FF5A5F",
        },
        SectionId::Skills => Accent {
            bg: "#56CCF2",
            dark_bg: "#2D7A9E",
            glow: "#7FDFFF",
            dark_glow: "#56CCF2",
        },
        SectionId::Portfolio => Accent {
            bg: "#BB6BD9",
            dark_bg: "#6A3B7D",
            glow: "#D48EF6",
            dark_glow: "#BB6BD9",
        },
        SectionId::Work => Accent {
            bg: "#F2994A",
            dark_bg: "#8F5B2C",
            glow: "#FFBB7D",
            dark_glow: "#F2994A",
        },
        SectionId::Contact => Accent {
            bg: "#6FCF97",
            dark_bg: "#3E7A59",
            glow: "#A0EBBE",
            dark_glow: "#6FCF97",
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavCardProps {
    pub section: SectionId,
    pub index: usize,
    pub theme: Theme,
    pub language: Language,
    pub on_hover_start: Callback<SectionId>,
    pub on_hover_end: Callback<()>,
    pub on_open: Callback<(SectionId, Point)>,
}

#[function_component(NavCard)]
pub fn nav_card(props: &NavCardProps) -> Html {
    let section = props.section;
    let nav = content::nav(section, props.language);
    let accent = accent(section);

    let onmouseenter = {
        let on_hover_start = props.on_hover_start.clone();
        Callback::from(move |_: MouseEvent| on_hover_start.emit(section))
    };

    let onmouseleave = {
        let on_hover_end = props.on_hover_end.clone();
        Callback::from(move |_: MouseEvent| on_hover_end.emit(()))
    };

    // The click coordinates anchor the portal's entrance animation.
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |event: MouseEvent| {
            let origin = Point {
                x: f64::from(event.client_x()),
                y: f64::from(event.client_y()),
            };
            on_open.emit((section, origin));
        })
    };

    let style = format!(
        "--card-accent: {}; --card-glow: {}; animation-delay: {}ms;",
        accent.background(props.theme),
        accent.glow(props.theme),
        props.index * 100
    );

    html! {
        <button
            type="button"
            class="nav-card"
            data-section={section.as_str()}
            style={style}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
            onclick={onclick}
        >
            <span class="nav-card-emoji" aria-hidden="true">{nav.emoji}</span>
            <span class="nav-card-label">{nav.label}</span>
            <span class="nav-card-tagline">{nav.tagline}</span>
        </button>
    }
}
