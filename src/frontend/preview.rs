//! Hover preview: a fixed top-center panel anticipating the section the
//! visitor is pointing at, shown before any click.
//!
//! The shell resolves the visibility predicate (`state::show_preview`)
//! and hands this component the section to display, or `None`. Cards are
//! keyed by section id so a swap fully re-mounts the incoming card and
//! its entrance animation restarts from zero.

use yew::prelude::*;

use crate::content::{self, Language, IDENTITY};
use crate::state::SectionId;

#[derive(Properties, PartialEq)]
pub struct PreviewOverlayProps {
    pub section: Option<SectionId>,
    pub language: Language,
}

/// Slide direction is fixed per section slot, not computed from hover
/// order.
fn slide_class(section: SectionId) -> &'static str {
    match section {
        SectionId::About => "slide-left",
        SectionId::Skills => "slide-top",
        SectionId::Portfolio => "slide-right",
        SectionId::Work => "slide-bottom",
        SectionId::Contact => "slide-top",
    }
}

#[function_component(PreviewOverlay)]
pub fn preview_overlay(props: &PreviewOverlayProps) -> Html {
    let Some(section) = props.section else {
        return html! {};
    };

    let nav = content::nav(section, props.language);

    html! {
        <aside class="preview-overlay" aria-hidden="true">
            <div
                key={section.as_str()}
                class={classes!("preview-card", slide_class(section))}
            >
                <div class="preview-card-head">
                    <span class="preview-card-emoji">{nav.emoji}</span>
                    <div>
                        <p class="preview-card-title">{nav.label}</p>
                        <p class="preview-card-tagline">{nav.tagline}</p>
                    </div>
                </div>
                {preview_body(section, props.language)}
            </div>
        </aside>
    }
}

fn preview_body(section: SectionId, language: Language) -> Html {
    match section {
        SectionId::About => about_preview(language),
        SectionId::Skills => skills_preview(language),
        SectionId::Portfolio => portfolio_preview(language),
        SectionId::Work => work_preview(language),
        SectionId::Contact => contact_preview(),
    }
}

fn about_preview(language: Language) -> Html {
    let about = content::about(language);
    html! {
        <div class="preview-body">
            <p class="preview-name">{IDENTITY.name}</p>
            <p class="preview-role">{about.role}</p>
            <div class="badge-row">
                { for about.badges.iter().map(|badge| html! {
                    <span class="badge">{*badge}</span>
                }) }
            </div>
        </div>
    }
}

fn skills_preview(language: Language) -> Html {
    let skills = content::skills(language);
    let top: Vec<_> = skills
        .groups
        .iter()
        .flat_map(|group| group.skills.iter())
        .take(4)
        .collect();

    html! {
        <div class="preview-body">
            { for top.into_iter().map(|skill| html! {
                <div class="skill-row">
                    <span class="skill-name">{skill.icon}{" "}{skill.name}</span>
                    <span class="skill-track">
                        <span
                            class="skill-fill"
                            style={format!("width: {}%;", skill.level)}
                        />
                    </span>
                </div>
            }) }
        </div>
    }
}

fn portfolio_preview(language: Language) -> Html {
    let portfolio = content::portfolio(language);
    html! {
        <div class="preview-body badge-row">
            { for portfolio.projects.iter().take(4).map(|project| html! {
                <span class="badge">{project.title}</span>
            }) }
        </div>
    }
}

fn work_preview(language: Language) -> Html {
    let work = content::work(language);
    html! {
        <div class="preview-body">
            { for work.jobs.iter().take(2).map(|job| html! {
                <div class="preview-job">
                    <p class="preview-job-role">{job.role}</p>
                    <p class="preview-job-meta">{job.company}{" · "}{job.period}</p>
                </div>
            }) }
        </div>
    }
}

fn contact_preview() -> Html {
    html! {
        <div class="preview-body">
            <p class="preview-contact-row">{"📧 "}{IDENTITY.email}</p>
            <p class="preview-contact-row">{"📞 "}{IDENTITY.phone}</p>
            <p class="preview-contact-row">{"📍 "}{IDENTITY.location}</p>
        </div>
    }
}
