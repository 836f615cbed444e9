//! The five section panels rendered inside the portal once it reaches
//! its active phase. One dispatch point replaces per-section modal
//! components; the close button and scroll frame live here once.
//!
//! Panels are unmounted entirely when the portal closes, so any state a
//! panel holds (the contact form draft in particular) cannot leak into
//! the next opening.

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::content::{self, Language, IDENTITY};
use crate::state::{SectionId, SUBMIT_DELAY_MS};

#[derive(Properties, PartialEq)]
pub struct SectionModalProps {
    pub section: SectionId,
    pub language: Language,
    pub on_request_close: Callback<()>,
}

#[function_component(SectionModal)]
pub fn section_modal(props: &SectionModalProps) -> Html {
    let body = match props.section {
        SectionId::About => about_body(props.language),
        SectionId::Skills => skills_body(props.language),
        SectionId::Portfolio => portfolio_body(props.language),
        SectionId::Work => work_body(props.language),
        SectionId::Contact => html! {
            <ContactPanel language={props.language} />
        },
    };

    let onclick = {
        let on_request_close = props.on_request_close.clone();
        Callback::from(move |_| on_request_close.emit(()))
    };

    html! {
        <div class="modal-panel" data-section={props.section.as_str()}>
            <button
                type="button"
                class="modal-close"
                aria-label="Close"
                onclick={onclick}
            >
                {"✕"}
            </button>
            {body}
        </div>
    }
}

fn about_body(language: Language) -> Html {
    let about = content::about(language);
    html! {
        <section class="modal-section">
            <h2 class="modal-heading">{about.heading}</h2>
            <p class="modal-subheading">{about.role}</p>
            { for about.paragraphs.iter().map(|paragraph| html! {
                <p class="modal-paragraph">{*paragraph}</p>
            }) }
            <div class="badge-row">
                { for about.badges.iter().map(|badge| html! {
                    <span class="badge">{*badge}</span>
                }) }
            </div>
            <h3 class="modal-subheading">{about.languages_heading}</h3>
            <div class="badge-row">
                { for about.spoken_languages.iter().map(|lang| html! {
                    <span class="badge badge-muted">{*lang}</span>
                }) }
            </div>
        </section>
    }
}

fn skills_body(language: Language) -> Html {
    let skills = content::skills(language);
    html! {
        <section class="modal-section">
            <h2 class="modal-heading">{skills.heading}</h2>
            <div class="skill-groups">
                { for skills.groups.iter().map(|group| html! {
                    <div class="skill-group">
                        <h3 class="modal-subheading">{group.title}</h3>
                        { for group.skills.iter().map(|skill| html! {
                            <div class="skill-row">
                                <span class="skill-name">
                                    {skill.icon}{" "}{skill.name}
                                </span>
                                <span class="skill-track">
                                    <span
                                        class="skill-fill"
                                        style={format!("width: {}%;", skill.level)}
                                    />
                                </span>
                                <span class="skill-level">
                                    {format!("{}%", skill.level)}
                                </span>
                            </div>
                        }) }
                    </div>
                }) }
            </div>
            <h3 class="modal-subheading">{skills.extras_heading}</h3>
            <div class="badge-row">
                { for skills.extras.iter().map(|extra| html! {
                    <span class="badge badge-muted">{*extra}</span>
                }) }
            </div>
        </section>
    }
}

fn portfolio_body(language: Language) -> Html {
    let portfolio = content::portfolio(language);
    html! {
        <section class="modal-section">
            <h2 class="modal-heading">{portfolio.heading}</h2>
            <p class="modal-subheading">{portfolio.subtitle}</p>
            <div class="project-grid">
                { for portfolio.projects.iter().map(|project| html! {
                    <article class="project-card">
                        <h3 class="project-title">{project.title}</h3>
                        <p class="project-summary">{project.summary}</p>
                        <div class="badge-row">
                            { for project.tags.iter().map(|tag| html! {
                                <span class="badge badge-muted">{*tag}</span>
                            }) }
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}

fn work_body(language: Language) -> Html {
    let work = content::work(language);
    html! {
        <section class="modal-section">
            <h2 class="modal-heading">{work.heading}</h2>
            <div class="job-list">
                { for work.jobs.iter().map(|job| html! {
                    <article class="job-entry">
                        <h3 class="job-role">{job.role}</h3>
                        <p class="job-meta">
                            {job.company}{" · "}{job.period}{" · "}{job.location}
                        </p>
                        <ul class="job-points">
                            { for job.points.iter().map(|point| html! {
                                <li>{*point}</li>
                            }) }
                        </ul>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[derive(Clone, PartialEq, Default)]
struct ContactDraft {
    name: String,
    email: String,
    message: String,
}

#[derive(Properties, PartialEq)]
struct ContactPanelProps {
    language: Language,
}

/// Contact form with a simulated submission: there is no backend, so
/// "sending" is a fixed delay before the success panel appears and the
/// draft is cleared.
#[function_component(ContactPanel)]
fn contact_panel(props: &ContactPanelProps) -> Html {
    let contact = content::contact(props.language);
    let draft = use_state(ContactDraft::default);
    let submitting = use_state(|| false);
    let submitted = use_state(|| false);
    // Holding the handle here cancels the fake submission if the panel
    // unmounts mid-flight.
    let submit_timer = use_mut_ref(|| None::<Timeout>);

    let on_name = field_setter(&draft, |draft, value| draft.name = value);
    let on_email = field_setter(&draft, |draft, value| draft.email = value);

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_unchecked_into::<HtmlTextAreaElement>()
                .value();
            let mut next = (*draft).clone();
            next.message = value;
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        let submit_timer = submit_timer.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let draft = draft.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            *submit_timer.borrow_mut() = Some(Timeout::new(SUBMIT_DELAY_MS, move || {
                draft.set(ContactDraft::default());
                submitting.set(false);
                submitted.set(true);
            }));
        })
    };

    if *submitted {
        return html! {
            <section class="modal-section contact-sent">
                <h2 class="modal-heading">{contact.sent_heading}</h2>
                <p class="modal-paragraph">{contact.sent_body}</p>
            </section>
        };
    }

    html! {
        <section class="modal-section">
            <h2 class="modal-heading">{contact.heading}</h2>
            <div class="contact-details">
                <p class="preview-contact-row">{"📧 "}{IDENTITY.email}</p>
                <p class="preview-contact-row">{"📞 "}{IDENTITY.phone}</p>
                <p class="preview-contact-row">{"📍 "}{IDENTITY.location}</p>
            </div>
            <form class="contact-form" onsubmit={onsubmit}>
                <label class="contact-field">
                    {contact.name_label}
                    <input
                        type="text"
                        name="name"
                        value={draft.name.clone()}
                        oninput={on_name}
                        required=true
                    />
                </label>
                <label class="contact-field">
                    {contact.email_label}
                    <input
                        type="email"
                        name="email"
                        value={draft.email.clone()}
                        oninput={on_email}
                        required=true
                    />
                </label>
                <label class="contact-field">
                    {contact.message_label}
                    <textarea
                        name="message"
                        rows="5"
                        value={draft.message.clone()}
                        oninput={on_message}
                        required=true
                    />
                </label>
                <button type="submit" class="contact-submit" disabled={*submitting}>
                    { if *submitting { contact.sending_label } else { contact.send_label } }
                </button>
            </form>
        </section>
    }
}

fn field_setter(
    draft: &UseStateHandle<ContactDraft>,
    apply: impl Fn(&mut ContactDraft, String) + 'static,
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |event: InputEvent| {
        let value = event.target_unchecked_into::<HtmlInputElement>().value();
        let mut next = (*draft).clone();
        apply(&mut next, value);
        draft.set(next);
    })
}
