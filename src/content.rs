//! Static localized content for the five sections.
//!
//! Pure data keyed by `(SectionId, Language)`. Every getter is total:
//! a language missing a translated record falls back to the English one,
//! so callers always receive something renderable and never validate
//! payloads themselves.

use crate::state::SectionId;

/// Languages the site ships translations for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Language {
    En,
    De,
    Tr,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::En, Self::De, Self::Tr];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Tr => "tr",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            "tr" => Some(Self::Tr),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::De => "DE",
            Self::Tr => "TR",
        }
    }
}

pub struct NavContent {
    pub label: &'static str,
    pub emoji: &'static str,
    pub tagline: &'static str,
}

pub struct AboutContent {
    pub heading: &'static str,
    pub role: &'static str,
    pub paragraphs: &'static [&'static str],
    pub badges: &'static [&'static str],
    pub languages_heading: &'static str,
    pub spoken_languages: &'static [&'static str],
}

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub level: u8,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub struct SkillsContent {
    pub heading: &'static str,
    pub groups: &'static [SkillGroup],
    pub extras_heading: &'static str,
    pub extras: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

pub struct PortfolioContent {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub projects: &'static [Project],
}

pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub points: &'static [&'static str],
}

pub struct WorkContent {
    pub heading: &'static str,
    pub jobs: &'static [Job],
}

pub struct ContactContent {
    pub heading: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub message_label: &'static str,
    pub send_label: &'static str,
    pub sending_label: &'static str,
    pub sent_heading: &'static str,
    pub sent_body: &'static str,
}

/// Identity details shown in the hero and contact sections. Not
/// translated.
pub struct Identity {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub const IDENTITY: Identity = Identity {
    name: "Majid Aliyev",
    email: "alyvmecid@gmail.com",
    phone: "+49 157 37980174",
    location: "Freiburg, Germany",
};

pub fn nav(section: SectionId, language: Language) -> &'static NavContent {
    let set: &[NavContent; 5] = match language {
        Language::En => &NAV_EN,
        Language::De => &NAV_DE,
        Language::Tr => &NAV_TR,
    };
    &set[section_index(section)]
}

pub fn about(language: Language) -> &'static AboutContent {
    match language {
        Language::En | Language::Tr => &ABOUT_EN,
        Language::De => &ABOUT_DE,
    }
}

pub fn skills(language: Language) -> &'static SkillsContent {
    match language {
        Language::En | Language::Tr => &SKILLS_EN,
        Language::De => &SKILLS_DE,
    }
}

pub fn portfolio(language: Language) -> &'static PortfolioContent {
    match language {
        Language::En | Language::Tr => &PORTFOLIO_EN,
        Language::De => &PORTFOLIO_DE,
    }
}

pub fn work(language: Language) -> &'static WorkContent {
    match language {
        Language::En | Language::Tr => &WORK_EN,
        Language::De => &WORK_DE,
    }
}

pub fn contact(language: Language) -> &'static ContactContent {
    match language {
        Language::En => &CONTACT_EN,
        Language::De => &CONTACT_DE,
        Language::Tr => &CONTACT_TR,
    }
}

fn section_index(section: SectionId) -> usize {
    match section {
        SectionId::About => 0,
        SectionId::Skills => 1,
        SectionId::Portfolio => 2,
        SectionId::Work => 3,
        SectionId::Contact => 4,
    }
}

const NAV_EN: [NavContent; 5] = [
    NavContent {
        label: "About",
        emoji: "👨‍💻",
        tagline: "Who I am and what drives me",
    },
    NavContent {
        label: "Skills",
        emoji: "🧠",
        tagline: "Design, development and marketing",
    },
    NavContent {
        label: "Portfolio",
        emoji: "🎨",
        tagline: "Selected projects and builds",
    },
    NavContent {
        label: "Work",
        emoji: "💼",
        tagline: "Where I have worked so far",
    },
    NavContent {
        label: "Contact",
        emoji: "📬",
        tagline: "Say hello or start a project",
    },
];

const NAV_DE: [NavContent; 5] = [
    NavContent {
        label: "Über mich",
        emoji: "👨‍💻",
        tagline: "Wer ich bin und was mich antreibt",
    },
    NavContent {
        label: "Fähigkeiten",
        emoji: "🧠",
        tagline: "Design, Entwicklung und Marketing",
    },
    NavContent {
        label: "Portfolio",
        emoji: "🎨",
        tagline: "Ausgewählte Projekte",
    },
    NavContent {
        label: "Berufserfahrung",
        emoji: "💼",
        tagline: "Meine bisherigen Stationen",
    },
    NavContent {
        label: "Kontakt",
        emoji: "📬",
        tagline: "Schreib mir eine Nachricht",
    },
];

const NAV_TR: [NavContent; 5] = [
    NavContent {
        label: "Hakkımda",
        emoji: "👨‍💻",
        tagline: "Ben kimim, beni ne motive ediyor",
    },
    NavContent {
        label: "Yetenekler",
        emoji: "🧠",
        tagline: "Tasarım, geliştirme ve pazarlama",
    },
    NavContent {
        label: "Portfolyo",
        emoji: "🎨",
        tagline: "Seçilmiş projeler",
    },
    NavContent {
        label: "Deneyim",
        emoji: "💼",
        tagline: "Bugüne kadarki çalışmalarım",
    },
    NavContent {
        label: "İletişim",
        emoji: "📬",
        tagline: "Merhaba deyin veya proje başlatın",
    },
];

const ABOUT_EN: AboutContent = AboutContent {
    heading: "About Me",
    role: "Web Designer & Marketing Specialist",
    paragraphs: &[
        "I build websites and brands from Freiburg, combining hands-on web \
         development with social media marketing and e-commerce work.",
        "Starting April 2025 I will study Media Design at IU Internationale \
         Hochschule in a dual program, pairing technical knowledge with \
         artistic design principles.",
        "When I am not coding or designing, I am usually creating content, \
         experimenting with new tools, or planning the next campaign.",
    ],
    badges: &["Web Design", "UX/UI", "Branding", "E-Commerce", "Content"],
    languages_heading: "Languages",
    spoken_languages: &["Azerbaijani", "Turkish", "German", "English", "Russian"],
};

const ABOUT_DE: AboutContent = AboutContent {
    heading: "Über mich",
    role: "Webdesigner & Marketing-Spezialist",
    paragraphs: &[
        "Ich baue Websites und Marken aus Freiburg und verbinde praktische \
         Webentwicklung mit Social-Media-Marketing und E-Commerce.",
        "Ab April 2025 studiere ich Mediendesign an der IU Internationale \
         Hochschule im dualen Programm und verbinde technisches Wissen mit \
         gestalterischen Prinzipien.",
        "Wenn ich nicht gerade code oder designe, erstelle ich Content, \
         probiere neue Tools aus oder plane die nächste Kampagne.",
    ],
    badges: &["Webdesign", "UX/UI", "Branding", "E-Commerce", "Content"],
    languages_heading: "Sprachen",
    spoken_languages: &["Aserbaidschanisch", "Türkisch", "Deutsch", "Englisch", "Russisch"],
};

const SKILLS_EN: SkillsContent = SkillsContent {
    heading: "My Skills",
    groups: &[
        SkillGroup {
            title: "Design",
            skills: &[
                Skill { name: "Adobe Photoshop", icon: "📸", level: 80 },
                Skill { name: "Adobe Illustrator", icon: "✏️", level: 75 },
                Skill { name: "Figma", icon: "🖌️", level: 82 },
            ],
        },
        SkillGroup {
            title: "Development",
            skills: &[
                Skill { name: "HTML / CSS / JS", icon: "🌐", level: 90 },
                Skill { name: "Responsive Design", icon: "📐", level: 88 },
                Skill { name: "Shopify", icon: "🛒", level: 90 },
            ],
        },
        SkillGroup {
            title: "Marketing",
            skills: &[
                Skill { name: "Social Media Management", icon: "📱", level: 92 },
                Skill { name: "Content Creation", icon: "📝", level: 90 },
                Skill { name: "Branding", icon: "🏷️", level: 88 },
                Skill { name: "Meta Ads", icon: "📈", level: 85 },
            ],
        },
    ],
    extras_heading: "Additional Skills",
    extras: &[
        "SEO Basics",
        "Copywriting",
        "Photography",
        "Video Editing",
        "Community Management",
    ],
};

const SKILLS_DE: SkillsContent = SkillsContent {
    heading: "Meine Fähigkeiten",
    groups: SKILLS_EN.groups,
    extras_heading: "Weitere Fähigkeiten",
    extras: SKILLS_EN.extras,
};

const PORTFOLIO_EN: PortfolioContent = PortfolioContent {
    heading: "My Portfolio",
    subtitle: "A selection of web, mobile and design work",
    projects: &[
        Project {
            title: "E-commerce Website",
            summary: "A fully responsive e-commerce platform with cart functionality",
            tags: &["Web", "Shopify"],
        },
        Project {
            title: "Portfolio Website",
            summary: "A creative portfolio website for a photographer",
            tags: &["Web", "Design"],
        },
        Project {
            title: "Social Media Dashboard",
            summary: "An analytics dashboard for social media management",
            tags: &["Web", "Marketing"],
        },
        Project {
            title: "Task Management App",
            summary: "A productivity app for managing tasks and projects",
            tags: &["Mobile"],
        },
        Project {
            title: "Practice Website",
            summary: "Website and IT setup for a medical practice in Schliengen",
            tags: &["Web", "Client"],
        },
        Project {
            title: "Brand Identity Kit",
            summary: "Logo, colors and templates for a small e-commerce brand",
            tags: &["Design", "Branding"],
        },
    ],
};

const PORTFOLIO_DE: PortfolioContent = PortfolioContent {
    heading: "Mein Portfolio",
    subtitle: "Eine Auswahl aus Web-, Mobile- und Designarbeiten",
    projects: PORTFOLIO_EN.projects,
};

const WORK_EN: WorkContent = WorkContent {
    heading: "Work Experience",
    jobs: &[
        Job {
            role: "Web Developer & IT Specialist",
            company: "Frauenarztpraxis Huseynova",
            period: "2022 – Present",
            location: "Schliengen, Germany",
            points: &[
                "Built and maintained the practice website from scratch using HTML, CSS and JavaScript",
                "Managed databases and provided comprehensive IT support",
                "Developed user-friendly designs based on customer needs",
            ],
        },
        Job {
            role: "Co-founder & Marketing Manager",
            company: "AZERTUFF LTD",
            period: "2021 – Present",
            location: "Freiburg, Germany / Baku, Azerbaijan",
            points: &[
                "Managed social media presence and developed branding strategies",
                "Administered the Shopify e-commerce platform",
                "Designed and executed targeted Meta advertising campaigns",
            ],
        },
        Job {
            role: "Media Design Student (Upcoming)",
            company: "IU Internationale Hochschule",
            period: "Starting April 2025",
            location: "Freiburg, Germany",
            points: &[
                "Dual study program in Media Design",
                "Focus on web design, app design and UX/UI design",
            ],
        },
    ],
};

const WORK_DE: WorkContent = WorkContent {
    heading: "Berufserfahrung",
    jobs: WORK_EN.jobs,
};

const CONTACT_EN: ContactContent = ContactContent {
    heading: "Get in Touch",
    name_label: "Name",
    email_label: "Email",
    message_label: "Message",
    send_label: "Send Message",
    sending_label: "Sending…",
    sent_heading: "Message sent!",
    sent_body: "Thanks for reaching out. I will get back to you soon.",
};

const CONTACT_DE: ContactContent = ContactContent {
    heading: "Kontakt aufnehmen",
    name_label: "Name",
    email_label: "E-Mail",
    message_label: "Nachricht",
    send_label: "Nachricht senden",
    sending_label: "Wird gesendet…",
    sent_heading: "Nachricht gesendet!",
    sent_body: "Danke für deine Nachricht. Ich melde mich bald bei dir.",
};

const CONTACT_TR: ContactContent = ContactContent {
    heading: "İletişime Geç",
    name_label: "İsim",
    email_label: "E-posta",
    message_label: "Mesaj",
    send_label: "Mesaj Gönder",
    sending_label: "Gönderiliyor…",
    sent_heading: "Mesaj gönderildi!",
    sent_body: "Ulaştığın için teşekkürler. En kısa sürede dönüş yapacağım.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_and_language_yields_renderable_content() {
        for language in Language::ALL {
            for section in SectionId::ALL {
                let nav = nav(section, language);
                assert!(!nav.label.is_empty());
                assert!(!nav.emoji.is_empty());
                assert!(!nav.tagline.is_empty());
            }
            assert!(!about(language).heading.is_empty());
            assert!(!about(language).paragraphs.is_empty());
            assert!(!skills(language).groups.is_empty());
            assert!(!portfolio(language).projects.is_empty());
            assert!(!work(language).jobs.is_empty());
            assert!(!contact(language).send_label.is_empty());
        }
    }

    #[test]
    fn untranslated_bodies_fall_back_to_english() {
        // Turkish ships nav labels and contact strings but not the long
        // section bodies, which resolve to the English records.
        assert_eq!(
            about(Language::Tr).heading,
            about(Language::En).heading
        );
        assert!(std::ptr::eq(work(Language::Tr), work(Language::En)));
        assert_ne!(
            contact(Language::Tr).send_label,
            contact(Language::En).send_label
        );
    }

    #[test]
    fn language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_str(language.as_str()), Some(language));
        }
        assert_eq!(Language::from_str("fr"), None);
    }

    #[test]
    fn skill_levels_are_percentages() {
        for group in skills(Language::En).groups {
            for skill in group.skills {
                assert!(skill.level <= 100);
            }
        }
    }
}
