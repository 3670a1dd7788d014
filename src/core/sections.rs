//! One pure function per page section.

use crate::config::toml_config::SiteConfig;
use crate::core::contact::{ContactField, ContactForm, Notification, NotificationKind};
use crate::core::html::{el, markdown, Element, Node};
use crate::core::radar::RadarChart;
use crate::domain::model::{Education, ExperienceEntry, Profile, Project, SkillCategories};

pub const RESUME_ROUTE: &str = "/resume.pdf";
pub const CONTACT_ROUTE: &str = "/contact";
/// File name the resume is downloaded as, and written as by a static render.
pub const RESUME_FILE: &str = "resume.pdf";

/// Where in-page actions point.
///
/// `Served` targets the HTTP routes. `Static` targets only files written next
/// to `index.html` or external URLs, so the page works without the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    #[default]
    Served,
    Static,
}

impl LinkMode {
    pub fn resume_href(self) -> &'static str {
        match self {
            LinkMode::Served => RESUME_ROUTE,
            LinkMode::Static => RESUME_FILE,
        }
    }

    pub fn project_href(self, index: usize, project: &Project) -> String {
        match self {
            LinkMode::Served => project_route(index),
            LinkMode::Static => project.repository.clone(),
        }
    }

    /// Static pages hand the form to the visitor's mail client.
    pub fn contact_action(self, profile: &Profile) -> String {
        match self {
            LinkMode::Served => CONTACT_ROUTE.to_string(),
            LinkMode::Static => profile.mailto(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// Render order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Route bound to a project by its position in the content.
pub fn project_route(index: usize) -> String {
    format!("/projects/{}", index)
}

fn section(id: SectionId, padding: &str, background: &str) -> Element {
    el("section")
        .id(id.anchor())
        .class(padding)
        .class(background)
}

fn heading(title: &str) -> Element {
    el("h2")
        .class("text-h4 text-primary text-center q-mb-lg")
        .text(title)
}

fn card() -> Element {
    el("div").class("card w-full")
}

fn badge(label: &str, extra: &str) -> Element {
    el("span").class("badge q-ma-xs").class(extra).text(label)
}

fn external_link(label: &str, href: String) -> Element {
    el("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(label)
}

pub fn header(profile: &Profile) -> Node {
    let nav = el("nav").class("row").children(SectionId::ALL.iter().map(|id| {
        el("a")
            .class("text-white q-mx-md")
            .attr("href", id.href())
            .text(id.label())
    }));

    el("header")
        .class("bg-primary text-white")
        .child(
            el("div")
                .class("row w-full items-center justify-between")
                .child(
                    el("span")
                        .class("text-h6 q-ml-md")
                        .text(format!("{} | {}", profile.name, profile.title)),
                )
                .child(nav),
        )
        .into()
}

pub fn home(profile: &Profile, links: LinkMode) -> Node {
    section(SectionId::Home, "py-20", "flex items-center justify-center bg-blue-50")
        .child(
            el("div")
                .class("column max-w-4xl items-center text-center")
                .child(
                    el("img")
                        .class("w-48 h-48 rounded-full mb-4 shadow-lg")
                        .attr("src", profile.photo.as_str())
                        .attr("alt", profile.name.as_str()),
                )
                .child(
                    el("h1")
                        .class("text-h3 text-weight-bold text-primary")
                        .text(profile.name.as_str()),
                )
                .child(
                    el("p")
                        .class("text-h5 text-blue-8 mb-4")
                        .text(profile.title.as_str()),
                )
                .child(
                    el("div")
                        .class("text-body1 max-w-2xl")
                        .child(markdown(&profile.bio)),
                )
                .child(
                    el("div")
                        .class("row q-mt-md")
                        .child(
                            el("a")
                                .class("button bg-primary")
                                .attr("href", links.resume_href())
                                .attr("download", RESUME_FILE)
                                .text("View Resume"),
                        )
                        .child(
                            el("a")
                                .class("button bg-secondary q-ml-sm")
                                .attr("href", SectionId::Contact.href())
                                .text("Contact Me"),
                        ),
                ),
        )
        .into()
}

fn education_card(edu: &Education) -> Element {
    card()
        .class("q-mb-md")
        .child(el("div").class("text-weight-bold").text(edu.degree.as_str()))
        .child(el("div").text(format!("{} | {}", edu.institution, edu.year)))
}

pub fn about(profile: &Profile) -> Node {
    let education = el("div")
        .class("column w-1/2")
        .child(
            el("h3")
                .class("text-h5 text-secondary q-mb-md")
                .text("Education"),
        )
        .children(profile.education.iter().map(education_card));

    let connect = el("div")
        .class("column w-1/2")
        .child(
            el("h3")
                .class("text-h5 text-secondary q-mb-md")
                .text("Connect With Me"),
        )
        .child(
            card()
                .child(
                    el("div")
                        .class("row items-center q-mb-sm")
                        .child(el("span").class("icon text-primary q-mr-sm").text("email"))
                        .child(
                            el("a")
                                .attr("href", profile.mailto())
                                .text(profile.email.as_str()),
                        ),
                )
                .child(
                    el("div")
                        .class("row items-center q-mb-sm")
                        .child(el("span").class("icon text-primary q-mr-sm").text("code"))
                        .child(external_link("GitHub", profile.github_url())),
                )
                .child(
                    el("div")
                        .class("row items-center")
                        .child(el("span").class("icon text-primary q-mr-sm").text("work"))
                        .child(external_link("LinkedIn", profile.linkedin_url())),
                ),
        );

    section(SectionId::About, "py-16", "bg-white")
        .child(
            el("div")
                .class("column max-w-4xl mx-auto")
                .child(heading("About Me"))
                .child(
                    el("div")
                        .class("row items-start q-col-gutter-md")
                        .child(education)
                        .child(connect),
                ),
        )
        .into()
}

pub fn skills(categories: &SkillCategories, chart: &RadarChart) -> Node {
    let category_cards = el("div").class("column w-1/2").children(
        categories.iter().map(|(category, names)| {
            card()
                .class("q-mb-md")
                .child(
                    el("h4")
                        .class("text-h6 text-primary q-mb-sm")
                        .text(category.as_str()),
                )
                .child(
                    el("div")
                        .class("row flex-wrap")
                        .children(names.iter().map(|skill| badge(skill, "text-body2"))),
                )
        }),
    );

    let chart_card = el("div").class("column w-1/2").child(
        card().child(
            el("div")
                .class("w-full h-80")
                .attr("data-chart", "/api/skills/radar")
                .child(Node::Raw(chart.to_svg())),
        ),
    );

    section(SectionId::Skills, "py-16", "bg-blue-50")
        .child(
            el("div")
                .class("column max-w-4xl mx-auto")
                .child(heading("Skills & Expertise"))
                .child(
                    el("div")
                        .class("row q-col-gutter-md")
                        .child(category_cards)
                        .child(chart_card),
                ),
        )
        .into()
}

fn project_card(index: usize, project: &Project, links: LinkMode) -> Element {
    card()
        .attr("data-project-index", index.to_string())
        .child(
            el("img")
                .class("w-full h-48 object-cover")
                .attr("src", project.image.as_str())
                .attr("alt", project.title.as_str()),
        )
        .child(
            el("div")
                .class("card-section")
                .child(
                    el("h4")
                        .class("text-h6 text-primary")
                        .text(project.title.as_str()),
                )
                .child(
                    el("div")
                        .class("text-body2 q-my-sm")
                        .child(markdown(&project.description)),
                )
                .child(
                    el("div").class("row flex-wrap q-mt-sm").children(
                        project
                            .technologies
                            .iter()
                            .map(|tech| badge(tech, "bg-secondary text-white")),
                    ),
                )
                .child(
                    el("div").class("row justify-end q-mt-md").child(
                        el("a")
                            .class("button bg-primary")
                            .attr("href", links.project_href(index, project))
                            .attr("target", "_blank")
                            .attr("rel", "noopener noreferrer")
                            .text("View Project"),
                    ),
                ),
        )
}

pub fn projects(projects: &[Project], links: LinkMode) -> Node {
    section(SectionId::Projects, "py-16", "bg-white")
        .child(
            el("div")
                .class("column max-w-4xl mx-auto")
                .child(heading("ML Projects"))
                .child(
                    el("div")
                        .class("grid grid-cols-2 q-col-gutter-md")
                        .children(
                            projects
                                .iter()
                                .enumerate()
                                .map(|(index, project)| project_card(index, project, links)),
                        ),
                ),
        )
        .into()
}

fn experience_card(entry: &ExperienceEntry) -> Element {
    card().class("q-mb-lg").child(
        el("div")
            .class("row items-start")
            .child(
                el("div").class("column w-1/6").child(
                    el("span")
                        .class("text-weight-bold text-primary")
                        .text(entry.period.as_str()),
                ),
            )
            .child(
                el("div")
                    .class("column w-5/6")
                    .child(
                        el("h4")
                            .class("text-h6 text-weight-bold")
                            .text(entry.role.as_str()),
                    )
                    .child(
                        el("div")
                            .class("text-subtitle1 text-secondary")
                            .text(entry.company.as_str()),
                    )
                    .child(
                        el("div")
                            .class("q-my-sm")
                            .child(markdown(&entry.description)),
                    )
                    .child(
                        el("div")
                            .class("text-weight-bold q-mt-sm")
                            .text("Key Achievements:"),
                    )
                    .child(
                        el("ul").children(
                            entry
                                .achievements
                                .iter()
                                .map(|a| el("li").text(a.as_str())),
                        ),
                    ),
            ),
    )
}

pub fn experience(entries: &[ExperienceEntry]) -> Node {
    section(SectionId::Experience, "py-16", "bg-blue-50")
        .child(
            el("div")
                .class("column max-w-4xl mx-auto")
                .child(heading("Work Experience"))
                .children(entries.iter().map(experience_card)),
        )
        .into()
}

fn field_input(form: &ContactForm, field: ContactField) -> Element {
    let control = match field {
        ContactField::Message => el("textarea")
            .attr("rows", "5")
            .text(form.value(field)),
        ContactField::Email => el("input")
            .attr("type", "email")
            .attr("value", form.value(field)),
        _ => el("input")
            .attr("type", "text")
            .attr("value", form.value(field)),
    };
    let control = control
        .class("outlined w-full")
        .attr("id", format!("contact-{}", field.key()))
        .attr("name", field.key());
    let control = if field.is_required() {
        control.attr("aria-required", "true")
    } else {
        control
    };

    el("label")
        .class("field w-full")
        .attr("for", format!("contact-{}", field.key()))
        .child(el("span").text(field.label()))
        .child(control)
}

pub fn notification(notice: &Notification) -> Node {
    let kind = match notice.kind {
        NotificationKind::Success => "positive",
        NotificationKind::Warning => "warning",
        NotificationKind::Error => "negative",
    };
    el("div")
        .class("notify")
        .class(kind)
        .attr("role", "alert")
        .text(notice.message.as_str())
        .into()
}

pub fn contact(
    form: &ContactForm,
    notice: Option<&Notification>,
    links: LinkMode,
    profile: &Profile,
) -> Node {
    let mut fields = el("form")
        .class("card-section q-gutter-md")
        .attr("method", "post")
        .attr("action", links.contact_action(profile))
        .attr("novalidate", "novalidate");
    if links == LinkMode::Static {
        fields = fields.attr("enctype", "text/plain");
    }
    if let Some(notice) = notice {
        fields = fields.child(notification(notice));
    }
    let fields = fields
        .children(ContactField::ALL.iter().map(|f| field_input(form, *f)))
        .child(
            el("button")
                .class("button bg-primary w-full")
                .attr("type", "submit")
                .text("Send Message"),
        );

    section(SectionId::Contact, "py-16", "bg-white")
        .child(
            el("div")
                .class("column max-w-4xl mx-auto items-center")
                .child(heading("Get In Touch"))
                .child(
                    card()
                        .class("max-w-md")
                        .child(
                            el("div")
                                .class("card-section")
                                .child(el("h4").class("text-h6").text("Contact Form")),
                        )
                        .child(fields),
                ),
        )
        .into()
}

pub fn footer(profile: &Profile, config: &SiteConfig) -> Node {
    let icon_link = |icon: &str, href: String| {
        el("a")
            .class("icon text-white")
            .attr("href", href)
            .attr("aria-label", icon)
            .text(icon)
    };

    el("footer")
        .class("bg-primary text-white py-8")
        .child(
            el("div")
                .class("column items-center")
                .child(el("div").class("q-mb-md").text(format!(
                    "© {} | {} | {}",
                    profile.name, profile.title, config.site.footer_year
                )))
                .child(
                    el("div")
                        .class("row q-gutter-md")
                        .child(icon_link("email", profile.mailto()))
                        .child(
                            icon_link("code", profile.github_url())
                                .attr("target", "_blank")
                                .attr("rel", "noopener noreferrer"),
                        )
                        .child(
                            icon_link("work", profile.linkedin_url())
                                .attr("target", "_blank")
                                .attr("rel", "noopener noreferrer"),
                        ),
                ),
        )
        .into()
}
