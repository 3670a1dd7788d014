use crate::config::toml_config::SiteConfig;
use crate::core::contact::{ContactForm, Notification};
use crate::core::html::{el, Node};
use crate::core::radar::RadarChart;
use crate::core::sections::{self, LinkMode, SectionId};
use crate::domain::model::PortfolioContent;
use url::form_urlencoded;

const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #24292f; }
header, footer { padding: 0.75rem 1rem; }
.bg-primary { background: #1976d2; color: #fff; }
.bg-secondary { background: #26a69a; color: #fff; }
.bg-blue-50 { background: #e3f2fd; }
.bg-white { background: #fff; }
.text-white { color: #fff; }
.text-primary { color: #1976d2; }
.text-secondary { color: #26a69a; }
.row { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.column { display: flex; flex-direction: column; }
.grid-cols-2 { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 1rem; }
.mx-auto { margin-left: auto; margin-right: auto; }
.max-w-4xl { max-width: 56rem; }
.card { border-radius: 6px; box-shadow: 0 1px 4px rgba(0,0,0,.15); padding: 1rem; background: #fff; }
.badge { display: inline-block; padding: 0.1rem 0.5rem; border-radius: 4px; background: #1976d2; color: #fff; }
.button { display: inline-block; padding: 0.5rem 1rem; border-radius: 4px; text-decoration: none; border: 0; cursor: pointer; }
.rounded-full { border-radius: 50%; }
.outlined { border: 1px solid #8c959f; border-radius: 4px; padding: 0.5rem; box-sizing: border-box; }
.notify { padding: 0.75rem 1rem; border-radius: 4px; animation: notify-fade 0.5s ease-in 5s forwards; }
.notify.positive { background: #21ba45; color: #fff; }
.notify.warning { background: #f2c037; color: #1d1d1d; }
.notify.negative { background: #c10015; color: #fff; }
@keyframes notify-fade { to { opacity: 0; visibility: hidden; } }
"#;

/// A rendered page: header, the six sections in order, footer.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    title: String,
    favicon: String,
    header: Node,
    sections: Vec<(SectionId, Node)>,
    footer: Node,
}

impl Document {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[(SectionId, Node)] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&Node> {
        self.sections
            .iter()
            .find(|(section_id, _)| *section_id == id)
            .map(|(_, node)| node)
    }

    pub fn to_html(&self) -> String {
        let icon = favicon_data_url(&self.favicon);
        let head = el("head")
            .child(el("meta").attr("charset", "utf-8"))
            .child(
                el("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(el("title").text(self.title.as_str()))
            .child(el("link").attr("rel", "icon").attr("href", icon))
            .child(el("style").child(Node::Raw(STYLESHEET.to_string())));

        let body = el("body")
            .child(self.header.clone())
            .child(
                el("main").children(self.sections.iter().map(|(_, node)| node.clone())),
            )
            .child(self.footer.clone());

        let mut out = String::from("<!DOCTYPE html>");
        el("html")
            .attr("lang", "en")
            .child(head)
            .child(body)
            .render(&mut out);
        out
    }
}

/// Emoji favicon as a percent-encoded SVG `data:` URL.
fn favicon_data_url(favicon: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{}</text></svg>",
        crate::core::html::escape(favicon)
    );
    // form encoding writes spaces as '+', which a data URL would keep literally
    let encoded: String = form_urlencoded::byte_serialize(svg.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("data:image/svg+xml,{}", encoded)
}

/// Composes the page from static content. Holds no mutable state, so the
/// same form state always renders the same document.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    config: SiteConfig,
    content: PortfolioContent,
    chart: RadarChart,
    links: LinkMode,
}

impl PageRenderer {
    pub fn new(config: SiteConfig, content: PortfolioContent) -> Self {
        let chart = RadarChart::from_ratings(&content.ratings);
        Self {
            config,
            content,
            chart,
            links: LinkMode::Served,
        }
    }

    /// Point in-page actions at static files instead of server routes.
    pub fn with_links(mut self, links: LinkMode) -> Self {
        self.links = links;
        self
    }

    pub fn links(&self) -> LinkMode {
        self.links
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn chart(&self) -> &RadarChart {
        &self.chart
    }

    pub fn render(&self, form: &ContactForm, notice: Option<&Notification>) -> Document {
        let content = &self.content;
        let sections = SectionId::ALL
            .iter()
            .map(|id| {
                let node = match id {
                    SectionId::Home => sections::home(&content.profile, self.links),
                    SectionId::About => sections::about(&content.profile),
                    SectionId::Skills => sections::skills(&content.skills, &self.chart),
                    SectionId::Projects => sections::projects(&content.projects, self.links),
                    SectionId::Experience => sections::experience(&content.experience),
                    SectionId::Contact => {
                        sections::contact(form, notice, self.links, &content.profile)
                    }
                };
                (*id, node)
            })
            .collect();

        Document {
            title: self.config.site.title.clone(),
            favicon: self.config.site.favicon.clone(),
            header: sections::header(&content.profile),
            sections,
            footer: sections::footer(&content.profile, &self.config),
        }
    }

    pub fn render_default(&self) -> Document {
        self.render(&ContactForm::new(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::Node;
    use std::collections::HashSet;

    fn renderer() -> PageRenderer {
        PageRenderer::new(SiteConfig::default(), PortfolioContent::builtin().unwrap())
    }

    #[test]
    fn test_sections_in_render_order_with_distinct_anchors() {
        let doc = renderer().render_default();
        let ids: Vec<SectionId> = doc.sections().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());

        let mut anchors = HashSet::new();
        for (id, node) in doc.sections() {
            let Node::Element(section) = node else {
                panic!("section {:?} is not an element", id);
            };
            assert_eq!(section.tag(), "section");
            assert_eq!(section.get_attr("id"), Some(id.anchor()));
            assert!(!section.is_empty());
            assert!(anchors.insert(id.anchor()));
        }
        assert_eq!(anchors.len(), 6);
    }

    #[test]
    fn test_anchor_positions_follow_order() {
        let html = renderer().render_default().to_html();
        let positions: Vec<usize> = SectionId::ALL
            .iter()
            .map(|id| html.find(&format!(" id=\"{}\"", id.anchor())).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = renderer();
        assert_eq!(renderer.render_default(), renderer.render_default());
        assert_eq!(
            renderer.render_default().to_html(),
            renderer.render_default().to_html()
        );
    }

    #[test]
    fn test_config_drives_title_and_footer() {
        let mut config = SiteConfig::default();
        config.site.title = "Portfolio <Alex>".to_string();
        config.site.footer_year = 2025;
        let renderer = PageRenderer::new(config, PortfolioContent::builtin().unwrap());
        let html = renderer.render_default().to_html();
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(html.contains("<title>Portfolio &lt;Alex&gt;</title>"));
        assert!(html.contains("© Alex Johnson | Machine Learning Engineer | 2025"));
    }

    #[test]
    fn test_favicon_is_percent_encoded() {
        let mut config = SiteConfig::default();
        config.site.favicon = "#1 100%".to_string();
        let renderer = PageRenderer::new(config, PortfolioContent::builtin().unwrap());
        let html = renderer.render_default().to_html();

        let prefix = "rel=\"icon\" href=\"";
        let start = html.find(prefix).unwrap() + prefix.len();
        let href = &html[start..];
        let href = &href[..href.find("\">").unwrap()];
        assert!(href.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(href.contains("%231%20100%25"));
        assert!(!href.contains('#'));
        assert!(!href.contains(' '));
    }

    #[test]
    fn test_skills_section_embeds_radar() {
        let doc = renderer().render_default();
        let skills = doc.section(SectionId::Skills).unwrap().to_html();
        assert!(skills.contains("class=\"radar-chart\""));
        assert!(skills.contains(">Computer Vision</text>"));
    }
}
