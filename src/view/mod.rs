use std::borrow::Cow;
use std::io;
use std::io::ErrorKind;
use std::path::Path;

use ramhorns::Template;

use crate::config::Site;
use crate::content::PostRecord;
use crate::navigation::{NavEntry, NavState};

pub mod blog_renderer;
pub mod home_renderer;
pub mod not_found_renderer;
pub mod post_renderer;
pub mod project_renderer;

#[derive(ramhorns::Content)]
pub struct NavLink {
    label: &'static str,
    href: String,
    current: bool,
}

#[derive(ramhorns::Content)]
pub struct NavBar<'a> {
    site_title: &'a str,
    brand: &'a str,
    brand_current: bool,
    entries: Vec<NavLink>,
}

impl<'a> NavBar<'a> {
    pub fn new(site: &'a Site, state: &NavState) -> Self {
        let entries = NavEntry::MENU.iter()
            .map(|entry| NavLink {
                label: entry.label(),
                href: entry.href(),
                current: state.is_active(*entry),
            })
            .collect();

        NavBar {
            site_title: site.title.as_str(),
            brand: site.brand.as_str(),
            brand_current: state.home,
            entries,
        }
    }
}

#[derive(ramhorns::Content)]
pub struct PostLink<'a> {
    link: String,
    title: &'a str,
    subhead: &'a str,
    has_subhead: bool,
    date: &'a str,
}

impl<'a> From<&'a PostRecord> for PostLink<'a> {
    fn from(post: &'a PostRecord) -> Self {
        PostLink {
            link: post.link(),
            title: post.title.as_str(),
            subhead: post.subhead.as_deref().unwrap_or(""),
            has_subhead: post.subhead.is_some(),
            date: post.formatted_date.as_deref().unwrap_or(""),
        }
    }
}

pub fn parse_template<'a, S: Into<Cow<'a, str>>>(name: &str, src: S) -> io::Result<Template<'a>> {
    // ramhorns takes its own Cow type
    let parsed = match src.into() {
        Cow::Borrowed(src) => Template::new(src),
        Cow::Owned(src) => Template::new(src),
    };
    match parsed {
        Ok(x) => Ok(x),
        Err(e) => Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing {} template: {}", name, e))),
    }
}

pub fn read_template(tpl_dir: &Path, file_name: &str) -> io::Result<String> {
    let full_path = tpl_dir.join(file_name);
    match std::fs::read_to_string(&full_path) {
        Ok(src) => Ok(src),
        Err(e) => Err(io::Error::new(e.kind(), format!("Error loading template {}: {}", full_path.display(), e))),
    }
}

/// All page renderers, parsed once from the template directory.
pub struct Views {
    pub home: home_renderer::HomeRenderer<'static>,
    pub blog: blog_renderer::BlogRenderer<'static>,
    pub post: post_renderer::PostRenderer<'static>,
    pub project: project_renderer::ProjectRenderer<'static>,
    pub not_found: not_found_renderer::NotFoundRenderer<'static>,
}

impl Views {
    pub fn load(tpl_dir: &Path) -> io::Result<Views> {
        Ok(Views {
            home: home_renderer::HomeRenderer::new(read_template(tpl_dir, "home.tpl")?)?,
            blog: blog_renderer::BlogRenderer::new(read_template(tpl_dir, "blog.tpl")?)?,
            post: post_renderer::PostRenderer::new(read_template(tpl_dir, "post.tpl")?)?,
            project: project_renderer::ProjectRenderer::new(read_template(tpl_dir, "project.tpl")?)?,
            not_found: not_found_renderer::NotFoundRenderer::new(read_template(tpl_dir, "not_found.tpl")?)?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::navigation::Location;

    use super::*;

    pub const NAV_TPL: &str = "{{#nav_bar}}[{{brand}}{{#brand_current}}*{{/brand_current}}]{{#entries}}({{label}}{{#current}}*{{/current}}){{/entries}}{{/nav_bar}}";

    pub fn site() -> Site {
        Site { title: "Portfolio".to_string(), brand: "AH".to_string() }
    }

    #[test]
    fn test_nav_bar_state() {
        let site = site();
        let nav_bar = NavBar::new(&site, &NavState::resolve(&Location::parse("/projects/abc")));
        assert!(!nav_bar.brand_current);
        let current: Vec<&str> = nav_bar.entries.iter().filter(|e| e.current).map(|e| e.label).collect();
        assert_eq!(current, ["Projects"]);
        assert_eq!(nav_bar.entries[0].href, "/skills#skills");
    }

    #[test]
    fn test_post_link() {
        let post = PostRecord {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            subhead: Some("World".to_string()),
            raw_date: Some("2024-04-03".to_string()),
            year: Some(2024),
            formatted_date: Some("April 3, 2024".to_string()),
            content: String::new(),
        };
        let link = PostLink::from(&post);
        assert_eq!(link.link, "/blog/hello");
        assert!(link.has_subhead);
        assert_eq!(link.date, "April 3, 2024");
    }

    #[test]
    fn test_parse_template_sources() {
        assert!(parse_template("borrowed", "{{brand}}").is_ok());
        assert!(parse_template("owned", String::from("{{brand}}")).is_ok());
    }

    #[test]
    fn test_partials_are_rejected() {
        // Templates are parsed standalone, without a partials directory
        let err = parse_template("home", "{{>nav.tpl}}").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().starts_with("Error parsing home template"));
    }
}
