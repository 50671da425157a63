use std::borrow::Cow;
use std::io;

use ramhorns::Template;

use crate::content::PostRecord;
use crate::projects::Project;
use crate::view::{parse_template, NavBar, PostLink};

#[derive(ramhorns::Content)]
struct ProjectCard<'a> {
    link: String,
    name: &'a str,
    short_description: &'a str,
    technologies: &'a str,
    title_image: &'a str,
}

#[derive(ramhorns::Content)]
struct HomePage<'a> {
    nav_bar: NavBar<'a>,
    projects: Vec<ProjectCard<'a>>,
    latest_posts: Vec<PostLink<'a>>,
    has_posts: bool,
}

/// About, skills and projects sections plus the latest posts preview.
pub struct HomeRenderer<'a> {
    pub template: Template<'a>,
}

impl<'a> HomeRenderer<'a> {
    pub fn new<S: Into<Cow<'a, str>>>(home_tpl_src: S) -> io::Result<HomeRenderer<'a>> {
        Ok(HomeRenderer {
            template: parse_template("home", home_tpl_src)?,
        })
    }

    pub fn render(&self, nav_bar: NavBar, projects: &[Project], latest: &[PostRecord]) -> String {
        let projects = projects.iter()
            .map(|p| ProjectCard {
                link: p.link(),
                name: p.name.as_str(),
                short_description: p.short_description.as_str(),
                technologies: p.technologies.as_str(),
                title_image: p.title_image.as_deref().unwrap_or(""),
            })
            .collect();

        self.template.render(&HomePage {
            nav_bar,
            projects,
            latest_posts: latest.iter().map(PostLink::from).collect(),
            has_posts: !latest.is_empty(),
        })
    }
}
