use std::borrow::Cow;
use std::io;

use ramhorns::Template;

use crate::projects::Project;
use crate::view::{parse_template, NavBar};

#[derive(ramhorns::Content)]
struct Screenshot<'a> {
    url: &'a str,
    number: u32,
}

#[derive(ramhorns::Content)]
struct ProjectPage<'a> {
    nav_bar: NavBar<'a>,
    name: &'a str,
    technologies: &'a str,
    long_description: &'a str,
    title_image: &'a str,
    has_title_image: bool,
    screenshots: Vec<Screenshot<'a>>,
    source_url: &'a str,
    has_source: bool,
    demo_video_id: &'a str,
    video_title: &'a str,
    has_video: bool,
}

pub struct ProjectRenderer<'a> {
    pub template: Template<'a>,
}

impl<'a> ProjectRenderer<'a> {
    pub fn new<S: Into<Cow<'a, str>>>(project_tpl_src: S) -> io::Result<ProjectRenderer<'a>> {
        Ok(ProjectRenderer {
            template: parse_template("project", project_tpl_src)?,
        })
    }

    pub fn render(&self, nav_bar: NavBar, project: &Project) -> String {
        let screenshots = project.screenshots.iter()
            .enumerate()
            .map(|(i, url)| Screenshot { url: url.as_str(), number: i as u32 + 1 })
            .collect();

        self.template.render(&ProjectPage {
            nav_bar,
            name: project.name.as_str(),
            technologies: project.technologies.as_str(),
            long_description: project.long_description.as_str(),
            title_image: project.title_image.as_deref().unwrap_or(""),
            has_title_image: project.title_image.is_some(),
            screenshots,
            source_url: project.source_url.as_deref().unwrap_or(""),
            has_source: project.source_url.is_some(),
            demo_video_id: project.demo_video_id.as_deref().unwrap_or(""),
            video_title: project.video_title.as_deref().unwrap_or(project.name.as_str()),
            has_video: project.demo_video_id.is_some(),
        })
    }
}
