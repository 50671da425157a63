use std::borrow::Cow;
use std::io;

use ramhorns::Template;

use crate::view::{parse_template, NavBar};

#[derive(ramhorns::Content)]
struct NotFoundPage<'a> {
    nav_bar: NavBar<'a>,
    message: &'a str,
}

/// Empty state for unknown posts, projects and routes.
pub struct NotFoundRenderer<'a> {
    pub template: Template<'a>,
}

impl<'a> NotFoundRenderer<'a> {
    pub fn new<S: Into<Cow<'a, str>>>(tpl_src: S) -> io::Result<NotFoundRenderer<'a>> {
        Ok(NotFoundRenderer {
            template: parse_template("not found", tpl_src)?,
        })
    }

    pub fn render(&self, nav_bar: NavBar, message: &str) -> String {
        self.template.render(&NotFoundPage {
            nav_bar,
            message,
        })
    }
}
