use std::borrow::Cow;
use std::io;

use ramhorns::Template;

use crate::content::markdown_renderer::render_markdown;
use crate::content::PostRecord;
use crate::view::{parse_template, NavBar};

#[derive(ramhorns::Content)]
struct ViewItem<'a> {
    nav_bar: NavBar<'a>,
    slug: &'a str,
    post_title: &'a str,
    subhead: &'a str,
    has_subhead: bool,
    date: &'a str,
    post_content: &'a str,
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl<'a> PostRenderer<'a> {
    pub fn new<S: Into<Cow<'a, str>>>(view_tpl_src: S) -> io::Result<PostRenderer<'a>> {
        Ok(PostRenderer {
            template: parse_template("post view", view_tpl_src)?,
        })
    }

    pub fn render(&self, nav_bar: NavBar, post: &PostRecord) -> io::Result<String> {
        let rendered = render_markdown(&post.content)?;

        Ok(self.template.render(&ViewItem {
            nav_bar,
            slug: post.slug.as_str(),
            post_title: post.title.as_str(),
            subhead: post.subhead.as_deref().unwrap_or(""),
            has_subhead: post.subhead.is_some(),
            date: post.formatted_date.as_deref().unwrap_or(""),
            post_content: rendered.as_str(),
        }))
    }
}
