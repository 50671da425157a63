use std::borrow::Cow;
use std::io;

use ramhorns::Template;

use crate::content::PostRecord;
use crate::paginator::Paginator;
use crate::post_store::{group_by_year, PostStore};
use crate::view::{parse_template, NavBar, PostLink};

#[derive(ramhorns::Content)]
struct YearSection<'a> {
    year: String,
    posts: Vec<PostLink<'a>>,
}

#[derive(ramhorns::Content)]
struct ViewPagination {
    current: bool,
    number: u32,
    link: String,
}

#[derive(ramhorns::Content)]
struct BlogPage<'a> {
    nav_bar: NavBar<'a>,
    years: Vec<YearSection<'a>>,
    has_posts: bool,
    year_filter: String,
    page_list: Vec<ViewPagination>,
    show_pagination: bool,
    prev_link: String,
    has_prev: bool,
    next_link: String,
    has_next: bool,
}

/// What the blog index shows: an optional single year and one page of it.
#[derive(Debug, Clone, Default)]
pub struct BlogQuery {
    pub year: Option<i32>,
    pub page: u32,
    pub page_size: Option<u32>,
}

impl BlogQuery {
    fn page_link(&self, number: u32) -> String {
        match self.year {
            Some(year) => format!("/blog?year={}&page={}", year, number),
            None => format!("/blog?page={}", number),
        }
    }
}

pub struct BlogRenderer<'a> {
    pub template: Template<'a>,
}

impl<'a> BlogRenderer<'a> {
    pub fn new<S: Into<Cow<'a, str>>>(blog_tpl_src: S) -> io::Result<BlogRenderer<'a>> {
        Ok(BlogRenderer {
            template: parse_template("blog", blog_tpl_src)?,
        })
    }

    pub fn render(&self, nav_bar: NavBar, store: &PostStore, query: &BlogQuery) -> String {
        let posts: Vec<&PostRecord> = match query.year {
            Some(year) => store.by_year(year),
            None => store.all().iter().collect(),
        };

        let paginator = Paginator::new(&posts, query.page_size);
        let page = paginator.page(query.page);

        let years = group_by_year(page.items.iter().copied())
            .into_iter()
            .map(|group| YearSection {
                year: group.year.map(|y| y.to_string()).unwrap_or_else(|| "Undated".to_string()),
                posts: group.posts.into_iter().map(PostLink::from).collect(),
            })
            .collect();

        let page_list = (1..=page.page_count)
            .map(|number| ViewPagination {
                current: number == page.number,
                number,
                link: query.page_link(number),
            })
            .collect();

        self.template.render(&BlogPage {
            nav_bar,
            years,
            has_posts: !page.items.is_empty(),
            year_filter: query.year.map(|y| y.to_string()).unwrap_or_default(),
            page_list,
            show_pagination: page.page_count > 1,
            prev_link: page.prev().map(|n| query.page_link(n)).unwrap_or_default(),
            has_prev: page.prev().is_some(),
            next_link: page.next().map(|n| query.page_link(n)).unwrap_or_default(),
            has_next: page.next().is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::content::document_source::MemorySource;
    use crate::content::loader::ContentLoader;
    use crate::navigation::{Location, NavState};
    use crate::test_data::*;
    use crate::view::tests::{site, NAV_TPL};

    use super::*;

    const BLOG_TPL: &str = r##"{{#years}}<h2>{{year}}</h2>{{#posts}}<a href="{{link}}">{{title}}{{#has_subhead}} - {{subhead}}{{/has_subhead}}</a><span>{{date}}</span>{{/posts}}{{/years}}{{^has_posts}}No posts{{/has_posts}}{{#show_pagination}}|{{#page_list}}{{#current}}*{{/current}}{{number}}{{/page_list}}{{/show_pagination}}"##;

    fn store() -> PostStore {
        let source = MemorySource::new()
            .with("hello-world.md", POST_DATE_ONLY)
            .with("about.md", POST_UNDATED)
            .with("learning-rust.md", POST_WITH_TIME)
            .with("career.md", POST_OLD);
        PostStore::new(ContentLoader::load(&source).unwrap().posts)
    }

    fn render(query: &BlogQuery) -> String {
        let site = site();
        let renderer = BlogRenderer::new(format!("{}|{}", NAV_TPL, BLOG_TPL)).unwrap();
        let nav_bar = NavBar::new(&site, &NavState::resolve(&Location::parse("/blog")));
        renderer.render(nav_bar, &store(), query)
    }

    #[test]
    fn test_grouped_by_year() {
        let html = render(&BlogQuery { page: 1, ..Default::default() });
        assert!(html.starts_with("[AH](Skills)(Projects)(Blog*)|"));
        assert!(html.contains(concat!(
            "<h2>2024</h2><a href=\"/blog/learning-rust\">Learning Rust the hard way - Notes from a borrow checker fight</a><span>April 3, 2024</span>",
            "<h2>2023</h2><a href=\"/blog/hello-world\">Hello world</a><span>November 20, 2023</span>",
            "<h2>2022</h2><a href=\"/blog/career\">Why I switched careers</a><span>January 5, 2022</span>",
            "<h2>Undated</h2><a href=\"/blog/about\">A page without a date</a><span></span>",
        )));
        assert!(!html.contains("No posts"));
        assert!(!html.contains("|*1"));
    }

    #[test]
    fn test_year_filter() {
        let html = render(&BlogQuery { year: Some(2023), page: 1, page_size: None });
        assert!(html.contains("<h2>2023</h2>"));
        assert!(!html.contains("<h2>2024</h2>"));

        let html = render(&BlogQuery { year: Some(1990), page: 1, page_size: None });
        assert!(html.contains("No posts"));
    }

    #[test]
    fn test_pagination() {
        let html = render(&BlogQuery { year: None, page: 2, page_size: Some(2) });
        assert!(html.contains("<h2>2022</h2>"));
        assert!(html.contains("<h2>Undated</h2>"));
        assert!(!html.contains("<h2>2024</h2>"));
        assert!(html.ends_with("|1*2"));
    }

    #[test]
    fn test_prev_next_links() {
        let site = site();
        let renderer = BlogRenderer::new("{{#has_prev}}<{{prev_link}}{{/has_prev}}{{#has_next}}>{{next_link}}{{/has_next}}").unwrap();
        let query = BlogQuery { year: None, page: 1, page_size: Some(2) };
        let nav_bar = NavBar::new(&site, &NavState::resolve(&Location::parse("/blog")));
        assert_eq!(renderer.render(nav_bar, &store(), &query), ">/blog?page=2");

        let query = BlogQuery { year: None, page: 2, page_size: Some(2) };
        let nav_bar = NavBar::new(&site, &NavState::resolve(&Location::parse("/blog")));
        assert_eq!(renderer.render(nav_bar, &store(), &query), "</blog?page=1");
    }

    #[test]
    fn test_page_links_keep_year() {
        let query = BlogQuery { year: Some(2024), page: 1, page_size: Some(5) };
        assert_eq!(query.page_link(3), "/blog?year=2024&page=3");
        assert_eq!(BlogQuery::default().page_link(2), "/blog?page=2");
    }
}
