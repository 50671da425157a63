use std::io;
use std::io::ErrorKind;
use std::ops::Range;

use markdown::mdast::Node;
use markdown::{CompileOptions, Options, ParseOptions};

/// Renders a post body to HTML. Raw HTML embedded in the markdown is kept
/// as-is, HTML comments are dropped.
pub fn render_markdown(md_text: &str) -> io::Result<String> {
    let buf = remove_comments(md_text)?;
    let options = Options {
        parse: ParseOptions::gfm(),
        compile: CompileOptions {
            allow_dangerous_html: true,
            ..CompileOptions::gfm()
        },
    };

    match markdown::to_html_with_options(buf.as_str(), &options) {
        Ok(x) => Ok(x),
        Err(e) => Err(io::Error::new(ErrorKind::InvalidInput, e.reason.as_str())),
    }
}

/// Removes the HTML nodes that are a single complete comment. Text that only
/// looks like a comment, in code spans or fenced blocks, is left alone.
pub fn remove_comments(md_post: &str) -> io::Result<String> {
    let tree = match markdown::to_mdast(md_post, &ParseOptions::gfm()) {
        Ok(tree) => tree,
        Err(e) => return Err(io::Error::new(ErrorKind::InvalidData, e.reason.as_str())),
    };

    let mut ranges = vec![];
    collect_comments(&tree, &mut ranges);
    ranges.sort_by_key(|r| r.start);

    let mut res = String::with_capacity(md_post.len());
    let mut last = 0;
    for range in ranges {
        if range.start < last {
            continue;
        }
        res.push_str(&md_post[last..range.start]);
        last = range.end;
    }
    res.push_str(&md_post[last..]);

    Ok(res)
}

fn collect_comments(node: &Node, ranges: &mut Vec<Range<usize>>) {
    if let Node::Html(html) = node {
        let value = html.value.trim();
        if value.starts_with("<!--") && value.ends_with("-->") && value.len() >= 7 {
            if let Some(ref pos) = html.position {
                ranges.push(pos.start.offset..pos.end.offset);
            }
        }
    }

    if let Some(children) = node.children() {
        for child in children {
            collect_comments(child, ranges);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_comments() {
        assert_eq!(remove_comments("Some text.<!-- more -->Wo<!-- xyz -->rd").unwrap(), "Some text.Word");
        assert_eq!(remove_comments("Some text.Word").unwrap(), "Some text.Word");
        assert_eq!(remove_comments("").unwrap(), "");
        let res = remove_comments("Intro\n\n<!-- more -->\n\nRest\n").unwrap();
        assert!(res.starts_with("Intro\n"));
        assert!(res.ends_with("Rest\n"));
        assert!(!res.contains("more"));
    }

    #[test]
    fn test_render_markdown() {
        let html = render_markdown("## Title\n\nSome **bold** text.\n").unwrap();
        assert!(html.starts_with("<h2>Title</h2>\n<p>Some <strong>bold</strong> text.</p>"));
    }

    #[test]
    fn test_raw_html_is_kept() {
        let html = render_markdown("<div class=\"callout\">Hi</div>\n\nText\n").unwrap();
        assert!(html.contains("<div class=\"callout\">Hi</div>"));
        assert!(html.contains("<p>Text</p>"));
    }

    #[test]
    fn test_comments_are_not_rendered() {
        let html = render_markdown("Intro\n\n<!-- more -->\n\nRest\n").unwrap();
        assert!(!html.contains("more"));
        assert!(html.contains("<p>Intro</p>"));
        assert!(html.contains("<p>Rest</p>"));
    }

    #[test]
    fn test_comment_opener_in_code_span() {
        let html = render_markdown("Open a comment with `<!--` in HTML.\n").unwrap();
        assert!(html.contains("<code>&lt;!--</code>"));
    }

    #[test]
    fn test_comment_in_fenced_code_is_kept() {
        let html = render_markdown("```html\n<!-- keep me -->\n<p>x</p>\n```\n").unwrap();
        assert!(html.contains("&lt;!-- keep me --&gt;"));
        assert!(html.contains("&lt;p&gt;x&lt;/p&gt;"));
    }
}
