use std::fmt::{Display, Formatter, Write};
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about = "Creates a new blog post", long_about = None)]
struct Args {
    /// Title of the post
    #[arg(short, long)]
    title: Option<String>,

    /// Optional line shown under the title
    #[arg(short, long)]
    subhead: Option<String>,

    /// Post generation options
    #[arg(short, long, default_value_t = PostOutput::Stdout)]
    output: PostOutput,
}

#[derive(Clone, Debug, ValueEnum)]
enum PostOutput {
    /// Writes the new post content to the stdout
    Stdout,
    /// Writes the new post content to <slug>.md in the current directory
    File,
}

impl Display for PostOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PostOutput::Stdout => write!(f, "stdout"),
            PostOutput::File => write!(f, "file"),
        }
    }
}

/// Double-quoted YAML scalar, so titles such as `Rust: year one` stay valid.
fn quoted(val: &str) -> String {
    format!("\"{}\"", val.replace('\\', "\\\\").replace('"', "\\\""))
}

fn render_front_matter(title: Option<&str>, subhead: Option<&str>, date: &str) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf, "title: {}", quoted(title.unwrap_or("Replace with title")));
    if let Some(subhead) = subhead {
        let _ = writeln!(&mut buf, "subhead: {}", quoted(subhead));
    }
    let _ = writeln!(&mut buf, "date: {}", date);
    let _ = writeln!(&mut buf, "---");
    let _ = writeln!(&mut buf);
    buf
}

fn render_body() -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "This is a body example");
    let _ = writeln!(&mut buf, "Please remove it and replace with your content");
    let _ = writeln!(&mut buf);
    let _ = writeln!(&mut buf, "<!-- HTML comments are not published -->");
    let _ = writeln!(&mut buf);
    let _ = writeln!(&mut buf, "## A section");

    buf
}

fn slug_from_title(title: &str) -> String {
    let ascii = unidecode::unidecode(title);
    let mut slug = String::new();

    for c in ascii.chars().filter(|&c| c.is_ascii_alphanumeric() || c == ' ' || c == '-') {
        let c = if c == ' ' { '-' } else { c.to_ascii_lowercase() };
        if c != '-' || !(slug.is_empty() || slug.ends_with('-')) {
            slug.push(c);
        }
    }

    slug.trim_end_matches('-').to_string()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let date = Local::now().format("%Y-%m-%d %H:%M").to_string();

    let post = format!("{}{}",
                       render_front_matter(args.title.as_deref(), args.subhead.as_deref(), &date),
                       render_body());

    match args.output {
        PostOutput::Stdout => print!("{}", post),
        PostOutput::File => {
            let title = match args.title {
                Some(ref title) => title,
                None => bail!("For file output, title is required"),
            };
            let slug = slug_from_title(title);
            if slug.is_empty() {
                bail!("Title {} has no characters usable in a slug", title);
            }

            let file_name = PathBuf::from(format!("{}.md", slug));
            if file_name.exists() {
                bail!("File {} already exists", file_name.display());
            }
            println!("Creating file {}", file_name.display());
            fs::write(&file_name, post)?;
        }
    };

    Ok(())
}
