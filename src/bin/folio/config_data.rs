use std::fs;
use std::io;
use std::path::Path;

const CONFIG_SAMPLE: &str = r#"[site]
title = "My Portfolio"
brand = "MP"

# For the file locations, If you want it to be relative to the executable directory
# use ${exe_dir}/location
[paths]
template_dir = "res/template"
public_dir = "res/public"
posts_dir = "posts"
projects_file = "projects.toml"

# Posts shown in the home page preview and posts per blog page
[defaults]
preview_count = 4
page_size = 10

[server]
address = "0.0.0.0"
port = 8001

[log]
level = "Info"
log_to_console = true
"#;

pub(crate) fn write_sample_cfg(file_path: &Path) -> io::Result<()> {
    if file_path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists, format!("{} already exists", file_path.display())));
    }
    fs::write(file_path, CONFIG_SAMPLE)
}
