use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;
use std::{fs, io};

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub short_description: String,
    /// HTML, rendered as-is
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub title_image: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub demo_video_id: Option<String>,
    #[serde(default)]
    pub video_title: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl Project {
    pub fn link(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

#[derive(Deserialize, Default)]
struct CatalogFile {
    #[serde(default, rename = "project")]
    projects: Vec<Project>,
}

/// Static, read-only list of projects shown on the site.
#[derive(Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> io::Result<Self> {
        let mut ids = HashSet::new();
        for project in projects.iter() {
            if !ids.insert(project.id.as_str()) {
                return Err(io::Error::new(
                    ErrorKind::InvalidData, format!("Duplicate project id {}", project.id)));
            }
        }
        Ok(ProjectCatalog { projects })
    }

    pub fn from_toml(src: &str) -> io::Result<Self> {
        let file: CatalogFile = match toml::from_str(src) {
            Ok(file) => file,
            Err(e) => return Err(io::Error::new(
                ErrorKind::InvalidData, format!("Error parsing project catalog: {}", e))),
        };
        Self::new(file.projects)
    }

    pub fn read(path: &Path) -> io::Result<Self> {
        let src = match fs::read_to_string(path) {
            Ok(src) => src,
            Err(e) => return Err(io::Error::new(
                e.kind(), format!("Error opening project catalog {}: {}", path.display(), e))),
        };
        Self::from_toml(&src)
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r##"
[[project]]
id = "react-fitness"
name = "React Fitness"
short_description = "Track your daily nutrition and exercise"
long_description = "Ever wondered if you're getting enough protein?<br /><br />Enter React Fitness."
technologies = "JavaScript ∙ React ∙ Redux"
title_image = "/public/react_fitness_title.png"
screenshots = ["/public/meal_diary.png", "/public/food_database.png"]
demo_video_id = "1110720312"
video_title = "React Fitness Demo"
source_url = "https://github.com/example/react-fitness"

[[project]]
id = "trivia"
name = "Trivia"
short_description = "A trivia game"
"##;

    #[test]
    fn test_from_toml() {
        let catalog = ProjectCatalog::from_toml(CATALOG).unwrap();
        assert_eq!(catalog.all().len(), 2);

        let project = catalog.get("react-fitness").unwrap();
        assert_eq!(project.name, "React Fitness");
        assert_eq!(project.screenshots.len(), 2);
        assert_eq!(project.demo_video_id.as_deref(), Some("1110720312"));
        assert_eq!(project.link(), "/projects/react-fitness");

        let trivia = catalog.get("trivia").unwrap();
        assert!(trivia.screenshots.is_empty());
        assert_eq!(trivia.source_url, None);
    }

    #[test]
    fn test_missing_project() {
        let catalog = ProjectCatalog::from_toml(CATALOG).unwrap();
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ProjectCatalog::from_toml("").unwrap();
        assert!(catalog.all().is_empty());
    }

    #[test]
    fn test_invalid_catalogs() {
        let err = ProjectCatalog::from_toml("[[project]]\nname = \"no id\"").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        let dup = "[[project]]\nid = \"a\"\nname = \"A\"\nshort_description = \"x\"\n\n[[project]]\nid = \"a\"\nname = \"B\"\nshort_description = \"y\"\n";
        let err = ProjectCatalog::from_toml(dup).err().unwrap();
        assert_eq!(err.to_string(), "Duplicate project id a");
    }
}
