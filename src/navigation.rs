use std::fmt;
use std::fmt::{Display, Formatter};

/// Path plus optional in-page anchor. `hash` keeps its leading `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub hash: Option<String>,
}

impl Location {
    pub fn new(pathname: &str, hash: Option<&str>) -> Self {
        let hash = hash.and_then(normalize_hash);
        let pathname = if pathname.is_empty() { "/".to_string() } else { pathname.to_string() };
        Location { pathname, hash }
    }

    /// Parses an href such as `/skills#skills` or `/blog?page=2`. The query
    /// string is not part of a location.
    pub fn parse(href: &str) -> Self {
        let (rest, hash) = match href.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash)),
            None => (href, None),
        };
        let pathname = rest.split('?').next().unwrap_or("");
        Location::new(pathname, hash)
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// The hash without `#`, i.e. the id of the element it points to.
    pub fn anchor_id(&self) -> Option<&str> {
        self.hash.as_deref().map(|h| &h[1..])
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pathname, self.hash.as_deref().unwrap_or(""))
    }
}

fn normalize_hash(hash: &str) -> Option<String> {
    let id = hash.trim_start_matches('#');
    if id.is_empty() {
        None
    } else {
        Some(format!("#{}", id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavEntry {
    Skills,
    Projects,
    Blog,
}

impl NavEntry {
    /// Evaluation order: sections with nested routes come first.
    pub const ALL: [NavEntry; 3] = [NavEntry::Projects, NavEntry::Blog, NavEntry::Skills];

    /// Display order in the navigation bar.
    pub const MENU: [NavEntry; 3] = [NavEntry::Skills, NavEntry::Projects, NavEntry::Blog];

    pub fn path(&self) -> &'static str {
        match self {
            NavEntry::Skills => "/skills",
            NavEntry::Projects => "/projects",
            NavEntry::Blog => "/blog",
        }
    }

    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            NavEntry::Skills => Some("#skills"),
            NavEntry::Projects => Some("#projects"),
            NavEntry::Blog => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Skills => "Skills",
            NavEntry::Projects => "Projects",
            NavEntry::Blog => "Blog",
        }
    }

    /// Whether the section has detail pages below its path.
    pub fn has_nested_routes(&self) -> bool {
        matches!(self, NavEntry::Projects | NavEntry::Blog)
    }

    pub fn href(&self) -> String {
        format!("{}{}", self.path(), self.anchor().unwrap_or(""))
    }
}

pub fn is_active(entry: NavEntry, current_path: &str, current_hash: Option<&str>) -> bool {
    if entry.has_nested_routes() {
        return is_under(current_path, entry.path());
    }

    current_path == entry.path()
        || matches!((current_hash, entry.anchor()), (Some(hash), Some(anchor)) if hash == anchor)
}

/// The brand link stands for the top of the home page only.
pub fn is_home_active(current_path: &str, current_hash: Option<&str>) -> bool {
    current_path == "/" && current_hash.is_none()
}

fn is_under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Active state of every link in the navigation bar for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub home: bool,
    pub active: Vec<NavEntry>,
}

impl NavState {
    pub fn resolve(location: &Location) -> Self {
        let path = location.pathname.as_str();
        let hash = location.hash();
        let active = NavEntry::ALL.iter()
            .copied()
            .filter(|entry| is_active(*entry, path, hash))
            .collect();

        NavState {
            home: is_home_active(path, hash),
            active,
        }
    }

    pub fn is_active(&self, entry: NavEntry) -> bool {
        self.active.contains(&entry)
    }
}
