use std::collections::HashMap;

#[derive(PartialEq, Debug, Default)]
pub struct QueryString {
    items: HashMap<String, String>,
}

impl QueryString {
    pub fn from(buf: &str) -> Self {
        let vs: Vec<(String, String)> = serde_urlencoded::from_str(buf).unwrap_or_else(|_| vec![]);
        let items: HashMap<String, String> = vs.into_iter().collect();

        QueryString {
            items,
        }
    }

    pub fn from_uri_query(query: Option<&str>) -> Self {
        query.map(QueryString::from).unwrap_or_default()
    }

    fn get_number<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.items.get(key).and_then(|v| v.trim().parse().ok())
    }

    /// Requested page, 1 when absent or invalid.
    pub fn page(&self) -> u32 {
        match self.get_number::<u32>("page") {
            Some(0) | None => 1,
            Some(page) => page,
        }
    }

    /// Year filter of the blog index.
    pub fn year(&self) -> Option<i32> {
        self.get_number("year")
    }
}
