use std::collections::HashMap;

use serde_yaml::Value;

const DELIMITER: &str = "---";

/// Metadata block of a post plus the body that follows it. Only scalar
/// values are kept in `fields`; lists and nested mappings are accepted and
/// ignored.
#[derive(Debug, PartialEq)]
pub struct FrontMatter {
    pub fields: HashMap<String, String>,
    pub body: String,
}

impl FrontMatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|v| v.as_str())
    }
}

/// Example of document
/// ---
/// title: What I learned
/// subhead: "A retrospective"
/// date: 2024-04-03 10:30
/// tags:
///   - rust
/// ---
///
/// Body in markdown
pub fn parse_front_matter(raw_text: &str) -> Result<FrontMatter, String> {
    let mut lines = raw_text.lines();

    // Only blank lines may come before the opening delimiter
    let opening = lines.by_ref().find(|line| !line.trim().is_empty());
    match opening {
        Some(line) if line.trim() == DELIMITER => {}
        _ => return Err("Front-matter block is missing".to_string()),
    }

    let mut block = vec![];
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim_end() == DELIMITER {
            closed = true;
            break;
        }
        block.push(line);
    }

    if !closed {
        return Err("End of front-matter block is missing".to_string());
    }

    let fields = parse_fields(&block.join("\n"))?;

    let body: Vec<&str> = lines.skip_while(|line| line.trim().is_empty()).collect();
    let mut body = body.join("\n");
    if !body.is_empty() && raw_text.ends_with('\n') {
        body.push('\n');
    }

    Ok(FrontMatter { fields, body })
}

fn parse_fields(block: &str) -> Result<HashMap<String, String>, String> {
    let value: Value = serde_yaml::from_str(block)
        .map_err(|e| format!("Invalid front-matter: {}", e))?;

    let mapping = match value {
        Value::Null => return Ok(HashMap::new()),
        Value::Mapping(mapping) => mapping,
        _ => return Err("Front-matter is not a list of key: value pairs".to_string()),
    };

    let mut fields = HashMap::new();
    for (key, val) in mapping {
        let key = match key {
            Value::String(key) => key,
            _ => continue,
        };
        if let Some(val) = scalar_to_string(val) {
            fields.insert(key, val);
        }
    }
    Ok(fields)
}

fn scalar_to_string(val: Value) -> Option<String> {
    match val {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}
