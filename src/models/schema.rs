// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Page schema describing the forms and fields to validate.
//! Parsing is kept pure so it can be reused by the bootstrap and the tests.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;

/// Built-in demo page used when no schema file is configured.
pub const DEMO_PAGE_JSON: &str = include_str!("../../assets/demo_forms.json");

/// Every form declared on a page, in document order.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PageSchema {
    #[serde(default)]
    pub forms: Vec<FormSchema>,
}

/// One form and its controls.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FormSchema {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub submit_label: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

/// One control declaration, mirroring the HTML attributes the validator reads.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "minlength", default)]
    pub min_length: Option<Value>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
}

fn default_kind() -> String {
    "text".to_string()
}

impl FieldSchema {
    /// Minimum length as declared; accepts a number or a numeric string.
    ///
    /// Anything else (negative, fractional, non-numeric) is treated as absent.
    pub fn min_length(&self) -> Option<usize> {
        match self.min_length.as_ref()? {
            Value::Number(n) => n.as_u64().and_then(|v| usize::try_from(v).ok()),
            Value::String(s) => s.trim().parse::<usize>().ok(),
            _ => None,
        }
    }
}

impl FormSchema {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.id)
    }
}

impl PageSchema {
    /// Look up a form by `#id` or bare `id` selector.
    pub fn find_form(&self, selector: &str) -> Option<&FormSchema> {
        let id = selector.trim();
        let id = id.strip_prefix('#').unwrap_or(id);
        self.forms.iter().find(|f| f.id == id)
    }
}

/// Parse a page schema from its JSON text.
///
/// # Errors
///
/// Returns an error when the JSON is malformed, when a form has an empty id,
/// or when two forms share the same id.
pub fn parse_page_schema(json: &str) -> Result<PageSchema> {
    let page: PageSchema =
        serde_json::from_str(json).context("Failed to parse form schema JSON")?;

    for (idx, form) in page.forms.iter().enumerate() {
        if form.id.trim().is_empty() {
            bail!("Form #{} has an empty id", idx + 1);
        }
        if page.forms[..idx].iter().any(|f| f.id == form.id) {
            bail!("Duplicate form id '{}'", form.id);
        }
    }

    Ok(page)
}

/// Read and parse a page schema file.
pub fn load_page_schema(path: &Path) -> Result<PageSchema> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form schema: {:?}", path))?;
    parse_page_schema(&text).with_context(|| format!("Invalid form schema in {:?}", path))
}

/// The built-in demo page.
pub fn demo_page() -> Result<PageSchema> {
    parse_page_schema(DEMO_PAGE_JSON).context("Built-in demo schema is invalid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_fields_with_html_style_attributes() {
        let json = r#"{"forms":[{"id":"register","title":"Register","fields":[
            {"name":"email","type":"email","required":true},
            {"name":"name","minlength":"3"},
            {"name":"address","minlength":5},
            {"name":"notes","minlength":"abc"}
        ]}]}"#;

        let page = parse_page_schema(json).unwrap();
        let form = &page.forms[0];
        assert_eq!(form.display_title(), "Register");
        assert_eq!(form.fields[0].kind, "email");
        assert!(form.fields[0].required);
        assert_eq!(form.fields[1].kind, "text");
        assert_eq!(form.fields[1].min_length(), Some(3));
        assert_eq!(form.fields[2].min_length(), Some(5));
        assert_eq!(form.fields[3].min_length(), None);
    }

    #[test]
    fn find_form_accepts_hash_and_bare_ids() {
        let page = parse_page_schema(r#"{"forms":[{"id":"login"}]}"#).unwrap();
        assert!(page.find_form("#login").is_some());
        assert!(page.find_form("login").is_some());
        assert!(page.find_form("#missing").is_none());
        assert_eq!(page.forms[0].display_title(), "login");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = parse_page_schema(r#"{"forms":[{"id":"a"},{"id":"a"}]}"#).unwrap_err();
        assert!(err.to_string().contains("Duplicate form id"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_page_schema("{not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse form schema JSON"));
    }

    #[test]
    fn loads_schema_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"forms":[{{"id":"contact","fields":[{{"name":"phone","type":"tel"}}]}}]}}"#
        )
        .unwrap();

        let page = load_page_schema(file.path()).unwrap();
        assert_eq!(page.forms.len(), 1);
        assert_eq!(page.forms[0].fields[0].name, "phone");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_page_schema(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read form schema"));
    }

    #[test]
    fn demo_page_is_valid() {
        let page = demo_page().unwrap();
        assert!(page.find_form("appointment").is_some());
        assert!(page.find_form("register").is_some());
    }
}
