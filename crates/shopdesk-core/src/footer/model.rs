use serde::{Deserialize, Serialize};

use crate::validation::{Checks, Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// Footer content for one language; the draft of the footer editor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub language_code: String,
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
    #[serde(default)]
    pub copyright_text: String,
    #[serde(default)]
    pub newsletter_text: Option<String>,
}

impl Footer {
    pub fn empty(language_code: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            ..Default::default()
        }
    }

    pub fn link_count(&self) -> usize {
        self.columns.iter().map(|c| c.links.len()).sum()
    }
}

fn is_acceptable_url(url: &str) -> bool {
    url.starts_with('/')
        || url.starts_with("https://")
        || url.starts_with("http://")
        || url.starts_with("mailto:")
        || url.starts_with("tel:")
}

impl Validate for Footer {
    fn validate(&self) -> ValidationErrors {
        let mut checks = Checks::new();
        checks.max_len("copyright_text", "Copyright text", &self.copyright_text, 500);

        for (ci, column) in self.columns.iter().enumerate() {
            let column_field = format!("columns[{}].title", ci);
            checks.required(&column_field, "Column title", &column.title);

            for (li, link) in column.links.iter().enumerate() {
                let label_field = format!("columns[{}].links[{}].label", ci, li);
                let url_field = format!("columns[{}].links[{}].url", ci, li);
                checks
                    .required(&label_field, "Link label", &link.label)
                    .required(&url_field, "Link URL", &link.url);
                if !link.url.trim().is_empty() && !is_acceptable_url(&link.url) {
                    checks.custom(
                        &url_field,
                        "Link URL must be absolute or start with `/`",
                    );
                }
            }
        }

        checks.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footer() -> Footer {
        Footer {
            language_code: "en".to_string(),
            columns: vec![FooterColumn {
                title: "Help".to_string(),
                links: vec![
                    FooterLink {
                        label: "Shipping".to_string(),
                        url: "/shipping".to_string(),
                    },
                    FooterLink {
                        label: "Contact".to_string(),
                        url: "mailto:help@example.com".to_string(),
                    },
                ],
            }],
            copyright_text: "© Example".to_string(),
            newsletter_text: None,
        }
    }

    #[test]
    fn test_valid_footer() {
        let footer = footer();
        assert!(footer.validate().is_empty());
        assert_eq!(footer.link_count(), 2);
    }

    #[test]
    fn test_relative_url_without_slash_is_rejected() {
        let mut footer = footer();
        footer.columns[0].links[0].url = "shipping".to_string();
        let errors = footer.validate();
        assert!(errors.has_field("columns[0].links[0].url"));
        assert_eq!(errors.len(), 1);
    }
}
