use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl TeamMember {
    /// Avatar fallback: the first letter of every part of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Title/description/icon card. Used for core values, home features and
/// mission pillars alike.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreValue {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub author: String,
    pub published: NaiveDate,
    pub url: String,
    pub image: String,
}

impl BlogPost {
    pub fn published_display(&self) -> String {
        self.published.format("%b %d, %Y").to_string()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductSuite {
    pub id: String,
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub features: Vec<String>,
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UseCase {
    pub id: String,
    pub title: String,
    pub category: String,
    pub read_time: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactMethod {
    pub title: String,
    pub description: String,
    pub value: String,
    pub link: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SocialLink {
    pub fn is_mail(&self) -> bool {
        self.href.starts_with("mailto:")
    }

    /// `mailto:` links stay in the current tab, everything else opens a new one.
    pub fn target(&self) -> &'static str {
        if self.is_mail() {
            "_self"
        } else {
            "_blank"
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Entries<T> {
    pub entries: Vec<T>,
}

/// Everything the pages render, loaded once at startup.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub team: Vec<TeamMember>,
    pub values: Vec<CoreValue>,
    pub features: Vec<CoreValue>,
    pub pillars: Vec<CoreValue>,
    pub posts: Vec<BlogPost>,
    pub products: Vec<ProductSuite>,
    pub use_cases: Vec<UseCase>,
    pub contact_methods: Vec<ContactMethod>,
    pub socials: Vec<SocialLink>,
}

impl SiteContent {
    pub async fn load(dir: &Path) -> Result<Self> {
        let content = Self {
            team: load_entries(dir, "team").await?,
            values: load_entries(dir, "values").await?,
            features: load_entries(dir, "features").await?,
            pillars: load_entries(dir, "pillars").await?,
            posts: load_entries(dir, "blog").await?,
            products: load_entries(dir, "products").await?,
            use_cases: load_entries(dir, "use_cases").await?,
            contact_methods: load_entries(dir, "contact_methods").await?,
            socials: load_entries(dir, "socials").await?,
        };
        content.check()?;
        Ok(content)
    }

    fn check(&self) -> Result<()> {
        ensure_unique_ids("blog", self.posts.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("products", self.products.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("use_cases", self.use_cases.iter().map(|u| u.id.as_str()))?;
        if self.products.is_empty() {
            bail!("products.json must list at least one product suite");
        }
        Ok(())
    }
}

async fn load_entries<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>> {
    let path = dir.join(format!("{name}.json"));
    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let data: Entries<T> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(file = %path.display(), count = data.entries.len(), "loaded content");
    Ok(data.entries)
}

fn ensure_unique_ids<'a>(list: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("duplicate id {id:?} in {list}.json");
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Small in-memory content set for handler tests.
    pub fn content() -> SiteContent {
        SiteContent {
            team: vec![TeamMember {
                name: "Anish Navali".into(),
                role: "Founder".into(),
                description: "Tech enthusiast focused on building GenAI products.".into(),
                image: None,
            }],
            values: vec![CoreValue {
                title: "Quality".into(),
                description: "Finest quality only.".into(),
                icon: "gem".into(),
            }],
            features: vec![],
            pillars: vec![],
            posts: vec![BlogPost {
                id: "post-1".into(),
                title: "The Power of Artificial Intelligence".into(),
                summary: "AI is revolutionizing modern business.".into(),
                author: "Prajwal".into(),
                published: NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
                url: "#".into(),
                image: "/static/img/blog/ai.png".into(),
            }],
            products: vec![
                ProductSuite {
                    id: "chatbot".into(),
                    title: "ChatBot JS".into(),
                    description: "Customizable AI chatbot.".into(),
                    detailed_description: "An easy AI assistant.".into(),
                    features: vec!["Knowledge Base Creation".into()],
                    color: "blue".into(),
                    icon: "bot".into(),
                },
                ProductSuite {
                    id: "analytics".into(),
                    title: "Data Analytics".into(),
                    description: "Actionable insights.".into(),
                    detailed_description: "Turn data into insight.".into(),
                    features: vec!["Predictive Analytics".into()],
                    color: "purple".into(),
                    icon: "chart".into(),
                },
            ],
            use_cases: vec![
                UseCase {
                    id: "1".into(),
                    title: "Dynamic Process Intelligence".into(),
                    category: "Manufacturing".into(),
                    read_time: "5 min read".into(),
                    description: "Yield and quality optimization.".into(),
                    image: "/static/img/use-cases/1.jpg".into(),
                },
                UseCase {
                    id: "2".into(),
                    title: "Optimizing Hospital Performance".into(),
                    category: "Healthcare".into(),
                    read_time: "7 min read".into(),
                    description: "Fewer readmissions.".into(),
                    image: "/static/img/use-cases/2.jpg".into(),
                },
            ],
            contact_methods: vec![],
            socials: vec![SocialLink {
                label: "Email".into(),
                href: "mailto:hello@example.com".into(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(format!("{name}.json")), body).unwrap();
    }

    fn write_minimal(dir: &Path) {
        for name in [
            "team",
            "values",
            "features",
            "pillars",
            "blog",
            "use_cases",
            "contact_methods",
            "socials",
        ] {
            write(dir, name, r#"{"entries": []}"#);
        }
        write(
            dir,
            "products",
            r#"{"entries": [{"id": "chatbot", "title": "ChatBot JS", "description": "d",
                "detailed_description": "dd", "features": ["a"], "color": "blue"}]}"#,
        );
    }

    #[test]
    fn test_initials() {
        let member = TeamMember {
            name: "Gagandeep H S".into(),
            role: "Founding member".into(),
            description: String::new(),
            image: None,
        };
        assert_eq!(member.initials(), "GHS");
    }

    #[test]
    fn test_initials_ignores_extra_whitespace() {
        let member = TeamMember {
            name: "  Shrinivas   Navali ".into(),
            role: String::new(),
            description: String::new(),
            image: None,
        };
        assert_eq!(member.initials(), "SN");
    }

    #[test]
    fn test_published_display() {
        let content = fixtures::content();
        assert_eq!(content.posts[0].published_display(), "Jun 16, 2025");
    }

    #[test]
    fn test_social_link_target() {
        let mail = SocialLink {
            label: "Email".into(),
            href: "mailto:a@b.co".into(),
        };
        let web = SocialLink {
            label: "LinkedIn".into(),
            href: "https://www.linkedin.com/company/equilibrate-ai".into(),
        };
        assert_eq!(mail.target(), "_self");
        assert_eq!(web.target(), "_blank");
    }

    #[tokio::test]
    async fn test_load_minimal_content() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal(dir.path());
        let content = SiteContent::load(dir.path()).await.unwrap();
        assert_eq!(content.products.len(), 1);
        assert!(content.posts.is_empty());
    }

    #[tokio::test]
    async fn test_load_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal(dir.path());
        write(
            dir.path(),
            "use_cases",
            r#"{"entries": [
                {"id": "1", "title": "a", "category": "c", "read_time": "1 min read", "description": "d", "image": "i"},
                {"id": "1", "title": "b", "category": "c", "read_time": "1 min read", "description": "d", "image": "i"}
            ]}"#,
        );
        let err = SiteContent::load(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[tokio::test]
    async fn test_load_requires_a_product() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal(dir.path());
        write(dir.path(), "products", r#"{"entries": []}"#);
        assert!(SiteContent::load(dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteContent::load(dir.path()).await.unwrap_err();
        assert!(format!("{err:#}").contains("team.json"));
    }

    #[tokio::test]
    async fn test_load_shipped_content() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
        let content = SiteContent::load(&dir).await.unwrap();
        assert_eq!(content.team.len(), 3);
        assert_eq!(content.products[0].id, "chatbot");
    }
}
