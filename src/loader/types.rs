//! Content records
//!
//! Every record is read-only after load. Fields are lenient: missing values
//! default to empty, scalar ids may be strings or numbers, and open-ended
//! records keep unknown keys in `extra`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Site owner (singleton)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub email: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub location: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "scalar_string")]
    pub id: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub url: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub category: String,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// True when `identifier` names this project by id or by url
    pub fn matches(&self, identifier: &str) -> bool {
        self.id == identifier || self.url == identifier
    }
}

/// Circular neighbours of a project; both `None` when the id is unknown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjacentProjects<'a> {
    pub prev: Option<&'a Project>,
    pub next: Option<&'a Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "scalar_string")]
    pub company: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub dates: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub description: String,
    #[serde(default, deserialize_with = "truthy")]
    pub featured: bool,
    #[serde(default, deserialize_with = "string_list")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(default, deserialize_with = "string_list")]
    pub skills: Vec<String>,
    /// Proficiency level -> skill names, in source key order
    #[serde(default)]
    pub skill_levels: Option<Map<String, Value>>,
}

impl SkillCategory {
    /// Level groups in source order; non-list entries are skipped
    pub fn levels(&self) -> Vec<(&str, Vec<String>)> {
        self.skill_levels
            .iter()
            .flat_map(|levels| levels.iter())
            .filter_map(|(level, skills)| {
                let names = skills.as_array()?.iter().filter_map(scalar_text).collect();
                Some((level.as_str(), names))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accolades {
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Accolades {
    pub fn is_empty(&self) -> bool {
        self.awards.is_empty() && self.features.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Award {
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub issuer: String,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub publication: String,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub logo: String,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One card of the about-page carousel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutCard {
    #[serde(default, deserialize_with = "scalar_string")]
    pub id: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub description: String,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    #[serde(default, deserialize_with = "scalar_string")]
    pub id: String,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub description: String,
    #[serde(default, deserialize_with = "string_list")]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    #[serde(default, deserialize_with = "scalar_string")]
    pub id: String,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub step: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub description: String,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub meta: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "scalar_string")]
    pub id: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub quote: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub role: String,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    #[serde(default, deserialize_with = "scalar_string")]
    pub id: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub summary: String,
    #[serde(default)]
    pub sections: Vec<CaseStudySection>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseStudySection {
    #[serde(default, deserialize_with = "scalar_string")]
    pub heading: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub body: String,
    #[serde(default, deserialize_with = "string_list")]
    pub images: Vec<String>,
}

/// Everything `load_all` produces, normalized to typed defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteContent {
    pub person: Option<Person>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillCategory>,
    pub accolades: Accolades,
    pub brands: Vec<Brand>,
    pub about_carousel: Vec<AboutCard>,
    pub capabilities: Vec<Capability>,
    pub process: Vec<ProcessStep>,
    pub testimonials: Vec<Testimonial>,
}

// ============================================================================
// Lenient field decoders
// ============================================================================

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).unwrap_or_default())
}

fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).filter(|s| !s.is_empty()))
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

/// Loose truthiness: `true`, non-zero numbers, non-empty strings, containers
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
