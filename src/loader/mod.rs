//! Data Loading and Caching
//!
//! `DataLoader` is the single point of truth for fetched content within one
//! page session:
//! - `load_all()` fans out one request per resource, isolates each failure
//!   into that resource's empty default, and memoizes the result (first call
//!   wins, concurrent callers share the in-flight load)
//! - `load_case_study()` fills the single case-study slot on demand
//! - getters are pure reads that return empty defaults before loading

pub mod cache_buster;
pub mod location;
pub mod source;
pub mod types;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

pub use cache_buster::{next_stamp, with_cache_buster};
pub use location::{BasePath, PageLocation};
pub use source::{DirSource, HttpSource, MemorySource, ResourceSource};
pub use types::*;

static EMPTY_ACCOLADES: Accolades = Accolades {
    awards: Vec::new(),
    features: Vec::new(),
};

/// The fixed set of resources fetched by `load_all`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Person,
    Projects,
    Experience,
    Skills,
    Accolades,
    Brands,
    AboutCarousel,
    Capabilities,
    Process,
    Testimonials,
}

impl Resource {
    pub const ALL: [Resource; 10] = [
        Resource::Person,
        Resource::Projects,
        Resource::Experience,
        Resource::Skills,
        Resource::Accolades,
        Resource::Brands,
        Resource::AboutCarousel,
        Resource::Capabilities,
        Resource::Process,
        Resource::Testimonials,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Person => "person.json",
            Resource::Projects => "projects.json",
            Resource::Experience => "experience.json",
            Resource::Skills => "skills.json",
            Resource::Accolades => "accolades.json",
            Resource::Brands => "brands.json",
            Resource::AboutCarousel => "about-carousel.json",
            Resource::Capabilities => "capabilities.json",
            Resource::Process => "process.json",
            Resource::Testimonials => "testimonials.json",
        }
    }

    /// Top-level key holding the record list (whole document for person/accolades)
    pub fn list_key(&self) -> Option<&'static str> {
        match self {
            Resource::Person | Resource::Accolades => None,
            Resource::Projects => Some("projects"),
            Resource::Experience => Some("experience"),
            Resource::Skills => Some("skillCategories"),
            Resource::Brands => Some("brands"),
            Resource::AboutCarousel => Some("carouselCards"),
            Resource::Capabilities => Some("capabilities"),
            Resource::Process => Some("process"),
            Resource::Testimonials => Some("testimonials"),
        }
    }
}

#[derive(Default)]
struct CaseStudySlot {
    generation: u64,
    study: Option<Arc<CaseStudy>>,
}

/// Page-scoped content loader
///
/// Construct one per page and pass it by reference to whatever renders.
pub struct DataLoader {
    source: Arc<dyn ResourceSource>,
    location: PageLocation,
    base_path: BasePath,
    content: OnceCell<Arc<SiteContent>>,
    case_study: RwLock<CaseStudySlot>,
    case_study_requests: AtomicU64,
}

impl DataLoader {
    /// Create a loader for the page at `location`.
    ///
    /// The data directory (`data/` or `../data/`) is fixed here.
    pub fn new(source: Arc<dyn ResourceSource>, location: PageLocation) -> Self {
        let base_path = location.base_path();
        debug!(page = %location.path(), base = base_path.as_str(), "DataLoader::new");
        Self {
            source,
            location,
            base_path,
            content: OnceCell::new(),
            case_study: RwLock::new(CaseStudySlot::default()),
            case_study_requests: AtomicU64::new(0),
        }
    }

    pub fn base_path(&self) -> BasePath {
        self.base_path
    }

    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    pub fn is_loaded(&self) -> bool {
        self.content.initialized()
    }

    /// Fetch every resource once; later and concurrent calls share the result.
    pub async fn load_all(&self) -> Arc<SiteContent> {
        self.content
            .get_or_init(|| async { Arc::new(self.fetch_all().await) })
            .await
            .clone()
    }

    async fn fetch_all(&self) -> SiteContent {
        info!(page = %self.location.path(), "Loading site content...");

        let (
            person,
            projects,
            experience,
            skills,
            accolades,
            brands,
            about_carousel,
            capabilities,
            process,
            testimonials,
        ) = tokio::join!(
            self.fetch_resource(Resource::Person),
            self.fetch_resource(Resource::Projects),
            self.fetch_resource(Resource::Experience),
            self.fetch_resource(Resource::Skills),
            self.fetch_resource(Resource::Accolades),
            self.fetch_resource(Resource::Brands),
            self.fetch_resource(Resource::AboutCarousel),
            self.fetch_resource(Resource::Capabilities),
            self.fetch_resource(Resource::Process),
            self.fetch_resource(Resource::Testimonials),
        );

        let content = SiteContent {
            person: person.and_then(|doc| decode(Resource::Person.file_name(), doc)),
            projects: decode_list(Resource::Projects, projects),
            experience: decode_list(Resource::Experience, experience),
            skills: decode_list(Resource::Skills, skills),
            accolades: accolades
                .and_then(|doc| decode(Resource::Accolades.file_name(), doc))
                .unwrap_or_default(),
            brands: decode_list(Resource::Brands, brands),
            about_carousel: decode_list(Resource::AboutCarousel, about_carousel),
            capabilities: decode_list(Resource::Capabilities, capabilities),
            process: decode_list(Resource::Process, process),
            testimonials: decode_list(Resource::Testimonials, testimonials),
        };

        info!(
            projects = content.projects.len(),
            experience = content.experience.len(),
            skills = content.skills.len(),
            capabilities = content.capabilities.len(),
            testimonials = content.testimonials.len(),
            "Site content loaded"
        );
        content
    }

    async fn fetch_resource(&self, resource: Resource) -> Option<Value> {
        let relative = format!("{}{}", self.base_path.as_str(), resource.file_name());
        self.fetch_json(&relative).await
    }

    /// Fetch one page-relative path; every failure is logged and becomes `None`.
    async fn fetch_json(&self, relative: &str) -> Option<Value> {
        let busted = with_cache_buster(relative);
        let site_path = match self.location.resolve(&busted) {
            Ok(path) => path,
            Err(e) => {
                error!("Error loading {}: {}", relative, e);
                return None;
            }
        };

        match self.source.fetch_json(&site_path).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Error loading {}: {}", relative, e);
                None
            }
        }
    }

    /// Fetch `case-studies/<id>.json` into the case-study slot.
    ///
    /// Requests are numbered; a response that lands after a newer request was
    /// issued is returned to its caller but not stored.
    pub async fn load_case_study(&self, id: &str) -> Option<Arc<CaseStudy>> {
        let generation = self.case_study_requests.fetch_add(1, Ordering::SeqCst) + 1;
        let relative = format!(
            "{}case-studies/{}.json",
            self.base_path.as_str(),
            urlencoding::encode(id)
        );

        let study = self
            .fetch_json(&relative)
            .await
            .and_then(|doc| decode::<CaseStudy>("case study", doc))
            .map(Arc::new);

        let mut slot = self.case_study.write().unwrap_or_else(PoisonError::into_inner);
        if generation > slot.generation {
            slot.generation = generation;
            slot.study = study.clone();
        } else {
            debug!(
                id,
                generation,
                current = slot.generation,
                "Discarding stale case study response"
            );
        }
        study
    }

    // ========================================================================
    // Getters
    // ========================================================================

    fn loaded(&self) -> Option<&SiteContent> {
        self.content.get().map(|c| c.as_ref())
    }

    pub fn person(&self) -> Option<&Person> {
        self.loaded().and_then(|c| c.person.as_ref())
    }

    pub fn projects(&self) -> &[Project] {
        self.loaded().map(|c| c.projects.as_slice()).unwrap_or(&[])
    }

    /// Project whose id or url equals `identifier`
    pub fn project(&self, identifier: &str) -> Option<&Project> {
        self.projects().iter().find(|p| p.matches(identifier))
    }

    /// Circular previous/next projects around `identifier`
    pub fn adjacent_projects(&self, identifier: &str) -> AdjacentProjects<'_> {
        let projects = self.projects();
        let Some(index) = projects.iter().position(|p| p.matches(identifier)) else {
            return AdjacentProjects { prev: None, next: None };
        };

        let len = projects.len();
        AdjacentProjects {
            prev: projects.get((index + len - 1) % len),
            next: projects.get((index + 1) % len),
        }
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        self.loaded().map(|c| c.experience.as_slice()).unwrap_or(&[])
    }

    pub fn skills(&self) -> &[SkillCategory] {
        self.loaded().map(|c| c.skills.as_slice()).unwrap_or(&[])
    }

    pub fn accolades(&self) -> &Accolades {
        self.loaded().map(|c| &c.accolades).unwrap_or(&EMPTY_ACCOLADES)
    }

    pub fn brands(&self) -> &[Brand] {
        self.loaded().map(|c| c.brands.as_slice()).unwrap_or(&[])
    }

    pub fn about_carousel(&self) -> &[AboutCard] {
        self.loaded().map(|c| c.about_carousel.as_slice()).unwrap_or(&[])
    }

    pub fn capabilities(&self) -> &[Capability] {
        self.loaded().map(|c| c.capabilities.as_slice()).unwrap_or(&[])
    }

    pub fn process(&self) -> &[ProcessStep] {
        self.loaded().map(|c| c.process.as_slice()).unwrap_or(&[])
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        self.loaded().map(|c| c.testimonials.as_slice()).unwrap_or(&[])
    }

    pub fn case_study(&self) -> Option<Arc<CaseStudy>> {
        self.case_study
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .study
            .clone()
    }
}

/// Decode a whole document, logging and dropping it when malformed
fn decode<T: DeserializeOwned>(label: &str, doc: Value) -> Option<T> {
    match serde_json::from_value(doc) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Malformed {}: {}", label, e);
            None
        }
    }
}

/// Pull the record list out of its wrapper key; absent or malformed -> empty
fn decode_list<T: DeserializeOwned>(resource: Resource, doc: Option<Value>) -> Vec<T> {
    let Some(key) = resource.list_key() else {
        return Vec::new();
    };

    match doc.and_then(|mut d| d.get_mut(key).map(Value::take)) {
        Some(Value::Null) | None => Vec::new(),
        Some(list) => match serde_json::from_value(list) {
            Ok(records) => records,
            Err(e) => {
                warn!("Malformed {} ({}): {}", resource.file_name(), key, e);
                Vec::new()
            }
        },
    }
}
