//! Cache Key Builders
//!
//! Every cached variant of a resource lives under `"<resource>:"`, so a single
//! `invalidate_pattern(resource.prefix())` after a write drops all of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

// == Resource ==
/// Read-heavy content collections served through the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Projects,
    Services,
    Team,
    Blogs,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Projects,
        Resource::Services,
        Resource::Team,
        Resource::Blogs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Projects => "projects",
            Resource::Services => "services",
            Resource::Team => "team",
            Resource::Blogs => "blogs",
        }
    }

    /// Prefix shared by every key of this resource.
    pub fn prefix(self) -> String {
        format!("{}:", self.as_str())
    }

    /// Key for the full listing.
    pub fn all(self) -> String {
        format!("{}:all", self.as_str())
    }

    pub fn by_id(self, id: impl fmt::Display) -> String {
        format!("{}:{}", self.as_str(), id)
    }

    pub fn by_slug(self, slug: &str) -> String {
        format!("{}:slug:{}", self.as_str(), slug)
    }

    pub fn by_category(self, category: &str) -> String {
        format!("{}:category:{}", self.as_str(), category)
    }

    pub fn by_department(self, department: &str) -> String {
        format!("{}:department:{}", self.as_str(), department)
    }

    pub fn featured(self) -> String {
        format!("{}:featured", self.as_str())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| CacheError::InvalidRequest(format!("Unknown resource: {}", s)))
    }
}
