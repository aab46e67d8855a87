//! In-process implementation of link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::LinkRepository;

/// Link repository backed by a concurrent hash map.
///
/// Inserts go through the map's entry API, which holds the shard lock for
/// the key while deciding, so two writers can never both claim a code.
/// Expired links are kept; nothing is ever removed.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, Link>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, RepositoryError> {
        match self.links.entry(new_link.short_code.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::UniqueViolation(new_link.short_code)),
            Entry::Vacant(slot) => {
                let link = new_link.into_link();
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, RepositoryError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
