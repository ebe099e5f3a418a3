//! Lead Repository Implementation
//!
//! In-memory implementation of Repository<Lead>. Email uniqueness is checked
//! under the same write lock as the insert.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Entity, Lead, NewLead};

/// In-memory lead table
#[derive(Clone, Default)]
pub struct LeadRepository {
    leads: Arc<RwLock<Vec<Lead>>>,
}

impl LeadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a fresh id and store the lead
    pub async fn insert(&self, new_lead: NewLead) -> DomainResult<Lead> {
        let id = uuid::Uuid::new_v4().to_string();
        self.create(new_lead.into_lead(id)).await
    }

    pub async fn len(&self) -> usize {
        self.leads.read().await.len()
    }
}

#[async_trait]
impl Repository<Lead> for LeadRepository {
    async fn create(&self, lead: Lead) -> DomainResult<Lead> {
        let mut leads = self.leads.write().await;
        if leads.iter().any(|l| l.id() == lead.id()) {
            return Err(DomainError::Conflict(format!("Lead {} already exists", lead.id())));
        }
        if leads.iter().any(|l| l.email.eq_ignore_ascii_case(&lead.email)) {
            return Err(DomainError::Conflict("Email already exists".to_string()));
        }
        leads.push(lead.clone());
        Ok(lead)
    }

    async fn list(&self) -> DomainResult<Vec<Lead>> {
        Ok(self.leads.read().await.clone())
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        let mut leads = self.leads.write().await;
        let before = leads.len();
        leads.retain(|l| l.id() != id);
        if leads.len() == before {
            return Err(DomainError::NotFound("Lead not found".to_string()));
        }
        Ok(())
    }
}
