//! Repository Tests
//!
//! Tests for LeadRepository against the in-memory table.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Lead, NewLead};
    use crate::repository::{LeadRepository, Repository};
    use lead_core::LeadStatus;

    fn new_lead(name: &str, email: &str) -> NewLead {
        NewLead {
            name: name.to_string(),
            email: email.to_string(),
            status: LeadStatus::New,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let repo = LeadRepository::new();

        let a = repo.insert(new_lead("Ada", "ada@x.com")).await.expect("Failed to create");
        let b = repo.insert(new_lead("Bob", "bob@x.com")).await.expect("Failed to create");

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = LeadRepository::new();
        repo.insert(new_lead("Cy", "cy@x.com")).await.unwrap();
        repo.insert(new_lead("Ada", "ada@x.com")).await.unwrap();

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Cy", "Ada"]);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = LeadRepository::new();
        repo.insert(new_lead("Ada", "ada@x.com")).await.unwrap();

        let err = repo.insert(new_lead("Ada Two", "ADA@x.com")).await.unwrap_err();
        assert_eq!(err, DomainError::Conflict("Email already exists".to_string()));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_lead() {
        let repo = LeadRepository::new();
        let created = repo.insert(new_lead("To delete", "del@x.com")).await.unwrap();

        repo.delete(&created.id).await.expect("Delete failed");

        let remaining: Vec<Lead> = repo.list().await.unwrap();
        assert!(remaining.iter().all(|l| l.id != created.id));
        let err = repo.delete(&created.id).await.unwrap_err();
        assert_eq!(err.to_string(), "Lead not found");
    }
}
