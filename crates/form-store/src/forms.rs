// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Form document types and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::FormStoreError;

/// Number of forms returned per listing page
pub const PAGE_SIZE: usize = 20;

/// A form submission as received from a client
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewForm {
    /// Submitter name
    pub name: String,
    /// Contact email, matched against `uid` filters on listing
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Optional free-text bio
    pub bio: Option<String>,
}

impl NewForm {
    /// Check required fields before a document is created.
    ///
    /// # Errors
    ///
    /// Returns `FormStoreError::Validation` naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), FormStoreError> {
        if self.name.trim().is_empty() {
            return Err(FormStoreError::Validation("name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(FormStoreError::Validation("email is required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(FormStoreError::Validation(
                "email must be a valid address".to_string(),
            ));
        }
        if self.phone.trim().is_empty() {
            return Err(FormStoreError::Validation("phone is required".to_string()));
        }
        Ok(())
    }
}

/// A stored form document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormRecord {
    /// Generated document id
    pub id: Uuid,
    /// Submitter name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Optional free-text bio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Address the submission arrived from
    pub ip: String,
    /// Submission timestamp
    pub created_at: DateTime<Utc>,
}

impl FormRecord {
    /// Build a record from a validated submission.
    pub fn from_submission(form: NewForm, ip: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: form.name,
            email: form.email,
            phone: form.phone,
            bio: form.bio,
            ip,
            created_at: Utc::now(),
        }
    }
}

/// Starting index into the ordered form list for a 1-based page number.
///
/// Page 0 is treated as page 1 rather than rejected.
pub(crate) fn page_offset(page: usize) -> usize {
    page.saturating_sub(1) * PAGE_SIZE
}

/// Select one listing page from ordered records, keeping only forms whose
/// email contains `uid`.
pub(crate) fn filter_page(records: Vec<FormRecord>, uid: &str, page: usize) -> Vec<FormRecord> {
    records
        .into_iter()
        .filter(|record| record.email.contains(uid))
        .skip(page_offset(page))
        .take(PAGE_SIZE)
        .collect()
}
