// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Redis-backed form persistence

use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use serde_json::json;
use tracing::{debug, info};

use crate::error::FormStoreError;
use crate::forms::{FormRecord, NewForm, filter_page};

const FORMS_HASH_KEY: &str = "extera:forms";
const FORMS_ORDER_KEY: &str = "extera:forms:order";
const SETTINGS_KEY: &str = "settings";

/// Configuration for the form store
#[derive(Debug, Clone)]
pub struct FormStoreConfig {
    /// Redis connection URL
    pub url: String,
}

impl Default for FormStoreConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
        }
    }
}

/// Redis-backed store for intake forms and the settings blob
///
/// The multiplexed connection is cheap to clone; every operation clones it
/// so the store itself can be shared behind `&self`.
#[derive(Debug, Clone)]
pub struct FormStore {
    connection: MultiplexedConnection,
}

impl FormStore {
    /// Connect to Redis and bootstrap the settings blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the connection cannot be
    /// established.
    pub async fn connect(config: &FormStoreConfig) -> Result<Self, FormStoreError> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection = client.get_multiplexed_async_connection().await?;

        let store = Self { connection };
        store.ensure_settings().await?;
        info!("form store connected");
        Ok(store)
    }

    /// Validate a submission and persist it, returning the stored document.
    pub async fn create_form(
        &self,
        form: NewForm,
        ip: String,
    ) -> Result<FormRecord, FormStoreError> {
        form.validate()?;

        let record = FormRecord::from_submission(form, ip);
        let id = record.id.to_string();
        let document = serde_json::to_string(&record)?;

        let mut connection = self.connection.clone();
        let _: () = connection.hset(FORMS_HASH_KEY, &id, document).await?;
        let _: () = connection.rpush(FORMS_ORDER_KEY, &id).await?;

        debug!(form_id = %record.id, "stored form");
        Ok(record)
    }

    /// List forms whose email contains `uid`, in insertion order, one page
    /// at a time.
    pub async fn get_forms(
        &self,
        uid: &str,
        page: usize,
    ) -> Result<Vec<FormRecord>, FormStoreError> {
        let mut connection = self.connection.clone();
        let ids: Vec<String> = connection.lrange(FORMS_ORDER_KEY, 0, -1).await?;

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            let document: Option<String> = connection.hget(FORMS_HASH_KEY, &id).await?;
            // An id without a document means a partially removed form;
            // skip it rather than failing the whole listing
            if let Some(document) = document {
                records.push(serde_json::from_str(&document)?);
            }
        }

        Ok(filter_page(records, uid, page))
    }

    /// Write the default settings blob if none exists yet.
    async fn ensure_settings(&self) -> Result<(), FormStoreError> {
        let mut connection = self.connection.clone();
        let existing: Option<String> = connection.get(SETTINGS_KEY).await?;
        if existing.is_some() {
            return Ok(());
        }

        let defaults = json!({
            "banners": [{ "img": "", "src": "" }],
            "campaigns": [{ "img": "", "src": "", "message": "" }],
            "notifications": [{ "img": "", "src": "", "message": "" }],
        });
        let _: () = connection
            .set(SETTINGS_KEY, serde_json::to_string(&defaults)?)
            .await?;

        debug!("bootstrapped default settings");
        Ok(())
    }
}
