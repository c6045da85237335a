use crate::domain::values::credentials::Credentials;
use crate::domain::values::output_language::OutputLanguage;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::info;
use uuid::Uuid;

/// State of one interactive session. Credentials live only here and go
/// away with it; nothing is written to disk.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    credentials: Credentials,
    language: OutputLanguage,
    runs: AtomicU32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub runs: u32,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

impl Session {
    pub fn start(credentials: Credentials, language: OutputLanguage) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            credentials,
            language,
            runs: AtomicU32::new(0),
        };
        info!(session = %session.id, language = %language, "Session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn language(&self) -> OutputLanguage {
        self.language
    }

    pub fn runs(&self) -> u32 {
        self.runs.load(Ordering::Relaxed)
    }

    /// Returns the 1-based number of the run being started.
    pub(crate) fn next_run(&self) -> u32 {
        self.runs.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Ends the session, dropping its credentials.
    pub fn end(self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            runs: self.runs(),
            started_at: self.started_at,
            ended_at: Utc::now(),
        }
    }
}
