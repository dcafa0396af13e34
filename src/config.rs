use std::env;

use crate::models::BusinessHours;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    /// Shared static passphrase for the admin listing. A capability check
    /// for single-operator deployments, not a security boundary.
    pub admin_passphrase: String,
    pub business_name: String,
    pub location: String,
    pub hours: BusinessHours,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let breaks = match env::var("BREAKS") {
            Ok(json) => BusinessHours::breaks_from_json(&json).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring invalid BREAKS configuration");
                Vec::new()
            }),
            Err(_) => Vec::new(),
        };

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "slotbook.db".to_string()),
            admin_passphrase: env::var("ADMIN_PASSPHRASE")
                .unwrap_or_else(|_| "changeme".to_string()),
            business_name: env::var("BUSINESS_NAME").unwrap_or_else(|_| "Slotbook".to_string()),
            location: env::var("LOCATION")
                .unwrap_or_else(|_| "Via Esempio 12, Milano".to_string()),
            hours: BusinessHours {
                start_hour: env::var("START_HOUR")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(9),
                end_hour: env::var("END_HOUR")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(18),
                slot_minutes: env::var("SLOT_MINUTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
                breaks,
            },
        }
    }
}
