//! PostgreSQL implementation of SettingsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::ScheduleConfig;
use club_core::traits::{RepoResult, SettingsRepository};

use crate::mappers::SettingsInsert;
use crate::models::SettingsModel;

use super::error::map_db_error;

const SETTINGS_COLUMNS: &str = r"
    id, active_days,
    sunday_time_options, monday_time_options, tuesday_time_options,
    wednesday_time_options, thursday_time_options, friday_time_options,
    saturday_time_options, created_at
";

/// PostgreSQL implementation of SettingsRepository
#[derive(Clone)]
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    /// Create a new PgSettingsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    #[instrument(skip(self))]
    async fn latest(&self) -> RepoResult<Option<ScheduleConfig>> {
        let query = format!(
            "SELECT {SETTINGS_COLUMNS} FROM settings ORDER BY created_at DESC, id DESC LIMIT 1"
        );
        let result = sqlx::query_as::<_, SettingsModel>(&query)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(ScheduleConfig::from))
    }

    #[instrument(skip(self, config))]
    async fn save(&self, config: &ScheduleConfig) -> RepoResult<ScheduleConfig> {
        let insert = SettingsInsert::new(config);
        let [sun, mon, tue, wed, thu, fri, sat] = insert.time_options;

        let query = format!(
            r"
            INSERT INTO settings (
                active_days,
                sunday_time_options, monday_time_options, tuesday_time_options,
                wednesday_time_options, thursday_time_options, friday_time_options,
                saturday_time_options
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {SETTINGS_COLUMNS}
            "
        );
        let model = sqlx::query_as::<_, SettingsModel>(&query)
            .bind(insert.active_days)
            .bind(sun)
            .bind(mon)
            .bind(tue)
            .bind(wed)
            .bind(thu)
            .bind(fri)
            .bind(sat)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(ScheduleConfig::from(model))
    }
}
