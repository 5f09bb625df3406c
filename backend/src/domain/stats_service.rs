use shared::{DashboardStats, DatabaseDiagnostics};
use tracing::info;

use crate::error::RecordsResult;
use crate::storage::{DbConnection, StatsRepository};

/// Rows fetched when probing the students table
const DIAGNOSTIC_FETCH_LIMIT: i64 = 10;
/// Rows echoed back in the diagnostics payload
const DIAGNOSTIC_SAMPLE_SIZE: usize = 2;

#[derive(Clone)]
pub struct StatsService {
    repository: StatsRepository,
}

impl StatsService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: StatsRepository::new(db),
        }
    }

    pub async fn dashboard_stats(&self) -> RecordsResult<DashboardStats> {
        let stats = self.repository.counts().await?;
        info!("Dashboard stats: {:?}", stats);
        Ok(stats)
    }

    /// Connectivity probe: table list plus a peek at the students table
    pub async fn diagnostics(&self) -> RecordsResult<DatabaseDiagnostics> {
        let tables = self.repository.table_names().await?;
        let students_table_exists = tables.iter().any(|t| t == "students");

        let mut student_sample = self.repository.student_sample(DIAGNOSTIC_FETCH_LIMIT).await?;
        let student_count = student_sample.len();
        student_sample.truncate(DIAGNOSTIC_SAMPLE_SIZE);

        Ok(DatabaseDiagnostics {
            database_connection: "success".to_string(),
            tables,
            students_table_exists,
            student_count,
            student_sample,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_demo_data;

    #[tokio::test]
    async fn test_diagnostics_on_empty_database() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let service = StatsService::new(db);

        let diagnostics = service.diagnostics().await.unwrap();
        assert_eq!(diagnostics.database_connection, "success");
        assert!(diagnostics.students_table_exists);
        assert_eq!(diagnostics.student_count, 0);
        assert!(diagnostics.student_sample.is_empty());
    }

    #[tokio::test]
    async fn test_diagnostics_caps_count_and_sample() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        seed_demo_data(&db).await.unwrap();
        let service = StatsService::new(db);

        let diagnostics = service.diagnostics().await.unwrap();
        assert_eq!(diagnostics.student_count, 10);
        assert_eq!(diagnostics.student_sample.len(), 2);

        let stats = service.dashboard_stats().await.unwrap();
        assert_eq!(stats.student_count, 21);
        assert_eq!(stats.subject_count, 12);
    }
}
