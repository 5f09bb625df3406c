//! # Records Backend
//!
//! REST server for the department records manager.
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (REST handlers)
//!     ↓
//! Domain Layer (services, export, stats, seeding)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

pub use config::AppConfig;
pub use domain::*;
pub use error::{RecordsError, RecordsResult};
pub use storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub student_service: StudentService,
    pub faculty_service: FacultyService,
    pub subject_service: SubjectService,
    pub class_service: ClassService,
    pub assignment_service: AssignmentService,
    pub mark_service: MarkService,
    pub export_service: ExportService,
    pub stats_service: StatsService,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self {
            student_service: StudentService::new(db.clone()),
            faculty_service: FacultyService::new(db.clone()),
            subject_service: SubjectService::new(db.clone()),
            class_service: ClassService::new(db.clone()),
            assignment_service: AssignmentService::new(db.clone()),
            mark_service: MarkService::new(db.clone()),
            export_service: ExportService::new(db.clone()),
            stats_service: StatsService::new(db),
        }
    }
}

/// Open the database, optionally seed it, and build the services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    if config.seed_demo_data {
        info!("Seeding demo data");
        seed_demo_data(&db).await.context("Failed to seed demo data")?;
    }

    info!("Setting up application state");
    Ok(AppState::new(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid FRONTEND_ORIGIN: {}", config.frontend_origin))?;

    // CORS setup to allow the frontend dev server to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/students", get(io::list_students).post(io::create_student))
        .route(
            "/students/:usn",
            get(io::get_student).patch(io::update_student).delete(io::delete_student),
        )
        .route("/faculty", get(io::list_faculty).post(io::create_faculty))
        .route("/subjects", get(io::list_subjects).post(io::create_subject))
        .route("/classes", get(io::list_classes).post(io::create_class))
        .route("/assignments", get(io::list_assignments).post(io::create_assignment))
        .route("/marks", get(io::list_marks).post(io::create_mark))
        .route("/export/students", get(io::export_students))
        .route("/stats", get(io::dashboard_stats))
        .route("/debug-db", get(io::debug_db))
        .route("/logs", post(io::log_message));

    Ok(Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .with_state(app_state))
}
