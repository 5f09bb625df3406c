//! Business rules over the storage layer: required-field validation, not-found
//! mapping, mark totals, CSV export, dashboard stats and demo seeding.

pub mod assignment_service;
pub mod class_service;
pub mod export_service;
pub mod faculty_service;
pub mod mark_service;
pub mod seed;
pub mod stats_service;
pub mod student_service;
pub mod subject_service;

pub use assignment_service::AssignmentService;
pub use class_service::ClassService;
pub use export_service::{ExportService, StudentExport};
pub use faculty_service::FacultyService;
pub use mark_service::MarkService;
pub use seed::{seed_demo_data, SeedSummary};
pub use stats_service::StatsService;
pub use student_service::StudentService;
pub use subject_service::SubjectService;
