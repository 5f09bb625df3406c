pub mod assignment_repository;
pub mod class_repository;
pub mod faculty_repository;
pub mod mark_repository;
pub mod stats_repository;
pub mod student_repository;
pub mod subject_repository;

pub use assignment_repository::AssignmentRepository;
pub use class_repository::ClassRepository;
pub use faculty_repository::FacultyRepository;
pub use mark_repository::MarkRepository;
pub use stats_repository::StatsRepository;
pub use student_repository::StudentRepository;
pub use subject_repository::SubjectRepository;
