//! Business logic services

pub mod catalog_service;
pub mod filter_service;
pub mod handle_service;
pub mod problem_service;
pub mod sheet_service;

pub use catalog_service::CatalogService;
pub use filter_service::FilterService;
pub use handle_service::HandleService;
pub use problem_service::ProblemService;
pub use sheet_service::SheetService;
