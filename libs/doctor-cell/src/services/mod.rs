pub mod catalog;
pub mod doctor;

pub use catalog::CatalogService;
pub use doctor::DoctorService;
