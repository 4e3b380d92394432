pub mod intake;

pub use intake::ContactIntakeService;
