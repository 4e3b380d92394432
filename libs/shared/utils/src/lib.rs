pub mod extractor;
pub mod state;
pub mod test_utils;

pub use extractor::ValidatedJson;
pub use state::AppState;
