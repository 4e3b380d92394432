pub mod query;
pub mod supabase;

pub use query::RestQuery;
pub use supabase::SupabaseClient;
