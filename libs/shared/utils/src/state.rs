use std::sync::Arc;

use shared_config::AppConfig;
use shared_database::SupabaseClient;

/// State handed to every router. Holds the only store handle in the process.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub supabase: SupabaseClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let supabase = SupabaseClient::new(&config);
        Self {
            config: Arc::new(config),
            supabase,
        }
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
