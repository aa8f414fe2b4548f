use std::sync::Arc;

use shared::supabase::SupabaseClient;

use super::config::Config;

pub struct AppState {
    pub config: Config,
    /// Authenticated with the service-role key.
    pub supabase: SupabaseClient,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let supabase = SupabaseClient::new(&config.supabase_url, &config.service_role_key);

        Arc::new(Self { config, supabase })
    }
}
