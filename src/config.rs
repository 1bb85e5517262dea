use std::env;

/// Values every handler may need, loaded once in main and shared as app data.
#[derive(Clone)]
pub struct AppConfig {
    pub admin_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let admin_secret = env::var("ADMIN_SECRET_KEY").expect("ADMIN_SECRET_KEY must be set");
        Self { admin_secret }
    }
}
