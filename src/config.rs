use serde::Deserialize;
use std::fmt;

#[derive(Clone, Deserialize)]
pub struct Config {
    pub airtable_api_key: String,
    pub airtable_base: String,
    pub airtable_table: String,
    pub auth_login: String,
    pub auth_password: String,

    #[serde(default = "default_api_url")]
    pub airtable_api_url: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("airtable_api_key", &"***")
            .field("airtable_base", &self.airtable_base)
            .field("airtable_table", &self.airtable_table)
            .field("auth_login", &self.auth_login)
            .field("auth_password", &"***")
            .field("airtable_api_url", &self.airtable_api_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

fn default_api_url() -> String {
    "https://api.airtable.com/v0".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}
