use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Port the mock listens on when no configuration file overrides it. Matches the port the
/// heartbeat clients under test are pointed at.
pub const DEFAULT_PORT: u16 = 6625;

/// All settings for the server. Currently there are only application settings, but in the future
/// there may be e.g. payload settings.
#[derive(Deserialize)]
pub struct Settings {
    /// Application settings.
    pub application: ApplicationSettings,
}

/// Application settings.
#[derive(Deserialize)]
pub struct ApplicationSettings {
    /// The port number on which the application will listen.
    pub port: u16,

    /// The hostname or IP address where the application will run.
    ///
    /// This is a `String` that specifies the network address at which the application is
    /// accessible. This could be a hostname like "localhost" or an IP address like
    /// "127.0.0.1".
    pub host: String,
}

/// Based on the `APP_ENVIRONMENT` environment variable, reads the corresponding configuration file
/// and returns the settings. The file is optional; without it the server binds `0.0.0.0:6625`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to get current directory");
    let config_dir = base_path.join("config");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");
    let environment_filename = format!("{}.toml", environment.as_str());

    let settings = Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", i64::from(DEFAULT_PORT))?
        .add_source(File::from(config_dir.join(environment_filename)).required(false))
        .build()?;
    settings.try_deserialize()
}

/// The possible runtime environments for the application.
pub enum Environment {
    /// Local development environment.
    Local,
    /// Production environment.
    Production,
}

impl Environment {
    /// Returns the environment as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Must be `local` or `production"
            )),
        }
    }
}
