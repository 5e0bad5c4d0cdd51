use libregform::domain::registration::{controller::RevalidateMode, messages::Locale};

/// Runtime environment for the form.
#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
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
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Form {
    pub locale: Locale,
    #[serde(default)]
    pub revalidate: RevalidateMode,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Telemetry {
    pub name: String,
    pub filter: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub form: Form,
    pub telemetry: Telemetry,
}

impl Configuration {
    /// Loads `configuration/base.yaml`, the environment's overlay and then
    /// `<KEY>_*` environment variables.
    ///
    /// The environment is read from `<KEY>_ENVIRONMENT` and defaults to `local`.
    pub fn parse(key: &str) -> Result<Configuration, config::ConfigError> {
        let key = key.to_uppercase();
        let base_path =
            std::env::current_dir().map_err(|err| config::ConfigError::Foreign(Box::new(err)))?;
        let configuration_directory = base_path.join("configuration");

        let environment: Environment = std::env::var(format!("{}_ENVIRONMENT", key))
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(config::ConfigError::Message)?;
        let environment_filename = format!("{}.yaml", environment.as_str());

        let conf = config::Config::builder()
            .add_source(config::File::from(
                configuration_directory.join("base.yaml"),
            ))
            .add_source(config::File::from(
                configuration_directory.join(environment_filename),
            ))
            // E.g. `REGFORM_FORM__LOCALE=en` sets `Configuration.form.locale`.
            .add_source(
                config::Environment::with_prefix(&key)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        conf.try_deserialize::<Configuration>()
    }
}
