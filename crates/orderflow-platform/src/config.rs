use anyhow::{Context, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unsupported log format: {other}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FunctionConfig {
    pub function_name: String,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl FunctionConfig {
    pub fn from_env(default_function_name: &str, default_log_filter: &str) -> Result<Self> {
        Self::from_lookup(default_function_name, default_log_filter, |key| {
            std::env::var(key).ok()
        })
    }

    pub fn from_lookup<F>(
        default_function_name: &str,
        default_log_filter: &str,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let function_name = lookup("AWS_LAMBDA_FUNCTION_NAME")
            .unwrap_or_else(|| default_function_name.to_string());
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| default_log_filter.to_string());
        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => LogFormat::parse(&raw).context("LOG_FORMAT must be text or json")?,
            None => LogFormat::Text,
        };

        Ok(Self {
            function_name,
            log_filter,
            log_format,
        })
    }
}
