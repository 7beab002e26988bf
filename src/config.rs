//! Layered application configuration.
//!
//! Priority, lowest to highest: built-in defaults, config file
//! (`./mongomuse.{yaml,toml,json}` or `--config`), `MUSE_`-prefixed
//! environment variables (e.g. `MUSE_BACKEND__PORT=4000`), CLI flags.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::backend::{DEFAULT_BACKEND_HOST, DEFAULT_BACKEND_PORT, Endpoint};
use crate::widget::DEFAULT_SAMPLE_PROMPTS;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind the widget server to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Host of the query backend
    #[arg(long)]
    pub backend_host: Option<String>,

    /// Port of the query backend
    #[arg(long, env = "BACKEND_PORT")]
    pub backend_port: Option<u16>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: Endpoint,
    pub widget: WidgetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

impl ServerConfig {
    /// `host:port` string for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Presentation settings for the widget.
#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    pub title: String,
    pub placeholder: String,
    pub sample_prompts: Vec<String>,
    pub idle_timeout_secs: u64,
}

impl WidgetConfig {
    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let sample_prompts: Vec<String> = DEFAULT_SAMPLE_PROMPTS
            .iter()
            .map(ToString::to_string)
            .collect();

        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("backend.host", DEFAULT_BACKEND_HOST)?
            .set_default("backend.port", i64::from(DEFAULT_BACKEND_PORT))?
            .set_default("widget.title", "MongoMuse.ai")?
            .set_default("widget.placeholder", "ask me anything about MongoDB...")?
            .set_default("widget.sample_prompts", sample_prompts)?
            .set_default("widget.idle_timeout_secs", 30 * 60)?;

        // Config file: explicit path must exist, ./mongomuse.* is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("mongomuse").required(false)),
        };

        // E.g. MUSE_BACKEND__PORT=4000, MUSE_WIDGET__SAMPLE_PROMPTS="a,b"
        builder = builder.add_source(
            Environment::with_prefix("MUSE")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("widget.sample_prompts")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.backend_host {
            builder = builder.set_override("backend.host", host)?;
        }
        if let Some(port) = cli.backend_port {
            builder = builder.set_override("backend.port", i64::from(port))?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
