use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use foodcheck_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_MAX_UPLOAD_BYTES,
    DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, FoodcheckConfig, LLMConfig, UploadConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodcheck", version, about = "Food photo ingredient and allergen identifier")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub upload: UploadArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Analyze a local image once and print the results
    Analyze {
        /// Path of the image to analyze
        path: PathBuf,
    },
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix applied to every route, e.g. `/foodcheck`
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5000"
    )]
    pub allowed_origins: Vec<String>,

    /// Expose Prometheus metrics on `/metrics`
    #[arg(long, env = "METRICS_ENABLED", action = ArgAction::Set, default_value_t = true)]
    pub metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    /// Enables the fun fact endpoint when set
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_OPENAI_MODEL)]
    pub openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_BASE_URL)]
    pub openai_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct UploadArgs {
    #[arg(long, env = "UPLOAD_FOLDER", default_value = "uploads")]
    pub upload_folder: PathBuf,

    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    #[arg(long, env = "KEEP_UPLOADS", default_value_t = false)]
    pub keep_uploads: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// `tracing_subscriber::EnvFilter` directive
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl From<Args> for FoodcheckConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
                openai_base_url: args.llm.openai_base_url,
            },
            upload: UploadConfig {
                folder: args.upload.upload_folder,
                max_bytes: args.upload.max_upload_bytes,
                keep_uploads: args.upload.keep_uploads,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_flask_prototype() {
        let args = Args::try_parse_from(["foodcheck", "--gemini-api-key", "k"]).unwrap();

        assert!(args.command.is_none());
        assert_eq!(args.server.host, "127.0.0.1");
        assert_eq!(args.server.port, 5000);
        assert_eq!(args.upload.upload_folder, PathBuf::from("uploads"));
        assert_eq!(args.upload.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(args.llm.gemini_model, "gemini-2.5-flash");
        assert!(args.server.metrics);
    }

    #[test]
    fn parses_analyze_subcommand_and_origins() {
        let args = Args::try_parse_from([
            "foodcheck",
            "--gemini-api-key",
            "k",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "analyze",
            "food.jpg",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
        match args.command {
            Some(Command::Analyze { path }) => assert_eq!(path, PathBuf::from("food.jpg")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn converts_into_core_config() {
        let args = Args::try_parse_from([
            "foodcheck",
            "--gemini-api-key",
            "g",
            "--openai-api-key",
            "o",
            "--keep-uploads",
        ])
        .unwrap();

        let config = FoodcheckConfig::from(args);

        assert_eq!(config.llm.gemini_api_key, "g");
        assert_eq!(config.llm.openai_api_key.as_deref(), Some("o"));
        assert!(config.upload.keep_uploads);
    }
}
