//! Domain types and pure logic for looking up federal representatives and
//! rendering advocacy scripts.

pub mod app_config;
pub mod config;
pub mod error;
pub mod issues;
pub mod representative;
pub mod script;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError, ValidationError};
pub use issues::{Issue, IssueSelection};
pub use representative::{Chamber, FieldOffice, Representative};
pub use script::{generate_script, ContactMethod, ScriptRequest};
