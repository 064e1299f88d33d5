//! Utilities
use log::*;
use std::env;

/// Resolve a setting: the command line option wins, then the environment variable
/// (which can be set via `.env` with `dotenv().ok()`), then the default.
pub fn set_option(
    option: &Option<String>,
    env_name: &str,
    default: &str,
) -> String
{
    if let Some(value) = option {
        info!("{} argument set: using: {}", env_name, value);
        return value.to_string();
    }
    match env::var(env_name) {
        Ok(set_var) => {
            info!("{} not set as argument: set via .env: {}", env_name, set_var);
            set_var
        }
        Err(_e) => {
            info!("{} not set as argument and not set via .env: using default: {}", env_name, default);
            default.to_string()
        }
    }
}

/// Same as [set_option], but without a default: an unset or empty value returns None.
/// This is used for secrets, so the value itself is not logged.
pub fn set_optional_secret(
    option: &Option<String>,
    env_name: &str,
) -> Option<String>
{
    let value = match option {
        Some(value) => {
            info!("{} argument set", env_name);
            Some(value.to_string())
        }
        None => env::var(env_name).ok(),
    };
    value.filter(|value| !value.is_empty())
}
