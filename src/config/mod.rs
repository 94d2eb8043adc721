mod env_overrides;
mod loader;
mod schema;
#[cfg(test)]
pub(crate) mod test_env;

pub use env_overrides::API_KEY_VARS;
pub use schema::{Config, DEFAULT_API_BASE_URL};
