use crate::config;

pub fn api_url(path: &str) -> String {
    match config::get() {
        // Use absolute URL
        Some(config) => config.url_for(path),
        // Not initialised yet, keep the path relative
        None => path.to_string(),
    }
}
