pub mod api;
pub mod config;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use log::info;
    use shared::ConfigError;
    use wasm_bindgen::prelude::*;

    use crate::config::{self, BrowserLocation};

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        // Initialize logging
        wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
        console_error_panic_hook::set_once();
        info!("Logger and panic hook initialized");

        let config = config::init(&BrowserLocation);
        info!("Frontend ready, API at {}", config.api_url());
        Ok(())
    }

    /// Resolved API base URL, e.g. `http://localhost:8000`
    #[wasm_bindgen(js_name = apiUrl)]
    pub fn api_url() -> String {
        config::init(&BrowserLocation).api_url().to_string()
    }

    /// Resolved endpoint as `{"scheme","host","port"}` JSON
    #[wasm_bindgen(js_name = endpointJson)]
    pub fn endpoint_json() -> Result<String, JsValue> {
        let config = config::init(&BrowserLocation);
        serde_json::to_string(config.endpoint())
            .map_err(|e| JsValue::from_str(&ConfigError::from(e).to_string()))
    }
}
