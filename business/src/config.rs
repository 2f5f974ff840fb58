use ustr::Ustr;

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            // On the web the UI is served next to the relay, so relative
            // requests reach it. Native builds talk to a local relay.
            api_base_url: if cfg!(target_arch = "wasm32") {
                "".to_string()
            } else {
                "http://127.0.0.1:5000".to_string()
            },
        }
    }
}
