//! Page configuration: endpoints, timings, thresholds, and DOM names.
//!
//! Defaults reproduce the behaviour of the static landing page. The API base
//! can be overridden per deployment with a
//! `<meta name="educare-api-base" content="https://...">` tag.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

pub const API_BASE_META_NAME: &str = "educare-api-base";
pub const REGISTER_PATH: &str = "/auth/register";
pub const DEFAULT_LOGIN_URL: &str = "/token";
pub const DEFAULT_SUCCESS_CLOSE_DELAY_MS: u32 = 2000;
pub const DEFAULT_SIDEBAR_TRANSITION_MS: u32 = 220;
pub const DEFAULT_HEADER_COMPACT_THRESHOLD: f64 = 100.0;
pub const SIDEBAR_STORAGE_KEY: &str = "sidebarCollapsed";

/// Element ids the registration modal attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalIds {
    pub open_button: &'static str,
    pub modal: &'static str,
    pub close_button: &'static str,
    pub form: &'static str,
    pub submit_button: &'static str,
    pub message: &'static str,
    pub full_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub password: &'static str,
    pub role: &'static str,
}

impl Default for ModalIds {
    fn default() -> Self {
        Self {
            open_button: "registerBtn",
            modal: "registrationModal",
            close_button: "closeBtn",
            form: "registrationForm",
            submit_button: "submitBtn",
            message: "message",
            full_name: "fullName",
            email: "email",
            phone: "phone",
            password: "password",
            role: "role",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub api_base: String,
    pub login_url: String,
    pub success_close_delay_ms: u32,
    pub sidebar_transition_ms: u32,
    pub sidebar_storage_key: String,
    pub sidebar_selector: &'static str,
    pub content_selector: &'static str,
    pub sidebar_toggle_selector: &'static str,
    pub header_selector: &'static str,
    pub header_compact_threshold: f64,
    pub header_padding_compact: &'static str,
    pub header_padding_default: &'static str,
    pub reveal_selector: &'static str,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub modal_ids: ModalIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            login_url: DEFAULT_LOGIN_URL.to_owned(),
            success_close_delay_ms: DEFAULT_SUCCESS_CLOSE_DELAY_MS,
            sidebar_transition_ms: DEFAULT_SIDEBAR_TRANSITION_MS,
            sidebar_storage_key: SIDEBAR_STORAGE_KEY.to_owned(),
            sidebar_selector: ".sidebar",
            content_selector: ".content",
            sidebar_toggle_selector: "[data-toggle=\"sidebar\"]",
            header_selector: "header",
            header_compact_threshold: DEFAULT_HEADER_COMPACT_THRESHOLD,
            header_padding_compact: "0.8rem 5%",
            header_padding_default: "1.2rem 5%",
            reveal_selector: ".feature-card, .location-card, .stat-item",
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -100px 0px",
            modal_ids: ModalIds::default(),
        }
    }
}

impl PageConfig {
    /// Replace the API base. Trailing slashes are trimmed; blank input keeps
    /// the current base.
    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        if let Some(base) = normalize_api_base(base) {
            self.api_base = base;
        }
        self
    }

    /// URL of the account-creation endpoint.
    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}{REGISTER_PATH}", self.api_base)
    }

    /// Defaults plus any override declared in the live document.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document() -> Self {
        use wasm_bindgen::JsCast;

        let config = Self::default();
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return config;
        };
        let selector = format!("meta[name=\"{API_BASE_META_NAME}\"]");
        let base = document
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content());
        match base {
            Some(base) => {
                log::debug!("api base override from meta tag: {base}");
                config.with_api_base(&base)
            }
            None => config,
        }
    }
}

fn normalize_api_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.trim_end_matches('/').to_owned())
}
