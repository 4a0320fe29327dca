use super::*;

#[test]
fn default_config_matches_production_constants() {
    let config = ServerConfig::default();
    assert_eq!(config.paypal_base_url, "https://www.paypal.com/cgi-bin/webscr");
    assert_eq!(config.business_email, "darnley@9lmnts.com");
    assert_eq!(config.qr_image_endpoint, "https://api.qrserver.com/v1/create-qr-code/");
    assert_eq!(config.qr_default_location, "https://9lmnts-eventos.vercel.app");
}

#[test]
fn env_or_prefers_set_value() {
    // Unique var name to avoid races with parallel tests.
    let key = "__TEST_LMNTS_ENV_OR_71__";
    unsafe { std::env::set_var(key, "custom") };
    assert_eq!(env_or(key, "default"), "custom");
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_or_unset_falls_back() {
    assert_eq!(env_or("__TEST_LMNTS_SURELY_UNSET_42__", "default"), "default");
}

#[test]
fn env_or_blank_value_falls_back() {
    let key = "__TEST_LMNTS_ENV_OR_BLANK_72__";
    unsafe { std::env::set_var(key, "   ") };
    assert_eq!(env_or(key, "default"), "default");
    unsafe { std::env::remove_var(key) };
}

#[test]
fn app_state_shares_config() {
    let state = AppState::new(ServerConfig::default());
    let cloned = state.clone();
    assert!(Arc::ptr_eq(&state.config, &cloned.config));
}
