pub mod photo;

// join a configured base location with an absolute api path
//
// the base may or may not carry a trailing slash depending on who wrote the config file,
// so we normalize it here instead of at every call site
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// javascript errors are opaque JsValues, which do not implement std::error::Error
pub(crate) fn js_err(err: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}
