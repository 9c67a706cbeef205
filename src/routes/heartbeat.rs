use axum::http;

/// The configuration document returned for every request, byte-for-byte. Clients under test
/// expect `config_version` 999 and the data-encryption keyring exactly as written here, so this
/// string must never be reformatted or re-serialized.
pub const HEARTBEAT_BODY: &str = r#"{"config":{"config_payload":{"apisix":{"data_encryption":{"enable":true,"keyring":["kzicgltttmmja3ohzx50xbgozpgxvuhd"]},"ssl":{"enable":true,"key_encrypt_salt":["kzicgltttmmja3ohzx50xbgozpgxvuhd"]}}},"config_version":999}}"#;

/// Answers any request, ignoring method, path, headers, and body. The payload is served as a
/// plain string rather than `Json` so no explicit content type is set beyond the runtime default.
#[tracing::instrument(name = "Heartbeat")]
pub async fn heartbeat() -> (http::StatusCode, &'static str) {
    (http::StatusCode::OK, HEARTBEAT_BODY)
}
