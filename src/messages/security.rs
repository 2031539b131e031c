use serde::{Deserialize, Serialize};

/// Body of a successful `oauth/token` call.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GetTokenResponse {
    pub access_token: String,
    /// Some deployments send this as a JSON string.
    #[serde(deserialize_with = "int_or_string")]
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Result of `oauth/check_token`. Only the status matters to the token
/// lifecycle; the body is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTokenResponse {
    pub status: u16,
    pub body: String,
}

fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(v) => Ok(v),
        Raw::Float(v) => Ok(v as i64),
        Raw::Str(s) => s.trim().parse::<i64>().map_err(serde::de::Error::custom),
    }
}
