use serde::{Deserialize, Deserializer};

/// Pagination query for GET /todos/
///
/// Values that fail to parse as integers fall back to the server defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListTodosQuery {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub skip: Option<i64>,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
