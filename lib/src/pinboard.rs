use crate::config::Config;
use crate::error::{PinkuError, Result};
use crate::models::{FilterConfig, RemoteBookmark};
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Timestamp layout used by the Pinboard v1 API, always UTC
pub const WIRE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Remote side of an import.
pub trait BookmarkSource {
    /// When the account's bookmarks last changed.
    fn last_update(&self) -> Result<DateTime<Utc>>;

    /// Every bookmark matching the remote part of `filters`, in server order.
    fn all_posts(&self, filters: &FilterConfig) -> Result<Vec<RemoteBookmark>>;
}

pub struct PinboardClient {
    client: Client,
    api_token: String,
    base_url: String,
}

impl PinboardClient {
    pub fn new(api_token: impl Into<String>, config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_token: api_token.into(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    fn get(&self, method: &str, params: &[(&str, String)]) -> Result<String> {
        log::debug!("GET {} {:?}", self.endpoint(method), params);

        let resp = self
            .client
            .get(self.endpoint(method))
            .query(&[("auth_token", self.api_token.as_str()), ("format", "json")])
            .query(params)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let message = match status.as_u16() {
                401 => "Unauthorized - check the PINBOARD_API_KEY token",
                429 => "Too Many Requests - Pinboard is rate limiting this token",
                500..=599 => "Pinboard is experiencing issues",
                _ => "request failed",
            };
            return Err(PinkuError::Api {
                status: status.as_u16(),
                message: message.to_string(),
            });
        }

        Ok(resp.text()?)
    }
}

impl BookmarkSource for PinboardClient {
    fn last_update(&self) -> Result<DateTime<Utc>> {
        let body = self.get("posts/update", &[])?;
        parse_update(&body)
    }

    fn all_posts(&self, filters: &FilterConfig) -> Result<Vec<RemoteBookmark>> {
        let body = self.get("posts/all", &posts_all_params(filters))?;
        let posts = parse_posts(&body)?;
        log::debug!("Pinboard returned {} bookmarks", posts.len());
        Ok(posts)
    }
}

/// Query parameters for `posts/all`, excluding auth and format.
pub fn posts_all_params(filters: &FilterConfig) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if !filters.tags.is_empty() {
        params.push(("tag", filters.tags.join(" ")));
    }
    if let Some(start) = filters.start {
        params.push(("start", start.to_string()));
    }
    if let Some(results) = filters.results {
        params.push(("results", results.to_string()));
    }
    if let Some(fromdt) = filters.fromdt {
        params.push(("fromdt", fromdt.format(WIRE_TIME_FORMAT).to_string()));
    }
    if let Some(todt) = filters.todt {
        params.push(("todt", todt.format(WIRE_TIME_FORMAT).to_string()));
    }
    if filters.meta {
        params.push(("meta", "1".to_string()));
    }

    params
}

#[derive(Deserialize)]
struct UpdateResponse {
    update_time: String,
}

#[derive(Deserialize)]
struct WirePost {
    href: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    extended: String,
    #[serde(default)]
    meta: Option<String>,
    #[serde(default)]
    hash: Option<String>,
    time: String,
    #[serde(default)]
    shared: String,
    #[serde(default)]
    toread: String,
    #[serde(default)]
    tags: String,
}

impl TryFrom<WirePost> for RemoteBookmark {
    type Error = PinkuError;

    fn try_from(post: WirePost) -> Result<Self> {
        Ok(RemoteBookmark {
            time: parse_time(&post.time)?,
            url: post.href,
            title: post.description,
            extended: post.extended,
            tags: post.tags.split_whitespace().map(str::to_string).collect(),
            shared: post.shared == "yes",
            toread: post.toread == "yes",
            meta: post.meta.filter(|m| !m.is_empty()),
            hash: post.hash.filter(|h| !h.is_empty()),
        })
    }
}

fn parse_time(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PinkuError::Json(format!("invalid timestamp '{}': {}", value, e)))
}

/// Decode the body of `posts/update`.
pub fn parse_update(body: &str) -> Result<DateTime<Utc>> {
    let resp: UpdateResponse = serde_json::from_str(body)?;
    parse_time(&resp.update_time)
}

/// Decode the body of `posts/all`, keeping server order.
pub fn parse_posts(body: &str) -> Result<Vec<RemoteBookmark>> {
    let posts: Vec<WirePost> = serde_json::from_str(body)?;
    posts.into_iter().map(RemoteBookmark::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    const POSTS_BODY: &str = r#"[
        {"href":"http://a.com","description":"A","extended":"first","meta":"abc123","hash":"h1",
         "time":"2024-03-01T10:00:00Z","shared":"no","toread":"no","tags":"x"},
        {"href":"http://b.com","description":"B","extended":"","meta":"","hash":"h2",
         "time":"2024-03-02T11:30:00Z","shared":"yes","toread":"yes","tags":"y z"}
    ]"#;

    #[test]
    fn test_parse_update() {
        let ts = parse_update(r#"{"update_time":"2011-03-24T19:02:07Z"}"#).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2011, 3, 24, 19, 2, 7).unwrap());
    }

    #[rstest]
    #[case(r#"{"update_time":"yesterday"}"#)]
    #[case(r#"{"other":"2011-03-24T19:02:07Z"}"#)]
    #[case("not json")]
    fn test_parse_update_invalid(#[case] body: &str) {
        assert!(matches!(parse_update(body), Err(PinkuError::Json(_))));
    }

    #[test]
    fn test_parse_posts() {
        let posts = parse_posts(POSTS_BODY).unwrap();
        assert_eq!(posts.len(), 2);

        let a = &posts[0];
        assert_eq!(a.url, "http://a.com");
        assert_eq!(a.title, "A");
        assert_eq!(a.extended, "first");
        assert_eq!(a.tags, vec!["x"]);
        assert!(!a.shared);
        assert!(!a.toread);
        assert_eq!(a.meta.as_deref(), Some("abc123"));
        assert_eq!(a.time, Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());

        let b = &posts[1];
        assert_eq!(b.url, "http://b.com");
        assert_eq!(b.tags, vec!["y", "z"]);
        assert!(b.shared);
        assert!(b.toread);
        assert!(b.meta.is_none());
    }

    #[test]
    fn test_parse_posts_minimal_fields() {
        let body = r#"[{"href":"http://c.com","time":"2024-01-01T00:00:00Z"}]"#;
        let posts = parse_posts(body).unwrap();
        assert_eq!(posts[0].url, "http://c.com");
        assert_eq!(posts[0].title, "");
        assert!(posts[0].tags.is_empty());
        assert!(!posts[0].shared);
        assert!(!posts[0].toread);
    }

    #[test]
    fn test_parse_posts_empty() {
        assert!(parse_posts("[]").unwrap().is_empty());
    }

    #[test]
    fn test_posts_all_params_empty_filters() {
        assert!(posts_all_params(&FilterConfig::default()).is_empty());
    }

    #[test]
    fn test_posts_all_params_forwards_everything() {
        let filters = FilterConfig {
            tags: vec!["rust".into(), "cli".into()],
            start: Some(10),
            results: Some(50),
            fromdt: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            todt: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
            meta: true,
            private_only: true,
            ..Default::default()
        };

        let params = posts_all_params(&filters);
        assert_eq!(
            params,
            vec![
                ("tag", "rust cli".to_string()),
                ("start", "10".to_string()),
                ("results", "50".to_string()),
                ("fromdt", "2024-01-01T00:00:00Z".to_string()),
                ("todt", "2024-02-01T00:00:00Z".to_string()),
                ("meta", "1".to_string()),
            ]
        );
    }

    #[rstest]
    #[case("https://api.pinboard.in/v1", "https://api.pinboard.in/v1/posts/all")]
    #[case("https://api.pinboard.in/v1/", "https://api.pinboard.in/v1/posts/all")]
    #[case("http://localhost:9000", "http://localhost:9000/posts/all")]
    fn test_endpoint(#[case] base: &str, #[case] expected: &str) {
        let config = Config {
            api_base_url: base.to_string(),
            ..Default::default()
        };
        let client = PinboardClient::new("user:TOKEN", &config).unwrap();
        assert_eq!(client.endpoint("posts/all"), expected);
    }
}
