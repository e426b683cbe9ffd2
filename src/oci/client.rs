//! OCI Client
//!
//! Client for the OCI REST control plane. Builds per-service endpoint URLs
//! from the configured region and exposes the raw verbs plus a typed,
//! single-page list call. Request signing is delegated to the session token
//! carried by the profile; retry policy is owned by the caller.

use super::http::OciHttpClient;
use crate::config::OciConfig;
use crate::error::{ActivityError, Result};
use crate::pipeline::fetch::Page;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Core services (compute, virtual network) API version.
const CORE_API_VERSION: &str = "20160918";
/// Load balancer API version.
const LB_API_VERSION: &str = "20170115";

/// Client bound to one tenancy and region.
#[derive(Clone)]
pub struct OciClient {
    http: OciHttpClient,
    config: OciConfig,
    token: String,
    core_endpoint: String,
    lb_endpoint: String,
    object_storage_endpoint: String,
}

impl OciClient {
    /// Create a client from a validated configuration, reading the session
    /// token from the profile's `security_token_file`.
    pub fn new(config: OciConfig) -> Result<Self> {
        let token_path = config.security_token_file.clone().ok_or_else(|| {
            ActivityError::Config("security_token_file is not set in the profile".into())
        })?;
        let token = std::fs::read_to_string(&token_path)
            .map_err(|e| ActivityError::Config(format!("could not read {}: {}", token_path, e)))?
            .trim()
            .to_string();
        Self::with_token(config, token)
    }

    /// Create a client with an already-resolved session token.
    pub fn with_token(config: OciConfig, token: impl Into<String>) -> Result<Self> {
        config.validate()?;
        let region = config.region.as_deref().unwrap_or_default().to_string();

        Ok(Self {
            http: OciHttpClient::new()?,
            config,
            token: token.into(),
            core_endpoint: format!("https://iaas.{}.oraclecloud.com/{}", region, CORE_API_VERSION),
            lb_endpoint: format!("https://iaas.{}.oraclecloud.com/{}", region, LB_API_VERSION),
            object_storage_endpoint: format!("https://objectstorage.{}.oraclecloud.com", region),
        })
    }

    /// Point every service at the given base URL. Used against private
    /// endpoints and by the integration tests.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        let endpoint = endpoint.trim_end_matches('/');
        self.core_endpoint = format!("{}/{}", endpoint, CORE_API_VERSION);
        self.lb_endpoint = format!("{}/{}", endpoint, LB_API_VERSION);
        self.object_storage_endpoint = endpoint.to_string();
        self
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &OciConfig {
        &self.config
    }

    /// Resolve a compartment scope: explicit argument first, then the
    /// profile default.
    pub fn compartment(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(|s| s.to_string())
            .or_else(|| self.config.compartment.clone())
            .ok_or(ActivityError::MissingScope("compartment id"))
    }

    /// Resolve a load balancer scope: explicit argument first, then the
    /// profile default.
    pub fn load_balancer(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(|s| s.to_string())
            .or_else(|| self.config.load_balancer.clone())
            .ok_or(ActivityError::MissingScope("load balancer id"))
    }

    // =========================================================================
    // Service URL builders
    // =========================================================================

    /// Build a core services (compute, virtual network) URL
    pub fn core_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        build_url(&self.core_endpoint, path, query)
    }

    /// Build a load balancer service URL
    pub fn lb_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        build_url(&self.lb_endpoint, path, query)
    }

    /// Build an object storage service URL
    pub fn object_storage_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        build_url(&self.object_storage_endpoint, path, query)
    }

    // =========================================================================
    // Raw verbs
    // =========================================================================

    /// GET a URL, returning the JSON body and the continuation cursor.
    pub async fn get(&self, url: &str) -> Result<(Value, Option<String>)> {
        self.http.get(url, &self.token).await
    }

    /// POST to a URL with an optional JSON body.
    pub async fn post(&self, url: &str, body: Option<&Value>) -> Result<Value> {
        self.http.post(url, &self.token, body).await
    }

    /// DELETE a URL.
    pub async fn delete(&self, url: &str) -> Result<Value> {
        self.http.delete(url, &self.token).await
    }

    /// Fetch one page of a list call. The cursor, when present, is carried
    /// as the `page` query parameter; the response's `opc-next-page` header
    /// becomes the next cursor.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        url: String,
        page: Option<String>,
    ) -> Result<Page<T>> {
        let url = match page {
            Some(cursor) => append_query(&url, "page", &cursor),
            None => url,
        };
        let (body, next_page) = self.get(&url).await?;
        let items = serde_json::from_value(body)?;
        Ok(Page { items, next_page })
    }
}

fn build_url(endpoint: &str, path: &str, query: &[(&str, &str)]) -> String {
    let mut url = format!("{}/{}", endpoint, path.trim_start_matches('/'));
    for (i, (key, value)) in query.iter().enumerate() {
        let sep = if i == 0 { '?' } else { '&' };
        url.push(sep);
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

fn append_query(url: &str, key: &str, value: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", url, sep, key, urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OciConfig {
        OciConfig {
            tenancy: Some("ocid1.tenancy.oc1..aaaa".into()),
            region: Some("eu-frankfurt-1".into()),
            compartment: Some("ocid1.compartment.oc1..bbbb".into()),
            ..Default::default()
        }
    }

    #[test]
    fn urls_carry_region_and_api_version() {
        let client = OciClient::with_token(test_config(), "tok").unwrap();
        assert_eq!(
            client.core_url("instances", &[("compartmentId", "c1")]),
            "https://iaas.eu-frankfurt-1.oraclecloud.com/20160918/instances?compartmentId=c1"
        );
        assert_eq!(
            client.lb_url("loadBalancers/lb1/backendSets", &[]),
            "https://iaas.eu-frankfurt-1.oraclecloud.com/20170115/loadBalancers/lb1/backendSets"
        );
        assert_eq!(
            client.object_storage_url("n/ns/b", &[("compartmentId", "c1")]),
            "https://objectstorage.eu-frankfurt-1.oraclecloud.com/n/ns/b?compartmentId=c1"
        );
    }

    #[test]
    fn compartment_falls_back_to_profile_default() {
        let client = OciClient::with_token(test_config(), "tok").unwrap();
        assert_eq!(
            client.compartment(None).unwrap(),
            "ocid1.compartment.oc1..bbbb"
        );
        assert_eq!(client.compartment(Some("explicit")).unwrap(), "explicit");
    }

    #[test]
    fn missing_load_balancer_scope_is_terminal() {
        let client = OciClient::with_token(test_config(), "tok").unwrap();
        assert!(matches!(
            client.load_balancer(None),
            Err(ActivityError::MissingScope("load balancer id"))
        ));
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let client = OciClient::with_token(test_config(), "tok").unwrap();
        assert_eq!(
            client.object_storage_url("n/ns/b/logs/o", &[("start", "report#v2")]),
            "https://objectstorage.eu-frankfurt-1.oraclecloud.com/n/ns/b/logs/o?start=report%23v2"
        );
        assert_eq!(
            append_query("http://x/o?fields=name", "start", "a b"),
            "http://x/o?fields=name&start=a%20b"
        );
    }

    #[test]
    fn new_reads_the_session_token_file() {
        let dir = tempfile::tempdir().unwrap();
        let token_path = dir.path().join("token");
        std::fs::write(&token_path, "session-token\n").unwrap();

        let mut config = test_config();
        assert!(matches!(
            OciClient::new(config.clone()),
            Err(ActivityError::Config(_))
        ));

        config.security_token_file = Some(token_path.to_string_lossy().into_owned());
        assert!(OciClient::new(config).is_ok());
    }

    #[test]
    fn append_query_respects_existing_query() {
        assert_eq!(append_query("http://x/y", "page", "t"), "http://x/y?page=t");
        assert_eq!(
            append_query("http://x/y?a=b", "page", "t"),
            "http://x/y?a=b&page=t"
        );
    }
}
