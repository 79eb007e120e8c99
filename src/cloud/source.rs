use async_trait::async_trait;
use ipnet::Ipv4Net;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

#[cfg(test)]
use mockall::automock;

use super::provider::{CloudPrefixes, PrefixList, Provider};
use crate::{error::CloudIpError, job::SourceEndpoints};

#[derive(Debug, Deserialize)]
struct AwsRanges {
    #[serde(rename = "syncToken")]
    sync_token: Option<String>,
    #[serde(rename = "createDate")]
    create_date: Option<String>,
    prefixes: Vec<AwsPrefix>,
}

#[derive(Debug, Deserialize)]
struct AwsPrefix {
    ip_prefix: Ipv4Net,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GcpRanges {
    sync_token: Option<String>,
    creation_time: Option<String>,
    prefixes: Vec<GcpPrefix>,
}

/// GCP publishes IPv4 and IPv6 entries in the same array
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GcpPrefix {
    ipv4_prefix: Option<Ipv4Net>,
}

/// Parse the AWS `ip-ranges.json` document
pub fn parse_aws_ranges(body: &str) -> Result<PrefixList, CloudIpError> {
    let doc: AwsRanges = serde_json::from_str(body).map_err(|source| CloudIpError::FeedParse {
        provider: Provider::Aws,
        source,
    })?;

    log::info!(
        "Loaded {} {} prefixes (created={})",
        doc.prefixes.len(),
        Provider::Aws,
        doc.create_date.as_deref().unwrap_or("-"),
    );

    Ok(PrefixList {
        provider: Provider::Aws,
        sync_token: doc.sync_token,
        networks: doc.prefixes.into_iter().map(|p| p.ip_prefix).collect(),
    })
}

/// Parse the GCP `cloud.json` document, skipping entries without an IPv4 prefix
pub fn parse_gcp_ranges(body: &str) -> Result<PrefixList, CloudIpError> {
    let doc: GcpRanges = serde_json::from_str(body).map_err(|source| CloudIpError::FeedParse {
        provider: Provider::Gcp,
        source,
    })?;

    let total = doc.prefixes.len();
    let networks: Vec<Ipv4Net> = doc
        .prefixes
        .into_iter()
        .filter_map(|p| p.ipv4_prefix)
        .collect();

    log::info!(
        "Loaded {} {} prefixes, skipped {} without ipv4Prefix (created={})",
        networks.len(),
        Provider::Gcp,
        total - networks.len(),
        doc.creation_time.as_deref().unwrap_or("-"),
    );

    Ok(PrefixList {
        provider: Provider::Gcp,
        sync_token: doc.sync_token,
        networks,
    })
}

/// Source of provider prefix lists, abstracted for testing
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PrefixSource: Send + Sync + 'static {
    async fn fetch(&self) -> Result<CloudPrefixes, CloudIpError>;
}

/// Fetches both published feeds over HTTPS
pub struct HttpPrefixSource {
    client: Client,
    endpoints: SourceEndpoints,
}

impl HttpPrefixSource {
    pub fn new(endpoints: SourceEndpoints) -> Result<Self, CloudIpError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| CloudIpError::HttpClientInit { source })?;
        Ok(Self { client, endpoints })
    }

    async fn get_document(&self, provider: Provider, url: &str) -> Result<String, CloudIpError> {
        log::debug!("Fetching {} ranges from {}", provider, url);

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|source| CloudIpError::HttpFetch {
                    provider,
                    url: url.to_string(),
                    source,
                })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CloudIpError::HttpStatus {
                provider,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| CloudIpError::HttpFetch {
                provider,
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl PrefixSource for HttpPrefixSource {
    /// Download and parse the AWS feed, then the GCP feed
    ///
    /// Any transport failure, non-200 status or malformed document aborts the
    /// fetch; there is no retry and nothing is cached between runs.
    async fn fetch(&self) -> Result<CloudPrefixes, CloudIpError> {
        let aws_body = self.get_document(Provider::Aws, &self.endpoints.aws).await?;
        let aws = parse_aws_ranges(&aws_body)?;

        let gcp_body = self.get_document(Provider::Gcp, &self.endpoints.gcp).await?;
        let gcp = parse_gcp_ranges(&gcp_body)?;

        Ok(CloudPrefixes::new(aws, gcp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use rstest::rstest;

    const AWS_FIXTURE: &str = r#"{
        "syncToken": "1700000000",
        "createDate": "2023-11-14-22-13-20",
        "prefixes": [
            {"ip_prefix": "3.5.140.0/22", "region": "ap-northeast-2", "service": "AMAZON", "network_border_group": "ap-northeast-2"},
            {"ip_prefix": "52.94.76.0/22", "region": "us-west-2", "service": "AMAZON", "network_border_group": "us-west-2"}
        ],
        "ipv6_prefixes": [
            {"ipv6_prefix": "2600:1f14::/35", "region": "us-west-2", "service": "AMAZON", "network_border_group": "us-west-2"}
        ]
    }"#;

    const GCP_FIXTURE: &str = r#"{
        "syncToken": "1700000001",
        "creationTime": "2023-11-14T22:13:21.000000",
        "prefixes": [
            {"ipv4Prefix": "34.1.208.0/20", "service": "Google Cloud", "scope": "africa-south1"},
            {"ipv6Prefix": "2600:1900:8000::/44", "service": "Google Cloud", "scope": "africa-south1"},
            {"ipv4Prefix": "35.190.0.0/17", "service": "Google Cloud", "scope": "us-central1"}
        ]
    }"#;

    #[test]
    fn parses_aws_prefixes_in_order() {
        let list = parse_aws_ranges(AWS_FIXTURE).unwrap();
        assert_eq!(list.provider, Provider::Aws);
        assert_eq!(list.revision(), "1700000000");
        assert_eq!(
            list.networks,
            vec![
                "3.5.140.0/22".parse::<Ipv4Net>().unwrap(),
                "52.94.76.0/22".parse::<Ipv4Net>().unwrap(),
            ]
        );
    }

    #[test]
    fn gcp_entries_without_ipv4_are_skipped() {
        let list = parse_gcp_ranges(GCP_FIXTURE).unwrap();
        assert_eq!(list.provider, Provider::Gcp);
        assert_eq!(list.revision(), "1700000001");
        assert_eq!(list.len(), 2);
        assert_eq!(list.networks[1], "35.190.0.0/17".parse::<Ipv4Net>().unwrap());
    }

    #[rstest]
    #[case("not json", "not a JSON document")]
    #[case(r#"{"syncToken": "1"}"#, "missing prefixes array")]
    #[case(r#"{"prefixes": [{"region": "us-east-1"}]}"#, "AWS entry without ip_prefix")]
    #[case(r#"{"prefixes": [{"ip_prefix": "3.5.140.0/33"}]}"#, "invalid prefix length")]
    fn malformed_aws_document_is_rejected(#[case] body: &str, #[case] _description: &str) {
        let result = parse_aws_ranges(body);
        assert!(matches!(
            result,
            Err(CloudIpError::FeedParse {
                provider: Provider::Aws,
                ..
            })
        ));
    }

    #[test]
    fn malformed_gcp_prefix_is_rejected() {
        let result = parse_gcp_ranges(r#"{"prefixes": [{"ipv4Prefix": "34.1.208.0"}]}"#);
        assert!(matches!(
            result,
            Err(CloudIpError::FeedParse {
                provider: Provider::Gcp,
                ..
            })
        ));
    }

    fn endpoints_for(server: &MockServer) -> SourceEndpoints {
        SourceEndpoints {
            aws: server.url("/ip-ranges.json"),
            gcp: server.url("/ipranges/cloud.json"),
        }
    }

    #[tokio::test]
    async fn http_source_fetches_both_feeds() {
        let server = MockServer::start_async().await;
        let aws_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/ip-ranges.json");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(AWS_FIXTURE);
            })
            .await;
        let gcp_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/ipranges/cloud.json");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(GCP_FIXTURE);
            })
            .await;

        let source = HttpPrefixSource::new(endpoints_for(&server)).unwrap();
        let prefixes = source.fetch().await.unwrap();

        aws_mock.assert_async().await;
        gcp_mock.assert_async().await;
        assert_eq!(prefixes.aws.len(), 2);
        assert_eq!(prefixes.gcp.len(), 2);
    }

    #[tokio::test]
    async fn non_200_status_is_fatal() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ip-ranges.json");
                then.status(503);
            })
            .await;

        let source = HttpPrefixSource::new(endpoints_for(&server)).unwrap();
        let result = source.fetch().await;

        assert!(matches!(
            result,
            Err(CloudIpError::HttpStatus {
                provider: Provider::Aws,
                status: 503,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn malformed_gcp_body_is_fatal() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ip-ranges.json");
                then.status(200).body(AWS_FIXTURE);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ipranges/cloud.json");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let source = HttpPrefixSource::new(endpoints_for(&server)).unwrap();
        let result = source.fetch().await;

        assert!(matches!(
            result,
            Err(CloudIpError::FeedParse {
                provider: Provider::Gcp,
                ..
            })
        ));
    }
}
