//! Tests for HTTP request/response types and the transport trait.

use super::{HttpRequest, HttpResponse, Transport, TransportError};

fn test_url() -> url::Url {
    url::Url::parse("https://example.com/webhook").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let req = HttpRequest::new(http::Method::PUT, test_url());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, test_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn post_creates_post_request() {
        let req = HttpRequest::post(test_url());

        assert_eq!(req.method, http::Method::POST);
    }

    #[test]
    fn with_body_sets_body() {
        let body = b"{\"title\":\"t\"}".to_vec();
        let req = HttpRequest::post(test_url()).with_body(body.clone());

        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn with_header_adds_single_header() {
        let req = HttpRequest::post(test_url()).with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );

        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let req = HttpRequest::post(test_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }

    #[test]
    fn builder_pattern_chains_correctly() {
        let req = HttpRequest::post(test_url())
            .with_body(b"data".to_vec())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.body, Some(b"data".to_vec()));
        assert!(req.headers.contains_key(http::header::CONTENT_TYPE));
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_success_returns_true_for_2xx() {
        let statuses = [
            http::StatusCode::OK,
            http::StatusCode::CREATED,
            http::StatusCode::ACCEPTED,
            http::StatusCode::NO_CONTENT,
        ];

        for status in statuses {
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(resp.is_success(), "Expected {status} to be success");
        }
    }

    #[test]
    fn is_success_returns_false_for_non_2xx() {
        let statuses = [
            http::StatusCode::PERMANENT_REDIRECT,
            http::StatusCode::BAD_REQUEST,
            http::StatusCode::NOT_FOUND,
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ];

        for status in statuses {
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(!resp.is_success(), "Expected {status} to not be success");
        }
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"Bad payload".to_vec(),
        );

        assert_eq!(resp.body_text(), Some("Bad payload"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xFF, 0xFE],
        );

        assert!(resp.body_text().is_none());
    }

    #[test]
    fn body_text_returns_empty_string_for_empty_body() {
        let resp = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), vec![]);

        assert_eq!(resp.body_text(), Some(""));
    }
}

mod transport_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let source = std::io::Error::other("connection refused");
        let error = TransportError::Connection(Box::new(source));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("connection refused")
        );
    }

    #[test]
    fn timeout_displays_message() {
        let error = TransportError::Timeout;

        assert_eq!(error.to_string(), "Request timed out");
        assert!(error.source().is_none());
    }

    #[test]
    fn invalid_request_displays_reason() {
        let error = TransportError::InvalidRequest("missing scheme".to_string());

        assert!(error.to_string().contains("missing scheme"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransportError>();
    }
}

mod transport_trait {
    use super::*;

    /// Transport double returning a fixed response.
    struct FixedTransport {
        response: HttpResponse,
    }

    impl Transport for FixedTransport {
        async fn execute(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn double_returns_configured_response() {
        let transport = FixedTransport {
            response: HttpResponse::new(
                http::StatusCode::ACCEPTED,
                http::HeaderMap::new(),
                b"1".to_vec(),
            ),
        };

        let result = transport.execute(HttpRequest::post(test_url())).await.unwrap();

        assert_eq!(result.status, http::StatusCode::ACCEPTED);
        assert_eq!(result.body, b"1".to_vec());
    }

    #[test]
    fn trait_requires_send_sync() {
        fn assert_transport<T: Transport>() {}
        assert_transport::<FixedTransport>();
    }
}
