mod error {
    pub use mailprio::error::*;
}

mod endpoints {
    pub use mailprio::api::endpoints::*;
}

mod models {
    pub use mailprio::api::models::*;
}

mod sanitize {
    pub use mailprio::api::sanitize::*;
}

mod client_under_test {
    #![allow(dead_code)]

    include!("../src/api/client.rs");

    fn drop_bracketed_prefix(message: &str) -> Option<String> {
        let rest = message.strip_prefix('[')?;
        let (_, tail) = rest.split_once("] ")?;
        Some(tail.to_string())
    }

    #[test]
    fn sanitizer_chain_is_swappable() {
        static CUSTOM: &[sanitize::MessageSanitizer] = &[drop_bracketed_prefix];

        let error = normalize_failure(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "[IMAP] mailbox busy"}"#,
            CUSTOM,
        );

        match error {
            AppError::Api(message) => assert_eq!(message, "mailbox busy"),
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn double_quoted_bytes_repr_also_triggers_auth_hint() {
        let error = normalize_failure(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "b\"Invalid credentials (Failure)\""}"#,
            sanitize::DEFAULT_SANITIZERS,
        );

        match error {
            AppError::Auth(message) => assert_eq!(message, sanitize::AUTH_REMEDIATION_HINT),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[test]
    fn imap_detail_without_auth_signature_stays_descriptive() {
        let error = normalize_failure(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "IMAP fetch failed: connection refused"}"#,
            sanitize::DEFAULT_SANITIZERS,
        );

        match error {
            AppError::Api(message) => {
                assert_eq!(message, "IMAP fetch failed: connection refused");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn endpoint_url_replaces_any_base_path() {
        let client = PrioritizerClient::new("http://localhost:8000");
        let url = client
            .endpoint_url(endpoints::health())
            .expect("url should parse");
        assert_eq!(url.as_str(), "http://localhost:8000/health");

        // A path on the base URL is replaced, not prepended.
        let client = PrioritizerClient::new("http://localhost:8000/old");
        let url = client
            .endpoint_url(endpoints::health())
            .expect("url should parse");
        assert_eq!(url.as_str(), "http://localhost:8000/health");
    }
}
