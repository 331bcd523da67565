//! Integration tests for URI translation.
//!
//! These tests check the filtering and serialization behavior of
//! `translate` against the catalog.

use rdp_handler::catalog;
use rdp_handler::{Error, RdpConfig, translate};

const SAMPLE: &str = "rdp://full%20address=s:localhost:3389&username=s:test&disable%20wallpaper=i:1&bogusparam=x";

mod filtering_tests {
    use super::*;

    #[test]
    fn test_sample_uri() {
        let config = translate(SAMPLE).unwrap();

        assert_eq!(config.len(), 3);
        assert_eq!(config.get("full address"), Some("s:localhost:3389"));
        assert_eq!(config.get("username"), Some("s:test"));
        assert_eq!(config.get("disable wallpaper"), Some("i:1"));
        assert_eq!(config.get("bogusparam"), None);
    }

    #[test]
    fn test_all_recognized_keys_survive() {
        let query: Vec<String> = catalog::entries()
            .iter()
            .map(|entry| {
                format!(
                    "{}={}:v",
                    urlencoding::encode(&entry.name.to_uppercase()),
                    entry.kind
                )
            })
            .collect();
        let uri = format!("rdp://{}", query.join("&"));

        let config = translate(&uri).unwrap();

        assert_eq!(config.len(), catalog::entries().len());
        for entry in catalog::entries() {
            assert_eq!(
                config.get(entry.name),
                Some(format!("{}:v", entry.kind).as_str())
            );
        }
    }

    #[test]
    fn test_unrecognized_keys_never_appear() {
        let uri = "rdp://a=1&b=2&fulladdress=s:x&full%20address=s:host&c=3&d=4&username%20=s:x";
        let config = translate(uri).unwrap();

        assert_eq!(config.keys().collect::<Vec<_>>(), vec!["full address"]);
        let contents = config.to_file_contents();
        for bogus in ["a:", "b:", "c:", "d:", "fulladdress", "username "] {
            assert!(!contents.contains(bogus), "{bogus} leaked into {contents:?}");
        }
    }

    #[test]
    fn test_only_unrecognized_keys_gives_empty_config() {
        let config = translate("rdp://foo=1&bar=2").unwrap();
        assert!(config.is_empty());
        assert_eq!(config.to_file_contents(), "");
    }

    #[test]
    fn test_duplicate_keys_last_wins_case_insensitive() {
        let config = translate("rdp://username=s:a&USERNAME=s:b&UserName=s:c").unwrap();
        assert_eq!(config.len(), 1);
        assert_eq!(config.get("username"), Some("s:c"));
    }

    #[test]
    fn test_values_are_not_validated() {
        let config = translate("rdp://session%20bpp=i:banana&screen%20mode%20id=").unwrap();
        assert_eq!(config.get("session bpp"), Some("i:banana"));
        assert_eq!(config.get("screen mode id"), Some(""));
    }
}

mod serialization_tests {
    use super::*;

    #[test]
    fn test_sample_file_contents() {
        let contents = translate(SAMPLE).unwrap().to_file_contents();
        assert_eq!(
            contents,
            "disable wallpaper:i:1\nfull address:s:localhost:3389\nusername:s:test\n"
        );
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_output_independent_of_source_order() {
        let a = translate("rdp://username=s:u&domain=s:d&full%20address=s:h").unwrap();
        let b = translate("rdp://full%20address=s:h&username=s:u&domain=s:d").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_file_contents(), b.to_file_contents());
    }

    #[test]
    fn test_serialization_is_repeatable() {
        let config = translate(SAMPLE).unwrap();
        assert_eq!(config.to_file_contents(), config.to_file_contents());
        assert_eq!(config.to_file_contents(), config.to_string());
    }

    #[test]
    fn test_values_written_verbatim() {
        let config = translate("rdp://alternate%20shell=s:C:%5Cbin%5Capp.exe%20%2Fx%3Ay").unwrap();
        assert_eq!(
            config.to_file_contents(),
            "alternate shell:s:C:\\bin\\app.exe /x:y\n"
        );
    }

    #[test]
    fn test_empty_config_default() {
        assert_eq!(RdpConfig::default().to_file_contents(), "");
    }
}

mod scheme_tests {
    use super::*;

    #[test]
    fn test_non_rdp_uris_rejected() {
        for uri in [
            "https://full%20address=s:host",
            "rdp:full%20address=s:host",
            " rdp://full%20address=s:host",
            "Rdp://full%20address=s:host",
            "full%20address=s:host",
        ] {
            match translate(uri) {
                Err(Error::InvalidScheme { uri: rejected }) => assert_eq!(rejected, uri),
                other => panic!("expected InvalidScheme for {uri:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_bare_scheme_is_empty_config() {
        assert!(translate("rdp://").unwrap().is_empty());
    }
}
