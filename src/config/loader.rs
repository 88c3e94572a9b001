//! Resolver list configuration loader.
//!
//! Ships a compiled-in default set of public resolvers and test domains,
//! and can load a custom resolver list from a JSON file.

use crate::dns::types::{ServerList, ServerSpec};
use crate::error::Result;
use std::path::Path;

/// The default public resolvers under test.
const DEFAULT_SERVERS: &[(&str, &str, &str)] = &[
    ("Google Public DNS", "https://dns.google/dns-query", "dns.google"),
    ("Cloudflare DNS", "https://cloudflare-dns.com/dns-query", "1.1.1.1"),
    ("Yandex DNS", "https://dns.yandex.ru/dns-query", "common.dot.dns.yandex.net"),
    ("Quad9", "https://dns.quad9.net/dns-query", "dns.quad9.net"),
    ("AdGuard DNS", "https://dns.adguard.com/dns-query", "dns.adguard-dns.com"),
    ("OpenDNS", "https://doh.opendns.com/dns-query", "dns.opendns.com"),
    ("Comodo Secure DNS", "https://dns.comss.one/dns-query", "dns.comss.one"),
    (
        "CleanBrowsing Family Filter",
        "https://doh.cleanbrowsing.org/doh/family-filter/",
        "family-filter-dns.cleanbrowsing.org",
    ),
    ("AliDNS", "https://dns.alidns.com/dns-query", "dns.alidns.com"),
    ("BebasDNS", "https://dns.bebasid.com/dns-query", "dns.bebasid.com"),
    ("CaliphDNS", "https://dns.caliph.dev/dns-query", "dns.caliph.dev"),
];

/// Popular domains used as query targets.
const DEFAULT_DOMAINS: &[&str] = &[
    "example.com", "google.com", "yandex.ru", "cloudflare.com", "wikipedia.org",
    "youtube.com", "facebook.com", "vk.com", "mail.ru", "rambler.ru",
    "twitch.tv", "twitter.com", "instagram.com", "stackoverflow.com", "github.com",
    "reddit.com", "amazon.com", "netflix.com", "bbc.co.uk", "cnn.com",
    "live.com", "microsoft.com", "apple.com", "mozilla.org", "linkedin.com",
    "ok.ru", "aliexpress.com", "ebay.com", "dropbox.com", "paypal.com",
    "adobe.com", "spotify.com", "zoom.us", "slack.com", "wordpress.org",
    "medium.com", "quora.com", "duckduckgo.com", "bitbucket.org", "digitalocean.com",
    "heroku.com", "oracle.com", "salesforce.com", "shopify.com", "tumblr.com",
    "bbc.com", "nytimes.com", "forbes.com", "theguardian.com", "etsy.com",
    "tripadvisor.com", "booking.com", "airbnb.com", "craigslist.org", "walmart.com",
    "target.com", "bestbuy.com", "ikea.com", "huffpost.com", "buzzfeed.com",
    "yahoo.com", "bing.com", "yelp.com",
];

/// Resolver list configuration loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// The compiled-in default resolver set.
    #[must_use]
    pub fn default_servers() -> ServerList {
        ServerList::from_servers(
            DEFAULT_SERVERS
                .iter()
                .map(|(name, doh_url, dot_host)| ServerSpec::new(*name, *doh_url, *dot_host))
                .collect(),
        )
    }

    /// The compiled-in default test domains.
    #[must_use]
    pub fn default_domains() -> Vec<String> {
        DEFAULT_DOMAINS.iter().map(|d| (*d).to_string()).collect()
    }

    /// Load a resolver list from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let list = ConfigLoader::load_from_file("servers.json")?;
    /// for server in &list.servers {
    ///     println!("{}: {}", server.name, server.doh_url);
    /// }
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ServerList> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let list: ServerList = serde_json::from_str(&content)?;
        Ok(list)
    }

    /// Load from a file if given, otherwise fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only if a file was given and cannot be loaded.
    pub fn load_or_default(path: Option<&Path>) -> Result<ServerList> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Ok(Self::default_servers()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_preserved() {
        let list = ConfigLoader::default_servers();
        assert_eq!(list.len(), 11);
        assert_eq!(list.servers[0].name, "Google Public DNS");
        assert_eq!(list.servers[1].dot_host, "1.1.1.1");
        assert!(list.servers.iter().all(|s| s.dot_port == 853));
        assert!(list.servers.iter().all(|s| s.doh_url.starts_with("https://")));

        assert_eq!(ConfigLoader::default_domains().len(), 63);
        assert_eq!(ConfigLoader::default_domains()[0], "example.com");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("servers.json");
        std::fs::write(
            &path,
            r#"{"list":[{"name":"T","doh_url":"https://t/dns-query","dot_host":"t","dot_port":853}]}"#,
        )
        .unwrap();

        let list = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.servers[0].name, "T");
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(ConfigLoader::load_from_file("/nonexistent/servers.json").is_err());
    }

    #[test]
    fn test_load_or_default() {
        let list = ConfigLoader::load_or_default(None).unwrap();
        assert_eq!(list.len(), 11);
    }

    #[test]
    fn test_export_round_trip() {
        let list = ConfigLoader::default_servers();
        let json = serde_json::to_string_pretty(&list).unwrap();
        let parsed: ServerList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.servers, list.servers);
    }
}
