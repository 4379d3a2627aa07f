//! Mapping between registry keys and DNS names.
//!
//! Registry keys run from the root to the leaf, while DNS names run from the
//! leaf to the root, so converting between the two reverses the labels:
//!
//! ```text
//! service.staging.example.local.  <->  /skydns/local/example/staging/service
//! ```

use serde::Deserialize;

/// Root prefix used when none is configured.
pub const DEFAULT_ROOT: &str = "skydns";

/// Label which marks a wildcard in a DNS name.
const WILDCARD: &str = "*";

/// Key layout for a registry, rooted at a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryKeys {
    root: String,
}

impl Default for RegistryKeys {
    fn default() -> Self {
        RegistryKeys {
            root: DEFAULT_ROOT.to_owned(),
        }
    }
}

impl RegistryKeys {
    /// Keys rooted at `root`, which may itself span several path segments.
    pub fn new(root: impl Into<String>) -> Self {
        RegistryKeys { root: root.into() }
    }

    /// Root prefix of every key.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Registry key for a domain name.
    pub fn path(&self, name: &str) -> String {
        key(&self.root, labels(name).rev())
    }

    /// Registry key for a domain name which may contain a wildcard.
    ///
    /// The key is cut off before the first (closest to the root) `*` label,
    /// so a caller can list everything under it and then filter the results
    /// with [`matches_wildcard`]. The flag reports whether a wildcard was found.
    ///
    /// ```
    /// # use walnut_registry::path_with_wildcard;
    /// let (key, wildcard) = path_with_wildcard("service.*.example.local.");
    /// assert_eq!(key, "/skydns/local/example");
    /// assert!(wildcard);
    /// ```
    pub fn path_with_wildcard(&self, name: &str) -> (String, bool) {
        let reversed: Vec<&str> = labels(name).rev().collect();
        match reversed.iter().position(|label| *label == WILDCARD) {
            Some(index) => (key(&self.root, reversed[..index].iter().copied()), true),
            None => (key(&self.root, reversed.into_iter()), false),
        }
    }

    /// Fully qualified domain name for a registry key.
    ///
    /// The root segments are dropped whatever their content, and empty
    /// segments are ignored.
    pub fn domain(&self, key: &str) -> String {
        let mut labels: Vec<&str> = segments(key).skip(segments(&self.root).count()).collect();
        labels.reverse();

        let mut name = labels.join(".");
        name.push('.');
        name
    }
}

/// [`RegistryKeys::path`] under the default root.
pub fn path(name: &str) -> String {
    RegistryKeys::default().path(name)
}

/// [`RegistryKeys::path_with_wildcard`] under the default root.
pub fn path_with_wildcard(name: &str) -> (String, bool) {
    RegistryKeys::default().path_with_wildcard(name)
}

/// Domain name for a key under the default root.
pub fn domain(key: &str) -> String {
    RegistryKeys::default().domain(key)
}

/// Check a domain name against a pattern which may contain `*` labels.
///
/// Each `*` in the pattern stands for exactly one label of `name`. Labels are
/// compared case-insensitively and trailing dots are ignored.
pub fn matches_wildcard(pattern: &str, name: &str) -> bool {
    let pattern: Vec<&str> = labels(pattern).collect();
    let name: Vec<&str> = labels(name).collect();

    pattern.len() == name.len()
        && pattern
            .iter()
            .zip(name)
            .all(|(p, n)| *p == WILDCARD || p.eq_ignore_ascii_case(n))
}

fn labels(name: &str) -> impl DoubleEndedIterator<Item = &str> {
    name.split('.').filter(|label| !label.is_empty())
}

fn segments(key: &str) -> impl Iterator<Item = &str> {
    key.split('/').filter(|segment| !segment.is_empty())
}

fn key<'a>(root: &'a str, labels: impl Iterator<Item = &'a str>) -> String {
    let mut key = String::new();
    for segment in segments(root).chain(labels) {
        key.push('/');
        key.push_str(segment);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        assert_eq!(
            path("service.staging.example.local."),
            "/skydns/local/example/staging/service"
        );
        assert_eq!(path("service.staging.example.local"), path("service.staging.example.local."));
    }

    #[test]
    fn test_default_root_matches_keys() {
        let keys = RegistryKeys::default();
        assert_eq!(keys.root(), DEFAULT_ROOT);
        for name in ["db.example.local.", "*.example.local.", "."] {
            assert_eq!(path(name), keys.path(name));
            assert_eq!(path_with_wildcard(name), keys.path_with_wildcard(name));
            assert_eq!(domain(&path(name)), keys.domain(&keys.path(name)));
        }
    }

    #[test]
    fn test_domain() {
        assert_eq!(
            domain("/skydns/local/example/staging/service"),
            "service.staging.example.local."
        );
    }

    #[test]
    fn test_root_name() {
        assert_eq!(path("."), "/skydns");
        assert_eq!(domain("/skydns"), ".");
    }

    #[test]
    fn test_domain_ignores_empty_segments() {
        assert_eq!(domain("/skydns/local//example/"), "example.local.");
    }

    #[test]
    fn test_round_trip() {
        for name in [
            "a.",
            "local.",
            "db.example.local.",
            "1.rails.production.east.skydns.local.",
            "_http._tcp.web.example.com.",
        ] {
            assert_eq!(domain(&path(name)), name);
        }
    }

    #[test]
    fn test_path_with_wildcard() {
        assert_eq!(
            path_with_wildcard("service.*.example.local."),
            ("/skydns/local/example".to_owned(), true)
        );
        assert_eq!(
            path_with_wildcard("*.*.example.local."),
            ("/skydns/local/example".to_owned(), true)
        );
        assert_eq!(path_with_wildcard("*."), ("/skydns".to_owned(), true));
    }

    #[test]
    fn test_path_with_wildcard_without_wildcard() {
        let name = "service.staging.example.local.";
        assert_eq!(path_with_wildcard(name), (path(name), false));
    }

    #[test]
    fn test_configured_root() {
        let keys = RegistryKeys::new("/registry/dns/");
        assert_eq!(keys.root(), "/registry/dns/");
        assert_eq!(keys.path("db.example."), "/registry/dns/example/db");
        assert_eq!(keys.domain("/registry/dns/example/db"), "db.example.");
        assert_eq!(
            keys.path_with_wildcard("db.*.example."),
            ("/registry/dns/example".to_owned(), true)
        );
    }

    #[test]
    fn test_keys_configuration() {
        let keys: RegistryKeys = serde_json::from_str(r#"{"root":"coredns"}"#).unwrap();
        assert_eq!(keys.path("a.local."), "/coredns/local/a");

        let keys: RegistryKeys = serde_json::from_str("{}").unwrap();
        assert_eq!(keys, RegistryKeys::default());
    }

    #[test]
    fn test_matches_wildcard() {
        assert!(matches_wildcard("service.*.example.local.", "service.staging.example.local."));
        assert!(matches_wildcard("*.example.local", "DB.example.local."));
        assert!(!matches_wildcard("service.*.example.local.", "service.example.local."));
        assert!(!matches_wildcard("service.*.example.local.", "other.staging.example.local."));
        assert!(matches_wildcard(".", "."));
    }
}
