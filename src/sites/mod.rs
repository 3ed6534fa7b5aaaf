pub mod naming;
pub mod normalize;

pub use naming::{site_name, NameRegistry};
pub use normalize::normalize_url;

use crate::models::SiteTarget;

pub const JSON_EXT: &str = ".report.json";
pub const HTML_EXT: &str = ".report.html";
pub const CSV_EXT: &str = ".report.csv";

/// Which report artifacts a run asks the engine for, besides JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtifactFlags {
    pub html: bool,
    pub csv: bool,
}

/// Resolve raw site strings into audit targets, preserving input order.
///
/// Names are unique within the returned list. Repeated sites get `_1`, `_2`…
/// in the order they appear, so suffixes depend on input order.
pub fn resolve_sites<S: AsRef<str>>(raw_sites: &[S], artifacts: ArtifactFlags) -> Vec<SiteTarget> {
    let mut registry = NameRegistry::new();

    raw_sites
        .iter()
        .map(|raw| {
            let url = normalize_url(raw.as_ref());
            let name = registry.claim(&site_name(&url));
            SiteTarget {
                html: artifacts.html.then(|| format!("{}{}", name, HTML_EXT)),
                csv: artifacts.csv.then(|| format!("{}{}", name, CSV_EXT)),
                url,
                name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_preserves_order() {
        let sites = resolve_sites(&["b.com", "a.com", "c.com"], ArtifactFlags::default());
        let urls: Vec<&str> = sites.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls, vec!["https://b.com", "https://a.com", "https://c.com"]);
    }

    #[test]
    fn test_duplicate_sites_get_suffixed_names() {
        let sites = resolve_sites(&["example.com", "https://example.com"], ArtifactFlags::default());
        assert_eq!(sites[0].name, "example_com");
        assert_eq!(sites[1].name, format!("{}_1", sites[0].name));
        assert_eq!(sites[0].url, sites[1].url);
    }

    #[test]
    fn test_artifact_names_follow_final_name() {
        let flags = ArtifactFlags { html: true, csv: true };
        let sites = resolve_sites(&["example.com", "example.com"], flags);
        assert_eq!(sites[1].html.as_deref(), Some("example_com_1.report.html"));
        assert_eq!(sites[1].csv.as_deref(), Some("example_com_1.report.csv"));
    }

    #[test]
    fn test_no_artifacts_by_default() {
        let sites = resolve_sites(&["example.com"], ArtifactFlags::default());
        assert!(sites[0].html.is_none());
        assert!(sites[0].csv.is_none());
    }

    #[test]
    fn test_fresh_registry_per_call() {
        let first = resolve_sites(&["example.com"], ArtifactFlags::default());
        let second = resolve_sites(&["example.com"], ArtifactFlags::default());
        assert_eq!(first[0].name, second[0].name);
    }

    #[test]
    fn test_empty_input() {
        let sites = resolve_sites::<&str>(&[], ArtifactFlags::default());
        assert!(sites.is_empty());
    }
}
