use std::collections::HashSet;
use std::sync::LazyLock;
use regex::Regex;
use sha1::{Digest, Sha1};

const MAX_NAME_LENGTH: usize = 100;
const HASH_SUFFIX_LENGTH: usize = 7;

static SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());
static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/?#:*$@!.]").unwrap());

/// Derive the filesystem-safe base name for a normalized URL.
///
/// Long names are cut to 100 characters and suffixed with a short SHA-1 of
/// the full name so distinct long URLs stay distinct.
pub fn site_name(url: &str) -> String {
    let stripped = SCHEME_PREFIX.replace(url, "");
    let name = UNSAFE_CHARS.replace_all(&stripped, "_").into_owned();

    if name.chars().count() <= MAX_NAME_LENGTH {
        return name;
    }

    let digest = hex::encode(Sha1::digest(name.as_bytes()));
    let truncated: String = name.chars().take(MAX_NAME_LENGTH).collect();
    format!(
        "{}_{}",
        truncated.trim_end_matches('_'),
        &digest[..HASH_SUFFIX_LENGTH]
    )
}

/// Names already handed out during one resolver run.
#[derive(Debug, Default)]
pub struct NameRegistry {
    taken: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `base`, or the first free `base_N` when it is taken.
    pub fn claim(&mut self, base: &str) -> String {
        let mut name = base.to_string();
        let mut suffix = 1;
        while self.taken.contains(&name) {
            name = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        self.taken.insert(name.clone());
        name
    }
}
