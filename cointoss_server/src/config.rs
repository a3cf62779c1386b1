use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind: String,
    /// Page assets (index.html, static/js/...). Not served when unset.
    pub static_dir: Option<PathBuf>,
    /// Secret for the seeded coin; a random one is drawn when unset.
    pub server_seed: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".into(),
            static_dir: None,
            server_seed: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();
        if let Some(v) = get("BIND") {
            settings.bind = v;
        }
        settings.static_dir = get("STATIC_DIR").map(PathBuf::from);
        settings.server_seed = get("SERVER_SEED");
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(Settings::from_lookup(lookup(&[])), Settings::default());
    }

    #[test]
    fn reads_all_keys() {
        let settings = Settings::from_lookup(lookup(&[
            ("BIND", "0.0.0.0:8080"),
            ("STATIC_DIR", "./public"),
            ("SERVER_SEED", "s3cret"),
        ]));
        assert_eq!(settings.bind, "0.0.0.0:8080");
        assert_eq!(settings.static_dir, Some(PathBuf::from("./public")));
        assert_eq!(settings.server_seed.as_deref(), Some("s3cret"));
    }

    #[test]
    fn blank_values_fall_back() {
        let settings = Settings::from_lookup(lookup(&[("BIND", "  "), ("SERVER_SEED", "")]));
        assert_eq!(settings.bind, "127.0.0.1:5000");
        assert_eq!(settings.server_seed, None);
    }
}
