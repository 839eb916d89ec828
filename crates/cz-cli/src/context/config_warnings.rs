use cz_config::{ApiConfig, CzConfig, GeneralConfig, SessionConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &CzConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CzConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        ("api", config.api == ApiConfig::default(), "CHALLENGERZ_API__BASE_URL"),
        (
            "session",
            config.session == SessionConfig::default(),
            "CHALLENGERZ_SESSION__DIR",
        ),
        (
            "general",
            config.general == GeneralConfig::default(),
            "CHALLENGERZ_GENERAL__CURRENCY_SYMBOL",
        ),
    ];

    sections
        .into_iter()
        .filter(|(section, is_default, _)| {
            *is_default && has_single_underscore_key(&env_keys, section)
        })
        .map(|(section, _, example)| {
            format!(
                "{section} config appears default while CHALLENGERZ_{}_* env vars exist. Use double underscores (example: {example}).",
                section.to_ascii_uppercase()
            )
        })
        .collect()
}

/// `CHALLENGERZ_API_BASE_URL` is ignored; only `CHALLENGERZ_API__BASE_URL` maps.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let prefix = format!("{}{}_", cz_config::ENV_PREFIX, section.to_ascii_uppercase());
    keys.iter()
        .filter_map(|key| key.strip_prefix(&prefix))
        .any(|rest| !rest.starts_with('_') && !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use cz_config::{ApiConfig, CzConfig};

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &CzConfig::default(),
            env(&[
                ("CHALLENGERZ_API_BASE_URL", "http://backend:5000"),
                ("CHALLENGERZ_SESSION_DIR", "/tmp/cz"),
            ]),
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("CHALLENGERZ_API__BASE_URL"));
        assert!(warnings[1].starts_with("session config"));
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let warnings = collect_unconfigured_warnings(
            &CzConfig::default(),
            env(&[
                ("CHALLENGERZ_API__BASE_URL", "http://localhost:5000"),
                ("CHALLENGERZ_AUTH__TOKEN", "tok"),
                ("CHALLENGERZ_LOG", "debug"),
            ]),
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_sections_do_not_warn() {
        let config = CzConfig {
            api: ApiConfig {
                base_url: "http://backend:5000".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[("CHALLENGERZ_API_BASE_URL", "http://backend:5000")]),
        );

        assert!(warnings.is_empty());
    }
}
