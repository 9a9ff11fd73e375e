use lens_config::{ENV_PREFIX, LensConfig};

/// Log a warning for each section that stayed at its defaults even though
/// matching `COOKIELENS_<SECTION>*` variables are set.
pub fn warn_unconfigured(config: &LensConfig) {
    for warning in unconfigured_warnings(config, std::env::vars().map(|(key, _)| key)) {
        tracing::warn!("{warning}");
    }
}

fn unconfigured_warnings<I>(config: &LensConfig, env_keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let keys = env_keys.into_iter().collect::<Vec<_>>();
    let sections = [
        ("NARRATIVE", config.narrative.is_configured(), "API_KEY"),
        ("STORAGE", config.storage.is_configured(), "BUCKET"),
    ];

    sections
        .into_iter()
        .filter(|(_, configured, _)| !configured)
        .filter_map(|(section, _, example)| {
            let prefix = format!("{ENV_PREFIX}{section}");
            keys.iter().any(|key| key.starts_with(&prefix)).then(|| {
                format!(
                    "{} settings are unset while {prefix}* variables exist; \
                     sections are separated by a double underscore (e.g. {prefix}__{example})",
                    section.to_ascii_lowercase()
                )
            })
        })
        .collect()
}
