//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const FONT: &str = "HOMEKIT_LABEL_FONT";
pub const SCALE: &str = "HOMEKIT_LABEL_SCALE";
pub const BRAND: &str = "HOMEKIT_LABEL_BRAND";
pub const ORIGIN: &str = "HOMEKIT_LABEL_ORIGIN";

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    (FONT, "", "Path to a TTF/OTF font for label text (empty: search system fonts)"),
    (SCALE, "2.0", "Pixels per layout unit (1.0-8.0)"),
    (BRAND, "Designed by StudioPeters", "Brand line printed under the header"),
    (ORIGIN, "Assembled in the Netherlands", "Origin line printed under the brand"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

/// Setting keys in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    DEFS.iter().map(|&(key, _, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_a_definition() {
        for key in keys() {
            let def = &DEFAULT_SETTINGS[key];
            assert_eq!(def.key, key);
            assert!(!def.description.is_empty());
        }
        assert_eq!(get_default(SCALE), Some("2.0"));
        assert_eq!(get_default("NOPE"), None);
    }
}
