use serde::Deserialize;
use std::{collections::HashMap, fmt::Display, path::Path};

use crate::error::{Error, Result};

/// One list as written in the configuration file, before address filtering.
///
/// Only `receiver`, `cc` and `bcc` are read. Any other key, such as a
/// misspelled `to:`, is ignored and leaves that field empty.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListConfig {
    pub receiver: Option<Vec<String>>,
    pub cc: Option<Vec<String>>,
    pub bcc: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are read as TOML, everything else as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

pub fn read_lists(path: &Path, format: ConfigFormat) -> Result<HashMap<String, ListConfig>> {
    let bytes = std::fs::read(path).map_err(|source| Error::ConfigurationRead {
        path: path.to_path_buf(),
        source,
    })?;
    let file_contents = String::from_utf8(bytes).map_err(|e| parse_error(path, e))?;
    parse_lists(&file_contents, format).map_err(|reason| Error::ConfigurationParse {
        path: path.to_path_buf(),
        reason,
    })
}

fn parse_lists(
    file_contents: &str,
    format: ConfigFormat,
) -> Result<HashMap<String, ListConfig>, String> {
    if file_contents.trim().is_empty() {
        return Ok(HashMap::new());
    }

    match format {
        ConfigFormat::Yaml => {
            let lists: Option<HashMap<String, Option<ListConfig>>> =
                serde_yaml::from_str(file_contents).map_err(|e| e.to_string())?;
            Ok(lists
                .unwrap_or_default()
                .into_iter()
                .map(|(name, list)| (name, list.unwrap_or_default()))
                .collect())
        }
        ConfigFormat::Toml => toml::from_str(file_contents).map_err(|e| e.to_string()),
    }
}

fn parse_error(path: &Path, reason: impl Display) -> Error {
    Error::ConfigurationParse {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn list(receiver: &[&str], cc: Option<&[&str]>, bcc: Option<&[&str]>) -> ListConfig {
        ListConfig {
            receiver: Some(owned(receiver)),
            cc: cc.map(owned),
            bcc: bcc.map(owned),
        }
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("lists.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("lists.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("lists.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("lists.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("lists")), ConfigFormat::Yaml);
    }

    #[test]
    fn missing_keys_stay_unset() {
        let lists =
            parse_lists("alerts:\n  receiver:\n    - a@x.com\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(lists["alerts"], list(&["a@x.com"], None, None));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let lists = parse_lists("alerts:\n  to: [a@x.com]\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(lists["alerts"], ListConfig::default());
    }

    #[test]
    fn null_list_is_empty() {
        let lists = parse_lists("empty:\nother: ~\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists["empty"], ListConfig::default());
        assert_eq!(lists["other"], ListConfig::default());
    }

    #[test]
    fn empty_documents_yield_no_lists() {
        assert!(parse_lists("", ConfigFormat::Yaml).unwrap().is_empty());
        assert!(parse_lists("  \n", ConfigFormat::Yaml).unwrap().is_empty());
        assert!(parse_lists("{}\n", ConfigFormat::Yaml).unwrap().is_empty());
        assert!(parse_lists("", ConfigFormat::Toml).unwrap().is_empty());
    }

    #[test]
    fn toml_matches_yaml_shape() {
        let toml = "[alerts]\nreceiver = [\"a@x.com\"]\ncc = [\"c@x.com\"]\n";
        let yaml = "alerts:\n  receiver: [a@x.com]\n  cc: [c@x.com]\n";
        assert_eq!(
            parse_lists(toml, ConfigFormat::Toml).unwrap(),
            parse_lists(yaml, ConfigFormat::Yaml).unwrap()
        );
    }

    #[test]
    fn rejects_non_mapping_root() {
        assert!(parse_lists("- a@x.com\n- b@x.com\n", ConfigFormat::Yaml).is_err());
        assert!(parse_lists("alerts: [a@x.com]\n", ConfigFormat::Yaml).is_err());
        assert!(parse_lists("alerts = 3\n", ConfigFormat::Toml).is_err());
    }

    #[test]
    fn read_failures_are_typed() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            read_lists(&missing, ConfigFormat::Yaml),
            Err(Error::ConfigurationRead { .. })
        ));

        let binary = dir.path().join("binary.yaml");
        std::fs::File::create(&binary)
            .unwrap()
            .write_all(&[0xff, 0xfe, 0x00])
            .unwrap();
        assert!(matches!(
            read_lists(&binary, ConfigFormat::Yaml),
            Err(Error::ConfigurationParse { .. })
        ));
    }
}
