//! UI translation catalogs and language helpers.

use csv::ReaderBuilder;
use std::collections::HashMap;

pub struct Translations {
    values: HashMap<String, String>,
    language: String,
}

impl Translations {
    fn from_text(csv_text: &str) -> Self {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_text.as_bytes());

        let headers = rdr
            .headers()
            .expect("Could not read translations.csv headers");
        let mut languages = Self::to_vec(headers);
        let _ = languages.remove(0); // Drop the key column

        let mut values = HashMap::new();
        for record in rdr.records().flatten() {
            let mut record = Self::to_vec(&record);
            let key = record.remove(0);
            for (lnum, t) in record.iter().enumerate() {
                let lang_key = format!("{}:{key}", languages[lnum]);
                values.insert(lang_key, t.to_owned());
            }
        }

        Self {
            values,
            language: "en".to_owned(),
        }
    }

    pub fn set_language(&mut self, language: &str) {
        self.language = language.to_string();
    }

    /// Unknown keys echo back, so a missing row shows up in the interface
    /// instead of crashing it. Profile and field labels come from data.
    pub fn get(&self, key: &str) -> String {
        let lang_key = format!("{}:{}", self.language, key);
        self.values
            .get(&lang_key)
            .map(|s| s.to_string())
            .unwrap_or_else(|| key.to_string())
    }

    fn to_vec(record: &csv::StringRecord) -> Vec<String> {
        record.iter().map(|s| s.to_string()).collect()
    }
}

impl Default for Translations {
    fn default() -> Self {
        let text = include_str!("../assets/translations.csv");
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let translations = Translations::default();
        assert_eq!(translations.get("m_file"), "File");
        assert_eq!(translations.get("b_copy"), "Copy to clipboard");
    }

    #[test]
    fn test_de() {
        let mut translations = Translations::default();
        translations.set_language("de");
        assert_eq!(translations.get("m_file"), "Datei");
        assert_eq!(translations.get("m_quit"), "Beenden");
    }

    #[test]
    fn test_missing_key_echoes() {
        let translations = Translations::default();
        assert_eq!(translations.get("no_such_key"), "no_such_key");
    }

    #[test]
    fn test_every_catalog_label_is_translated() {
        let translations = Translations::default();
        let profiles = crate::install_profile::InstallProfiles::default();
        for profile in profiles.iter() {
            assert_ne!(
                translations.get(profile.title_key()),
                profile.title_key(),
                "missing translation for {}",
                profile.title_key()
            );
            for field in profile.fields() {
                assert_ne!(
                    translations.get(field.label_key()),
                    field.label_key(),
                    "missing translation for {}",
                    field.label_key()
                );
            }
        }
    }
}
