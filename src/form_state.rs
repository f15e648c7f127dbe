//! Mutable state behind the install form: one text buffer per text field,
//! one flag per checkbox, keyed by field id.

use crate::install_profile::{ControlKind, InstallProfile};
use anyhow::{anyhow, Result};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct FormState {
    texts: HashMap<String, String>,
    checks: HashMap<String, bool>,
}

/// Returns the trimmed value, or None if nothing but whitespace is left.
fn normalized_non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses the checkbox spellings accepted on the command line.
pub fn parse_bool_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(anyhow!(
            "Cannot read '{other}' as a checkbox value (use true/false, yes/no, on/off or 1/0)"
        )),
    }
}

impl FormState {
    pub fn text(&self, id: &str) -> &str {
        self.texts.get(id).map(String::as_str).unwrap_or("")
    }

    /// Buffer handed to the text widget; created empty on first use.
    pub fn text_mut(&mut self, id: &str) -> &mut String {
        self.texts.entry(id.to_string()).or_default()
    }

    pub fn set_text(&mut self, id: &str, value: &str) {
        self.texts.insert(id.to_string(), value.to_string());
    }

    /// The effective value of a text field: trimmed, None when blank.
    pub fn trimmed(&self, id: &str) -> Option<String> {
        normalized_non_empty(self.text(id))
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checks.get(id).copied().unwrap_or(false)
    }

    pub fn check_mut(&mut self, id: &str) -> &mut bool {
        self.checks.entry(id.to_string()).or_default()
    }

    pub fn set_checked(&mut self, id: &str, on: bool) {
        self.checks.insert(id.to_string(), on);
    }

    /// Blanks every text field and unticks every checkbox.
    pub fn reset(&mut self) {
        for value in self.texts.values_mut() {
            value.clear();
        }
        for flag in self.checks.values_mut() {
            *flag = false;
        }
    }

    /// Copying is gated on the profile's gate field carrying a real value.
    /// Profiles without a gate always allow copying.
    pub fn copy_allowed(&self, profile: &InstallProfile) -> bool {
        match profile.copy_gate() {
            Some(id) => self.trimmed(id).is_some(),
            None => true,
        }
    }

    /// Applies one `FIELD=VALUE` argument from the command line.
    pub fn apply_cli_assignment(&mut self, profile: &InstallProfile, raw: &str) -> Result<()> {
        let (id, value) = raw
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected FIELD=VALUE, got '{raw}'"))?;
        let field = profile.field(id.trim()).ok_or_else(|| {
            anyhow!("Unknown field '{}' in profile '{}'", id.trim(), profile.name())
        })?;
        match field.control() {
            ControlKind::Text => self.set_text(field.id(), value),
            ControlKind::Checkbox => {
                let on = parse_bool_flag(value)?;
                self.set_checked(field.id(), on);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PROFILES;

    #[test]
    fn test_unknown_fields_read_as_blank() {
        let form = FormState::default();
        assert_eq!(form.text("dockerhub-token"), "");
        assert!(form.trimmed("dockerhub-token").is_none());
        assert!(!form.is_checked("gpu-passthrough"));
    }

    #[test]
    fn test_trimmed_strips_whitespace() {
        let mut form = FormState::default();
        form.set_text("dockerhub-token", "  abc  ");
        assert_eq!(form.trimmed("dockerhub-token"), Some("abc".to_string()));
        form.set_text("dockerhub-token", "   ");
        assert!(form.trimmed("dockerhub-token").is_none());
    }

    #[test]
    fn test_reset_clears_all_inputs() {
        let mut form = FormState::default();
        form.set_text("openai-token", "sk-123");
        form.set_checked("synthetic-data", true);
        form.reset();
        assert!(form.trimmed("openai-token").is_none());
        assert!(!form.is_checked("synthetic-data"));
    }

    #[test]
    fn test_parse_bool_flag_spellings() {
        for raw in ["true", "YES", "On", "1"] {
            assert!(parse_bool_flag(raw).unwrap());
        }
        for raw in ["false", "No", "OFF", "0"] {
            assert!(!parse_bool_flag(raw).unwrap());
        }
        assert!(parse_bool_flag("maybe").is_err());
    }

    #[test]
    fn test_copy_gate_requires_gate_field_value() {
        let gated = PROFILES.get("tokens-only").unwrap();
        let mut form = FormState::default();
        assert!(!form.copy_allowed(gated));
        form.set_text("dockerhub-token", "   ");
        assert!(!form.copy_allowed(gated));
        form.set_text("dockerhub-token", "abc");
        assert!(form.copy_allowed(gated));

        let ungated = PROFILES.get("standard").unwrap();
        assert!(FormState::default().copy_allowed(ungated));
    }

    #[test]
    fn test_apply_cli_assignment() {
        let profile = PROFILES.get("standard").unwrap();
        let mut form = FormState::default();
        form.apply_cli_assignment(profile, "dockerhub-token=abc").unwrap();
        form.apply_cli_assignment(profile, "synthetic-data=yes").unwrap();
        assert_eq!(form.trimmed("dockerhub-token"), Some("abc".to_string()));
        assert!(form.is_checked("synthetic-data"));
    }

    #[test]
    fn test_apply_cli_assignment_keeps_equals_in_value() {
        let profile = PROFILES.get("standard").unwrap();
        let mut form = FormState::default();
        form.apply_cli_assignment(profile, "openai-token=a=b").unwrap();
        assert_eq!(form.trimmed("openai-token"), Some("a=b".to_string()));
    }

    #[test]
    fn test_apply_cli_assignment_rejects_bad_input() {
        let profile = PROFILES.get("standard").unwrap();
        let mut form = FormState::default();
        assert!(form.apply_cli_assignment(profile, "no-equals-sign").is_err());
        assert!(form.apply_cli_assignment(profile, "unknown-field=x").is_err());
        assert!(form.apply_cli_assignment(profile, "gpu-passthrough=maybe").is_err());
    }
}
