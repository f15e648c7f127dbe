//! Install command profiles, loaded from an embedded JSON catalog.
//!
//! A profile declares the base command, the run token, and the form fields
//! in the order their assignments appear on the command line. Profiles only
//! differ in how blank text fields are treated (placeholder substituted or
//! assignment dropped) and in whether copying is gated on a field.

use crate::command_draft::{Assignment, AssignmentOrigin, CommandDraft};
use crate::form_state::FormState;
use anyhow::{bail, Result};
use itertools::Itertools;
use serde::Deserialize;

const BUILTIN_PROFILES: &str = include_str!("../assets/install_profiles.json");

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Text,
    Checkbox,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FieldSpec {
    id: String,
    env_key: String,
    label_key: String,
    control: ControlKind,
    #[serde(default)]
    placeholder: Option<String>,
    #[serde(default)]
    fixed_value: Option<String>,
}

impl FieldSpec {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn env_key(&self) -> &str {
        &self.env_key
    }

    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    pub fn control(&self) -> ControlKind {
        self.control
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn fixed_value(&self) -> Option<&str> {
        self.fixed_value.as_deref()
    }

    fn validate(&self, profile: &str) -> Result<()> {
        if self.id.trim().is_empty() {
            bail!("Install profile '{profile}': field with blank id");
        }
        if self.env_key.is_empty()
            || self.env_key.contains(char::is_whitespace)
            || self.env_key.contains('=')
        {
            bail!(
                "Install profile '{profile}': field '{}' has invalid env key '{}'",
                self.id,
                self.env_key
            );
        }
        match self.control {
            ControlKind::Text => {
                if self.fixed_value.is_some() {
                    bail!(
                        "Install profile '{profile}': text field '{}' must not carry a fixed value",
                        self.id
                    );
                }
                if matches!(&self.placeholder, Some(p) if p.trim().is_empty()) {
                    bail!(
                        "Install profile '{profile}': field '{}' has a blank placeholder",
                        self.id
                    );
                }
            }
            ControlKind::Checkbox => {
                if self.placeholder.is_some() {
                    bail!(
                        "Install profile '{profile}': checkbox field '{}' must not carry a placeholder",
                        self.id
                    );
                }
                match &self.fixed_value {
                    Some(value) if !value.trim().is_empty() => {}
                    _ => bail!(
                        "Install profile '{profile}': checkbox field '{}' needs a fixed value",
                        self.id
                    ),
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct InstallProfile {
    name: String,
    title_key: String,
    base_command: String,
    run_token: String,
    #[serde(default)]
    copy_gate: Option<String>,
    fields: Vec<FieldSpec>,
}

impl InstallProfile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    pub fn copy_gate(&self) -> Option<&str> {
        self.copy_gate.as_deref()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.id == id)
    }

    /// Builds the command draft for the current form inputs.
    ///
    /// Fields contribute assignments in declared order. A text field with a
    /// non-blank entry contributes the trimmed entry; a blank one contributes
    /// its placeholder when it has one and is skipped otherwise. A checkbox
    /// contributes its fixed value while ticked. Form entries that match no
    /// field of this profile are ignored.
    pub fn compose(&self, form: &FormState) -> CommandDraft {
        let mut assignments = Vec::new();
        for field in &self.fields {
            match field.control {
                ControlKind::Text => match (form.trimmed(&field.id), &field.placeholder) {
                    (Some(value), _) => assignments.push(Assignment {
                        env_key: field.env_key.clone(),
                        value,
                        origin: AssignmentOrigin::UserValue,
                    }),
                    (None, Some(placeholder)) => assignments.push(Assignment {
                        env_key: field.env_key.clone(),
                        value: placeholder.clone(),
                        origin: AssignmentOrigin::PlaceholderDefault,
                    }),
                    (None, None) => {}
                },
                ControlKind::Checkbox => {
                    if form.is_checked(&field.id) {
                        if let Some(value) = &field.fixed_value {
                            assignments.push(Assignment {
                                env_key: field.env_key.clone(),
                                value: value.clone(),
                                origin: AssignmentOrigin::FixedValue,
                            });
                        }
                    }
                }
            }
        }
        CommandDraft::new(&self.base_command, assignments, &self.run_token)
    }

    fn validate(&self) -> Result<()> {
        if self.base_command.trim().is_empty() {
            bail!("Install profile '{}': base command is blank", self.name);
        }
        if self.run_token.trim().is_empty() {
            bail!("Install profile '{}': run token is blank", self.name);
        }
        if self.fields.is_empty() {
            bail!("Install profile '{}': no fields", self.name);
        }
        if let Some(id) = self.fields.iter().map(|f| f.id.as_str()).duplicates().next() {
            bail!("Install profile '{}': duplicate field id '{id}'", self.name);
        }
        if let Some(key) = self
            .fields
            .iter()
            .map(|f| f.env_key.as_str())
            .duplicates()
            .next()
        {
            bail!("Install profile '{}': duplicate env key '{key}'", self.name);
        }
        for field in &self.fields {
            field.validate(&self.name)?;
        }
        if let Some(gate) = &self.copy_gate {
            match self.field(gate) {
                Some(field) if field.control == ControlKind::Text => {}
                Some(_) => bail!(
                    "Install profile '{}': copy gate '{gate}' is not a text field",
                    self.name
                ),
                None => bail!(
                    "Install profile '{}': copy gate '{gate}' does not match a field",
                    self.name
                ),
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct InstallProfiles(Vec<InstallProfile>);

impl InstallProfiles {
    pub fn new(json_text: &str) -> Result<Self> {
        let profiles: Vec<InstallProfile> = serde_json::from_str(json_text)?;
        if profiles.is_empty() {
            bail!("Install profiles: catalog is empty");
        }
        if let Some(name) = profiles.iter().map(|p| p.name.as_str()).duplicates().next() {
            bail!("Install profiles: duplicate profile name '{name}'");
        }
        for profile in &profiles {
            profile.validate()?;
        }
        Ok(Self(profiles))
    }

    pub fn get(&self, name: &str) -> Option<&InstallProfile> {
        self.0.iter().find(|profile| profile.name == name)
    }

    /// The first catalog entry doubles as the default profile.
    pub fn default_profile(&self) -> &InstallProfile {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstallProfile> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for InstallProfiles {
    fn default() -> Self {
        Self::new(BUILTIN_PROFILES).expect("Invalid built-in install profiles")
    }
}
