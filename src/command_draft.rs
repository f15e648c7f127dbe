//! Ordered token model for a composed install command line.

use serde::Serialize;

/// Where the value of an environment assignment came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentOrigin {
    /// Typed into the form by the user.
    UserValue,
    /// Substituted from the field placeholder because the input was blank.
    PlaceholderDefault,
    /// Attached to a checked checkbox, value fixed by the field.
    FixedValue,
}

/// A single `KEY=value` token of the command line.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Assignment {
    pub env_key: String,
    pub value: String,
    pub origin: AssignmentOrigin,
}

impl Assignment {
    pub fn token(&self) -> String {
        format!("{}={}", self.env_key, self.value)
    }
}

/// A fully composed command: base command, environment assignments in field
/// order, and the trailing run token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandDraft {
    base_command: String,
    assignments: Vec<Assignment>,
    run_token: String,
}

impl CommandDraft {
    pub fn new(base_command: &str, assignments: Vec<Assignment>, run_token: &str) -> Self {
        Self {
            base_command: base_command.trim().to_string(),
            assignments,
            run_token: run_token.trim().to_string(),
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Renders the draft as a single line, tokens separated by exactly one
    /// space, with no leading or trailing whitespace.
    pub fn command_line(&self) -> String {
        let mut tokens = Vec::with_capacity(self.assignments.len() + 2);
        tokens.push(self.base_command.clone());
        for assignment in &self.assignments {
            tokens.push(assignment.token());
        }
        tokens.push(self.run_token.clone());
        tokens.retain(|token| !token.is_empty());
        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(env_key: &str, value: &str, origin: AssignmentOrigin) -> Assignment {
        Assignment {
            env_key: env_key.to_string(),
            value: value.to_string(),
            origin,
        }
    }

    #[test]
    fn test_command_line_single_spaced() {
        let draft = CommandDraft::new(
            "curl https://octostarco.github.io/install-octostar.sh | env",
            vec![
                assignment("DOCKERHUB_TOKEN", "abc", AssignmentOrigin::UserValue),
                assignment("ENABLE_GPU", "true", AssignmentOrigin::FixedValue),
            ],
            "bash",
        );
        let line = draft.command_line();
        assert_eq!(
            line,
            "curl https://octostarco.github.io/install-octostar.sh | env DOCKERHUB_TOKEN=abc ENABLE_GPU=true bash"
        );
        assert!(!line.contains("  "));
        assert_eq!(line, line.trim());
    }

    #[test]
    fn test_command_line_without_assignments() {
        let draft = CommandDraft::new("curl example.sh | env", vec![], "bash");
        assert_eq!(draft.command_line(), "curl example.sh | env bash");
    }

    #[test]
    fn test_construction_trims_base_and_run_token() {
        let draft = CommandDraft::new("  curl example.sh | env  ", vec![], " bash\n");
        assert_eq!(draft.command_line(), "curl example.sh | env bash");
    }

    #[test]
    fn test_command_line_is_stable_across_calls() {
        let draft = CommandDraft::new(
            "curl example.sh | env",
            vec![assignment("MITO_TOKEN", "m", AssignmentOrigin::UserValue)],
            "bash",
        );
        assert_eq!(draft.command_line(), draft.command_line());
    }

    #[test]
    fn test_assignments_keep_declared_order() {
        let draft = CommandDraft::new(
            "curl example.sh | env",
            vec![
                assignment("B_KEY", "2", AssignmentOrigin::UserValue),
                assignment("A_KEY", "1", AssignmentOrigin::UserValue),
            ],
            "bash",
        );
        let keys: Vec<&str> = draft
            .assignments()
            .iter()
            .map(|a| a.env_key.as_str())
            .collect();
        assert_eq!(keys, ["B_KEY", "A_KEY"]);
        assert_eq!(draft.command_line(), "curl example.sh | env B_KEY=2 A_KEY=1 bash");
    }

    #[test]
    fn test_origin_serializes_snake_case() {
        let json = serde_json::to_string(&AssignmentOrigin::PlaceholderDefault).unwrap();
        assert_eq!(json, "\"placeholder_default\"");
    }
}
