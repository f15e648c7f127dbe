//! Saves the composed command as a runnable shell script.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Wraps a command line in a minimal shell script.
pub fn script_text(command: &str) -> String {
    format!(
        "#!/bin/sh\n# Octostar platform install command\n{}\n",
        command.trim()
    )
}

/// Writes the script and, where the platform supports it, marks it executable.
pub fn write_script(path: &Path, command: &str) -> Result<()> {
    fs::write(path, script_text(command))
        .with_context(|| format!("Could not write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = fs::metadata(path)
            .with_context(|| format!("Could not read permissions of {}", path.display()))?
            .permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(path, permissions)
            .with_context(|| format!("Could not mark {} executable", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_text_shape() {
        let text = script_text("curl example.sh | env A=1 bash");
        assert!(text.starts_with("#!/bin/sh\n"));
        assert!(text.ends_with("curl example.sh | env A=1 bash\n"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_write_script_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("install-octostar.sh");
        write_script(&path, "curl example.sh | env bash").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, script_text("curl example.sh | env bash"));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_script_is_executable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("install-octostar.sh");
        write_script(&path, "curl example.sh | env bash").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
