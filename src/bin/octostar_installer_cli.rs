use octostar_installer::{
    about, clipboard,
    command_draft::Assignment,
    form_state::FormState,
    install_profile::InstallProfile,
    PROFILES, TRANSLATIONS,
};
use serde::Serialize;
use std::env;

#[derive(Serialize)]
struct DraftSummary<'a> {
    profile: &'a str,
    command: &'a str,
    assignments: &'a [Assignment],
}

fn usage() {
    eprintln!(
        "Usage:\n  \
  octostar_installer_cli --version\n  \
  octostar_installer_cli list-profiles\n  \
  octostar_installer_cli [--profile NAME] compose [FIELD=VALUE ...]\n  \
  octostar_installer_cli [--profile NAME] explain [FIELD=VALUE ...]\n  \
  octostar_installer_cli [--profile NAME] copy [FIELD=VALUE ...]\n\n  \
  FIELD is a form field id such as dockerhub-token or synthetic-data;\n  \
  checkbox fields take true/false, yes/no, on/off or 1/0"
    );
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Could not serialize JSON output: {e}"))?;
    println!("{text}");
    Ok(())
}

fn parse_global_profile_arg(args: &[String]) -> Result<(&'static InstallProfile, usize), String> {
    if args.len() >= 3 && args[1] == "--profile" {
        let name = &args[2];
        let profile = PROFILES
            .get(name)
            .ok_or_else(|| format!("Unknown install profile '{name}' (see list-profiles)"))?;
        return Ok((profile, 3));
    }
    Ok((PROFILES.default_profile(), 1))
}

fn form_from_args(profile: &InstallProfile, args: &[String]) -> Result<FormState, String> {
    let mut form = FormState::default();
    for raw in args {
        form.apply_cli_assignment(profile, raw)
            .map_err(|e| e.to_string())?;
    }
    Ok(form)
}

fn list_profiles() -> Result<(), String> {
    for profile in PROFILES.iter() {
        let default_marker = if profile.name() == PROFILES.default_profile().name() {
            " (default)"
        } else {
            ""
        };
        println!(
            "{}{default_marker}\t{}",
            profile.name(),
            TRANSLATIONS.get(profile.title_key())
        );
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        usage();
        return Err("Missing command".to_string());
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", about::version_cli_text());
        return Ok(());
    }

    let (profile, cmd_idx) = parse_global_profile_arg(&args)?;
    if args.len() <= cmd_idx {
        usage();
        return Err("Missing command".to_string());
    }

    let command = &args[cmd_idx];
    let field_args = &args[cmd_idx + 1..];

    match command.as_str() {
        "list-profiles" => list_profiles(),
        "compose" => {
            let form = form_from_args(profile, field_args)?;
            println!("{}", profile.compose(&form).command_line());
            Ok(())
        }
        "explain" => {
            let form = form_from_args(profile, field_args)?;
            let draft = profile.compose(&form);
            let command_line = draft.command_line();
            print_json(&DraftSummary {
                profile: profile.name(),
                command: &command_line,
                assignments: draft.assignments(),
            })
        }
        "copy" => {
            let form = form_from_args(profile, field_args)?;
            let command_line = profile.compose(&form).command_line();
            let method =
                clipboard::copy_to_clipboard(&command_line).map_err(|e| format!("{e:#}"))?;
            eprintln!("Copied install command to the clipboard via {method}");
            Ok(())
        }
        _ => {
            usage();
            Err(format!("Unknown command '{command}'"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_global_profile_arg() {
        let (profile, cmd_idx) = parse_global_profile_arg(&args(&["cli", "compose"])).unwrap();
        assert_eq!(profile.name(), PROFILES.default_profile().name());
        assert_eq!(cmd_idx, 1);

        let (profile, cmd_idx) =
            parse_global_profile_arg(&args(&["cli", "--profile", "tokens-only", "compose"]))
                .unwrap();
        assert_eq!(profile.name(), "tokens-only");
        assert_eq!(cmd_idx, 3);
    }

    #[test]
    fn test_unknown_profile_is_fatal() {
        let err = parse_global_profile_arg(&args(&["cli", "--profile", "bogus", "compose"]))
            .unwrap_err();
        assert!(err.contains("Unknown install profile 'bogus'"));
    }

    #[test]
    fn test_form_from_args_rejects_unknown_field() {
        let profile = PROFILES.default_profile();
        let form = form_from_args(profile, &args(&["dockerhub-token=abc"])).unwrap();
        assert_eq!(form.trimmed("dockerhub-token").as_deref(), Some("abc"));
        assert!(form_from_args(profile, &args(&["no-such-field=1"])).is_err());
    }
}
