pub const DISPLAY_VERSION: &str = env!("OCTOSTAR_INSTALLER_DISPLAY_VERSION");
pub const BUILD_N: &str = env!("OCTOSTAR_INSTALLER_BUILD_N");

pub fn version_cli_text() -> String {
    format!(
        "Octostar Install Composer {}\nBuild {}\nDesktop composer for the Octostar platform install command",
        DISPLAY_VERSION, BUILD_N
    )
}
