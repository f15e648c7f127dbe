use eframe::{egui, NativeOptions};
use octostar_installer::{about, app};
use std::env;

#[cfg(target_os = "macos")]
fn configure_macos_process_name() {
    use objc2_foundation::{ns_string, NSProcessInfo};
    // Winit builds the macOS app menu title from NSProcessInfo::processName.
    // Set it early so the native menu shows the product name, not the bin name.
    unsafe {
        NSProcessInfo::processInfo().setProcessName(ns_string!("Octostar Install Composer"));
    }
}

#[cfg(not(target_os = "macos"))]
fn configure_macos_process_name() {}

fn main() -> eframe::Result<()> {
    configure_macos_process_name();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", about::version_cli_text());
        return Ok(());
    }
    let profile_name = args.iter().find(|a| !a.starts_with('-')).cloned();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([420.0, 360.0]),

        ..Default::default()
    };

    eframe::run_native(
        "Octostar Install Composer",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(app::InstallerApp::new_with_profile(
                profile_name.as_deref(),
            )))
        }),
    )
}
