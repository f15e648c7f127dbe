use crate::{
    about, clipboard,
    form_state::FormState,
    install_profile::InstallProfile,
    main_area_form::{FormAction, MainAreaForm},
    script_export, PROFILES, TRANSLATIONS,
};
use eframe::egui::{self, menu, Ui};

pub struct InstallerApp {
    profile_name: String,
    form: FormState,
    main_area: MainAreaForm,
    show_about: bool,
    show_help: bool,
}

impl InstallerApp {
    pub fn new() -> Self {
        Self {
            profile_name: PROFILES.default_profile().name().to_string(),
            form: FormState::default(),
            main_area: MainAreaForm::new(),
            show_about: false,
            show_help: false,
        }
    }

    pub fn new_with_profile(name: Option<&str>) -> Self {
        let mut ret = Self::new();
        if let Some(name) = name {
            if PROFILES.get(name).is_some() {
                ret.profile_name = name.to_string();
            } else {
                eprintln!("Unknown install profile '{name}', using '{}'", ret.profile_name);
            }
        }
        ret
    }

    pub fn profile(&self) -> &'static InstallProfile {
        PROFILES
            .get(&self.profile_name)
            .unwrap_or_else(|| PROFILES.default_profile())
    }

    fn composed_command(&self) -> String {
        self.profile().compose(&self.form).command_line()
    }

    pub fn render_menu_bar(&mut self, ui: &mut Ui) {
        menu::bar(ui, |ui| {
            ui.menu_button(TRANSLATIONS.get("m_file"), |ui| {
                if ui.button(TRANSLATIONS.get("m_save_script")).clicked() {
                    ui.close_menu();
                    self.save_script();
                }
                if ui.button(TRANSLATIONS.get("m_quit")).clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
            ui.menu_button(TRANSLATIONS.get("m_edit"), |ui| {
                let copy_allowed = self.form.copy_allowed(self.profile());
                let copy = egui::Button::new(TRANSLATIONS.get("m_copy_command"));
                if ui.add_enabled(copy_allowed, copy).clicked() {
                    ui.close_menu();
                    self.copy_command();
                }
                if ui.button(TRANSLATIONS.get("m_reset_form")).clicked() {
                    ui.close_menu();
                    self.form.reset();
                }
            });
            ui.menu_button(TRANSLATIONS.get("m_profile"), |ui| {
                for profile in PROFILES.iter() {
                    let checked = profile.name() == self.profile_name;
                    if ui
                        .radio(checked, TRANSLATIONS.get(profile.title_key()))
                        .clicked()
                    {
                        self.profile_name = profile.name().to_string();
                        ui.close_menu();
                    }
                }
            });
            ui.menu_button(TRANSLATIONS.get("m_help"), |ui| {
                if ui.button(TRANSLATIONS.get("m_help_contents")).clicked() {
                    ui.close_menu();
                    self.show_help = true;
                }
                if ui.button(TRANSLATIONS.get("m_about")).clicked() {
                    ui.close_menu();
                    self.show_about = true;
                }
            });
        });
    }

    fn handle_action(&mut self, action: FormAction) {
        match action {
            FormAction::CopyCommand => self.copy_command(),
            FormAction::SaveScript => self.save_script(),
            FormAction::ResetForm => self.form.reset(),
        }
    }

    fn copy_command(&self) {
        let command = self.composed_command();
        match clipboard::copy_to_clipboard(&command) {
            Ok(_) => alert_info("d_clipboard_title", &TRANSLATIONS.get("msg_copied")),
            Err(e) => alert_error(
                "d_clipboard_title",
                &format!("{} {e:#}", TRANSLATIONS.get("msg_copy_failed")),
            ),
        }
    }

    fn save_script(&self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("install-octostar.sh")
            .add_filter("Shell script", &["sh"])
            .save_file()
        else {
            return;
        };
        match script_export::write_script(&path, &self.composed_command()) {
            Ok(()) => alert_info(
                "d_save_title",
                &format!("{} {}", TRANSLATIONS.get("msg_saved"), path.display()),
            ),
            Err(e) => alert_error(
                "d_save_title",
                &format!("{} {e:#}", TRANSLATIONS.get("msg_save_failed")),
            ),
        }
    }

    fn render_about_window(&mut self, ctx: &egui::Context) {
        egui::Window::new(TRANSLATIONS.get("m_about"))
            .open(&mut self.show_about)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(about::version_cli_text());
                ui.add_space(4.0);
                ui.hyperlink("https://octostarco.github.io");
            });
    }

    fn render_help_window(&mut self, ctx: &egui::Context) {
        egui::Window::new(TRANSLATIONS.get("m_help_contents"))
            .open(&mut self.show_help)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.label(
                    "Fill in the access tokens for your Octostar installation; \
                     every field is optional.",
                );
                ui.add_space(4.0);
                ui.label(
                    "The install command below the form always matches the current \
                     entries. Copy it to the clipboard or save it as a shell script, \
                     then run it on the machine that will host the platform.",
                );
                ui.add_space(4.0);
                ui.label(
                    "Profiles change how blank token fields are treated: with \
                     placeholder defaults the assignment stays in the command with a \
                     stand-in value you replace later, otherwise blank fields are \
                     left out.",
                );
            });
    }
}

impl Default for InstallerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for InstallerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Show menu bar
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        // Show form, command preview and action buttons
        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            let profile = self.profile();
            action = self.main_area.render(ui, profile, &mut self.form);
        });
        if let Some(action) = action {
            self.handle_action(action);
        }

        self.render_about_window(ctx);
        self.render_help_window(ctx);
    }
}

fn alert_info(title_key: &str, message: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(TRANSLATIONS.get(title_key).as_str())
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn alert_error(title_key: &str, message: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(TRANSLATIONS.get(title_key).as_str())
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
