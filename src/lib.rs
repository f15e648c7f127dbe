use install_profile::InstallProfiles;
use lazy_static::lazy_static;
use translations::Translations;

pub mod about;
pub mod app;
pub mod clipboard;
pub mod command_draft;
pub mod form_state;
pub mod install_profile;
pub mod main_area_form;
pub mod script_export;
pub mod translations;

lazy_static! {
    // Interface translations
    pub static ref TRANSLATIONS: Translations = Translations::default();

    // Install command profiles
    pub static ref PROFILES: InstallProfiles = InstallProfiles::default();
}
