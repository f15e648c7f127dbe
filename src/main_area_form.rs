use crate::{
    command_draft::{AssignmentOrigin, CommandDraft},
    form_state::FormState,
    install_profile::{ControlKind, InstallProfile},
    TRANSLATIONS,
};
use eframe::egui;
use egui_extras::{Column, TableBuilder};

/// A click in the form area that the application has to act on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormAction {
    CopyCommand,
    SaveScript,
    ResetForm,
}

#[derive(Debug)]
pub struct MainAreaForm {
    show_breakdown: bool,
}

impl MainAreaForm {
    pub fn new() -> Self {
        Self {
            show_breakdown: true,
        }
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        profile: &InstallProfile,
        form: &mut FormState,
    ) -> Option<FormAction> {
        let mut action = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            self.render_fields(ui, profile, form);
            ui.separator();
            let draft = profile.compose(form);
            self.render_preview(ui, &draft);
            ui.add_space(4.0);
            self.render_breakdown(ui, &draft);
            ui.add_space(8.0);
            if let Some(clicked) = self.render_buttons(ui, profile, form) {
                action = Some(clicked);
            }
        });
        action
    }

    pub fn render_fields(
        &mut self,
        ui: &mut egui::Ui,
        profile: &InstallProfile,
        form: &mut FormState,
    ) {
        ui.heading(TRANSLATIONS.get("h_options"));
        egui::Grid::new("install_form_fields")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for field in profile
                    .fields()
                    .iter()
                    .filter(|field| field.control() == ControlKind::Text)
                {
                    ui.label(TRANSLATIONS.get(field.label_key()));
                    let hint = match field.placeholder() {
                        Some(placeholder) => placeholder.to_string(),
                        None => TRANSLATIONS.get("hint_optional"),
                    };
                    ui.add(
                        egui::TextEdit::singleline(form.text_mut(field.id()))
                            .hint_text(hint)
                            .desired_width(300.0),
                    );
                    ui.end_row();
                }
            });
        ui.add_space(4.0);
        for field in profile
            .fields()
            .iter()
            .filter(|field| field.control() == ControlKind::Checkbox)
        {
            ui.checkbox(form.check_mut(field.id()), TRANSLATIONS.get(field.label_key()));
        }
    }

    pub fn render_preview(&mut self, ui: &mut egui::Ui, draft: &CommandDraft) {
        ui.heading(TRANSLATIONS.get("h_command"));
        let command = draft.command_line();
        // Immutable buffer, so the preview is selectable but not editable.
        ui.add(
            egui::TextEdit::multiline(&mut command.as_str())
                .font(egui::TextStyle::Monospace)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
    }

    pub fn render_breakdown(&mut self, ui: &mut egui::Ui, draft: &CommandDraft) {
        ui.checkbox(&mut self.show_breakdown, TRANSLATIONS.get("h_breakdown"));
        if !self.show_breakdown {
            return;
        }
        if draft.assignments().is_empty() {
            ui.label(TRANSLATIONS.get("msg_no_assignments"));
            return;
        }
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto())
            .column(Column::remainder())
            .column(Column::auto())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong(TRANSLATIONS.get("col_variable"));
                });
                header.col(|ui| {
                    ui.strong(TRANSLATIONS.get("col_value"));
                });
                header.col(|ui| {
                    ui.strong(TRANSLATIONS.get("col_origin"));
                });
            })
            .body(|mut body| {
                for assignment in draft.assignments() {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.monospace(assignment.env_key.as_str());
                        });
                        row.col(|ui| {
                            ui.monospace(assignment.value.as_str());
                        });
                        row.col(|ui| {
                            ui.label(origin_label(assignment.origin));
                        });
                    });
                }
            });
    }

    pub fn render_buttons(
        &mut self,
        ui: &mut egui::Ui,
        profile: &InstallProfile,
        form: &mut FormState,
    ) -> Option<FormAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            let copy = egui::Button::new(TRANSLATIONS.get("b_copy"));
            if ui.add_enabled(form.copy_allowed(profile), copy).clicked() {
                action = Some(FormAction::CopyCommand);
            }
            if ui.button(TRANSLATIONS.get("b_save")).clicked() {
                action = Some(FormAction::SaveScript);
            }
            if ui.button(TRANSLATIONS.get("b_reset")).clicked() {
                action = Some(FormAction::ResetForm);
            }
        });
        action
    }
}

impl Default for MainAreaForm {
    fn default() -> Self {
        Self::new()
    }
}

fn origin_label(origin: AssignmentOrigin) -> String {
    match origin {
        AssignmentOrigin::UserValue => TRANSLATIONS.get("o_user"),
        AssignmentOrigin::PlaceholderDefault => TRANSLATIONS.get("o_placeholder"),
        AssignmentOrigin::FixedValue => TRANSLATIONS.get("o_fixed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_labels_are_distinct() {
        let labels = [
            origin_label(AssignmentOrigin::UserValue),
            origin_label(AssignmentOrigin::PlaceholderDefault),
            origin_label(AssignmentOrigin::FixedValue),
        ];
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
        assert_ne!(labels[0], labels[2]);
    }
}
