use egui::{RichText, TextEdit, Ui};
use reqwest::Url;

use crate::account::authorize::authorize_url;
use crate::account::form::FormState;
use crate::account::Field;
use crate::settings::AuthorizeSettings;

/// What the user asked for this frame
pub enum FormEvent {
    None,
    Submit,
    Edited,
}

pub fn show_form(
    ui: &mut Ui,
    form: &mut FormState,
    busy: bool,
    authorize: &AuthorizeSettings,
    oauth_state: &str,
    accounts_url: Option<&Url>,
) -> FormEvent {
    let mut event = FormEvent::None;

    ui.vertical_centered_justified(|ui| {
        ui.heading("Add Account");
        ui.separator();
    });

    for field in Field::ALL {
        if show_field(ui, form, field) {
            event = FormEvent::Edited;
        }
        ui.add_space(8.0);
    }

    ui.separator();
    ui.horizontal(|ui| {
        let label = if busy { "Adding..." } else { "Get Code" };
        if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
            event = FormEvent::Submit;
        }

        if busy {
            ui.spinner();
        }

        let client_id = form.draft().client_id.as_str();
        ui.add_enabled_ui(!client_id.is_empty(), |ui| {
            match authorize_url(authorize, client_id, oauth_state) {
                Ok(url) => {
                    ui.hyperlink_to("Sign in", url)
                        .on_disabled_hover_text("Fill in the client id first");
                }
                Err(e) => {
                    ui.label("Sign in").on_hover_text(e.to_string());
                }
            }
        });

        if let Some(url) = accounts_url {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.hyperlink_to("Go to Accounts", url);
            });
        }
    });

    let errors = form.errors();
    if !errors.is_empty() {
        ui.colored_label(ui.visuals().error_fg_color, errors.to_string());
    }

    event
}

/// Returns whether the value changed this frame
fn show_field(ui: &mut Ui, form: &mut FormState, field: Field) -> bool {
    let label = ui.label(RichText::new(field.label()).strong());

    let mut value = form.draft().get(field).to_owned();
    let edit = TextEdit::singleline(&mut value)
        .hint_text(field.placeholder())
        .password(field == Field::ClientSecret)
        .desired_width(f32::INFINITY);

    // The code comes from the redirect, never from the keyboard
    let r = ui.add_enabled(field != Field::Code, edit).labelled_by(label.id);
    let changed = r.changed() && form.set(field, value);

    if let Some(e) = form.error(field) {
        ui.colored_label(ui.visuals().error_fg_color, e);
    }

    changed
}
