//! Sign-in / sign-up screen.

use super::{LoginForm, LoginMode, UiAction};
use deskboard_core::auth::Credentials;
use deskboard_widgets::{ActionButton, panel_frame, theme};
use egui::{Align2, Context, RichText, TextEdit, Vec2};

pub fn render_login(ctx: &Context, form: &mut LoginForm) -> Option<UiAction> {
    let mut action = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(theme::CANVAS_BG))
        .show(ctx, |_ui| {});

    egui::Area::new(egui::Id::new("login_card"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            panel_frame().inner_margin(egui::Margin::same(24)).show(ui, |ui| {
                ui.set_width(340.0);
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(0.0, 10.0);
                    ui.label(RichText::new("Deskboard").size(24.0).strong().color(theme::TEXT));
                    let subtitle = match form.mode {
                        LoginMode::SignIn => "Sign in to your dashboard",
                        LoginMode::SignUp => "Create an account",
                    };
                    ui.label(RichText::new(subtitle).color(theme::TEXT_MUTED));

                    ui.add(TextEdit::singleline(&mut form.email).hint_text("Email").desired_width(f32::INFINITY));
                    let password = ui.add(
                        TextEdit::singleline(&mut form.password)
                            .password(true)
                            .hint_text("Password")
                            .desired_width(f32::INFINITY),
                    );
                    let submitted = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    if let Some(error) = &form.error {
                        ui.label(RichText::new(error).color(theme::DANGER));
                    }
                    if let Some(message) = &form.message {
                        ui.label(RichText::new(message).color(theme::ACCENT));
                    }

                    let label = match form.mode {
                        LoginMode::SignIn => "Sign In",
                        LoginMode::SignUp => "Sign Up",
                    };
                    if ActionButton::new(label).min_width(340.0).show(ui) || submitted {
                        action = submit(form);
                    }

                    let switch = match form.mode {
                        LoginMode::SignIn => "Don't have an account? Sign up",
                        LoginMode::SignUp => "Already have an account? Sign in",
                    };
                    if ui.link(RichText::new(switch).color(theme::TEXT_MUTED)).clicked() {
                        form.mode = match form.mode {
                            LoginMode::SignIn => LoginMode::SignUp,
                            LoginMode::SignUp => LoginMode::SignIn,
                        };
                        form.error = None;
                        form.message = None;
                    }
                });
            });
        });

    action
}

/// Validate locally; only well-formed credentials reach the provider.
fn submit(form: &mut LoginForm) -> Option<UiAction> {
    let credentials = Credentials::new(form.email.trim(), form.password.clone());
    form.message = None;
    if let Err(e) = credentials.validate() {
        form.error = Some(e.to_string());
        return None;
    }
    form.error = None;
    Some(match form.mode {
        LoginMode::SignIn => UiAction::SignIn(credentials),
        LoginMode::SignUp => UiAction::SignUp(credentials),
    })
}
