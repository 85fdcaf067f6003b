use eframe::egui::{
    self,
    RichText,
};

use crate::{
    core::{
        settings::{
            MAX_INTERVAL_SECS,
            MIN_INTERVAL_SECS,
        },
        AppSettings,
        AutoPlayLanguage,
        ThemeMode,
    },
    feedback::Feedback,
    gui::theme::Theme,
};

pub enum SettingsAction {
    Back,
    Changed(AppSettings),
}

/// Settings view. Stateless: widgets edit a working copy and any difference
/// from the current record is handed back to the app, which persists and
/// applies it.
pub struct SettingsView;

impl SettingsView {
    pub fn show(
        ctx: &egui::Context,
        settings: &AppSettings,
        theme: &Theme,
        feedback: &Feedback,
    ) -> Option<SettingsAction> {
        let mut updated = settings.clone();
        let mut back = false;

        egui::TopBottomPanel::top("settings_top").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("←").size(18.0)).clicked() {
                    feedback.tap(settings);
                    back = true;
                }
                ui.label(RichText::new("Settings").size(20.0).strong());
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                ui.add_space(8.0);

                section_label(ui, theme, "Appearance");
                ui.horizontal(|ui| {
                    for (label, mode) in [
                        ("System", ThemeMode::System),
                        ("Light", ThemeMode::Light),
                        ("Dark", ThemeMode::Dark),
                    ] {
                        if option_box(ui, theme, label, updated.theme == mode) {
                            feedback.toggle(settings, true);
                            updated.theme = mode;
                        }
                    }
                });
                ui.add_space(14.0);

                section_label(ui, theme, "Auto Pronunciation");
                ui.horizontal(|ui| {
                    for (label, language) in [
                        ("English", AutoPlayLanguage::En),
                        ("Japanese", AutoPlayLanguage::Jp),
                        ("Bengali", AutoPlayLanguage::Bn),
                    ] {
                        let selected = updated.auto_play_language == language;
                        if option_box(ui, theme, label, selected) {
                            // Re-selecting the active language switches it off.
                            let next = if selected { AutoPlayLanguage::None } else { language };
                            feedback.toggle(settings, next != AutoPlayLanguage::None);
                            updated.auto_play_language = next;
                        }
                    }
                });
                ui.add_space(14.0);

                section_label(ui, theme, "Experience");
                toggle_row(ui, theme, feedback, settings, "Sound Effects", &mut updated.sound_enabled);
                toggle_row(ui, theme, feedback, settings, "Haptics", &mut updated.haptics_enabled);
                toggle_row(
                    ui,
                    theme,
                    feedback,
                    settings,
                    "Animations",
                    &mut updated.animations_enabled,
                );
                ui.add_space(14.0);

                section_label(ui, theme, "Speed");
                egui::Frame::new()
                    .fill(theme.surface(ui.ctx()))
                    .corner_radius(egui::CornerRadius::same(16))
                    .inner_margin(egui::Margin::same(14))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new(format!("{} seconds", updated.interval))
                                .size(16.0)
                                .strong(),
                        );
                        ui.label(
                            RichText::new("Duration per card").small().color(theme.muted(ui.ctx())),
                        );
                        ui.add_space(6.0);
                        ui.add(
                            egui::Slider::new(
                                &mut updated.interval,
                                MIN_INTERVAL_SECS..=MAX_INTERVAL_SECS,
                            )
                            .suffix(" s"),
                        );
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new("Fast (3s)").small().color(theme.muted(ui.ctx())),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new("Slow (20s)")
                                            .small()
                                            .color(theme.muted(ui.ctx())),
                                    );
                                },
                            );
                        });
                    });

                ui.add_space(8.0);
            });
        });

        if back {
            Some(SettingsAction::Back)
        } else if updated != *settings {
            Some(SettingsAction::Changed(updated))
        } else {
            None
        }
    }
}

fn section_label(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(RichText::new(text.to_uppercase()).small().strong().color(theme.muted(ui.ctx())));
    ui.add_space(6.0);
}

/// One of a mutually exclusive set of choice boxes; returns true on click.
fn option_box(ui: &mut egui::Ui, theme: &Theme, label: &str, selected: bool) -> bool {
    let (fill, text_color) = if selected {
        (theme.primary(ui.ctx()), egui::Color32::WHITE)
    } else {
        (theme.surface(ui.ctx()), theme.muted(ui.ctx()))
    };

    let button = egui::Button::new(RichText::new(label).strong().color(text_color))
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(12))
        .min_size(egui::vec2(0.0, 40.0));

    ui.add(button).clicked()
}

fn toggle_row(
    ui: &mut egui::Ui,
    theme: &Theme,
    feedback: &Feedback,
    settings: &AppSettings,
    label: &str,
    value: &mut bool,
) {
    egui::Frame::new()
        .fill(theme.surface(ui.ctx()))
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).size(15.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if toggle_switch(ui, theme, value, settings.animations_enabled).changed() {
                        // Gate on the settings in force before this click,
                        // pitch direction on the new value.
                        feedback.toggle(settings, *value);
                    }
                });
            });
        });
    ui.add_space(6.0);
}

/// Small animated switch in the shape egui's toggle demo established.
fn toggle_switch(
    ui: &mut egui::Ui,
    theme: &Theme,
    on: &mut bool,
    animate: bool,
) -> egui::Response {
    let desired_size = egui::vec2(44.0, 24.0);
    let (rect, mut response) = ui.allocate_exact_size(desired_size, egui::Sense::click());
    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        let how_on = if animate {
            ui.ctx().animate_bool_responsive(response.id, *on)
        } else if *on {
            1.0
        } else {
            0.0
        };

        let fill = if *on {
            theme.primary(ui.ctx())
        } else {
            ui.visuals().widgets.inactive.bg_fill
        };

        let radius = 0.5 * rect.height();
        ui.painter().rect_filled(rect, radius, fill);
        let circle_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        ui.painter().circle_filled(
            egui::pos2(circle_x, rect.center().y),
            0.75 * radius,
            egui::Color32::WHITE,
        );
    }

    response
}
