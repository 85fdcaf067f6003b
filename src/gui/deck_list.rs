use std::time::{
    Duration,
    Instant,
};

use eframe::egui::{
    self,
    RichText,
};
use uuid::Uuid;

use crate::{
    core::{
        AppSettings,
        Deck,
    },
    feedback::Feedback,
    gui::theme::Theme,
};

/// How long an armed delete waits for its confirming second tap.
const DELETE_CONFIRM_WINDOW: Duration = Duration::from_secs(3);

pub enum DeckListAction {
    Open(Uuid),
    Delete(Uuid),
    CreateNew,
    OpenSettings,
}

/// Home view: every stored deck as a card, newest first, plus entry points
/// to the import wizard and the settings view. Deleting takes two taps; the
/// first arms a single deck and disarms itself after three seconds.
#[derive(Default)]
pub struct DeckListView {
    pending_delete: Option<(Uuid, Instant)>,
}

impl DeckListView {
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        decks: &[Deck],
        theme: &Theme,
        feedback: &Feedback,
        settings: &AppSettings,
    ) -> Option<DeckListAction> {
        if let Some((_, armed_at)) = self.pending_delete {
            if armed_at.elapsed() >= DELETE_CONFIRM_WINDOW {
                self.pending_delete = None;
            } else {
                ctx.request_repaint_after(DELETE_CONFIRM_WINDOW.saturating_sub(armed_at.elapsed()));
            }
        }

        let mut action = None;

        egui::TopBottomPanel::top("deck_list_top").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(theme.heading(ctx, "Flashify").size(26.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(RichText::new("⚙").size(18.0))
                        .on_hover_text("Settings")
                        .clicked()
                    {
                        feedback.tap(settings);
                        action = Some(DeckListAction::OpenSettings);
                    }
                });
            });
            ui.add_space(8.0);
        });

        egui::TopBottomPanel::bottom("deck_list_bottom").show(ctx, |ui| {
            ui.add_space(10.0);
            let new_deck = egui::Button::new(
                RichText::new("+  New Deck").size(16.0).strong().color(egui::Color32::WHITE),
            )
            .fill(theme.primary(ctx))
            .corner_radius(egui::CornerRadius::same(14))
            .min_size(egui::vec2(ui.available_width(), 46.0));

            if ui.add(new_deck).clicked() {
                feedback.tap(settings);
                action = Some(DeckListAction::CreateNew);
            }
            ui.add_space(10.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if decks.is_empty() {
                ui.add_space(100.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No decks yet").size(20.0).strong());
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new("Create one to start learning").color(theme.muted(ctx)),
                    );
                });
                return;
            }

            egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                ui.add_space(8.0);
                for deck in decks {
                    if let Some(deck_action) =
                        self.deck_card(ui, deck, theme, feedback, settings)
                    {
                        action = Some(deck_action);
                    }
                    ui.add_space(8.0);
                }
            });
        });

        action
    }

    fn deck_card(
        &mut self,
        ui: &mut egui::Ui,
        deck: &Deck,
        theme: &Theme,
        feedback: &Feedback,
        settings: &AppSettings,
    ) -> Option<DeckListAction> {
        let mut action = None;

        egui::Frame::new()
            .fill(theme.surface(ui.ctx()))
            .corner_radius(egui::CornerRadius::same(14))
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    egui::Frame::new()
                        .fill(theme.primary_soft(ui.ctx()))
                        .corner_radius(egui::CornerRadius::same(10))
                        .inner_margin(egui::Margin::symmetric(14, 10))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(deck.words.len().to_string())
                                    .strong()
                                    .color(theme.primary(ui.ctx())),
                            );
                        });

                    ui.vertical(|ui| {
                        let title = ui.add(
                            egui::Label::new(RichText::new(&deck.title).size(16.0).strong())
                                .sense(egui::Sense::click())
                                .truncate(),
                        );
                        if title.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                            feedback.tap(settings);
                            action = Some(DeckListAction::Open(deck.id));
                        }
                        ui.label(
                            RichText::new(deck.created_at.format("%b %e, %Y").to_string())
                                .small()
                                .color(theme.muted(ui.ctx())),
                        );
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let armed =
                            self.pending_delete.map(|(id, _)| id == deck.id).unwrap_or(false);

                        if armed {
                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new("Delete").color(egui::Color32::WHITE),
                                    )
                                    .fill(theme.red(ui.ctx())),
                                )
                                .clicked()
                            {
                                self.pending_delete = None;
                                action = Some(DeckListAction::Delete(deck.id));
                            }
                            if ui.button("✕").clicked() {
                                feedback.tap(settings);
                                self.pending_delete = None;
                            }
                        } else {
                            if ui.button("🗑").on_hover_text("Delete deck").clicked() {
                                feedback.tap(settings);
                                self.pending_delete = Some((deck.id, Instant::now()));
                            }
                            if ui.button("▶").on_hover_text("Review").clicked() {
                                feedback.tap(settings);
                                action = Some(DeckListAction::Open(deck.id));
                            }
                        }
                    });
                });
            });

        action
    }
}
