use std::time::{
    Duration,
    Instant,
};

use eframe::egui::{
    self,
    RichText,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::{
        import::{
            parse_import,
            ImportPayload,
        },
        AppSettings,
        Deck,
        FlashifyError,
    },
    feedback::Feedback,
    gui::theme::Theme,
};

/// How long the copy button shows its copied state.
const COPIED_FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

/// Canned prompt handed to a language model to produce the import JSON.
const AI_PROMPT: &str = r#"Generate a JSON object for a flashcard based word learning app.

IMPORTANT OUTPUT RULES:
1) Output ONLY the JSON data, wrapped in a triple-backtick code block labeled json.
2) The JSON must remain valid and unchanged.

APP CONTEXT:
Flashify is a word learning app. Generate ONLY individual words, never
sentences, phrases, examples, or explanations.

JSON FORMAT:
{
  "title": "Topic Name",
  "words": [
    {
      "en": "English word",
      "bn": "Bangla word",
      "jp": {
        "kanji": "Kanji or empty if none",
        "kana": "Kana reading"
      }
    }
  ]
}

WORD RULES:
- Keep words simple, common, and learner friendly.
- Japanese words must be in dictionary form.
- If a Japanese word has no kanji, leave "kanji" empty ("").
- Kana must be hiragana or katakana as appropriate.

CONTENT RULES:
- The "words" array must contain 5-10 words only.
- The title must clearly describe the topic.
- Output only valid JSON inside the code block."#;

pub enum ImportAction {
    Back,
    Created(Deck),
}

/// Import wizard: copy the prompt, paste the JSON, parse it, review the
/// words, pick a title, create the deck. Parse failures tell the user
/// whether the syntax or the schema was at fault, and never leave a partial
/// deck behind.
#[derive(Default)]
pub struct ImportWizardView {
    json_input: String,
    deck_title: String,
    parsed: Option<ImportPayload>,
    error: Option<String>,
    copied_at: Option<Instant>,
}

impl ImportWizardView {
    /// Clears all wizard state; called when the view is (re)entered.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
        feedback: &Feedback,
        settings: &AppSettings,
    ) -> Option<ImportAction> {
        if let Some(copied_at) = self.copied_at {
            if copied_at.elapsed() >= COPIED_FEEDBACK_WINDOW {
                self.copied_at = None;
            } else {
                ctx.request_repaint_after(
                    COPIED_FEEDBACK_WINDOW.saturating_sub(copied_at.elapsed()),
                );
            }
        }

        let mut action = None;

        egui::TopBottomPanel::top("import_top").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("←").size(18.0)).clicked() {
                    feedback.tap(settings);
                    action = Some(ImportAction::Back);
                }
                ui.label(RichText::new("New Deck").size(20.0).strong());
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                ui.add_space(8.0);
                self.prompt_step(ui, ctx, theme, feedback, settings);
                ui.add_space(10.0);
                self.paste_step(ui, theme, feedback, settings);
                ui.add_space(10.0);
                if self.parsed.is_some() {
                    if let Some(deck) = self.finalize_step(ui, theme, feedback, settings) {
                        action = Some(ImportAction::Created(deck));
                    }
                }
                ui.add_space(8.0);
            });
        });

        action
    }

    fn prompt_step(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        theme: &Theme,
        feedback: &Feedback,
        settings: &AppSettings,
    ) {
        step_frame(ui, theme, |ui| {
            ui.horizontal(|ui| {
                step_badge(ui, theme, "1");
                ui.vertical(|ui| {
                    ui.label(RichText::new("Get Words").size(16.0).strong());
                    ui.label(
                        RichText::new("Copy the AI prompt and run it in an assistant")
                            .small()
                            .color(theme.muted(ui.ctx())),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let copied = self.copied_at.is_some();
                    let label = if copied { "✔ Copied" } else { "Copy" };
                    let fill = if copied {
                        theme.green(ui.ctx())
                    } else {
                        theme.primary(ui.ctx())
                    };
                    let button = egui::Button::new(
                        RichText::new(label).strong().color(egui::Color32::WHITE),
                    )
                    .fill(fill)
                    .corner_radius(egui::CornerRadius::same(10));

                    if ui.add(button).clicked() && !copied {
                        feedback.tap(settings);
                        ctx.copy_text(AI_PROMPT.to_string());
                        self.copied_at = Some(Instant::now());
                    }
                });
            });
        });
    }

    fn paste_step(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        feedback: &Feedback,
        settings: &AppSettings,
    ) {
        step_frame(ui, theme, |ui| {
            ui.horizontal(|ui| {
                step_badge(ui, theme, "2");
                ui.label(RichText::new("Paste JSON").size(16.0).strong());
            });
            ui.add_space(6.0);

            ui.add(
                egui::TextEdit::multiline(&mut self.json_input)
                    .hint_text("Paste result here...")
                    .font(egui::TextStyle::Monospace)
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );

            if let Some(error) = &self.error {
                ui.add_space(4.0);
                ui.colored_label(theme.red(ui.ctx()), format!("⚠ {}", error));
            }

            ui.add_space(6.0);
            let parse = egui::Button::new(RichText::new("Parse Words").strong())
                .min_size(egui::vec2(ui.available_width(), 36.0));
            if ui.add_enabled(!self.json_input.trim().is_empty(), parse).clicked() {
                feedback.tap(settings);
                self.parse_input(feedback, settings);
            }
        });
    }

    fn finalize_step(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        feedback: &Feedback,
        settings: &AppSettings,
    ) -> Option<Deck> {
        let mut created = None;

        step_frame(ui, theme, |ui| {
            ui.horizontal(|ui| {
                step_badge(ui, theme, "3");
                ui.label(RichText::new("Finalize").size(16.0).strong());
            });
            ui.add_space(6.0);

            ui.label(RichText::new("Deck Title").small().color(theme.muted(ui.ctx())));
            ui.add(
                egui::TextEdit::singleline(&mut self.deck_title)
                    .hint_text("e.g. Animals, Travel...")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            if let Some(payload) = &self.parsed {
                words_table(ui, theme, payload);
                ui.add_space(8.0);
            }

            let create = egui::Button::new(
                RichText::new("Create Deck").strong().color(egui::Color32::WHITE),
            )
            .fill(theme.primary(ui.ctx()))
            .corner_radius(egui::CornerRadius::same(12))
            .min_size(egui::vec2(ui.available_width(), 42.0));

            if ui.add_enabled(!self.deck_title.trim().is_empty(), create).clicked() {
                if let Some(payload) = self.parsed.take() {
                    feedback.success(settings);
                    created = Some(payload.into_deck(self.deck_title.trim().to_string()));
                }
            }
        });

        created
    }

    fn parse_input(&mut self, feedback: &Feedback, settings: &AppSettings) {
        match parse_import(&self.json_input) {
            Ok(payload) => {
                if let Some(title) = &payload.title {
                    self.deck_title = title.clone();
                }
                self.parsed = Some(payload);
                self.error = None;
                feedback.success(settings);
            }
            Err(FlashifyError::InvalidSyntax(_)) => {
                self.parsed = None;
                self.error = Some("Invalid JSON syntax. Check for missing brackets.".to_string());
                feedback.error(settings);
            }
            Err(_) => {
                self.parsed = None;
                self.error =
                    Some("Invalid format. Make sure the JSON matches the strict schema.".to_string());
                feedback.error(settings);
            }
        }
    }
}

fn step_frame(ui: &mut egui::Ui, theme: &Theme, content: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(theme.surface(ui.ctx()))
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            content(ui);
        });
}

fn step_badge(ui: &mut egui::Ui, theme: &Theme, number: &str) {
    egui::Frame::new()
        .fill(theme.primary_soft(ui.ctx()))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(RichText::new(number).strong().color(theme.primary(ui.ctx())));
        });
}

fn words_table(ui: &mut egui::Ui, theme: &Theme, payload: &ImportPayload) {
    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

    // The wizard body already scrolls; the table must not scroll on its own.
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(24.0))
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::remainder())
        .header(22.0, |mut header| {
            header.col(|_ui| {});
            header.col(|ui| {
                ui.label(RichText::new("English").strong().color(theme.orange(ui.ctx())));
            });
            header.col(|ui| {
                ui.label(RichText::new("Japanese").strong().color(theme.sky(ui.ctx())));
            });
            header.col(|ui| {
                ui.label(RichText::new("Bengali").strong().color(theme.emerald(ui.ctx())));
            });
        })
        .body(|body| {
            body.rows(text_height + 6.0, payload.words.len(), |mut row| {
                let index = row.index();
                let word = &payload.words[index];

                row.col(|ui| {
                    ui.label(
                        RichText::new((index + 1).to_string()).color(theme.muted(ui.ctx())),
                    );
                });
                row.col(|ui| {
                    ui.label(&word.en);
                });
                row.col(|ui| {
                    let jp = if word.kanji.is_empty() {
                        word.kana.clone()
                    } else {
                        format!("{} ({})", word.kanji, word.kana)
                    };
                    ui.label(jp);
                });
                row.col(|ui| {
                    ui.label(&word.bn);
                });
            });
        });
}
