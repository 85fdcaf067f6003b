use std::time::{
    Duration,
    Instant,
};

use eframe::egui::{
    self,
    Color32,
    RichText,
};

use crate::{
    core::{
        AppSettings,
        AutoPlayLanguage,
        Deck,
        Word,
    },
    feedback::Feedback,
    gui::theme::Theme,
    playback::{
        Direction,
        PlaybackSession,
        Tick,
        TICK_GRANULARITY,
    },
    speech::SpeechTrigger,
};

const LANG_TAG_EN: &str = "en-GB";
const LANG_TAG_JA: &str = "ja-JP";
const LANG_TAG_BN: &str = "bn-BD";

/// Length of the white flash played when a new card becomes active.
const FLASH_DURATION: Duration = Duration::from_millis(250);

pub enum PlayerAction {
    Exit,
}

/// Player view: hosts one [`PlaybackSession`] for the lifetime of a review.
/// The session is polled once per frame and the frame after it is requested
/// at [`TICK_GRANULARITY`], so a session never has more than one pending
/// tick.
pub struct PlayerView {
    session: PlaybackSession,
    flash_started: Option<Instant>,
}

impl PlayerView {
    pub fn new(deck: Deck, settings: &AppSettings, speech: &mut SpeechTrigger) -> Self {
        let session = PlaybackSession::new(deck, settings.clamped_interval(), Instant::now());
        let mut view = Self { session, flash_started: None };
        view.on_card_activated(settings, speech);
        view
    }

    /// Interval changes apply to the countdown already in flight.
    pub fn set_interval(&mut self, seconds: u32) {
        self.session.set_interval(seconds);
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
        settings: &AppSettings,
        speech: &mut SpeechTrigger,
        feedback: &Feedback,
    ) -> Option<PlayerAction> {
        let now = Instant::now();
        if let Tick::Advanced = self.session.tick(now) {
            self.on_card_activated(settings, speech);
        }
        if self.session.is_playing() {
            ctx.request_repaint_after(TICK_GRANULARITY);
        }

        let mut action = None;

        egui::TopBottomPanel::top("player_top").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                egui::Frame::new()
                    .fill(theme.surface(ui.ctx()))
                    .corner_radius(egui::CornerRadius::same(12))
                    .inner_margin(egui::Margin::symmetric(12, 6))
                    .show(ui, |ui| {
                        let counter = if self.session.card_count() == 0 {
                            "0 / 0".to_string()
                        } else {
                            format!(
                                "{} / {}",
                                self.session.current_index() + 1,
                                self.session.card_count()
                            )
                        };
                        ui.label(RichText::new(counter).strong().color(theme.muted(ui.ctx())));
                    });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new("✕").size(18.0)).clicked() {
                        feedback.tap(settings);
                        action = Some(PlayerAction::Exit);
                    }
                });
            });
            ui.add_space(8.0);
        });

        egui::TopBottomPanel::bottom("player_controls").show(ctx, |ui| {
            ui.add_space(10.0);
            progress_bar(ui, theme, self.session.progress_fraction());
            ui.add_space(16.0);
            self.controls(ui, theme, settings, speech, feedback, now);
            ui.add_space(14.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.session.current_word().cloned() {
                Some(word) => word_card(ui, theme, settings, speech, feedback, &word),
                None => {
                    ui.add_space(120.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("This deck has no words").size(18.0).strong());
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new("Import some words to review it")
                                .color(theme.muted(ui.ctx())),
                        );
                    });
                }
            }
        });

        self.draw_flash(ctx, settings);

        action
    }

    fn controls(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        settings: &AppSettings,
        speech: &mut SpeechTrigger,
        feedback: &Feedback,
        now: Instant,
    ) {
        let small = egui::vec2(48.0, 48.0);
        let big = egui::vec2(68.0, 68.0);
        let gap = 28.0;
        let total = small.x * 2.0 + big.x + gap * 2.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = gap;
            ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

            if ui
                .add(egui::Button::new(RichText::new("⏮").size(22.0)).min_size(small))
                .clicked()
            {
                feedback.tap(settings);
                self.session.advance(Direction::Back, now);
                self.on_card_activated(settings, speech);
            }

            let play_icon = if self.session.is_playing() { "⏸" } else { "▶" };
            let play = egui::Button::new(
                RichText::new(play_icon).size(28.0).color(Color32::WHITE),
            )
            .fill(theme.primary(ui.ctx()))
            .corner_radius(egui::CornerRadius::same(22))
            .min_size(big);

            if ui.add(play).clicked() {
                feedback.tap(settings);
                self.session.toggle_play(now);
            }

            if ui
                .add(egui::Button::new(RichText::new("⏭").size(22.0)).min_size(small))
                .clicked()
            {
                feedback.tap(settings);
                self.session.advance(Direction::Forward, now);
                self.on_card_activated(settings, speech);
            }
        });
    }

    /// Runs whenever a card becomes active: session start, expiry, or a
    /// manual skip. Starts the flash and the configured auto-pronunciation.
    fn on_card_activated(&mut self, settings: &AppSettings, speech: &mut SpeechTrigger) {
        self.flash_started = Some(Instant::now());

        if let Some(word) = self.session.current_word() {
            if let Some((text, tag)) = auto_play_selection(settings.auto_play_language, word) {
                if !text.is_empty() {
                    speech.speak(text, tag);
                }
            }
        }
    }

    fn draw_flash(&mut self, ctx: &egui::Context, settings: &AppSettings) {
        if !settings.animations_enabled {
            self.flash_started = None;
            return;
        }

        let Some(started) = self.flash_started else { return };
        let progress = started.elapsed().as_secs_f32() / FLASH_DURATION.as_secs_f32();
        if progress >= 1.0 {
            self.flash_started = None;
            return;
        }

        let alpha = ((1.0 - progress) * 90.0) as u8;
        let painter = ctx
            .layer_painter(egui::LayerId::new(egui::Order::Foreground, egui::Id::new("card_flash")));
        painter.rect_filled(ctx.screen_rect(), 0.0, Color32::from_white_alpha(alpha));
        ctx.request_repaint();
    }
}

fn word_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    settings: &AppSettings,
    speech: &mut SpeechTrigger,
    feedback: &Feedback,
    word: &Word,
) {
    ui.add_space(24.0);

    let orange = theme.orange(ui.ctx());
    if language_section(ui, theme, "ENGLISH", orange, &word.en, None) {
        feedback.tap(settings);
        speech.speak(&word.en, LANG_TAG_EN);
    }
    ui.add_space(22.0);

    let sky = theme.sky(ui.ctx());
    let (jp_main, jp_sub) = if word.jp.kanji.is_empty() {
        (word.jp.kana.as_str(), None)
    } else {
        (word.jp.kanji.as_str(), Some(word.jp.kana.as_str()))
    };
    if language_section(ui, theme, "JAPANESE", sky, jp_main, jp_sub) {
        feedback.tap(settings);
        speech.speak(jp_main, LANG_TAG_JA);
    }
    ui.add_space(22.0);

    let emerald = theme.emerald(ui.ctx());
    if language_section(ui, theme, "BENGALI", emerald, &word.bn, None) {
        feedback.tap(settings);
        speech.speak(&word.bn, LANG_TAG_BN);
    }
}

/// One language block on the card; returns true when its speak button was
/// clicked.
fn language_section(
    ui: &mut egui::Ui,
    theme: &Theme,
    label: &str,
    accent: Color32,
    main: &str,
    sub: Option<&str>,
) -> bool {
    let mut clicked = false;

    ui.horizontal(|ui| {
        ui.add_space(16.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(label).small().strong().color(accent));
            ui.label(RichText::new(main).size(34.0).strong());
            if let Some(sub) = sub {
                ui.label(RichText::new(sub).color(theme.muted(ui.ctx())));
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(16.0);
            let speak = egui::Button::new(RichText::new("🔊").size(16.0).color(accent))
                .corner_radius(egui::CornerRadius::same(18))
                .min_size(egui::vec2(40.0, 40.0));
            clicked = ui.add(speak).on_hover_text("Play audio").clicked();
        });
    });

    clicked
}

fn progress_bar(ui: &mut egui::Ui, theme: &Theme, fraction: f32) {
    let desired = egui::vec2(ui.available_width(), 6.0);
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());

    ui.painter().rect_filled(rect, 3.0, ui.visuals().faint_bg_color);

    if fraction > 0.0 {
        let mut fill = rect;
        fill.set_width((rect.width() * fraction.clamp(0.0, 1.0)).max(6.0));
        ui.painter().rect_filled(fill, 3.0, theme.primary(ui.ctx()));
    }
}

fn auto_play_selection(language: AutoPlayLanguage, word: &Word) -> Option<(&str, &'static str)> {
    match language {
        AutoPlayLanguage::En => Some((word.en.as_str(), LANG_TAG_EN)),
        // The kanji form is what gets read aloud.
        AutoPlayLanguage::Jp => Some((word.jp.kanji.as_str(), LANG_TAG_JA)),
        AutoPlayLanguage::Bn => Some((word.bn.as_str(), LANG_TAG_BN)),
        AutoPlayLanguage::None => None,
    }
}
