use eframe::egui;

use crate::{
    core::{
        AppSettings,
        Deck,
    },
    feedback::Feedback,
    gui::{
        deck_list::{
            DeckListAction,
            DeckListView,
        },
        import_wizard::{
            ImportAction,
            ImportWizardView,
        },
        player::{
            PlayerAction,
            PlayerView,
        },
        settings_view::{
            SettingsAction,
            SettingsView,
        },
        theme::{
            apply_theme_mode,
            set_theme,
            Theme,
        },
    },
    speech::SpeechTrigger,
    storage::DeckStore,
};

/// Which top-level screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppView {
    Home,
    Import,
    Play,
    Settings,
}

pub struct FlashifyApp {
    // Persistence
    store: DeckStore,
    decks: Vec<Deck>,

    // Configuration
    settings: AppSettings,

    // UI State
    view: AppView,
    theme: Theme,
    deck_list: DeckListView,
    import: ImportWizardView,
    player: Option<PlayerView>,

    // External Services
    speech: SpeechTrigger,
    feedback: Feedback,
}

impl FlashifyApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let store = DeckStore::open_default();
        let decks = store.list();
        let settings = store.load_settings();

        let theme = Theme::default();
        set_theme(&cc.egui_ctx, theme.clone());
        apply_theme_mode(&cc.egui_ctx, settings.theme);
        setup_fonts(&cc.egui_ctx);

        Self {
            // Persistence
            store,
            decks,

            // Configuration
            settings,

            // UI State
            view: AppView::Home,
            theme,
            deck_list: DeckListView::default(),
            import: ImportWizardView::default(),
            player: None,

            // External Services
            speech: SpeechTrigger::new(),
            feedback: Feedback::new(),
        }
    }

    fn reload_decks(&mut self) {
        self.decks = self.store.list();
    }

    fn apply_settings(&mut self, ctx: &egui::Context, settings: AppSettings) {
        if settings.theme != self.settings.theme {
            apply_theme_mode(ctx, settings.theme);
        }
        if let Some(player) = &mut self.player {
            player.set_interval(settings.clamped_interval());
        }

        self.settings = settings;
        self.store.save_settings(&self.settings);
    }

    /// Leaving the player tears the session down and silences whatever it
    /// was saying.
    fn close_player(&mut self) {
        self.player = None;
        self.speech.stop();
        self.view = AppView::Home;
    }
}

impl eframe::App for FlashifyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.view {
            AppView::Home => {
                let action = self.deck_list.show(
                    ctx,
                    &self.decks,
                    &self.theme,
                    &self.feedback,
                    &self.settings,
                );
                match action {
                    Some(DeckListAction::Open(id)) => {
                        if let Some(deck) = self.decks.iter().find(|d| d.id == id).cloned() {
                            self.player =
                                Some(PlayerView::new(deck, &self.settings, &mut self.speech));
                            self.view = AppView::Play;
                        }
                    }
                    Some(DeckListAction::Delete(id)) => {
                        self.feedback.delete(&self.settings);
                        self.store.remove(id);
                        self.reload_decks();
                    }
                    Some(DeckListAction::CreateNew) => {
                        self.import.reset();
                        self.view = AppView::Import;
                    }
                    Some(DeckListAction::OpenSettings) => {
                        self.view = AppView::Settings;
                    }
                    None => {}
                }
            }

            AppView::Import => {
                let action =
                    self.import.show(ctx, &self.theme, &self.feedback, &self.settings);
                match action {
                    Some(ImportAction::Back) => {
                        self.view = AppView::Home;
                    }
                    Some(ImportAction::Created(deck)) => {
                        self.store.upsert(deck);
                        self.reload_decks();
                        self.import.reset();
                        self.view = AppView::Home;
                    }
                    None => {}
                }
            }

            AppView::Settings => {
                let action = SettingsView::show(ctx, &self.settings, &self.theme, &self.feedback);
                match action {
                    Some(SettingsAction::Back) => {
                        self.view = AppView::Home;
                    }
                    Some(SettingsAction::Changed(settings)) => {
                        self.apply_settings(ctx, settings);
                    }
                    None => {}
                }
            }

            AppView::Play => {
                let mut exit = self.player.is_none();
                if let Some(player) = &mut self.player {
                    let action = player.show(
                        ctx,
                        &self.theme,
                        &self.settings,
                        &mut self.speech,
                        &self.feedback,
                    );
                    if let Some(PlayerAction::Exit) = action {
                        exit = true;
                    }
                }
                if exit {
                    self.close_player();
                }
            }
        }
    }
}

/// egui's bundled fonts have no CJK or Bengali coverage, so pull in system
/// Noto fonts when they exist and fall back silently otherwise (cards still
/// render, glyphs outside the default fonts show as boxes).
fn setup_fonts(ctx: &egui::Context) {
    let candidates: &[(&str, &[&str])] = &[
        (
            "noto_sans_jp",
            &[
                "/usr/share/fonts/truetype/noto/NotoSansJP-Regular.ttf",
                "/usr/share/fonts/noto/NotoSansJP-Regular.ttf",
                "/usr/share/fonts/google-noto/NotoSansJP-Regular.ttf",
                "/usr/share/fonts/opentype/noto/NotoSansJP-Regular.otf",
                "/System/Library/Fonts/Supplemental/NotoSansJP-Regular.otf",
                "C:\\Windows\\Fonts\\NotoSansJP-Regular.ttf",
            ],
        ),
        (
            "noto_sans_bengali",
            &[
                "/usr/share/fonts/truetype/noto/NotoSansBengali-Regular.ttf",
                "/usr/share/fonts/noto/NotoSansBengali-Regular.ttf",
                "/usr/share/fonts/google-noto/NotoSansBengali-Regular.ttf",
                "/System/Library/Fonts/Supplemental/NotoSansBengali-Regular.otf",
                "C:\\Windows\\Fonts\\NotoSansBengali-Regular.ttf",
            ],
        ),
    ];

    let mut fonts = egui::FontDefinitions::default();
    let mut loaded = Vec::new();

    for (name, paths) in candidates {
        if let Some(bytes) = paths.iter().find_map(|path| std::fs::read(path).ok()) {
            fonts.font_data.insert(
                (*name).to_owned(),
                std::sync::Arc::new(egui::FontData::from_owned(bytes)),
            );
            loaded.push(*name);
        }
    }

    if loaded.is_empty() {
        return;
    }

    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        let list = fonts.families.entry(family).or_default();
        for name in &loaded {
            list.push((*name).to_owned());
        }
    }

    ctx.set_fonts(fonts);
}
