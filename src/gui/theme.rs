use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

use crate::core::ThemeMode;

/// Both palette variants are registered with egui up front; which one is
/// active follows the theme preference (System tracks the OS).
#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::flashify()
    }
}

impl Theme {
    pub fn flashify() -> Self {
        Theme { dark: ThemeDetails::flashify_dark(), light: ThemeDetails::flashify_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).primary).strong()
    }

    pub fn primary(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).primary
    }

    pub fn primary_soft(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).primary_soft
    }

    pub fn surface(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).surface
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).muted
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    // Per-language accent colors on the word card.
    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }

    pub fn sky(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).sky
    }

    pub fn emerald(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).emerald
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    surface: Color32,
    surface_dim: Color32,
    surface_variant: Color32,
    foreground: Color32,
    muted: Color32,
    selection: Color32,
    primary: Color32,
    primary_soft: Color32,
    red: Color32,
    green: Color32,
    orange: Color32,
    sky: Color32,
    emerald: Color32,
}

impl ThemeDetails {
    fn flashify_dark() -> Self {
        Self {
            background: Color32::from_rgb(18, 18, 18),
            surface: Color32::from_rgb(30, 27, 36),
            surface_dim: Color32::from_rgb(13, 13, 16),
            surface_variant: Color32::from_rgb(42, 38, 49),
            foreground: Color32::from_rgb(245, 245, 245),
            muted: Color32::from_rgb(156, 163, 175),
            selection: Color32::from_rgb(58, 51, 68),
            primary: Color32::from_rgb(236, 64, 122),
            primary_soft: Color32::from_rgb(51, 31, 45),
            red: Color32::from_rgb(239, 83, 80),
            green: Color32::from_rgb(52, 211, 153),
            orange: Color32::from_rgb(251, 146, 60),
            sky: Color32::from_rgb(56, 189, 248),
            emerald: Color32::from_rgb(52, 211, 153),
        }
    }

    fn flashify_light() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 250),
            surface: Color32::from_rgb(255, 255, 255),
            surface_dim: Color32::from_rgb(240, 240, 242),
            surface_variant: Color32::from_rgb(236, 236, 239),
            foreground: Color32::from_rgb(17, 24, 39),
            muted: Color32::from_rgb(107, 114, 128),
            selection: Color32::from_rgb(248, 215, 227),
            primary: Color32::from_rgb(236, 64, 122),
            primary_soft: Color32::from_rgb(252, 228, 236),
            red: Color32::from_rgb(211, 47, 47),
            green: Color32::from_rgb(46, 125, 50),
            orange: Color32::from_rgb(234, 140, 60),
            sky: Color32::from_rgb(2, 132, 199),
            emerald: Color32::from_rgb(5, 150, 105),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

/// Maps the persisted theme setting onto egui's preference; System lets the
/// OS pick between the two registered variants.
pub fn apply_theme_mode(ctx: &egui::Context, mode: ThemeMode) {
    let preference = match mode {
        ThemeMode::System => egui::ThemePreference::System,
        ThemeMode::Light => egui::ThemePreference::Light,
        ThemeMode::Dark => egui::ThemePreference::Dark,
    };
    ctx.set_theme(preference);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    weak_bg_fill: theme.surface,
                    bg_stroke: Stroke {
                        color: theme.surface_variant,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.surface_variant,
                    weak_bg_fill: theme.surface_variant,
                    bg_stroke: Stroke {
                        color: theme.surface_variant,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.selection,
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.selection,
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.active.fg_stroke },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.surface,
                    weak_bg_fill: theme.surface,
                    bg_stroke: Stroke { color: theme.primary, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.primary,
            faint_bg_color: match is_dark {
                true => theme.surface_dim,
                false => theme.surface_variant,
            },
            extreme_bg_color: theme.surface_dim,
            code_bg_color: theme.surface_dim,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.surface_dim, ..default.window_shadow },
            window_fill: theme.surface,
            window_stroke: Stroke { color: theme.surface_variant, ..default.window_stroke },
            panel_fill: theme.background,
            popup_shadow: Shadow { color: theme.surface_dim, ..default.popup_shadow },
            ..default
        },
    );
}
