use flashify::gui::FlashifyApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([430.0, 780.0])
            .with_min_inner_size([360.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native("Flashify", options, Box::new(|cc| Ok(Box::new(FlashifyApp::new(cc)))))
}
