use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    prediksi_stunting::client::gui::app::PredictApp::run(iced::Settings::default())
}
