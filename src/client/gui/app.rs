use std::sync::Arc;

use iced::{Application, Command, Element, Theme};

use crate::client::config::ClientConfig;
use crate::client::gui::views::form;
use crate::client::gui::widgets::result_modal;
use crate::client::models::app_state::PredictAppState;
use crate::client::models::messages::Message;
use crate::client::services::prediction_service::PredictionService;

pub struct PredictApp {
    pub state: PredictAppState,
    pub service: Arc<PredictionService>,
}

impl Application for PredictApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        log::info!("prediction service at {}", config.api_url);

        let app = PredictApp {
            state: PredictAppState::default(),
            service: Arc::new(PredictionService::new(config.api_url)),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Prediksi Stunting Pada Balita".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message, &self.service)
    }

    fn view(&self) -> Element<'_, Message> {
        let underlay = form::view(&self.state);
        result_modal::overlay(underlay, &self.state)
    }
}
