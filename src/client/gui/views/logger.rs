// Status bar transien di atas form: one message at a time, auto-cleared.
use iced::widget::{Container, Row, Text};
use iced::{Element, Font, Length};

use crate::client::models::messages::Message;

#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn emoji(&self) -> &'static str {
        match self.level {
            LogLevel::Info => "ℹ️",
            LogLevel::Success => "✅",
            LogLevel::Error => "❌",
        }
    }

    pub fn color(&self) -> iced::Color {
        match self.level {
            LogLevel::Info => iced::Color::from_rgb(0.25, 0.5, 0.95),
            LogLevel::Success => iced::Color::from_rgb(0.15, 0.65, 0.4),
            LogLevel::Error => iced::Color::from_rgb(0.85, 0.25, 0.25),
        }
    }
}

/// Render the latest status message as a colored bar, or nothing.
pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    let Some(log) = messages.last() else {
        return iced::widget::Space::new(Length::Fill, Length::Fixed(0.0)).into();
    };

    let bar_color = log.color();
    Container::new(
        Row::new()
            .spacing(10)
            .push(
                Text::new(log.emoji())
                    .font(Font::with_name("Segoe UI Emoji"))
                    .size(16)
                    .style(iced::Color::WHITE),
            )
            .push(Text::new(&log.message).size(15).style(iced::Color::WHITE)),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        move |_: &iced::Theme| iced::widget::container::Appearance {
            background: Some(iced::Background::Color(bar_color)),
            text_color: Some(iced::Color::WHITE),
            border: iced::Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    )))
    .into()
}
