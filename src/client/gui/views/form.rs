use iced::widget::{Button, Column, Container, PickList, Row, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::logger::logger_view;
use crate::client::models::app_state::PredictAppState;
use crate::client::models::messages::Message;
use crate::common::models::Gender;

// Palette lembut seperti halaman aslinya (biru/ungu pastel di atas kartu putih)
const BG_MAIN: Color = Color::from_rgb(0.93, 0.94, 0.99);
const CARD_BG: Color = Color::WHITE;
const INPUT_BG: Color = Color::from_rgb(0.97, 0.97, 0.99);
const INPUT_BORDER: Color = Color::from_rgb(0.84, 0.85, 0.92);
const ACCENT_COLOR: Color = Color::from_rgb(0.48, 0.38, 0.88);
const INFO_BG: Color = Color::from_rgb(0.90, 0.95, 1.0);
const INFO_BORDER: Color = Color::from_rgb(0.25, 0.5, 0.95);
const TEXT_PRIMARY: Color = Color::from_rgb(0.16, 0.18, 0.25);
const TEXT_SECONDARY: Color = Color::from_rgb(0.42, 0.44, 0.52);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 14.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
        },
    }
}

fn input_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INPUT_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: INPUT_BORDER,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

fn info_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(INFO_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: INFO_BORDER,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

fn field_label<'a>(emoji: &'a str, label: &'a str) -> Row<'a, Message> {
    Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new(emoji).font(EMOJI_FONT).size(16).style(TEXT_SECONDARY))
        .push(Text::new(label).size(14).font(BOLD_FONT).style(TEXT_SECONDARY))
}

pub fn view(state: &PredictAppState) -> Element<'_, Message> {
    let submitting = state.submitting;

    let logger_bar = if !state.logger.is_empty() {
        Container::new(logger_view(&state.logger))
            .width(Length::Fill)
            .padding([8, 12, 0, 12])
    } else {
        Container::new(Space::new(Length::Fill, Length::Fixed(0.0))).width(Length::Fill)
    };

    let title = Text::new("Prediksi Stunting Pada Balita")
        .size(32)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let subtitle = Text::new("Isi data balita untuk mengetahui risiko stunting")
        .size(15)
        .style(TEXT_SECONDARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    // Jenis kelamin
    let gender_field = Column::new()
        .spacing(8)
        .push(field_label("👤", "Jenis Kelamin"))
        .push(
            Container::new(
                PickList::new(
                    Gender::all(),
                    state.form.jenis_kelamin,
                    Message::GenderSelected,
                )
                .placeholder("Pilih Jenis Kelamin")
                .padding(12)
                .width(Length::Fill),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    // Usia dalam bulan; rentang 0-60 hanya petunjuk, tidak dipaksakan
    let usia_field = Column::new()
        .spacing(8)
        .push(field_label("📅", "Usia (bulan)"))
        .push(
            Container::new(
                TextInput::new("0 - 60", &state.form.usia)
                    .on_input(Message::UsiaChanged)
                    .on_submit(Message::Submit)
                    .padding(12)
                    .size(14)
                    .width(Length::Fill),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    let tinggi_field = Column::new()
        .spacing(8)
        .push(field_label("📏", "Tinggi Badan (cm)"))
        .push(
            Container::new(
                TextInput::new("contoh: 85.5", &state.form.tinggi_badan)
                    .on_input(Message::TinggiChanged)
                    .on_submit(Message::Submit)
                    .padding(12)
                    .size(14)
                    .width(Length::Fill),
            )
            .style(iced::theme::Container::Custom(Box::new(input_appearance))),
        );

    // The disabled state while submitting is advisory only: it removes the
    // press handler, nothing more.
    let submit_button = if submitting {
        Button::new(
            Container::new(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Text::new("⏳").font(EMOJI_FONT).size(16))
                    .push(Text::new("Memproses...").size(16).style(ACCENT_COLOR)),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(16)
    } else {
        Button::new(
            Container::new(
                Text::new("Prediksi Sekarang")
                    .font(BOLD_FONT)
                    .size(16)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .on_press(Message::Submit)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(16)
    };

    let card_content = Column::new()
        .width(Length::Fixed(440.0))
        .spacing(20)
        .padding(32)
        .align_items(Alignment::Center)
        .push(
            Column::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(title)
                .push(subtitle),
        )
        .push(Space::new(Length::Fill, Length::Fixed(4.0)))
        .push(gender_field)
        .push(usia_field)
        .push(tinggi_field)
        .push(Space::new(Length::Fill, Length::Fixed(4.0)))
        .push(submit_button);

    let card = Container::new(card_content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)))
        .center_x();

    let info_box = Container::new(
        Row::new()
            .spacing(8)
            .push(Text::new("💡").font(EMOJI_FONT).size(14))
            .push(
                Text::new(
                    "Informasi: Stunting adalah kondisi gagal tumbuh pada anak akibat \
                     kekurangan gizi kronis. Deteksi dini sangat penting.",
                )
                .size(13)
                .style(TEXT_SECONDARY),
            ),
    )
    .padding(12)
    .width(Length::Fixed(440.0))
    .style(iced::theme::Container::Custom(Box::new(info_appearance)));

    let main_content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .align_items(Alignment::Center)
        .push(logger_bar)
        .push(
            Container::new(
                Column::new()
                    .spacing(16)
                    .align_items(Alignment::Center)
                    .push(card)
                    .push(info_box),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y(),
        );

    Container::new(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
