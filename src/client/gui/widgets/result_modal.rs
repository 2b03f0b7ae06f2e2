// Dialog modal untuk tiga hasil submit: form belum lengkap, kesalahan
// server, dan hasil prediksi.
use iced::widget::{Button, Column, Container, Row, Text};
use iced::{Element, Font, Length};
use iced_aw::{Card, CardStyles, Modal};

use crate::client::models::app_state::{Dialog, PredictAppState};
use crate::client::models::messages::Message;
use crate::common::models::PredictResponse;

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Wrap the form with the currently open dialog, if any. Clicking the
/// backdrop or pressing Esc dismisses it, discarding the result.
pub fn overlay<'a>(
    underlay: Element<'a, Message>,
    state: &'a PredictAppState,
) -> Element<'a, Message> {
    let card = state.dialog.as_ref().map(dialog_card);
    Modal::new(underlay, card)
        .backdrop(Message::CloseDialog)
        .on_esc(Message::CloseDialog)
        .into()
}

fn dialog_card(dialog: &Dialog) -> Element<'static, Message> {
    match dialog {
        Dialog::Incomplete => notice_card(
            "Form Belum Lengkap",
            "Lengkapi semua form terlebih dahulu",
            CardStyles::Warning,
        ),
        Dialog::ServerError => notice_card("Error", "Terjadi kesalahan server!", CardStyles::Danger),
        Dialog::Result(response) => result_card(response),
    }
}

fn notice_card(title: &str, body: &str, style: CardStyles) -> Element<'static, Message> {
    Card::new(
        Text::new(title.to_string()).size(20).font(BOLD_FONT),
        Text::new(body.to_string()).size(15),
    )
    .foot(close_row())
    .max_width(360.0)
    .on_close(Message::CloseDialog)
    .style(style)
    .into()
}

fn result_card(response: &PredictResponse) -> Element<'static, Message> {
    let style = if response.is_non_risk() {
        CardStyles::Success
    } else {
        CardStyles::Warning
    };

    let mut body = Column::new()
        .spacing(6)
        .push(detail_row("Jenis Kelamin", response.jenis_kelamin.clone()))
        .push(detail_row("Usia", format!("{} bulan", response.usia)))
        .push(detail_row("Tinggi Badan", format!("{} cm", response.tinggi_badan)))
        .push(detail_row("Status Gizi", response.hasil_prediksi.clone()))
        .push(Text::new("Keterangan:").size(14).font(BOLD_FONT))
        .push(Text::new(response.keterangan.clone()).size(14))
        .push(Text::new("Probabilitas Prediksi:").size(14).font(BOLD_FONT));

    for line in response.probability_lines() {
        body = body.push(Text::new(format!("•  {}", line)).size(14));
    }

    Card::new(
        Text::new("Hasil Prediksi Stunting").size(20).font(BOLD_FONT),
        body,
    )
    .foot(close_row())
    .max_width(420.0)
    .on_close(Message::CloseDialog)
    .style(style)
    .into()
}

fn detail_row(label: &str, value: String) -> Row<'static, Message> {
    Row::new()
        .spacing(6)
        .push(Text::new(format!("{}:", label)).size(14).font(BOLD_FONT))
        .push(Text::new(value).size(14))
}

fn close_row() -> Element<'static, Message> {
    Row::new()
        .push(iced::widget::Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Button::new(Container::new(Text::new("Tutup").size(15)).center_x())
                .on_press(Message::CloseDialog)
                .padding([8, 24]),
        )
        .into()
}
