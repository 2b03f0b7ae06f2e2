use std::sync::Arc;

use iced::Command;

use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::messages::Message;
use crate::client::services::prediction_service::PredictionService;
use crate::common::models::{FormInput, PredictResponse};

/// The three possible modal outcomes of a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// At least one field was still empty when the user hit submit.
    Incomplete,
    /// The request failed; only the generic notice is shown, the detail goes
    /// to the log.
    ServerError,
    /// A fresh prediction, discarded again when the dialog closes.
    Result(PredictResponse),
}

#[derive(Debug, Clone, Default)]
pub struct PredictAppState {
    pub form: FormInput,
    pub submitting: bool,
    pub dialog: Option<Dialog>,
    pub logger: Vec<LogMessage>,
}

/// Keep digits only, standing in for the numeric input widget of the form.
pub fn sanitize_integer(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keep digits and at most one decimal point (step-0.1 input).
pub fn sanitize_decimal(value: &str) -> String {
    let mut seen_dot = false;
    value
        .chars()
        .filter(|c| {
            if c.is_ascii_digit() {
                true
            } else if *c == '.' && !seen_dot {
                seen_dot = true;
                true
            } else {
                false
            }
        })
        .collect()
}

impl PredictAppState {
    pub fn update(
        &mut self,
        message: Message,
        service: &Arc<PredictionService>,
    ) -> Command<Message> {
        match message {
            Message::GenderSelected(gender) => {
                self.form.jenis_kelamin = Some(gender);
            }
            Message::UsiaChanged(value) => {
                self.form.usia = sanitize_integer(&value);
            }
            Message::TinggiChanged(value) => {
                self.form.tinggi_badan = sanitize_decimal(&value);
            }
            Message::Submit => {
                // Completeness is the only client-side rule; the service
                // enforces its own ranges.
                let Some(request) = self.form.to_request() else {
                    self.submitting = false;
                    self.dialog = Some(Dialog::Incomplete);
                    return Command::none();
                };

                self.submitting = true;
                self.dialog = None;
                self.logger.push(LogMessage {
                    level: LogLevel::Info,
                    message: "Mengirim data ke server...".to_string(),
                });
                log::info!(
                    "submitting prediction: jenis_kelamin={} usia={} bulan tinggi={} cm",
                    request.jenis_kelamin,
                    request.usia,
                    request.tinggi_badan
                );

                let svc = service.clone();
                return Command::perform(
                    async move {
                        match svc.predict(&request).await {
                            Ok(response) => Message::PredictionSucceeded(response),
                            Err(e) => Message::PredictionFailed {
                                error: format!("{e:#}"),
                            },
                        }
                    },
                    |msg| msg,
                );
            }
            Message::PredictionSucceeded(response) => {
                self.submitting = false;
                self.logger.push(LogMessage {
                    level: LogLevel::Success,
                    message: format!("Prediksi diterima: {}", response.hasil_prediksi),
                });
                self.dialog = Some(Dialog::Result(response));
                return clear_log_later();
            }
            Message::PredictionFailed { error } => {
                self.submitting = false;
                // The detail is computed but deliberately not surfaced; the
                // dialog shows a generic notice.
                log::warn!("prediction request failed: {}", error);
                self.logger.push(LogMessage {
                    level: LogLevel::Error,
                    message: "Prediksi gagal".to_string(),
                });
                self.dialog = Some(Dialog::ServerError);
                return clear_log_later();
            }
            Message::CloseDialog => {
                self.dialog = None;
            }
            Message::ClearLog => {
                self.logger.clear();
            }
        }
        Command::none()
    }
}

// Same auto-clear delay the status bar uses everywhere.
fn clear_log_later() -> Command<Message> {
    Command::perform(
        async {
            tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;
            Message::ClearLog
        },
        |msg| msg,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::models::{Gender, Probabilities};

    fn service() -> Arc<PredictionService> {
        // Never contacted: the returned Command is dropped, not executed.
        Arc::new(PredictionService::new("http://127.0.0.1:1"))
    }

    fn filled_state() -> PredictAppState {
        PredictAppState {
            form: FormInput {
                jenis_kelamin: Some(Gender::Perempuan),
                usia: "24".to_string(),
                tinggi_badan: "85.5".to_string(),
            },
            ..PredictAppState::default()
        }
    }

    #[test]
    fn incomplete_submit_shows_warning_and_skips_network() {
        let svc = service();
        let mut state = PredictAppState::default();

        let _ = state.update(Message::Submit, &svc);

        assert_eq!(state.dialog, Some(Dialog::Incomplete));
        assert!(!state.submitting);

        // One filled field is still incomplete.
        state.dialog = None;
        state.form.usia = "24".to_string();
        let _ = state.update(Message::Submit, &svc);
        assert_eq!(state.dialog, Some(Dialog::Incomplete));
        assert!(!state.submitting);
    }

    #[test]
    fn complete_submit_sets_submitting() {
        let svc = service();
        let mut state = filled_state();

        let _ = state.update(Message::Submit, &svc);

        assert!(state.submitting);
        assert_eq!(state.dialog, None);
    }

    #[test]
    fn zero_age_is_submittable() {
        let svc = service();
        let mut state = filled_state();
        state.form.usia = "0".to_string();

        let _ = state.update(Message::Submit, &svc);

        assert!(state.submitting);
        assert_eq!(state.dialog, None);
    }

    #[test]
    fn failure_resets_submitting_and_shows_generic_notice() {
        let svc = service();
        let mut state = filled_state();
        state.submitting = true;

        let _ = state.update(
            Message::PredictionFailed {
                error: "connect ECONNREFUSED".to_string(),
            },
            &svc,
        );

        assert!(!state.submitting);
        assert_eq!(state.dialog, Some(Dialog::ServerError));
    }

    #[test]
    fn success_resets_submitting_and_opens_result() {
        let svc = service();
        let mut state = filled_state();
        state.submitting = true;

        let response = PredictResponse {
            jenis_kelamin: "perempuan".to_string(),
            usia: 24,
            tinggi_badan: 85.5,
            hasil_prediksi: "pendek".to_string(),
            keterangan: "indikasi stunting".to_string(),
            probabilitas: Some(Probabilities::from(vec![
                ("pendek".to_string(), 80.0),
                ("normal".to_string(), 20.0),
            ])),
        };
        let _ = state.update(Message::PredictionSucceeded(response.clone()), &svc);

        assert!(!state.submitting);
        assert_eq!(state.dialog, Some(Dialog::Result(response)));
    }

    #[test]
    fn closing_the_dialog_discards_the_result() {
        let svc = service();
        let mut state = filled_state();
        state.dialog = Some(Dialog::Incomplete);

        let _ = state.update(Message::CloseDialog, &svc);
        assert_eq!(state.dialog, None);
    }

    #[test]
    fn numeric_inputs_are_sanitized() {
        let svc = service();
        let mut state = PredictAppState::default();

        let _ = state.update(Message::UsiaChanged("2a4".to_string()), &svc);
        assert_eq!(state.form.usia, "24");

        let _ = state.update(Message::TinggiChanged("85.5.2".to_string()), &svc);
        assert_eq!(state.form.tinggi_badan, "85.52");

        let _ = state.update(Message::TinggiChanged("abc".to_string()), &svc);
        assert_eq!(state.form.tinggi_badan, "");
    }

    #[test]
    fn sanitizers() {
        assert_eq!(sanitize_integer("12"), "12");
        assert_eq!(sanitize_integer("1e2"), "12");
        assert_eq!(sanitize_integer("-3"), "3");
        assert_eq!(sanitize_decimal("85.5"), "85.5");
        assert_eq!(sanitize_decimal("85..5"), "85.5");
        assert_eq!(sanitize_decimal("8x5.5"), "85.5");
    }
}
