// Tipe data bersama antara GUI dan CLI: payload wire dan input form.
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Labels the service returns that do NOT indicate a stunting risk.
/// Everything else ("stunted", "severely stunted", ...) is shown with a
/// warning tone.
pub const NON_RISK_LABELS: [&str; 2] = ["normal", "tinggi"];

/// Placeholder shown when the service sends no probability breakdown.
pub const PROB_PLACEHOLDER: &str = "Probabilitas tidak tersedia";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    LakiLaki,
    Perempuan,
}

const ALL_GENDERS: [Gender; 2] = [Gender::LakiLaki, Gender::Perempuan];

impl Gender {
    pub fn all() -> &'static [Gender] {
        &ALL_GENDERS
    }

    /// Value sent on the wire, matching the service vocabulary.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Gender::LakiLaki => "laki-laki",
            Gender::Perempuan => "perempuan",
        }
    }

    pub fn from_wire(value: &str) -> Option<Gender> {
        match value.trim().to_lowercase().as_str() {
            "laki-laki" => Some(Gender::LakiLaki),
            "perempuan" => Some(Gender::Perempuan),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Gender::LakiLaki => "Laki-Laki",
            Gender::Perempuan => "Perempuan",
        };
        write!(f, "{}", s)
    }
}

/// Payload for `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub jenis_kelamin: String,
    pub usia: u32,
    pub tinggi_badan: f64,
}

/// Successful response body from the prediction service. The inputs come
/// back echoed alongside the classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub jenis_kelamin: String,
    pub usia: u32,
    pub tinggi_badan: f64,
    pub hasil_prediksi: String,
    pub keterangan: String,
    #[serde(default)]
    pub probabilitas: Option<Probabilities>,
}

impl PredictResponse {
    /// Success tone for "normal"/"tinggi", warning tone for any other label.
    pub fn is_non_risk(&self) -> bool {
        NON_RISK_LABELS.contains(&self.hasil_prediksi.as_str())
    }

    /// One `label: value%` line per probability entry, in server order, or a
    /// single placeholder line when the breakdown is absent or empty.
    pub fn probability_lines(&self) -> Vec<String> {
        match &self.probabilitas {
            Some(probs) if !probs.is_empty() => probs
                .iter()
                .map(|(label, value)| format!("{}: {}%", label, value))
                .collect(),
            _ => vec![PROB_PLACEHOLDER.to_string()],
        }
    }
}

/// Per-label confidence percentages. Kept as a pair list instead of a map so
/// the entries render in exactly the order the service sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Probabilities(Vec<(String, f64)>);

impl Probabilities {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, f64)> {
        self.0.iter()
    }
}

impl From<Vec<(String, f64)>> for Probabilities {
    fn from(entries: Vec<(String, f64)>) -> Self {
        Probabilities(entries)
    }
}

impl Serialize for Probabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Probabilities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Probabilities;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of label to percentage")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, value)) = access.next_entry::<String, f64>()? {
                    entries.push((label, value));
                }
                Ok(Probabilities(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Form fields exactly as the user entered them. Completeness is the only
/// rule checked on this side; ranges belong to the service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub jenis_kelamin: Option<Gender>,
    pub usia: String,
    pub tinggi_badan: String,
}

impl FormInput {
    /// All three fields filled in. The check is emptiness, so an age of
    /// literal "0" months passes.
    pub fn is_complete(&self) -> bool {
        self.jenis_kelamin.is_some() && !self.usia.is_empty() && !self.tinggi_badan.is_empty()
    }

    /// Coerce the text fields into the numeric wire payload. `None` when the
    /// form is incomplete or a field does not parse.
    pub fn to_request(&self) -> Option<PredictRequest> {
        let gender = self.jenis_kelamin?;
        if self.usia.is_empty() || self.tinggi_badan.is_empty() {
            return None;
        }
        let usia = self.usia.parse().ok()?;
        let tinggi_badan = self.tinggi_badan.parse().ok()?;
        Some(PredictRequest {
            jenis_kelamin: gender.as_wire().to_string(),
            usia,
            tinggi_badan,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(label: &str, probs: Option<Vec<(&str, f64)>>) -> PredictResponse {
        PredictResponse {
            jenis_kelamin: "perempuan".to_string(),
            usia: 24,
            tinggi_badan: 85.5,
            hasil_prediksi: label.to_string(),
            keterangan: "contoh".to_string(),
            probabilitas: probs.map(|entries| {
                Probabilities::from(
                    entries
                        .into_iter()
                        .map(|(l, v)| (l.to_string(), v))
                        .collect::<Vec<_>>(),
                )
            }),
        }
    }

    #[test]
    fn non_risk_labels() {
        assert!(response("normal", None).is_non_risk());
        assert!(response("tinggi", None).is_non_risk());
        assert!(!response("stunted", None).is_non_risk());
        assert!(!response("severely stunted", None).is_non_risk());
        assert!(!response("pendek", None).is_non_risk());
    }

    #[test]
    fn probability_lines_keep_server_order() {
        let resp = response("pendek", Some(vec![("pendek", 80.0), ("normal", 20.0)]));
        assert_eq!(resp.probability_lines(), vec!["pendek: 80%", "normal: 20%"]);
    }

    #[test]
    fn probability_lines_placeholder_when_absent_or_empty() {
        let absent = response("normal", None);
        assert_eq!(absent.probability_lines(), vec![PROB_PLACEHOLDER]);

        let empty = response("normal", Some(vec![]));
        assert_eq!(empty.probability_lines(), vec![PROB_PLACEHOLDER]);
    }

    #[test]
    fn probabilitas_deserializes_in_json_order() {
        let json = r#"{
            "jenis_kelamin": "laki-laki",
            "usia": 30,
            "tinggi_badan": 88.0,
            "hasil_prediksi": "normal",
            "keterangan": "Normal (pertumbuhan baik)",
            "probabilitas": {"severely stunted": 1.2, "stunted": 3.4, "tinggi": 5.0, "normal": 90.4}
        }"#;
        let resp: PredictResponse = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = resp
            .probabilitas
            .as_ref()
            .unwrap()
            .iter()
            .map(|(label, _)| label.as_str())
            .collect();
        assert_eq!(labels, vec!["severely stunted", "stunted", "tinggi", "normal"]);
    }

    #[test]
    fn null_probabilitas_is_accepted() {
        let json = r#"{
            "jenis_kelamin": "perempuan",
            "usia": 12,
            "tinggi_badan": 70.5,
            "hasil_prediksi": "tinggi",
            "keterangan": "Lebih tinggi dari rata-rata",
            "probabilitas": null
        }"#;
        let resp: PredictResponse = serde_json::from_str(json).unwrap();
        assert!(resp.probabilitas.is_none());
        assert_eq!(resp.probability_lines(), vec![PROB_PLACEHOLDER]);
    }

    #[test]
    fn request_serializes_numbers_not_strings() {
        let request = PredictRequest {
            jenis_kelamin: "perempuan".to_string(),
            usia: 24,
            tinggi_badan: 85.5,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"jenis_kelamin":"perempuan","usia":24,"tinggi_badan":85.5}"#
        );
    }

    #[test]
    fn form_completeness() {
        let mut form = FormInput::default();
        assert!(!form.is_complete());
        assert!(form.to_request().is_none());

        form.jenis_kelamin = Some(Gender::Perempuan);
        form.usia = "24".to_string();
        assert!(!form.is_complete());

        form.tinggi_badan = "85.5".to_string();
        assert!(form.is_complete());

        let request = form.to_request().unwrap();
        assert_eq!(request.jenis_kelamin, "perempuan");
        assert_eq!(request.usia, 24);
        assert!((request.tinggi_badan - 85.5).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_months_is_a_valid_age() {
        let form = FormInput {
            jenis_kelamin: Some(Gender::LakiLaki),
            usia: "0".to_string(),
            tinggi_badan: "48.5".to_string(),
        };
        assert!(form.is_complete());
        assert_eq!(form.to_request().unwrap().usia, 0);
    }

    #[test]
    fn gender_wire_and_display() {
        assert_eq!(Gender::LakiLaki.as_wire(), "laki-laki");
        assert_eq!(Gender::Perempuan.to_string(), "Perempuan");
        assert_eq!(Gender::from_wire("Perempuan"), Some(Gender::Perempuan));
        assert_eq!(Gender::from_wire("laki-laki"), Some(Gender::LakiLaki));
        assert_eq!(Gender::from_wire("other"), None);
    }
}
