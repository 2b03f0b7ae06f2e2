// Klien terminal: satu siklus validasi -> request -> render, sama seperti
// form GUI.
use prediksi_stunting::client::config::ClientConfig;
use prediksi_stunting::client::services::prediction_service::PredictionService;
use prediksi_stunting::common::models::{FormInput, Gender};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(jenis_kelamin), Some(usia), Some(tinggi_badan)) =
        (args.next(), args.next(), args.next())
    else {
        eprintln!("Pemakaian: prediksi-cli <laki-laki|perempuan> <usia_bulan> <tinggi_cm>");
        std::process::exit(2);
    };

    let form = FormInput {
        jenis_kelamin: Gender::from_wire(&jenis_kelamin),
        usia,
        tinggi_badan,
    };
    let Some(request) = form.to_request() else {
        eprintln!("[CLI] Form belum lengkap: lengkapi semua kolom terlebih dahulu");
        std::process::exit(2);
    };

    let config = ClientConfig::from_env();
    let service = PredictionService::new(config.api_url);
    log::info!("mengirim request ke {}", service.endpoint());

    match service.predict(&request).await {
        Ok(response) => {
            let now = chrono::Local::now().format("%H:%M:%S");
            println!("[{}] Hasil Prediksi Stunting", now);
            println!("  Jenis Kelamin : {}", response.jenis_kelamin);
            println!("  Usia          : {} bulan", response.usia);
            println!("  Tinggi Badan  : {} cm", response.tinggi_badan);
            println!("  Status Gizi   : {}", response.hasil_prediksi);
            println!("  Keterangan    : {}", response.keterangan);
            println!("  Probabilitas Prediksi:");
            for line in response.probability_lines() {
                println!("    - {}", line);
            }
            Ok(())
        }
        Err(e) => {
            // Detail ke log saja; pengguna melihat pesan generik.
            log::warn!("prediction request failed: {e:#}");
            eprintln!("[CLI] Terjadi kesalahan server!");
            std::process::exit(1);
        }
    }
}
