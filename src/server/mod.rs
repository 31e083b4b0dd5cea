use crate::adapters::storage::LocalStorage;
use crate::config::GatewayConfig;
use crate::core::etl::EtlEngine;
use crate::core::pipeline::JoinPipeline;
use actix_web::{dev::Server, get, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};

pub type CsvEngine = EtlEngine<JoinPipeline<LocalStorage, GatewayConfig>>;

pub struct HttpState {
    pub engine: CsvEngine,
}

impl HttpState {
    pub fn new(storage: LocalStorage, config: GatewayConfig) -> Self {
        Self {
            engine: EtlEngine::new(JoinPipeline::new(storage, config)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCsvResponse {
    pub message: String,
    pub file_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[get("/generate-csv")]
async fn generate_csv(data: web::Data<HttpState>) -> impl Responder {
    match data.engine.generate_csv().await {
        Ok(path) => HttpResponse::Ok().json(GenerateCsvResponse {
            message: "CSV file generated successfully".to_string(),
            file_path: path.display().to_string(),
        }),
        Err(e) => {
            tracing::error!("❌ CSV generation failed: {}", e.detail());
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_csv);
}

pub fn start_http_server(state: HttpState, address: (&str, u16)) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(address)?
        .run();

    Ok(server)
}
