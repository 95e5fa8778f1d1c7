use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, http::header, web};

use clap::Parser;
use serde::{Deserialize, Serialize};

use lipsum_core::generate::config::{ConfigOverrides, GeneratorConfig};
use lipsum_core::generate::generator::Generator;
use lipsum_core::generate::output::Output;
use lipsum_core::generate::vocabulary;

/// Command-line options for the server binary.
#[derive(Parser)]
#[command(author, version, about = "Placeholder-text HTTP service", long_about = None)]
struct Cli {
	/// Address to bind
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to bind
	#[arg(long, default_value_t = 5000)]
	port: u16,
}

/// Struct representing query parameters for the `/v1/lipsum` endpoint
#[derive(Deserialize)]
struct LipsumParams {
	#[serde(rename = "wordList")]
	word_list: Option<String>, // unknown names fall back inside the resolver
	format: Option<String>,    // unknown names fall back to paragraph text
	limit: Option<usize>,      // 0 means "all"; only array/hash honor it
}

/// Response body: a single `output` key whose value shape follows `format`.
#[derive(Serialize)]
struct LipsumResponse {
	output: Output,
}

/// HTTP GET endpoint `/v1/lipsum`
///
/// Builds a per-request generator from the three query parameters and
/// returns its bulk output as JSON. Unrecognized `wordList` and `format`
/// values select the documented fallbacks; the status stays 200.
#[get("/v1/lipsum")]
async fn get_lipsum(query: web::Query<LipsumParams>) -> impl Responder {
	let limit = query.limit.unwrap_or(10);

	let overrides = ConfigOverrides {
		word_list: query.word_list.clone(),
		format: query.format.clone(),
		..ConfigOverrides::default()
	};

	// The query never sets length ranges, so validation cannot trip here.
	let config = match GeneratorConfig::from_overrides(&overrides) {
		Ok(config) => config,
		Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
	};

	let mut generator = Generator::new(config);
	HttpResponse::Ok().json(LipsumResponse {
		output: generator.output(limit),
	})
}

/// HTTP GET endpoint `/v1/word_lists`
///
/// Lists the vocabulary names the generator resolves without falling back.
#[get("/v1/word_lists")]
async fn get_word_lists() -> impl Responder {
	HttpResponse::Ok().body(vocabulary::names().join("\n"))
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server exposing the generation endpoint and
/// the vocabulary listing, with permissive CORS (any origin, GET,
/// Content-Type) and request logging.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	log::info!("serving on http://{}:{}", cli.host, cli.port);

	HttpServer::new(|| {
		let cors = Cors::default()
			.allow_any_origin()
			.allowed_methods(vec!["GET"])
			.allowed_header(header::CONTENT_TYPE);

		App::new()
			.wrap(cors)
			.wrap(Logger::default())
			.service(get_lipsum)
			.service(get_word_lists)
	})
	.bind((cli.host.as_str(), cli.port))?
	.run()
	.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::{http::StatusCode, test};
	use serde_json::Value;

	#[actix_web::test]
	async fn array_output_is_the_first_latin_words_in_order() {
		let app = test::init_service(App::new().service(get_lipsum)).await;
		let latin = vocabulary::resolve("latin");
		let expected: Value = latin[..5].to_vec().into();

		// No randomness on this path: identical on every request.
		for _ in 0..3 {
			let req = test::TestRequest::get()
				.uri("/v1/lipsum?wordList=latin&format=array&limit=5")
				.to_request();
			let body: Value = test::call_and_read_body_json(&app, req).await;
			assert_eq!(body["output"], expected);
		}
	}

	#[actix_web::test]
	async fn limit_zero_returns_the_whole_vocabulary() {
		let app = test::init_service(App::new().service(get_lipsum)).await;

		let req = test::TestRequest::get()
			.uri("/v1/lipsum?wordList=both&format=array&limit=0")
			.to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;

		let both = vocabulary::resolve("both");
		assert_eq!(body["output"].as_array().unwrap().len(), both.len());
	}

	#[actix_web::test]
	async fn hash_output_maps_decimal_indices_to_words() {
		let app = test::init_service(App::new().service(get_lipsum)).await;

		let req = test::TestRequest::get()
			.uri("/v1/lipsum?wordList=latin&format=hash&limit=3")
			.to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;

		let latin = vocabulary::resolve("latin");
		let map = body["output"].as_object().unwrap();
		assert_eq!(map.len(), 3);
		assert_eq!(map["0"], latin[0]);
		assert_eq!(map["1"], latin[1]);
		assert_eq!(map["2"], latin[2]);
	}

	#[actix_web::test]
	async fn default_request_returns_one_paragraph() {
		let app = test::init_service(App::new().service(get_lipsum)).await;

		let req = test::TestRequest::get().uri("/v1/lipsum").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;

		let text = body["output"].as_str().unwrap();
		assert!(!text.is_empty());
		assert!(text.contains('.'));
	}

	#[actix_web::test]
	async fn unknown_word_list_falls_back_to_medieval_with_status_200() {
		let app = test::init_service(App::new().service(get_lipsum)).await;

		let req = test::TestRequest::get()
			.uri("/v1/lipsum?wordList=klingon&format=array&limit=0")
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let body: Value = test::read_body_json(resp).await;
		let medieval: Value = vocabulary::resolve("medieval").to_vec().into();
		assert_eq!(body["output"], medieval);
	}

	#[actix_web::test]
	async fn unknown_format_falls_back_to_paragraph_text() {
		let app = test::init_service(App::new().service(get_lipsum)).await;

		let req = test::TestRequest::get()
			.uri("/v1/lipsum?format=yaml")
			.to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert!(body["output"].is_string());
	}

	#[actix_web::test]
	async fn malformed_limit_is_rejected_before_the_handler() {
		let app = test::init_service(App::new().service(get_lipsum)).await;

		let req = test::TestRequest::get()
			.uri("/v1/lipsum?limit=abc")
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn cors_allows_cross_origin_get() {
		let app = test::init_service(
			App::new()
				.wrap(
					Cors::default()
						.allow_any_origin()
						.allowed_methods(vec!["GET"])
						.allowed_header(header::CONTENT_TYPE),
				)
				.service(get_lipsum),
		)
		.await;

		let req = test::TestRequest::get()
			.uri("/v1/lipsum?format=array&limit=1")
			.insert_header((header::ORIGIN, "http://example.com"))
			.to_request();
		let resp = test::call_service(&app, req).await;

		assert_eq!(resp.status(), StatusCode::OK);
		assert!(
			resp.headers()
				.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
		);
	}

	#[actix_web::test]
	async fn word_lists_endpoint_names_all_vocabularies() {
		let app = test::init_service(App::new().service(get_word_lists)).await;

		let req = test::TestRequest::get().uri("/v1/word_lists").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(&body[..], b"latin\nmedieval\nboth");
	}
}
