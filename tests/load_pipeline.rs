use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ensalamento::error::{AppError, Result};
use ensalamento::models::{Config, CourseKey};
use ensalamento::pipeline::{Dataset, run_load};
use ensalamento::services::{CourseCatalog, SheetService, SheetSource};

/// Serves canned documents keyed by URL and records every request.
struct FakeSheets {
    documents: HashMap<String, String>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeSheets {
    fn new(documents: &[(&str, &str)]) -> Self {
        Self {
            documents: documents
                .iter()
                .map(|(url, body)| (url.to_string(), body.to_string()))
                .collect(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl SheetSource for FakeSheets {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::status(url, 404))
    }
}

const SCHEDULE_URL: &str = "https://sheets.test/schedule";
const EVENTS_URL: &str = "https://sheets.test/events";
const FAQ_URL: &str = "https://sheets.test/faq";

fn config() -> Arc<Config> {
    let mut config = Config::default();
    config.sources.schedule_url = SCHEDULE_URL.into();
    config.sources.events_url = EVENTS_URL.into();
    config.sources.faq_url = FAQ_URL.into();
    Arc::new(config)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn schedule_row_flows_through_to_course_index() {
    init_logging();
    let sheets = FakeSheets::new(&[
        (
            SCHEDULE_URL,
            "Semestre,Curso,Disciplina,Professor,Dia,Horário,Sala,Turno\r\n\
             2024.1,Engenharia,Cálculo I,Silva,SEGUNDA,08:00 - 10:00,A101,Manhã\r\n\
             2024.1,Engenharia,Física I,Souza,Terça\r\n",
        ),
        (EVENTS_URL, "Titulo,Data\nPalestra,2024-05-01\n"),
        (FAQ_URL, "Pergunta,Resposta\nQuando começam as aulas?,Em fevereiro\n"),
    ]);
    let requests = Arc::clone(&sheets.requests);
    let config = config();
    let service = SheetService::with_source(Arc::clone(&config), Box::new(sheets));

    let snapshot = run_load(&service).await;
    assert!(snapshot.is_complete());
    assert_eq!(snapshot.schedule.len(), 1);
    assert_eq!(snapshot.events.len(), 1);
    assert_eq!(snapshot.events[0].description, "");
    assert_eq!(snapshot.faqs[0].category, "Geral");
    assert_eq!(requests.lock().unwrap().len(), 3);

    let catalog = CourseCatalog::from_config(&config);
    let index = catalog.index(&snapshot.schedule, Some(""));
    assert_eq!(index, vec![CourseKey::new("Engenharia", "Manhã")]);

    let rows = catalog.entries_for(&snapshot.schedule, &index[0]);
    let groups = catalog.group_by_weekday(rows);
    let days: Vec<&str> = groups.canonical().map(|(day, _)| day).collect();
    assert_eq!(days, vec!["Segunda-feira"]);
}

#[tokio::test]
async fn one_failing_sheet_does_not_block_the_others() {
    init_logging();
    let sheets = FakeSheets::new(&[
        (
            SCHEDULE_URL,
            "Semestre;Curso;Disciplina;Professor;Dia;Horário;Sala;Turno\n\
             2024.1;Direito;Penal I;Costa;Quarta-feira;19:00 - 22:00;B2;Noite\n",
        ),
        (FAQ_URL, "Pergunta,Resposta,Categoria\nOnde fica a secretaria?,Bloco A,Campus\n"),
    ]);
    let service = SheetService::with_source(config(), Box::new(sheets));

    let snapshot = run_load(&service).await;
    assert_eq!(snapshot.failures, vec![Dataset::Events]);
    assert!(snapshot.events.is_empty());
    assert_eq!(snapshot.schedule[0].course, "Direito");
    assert_eq!(snapshot.faqs[0].category, "Campus");
}

#[tokio::test]
async fn every_sheet_failing_yields_an_empty_snapshot() {
    init_logging();
    let service = SheetService::with_source(config(), Box::new(FakeSheets::new(&[])));

    let snapshot = run_load(&service).await;
    assert_eq!(
        snapshot.failures,
        vec![Dataset::Schedule, Dataset::Events, Dataset::Faq]
    );
    assert!(snapshot.schedule.is_empty());
    assert!(service.fetch_faq().await.is_empty());
}
