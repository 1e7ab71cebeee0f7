use serde_json::json;
use shared::forms::{StatsForm, TrendsForm};
use shared::results::AnalysisResult;
use shared::vocab::{HopInterval, PacketCategory, ResampleFreq, StatColumn};
use shared::workflow::{check_upload, FileMeta, UploadState};
use shared::{ApiError, Selection, SelectionHandle, TrainEvent, TrainingSession, TrainingStatus, ViewState};

fn march_2024_join_requests() -> SelectionHandle {
    let mut selection = Selection::default();
    selection.set_year_input("2024").unwrap();
    selection.set_month_input("2024-03").unwrap();
    selection.toggle_category(PacketCategory::JoinRequest);
    SelectionHandle::new(selection)
}

#[test]
fn trends_request_and_single_image_response() {
    let selection = march_2024_join_requests();
    let mut form = TrendsForm {
        hop_interval: Some(HopInterval::Minutes),
        hop_value: None,
        freq: Some(ResampleFreq::FiveMinutes),
    };
    form.set_hop_value_input("30");

    let body = serde_json::to_value(form.build(&selection).unwrap()).unwrap();
    assert_eq!(
        body,
        json!({
            "year": 2024,
            "month": 3,
            "categories": ["Join Request"],
            "hopInterval": "minutes",
            "hopValue": 30,
            "freq": "5min"
        })
    );

    let response: AnalysisResult = serde_json::from_value(json!({
        "images": {"Join Request": "http://localhost:8000/img.png"}
    }))
    .unwrap();
    let images = response.image_list();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].label, "Join Request");
    assert_eq!(images[0].group, None);
    assert_eq!(images[0].url, "http://localhost:8000/img.png");
}

#[test]
fn trends_for_a_year_only_sends_an_empty_category_list() {
    let mut selection = Selection::default();
    selection.set_year_input("2024").unwrap();
    assert!(selection.is_active());
    let form = TrendsForm {
        hop_interval: Some(HopInterval::Days),
        hop_value: Some(1),
        freq: Some(ResampleFreq::Day),
    };

    let body = serde_json::to_value(form.build(&SelectionHandle::new(selection)).unwrap()).unwrap();
    assert_eq!(body["categories"], json!([]));
    assert_eq!(body["year"], json!(2024));
    assert_eq!(body["month"], json!(null));
}

#[test]
fn trends_failure_clears_previous_images() {
    let mut view: ViewState<AnalysisResult> = ViewState::default();
    view.begin();
    view.succeed(
        serde_json::from_value(json!({"images": {"Stat": "http://x/a.png"}})).unwrap(),
    );
    assert!(view.result.as_ref().is_some_and(AnalysisResult::has_images));

    view.begin();
    view.fail(&ApiError::from_response(400, r#"{"detail":"Mois invalide"}"#), true);
    assert!(view.result.is_none());
    assert_eq!(view.error.as_deref(), Some("Mois invalide"));
}

#[test]
fn stats_success_replaces_the_image_set() {
    let selection = march_2024_join_requests();
    let mut form = StatsForm::default();
    assert!(form.build(&selection).is_err());
    form.toggle_column(StatColumn::Adr);
    assert_eq!(
        serde_json::to_value(form.build(&selection).unwrap()).unwrap(),
        json!({"year": 2024, "month": 3, "columnList": ["adr"]})
    );

    let mut view: ViewState<AnalysisResult> = ViewState::default();
    view.succeed(
        serde_json::from_value(json!({"images": {"SF": {"global": "u1", "par type": "u2"}}}))
            .unwrap(),
    );
    view.succeed(serde_json::from_value(json!({"images": {"adr": {"global": "u3"}}})).unwrap());
    let images = view.result.unwrap().image_list();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].group.as_deref(), Some("adr"));
}

#[test]
fn upload_gate_then_training_run() {
    let mut upload = UploadState::default();
    let dropped = [
        FileMeta::new("a.json", "application/json"),
        FileMeta::new("b.json", "application/json"),
    ];
    assert!(check_upload(&dropped).is_err());
    assert!(!upload.can_preprocess());

    upload.begin();
    upload.record_success();
    assert!(upload.can_preprocess());

    let mut session = TrainingSession::default();
    session.start();
    let stream = ["Loading parquet files", "Fitting KMeans", "__TRAIN_EXIT__ 0"];
    let mut closed = false;
    for data in stream {
        closed = session.apply(TrainEvent::parse(data));
        if closed {
            break;
        }
    }
    assert!(closed);
    assert_eq!(session.status, TrainingStatus::Succeeded);
    assert_eq!(session.transcript.len(), 2);
}
