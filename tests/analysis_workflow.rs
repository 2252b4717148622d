//! End-to-end workflow through the public API: typing, analyzing, settling
//! and presenting, without a Zellij host.

#![allow(clippy::unwrap_used)]

use fp_analyzer::api::{is_analysis_context, Settlement};
use fp_analyzer::ui::UIViewModel;
use fp_analyzer::{handle_event, initialize, Action, Config, Event, Locale, Phase, WorkflowState};
use std::collections::BTreeMap;

const ROWS: usize = 40;
const COLS: usize = 100;

fn english() -> WorkflowState {
    let mut map = BTreeMap::new();
    map.insert("language".to_string(), "en".to_string());
    initialize(&Config::from_zellij(&map))
}

fn analyze(state: &mut WorkflowState, text: &str) -> Vec<Action> {
    handle_event(state, &Event::ClearInput).unwrap();
    for c in text.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
    handle_event(state, &Event::Analyze).unwrap().1
}

fn respond(state: &mut WorkflowState, status: u16, body: &[u8]) -> UIViewModel {
    handle_event(
        state,
        &Event::AnalysisSettled(Settlement::Response {
            status,
            body: body.to_vec(),
        }),
    )
    .unwrap();
    view(state)
}

fn view(state: &WorkflowState) -> UIViewModel {
    let vm = state.compute_viewmodel(ROWS, COLS);
    assert!(
        !(vm.alert.is_some() && vm.results.is_some()),
        "alert and results rendered together"
    );
    vm
}

#[test]
fn analyze_disables_trigger_for_any_input() {
    for text in ["", "パスワードリセット機能とCSVエクスポート機能が必要", "x\ny"] {
        let mut state = english();
        let actions = analyze(&mut state, text);

        assert_eq!(state.phase, Phase::Loading);
        let vm = view(&state);
        assert!(!vm.input.trigger.enabled);
        assert!(vm.progress.is_some());

        let [Action::SubmitAnalysis(request)] = actions.as_slice() else {
            panic!("expected exactly one submit action, got {actions:?}");
        };
        assert_eq!(request.user_request, text);

        let call = request.to_call(&Config::default().endpoint).unwrap();
        assert!(is_analysis_context(&call.context));
        let body: serde_json::Value = serde_json::from_slice(&call.body).unwrap();
        assert_eq!(body["userRequest"], text);
    }
}

#[test]
fn login_response_renders_one_row_and_total() {
    let mut state = english();
    analyze(&mut state, "login");
    let vm = respond(
        &mut state,
        200,
        br#"{"functions":[{"name":"Login","fp":3}],"totalFP":3}"#,
    );

    assert!(matches!(state.phase, Phase::Success { .. }));
    let card = vm.results.unwrap();
    assert_eq!(card.rows.len(), 1);
    assert!(card.rows[0].summary.ends_with("Login / FP: 3"));
    assert!(card.rows[0].description.is_none());
    assert!(card.total.ends_with(": 3"));
    assert!(vm.progress.is_none());
    assert!(vm.input.trigger.enabled);
}

#[test]
fn server_error_shows_status_only() {
    let mut state = english();
    analyze(&mut state, "anything");
    let vm = respond(&mut state, 500, br#"{"error":"boom"}"#);

    assert_eq!(vm.alert.unwrap().message, "API Error: 500");
    assert_eq!(state.phase.error_message(), Some("API Error: 500"));
}

#[test]
fn non_json_success_is_a_decoding_error() {
    let mut state = english();
    analyze(&mut state, "anything");
    let vm = respond(&mut state, 200, b"Internal proxy page");

    let message = vm.alert.unwrap().message;
    assert!(!message.is_empty());
    assert_ne!(message, "API Error: 200");
    assert!(state.phase.result().is_none());
}

#[test]
fn total_without_functions_renders() {
    let mut state = english();
    analyze(&mut state, "anything");
    let vm = respond(&mut state, 200, br#"{"totalFP":5}"#);

    let card = vm.results.unwrap();
    assert!(card.rows.is_empty());
    assert!(card.total.ends_with(": 5"));
}

#[test]
fn second_cycle_never_shows_stale_outcome() {
    let mut state = english();

    analyze(&mut state, "first");
    respond(&mut state, 500, b"");
    assert!(view(&state).alert.is_some());

    analyze(&mut state, "second");
    let loading = view(&state);
    assert!(loading.alert.is_none());
    assert!(loading.results.is_none());

    respond(&mut state, 200, br#"{"functions":[{"name":"A","fp":1}],"totalFP":1}"#);
    assert!(view(&state).results.is_some());

    analyze(&mut state, "third");
    let loading = view(&state);
    assert!(loading.alert.is_none());
    assert!(loading.results.is_none());

    respond(&mut state, 404, b"");
    let vm = view(&state);
    assert_eq!(vm.alert.unwrap().message, "API Error: 404");
    assert!(vm.results.is_none());
}

#[test]
fn double_analyze_sends_one_request() {
    let mut state = english();
    assert_eq!(analyze(&mut state, "x").len(), 1);
    let (_, actions) = handle_event(&mut state, &Event::Analyze).unwrap();
    assert!(actions.is_empty());
}

#[test]
fn odd_shapes_render_without_panicking() {
    let bodies: [&[u8]; 6] = [
        b"{}",
        b"[1,2,3]",
        br#"{"functions":"none","totalFP":null}"#,
        br#"{"functions":[null,1,{"fp":"3"},{"name":7,"desc":""}],"totalFP":"12"}"#,
        br#"{"functions":[{"name":"Big","fp":2.5,"desc":"half"}],"totalFP":2.5}"#,
        br#"{"functions":[],"totalFP":0}"#,
    ];

    for body in bodies {
        let mut state = english();
        analyze(&mut state, "shape");
        let vm = respond(&mut state, 200, body);
        assert!(vm.results.is_some(), "body {:?}", String::from_utf8_lossy(body));
        for (rows, cols) in [(1, 1), (10, 20), (ROWS, COLS)] {
            state.compute_viewmodel(rows, cols);
        }
    }
}

#[test]
fn null_success_body_shows_neither_card_nor_alert() {
    let mut state = english();
    analyze(&mut state, "anything");
    let vm = respond(&mut state, 200, b"null");

    assert!(matches!(state.phase, Phase::Success { result: None }));
    assert!(vm.results.is_none());
    assert!(vm.alert.is_none());
    assert!(vm.progress.is_none());
    assert!(vm.input.trigger.enabled);
}

#[test]
fn japanese_is_the_default_language() {
    let mut state = initialize(&Config::default());
    assert_eq!(state.locale, Locale::Japanese);

    analyze(&mut state, "ログイン");
    assert_eq!(view(&state).input.trigger.label, "解析中...");

    let vm = respond(
        &mut state,
        200,
        br#"{"functions":[{"name":"Login","fp":3}],"totalFP":3}"#,
    );
    let card = vm.results.unwrap();
    assert_eq!(card.rows[0].summary, "機能名: Login / FP: 3");
    assert_eq!(card.total, "合計FP: 3");
}
