use futures::executor::block_on;
use matchquiz_core::{QuizDocument, QuizSession, ResultState, present};
use matchquiz_web::pages::{
    home::{HomePage, HomePageProps},
    not_found::{NotFound, Props as NotFoundProps},
    quiz::{QuizAction, QuizRoute, QuizScreen, QuizScreenProps, reduce},
    result::{ResultRoute, ResultScreen, ResultScreenProps},
};
use yew::{Callback, LocalServerRenderer};

const DOC: &str = include_str!("../static/quiz-data.json");

fn document() -> QuizDocument {
    QuizDocument::from_json(DOC).unwrap()
}

fn render_quiz(session: QuizSession) -> String {
    let props = QuizScreenProps {
        session,
        on_action: Callback::noop(),
    };
    block_on(LocalServerRenderer::<QuizScreen>::with_props(props).render())
}

fn render_result(state: ResultState) -> String {
    let props = ResultScreenProps {
        state,
        on_home: Callback::noop(),
        on_retake: Callback::noop(),
    };
    block_on(LocalServerRenderer::<ResultScreen>::with_props(props).render())
}

#[test]
fn home_page_renders_call_to_action() {
    let props = HomePageProps {
        on_start: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("無料で診断を始める"));
    assert!(html.contains("個人情報不要"));
}

#[test]
fn not_found_page_offers_way_home() {
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("トップに戻る"));
}

#[test]
fn quiz_screen_shows_loading_until_data_resolves() {
    let html = render_quiz(QuizSession::loading());
    assert!(html.contains("読み込み中..."));
    assert!(!html.contains("quiz-screen"));
}

#[test]
fn quiz_screen_renders_first_question() {
    let html = render_quiz(QuizSession::start(document().quiz));
    assert!(html.contains("質問 1 / 5"));
    assert!(html.contains("20%"));
    assert!(html.contains("あなたの年代を教えてください"));
    assert!(html.contains("50代以上"));
    assert!(html.contains("次へ"));
    assert!(html.contains(r#"aria-disabled="true""#));
}

#[test]
fn quiz_screen_marks_selection_and_last_question() {
    let mut session = QuizSession::start(document().quiz);
    for pick in ["30s", "lover", "month", "good"] {
        (session, _) = reduce(&session, &QuizAction::Select(pick.to_string()));
        (session, _) = reduce(&session, &QuizAction::Next);
    }
    (session, _) = reduce(&session, &QuizAction::Select(String::from("members")));

    let html = render_quiz(session);
    assert!(html.contains("質問 5 / 5"));
    assert!(html.contains("100%"));
    assert!(html.contains("結果を見る"));
    assert!(html.contains(r#"aria-checked="true""#));
    assert!(html.contains(r#"aria-disabled="false""#));
}

#[test]
fn result_screen_distinguishes_loading_from_not_found() {
    let analyzing = render_result(ResultState::Analyzing);
    assert!(analyzing.contains("分析中"));

    let doc = document();
    let missing = render_result(present(Some(&doc), Some("doesnotexist")));
    assert!(missing.contains("結果が見つかりませんでした"));
    assert!(!missing.contains("分析中"));
}

#[test]
fn result_screen_renders_record_with_fixed_compatibility() {
    let doc = document();
    let html = render_result(present(Some(&doc), Some("youbride")));
    assert!(html.contains("ユーブライド"));
    assert!(html.contains("94%"));
    assert!(html.contains("45日"));
    assert!(html.contains("https://youbride.jp/"));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains("noopener noreferrer"));
    assert!(html.contains("公的書類による独身証明に対応"));
    assert!(html.contains("#8b5cf6dd"));
}

#[test]
fn route_containers_start_in_loading_states() {
    let quiz = block_on(LocalServerRenderer::<QuizRoute>::new().render());
    assert!(quiz.contains("読み込み中..."));

    let result = block_on(LocalServerRenderer::<ResultRoute>::new().render());
    assert!(result.contains("分析中"));
}
