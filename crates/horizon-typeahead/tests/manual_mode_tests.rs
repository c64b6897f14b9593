//! Manual-mode lookup and completion tests.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use parking_lot::Mutex;

use horizon_typeahead::prelude::*;

/// Parks every completion so tests decide when and how each lookup finishes.
fn parked() -> (Typeahead, Arc<Mutex<Vec<Completion>>>) {
    let pending = Arc::new(Mutex::new(Vec::new()));
    let sink = pending.clone();
    let typeahead = Typeahead::manual(move |_: &str, completion: Completion| {
        sink.lock().push(completion);
    });
    (typeahead, pending)
}

fn take(pending: &Arc<Mutex<Vec<Completion>>>) -> Completion {
    pending.lock().remove(0)
}

fn texts(items: &[&str]) -> Vec<Candidate> {
    items.iter().map(|s| Candidate::text(*s)).collect()
}

#[test]
fn test_lookup_receives_query() {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let sink = queries.clone();
    let mut typeahead = Typeahead::manual(move |query: &str, completion: Completion| {
        assert_eq!(completion.query(), query);
        sink.lock().push(query.to_string());
        let _ = completion.close();
    });

    typeahead.handle_text_change(&TextChangeEvent::new("a"));
    typeahead.handle_text_change(&TextChangeEvent::new("ab"));
    typeahead.handle_text_change(&TextChangeEvent::new(""));

    assert_eq!(*queries.lock(), vec!["a", "ab", ""]);
    assert!(typeahead.is_manual());
}

#[test]
fn test_completion_round_trip() {
    let (mut typeahead, pending) = parked();
    typeahead.handle_text_change(&TextChangeEvent::new("x"));

    // The list stays closed until the host answers
    assert!(!typeahead.is_list_open());
    assert_eq!(typeahead.value(), "x");

    assert_eq!(take(&pending).resolve(texts(&["a", "b"])), CompletionOutcome::Applied);
    assert!(typeahead.is_list_open());
    assert_eq!(typeahead.candidates(), texts(&["a", "b"]));

    typeahead.handle_text_change(&TextChangeEvent::new("xy"));
    assert_eq!(take(&pending).resolve(Vec::new()), CompletionOutcome::Applied);
    assert!(!typeahead.is_list_open());
    assert!(typeahead.candidates().is_empty());
}

#[test]
fn test_close_keeps_previous_candidates() {
    let (mut typeahead, pending) = parked();
    typeahead.handle_text_change(&TextChangeEvent::new("x"));
    let first = take(&pending);

    typeahead.handle_text_change(&TextChangeEvent::new("xy"));
    let second = take(&pending);

    first.resolve(texts(&["a", "b"]));
    assert!(typeahead.is_list_open());

    second.close();
    assert!(!typeahead.is_list_open());
    assert_eq!(typeahead.candidates(), texts(&["a", "b"]));
}

#[test]
fn test_last_arrival_wins_by_default() {
    let (mut typeahead, pending) = parked();
    typeahead.handle_text_change(&TextChangeEvent::new("a"));
    typeahead.handle_text_change(&TextChangeEvent::new("ab"));
    let slow = take(&pending);
    let fast = take(&pending);

    fast.resolve(texts(&["abc"]));
    assert_eq!(slow.resolve(texts(&["a1", "a2"])), CompletionOutcome::Applied);
    assert_eq!(typeahead.candidates(), texts(&["a1", "a2"]));
}

#[test]
fn test_latest_request_discards_out_of_order_results() {
    let (typeahead, pending) = parked();
    let mut typeahead = typeahead.with_stale_completion_policy(StaleCompletionPolicy::LatestRequest);
    typeahead.handle_text_change(&TextChangeEvent::new("a"));
    typeahead.handle_text_change(&TextChangeEvent::new("ab"));
    let slow = take(&pending);
    let fast = take(&pending);

    assert_eq!(fast.resolve(texts(&["abc"])), CompletionOutcome::Applied);
    assert_eq!(slow.resolve(texts(&["a1"])), CompletionOutcome::Stale);
    assert_eq!(typeahead.candidates(), texts(&["abc"]));
}

#[test]
fn test_matching_value_policy_follows_current_text() {
    let (typeahead, pending) = parked();
    let mut typeahead = typeahead.with_stale_completion_policy(StaleCompletionPolicy::MatchingValue);
    typeahead.handle_text_change(&TextChangeEvent::new("a"));
    typeahead.handle_text_change(&TextChangeEvent::new("ab"));
    typeahead.handle_text_change(&TextChangeEvent::new("a"));
    let first = take(&pending);
    let second = take(&pending);

    // "a" is the current text again, so the first lookup is still relevant
    assert_eq!(first.resolve(texts(&["a1"])), CompletionOutcome::Applied);
    assert_eq!(second.resolve(texts(&["ab1"])), CompletionOutcome::Stale);
    assert_eq!(typeahead.candidates(), texts(&["a1"]));
}

#[test]
fn test_completion_from_another_thread() {
    let (request_tx, request_rx) = mpsc::channel::<Completion>();
    let mut typeahead = Typeahead::manual(move |_: &str, completion: Completion| {
        let _ = request_tx.send(completion);
    });

    let worker = thread::spawn(move || {
        let completion = request_rx.recv().unwrap();
        let upper = completion.query().to_uppercase();
        completion.resolve(vec![Candidate::text(upper)])
    });

    typeahead.handle_text_change(&TextChangeEvent::new("ber"));
    assert_eq!(worker.join().unwrap(), CompletionOutcome::Applied);
    assert_eq!(typeahead.candidates(), texts(&["BER"]));
    assert!(typeahead.is_list_open());
}

#[test]
fn test_completion_after_controller_dropped() {
    let (mut typeahead, pending) = parked();
    typeahead.handle_text_change(&TextChangeEvent::new("a"));
    let completion = take(&pending);
    drop(typeahead);

    assert_eq!(completion.resolve(texts(&["a"])), CompletionOutcome::Detached);
}

#[test]
fn test_commit_keeps_candidates_in_manual_mode() {
    let (mut typeahead, pending) = parked();
    let selected = Arc::new(Mutex::new(Vec::new()));
    let sink = selected.clone();
    typeahead.option_selected.connect(move |(candidate, index): &(Candidate, usize)| {
        sink.lock().push((candidate.commit_value().map(str::to_string), *index));
    });

    typeahead.handle_text_change(&TextChangeEvent::new("b"));
    take(&pending).resolve(texts(&["berlin", "bern"]));

    let mut event = KeyPressEvent::key(Key::ArrowDown);
    typeahead.handle_key_press(&mut event);
    let mut event = KeyPressEvent::key(Key::Enter);
    assert!(typeahead.handle_key_press(&mut event));

    assert_eq!(typeahead.value(), "berlin");
    assert!(!typeahead.is_list_open());
    assert_eq!(typeahead.candidates().len(), 2);
    assert_eq!(*selected.lock(), vec![(Some("berlin".to_string()), 0)]);
}

#[test]
fn test_value_changed_is_auto_mode_only() {
    let (mut typeahead, _pending) = parked();
    let fired = Arc::new(Mutex::new(0));
    let counter = fired.clone();
    typeahead.value_changed.connect(move |_: &String| *counter.lock() += 1);

    typeahead.handle_text_change(&TextChangeEvent::new("a"));
    assert_eq!(*fired.lock(), 0);
}

#[test]
fn test_host_pushes_candidates_and_value() {
    let (typeahead, _pending) = parked();
    let typeahead = typeahead.with_initial_value("ber");
    assert_eq!(typeahead.value(), "ber");

    assert!(typeahead.set_candidates(texts(&["Berlin"])));
    assert!(typeahead.is_list_open());
    assert!(typeahead.set_candidates(Vec::new()));
    assert!(!typeahead.is_list_open());

    assert!(typeahead.set_value("Bern"));
    assert_eq!(typeahead.input_props().value, "Bern");
}

#[test]
fn test_malformed_item_commits_without_value() {
    let (mut typeahead, pending) = parked();
    typeahead.handle_text_change(&TextChangeEvent::new("q"));
    take(&pending).resolve(vec![Candidate::Item(
        CandidateItem::without_value().with_field("label", "no value"),
    )]);

    assert!(typeahead.commit(0));
    assert_eq!(typeahead.value(), "q");
    assert!(!typeahead.is_list_open());
}

#[test]
fn test_shrinking_list_returns_to_typed_text() {
    let (mut typeahead, pending) = parked();
    typeahead.handle_text_change(&TextChangeEvent::new("ap"));
    take(&pending).resolve(texts(&["apple", "apricot"]));

    typeahead.handle_key_press(&mut KeyPressEvent::key(Key::ArrowUp));
    assert_eq!(typeahead.value(), "apricot");

    typeahead.set_candidates(texts(&["only"]));
    assert_eq!(typeahead.selected_index(), None);
    assert_eq!(typeahead.value(), "ap");
    assert_eq!(typeahead.cached_value(), "");

    typeahead.handle_key_press(&mut KeyPressEvent::key(Key::ArrowDown));
    assert_eq!(typeahead.value(), "only");
    typeahead.handle_key_press(&mut KeyPressEvent::key(Key::ArrowDown));
    assert_eq!(typeahead.selected_index(), None);
    assert_eq!(typeahead.value(), "ap");
}

#[test]
fn test_escape_on_hidden_list_passes_through() {
    let (mut typeahead, pending) = parked();
    typeahead.handle_text_change(&TextChangeEvent::new("b"));
    take(&pending).resolve(texts(&["berlin", "bern"]));
    assert!(typeahead.handle_blur(&BlurEvent::new()));
    assert_eq!(typeahead.candidates().len(), 2);

    // Hidden but non-empty: the controller leaves Escape to the host
    let mut event = KeyPressEvent::key(Key::Escape);
    assert!(!typeahead.handle_key_press(&mut event));
    assert!(!event.base.is_default_prevented());
    assert!(!typeahead.is_list_open());

    // Reopened by the host, Escape is consumed again
    typeahead.set_candidates(texts(&["berlin", "bern"]));
    let mut event = KeyPressEvent::key(Key::Escape);
    assert!(typeahead.handle_key_press(&mut event));
    assert!(event.base.is_default_prevented());
    assert!(!typeahead.is_list_open());
}
