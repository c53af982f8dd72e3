//! Integration tests for diagnostic sinks.

use std::sync::Mutex;

use fnkit::array::{DEFAULT_TRUNC_MAX, make_trunc, make_trunc_with};
use fnkit::diagnostic::{Diagnostic, SilentSink};
use rstest::rstest;

/// Sink that keeps every diagnostic it receives.
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<Diagnostic>>,
}

impl Recorder {
    fn sink(&self) -> impl Fn(&Diagnostic) + '_ {
        move |diagnostic: &Diagnostic| {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(diagnostic.clone());
            }
        }
    }
}

#[rstest]
fn custom_sink_receives_each_uneven_call() {
    let recorder = Recorder::default();
    let truncate = make_trunc_with(5, DEFAULT_TRUNC_MAX, recorder.sink());

    assert_eq!(truncate(&[1; 12]), vec![1; 10]);
    assert_eq!(truncate(&[2; 3]), Vec::<i32>::new());

    let seen = recorder.seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            Diagnostic::UnevenTruncation { trunc: 5, max: 36 },
            Diagnostic::UnevenTruncation { trunc: 5, max: 36 },
        ]
    );
}

#[rstest]
fn even_configuration_stays_quiet() {
    let recorder = Recorder::default();
    let truncate = make_trunc_with(6, DEFAULT_TRUNC_MAX, recorder.sink());
    assert_eq!(truncate(&[0u8; 40]).len(), 36);
    assert!(recorder.seen.lock().unwrap().is_empty());
}

#[rstest]
fn silent_sink_still_truncates() {
    let truncate = make_trunc_with(4, 10, SilentSink);
    assert_eq!(truncate(&["a"; 9]), vec!["a"; 8]);
}

#[rstest]
fn tracing_sink_works_under_a_subscriber() {
    let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
    tracing::subscriber::with_default(subscriber, || {
        let truncate = make_trunc(4, 10);
        assert_eq!(truncate(&[7; 5]), vec![7; 4]);
    });
}
