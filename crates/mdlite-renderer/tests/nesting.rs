//! Large inputs: deep same-symbol nesting and long runs of flat pairs.

use std::time::{Duration, Instant};

use mdlite_renderer::MarkerRenderer;
use pretty_assertions::assert_eq;

const TIME_LIMIT: Duration = Duration::from_secs(1);

fn assert_nested_pairs(count: usize) {
    let renderer = MarkerRenderer::default();
    let markdown = format!("{}{}", "_This ".repeat(count), "and that_ ".repeat(count));
    let expected = format!(
        "<p> {}{} </p>",
        "<em>This ".repeat(count),
        "and that</em> ".repeat(count)
    );

    let start = Instant::now();
    let html = renderer.render(&markdown);
    let elapsed = start.elapsed();

    assert_eq!(html, expected);
    assert!(elapsed < TIME_LIMIT, "{count} nested pairs took {elapsed:?}");
}

fn assert_flat_pairs(count: usize) {
    let renderer = MarkerRenderer::default();
    let markdown = "_This_ ".repeat(count);
    let expected = format!("<p> {} </p>", "<em>This</em> ".repeat(count));

    let start = Instant::now();
    let html = renderer.render(&markdown);
    let elapsed = start.elapsed();

    assert_eq!(html, expected);
    assert!(elapsed < TIME_LIMIT, "{count} flat pairs took {elapsed:?}");
}

#[test]
fn test_nested_pairs_100() {
    assert_nested_pairs(100);
}

#[test]
fn test_nested_pairs_1000() {
    assert_nested_pairs(1000);
}

#[test]
fn test_nested_pairs_10000() {
    assert_nested_pairs(10_000);
}

#[test]
fn test_flat_pairs_100() {
    assert_flat_pairs(100);
}

#[test]
fn test_flat_pairs_1000() {
    assert_flat_pairs(1000);
}

#[test]
fn test_flat_pairs_10000() {
    assert_flat_pairs(10_000);
}

#[test]
fn test_shared_renderer_across_threads() {
    let renderer = MarkerRenderer::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let renderer = &renderer;
                scope.spawn(move || renderer.render(&format!("_thread{i}_ done")))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(
                handle.join().unwrap(),
                format!("<p> <em>thread{i}</em> done </p>")
            );
        }
    });
}
