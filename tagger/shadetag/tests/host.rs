//! End-to-end tests for the command-line host library.

use std::io::Write as _;

use pretty_assertions::assert_eq;
use shadetag::{
    parse_range, render_keywords, render_tags, requested_spans, tag_file, tag_source, HostError,
    TagOptions,
};
use shadetag_core::{SourceText, Span, TagCategory};
use shadetag_lang::Language;

const SHADER: &str = "\
// vertex stage
attribute vec3 position;
uniform mat4 mvp; /* varying vec2 uv; */
void main() { gl_Position = mvp * vec4(position, 1.0); }
";

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn words(text: &str, tags: &[shadetag_core::TagResult]) -> Vec<String> {
    tags.iter()
        .map(|t| text[t.span().to_range()].to_owned())
        .collect()
}

#[test]
fn tags_file_with_inferred_language() {
    let file = write_temp(".vert", SHADER);
    let (text, tags) = tag_file(file.path(), &TagOptions::default()).unwrap();
    assert_eq!(
        words(&text, &tags),
        vec!["attribute", "vec3", "uniform", "mat4", "void", "vec4"]
    );
    assert!(tags.iter().all(|t| t.category == TagCategory::Keyword));
}

#[test]
fn unknown_extension_needs_explicit_language() {
    let file = write_temp(".txt", "__kernel void k() {}");
    let err = tag_file(file.path(), &TagOptions::default()).unwrap_err();
    assert!(matches!(err, HostError::NoLanguage(_)));

    let options = TagOptions {
        language: Some(Language::OpenCl),
        range: None,
    };
    let (text, tags) = tag_file(file.path(), &options).unwrap();
    assert_eq!(words(&text, &tags), vec!["__kernel", "void"]);
}

#[test]
fn missing_file_is_io_error() {
    let options = TagOptions {
        language: Some(Language::Glsl),
        range: None,
    };
    let err = tag_file(std::path::Path::new("/nonexistent/shader.glsl"), &options).unwrap_err();
    assert!(matches!(err, HostError::Io { .. }));
    assert!(err.to_string().starts_with("cannot read `/nonexistent/shader.glsl`"));
}

#[test]
fn range_limits_tags_to_touched_lines() {
    // Second line only: "attribute vec3 position;" starts at byte 16.
    let tags = tag_source(SHADER, Language::Glsl, Some(Span::new(16, 30))).unwrap();
    assert_eq!(words(SHADER, &tags), vec!["attribute", "vec3"]);
}

#[test]
fn range_across_lines_requests_each_line() {
    let src = SourceText::new(SHADER);
    let spans = requested_spans(&src, Some(Span::new(20, 45)));
    assert_eq!(spans, vec![Span::new(20, 40), Span::new(41, 45)]);

    let tags = tag_source(SHADER, Language::Glsl, Some(Span::new(20, 45))).unwrap();
    assert_eq!(words(SHADER, &tags), vec!["attribute", "vec3", "uniform"]);
}

#[test]
fn empty_range_inside_keyword_tags_nothing() {
    let text = "uniform vec3";
    let src = SourceText::new(text);
    assert_eq!(requested_spans(&src, Some(Span::new(3, 3))), vec![Span::new(3, 3)]);
    assert!(tag_source(text, Language::Glsl, Some(Span::new(3, 3)))
        .unwrap()
        .is_empty());

    let options = TagOptions::parse(&["--range=3..3".to_owned()]).unwrap();
    assert!(tag_source(text, Language::Glsl, options.range).unwrap().is_empty());
}

#[test]
fn range_past_end_is_reported() {
    let err = tag_source("int x;", Language::Glsl, Some(Span::new(0, 99))).unwrap_err();
    match err {
        HostError::InvalidRange(e) => assert_eq!(e.span, Span::new(0, 99)),
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn option_parsing() {
    let args = vec!["--lang=cl".to_owned(), "--range=3..10".to_owned()];
    assert_eq!(
        TagOptions::parse(&args).unwrap(),
        TagOptions {
            language: Some(Language::OpenCl),
            range: Some(Span::new(3, 10)),
        }
    );

    let err = TagOptions::parse(&["--lang=hlsl".to_owned()]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown language `hlsl` (expected `glsl` or `opencl`)"
    );
}

#[test]
fn range_parsing() {
    assert_eq!(parse_range("4..12").unwrap(), Span::new(4, 12));
    assert_eq!(parse_range(" 0 .. 5 ").unwrap(), Span::new(0, 5));
    for bad in ["", "4", "a..b", "4..", "-1..3"] {
        assert!(
            matches!(parse_range(bad), Err(HostError::BadRange(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn rendered_output() {
    let text = "float x = M_PI_F;\n__kernel void k();";
    let tags = tag_source(text, Language::OpenCl, None).unwrap();
    assert_eq!(
        render_tags(text, &tags),
        "1:1\t0..5\tkeyword\tfloat\n\
         1:11\t10..16\tbuiltin-macro\tM_PI_F\n\
         2:1\t18..26\tkeyword\t__kernel\n\
         2:10\t27..31\tkeyword\tvoid\n"
    );
}

#[test]
fn keyword_listing() {
    let glsl = render_keywords(Language::Glsl);
    assert!(glsl.lines().any(|l| l == "keyword\tuniform"));
    assert!(!glsl.contains("builtin-macro"));

    let cl = render_keywords(Language::OpenCl);
    assert!(cl.lines().any(|l| l == "keyword\t__kernel"));
    assert!(cl.lines().any(|l| l == "builtin-macro\tM_PI_F"));
}
