#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Tests for the text-to-matrix parsing API.

use matrixtext_core::{
    BuilderError, DEFAULT_ROW_DELIMITER, Matrix, MatrixParser, MatrixParserBuilder, ParseError,
    parse_matrix, parse_raw,
};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use matrixtext_test_support::tracing::RecordingLayer;

#[fixture]
fn parser() -> MatrixParser {
    MatrixParser::default()
}

#[rstest]
#[case::simple("1 2, 3 4", vec![vec![1.0, 2.0], vec![3.0, 4.0]])]
#[case::irregular_whitespace("  1   2 , 3  4  ", vec![vec![1.0, 2.0], vec![3.0, 4.0]])]
#[case::tabs_and_newlines("1\t2,\n3\n4", vec![vec![1.0, 2.0], vec![3.0, 4.0]])]
#[case::single_cell("42", vec![vec![42.0]])]
#[case::single_row("1 2 3", vec![vec![1.0, 2.0, 3.0]])]
#[case::single_column("1, 2, 3", vec![vec![1.0], vec![2.0], vec![3.0]])]
#[case::mixed_notation("-1.5 .5 1e2, 0x10 Infinity 3.", vec![
    vec![-1.5, 0.5, 100.0],
    vec![16.0, f64::INFINITY, 3.0],
])]
fn parses_rectangular_input(
    parser: MatrixParser,
    #[case] input: &str,
    #[case] expected: Vec<Vec<f64>>,
) {
    let matrix = parser.parse(Some(input)).expect("input must parse");
    assert_eq!(matrix.to_nested(), expected);
    assert_eq!(matrix.rows(), expected.len());
}

#[rstest]
#[case::blank_middle_row("1,,2", vec![vec![1.0], vec![0.0], vec![2.0]])]
#[case::trailing_delimiter("1,", vec![vec![1.0], vec![0.0]])]
#[case::lone_delimiter(",", vec![vec![0.0], vec![0.0]])]
#[case::padded_delimiters(" , , ", vec![vec![0.0], vec![0.0], vec![0.0]])]
#[case::whitespace_only("   \n\t", vec![vec![0.0]])]
fn blank_rows_read_as_single_zero(
    parser: MatrixParser,
    #[case] input: &str,
    #[case] expected: Vec<Vec<f64>>,
) {
    let matrix = parser.parse(Some(input)).expect("blank rows must parse");
    assert_eq!(matrix.to_nested(), expected);
}

#[rstest]
#[case::leading_bom("\u{FEFF}1 2, 3 4", vec![vec![1.0, 2.0], vec![3.0, 4.0]])]
#[case::bom_between_cells("1\u{FEFF}2, 3 4", vec![vec![1.0, 2.0], vec![3.0, 4.0]])]
#[case::no_break_space("1\u{A0}2,\u{A0}3 4", vec![vec![1.0, 2.0], vec![3.0, 4.0]])]
#[case::bom_only("\u{FEFF}", vec![vec![0.0]])]
fn unicode_spaces_separate_cells(
    parser: MatrixParser,
    #[case] input: &str,
    #[case] expected: Vec<Vec<f64>>,
) {
    let matrix = parser.parse(Some(input)).expect("input must parse");
    assert_eq!(matrix.to_nested(), expected);
}

#[rstest]
fn next_line_control_is_not_a_separator(parser: MatrixParser) {
    assert_eq!(
        parser.parse(Some("1\u{85}2")),
        Err(ParseError::NonNumericCell { row: 1 })
    );
}

#[rstest]
#[case::absent(None)]
#[case::empty(Some(""))]
fn rejects_empty_or_invalid_input(parser: MatrixParser, #[case] input: Option<&str>) {
    assert_eq!(parser.parse(input), Err(ParseError::InvalidInput));
}

#[rstest]
#[case::second_row("1 2, a 4", 2)]
#[case::first_row("x, 1", 1)]
#[case::nan_literal("1, 2, NaN", 3)]
#[case::reports_first_bad_row("1 2, 3 b, c 5", 2)]
#[case::before_ragged_check("1 2 3, 4 z", 2)]
fn names_row_with_non_numeric_cell(
    parser: MatrixParser,
    #[case] input: &str,
    #[case] row: usize,
) {
    let err = parser.parse(Some(input)).expect_err("input must fail");
    assert_eq!(err, ParseError::NonNumericCell { row });
    assert_eq!(err.row(), Some(row));
}

#[rstest]
#[case::short_second_row("1 2 3, 4 5")]
#[case::long_second_row("1, 2 3")]
#[case::trailing_delimiter("1 2,")]
#[case::blank_middle_row("1 2,,3 4")]
#[case::blank_first_row(", 1 2")]
fn rejects_ragged_rows_without_row_index(parser: MatrixParser, #[case] input: &str) {
    let err = parser.parse(Some(input)).expect_err("ragged input must fail");
    assert_eq!(err, ParseError::RaggedMatrix);
    assert_eq!(err.row(), None);
}

#[rstest]
fn free_functions_match_default_parser(parser: MatrixParser) {
    let input = "1 2, 3 4";
    assert_eq!(parse_matrix(input), parser.parse(Some(input)));
    assert_eq!(parse_raw(Some(input)), parser.parse(Some(input)));
    assert_eq!(parse_raw(None), Err(ParseError::InvalidInput));
}

#[rstest]
#[case("1 2, 3 4")]
#[case("1 2, a 4")]
#[case("1 2 3, 4 5")]
#[case("")]
fn reparsing_yields_equal_results(parser: MatrixParser, #[case] input: &str) {
    let first = parser.parse(Some(input));
    let second = parser.parse(Some(input));
    assert_eq!(first, second);
}

#[rstest]
fn display_output_parses_back_to_same_matrix() {
    let matrix = parse_matrix("1 -2.5 0.125, 1e3 Infinity 7").expect("input must parse");
    let reparsed = parse_matrix(&matrix.to_string()).expect("formatted matrix must parse");
    assert_eq!(reparsed, matrix);
}

#[rstest]
fn try_from_rows_agrees_with_parser() {
    let built = Matrix::try_from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("valid rows");
    assert_eq!(Ok(built), parse_matrix("1 2, 3 4"));
}

#[rstest]
fn builder_defaults() {
    let builder = MatrixParserBuilder::new();
    assert_eq!(builder.row_delimiter(), DEFAULT_ROW_DELIMITER);
    let parser = builder.build().expect("defaults valid");
    assert_eq!(parser, MatrixParser::default());
}

#[rstest]
#[case(';', "1 2; 3 4")]
#[case('|', "1 2 | 3 4")]
#[case('/', "1 2/3 4")]
fn builder_accepts_custom_delimiters(#[case] delimiter: char, #[case] input: &str) {
    let parser = MatrixParserBuilder::new()
        .with_row_delimiter(delimiter)
        .build()
        .expect("delimiter must be accepted");
    assert_eq!(parser.row_delimiter(), delimiter);
    let matrix = parser.parse(Some(input)).expect("input must parse");
    assert_eq!(matrix.to_nested(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
}

#[rstest]
fn custom_delimiter_treats_commas_as_cells() {
    let parser = MatrixParserBuilder::new()
        .with_row_delimiter(';')
        .build()
        .expect("semicolon must be accepted");
    assert_eq!(
        parser.parse(Some("1,2; 3 4")),
        Err(ParseError::NonNumericCell { row: 1 })
    );
}

#[rstest]
#[case::space(' ', BuilderError::WhitespaceDelimiter { delimiter: ' ' })]
#[case::newline('\n', BuilderError::WhitespaceDelimiter { delimiter: '\n' })]
#[case::byte_order_mark('\u{FEFF}', BuilderError::WhitespaceDelimiter { delimiter: '\u{FEFF}' })]
#[case::digit('1', BuilderError::ConflictingDelimiter { delimiter: '1' })]
#[case::letter('e', BuilderError::ConflictingDelimiter { delimiter: 'e' })]
#[case::dot('.', BuilderError::ConflictingDelimiter { delimiter: '.' })]
#[case::minus('-', BuilderError::ConflictingDelimiter { delimiter: '-' })]
fn builder_rejects_ambiguous_delimiters(#[case] delimiter: char, #[case] expected: BuilderError) {
    let err = MatrixParserBuilder::new()
        .with_row_delimiter(delimiter)
        .build()
        .expect_err("delimiter must be rejected");
    assert_eq!(err, expected);
}

#[rstest]
fn parse_records_shape_on_span(parser: MatrixParser) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let matrix = tracing::subscriber::with_default(subscriber, || parser.parse(Some("1 2 3, 4 5 6")))
        .expect("input must parse");
    assert_eq!(matrix.shape(), (2, 3));

    let span = layer
        .span_named("core.parse_matrix")
        .expect("core.parse_matrix span must exist");
    assert_eq!(span.field("rows"), Some("2"));
    assert_eq!(span.field("columns"), Some("3"));
    assert_eq!(span.field("bytes"), Some("12"));
    assert_eq!(span.field("delimiter"), Some(","));
    assert!(layer.events().is_empty(), "successful parses emit no events");
}

#[rstest]
fn parse_failure_emits_debug_event(parser: MatrixParser) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let err = tracing::subscriber::with_default(subscriber, || parser.parse(Some("1 2, a 4")))
        .expect_err("non-numeric input must fail");
    assert_eq!(err, ParseError::NonNumericCell { row: 2 });

    let span = layer
        .span_named("core.parse_matrix")
        .expect("core.parse_matrix span must exist");
    assert_eq!(span.field("rows"), None);

    let events = layer.events();
    let event = events
        .iter()
        .find(|event| event.field("error").is_some())
        .expect("error event must be emitted");
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("error"), Some("row 2 contains non-numeric values"));
}
