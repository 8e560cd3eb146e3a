//! Integration tests for reading volume files

use voltools_volume::{read_volume, Axis, Error, Volume};
use rstest::{fixture, rstest};

#[fixture]
fn ref_simple() -> Volume {
    read_volume("./data/simple.out").unwrap()
}

#[fixture]
fn ref_positions() -> Volume {
    read_volume("./data/positions.out").unwrap()
}

#[rstest]
fn parse_simple(ref_simple: Volume) {
    assert_eq!(ref_simple.shape(), [2, 2, 2]);
    assert_eq!(
        ref_simple.values(),
        &[1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0]
    );

    // exact positional mapping of [[[1,2],[3,4]],[[1,2],[3,4]]]
    for i in 0..2 {
        assert_eq!(ref_simple.value(i, 0, 0), Some(1.0));
        assert_eq!(ref_simple.value(i, 0, 1), Some(2.0));
        assert_eq!(ref_simple.value(i, 1, 0), Some(3.0));
        assert_eq!(ref_simple.value(i, 1, 1), Some(4.0));
    }
}

#[rstest]
fn parse_positions(ref_positions: Volume) {
    assert_eq!(ref_positions.shape(), [3, 2, 3]);
    for i in 0..3 {
        for j in 0..2 {
            for k in 0..3 {
                let expected = (i * 100 + j * 10 + k) as f32;
                assert_eq!(ref_positions.value(i, j, k), Some(expected));
            }
        }
    }
}

#[rstest]
fn parse_crlf_line_endings(ref_positions: Volume) {
    let test = read_volume("./data/positions_crlf.out").unwrap();
    assert_eq!(test, ref_positions);
}

#[rstest]
fn parse_scientific_and_whitespace() {
    let test = read_volume("./data/scientific.out").unwrap();
    assert_eq!(test.shape(), [1, 2, 3]);
    assert_eq!(test.values(), &[150.0, -0.25, 3.0, 0.0, 1000.0, 7.25]);
}

#[rstest]
fn parse_sample_volume() {
    let volume = read_volume("./data/GRF_sinxds.out").unwrap();
    assert_eq!(volume.shape(), [4, 5, 6]);
    assert_eq!(volume.value(2, 0, 1), Some(0.841471));
    assert_eq!(volume.value(2, 1, 3), Some(2.215381));

    let range = volume.range().unwrap();
    assert_eq!(range.min, -2.075522);
    assert_eq!(range.max, 4.987475);
}

#[rstest]
#[case(Axis::X, 1, 2, 3, vec![100.0, 101.0, 102.0, 110.0, 111.0, 112.0])] // case 1
#[case(Axis::Y, 1, 3, 3, vec![10.0, 11.0, 12.0, 110.0, 111.0, 112.0, 210.0, 211.0, 212.0])] // case 2
#[case(Axis::Z, 2, 3, 2, vec![2.0, 12.0, 102.0, 112.0, 202.0, 212.0])] // case 3
fn slice_positions(
    ref_positions: Volume,
    #[case] axis: Axis,
    #[case] index: usize,
    #[case] rows: usize,
    #[case] cols: usize,
    #[case] expected: Vec<f32>,
) {
    let slice = ref_positions.slice(axis, index).unwrap();
    assert_eq!(slice.axis(), axis);
    assert_eq!(slice.index(), index);
    assert_eq!((slice.rows(), slice.cols()), (rows, cols));
    assert_eq!(slice.values(), expected.as_slice());
}

#[rstest]
fn zero_matrices_rejected() {
    let result = read_volume("./data/zero_matrices.out");
    assert!(matches!(result, Err(Error::EmptyVolume { shape: [0, 0, 0] })));
}

#[rstest]
fn empty_matrix_rejected() {
    let result = read_volume("./data/empty_rows.out");
    assert!(matches!(result, Err(Error::EmptyVolume { shape: [1, 0, 2] })));
}

#[rstest]
#[case("./data/bad_matrix_count.out", 7, "two")] // case 1
#[case("./data/bad_row_count.out", 12, "2.5")] // case 2
#[case("./data/bad_col_count.out", 14, "x")] // case 3
fn bad_counts(#[case] path: &str, #[case] expected_line: usize, #[case] content: &str) {
    match read_volume(path) {
        Err(Error::IntegerFormat { line_number, line }) => {
            assert_eq!(line_number, expected_line);
            assert_eq!(line, content);
        }
        other => panic!("expected an integer format error, found {other:?}"),
    }
}

#[rstest]
fn bad_count_message_references_line() {
    let error = read_volume("./data/bad_row_count.out").unwrap_err();
    let message = error.to_string();
    assert!(message.contains("line 12"));
    assert!(message.contains("\"2.5\""));
}

#[rstest]
#[case("./data/truncated.out", 28)] // case 1
#[case("./data/truncated_header.out", 4)] // case 2
fn truncated_input(#[case] path: &str, #[case] last_line: usize) {
    match read_volume(path) {
        Err(Error::EndOfInput { line_number, .. }) => assert_eq!(line_number, last_line),
        other => panic!("expected end of input, found {other:?}"),
    }
}

#[rstest]
#[case("./data/short_row.out", 1, 1)] // case 1
#[case("./data/long_row.out", 0, 3)] // case 2
fn unexpected_row_length(#[case] path: &str, #[case] row: usize, #[case] found: usize) {
    match read_volume(path) {
        Err(Error::UnexpectedRowLength {
            matrix,
            row: r,
            expected,
            found: f,
            ..
        }) => {
            assert_eq!(matrix, 0);
            assert_eq!(r, row);
            assert_eq!(expected, 2);
            assert_eq!(f, found);
        }
        other => panic!("expected a row length error, found {other:?}"),
    }
}

#[rstest]
fn inconsistent_matrix_shape() {
    match read_volume("./data/inconsistent.out") {
        Err(Error::InconsistentMatrixShape {
            matrix,
            expected,
            found,
        }) => {
            assert_eq!(matrix, 1);
            assert_eq!(expected, [2, 2]);
            assert_eq!(found, [1, 2]);
        }
        other => panic!("expected a shape error, found {other:?}"),
    }
}

#[rstest]
fn non_numeric_value() {
    match read_volume("./data/bad_value.out") {
        Err(Error::FloatFormat { line_number, line }) => {
            assert_eq!(line_number, 18);
            assert_eq!(line, "3.0 abc");
        }
        other => panic!("expected a float format error, found {other:?}"),
    }
}

#[rstest]
fn missing_file() {
    let result = read_volume("./data/does_not_exist.out");
    assert!(matches!(result, Err(Error::IOError(_))));
}
