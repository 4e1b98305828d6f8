mod common;

use common::LogBuilder;
use staffetta_log_stats::{
    average, node_count_from_file_name, success_ratio, variance, Error, ParsedLog,
    SensorLogReader, Summary,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// STATISTICS TESTS
// ============================================================================

#[test]
fn test_average_single_value() {
    assert_eq!(average(&[3.25]).unwrap(), 3.25);
}

#[test]
fn test_average_repeated_value() {
    assert_eq!(average(&[1.5, 1.5, 1.5]).unwrap(), 1.5);
    assert_eq!(variance(&[1.5, 1.5, 1.5]).unwrap(), 0.0);
}

#[test]
fn test_repeated_inexact_value_is_exact() {
    for a in [0.1, 0.7, 1.0 / 3.0, 1234.5678] {
        let values = [a, a, a];
        assert_eq!(average(&values).unwrap(), a);
        assert_eq!(variance(&values).unwrap(), 0.0);
    }
}

#[test]
fn test_variance_is_population_variance() {
    // Sample variance would be 32 / 7
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_close(average(&values).unwrap(), 5.0);
    assert_close(variance(&values).unwrap(), 4.0);
}

#[test]
fn test_statistics_over_empty_input() {
    assert!(matches!(average(&[]), Err(Error::EmptyStatistics)));
    assert!(matches!(variance(&[]), Err(Error::EmptyStatistics)));
}

// ============================================================================
// NODE COUNT TESTS
// ============================================================================

#[test]
fn test_node_count_two_digits() {
    assert_eq!(node_count_from_file_name("node05.txt").unwrap(), 5);
    assert_eq!(node_count_from_file_name("staffetta12.txt").unwrap(), 12);
}

#[test]
fn test_node_count_one_digit() {
    assert_eq!(node_count_from_file_name("node5.txt").unwrap(), 5);
    assert_eq!(node_count_from_file_name("7.txt").unwrap(), 7);
}

#[test]
fn test_node_count_uses_text_before_first_dot() {
    assert_eq!(node_count_from_file_name("nodes9.run3.txt").unwrap(), 9);
    assert_eq!(node_count_from_file_name("nodes15").unwrap(), 15);
}

#[test]
fn test_node_count_only_last_two_characters() {
    assert_eq!(node_count_from_file_name("run2016_20.txt").unwrap(), 20);
    assert_eq!(node_count_from_file_name("run123.txt").unwrap(), 23);
}

#[test]
fn test_node_count_out_of_grammar() {
    for name in ["nodes.txt", ".txt", "nodes5a.txt", "node00.txt", "node0.txt"] {
        assert!(
            matches!(
                node_count_from_file_name(name),
                Err(Error::InvalidFileName { .. })
            ),
            "{} should be rejected",
            name
        );
    }
}

// ============================================================================
// SUMMARY TESTS
// ============================================================================

#[test]
fn test_success_ratio() {
    assert_close(success_ratio(5, 5), 0.1);
    assert_close(success_ratio(0, 3), 0.0);
    assert_close(success_ratio(120, 12), 1.0);
}

#[test]
fn test_summary_from_log() {
    let text = LogBuilder::new()
        .receive(0.0, "2 1 3")
        .receive(0.5, "3 1 3")
        .receive(0.7, "2 1 3")
        .power(1.0, 2, 1000)
        .power(1.5, 3, 3000)
        .build();
    let parsed = SensorLogReader::from_bytes(text.as_bytes()).parse().unwrap();

    let summary = Summary::from_parsed("nodes2.txt", parsed).unwrap();
    assert_eq!(summary.node_count, 2);
    assert_eq!(summary.receive_count, 2);
    assert_close(summary.success_ratio, 0.1);
    assert_close(summary.average_power, 2.0);
    assert_close(summary.power_variance, 1.0);
    assert_eq!(summary.power_by_node.len(), 2);
}

#[test]
fn test_summary_without_power_readings() {
    let mut parsed = ParsedLog::new();
    parsed.record_receive("HELLO");

    assert!(matches!(
        Summary::from_parsed("nodes5.txt", parsed),
        Err(Error::EmptyStatistics)
    ));
}

#[test]
fn test_summary_with_bad_file_name() {
    let mut parsed = ParsedLog::new();
    parsed.record_power(2, 1.0);

    assert!(matches!(
        Summary::from_parsed("nodes.txt", parsed),
        Err(Error::InvalidFileName { .. })
    ));
}

#[test]
fn test_summary_display() {
    let mut parsed = ParsedLog::new();
    for payload in ["a", "b", "c", "d", "e"] {
        parsed.record_receive(payload);
    }
    parsed.record_power(3, 2.5);
    parsed.record_power(2, 7.0);

    let summary = Summary::from_parsed("node05.txt", parsed).unwrap();
    let expected = "file: node05.txt\n\
                    count: 5\n\
                    success: 0.1\n\
                    avg power: 4.75\n\
                    var power: 5.0625\n\
                    power: {2: 7.0, 3: 2.5}\n";
    assert_eq!(summary.to_string(), expected);
}
