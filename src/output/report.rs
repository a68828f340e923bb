//! Whole-report rendering

use crate::error::Result;
use crate::models::TestResult;

/// Render records in execution order, grouping consecutive tests by class
pub fn render_report<'a, I>(records: I, verbose: bool) -> Result<String>
where
    I: IntoIterator<Item = &'a TestResult>,
{
    let mut output = String::new();
    let mut previous: Option<&str> = None;

    for record in records {
        output.push_str(&record.render(previous, verbose)?);
        previous = Some(record.class_under_test());
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use crate::output::Colorizer;

    fn record(class: &str, method: &str, runtime: f64) -> TestResult {
        let mut result = TestResult::new(Colorizer::disabled(), class, method);
        result.set_runtime(runtime);
        result
    }

    #[test]
    fn test_report_groups_by_class() {
        let mut failing = record("ClassB", "testThree", 6.0);
        failing.fail("✘", "Expected 1\nGot 2");

        let records = vec![
            record("ClassA", "testOne", 0.5),
            record("ClassA", "testTwo", 2.0),
            failing,
            record("ClassA", "testFour", 0.001),
        ];

        let report = render_report(&records, false).unwrap();
        assert_eq!(
            report,
            "ClassA\n\
             ✔ testOne [500.00 ms]\n\
             ✔ testTwo [2000.00 ms]\n\
             \n\
             ClassB\n\
             ✘ testThree [6000.00 ms]\n   │\n   │ Expected 1\n   │ Got 2\n\n\
             \n\
             ClassA\n\
             ✔ testFour [1.00 ms]\n"
        );
    }

    #[test]
    fn test_empty_report() {
        let records: Vec<TestResult> = Vec::new();
        assert_eq!(render_report(&records, true).unwrap(), "");
    }

    #[test]
    fn test_report_stops_at_missing_runtime() {
        let records = vec![
            record("ClassA", "testOne", 0.5),
            TestResult::new(Colorizer::disabled(), "ClassA", "testTwo"),
        ];
        assert!(matches!(
            render_report(&records, false),
            Err(ReportError::MissingRuntime { .. })
        ));
    }
}
