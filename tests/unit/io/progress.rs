//! Tests for generation progress display

#[cfg(test)]
mod tests {
    use lifegrid::io::progress::ProgressReporter;

    // Tests a visible reporter tracks the reported generation
    // Verified by ignoring the generation in update
    #[test]
    fn test_progress_reporter_update() {
        let reporter = ProgressReporter::new(10);
        reporter.update(3, 42);
        assert_eq!(reporter.position(), 3);
        reporter.update(10, 0);
        assert_eq!(reporter.position(), 10);
        reporter.finish();
    }

    // Tests a hidden reporter accepts the same calls
    #[test]
    fn test_hidden_reporter() {
        let reporter = ProgressReporter::hidden();
        reporter.update(5, 1);
        assert_eq!(reporter.position(), 5);
        reporter.finish();
    }
}
