/// Runs a block and returns its value together with the wall time it took.
/// Reporting is left to the caller.
#[macro_export]
macro_rules! measure_time {
    ($block:block) => {{
        let start = std::time::Instant::now();
        let result = { $block };
        (result, start.elapsed())
    }};
}
