/// Runs `$block` and reports how long it took as a structured `elapsed` field on a debug event.
#[macro_export]
macro_rules! timer_debug {
    ($phase:literal, $block:expr) => {{
        let started_at = jiff::Timestamp::now();
        let result = $block;
        let elapsed = jiff::Timestamp::now().duration_since(started_at);

        tracing::debug!(phase = $phase, elapsed = ?elapsed, "phase finished");

        result
    }};
}
