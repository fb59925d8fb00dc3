// Display formatting for elapsed durations: "{minutes}m {seconds}s".
//
// Minutes are floored, seconds keep the sign of the input, so negative totals render the way
// existing clients show them (-61 -> "-2m -1s").

pub fn format_elapsed(seconds: i64) -> String {
    format!("{}m {}s", seconds.div_euclid(60), seconds % 60)
}
