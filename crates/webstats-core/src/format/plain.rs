//! `name=value` lines, one per result, in result order.

use std::fmt::Write;

use crate::resolve::ResolvedStats;

pub fn render(stats: &ResolvedStats) -> String {
    let mut out = String::new();
    for r in stats {
        let _ = writeln!(out, "{}={}", r.name, r.outcome);
    }
    out
}
