//! Parser for the compact lecture schedule encoding.
//!
//! A raw schedule string is a `<p>`-separated concatenation of blocks, each
//! block being a day code followed by time markers and an optional
//! parenthesized room:
//!
//! - `Mon1~3(201)` — Monday, slots 1 through 3, room 201
//! - `Fri19,20` — Friday, slots 19 and 20
//! - `Tue12` — Tuesday, slot 12 only
//!
//! The markers of a block collectively define one contiguous run: the
//! produced range is the closed ascending list from the smallest to the
//! largest marker. Malformed blocks are skipped rather than raised — a
//! single bad record must not block filtering of the rest of the catalog.

use crate::types::{DayCode, ScheduleSlot};
use regex::Regex;
use std::sync::LazyLock;

// Compiled once; day token, marker list, optional room suffix.
static BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Mon|Tue|Wed|Thu|Fri|Sat)(\d+(?:[~,]\d+)*)(?:\((.+)\))?$").unwrap()
});

/// Parses a raw schedule string into its scheduled blocks.
///
/// Pure and infallible: empty or unparseable input yields an empty vector,
/// never an error. Cheap enough to call on every filter evaluation.
pub fn parse_schedule(raw: &str) -> Vec<ScheduleSlot> {
    raw.split("<p>").filter_map(parse_block).collect()
}

fn parse_block(block: &str) -> Option<ScheduleSlot> {
    let caps = BLOCK_REGEX.captures(block.trim())?;

    let day = DayCode::parse(caps.get(1)?.as_str())?;
    let markers: Vec<u32> = caps
        .get(2)?
        .as_str()
        .split(['~', ','])
        .filter_map(|token| token.parse().ok())
        .collect();

    let first = markers.iter().min().copied()?;
    let last = markers.iter().max().copied()?;
    let range: Vec<u32> = (first..=last).collect();

    let room = caps.get(3).map(|m| m.as_str().to_string());

    Some(ScheduleSlot { day, range, room })
}
