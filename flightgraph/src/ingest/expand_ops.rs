//! multi-day expansion: turns flattened legs spanning a validity window into
//! one dated [`FlightInstance`] per calendar day, with forward-fill semantics
//! inside each (airline, flight number, sequence number) group.
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use flightgraph_core::model::time_ops::{self, TimeError};
use flightgraph_core::model::FlightInstance;

use crate::ingest::flatten_ops::FlatLeg;
use crate::ingest::ExpandError;

type GroupKey = (String, u32, u32);

/// expands a flattened batch. groups are processed in first-seen feed order;
/// a group with an inconsistent validity window is skipped with a warning and
/// the rest of the batch continues.
pub fn expand(legs: Vec<FlatLeg>) -> Vec<FlightInstance> {
    let mut order: Vec<GroupKey> = Vec::new();
    let mut groups: HashMap<GroupKey, Vec<FlatLeg>> = HashMap::new();
    for leg in legs {
        let key = leg.group_key();
        if let Some(rows) = groups.get_mut(&key) {
            rows.push(leg);
        } else {
            order.push(key.clone());
            groups.insert(key, vec![leg]);
        }
    }

    let mut instances = Vec::new();
    for key in order {
        if let Some(rows) = groups.remove(&key) {
            match expand_group(rows) {
                Ok(mut expanded) => instances.append(&mut expanded),
                Err(e) => log::warn!("skipping schedule group {key:?}: {e}"),
            }
        }
    }
    instances
}

/// expands one group. single-day rows map to one instance each; rows spanning
/// several days are forward-filled over every calendar date in the combined
/// [min start, max end] window, the most recent row at or before each date
/// supplying its fields. later-listed rows win ties on the same start date.
///
/// at most one instance comes out per flight date, so the group key + date
/// uniqueness invariant holds even for overlapping input rows.
pub fn expand_group(rows: Vec<FlatLeg>) -> Result<Vec<FlightInstance>, ExpandError> {
    for row in &rows {
        if row.valid_to < row.valid_from {
            return Err(ExpandError::WindowEndsBeforeStart {
                airline: row.airline.clone(),
                flight_number: row.flight_number,
                sequence_number: row.sequence_number,
                valid_from: row.valid_from,
                valid_to: row.valid_to,
            });
        }
    }

    let (single, multi): (Vec<FlatLeg>, Vec<FlatLeg>) =
        rows.into_iter().partition(|r| r.valid_from == r.valid_to);

    // keyed by flight date: later emissions overwrite earlier ones
    let mut by_date: BTreeMap<NaiveDate, FlightInstance> = BTreeMap::new();

    for row in &single {
        emit(&mut by_date, row, row.valid_from);
    }

    let mut sorted = multi;
    sorted.sort_by_key(|r| r.valid_from); // stable, feed order breaks ties
    if let Some(first) = sorted.first() {
        let start = first.valid_from;
        let end = sorted.iter().map(|r| r.valid_to).max().unwrap_or(start);
        let mut current = first;
        let mut next_idx = 0;
        let mut date = start;
        loop {
            while next_idx < sorted.len() && sorted[next_idx].valid_from <= date {
                current = &sorted[next_idx];
                next_idx += 1;
            }
            emit(&mut by_date, current, date);
            if date == end {
                break;
            }
            date = date.succ_opt().ok_or(ExpandError::DateOverflow(start))?;
        }
    }

    Ok(by_date.into_values().collect())
}

/// dates one row. a minute-of-day outside [0, 1439] invalidates that dated
/// instance only; it is logged and skipped rather than failing the group.
fn emit(by_date: &mut BTreeMap<NaiveDate, FlightInstance>, row: &FlatLeg, date: NaiveDate) {
    match instance(row, date) {
        Ok(i) => {
            by_date.insert(date, i);
        }
        Err(e) => log::warn!(
            "skipping {}{} leg {} on {date}: {e}",
            row.airline,
            row.flight_number,
            row.sequence_number
        ),
    }
}

fn instance(row: &FlatLeg, date: NaiveDate) -> Result<FlightInstance, TimeError> {
    Ok(FlightInstance {
        airline: row.airline.clone(),
        flight_number: row.flight_number,
        sequence_number: row.sequence_number,
        origin: row.origin.clone(),
        destination: row.destination.clone(),
        aircraft_type: row.aircraft_type.clone(),
        flight_date: date,
        departure: time_ops::timestamp(date, row.departure_minute)?,
        arrival: time_ops::timestamp(date, row.arrival_minute)?,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use flightgraph_core::model::time_ops::format_timestamp;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
    }

    fn row(from: u32, to: u32) -> FlatLeg {
        FlatLeg {
            airline: String::from("LH"),
            flight_number: 400,
            valid_from: date(from),
            valid_to: date(to),
            origin: String::from("FRA"),
            destination: String::from("JFK"),
            sequence_number: 1,
            departure_minute: 650,
            arrival_minute: 1130,
            aircraft_type: String::from("74H"),
        }
    }

    #[test]
    fn test_single_day_row_yields_one_instance() {
        let expanded = expand_group(vec![row(5, 5)]).unwrap();
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].flight_date, date(5));
        assert_eq!(format_timestamp(&expanded[0].departure), "2026-09-05T10:50");
        assert_eq!(format_timestamp(&expanded[0].arrival), "2026-09-05T18:50");
    }

    #[test]
    fn test_n_day_window_yields_n_instances() {
        let expanded = expand_group(vec![row(1, 7)]).unwrap();
        assert_eq!(expanded.len(), 7);
        let dates: Vec<NaiveDate> = expanded.iter().map(|i| i.flight_date).collect();
        let expected: Vec<NaiveDate> = (1..=7).map(date).collect();
        assert_eq!(dates, expected); // no gaps, no duplicates
        for i in &expanded {
            assert_eq!(i.aircraft_type, "74H");
            assert_eq!(i.origin, "FRA");
            assert_eq!(i.flight_date, i.departure.date());
        }
    }

    #[test]
    fn test_forward_fill_propagates_forward_only() {
        let mut changed = row(3, 5);
        changed.aircraft_type = String::from("32N");
        let expanded = expand_group(vec![row(1, 5), changed]).unwrap();
        assert_eq!(expanded.len(), 5);
        for i in &expanded {
            let expected = if i.flight_date < date(3) { "74H" } else { "32N" };
            assert_eq!(i.aircraft_type, expected, "on {}", i.flight_date);
        }
    }

    #[test]
    fn test_same_start_date_later_listed_row_wins() {
        let mut second = row(1, 3);
        second.aircraft_type = String::from("32N");
        let expanded = expand_group(vec![row(1, 3), second]).unwrap();
        assert_eq!(expanded.len(), 3);
        for i in &expanded {
            assert_eq!(i.aircraft_type, "32N");
        }
    }

    #[test]
    fn test_window_end_before_start_rejected() {
        let result = expand_group(vec![row(5, 2)]);
        assert!(matches!(
            result,
            Err(ExpandError::WindowEndsBeforeStart { .. })
        ));
    }

    #[test]
    fn test_bad_group_skipped_but_batch_continues() {
        let mut other = row(1, 1);
        other.flight_number = 410;
        let instances = expand(vec![row(5, 2), other]);
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].flight_number, 410);
    }

    #[test]
    fn test_invalid_minute_skips_instance_not_batch() {
        let mut bad = row(1, 1);
        bad.departure_minute = 1440;
        let mut good = row(2, 2);
        good.flight_number = 410;
        let instances = expand(vec![bad, good]);
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].flight_number, 410);
    }

    #[test]
    fn test_overlapping_rows_keep_one_instance_per_date() {
        // a stray single-day row inside a multi-day window must not duplicate
        // that date
        let mut stray = row(3, 3);
        stray.aircraft_type = String::from("32N");
        let expanded = expand_group(vec![stray, row(1, 5)]).unwrap();
        assert_eq!(expanded.len(), 5);
        let dates: Vec<NaiveDate> = expanded.iter().map(|i| i.flight_date).collect();
        assert_eq!(dates, (1..=5).map(date).collect::<Vec<_>>());
    }

    #[test]
    fn test_groups_expand_independently() {
        let mut leg2 = row(1, 3);
        leg2.sequence_number = 2;
        leg2.origin = String::from("JFK");
        leg2.destination = String::from("BOS");
        let instances = expand(vec![row(1, 1), leg2]);
        assert_eq!(instances.len(), 4);
        assert_eq!(
            instances
                .iter()
                .filter(|i| i.sequence_number == 2)
                .count(),
            3
        );
    }
}
