//! Unit tests for row selection and min-lines promotion.

use super::scheduler::{BoardLayout, promote_min_lines, select_visible};
use crate::domain::{Arrival, Bus, BusDirectory, BusStopCode, StopStyle};

fn arrival(service: &str, secs: i64) -> Arrival {
    Arrival::new(BusStopCode::new(83139), service, secs, StopStyle::Plain)
}

fn at_stop(stop: u32, service: &str, secs: i64) -> Arrival {
    Arrival::new(BusStopCode::new(stop), service, secs, StopStyle::Plain)
}

fn buses(entries: &[(&str, usize)]) -> BusDirectory {
    entries
        .iter()
        .map(|(name, min_lines)| Bus::new(*name, *min_lines))
        .collect()
}

fn layout(rows: usize) -> BoardLayout {
    BoardLayout::new(rows, 20)
}

fn summary(arrivals: &[Arrival]) -> Vec<(&str, i64)> {
    arrivals
        .iter()
        .map(|a| (a.service_number.as_str(), a.time_to_arrival_secs))
        .collect()
}

#[test]
fn least_imminent_configured_bus_is_promoted() {
    let arrivals = vec![
        arrival("X", 500),
        arrival("a", 10),
        arrival("b", 20),
        arrival("c", 30),
        arrival("d", 40),
        arrival("e", 50),
    ];

    let shown = select_visible(&arrivals, &buses(&[("X", 1)]), layout(3));

    assert_eq!(summary(&shown), vec![("a", 10), ("X", 500)]);
}

#[test]
fn no_promotion_below_capacity() {
    let arrivals = vec![arrival("X", 500), arrival("a", 30), arrival("b", 10)];

    let shown = select_visible(&arrivals, &buses(&[("X", 3)]), layout(5));

    assert_eq!(summary(&shown), vec![("b", 10), ("a", 30), ("X", 500)]);
}

#[test]
fn below_capacity_truncates_to_visible_rows() {
    let arrivals = vec![arrival("a", 30), arrival("b", 10)];

    let shown = select_visible(&arrivals, &buses(&[]), layout(3));

    assert_eq!(summary(&shown), vec![("b", 10), ("a", 30)]);

    let shown = select_visible(&arrivals, &buses(&[]), layout(2));
    assert_eq!(summary(&shown), vec![("b", 10)]);
}

#[test]
fn equal_countdowns_keep_input_order() {
    let arrivals = vec![
        at_stop(1, "15", 60),
        at_stop(2, "15", 60),
        at_stop(3, "7", 5),
        at_stop(4, "15", 60),
    ];

    let shown = select_visible(&arrivals, &buses(&[]), layout(5));

    let stops: Vec<u32> = shown.iter().map(|a| a.stop_code.get()).collect();
    assert_eq!(stops, vec![3, 1, 2, 4]);
}

#[test]
fn promotes_until_min_lines_reached() {
    let arrivals = vec![
        arrival("a", 1),
        arrival("b", 2),
        arrival("c", 3),
        arrival("X", 4),
        arrival("X", 5),
    ];

    let shown = select_visible(&arrivals, &buses(&[("X", 2)]), layout(3));

    assert_eq!(summary(&shown), vec![("X", 4), ("X", 5)]);
}

#[test]
fn later_promotion_can_win_the_only_visible_row() {
    let arrivals = vec![arrival("a", 1), arrival("b", 2), arrival("X", 3), arrival("X", 4)];

    let shown = select_visible(&arrivals, &buses(&[("X", 2)]), layout(2));

    assert_eq!(summary(&shown), vec![("X", 4)]);
}

#[test]
fn bus_already_at_min_lines_is_not_promoted() {
    let arrivals = vec![arrival("X", 1), arrival("a", 2), arrival("b", 3), arrival("X", 400)];

    let shown = select_visible(&arrivals, &buses(&[("X", 1)]), layout(3));

    assert_eq!(summary(&shown), vec![("X", 1), ("a", 2)]);
}

#[test]
fn unconfigured_and_zero_min_buses_are_untouched() {
    let arrivals = vec![arrival("a", 1), arrival("b", 2), arrival("c", 3), arrival("Z", 4), arrival("Y", 5)];

    let shown = select_visible(&arrivals, &buses(&[("Z", 0)]), layout(3));

    assert_eq!(summary(&shown), vec![("a", 1), ("b", 2)]);
}

#[test]
fn tally_window_is_one_larger_than_display() {
    // X is counted inside the tally window but falls outside the drawn rows.
    let arrivals = vec![arrival("a", 10), arrival("b", 20), arrival("X", 30), arrival("c", 40)];

    let shown = select_visible(&arrivals, &buses(&[("X", 1)]), layout(3));

    assert_eq!(summary(&shown), vec![("a", 10), ("b", 20)]);
}

#[test]
fn displaced_entry_keeps_its_tally() {
    let arrivals = vec![arrival("A", 10), arrival("x", 20), arrival("y", 30), arrival("B", 40)];

    let shown = select_visible(&arrivals, &buses(&[("A", 1), ("B", 1)]), layout(3));

    assert_eq!(summary(&shown), vec![("A", 10), ("B", 40)]);
}

#[test]
fn slid_in_entry_is_reexamined() {
    let mut arrivals = vec![arrival("u", 1), arrival("Y", 2), arrival("X", 3)];

    promote_min_lines(&mut arrivals, &buses(&[("X", 1), ("Y", 2)]), 2);

    assert_eq!(summary(&arrivals), vec![("Y", 2), ("X", 3), ("u", 1)]);
}

#[test]
fn single_row_board_shows_nothing() {
    let arrivals = vec![arrival("a", 1), arrival("X", 2)];
    assert!(select_visible(&arrivals, &buses(&[("X", 1)]), layout(1)).is_empty());
}

#[test]
fn empty_set_shows_nothing() {
    assert!(select_visible(&[], &buses(&[("X", 1)]), layout(4)).is_empty());
}

#[test]
fn negative_countdowns_sort_first() {
    let arrivals = vec![arrival("a", 30), arrival("b", -15)];

    let shown = select_visible(&arrivals, &buses(&[]), layout(5));

    assert_eq!(summary(&shown), vec![("b", -15), ("a", 30)]);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const SERVICES: [&str; 4] = ["15", "155", "7", "NR1"];

    prop_compose! {
        fn arrivals()(
            raw in prop::collection::vec((0usize..4, -120i64..3600, 1u32..4), 0..24)
        ) -> Vec<Arrival> {
            raw.into_iter()
                .map(|(service, secs, stop)| at_stop(stop, SERVICES[service], secs))
                .collect()
        }
    }

    prop_compose! {
        fn directory()(mins in prop::collection::vec(prop::option::of(0usize..4), 4)) -> BusDirectory {
            SERVICES
                .iter()
                .zip(mins)
                .filter_map(|(name, min)| min.map(|m| Bus::new(*name, m)))
                .collect()
        }
    }

    fn sorted_multiset(arrivals: &[Arrival]) -> Vec<(u32, String, i64)> {
        let mut keys: Vec<_> = arrivals
            .iter()
            .map(|a| (a.stop_code.get(), a.service_number.clone(), a.time_to_arrival_secs))
            .collect();
        keys.sort();
        keys
    }

    proptest! {
        /// Output never exceeds the drawn rows and is in time order
        #[test]
        fn output_is_bounded_and_sorted(
            arrivals in arrivals(),
            buses in directory(),
            rows in 1usize..10,
        ) {
            let shown = select_visible(&arrivals, &buses, layout(rows));
            prop_assert_eq!(shown.len(), arrivals.len().min(rows - 1));
            prop_assert!(shown.windows(2).all(|w| w[0].time_to_arrival_secs <= w[1].time_to_arrival_secs));
        }

        /// Without configured buses the board is a plain soonest-first cut
        #[test]
        fn no_buses_means_plain_sort(arrivals in arrivals(), rows in 1usize..10) {
            let mut expected = arrivals.clone();
            expected.sort_by_key(|a| a.time_to_arrival_secs);
            expected.truncate(rows - 1);

            let shown = select_visible(&arrivals, &BusDirectory::new(), layout(rows));
            prop_assert_eq!(shown, expected);
        }

        /// Promotion only reorders
        #[test]
        fn promotion_is_a_permutation(
            arrivals in arrivals(),
            buses in directory(),
            rows in 1usize..10,
        ) {
            let mut promoted = arrivals.clone();
            promoted.sort_by_key(|a| a.time_to_arrival_secs);
            promote_min_lines(&mut promoted, &buses, rows);
            prop_assert_eq!(sorted_multiset(&promoted), sorted_multiset(&arrivals));
        }
    }
}
