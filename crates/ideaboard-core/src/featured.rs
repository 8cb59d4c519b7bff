//! Featured idea rotation.
//!
//! One idea is featured per UTC day. Candidates are ordered by id so the
//! rotation does not depend on how the records were fetched, then the day
//! number since the epoch picks the slot.

use crate::config::MILLIS_PER_DAY;
use crate::record::Rankable;

/// The idea featured on the UTC day containing `now_ms`, or `None` if there
/// are no candidates.
pub fn featured_idea<R: Rankable>(records: &[R], now_ms: i64) -> Option<&R> {
    let rotation = rotation_order(records);
    pick_for_day(&rotation, now_ms.div_euclid(MILLIS_PER_DAY))
}

/// Featured ideas for `days` consecutive days starting with today.
///
/// Each entry is the start of the UTC day in epoch milliseconds and the idea
/// featured on it. The schedule stops early at the last day representable
/// in epoch milliseconds.
pub fn featured_schedule<R: Rankable>(records: &[R], now_ms: i64, days: usize) -> Vec<(i64, &R)> {
    let rotation = rotation_order(records);
    if rotation.is_empty() {
        return Vec::new();
    }

    let today = now_ms.div_euclid(MILLIS_PER_DAY);
    let days = i64::try_from(days).unwrap_or(i64::MAX);

    (0..days)
        .map_while(|offset| {
            let day = today.checked_add(offset)?;
            // The earliest day begins before i64::MIN, clamp its start
            let day_start_ms = match day.checked_mul(MILLIS_PER_DAY) {
                Some(ms) => ms,
                None if day < 0 => i64::MIN,
                None => return None,
            };
            pick_for_day(&rotation, day).map(|record| (day_start_ms, record))
        })
        .collect()
}

fn rotation_order<R: Rankable>(records: &[R]) -> Vec<&R> {
    let mut rotation: Vec<&R> = records.iter().collect();
    rotation.sort_by(|a, b| a.id().cmp(b.id()));
    rotation
}

fn pick_for_day<'a, R>(rotation: &[&'a R], day: i64) -> Option<&'a R> {
    if rotation.is_empty() {
        return None;
    }
    let slot = day.rem_euclid(rotation.len() as i64) as usize;
    rotation.get(slot).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::IdeaRecord;

    fn records(ids: &[&str]) -> Vec<IdeaRecord> {
        ids.iter().map(|id| IdeaRecord::new(*id)).collect()
    }

    #[test]
    fn test_empty_has_no_featured_idea() {
        let empty: Vec<IdeaRecord> = Vec::new();
        assert!(featured_idea(&empty, 0).is_none());
        assert!(featured_schedule(&empty, 0, 7).is_empty());
    }

    #[test]
    fn test_rotates_daily_by_id() {
        let ideas = records(&["c", "a", "b"]);

        let picks: Vec<&str> = (0..6)
            .map(|day| featured_idea(&ideas, day * MILLIS_PER_DAY).unwrap().id.as_str())
            .collect();
        assert_eq!(picks, vec!["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn test_stable_within_a_day() {
        let ideas = records(&["x", "y"]);
        let morning = featured_idea(&ideas, 10 * MILLIS_PER_DAY + 1).unwrap();
        let night = featured_idea(&ideas, 11 * MILLIS_PER_DAY - 1).unwrap();
        assert_eq!(morning.id, night.id);
    }

    #[test]
    fn test_independent_of_input_order() {
        let forward = records(&["a", "b", "c", "d"]);
        let backward = records(&["d", "c", "b", "a"]);
        let now = 12_345 * MILLIS_PER_DAY;
        assert_eq!(
            featured_idea(&forward, now).unwrap().id,
            featured_idea(&backward, now).unwrap().id
        );
    }

    #[test]
    fn test_schedule() {
        let ideas = records(&["a", "b"]);
        let now = 4 * MILLIS_PER_DAY + 500;
        let schedule = featured_schedule(&ideas, now, 3);

        let days: Vec<i64> = schedule.iter().map(|(day, _)| *day).collect();
        assert_eq!(
            days,
            vec![4 * MILLIS_PER_DAY, 5 * MILLIS_PER_DAY, 6 * MILLIS_PER_DAY]
        );
        let picks: Vec<&str> = schedule.iter().map(|(_, r)| r.id.as_str()).collect();
        assert_eq!(picks, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_schedule_stops_at_last_representable_day() {
        let ideas = records(&["a", "b"]);

        let schedule = featured_schedule(&ideas, i64::MAX, usize::MAX);
        assert_eq!(schedule.len(), 1);
        assert_eq!(
            schedule[0].0,
            i64::MAX.div_euclid(MILLIS_PER_DAY) * MILLIS_PER_DAY
        );

        let schedule = featured_schedule(&ideas, i64::MIN, 2);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[0].0, i64::MIN);
        assert_eq!(
            schedule[1].0,
            (i64::MIN.div_euclid(MILLIS_PER_DAY) + 1) * MILLIS_PER_DAY
        );
    }

    #[test]
    fn test_pre_epoch_now() {
        let ideas = records(&["a", "b", "c"]);
        // Day -1 maps to the last slot
        assert_eq!(featured_idea(&ideas, -1).unwrap().id, "c");
    }
}
