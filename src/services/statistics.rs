use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{
    DurationUnit, FitnessLevel, WeightLog, WeightUnit, WorkoutSession, WorkoutType,
    WorkoutWithSessions,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeightStats {
    pub latest_weight: Option<f64>,
    pub total_change: Option<f64>,
    pub percentage_change: Option<f64>,
    pub weekly_average: Option<f64>,
    pub unit: Option<WeightUnit>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecentWorkout {
    pub name: String,
    pub workout_type: WorkoutType,
    pub difficulty: FitnessLevel,
    pub last_completed: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutStats {
    pub total_workouts: i64,
    pub total_sessions: i64,
    pub total_duration_minutes: f64,
    pub workouts_by_type: HashMap<WorkoutType, i64>,
    pub recent_workout: Option<RecentWorkout>,
}

/// Derive weight summaries from a user's logs.
///
/// No unit conversion is performed: logs mixing kg and lbs produce
/// numerically meaningless aggregates. The unit reported is the one of the
/// most recent log.
pub fn compute_weight_stats(logs: &[WeightLog]) -> WeightStats {
    let latest = logs.iter().max_by_key(|log| log.measured_at);
    let earliest = logs.iter().min_by_key(|log| log.measured_at);

    let (total_change, percentage_change) = match (latest, earliest) {
        (Some(latest), Some(earliest)) => {
            let change = latest.weight_value - earliest.weight_value;
            (Some(change), Some(change / earliest.weight_value * 100.0))
        }
        _ => (None, None),
    };

    // Mean over the 4 most recent logs, or whatever exists below that.
    let weekly_average = if logs.is_empty() {
        None
    } else {
        let mut by_recency: Vec<&WeightLog> = logs.iter().collect();
        by_recency.sort_by_key(|log| std::cmp::Reverse(log.measured_at));
        let recent = &by_recency[..by_recency.len().min(4)];
        let sum: f64 = recent.iter().map(|log| log.weight_value).sum();
        Some(sum / recent.len() as f64)
    };

    WeightStats {
        latest_weight: latest.map(|log| log.weight_value),
        total_change,
        percentage_change,
        weekly_average,
        unit: latest.map(|log| log.weight_unit),
    }
}

/// Duration of one session in minutes; hours are converted, anything else is
/// already minutes.
fn session_minutes(session: &WorkoutSession) -> f64 {
    match session.duration_unit {
        DurationUnit::Hours => session.duration_value * 60.0,
        DurationUnit::Minutes => session.duration_value,
    }
}

/// Derive workout summaries from a user's workouts and their completed
/// sessions.
pub fn compute_workout_stats(workouts: &[WorkoutWithSessions]) -> WorkoutStats {
    let total_sessions = workouts
        .iter()
        .map(|w| w.completed_sessions.len() as i64)
        .sum();

    let total_duration_minutes = workouts
        .iter()
        .flat_map(|w| w.completed_sessions.iter())
        .map(session_minutes)
        .sum();

    let mut workouts_by_type: HashMap<WorkoutType, i64> = HashMap::new();
    for entry in workouts {
        *workouts_by_type.entry(entry.workout.workout_type).or_insert(0) += 1;
    }

    // The workout whose most recent completed session is latest overall.
    // Workouts without sessions can never be "recent".
    let recent_workout = workouts
        .iter()
        .filter_map(|entry| {
            entry
                .completed_sessions
                .iter()
                .map(|session| session.date)
                .max()
                .map(|last_completed| (entry, last_completed))
        })
        .max_by_key(|(_, last_completed)| *last_completed)
        .map(|(entry, last_completed)| RecentWorkout {
            name: entry.workout.name.clone(),
            workout_type: entry.workout.workout_type,
            difficulty: entry.workout.difficulty,
            last_completed,
        });

    WorkoutStats {
        total_workouts: workouts.len() as i64,
        total_sessions,
        total_duration_minutes,
        workouts_by_type,
        recent_workout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn at(ts: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(ts, 0).unwrap()
    }

    fn log(value: f64, unit: WeightUnit, ts: i64) -> WeightLog {
        WeightLog {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            weight_value: value,
            weight_unit: unit,
            notes: None,
            measured_at: at(ts),
            created_at: at(ts),
            updated_at: at(ts),
        }
    }

    fn workout(name: &str, workout_type: WorkoutType) -> WorkoutWithSessions {
        WorkoutWithSessions {
            workout: crate::models::Workout {
                id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                name: name.to_string(),
                description: None,
                workout_type,
                difficulty: FitnessLevel::Intermediate,
                duration_value: None,
                duration_unit: DurationUnit::Minutes,
                exercises: Json(vec![]),
                is_active: true,
                tags: vec![],
                target_muscle_groups: vec![],
                created_at: at(0),
                updated_at: at(0),
            },
            completed_sessions: vec![],
        }
    }

    fn session(workout_id: Uuid, value: f64, unit: DurationUnit, ts: i64) -> WorkoutSession {
        WorkoutSession {
            id: Uuid::new_v4(),
            workout_id,
            date: at(ts),
            duration_value: value,
            duration_unit: unit,
            feedback: None,
            notes: None,
            calories_burned: None,
            created_at: at(ts),
        }
    }

    #[test]
    fn empty_weight_logs_yield_all_none() {
        let stats = compute_weight_stats(&[]);

        assert_eq!(stats.latest_weight, None);
        assert_eq!(stats.total_change, None);
        assert_eq!(stats.percentage_change, None);
        assert_eq!(stats.weekly_average, None);
        assert_eq!(stats.unit, None);
    }

    #[test]
    fn single_log_yields_zero_change() {
        let stats = compute_weight_stats(&[log(70.0, WeightUnit::Kg, 1)]);

        assert_eq!(stats.latest_weight, Some(70.0));
        assert_eq!(stats.total_change, Some(0.0));
        assert_eq!(stats.percentage_change, Some(0.0));
        assert_eq!(stats.weekly_average, Some(70.0));
        assert_eq!(stats.unit, Some(WeightUnit::Kg));
    }

    #[test]
    fn change_is_latest_minus_earliest() {
        let stats = compute_weight_stats(&[
            log(80.0, WeightUnit::Kg, 1),
            log(75.0, WeightUnit::Kg, 2),
        ]);

        assert_eq!(stats.latest_weight, Some(75.0));
        assert_eq!(stats.total_change, Some(-5.0));
        assert_eq!(stats.percentage_change, Some(-6.25));
    }

    #[test]
    fn change_ignores_input_order() {
        let stats = compute_weight_stats(&[
            log(75.0, WeightUnit::Kg, 2),
            log(80.0, WeightUnit::Kg, 1),
        ]);

        assert_eq!(stats.total_change, Some(-5.0));
    }

    #[test]
    fn weekly_average_uses_four_most_recent() {
        let stats = compute_weight_stats(&[
            log(100.0, WeightUnit::Kg, 1), // outside the window
            log(80.0, WeightUnit::Kg, 2),
            log(78.0, WeightUnit::Kg, 3),
            log(76.0, WeightUnit::Kg, 4),
            log(74.0, WeightUnit::Kg, 5),
        ]);

        assert_eq!(stats.weekly_average, Some((80.0 + 78.0 + 76.0 + 74.0) / 4.0));
    }

    #[test]
    fn empty_workouts_yield_zeroes() {
        let stats = compute_workout_stats(&[]);

        assert_eq!(stats.total_workouts, 0);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.total_duration_minutes, 0.0);
        assert!(stats.workouts_by_type.is_empty());
        assert_eq!(stats.recent_workout, None);
    }

    #[test]
    fn hour_sessions_convert_to_minutes() {
        let mut entry = workout("Morning Run", WorkoutType::Cardio);
        let id = entry.workout.id;
        entry.completed_sessions = vec![session(id, 1.0, DurationUnit::Hours, 10)];

        let stats = compute_workout_stats(&[entry]);

        assert_eq!(stats.total_sessions, 1);
        assert_eq!(stats.total_duration_minutes, 60.0);
    }

    #[test]
    fn minutes_and_hours_accumulate() {
        let mut entry = workout("Mixed", WorkoutType::Strength);
        let id = entry.workout.id;
        entry.completed_sessions = vec![
            session(id, 30.0, DurationUnit::Minutes, 10),
            session(id, 0.5, DurationUnit::Hours, 20),
        ];

        let stats = compute_workout_stats(&[entry]);

        assert_eq!(stats.total_duration_minutes, 60.0);
    }

    #[test]
    fn workouts_are_counted_by_type() {
        let stats = compute_workout_stats(&[
            workout("A", WorkoutType::Cardio),
            workout("B", WorkoutType::Cardio),
            workout("C", WorkoutType::Strength),
        ]);

        assert_eq!(stats.total_workouts, 3);
        assert_eq!(stats.workouts_by_type.get(&WorkoutType::Cardio), Some(&2));
        assert_eq!(stats.workouts_by_type.get(&WorkoutType::Strength), Some(&1));
        assert_eq!(stats.workouts_by_type.get(&WorkoutType::Hiit), None);
    }

    #[test]
    fn recent_workout_has_latest_session_date() {
        let mut older = workout("Older", WorkoutType::Cardio);
        let older_id = older.workout.id;
        older.completed_sessions = vec![
            session(older_id, 30.0, DurationUnit::Minutes, 10),
            session(older_id, 30.0, DurationUnit::Minutes, 50),
        ];

        let mut newer = workout("Newer", WorkoutType::Strength);
        let newer_id = newer.workout.id;
        newer.completed_sessions = vec![session(newer_id, 20.0, DurationUnit::Minutes, 60)];

        let stats = compute_workout_stats(&[older, newer]);
        let recent = stats.recent_workout.unwrap();

        assert_eq!(recent.name, "Newer");
        assert_eq!(recent.last_completed, at(60));
    }

    #[test]
    fn sessionless_workout_is_never_recent() {
        let idle = workout("Idle", WorkoutType::Hiit);

        let mut active = workout("Active", WorkoutType::Cardio);
        let active_id = active.workout.id;
        active.completed_sessions = vec![session(active_id, 15.0, DurationUnit::Minutes, 5)];

        let stats = compute_workout_stats(&[idle, active]);
        assert_eq!(stats.recent_workout.unwrap().name, "Active");

        let only_idle = compute_workout_stats(&[workout("Idle", WorkoutType::Hiit)]);
        assert_eq!(only_idle.recent_workout, None);
    }
}
