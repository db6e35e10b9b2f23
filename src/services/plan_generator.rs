use crate::models::{
    BodyType, ExerciseWeight, FitnessGoal, FitnessLevel, PlannedExercise, WeightUnit, WorkoutType,
};

/// A generated workout plan, ready to be persisted as a Workout owned by the
/// requesting user.
#[derive(Debug, Clone)]
pub struct WorkoutPlan {
    pub name: String,
    pub description: String,
    pub workout_type: WorkoutType,
    pub difficulty: FitnessLevel,
    pub duration_minutes: Option<i32>,
    pub exercises: Vec<PlannedExercise>,
    pub tags: Vec<String>,
    pub target_muscle_groups: Vec<String>,
}

/// Generate a tailored workout plan from a fixed template keyed by goal.
///
/// Reps and timed durations scale with the fitness level tier; every goal
/// yields a plan (goals without a dedicated template fall back to the general
/// fitness one). Exercises whose name appears in `excluded_exercises` are
/// dropped from the result by exact match.
///
/// `body_type` only labels the plan and `equipment` is accepted but currently
/// unused; template contents do not vary with either.
pub fn generate(
    goal: FitnessGoal,
    fitness_level: FitnessLevel,
    body_type: Option<BodyType>,
    _equipment: &[String],
    duration_minutes: Option<i32>,
    excluded_exercises: &[String],
) -> WorkoutPlan {
    let (mut exercises, target_muscle_groups) = match goal {
        FitnessGoal::WeightLoss => weight_loss_template(fitness_level),
        FitnessGoal::MuscleGain => muscle_gain_template(fitness_level),
        FitnessGoal::Endurance => endurance_template(fitness_level),
        _ => general_fitness_template(fitness_level),
    };

    exercises.retain(|exercise| !excluded_exercises.contains(&exercise.name));

    let mut tags = vec![goal.as_str().to_string(), fitness_level.as_str().to_string()];
    if let Some(body_type) = body_type {
        tags.push(body_type.as_str().to_string());
    }

    WorkoutPlan {
        name: format!("{} Plan", goal.as_str()),
        description: format!(
            "Custom {} workout plan for {} fitness level",
            goal.as_str().to_lowercase(),
            fitness_level.as_str().to_lowercase()
        ),
        workout_type: map_goal_to_workout_type(goal),
        difficulty: fitness_level,
        duration_minutes,
        exercises,
        tags,
        target_muscle_groups: target_muscle_groups
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

fn map_goal_to_workout_type(goal: FitnessGoal) -> WorkoutType {
    match goal {
        FitnessGoal::WeightLoss => WorkoutType::Cardio,
        FitnessGoal::MuscleGain => WorkoutType::Strength,
        FitnessGoal::Endurance => WorkoutType::Hiit,
        FitnessGoal::Flexibility => WorkoutType::Flexibility,
        _ => WorkoutType::Custom,
    }
}

/// Pick the value for the caller's tier.
fn by_level(level: FitnessLevel, beginner: i32, intermediate: i32, advanced: i32) -> i32 {
    match level {
        FitnessLevel::Beginner => beginner,
        FitnessLevel::Intermediate => intermediate,
        FitnessLevel::Advanced => advanced,
    }
}

fn planned(name: &str) -> PlannedExercise {
    PlannedExercise {
        exercise_id: None,
        external_api_id: None,
        name: name.to_string(),
        sets: None,
        reps: None,
        duration_secs: None,
        weight: None,
        rest_secs: None,
        notes: None,
    }
}

fn weight_loss_template(level: FitnessLevel) -> (Vec<PlannedExercise>, Vec<&'static str>) {
    let exercises = vec![
        PlannedExercise {
            sets: Some(3),
            reps: Some(by_level(level, 10, 15, 20)),
            duration_secs: Some(60),
            rest_secs: Some(30),
            ..planned("Jumping Jacks")
        },
        PlannedExercise {
            sets: Some(3),
            reps: Some(by_level(level, 8, 12, 15)),
            duration_secs: Some(45),
            rest_secs: Some(30),
            ..planned("Mountain Climbers")
        },
        PlannedExercise {
            sets: Some(3),
            reps: Some(by_level(level, 5, 10, 15)),
            duration_secs: Some(60),
            rest_secs: Some(45),
            ..planned("Burpees")
        },
    ];

    (exercises, vec!["Full Body", "Cardio"])
}

fn muscle_gain_template(level: FitnessLevel) -> (Vec<PlannedExercise>, Vec<&'static str>) {
    let exercises = vec![
        PlannedExercise {
            sets: Some(4),
            reps: Some(by_level(level, 8, 12, 15)),
            rest_secs: Some(60),
            ..planned("Push-Ups")
        },
        PlannedExercise {
            sets: Some(3),
            reps: Some(10),
            weight: Some(ExerciseWeight {
                value: f64::from(by_level(level, 5, 10, 15)),
                unit: WeightUnit::Kg,
            }),
            rest_secs: Some(60),
            ..planned("Dumbbell Bicep Curls")
        },
        PlannedExercise {
            sets: Some(3),
            reps: Some(by_level(level, 10, 15, 20)),
            rest_secs: Some(90),
            ..planned("Squats")
        },
    ];

    (exercises, vec!["Chest", "Biceps", "Legs"])
}

fn endurance_template(_level: FitnessLevel) -> (Vec<PlannedExercise>, Vec<&'static str>) {
    // Duration-only template; the same prescription fits every tier.
    let exercises = vec![
        PlannedExercise {
            duration_secs: Some(300),
            rest_secs: Some(60),
            ..planned("Jogging in Place")
        },
        PlannedExercise {
            duration_secs: Some(180),
            rest_secs: Some(60),
            ..planned("Jumping Rope")
        },
        PlannedExercise {
            duration_secs: Some(120),
            rest_secs: Some(30),
            ..planned("High Knees")
        },
    ];

    (exercises, vec!["Cardio", "Full Body"])
}

fn general_fitness_template(level: FitnessLevel) -> (Vec<PlannedExercise>, Vec<&'static str>) {
    let exercises = vec![
        PlannedExercise {
            sets: Some(3),
            reps: Some(by_level(level, 8, 10, 12)),
            rest_secs: Some(45),
            ..planned("Push-Ups")
        },
        PlannedExercise {
            sets: Some(3),
            reps: Some(by_level(level, 10, 15, 20)),
            rest_secs: Some(30),
            ..planned("Sit-Ups")
        },
        PlannedExercise {
            sets: Some(3),
            reps: Some(by_level(level, 6, 8, 10)),
            rest_secs: Some(45),
            ..planned("Lunges")
        },
        PlannedExercise {
            duration_secs: Some(by_level(level, 30, 45, 60)),
            rest_secs: Some(30),
            ..planned("Plank")
        },
    ];

    (exercises, vec!["Chest", "Abs", "Legs", "Core"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LEVELS: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    const TEMPLATE_GOALS: [FitnessGoal; 4] = [
        FitnessGoal::WeightLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Endurance,
        FitnessGoal::GeneralFitness,
    ];

    fn plan(goal: FitnessGoal, level: FitnessLevel) -> WorkoutPlan {
        generate(goal, level, None, &[], Some(30), &[])
    }

    #[test]
    fn intensity_is_monotone_across_levels() {
        for goal in TEMPLATE_GOALS {
            for pair in LEVELS.windows(2) {
                let lower = plan(goal, pair[0]);
                let higher = plan(goal, pair[1]);

                assert_eq!(lower.exercises.len(), higher.exercises.len());
                for (lo, hi) in lower.exercises.iter().zip(higher.exercises.iter()) {
                    assert_eq!(lo.name, hi.name);
                    if let (Some(lo_reps), Some(hi_reps)) = (lo.reps, hi.reps) {
                        assert!(lo_reps <= hi_reps, "{}: reps decreased", lo.name);
                    }
                    if let (Some(lo_dur), Some(hi_dur)) = (lo.duration_secs, hi.duration_secs) {
                        assert!(lo_dur <= hi_dur, "{}: duration decreased", lo.name);
                    }
                }
            }
        }
    }

    #[test]
    fn exclusion_removes_exactly_the_named_exercise() {
        let full = plan(FitnessGoal::WeightLoss, FitnessLevel::Intermediate);
        let trimmed = generate(
            FitnessGoal::WeightLoss,
            FitnessLevel::Intermediate,
            None,
            &[],
            Some(30),
            &["Burpees".to_string()],
        );

        assert_eq!(trimmed.exercises.len(), full.exercises.len() - 1);
        assert!(trimmed.exercises.iter().all(|e| e.name != "Burpees"));

        let kept: Vec<_> = full
            .exercises
            .into_iter()
            .filter(|e| e.name != "Burpees")
            .collect();
        assert_eq!(trimmed.exercises, kept);
    }

    #[test]
    fn exclusion_of_unknown_name_is_a_no_op() {
        let full = plan(FitnessGoal::MuscleGain, FitnessLevel::Beginner);
        let same = generate(
            FitnessGoal::MuscleGain,
            FitnessLevel::Beginner,
            None,
            &[],
            Some(30),
            &["Deadlift".to_string()],
        );

        assert_eq!(full.exercises, same.exercises);
    }

    #[test]
    fn goals_without_a_template_fall_back_to_general_fitness() {
        let fallback = plan(FitnessGoal::Strength, FitnessLevel::Beginner);
        let general = plan(FitnessGoal::GeneralFitness, FitnessLevel::Beginner);

        assert_eq!(fallback.exercises, general.exercises);
        assert_eq!(fallback.target_muscle_groups, general.target_muscle_groups);
        // But the plan is still labelled with the requested goal.
        assert_eq!(fallback.name, "Strength Plan");
        assert_eq!(fallback.workout_type, WorkoutType::Custom);
    }

    #[test]
    fn goal_maps_to_workout_type() {
        assert_eq!(
            plan(FitnessGoal::WeightLoss, FitnessLevel::Beginner).workout_type,
            WorkoutType::Cardio
        );
        assert_eq!(
            plan(FitnessGoal::MuscleGain, FitnessLevel::Beginner).workout_type,
            WorkoutType::Strength
        );
        assert_eq!(
            plan(FitnessGoal::Endurance, FitnessLevel::Beginner).workout_type,
            WorkoutType::Hiit
        );
        assert_eq!(
            plan(FitnessGoal::Flexibility, FitnessLevel::Beginner).workout_type,
            WorkoutType::Flexibility
        );
    }

    #[test]
    fn plan_carries_template_muscle_groups_and_tags() {
        let plan = generate(
            FitnessGoal::WeightLoss,
            FitnessLevel::Advanced,
            Some(BodyType::Mesomorph),
            &["dumbbells".to_string()],
            Some(45),
            &[],
        );

        assert_eq!(plan.target_muscle_groups, vec!["Full Body", "Cardio"]);
        assert_eq!(plan.tags, vec!["Weight Loss", "Advanced", "Mesomorph"]);
        assert_eq!(plan.duration_minutes, Some(45));
        assert_eq!(plan.difficulty, FitnessLevel::Advanced);
    }

    #[test]
    fn advanced_weight_loss_prescription_matches_template() {
        let plan = plan(FitnessGoal::WeightLoss, FitnessLevel::Advanced);
        let jacks = &plan.exercises[0];

        assert_eq!(jacks.name, "Jumping Jacks");
        assert_eq!(jacks.sets, Some(3));
        assert_eq!(jacks.reps, Some(20));
        assert_eq!(jacks.duration_secs, Some(60));
        assert_eq!(jacks.rest_secs, Some(30));
    }
}
