// ABOUTME: Per-goal workout routine tables with warmup, main, and cooldown blocks
// ABOUTME: Static prescription data consumed by the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! Workout Routine Library
//!
//! A fixed routine per fitness goal. These are data tables; building the
//! owned payload type for display or serialization goes through
//! [`routine_for_goal`].

use crate::models::{FitnessGoal, WorkoutExercise, WorkoutRoutine};

/// A single exercise prescription in the static tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseSpec {
    /// Exercise name
    pub name: &'static str,
    /// Number of sets
    pub sets: u32,
    /// Repetition scheme
    pub reps: &'static str,
    /// Rest between sets
    pub rest: &'static str,
}

/// A goal routine in the static tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutineSpec {
    /// Warmup block
    pub warmup: &'static [ExerciseSpec],
    /// Main working block
    pub main: &'static [ExerciseSpec],
    /// Cooldown block
    pub cooldown: &'static [ExerciseSpec],
}

const fn exercise(
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest: &'static str,
) -> ExerciseSpec {
    ExerciseSpec {
        name,
        sets,
        reps,
        rest,
    }
}

const SIX_PACK: RoutineSpec = RoutineSpec {
    warmup: &[
        exercise("Jumping Jacks", 2, "30 sec", "15 sec"),
        exercise("Cat-Cow Stretch", 1, "10 reps", "0 sec"),
    ],
    main: &[
        exercise("Bicycle Crunches", 4, "20 reps", "30 sec"),
        exercise("Hanging Leg Raises", 3, "12-15 reps", "45 sec"),
        exercise("Plank", 3, "60 sec", "45 sec"),
        exercise("Russian Twists", 3, "30 reps", "30 sec"),
    ],
    cooldown: &[
        exercise("Cobra Stretch", 1, "30 sec", "0 sec"),
        exercise("Child's Pose", 1, "30 sec", "0 sec"),
    ],
};

const FAT_LOSS: RoutineSpec = RoutineSpec {
    warmup: &[exercise("Light Jog", 1, "5 min", "0 sec")],
    main: &[
        exercise("Burpees", 4, "15 reps", "60 sec"),
        exercise("Bodyweight Squats", 4, "20 reps", "45 sec"),
        exercise("Mountain Climbers", 3, "45 sec", "30 sec"),
        exercise("Pushups", 3, "Max effort", "60 sec"),
    ],
    cooldown: &[exercise("Full Body Static Stretch", 1, "5 min", "0 sec")],
};

const MUSCLE_GAIN: RoutineSpec = RoutineSpec {
    warmup: &[exercise("Dynamic Shoulder Rotations", 2, "15 reps", "15 sec")],
    main: &[
        exercise("Barbell Bench Press", 4, "8-12 reps", "90 sec"),
        exercise("Barbell Squat", 4, "8-12 reps", "90 sec"),
        exercise("Deadlift", 3, "5-8 reps", "120 sec"),
        exercise("Pull-ups", 3, "To failure", "90 sec"),
    ],
    cooldown: &[exercise("Foam Rolling", 1, "5 min", "0 sec")],
};

const STRENGTH: RoutineSpec = RoutineSpec {
    warmup: &[exercise("Joint Mobility Drill", 1, "5 min", "0 sec")],
    main: &[
        exercise("Heavy Bench Press", 5, "5 reps", "180 sec"),
        exercise("Heavy Squat", 5, "5 reps", "180 sec"),
        exercise("Overhead Press", 5, "5 reps", "120 sec"),
    ],
    cooldown: &[exercise("Deep Breathing", 1, "3 min", "0 sec")],
};

const GENERAL_FITNESS: RoutineSpec = RoutineSpec {
    warmup: &[exercise("Brisk Walk", 1, "10 min", "0 sec")],
    main: &[
        exercise("Swimming or Cycling", 1, "30 min", "0 sec"),
        exercise("Bodyweight Lunges", 3, "12 reps", "30 sec"),
        exercise("Incline Pushups", 3, "15 reps", "30 sec"),
    ],
    cooldown: &[exercise("Gentle Yoga Stretches", 1, "10 min", "0 sec")],
};

/// The static routine table for a goal
#[must_use]
pub const fn routine_spec_for_goal(goal: FitnessGoal) -> &'static RoutineSpec {
    match goal {
        FitnessGoal::SixPack => &SIX_PACK,
        FitnessGoal::FatLoss => &FAT_LOSS,
        FitnessGoal::MuscleGain => &MUSCLE_GAIN,
        FitnessGoal::Strength => &STRENGTH,
        FitnessGoal::GeneralFitness => &GENERAL_FITNESS,
    }
}

/// Build the owned routine payload for a goal
#[must_use]
pub fn routine_for_goal(goal: FitnessGoal) -> WorkoutRoutine {
    let spec = routine_spec_for_goal(goal);
    WorkoutRoutine {
        goal,
        warmup: block(spec.warmup),
        main: block(spec.main),
        cooldown: block(spec.cooldown),
    }
}

fn block(specs: &[ExerciseSpec]) -> Vec<WorkoutExercise> {
    specs
        .iter()
        .map(|spec| WorkoutExercise {
            name: spec.name.to_owned(),
            sets: spec.sets,
            reps: spec.reps.to_owned(),
            rest: spec.rest.to_owned(),
            description: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_goal_has_a_complete_routine() {
        for goal in FitnessGoal::ALL {
            let routine = routine_for_goal(goal);
            assert_eq!(routine.goal, goal);
            assert!(!routine.warmup.is_empty(), "{goal:?} missing warmup");
            assert!(!routine.main.is_empty(), "{goal:?} missing main block");
            assert!(!routine.cooldown.is_empty(), "{goal:?} missing cooldown");
        }
    }

    #[test]
    fn test_strength_routine_uses_low_rep_heavy_sets() {
        let routine = routine_for_goal(FitnessGoal::Strength);
        assert!(routine.main.iter().all(|e| e.sets == 5));
        assert_eq!(routine.main[0].reps, "5 reps");
    }

    #[test]
    fn test_six_pack_main_block_is_core_focused() {
        let routine = routine_for_goal(FitnessGoal::SixPack);
        let names: Vec<_> = routine.main.iter().map(|e| e.name.as_str()).collect();
        assert!(names.contains(&"Plank"));
        assert!(names.contains(&"Bicycle Crunches"));
    }
}
