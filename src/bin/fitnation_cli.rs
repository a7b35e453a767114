// ABOUTME: FitNation CLI - derive health metrics or a full plan from profile flags
// ABOUTME: Prints JSON for machines or a readable report for humans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FitNation

//! FitNation command-line tool
//!
//! Usage:
//! ```bash
//! # Derived metrics only
//! fitnation-cli metrics --name Alex --age 30 --gender male --height-cm 180 \
//!     --weight-kg 80 --country USA --activity moderate --goal fat-loss
//!
//! # Full plan (metrics, workout routine, diet plan, summary) as JSON
//! fitnation-cli plan --name Alex --age 30 --gender male --height-cm 180 \
//!     --weight-kg 80 --country USA --activity moderate --goal fat-loss --json
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use fitnation::llm::LocalPlanGenerator;
use fitnation::logging::{init_logging, LoggingConfig};
use fitnation::models::{ActivityLevel, DietPreference, FitnessGoal, Gender, UserProfile};
use fitnation::planner::FitnessPlanner;
use fitnation::store::InMemoryProfileStore;

#[derive(Parser)]
#[command(
    name = "fitnation-cli",
    about = "FitNation planning engine CLI",
    long_about = "Derives health metrics (BMI, BMR, TDEE, calorie target, macros) and \
                  assembles diet and workout plans from a biometric profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive health metrics for a profile
    Metrics(ProfileArgs),
    /// Assemble the full plan: metrics, workout, diet, summary
    Plan(ProfileArgs),
}

#[derive(Args)]
struct ProfileArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// Biological gender: male or female
    #[arg(long)]
    gender: String,

    /// Height in centimeters
    #[arg(long)]
    height_cm: f64,

    /// Body weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// Country of residence
    #[arg(long)]
    country: String,

    /// Activity level: sedentary, light, moderate, very-active, extra-active
    #[arg(long, default_value = "sedentary")]
    activity: String,

    /// Fitness goal: six-pack, fat-loss, muscle-gain, strength, general-fitness
    #[arg(long, default_value = "general-fitness")]
    goal: String,

    /// Diet preference: standard, vegetarian, high-protein, low-carb
    #[arg(long, default_value = "standard")]
    diet: String,

    /// Emit JSON instead of a readable report
    #[arg(long)]
    json: bool,
}

impl ProfileArgs {
    fn to_profile(&self) -> Result<UserProfile> {
        let gender = match self.gender.to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            other => anyhow::bail!("unknown gender '{other}' (expected male or female)"),
        };
        Ok(UserProfile {
            name: self.name.clone(),
            age: self.age,
            gender,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            country: self.country.clone(),
            activity_level: self.activity.parse::<ActivityLevel>()?,
            goal: self.goal.parse::<FitnessGoal>()?,
            diet_preference: self.diet.parse::<DietPreference>()?,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env())?;

    let cli = Cli::parse();
    let planner = FitnessPlanner::new(InMemoryProfileStore::new(), LocalPlanGenerator::new());

    match cli.command {
        Command::Metrics(args) => {
            let profile = args.to_profile()?;
            debug!(name = %profile.name, "deriving metrics");
            let metrics = planner.update_profile(profile).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&metrics)?);
            } else {
                print_metrics(&metrics);
            }
        }
        Command::Plan(args) => {
            let profile = args.to_profile()?;
            debug!(name = %profile.name, "assembling full plan");
            let bundle = planner.full_plan(profile).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&bundle)?);
            } else {
                print_metrics(&bundle.metrics);
                print_bundle(&bundle);
            }
        }
    }

    Ok(())
}

fn print_metrics(metrics: &fitnation::models::HealthMetrics) {
    println!("BMI:            {} ({})", metrics.bmi, metrics.bmi_category);
    println!("BMR:            {} kcal/day", metrics.bmr);
    println!("TDEE:           {} kcal/day", metrics.tdee);
    println!("Daily calories: {} kcal/day", metrics.daily_calories);
    println!(
        "Macros:         P {}g / C {}g / F {}g",
        metrics.macros.protein_g, metrics.macros.carbs_g, metrics.macros.fats_g
    );
}

fn print_bundle(bundle: &fitnation::planner::PlanBundle) {
    println!();
    println!("Workout ({}):", bundle.workout.goal.label());
    for exercise in bundle
        .workout
        .warmup
        .iter()
        .chain(&bundle.workout.main)
        .chain(&bundle.workout.cooldown)
    {
        println!(
            "  {} - {} x {}, rest {}",
            exercise.name, exercise.sets, exercise.reps, exercise.rest
        );
    }

    println!();
    println!("Diet plan:");
    for (meal, items) in bundle.diet.meals() {
        println!("  {meal}:");
        for item in items {
            println!(
                "    {} ({}) - {} kcal, P {}g / C {}g / F {}g",
                item.name, item.serving, item.calories, item.protein, item.carbs, item.fats
            );
        }
    }

    println!();
    println!("{}", bundle.summary);
}
