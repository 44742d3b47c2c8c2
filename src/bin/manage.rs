//! Interactive schedule manager
//!
//! Adds and deletes medications and prints the schedule and dose log,
//! without running the reminder scheduler.
//!
//! Usage: cargo run --features prompt --bin medwatch-manage

use anyhow::Result;
use dialoguer::{Input, Select};
use log::info;

use medwatch::core::{describe_delete, render_log, render_schedule, Config};
use medwatch::features::schedule::{parse_times, ScheduleStore};
use medwatch::features::LogStore;

const ACTIONS: [&str; 5] = [
    "Add medication",
    "Delete medication",
    "Show schedule",
    "Show log",
    "Quit",
];

fn main() -> Result<()> {
    let config = Config::from_env()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let schedule = ScheduleStore::new(config.schedule_path.clone());
    let log = LogStore::new(config.log_path.clone());
    info!(
        "Managing {} and {}",
        config.schedule_path.display(),
        config.log_path.display()
    );

    println!("Medication Schedule Manager");
    println!("===========================\n");
    print!("{}", render_schedule(&schedule.load()));

    loop {
        let choice = Select::new()
            .with_prompt("\nWhat would you like to do?")
            .items(&ACTIONS)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(0) => add_medication(&schedule)?,
            Some(1) => delete_medication(&schedule)?,
            Some(2) => print!("\n{}", render_schedule(&schedule.load())),
            Some(3) => print!("\n{}", render_log(&log.load())),
            _ => break,
        }
    }

    Ok(())
}

/// Ask for a value; empty input means cancel
fn ask(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let value = value.trim().to_string();
    Ok((!value.is_empty()).then_some(value))
}

fn add_medication(schedule: &ScheduleStore) -> Result<()> {
    let Some(name) = ask("Enter medication name")? else {
        return Ok(());
    };
    let Some(dosage) = ask(&format!("Enter dosage for {name}"))? else {
        return Ok(());
    };
    let Some(raw_times) = ask("Enter times (comma-separated, e.g., 08:00, 14:00)")? else {
        return Ok(());
    };

    match parse_times(&raw_times).and_then(|times| schedule.add(&name, &dosage, times)) {
        Ok(_) => {
            println!("{name} has been added successfully!\n");
            print!("{}", render_schedule(&schedule.load()));
        }
        Err(e) => eprintln!("Not added: {e}"),
    }
    Ok(())
}

fn delete_medication(schedule: &ScheduleStore) -> Result<()> {
    let names = schedule.names();
    if names.is_empty() {
        println!("No medications to delete.");
        return Ok(());
    }

    let prompt = format!("Enter medication name to delete: {}", names.join(", "));
    let Some(name) = ask(&prompt)? else {
        return Ok(());
    };

    let outcome = schedule.delete(&name)?;
    println!("{}\n", describe_delete(&name, outcome));
    print!("{}", render_schedule(&schedule.load()));
    Ok(())
}
