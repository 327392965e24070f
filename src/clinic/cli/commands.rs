use super::menu::Menu;
use super::render::{render_appointments, render_doctors, render_messages, render_patients};
use super::setup::{AppointmentCommands, Cli, Commands, DoctorCommands, PatientCommands};
use clap::Parser;
use clinic::commands::CmdResult;
use clinic::error::Result;
use clinic::init::{initialize, ClinicContext};
use clinic::model::{BookingRequest, NewDoctor, NewPatient};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir);
    debug!(data_dir = %data_dir.display(), "starting");
    let ctx = initialize(&data_dir)?;

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&ctx),
        Some(Commands::Patient(cmd)) => match cmd {
            PatientCommands::Add {
                name,
                age,
                gender,
                phone,
            } => handle_mutation(ctx.api.add_patient(NewPatient {
                name,
                age,
                gender,
                phone,
            })?),
            PatientCommands::List { json } => {
                let result = ctx.api.list_patients()?;
                if json {
                    print_json(&result.patients)
                } else {
                    print!("{}", render_patients(&result.patients));
                    Ok(())
                }
            }
        },
        Some(Commands::Doctor(cmd)) => match cmd {
            DoctorCommands::Add {
                name,
                specialization,
            } => handle_mutation(ctx.api.add_doctor(NewDoctor {
                name,
                specialization,
            })?),
            DoctorCommands::List { json } => {
                let result = ctx.api.list_doctors()?;
                if json {
                    print_json(&result.doctors)
                } else {
                    print!("{}", render_doctors(&result.doctors));
                    Ok(())
                }
            }
        },
        Some(Commands::Appointment(cmd)) => match cmd {
            AppointmentCommands::Book {
                patient,
                doctor,
                date,
                slot,
            } => handle_mutation(ctx.api.book_appointment(BookingRequest {
                patient_id: patient,
                doctor_id: doctor,
                date,
                time_slot: slot,
            })?),
            AppointmentCommands::List { json } => {
                let result = ctx.api.list_appointments()?;
                if json {
                    print_json(&result.appointments)
                } else {
                    print!("{}", render_appointments(&result.appointments));
                    Ok(())
                }
            }
            AppointmentCommands::Cancel { id } => {
                handle_mutation(ctx.api.cancel_appointment(id)?)
            }
        },
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn resolve_data_dir(arg: Option<PathBuf>) -> PathBuf {
    arg.or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn handle_menu(ctx: &ClinicContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&ctx.api, stdin.lock(), stdout.lock()).run()
}

fn handle_mutation(result: CmdResult) -> Result<()> {
    print!("{}", render_messages(&result.messages));
    io::stdout().flush()?;
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
