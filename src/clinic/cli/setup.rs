use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with the commit hash when built from git.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} ({})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "clinic",
    bin_name = "clinic",
    version = get_version(),
    after_help = "Run without a command to open the interactive menu."
)]
#[command(about = "Patients, doctors and appointments in plain text files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the record files (default: current directory)
    #[arg(long, global = true, env = "CLINIC_DATA_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu
    Menu,

    /// Register or list patients
    #[command(subcommand)]
    Patient(PatientCommands),

    /// Register or list doctors
    #[command(subcommand)]
    Doctor(DoctorCommands),

    /// Book, list or cancel appointments
    #[command(subcommand)]
    #[command(alias = "appt")]
    Appointment(AppointmentCommands),
}

#[derive(Subcommand, Debug)]
pub enum PatientCommands {
    /// Register a patient
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u32,

        #[arg(long)]
        gender: String,

        #[arg(long)]
        phone: String,
    },

    /// List patients
    #[command(alias = "ls")]
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DoctorCommands {
    /// Register a doctor
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        specialization: String,
    },

    /// List doctors
    #[command(alias = "ls")]
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AppointmentCommands {
    /// Book a doctor's time slot for a patient
    Book {
        /// Patient ID
        #[arg(long)]
        patient: u32,

        /// Doctor ID
        #[arg(long)]
        doctor: u32,

        /// Date, e.g. 2025-11-24
        #[arg(long)]
        date: String,

        /// Time slot, e.g. 10:00-10:15
        #[arg(long)]
        slot: String,
    },

    /// List appointments with patient and doctor names
    #[command(alias = "ls")]
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Cancel a booked appointment
    Cancel {
        /// Appointment ID
        id: u32,
    },
}
