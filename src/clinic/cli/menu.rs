//! # Interactive Menu
//!
//! The numbered menu front desk staff use all day. It reads one line per
//! prompt, turns it into typed values and hands those to the API. A number
//! that does not parse is reported here and the API is never called.
//!
//! When booking, each id is checked as soon as it is entered, so an unknown
//! patient is reported before the doctor is asked for.
//!
//! Errors from the API are shown and the loop carries on; only a failure to
//! write to the terminal ends it. End of input behaves like choosing `0`.

use super::render::{
    render_appointments, render_doctors, render_error, render_messages, render_patients,
};
use clinic::api::ClinicApi;
use clinic::commands::CmdResult;
use clinic::error::{ClinicError, Result};
use clinic::model::{BookingRequest, NewDoctor, NewPatient};
use clinic::store::StorageBackend;
use std::io::{BufRead, Write};

const RULE: &str = "========================================";

enum Step {
    Continue,
    Exit,
}

pub struct Menu<'a, B: StorageBackend, R, W> {
    api: &'a ClinicApi<B>,
    input: R,
    out: W,
}

impl<'a, B: StorageBackend, R: BufRead, W: Write> Menu<'a, B, R, W> {
    pub fn new(api: &'a ClinicApi<B>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_main_menu()?;
            let Some(choice) = self.prompt("Enter choice: ")? else {
                writeln!(self.out)?;
                break;
            };

            let step = match choice.as_str() {
                "1" => self.add_patient()?,
                "2" => self.show_list(self.api.list_patients(), Listing::Patients)?,
                "3" => self.add_doctor()?,
                "4" => self.show_list(self.api.list_doctors(), Listing::Doctors)?,
                "5" => self.book_appointment()?,
                "6" => self.show_list(self.api.list_appointments(), Listing::Appointments)?,
                "7" => self.cancel_appointment()?,
                "0" => Step::Exit,
                _ => {
                    writeln!(
                        self.out,
                        "Invalid choice. Please enter a valid option (0-7)."
                    )?;
                    Step::Continue
                }
            };
            if let Step::Exit = step {
                break;
            }
            writeln!(self.out)?;
        }
        writeln!(self.out, "Exiting system. Goodbye.")?;
        Ok(())
    }

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "   HOSPITAL APPOINTMENT MANAGEMENT")?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "1. Add Patient")?;
        writeln!(self.out, "2. List Patients")?;
        writeln!(self.out, "3. Add Doctor")?;
        writeln!(self.out, "4. List Doctors")?;
        writeln!(self.out, "5. Book Appointment")?;
        writeln!(self.out, "6. List Appointments")?;
        writeln!(self.out, "7. Cancel Appointment")?;
        writeln!(self.out, "0. Exit")?;
        writeln!(self.out, "{}", RULE)?;
        Ok(())
    }

    /// Prompt and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for a number. `Err(InvalidInput)` if it does not parse.
    fn prompt_number(&mut self, label: &str, what: &str) -> Result<Option<Result<u32>>> {
        Ok(self.prompt(label)?.map(|raw| {
            raw.parse::<u32>()
                .map_err(|_| ClinicError::InvalidInput(format!("{} must be a number: {:?}", what, raw)))
        }))
    }

    fn add_patient(&mut self) -> Result<Step> {
        let Some(name) = self.prompt("Enter patient name: ")? else {
            return Ok(Step::Exit);
        };
        let Some(age) = self.prompt_number("Enter age: ", "age")? else {
            return Ok(Step::Exit);
        };
        let age = match age {
            Ok(age) => age,
            Err(e) => return self.reject(e, "Patient not added."),
        };
        let Some(gender) = self.prompt("Enter gender: ")? else {
            return Ok(Step::Exit);
        };
        let Some(phone) = self.prompt("Enter phone number: ")? else {
            return Ok(Step::Exit);
        };

        let result = self.api.add_patient(NewPatient {
            name,
            age,
            gender,
            phone,
        });
        self.show(result)
    }

    fn add_doctor(&mut self) -> Result<Step> {
        let Some(name) = self.prompt("Enter doctor name: ")? else {
            return Ok(Step::Exit);
        };
        let Some(specialization) = self.prompt("Enter specialization: ")? else {
            return Ok(Step::Exit);
        };

        let result = self.api.add_doctor(NewDoctor {
            name,
            specialization,
        });
        self.show(result)
    }

    fn book_appointment(&mut self) -> Result<Step> {
        let Some(patient_id) = self.prompt_number("Enter patient ID: ", "patient ID")? else {
            return Ok(Step::Exit);
        };
        let patient_id = match patient_id {
            Ok(id) => id,
            Err(e) => return self.reject(e, "Appointment not booked."),
        };
        let found = self.api.find_patient(patient_id);
        if !self.exists(found, ClinicError::UnknownPatient(patient_id))? {
            return Ok(Step::Continue);
        }
        let Some(doctor_id) = self.prompt_number("Enter doctor ID: ", "doctor ID")? else {
            return Ok(Step::Exit);
        };
        let doctor_id = match doctor_id {
            Ok(id) => id,
            Err(e) => return self.reject(e, "Appointment not booked."),
        };
        let found = self.api.find_doctor(doctor_id);
        if !self.exists(found, ClinicError::UnknownDoctor(doctor_id))? {
            return Ok(Step::Continue);
        }
        let Some(date) = self.prompt("Enter appointment date (e.g., 2025-11-24): ")? else {
            return Ok(Step::Exit);
        };
        let Some(time_slot) = self.prompt("Enter time slot (e.g., 10:00-10:15): ")? else {
            return Ok(Step::Exit);
        };

        let result = self.api.book_appointment(BookingRequest {
            patient_id,
            doctor_id,
            date,
            time_slot,
        });
        self.show(result)
    }

    fn cancel_appointment(&mut self) -> Result<Step> {
        let Some(id) = self.prompt_number("Enter appointment ID to cancel: ", "appointment ID")?
        else {
            return Ok(Step::Exit);
        };
        let id = match id {
            Ok(id) => id,
            Err(e) => return self.reject(e, "Nothing cancelled."),
        };

        let result = self.api.cancel_appointment(id);
        self.show(result)
    }

    /// Shows `missing` (or the lookup error) unless the record was found.
    fn exists<T>(&mut self, found: Result<Option<T>>, missing: ClinicError) -> Result<bool> {
        match found {
            Ok(Some(_)) => Ok(true),
            Ok(None) => {
                write!(self.out, "{}", render_error(&missing))?;
                Ok(false)
            }
            Err(e) => {
                write!(self.out, "{}", render_error(&e))?;
                Ok(false)
            }
        }
    }

    fn reject(&mut self, err: ClinicError, consequence: &str) -> Result<Step> {
        write!(self.out, "{}", render_error(&err))?;
        writeln!(self.out, "{}", consequence)?;
        Ok(Step::Continue)
    }

    fn show(&mut self, result: Result<CmdResult>) -> Result<Step> {
        match result {
            Ok(result) => write!(self.out, "{}", render_messages(&result.messages))?,
            Err(e) => write!(self.out, "{}", render_error(&e))?,
        }
        Ok(Step::Continue)
    }

    fn show_list(&mut self, result: Result<CmdResult>, listing: Listing) -> Result<Step> {
        match result {
            Ok(result) => {
                let text = match listing {
                    Listing::Patients => render_patients(&result.patients),
                    Listing::Doctors => render_doctors(&result.doctors),
                    Listing::Appointments => render_appointments(&result.appointments),
                };
                write!(self.out, "{}", text)?;
                write!(self.out, "{}", render_messages(&result.messages))?;
            }
            Err(e) => write!(self.out, "{}", render_error(&e))?,
        }
        Ok(Step::Continue)
    }
}

enum Listing {
    Patients,
    Doctors,
    Appointments,
}
