//! # Record Codec
//!
//! Each record is one line of `|`-separated fields. Integer fields are plain
//! decimal; string fields are escaped so they can never contain a raw
//! separator or line break:
//!
//! - `\` is stored as `\\`
//! - `|` is stored as `\p`
//! - LF is stored as `\n`
//! - CR is stored as `\r`
//!
//! Layouts:
//!
//! ```text
//! patient:      id|name|age|gender|phone
//! doctor:       id|name|specialization
//! appointment:  id|patientId|doctorId|date|timeSlot|status
//! ```
//!
//! Extra trailing fields are ignored. Too few fields, a non-numeric integer
//! field, a zero id or an unknown status make the line malformed.

use crate::model::{Appointment, AppointmentStatus, Doctor, Patient};
use thiserror::Error;

pub const DELIMITER: char = '|';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },

    #[error("field `{field}` is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("id must be positive")]
    ZeroId,

    #[error("unknown status {0:?}")]
    UnknownStatus(String),
}

/// A record that can live in a collection store.
pub trait Record: Sized + Clone {
    /// Number of fields on a line.
    const ARITY: usize;

    fn id(&self) -> u32;

    fn encode(&self) -> String;

    fn decode(line: &str) -> Result<Self, DecodeError>;
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '|' => out.push_str("\\p"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Reverses [`escape`] in a single pass, so an escaped backslash followed by
/// `n` is never read back as a newline. Unknown escapes are kept verbatim.
pub fn unescape(stored: &str) -> String {
    let mut out = String::with_capacity(stored.len());
    let mut chars = stored.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('p') => out.push('|'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn split_fields<const N: usize>(line: &str) -> Result<[&str; N], DecodeError> {
    let parts: Vec<&str> = line.split(DELIMITER).collect();
    if parts.len() < N {
        return Err(DecodeError::MissingFields {
            expected: N,
            found: parts.len(),
        });
    }
    let mut fields = [""; N];
    fields.copy_from_slice(&parts[..N]);
    Ok(fields)
}

fn parse_u32(field: &'static str, value: &str) -> Result<u32, DecodeError> {
    value.trim().parse().map_err(|_| DecodeError::NotANumber {
        field,
        value: value.to_string(),
    })
}

fn parse_id(field: &'static str, value: &str) -> Result<u32, DecodeError> {
    match parse_u32(field, value)? {
        0 => Err(DecodeError::ZeroId),
        id => Ok(id),
    }
}

impl Record for Patient {
    const ARITY: usize = 5;

    fn id(&self) -> u32 {
        self.id
    }

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.id,
            escape(&self.name),
            self.age,
            escape(&self.gender),
            escape(&self.phone)
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let [id, name, age, gender, phone] = split_fields::<5>(line)?;
        Ok(Self {
            id: parse_id("id", id)?,
            name: unescape(name),
            age: parse_u32("age", age)?,
            gender: unescape(gender),
            phone: unescape(phone),
        })
    }
}

impl Record for Doctor {
    const ARITY: usize = 3;

    fn id(&self) -> u32 {
        self.id
    }

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}",
            self.id,
            escape(&self.name),
            escape(&self.specialization)
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let [id, name, specialization] = split_fields::<3>(line)?;
        Ok(Self {
            id: parse_id("id", id)?,
            name: unescape(name),
            specialization: unescape(specialization),
        })
    }
}

impl Record for Appointment {
    const ARITY: usize = 6;

    fn id(&self) -> u32 {
        self.id
    }

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.id,
            self.patient_id,
            self.doctor_id,
            escape(&self.date),
            escape(&self.time_slot),
            self.status
        )
    }

    fn decode(line: &str) -> Result<Self, DecodeError> {
        let [id, patient_id, doctor_id, date, time_slot, status] =
            split_fields::<6>(line)?;
        let status_raw = unescape(status);
        let status = AppointmentStatus::parse(&status_raw)
            .ok_or(DecodeError::UnknownStatus(status_raw))?;
        Ok(Self {
            id: parse_id("id", id)?,
            patient_id: parse_id("patientId", patient_id)?,
            doctor_id: parse_id("doctorId", doctor_id)?,
            date: unescape(date),
            time_slot: unescape(time_slot),
            status,
        })
    }
}
