//! Input surface: raw form submissions and their validation

mod schema;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::export::DATE_FORMAT;
use crate::record::{
    FieldValues, Position, PositionDetail, TransferStatus, UnknownChoice, AGE_MAX, AGE_MIN,
    MONEY_MAX,
};

pub use schema::{form_schema, FieldKind, FieldSchema, FormSchema};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error(transparent)]
    UnknownChoice(#[from] UnknownChoice),
    #[error("{field} lists {value} more than once")]
    DuplicateChoice { field: &'static str, value: String },
    #[error("dateOfBirth must be YYYY-MM-DD, got {value:?}")]
    InvalidDate { value: String },
}

/// A form submission as it arrives over the wire.
///
/// Missing fields take the form defaults. Numbers are wide so out-of-range
/// input is reported instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerForm {
    pub name: String,
    pub jersey_number: String,
    pub position: String,
    pub position_detail: Vec<String>,
    pub age: i64,
    pub date_of_birth: Option<String>,
    pub previous_wage: i64,
    pub transfer_listed: bool,
    pub transfer_value: i64,
    pub status: String,
}

impl Default for PlayerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            jersey_number: String::new(),
            position: Position::Attacker.as_str().to_string(),
            position_detail: Vec::new(),
            age: AGE_MIN.into(),
            date_of_birth: None,
            previous_wage: 0,
            transfer_listed: false,
            transfer_value: 0,
            status: TransferStatus::AcceptedDeal.as_str().to_string(),
        }
    }
}

impl PlayerForm {
    /// Check every bound and vocabulary, producing collector input.
    ///
    /// The market value only counts while the player is transfer listed;
    /// otherwise it is ignored and recorded as 0.
    pub fn validate(&self) -> Result<FieldValues, FormError> {
        let position: Position = self.position.parse()?;
        let position_detail = parse_details(&self.position_detail)?;
        let age = bounded("age", self.age, AGE_MIN.into(), AGE_MAX.into())?;
        let date_of_birth = parse_date(self.date_of_birth.as_deref())?;
        let previous_wage = bounded("previousWage", self.previous_wage, 0, MONEY_MAX.into())?;
        let transfer_value = if self.transfer_listed {
            bounded("transferValue", self.transfer_value, 0, MONEY_MAX.into())?
        } else {
            0
        };
        let status: TransferStatus = self.status.parse()?;

        Ok(FieldValues {
            name: self.name.clone(),
            jersey_number: self.jersey_number.clone(),
            position,
            position_detail,
            age,
            date_of_birth,
            previous_wage,
            transfer_listed: self.transfer_listed,
            transfer_value,
            status,
        })
    }
}

fn bounded<T>(field: &'static str, value: i64, min: i64, max: i64) -> Result<T, FormError>
where
    T: TryFrom<i64>,
{
    let out_of_range = || FormError::OutOfRange {
        field,
        value,
        min,
        max,
    };
    if !(min..=max).contains(&value) {
        return Err(out_of_range());
    }
    T::try_from(value).map_err(|_| out_of_range())
}

fn parse_details(tokens: &[String]) -> Result<Vec<PositionDetail>, FormError> {
    let mut details = Vec::with_capacity(tokens.len());
    for token in tokens {
        let detail: PositionDetail = token.parse()?;
        if details.contains(&detail) {
            return Err(FormError::DuplicateChoice {
                field: "positionDetail",
                value: detail.as_str().to_string(),
            });
        }
        details.push(detail);
    }
    Ok(details)
}

fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, FormError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .ok()
            .filter(|date| (0..=9999).contains(&date.year()))
            .filter(|date| date.format(DATE_FORMAT).to_string() == value)
            .map(Some)
            .ok_or_else(|| FormError::InvalidDate {
                value: value.to_string(),
            }),
    }
}
