use super::{FieldValues, PlayerRecord};

/// Separator used when flattening the position-detail selection.
const DETAIL_SEPARATOR: &str = ", ";

/// Build a record from one submitted form.
///
/// Pure: appending the result to a store is up to the caller.
pub fn collect(values: FieldValues) -> PlayerRecord {
    let position_detail = values
        .position_detail
        .iter()
        .map(|detail| detail.as_str())
        .collect::<Vec<_>>()
        .join(DETAIL_SEPARATOR);

    PlayerRecord {
        name: values.name,
        jersey_number: values.jersey_number,
        position: values.position,
        position_detail,
        age: values.age,
        date_of_birth: values.date_of_birth,
        previous_wage: values.previous_wage,
        transfer_listed: values.transfer_listed,
        transfer_value: values.transfer_value,
        status: values.status,
    }
}
