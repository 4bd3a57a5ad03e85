use serde::Serialize;

use crate::record::{
    ExportSettings, Position, PositionDetail, TransferStatus, AGE_MAX, AGE_MIN, MONEY_MAX,
};

/// Everything a host UI needs to draw the player form.
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub title: &'static str,
    pub fields: Vec<FieldSchema>,
    pub submit_label: &'static str,
    pub download_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
    /// Key used in the submitted JSON body.
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Key of a toggle that must be on for this field to be editable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_by: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Text {
        default: &'static str,
    },
    Select {
        options: Vec<&'static str>,
        default: &'static str,
    },
    MultiSelect {
        options: Vec<&'static str>,
    },
    Number {
        min: i64,
        max: i64,
        step: i64,
        default: i64,
    },
    Date,
    Slider {
        min: i64,
        max: i64,
        default: i64,
    },
    Toggle {
        default: bool,
    },
    Radio {
        options: Vec<&'static str>,
        default: &'static str,
    },
}

fn field(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSchema {
    FieldSchema {
        key,
        label,
        kind,
        enabled_by: None,
    }
}

pub fn form_schema(export: &ExportSettings) -> FormSchema {
    let positions = Position::ALL.iter().map(|p| p.as_str()).collect();
    let details = PositionDetail::ALL.iter().map(|d| d.as_str()).collect();
    let statuses = TransferStatus::ALL.iter().map(|s| s.as_str()).collect();

    FormSchema {
        title: "Fill player details below",
        fields: vec![
            field("name", "Enter Player Name", FieldKind::Text { default: "" }),
            field(
                "jerseyNumber",
                "Enter Player Jersey Number",
                FieldKind::Text { default: "" },
            ),
            field(
                "position",
                "Select Position",
                FieldKind::Select {
                    options: positions,
                    default: Position::Attacker.as_str(),
                },
            ),
            field(
                "positionDetail",
                "Select Position Detail",
                FieldKind::MultiSelect { options: details },
            ),
            field(
                "age",
                "Age",
                FieldKind::Number {
                    min: AGE_MIN.into(),
                    max: AGE_MAX.into(),
                    step: 1,
                    default: AGE_MIN.into(),
                },
            ),
            field("dateOfBirth", "Enter DoB", FieldKind::Date),
            field(
                "previousWage",
                "Previous Club Wage (In Million €)",
                FieldKind::Slider {
                    min: 0,
                    max: MONEY_MAX.into(),
                    default: 0,
                },
            ),
            field(
                "transferListed",
                "Transfer Listed",
                FieldKind::Toggle { default: false },
            ),
            FieldSchema {
                enabled_by: Some("transferListed"),
                ..field(
                    "transferValue",
                    "Enter Transfer Market Value (In Million €)",
                    FieldKind::Slider {
                        min: 0,
                        max: MONEY_MAX.into(),
                        default: 0,
                    },
                )
            },
            field(
                "status",
                "Status",
                FieldKind::Radio {
                    options: statuses,
                    default: TransferStatus::AcceptedDeal.as_str(),
                },
            ),
        ],
        submit_label: "Generate Player Data",
        download_label: export.label.clone(),
    }
}
