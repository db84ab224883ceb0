use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Raw roster row as exported by enrollment camps. Every column is
/// optional at this layer; the importer decides what a row must carry.
#[derive(Debug, Deserialize)]
pub(crate) struct RosterRow {
    #[serde(
        rename = "Citizen ID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) citizen_id: Option<String>,
    #[serde(rename = "Age", default, deserialize_with = "empty_string_as_none")]
    pub(crate) age: Option<String>,
    #[serde(
        rename = "Annual Income",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) annual_income: Option<String>,
    #[serde(
        rename = "Occupation",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) occupation: Option<String>,
    #[serde(
        rename = "Education",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) education: Option<String>,
    #[serde(rename = "Gender", default, deserialize_with = "empty_string_as_none")]
    pub(crate) gender: Option<String>,
    #[serde(rename = "Area", default, deserialize_with = "empty_string_as_none")]
    pub(crate) area: Option<String>,
    #[serde(rename = "State", default, deserialize_with = "empty_string_as_none")]
    pub(crate) state: Option<String>,
    #[serde(
        rename = "Family Size",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) family_size: Option<String>,
    #[serde(
        rename = "Health Insurance",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) health_insurance: Option<String>,
    #[serde(rename = "Pension", default, deserialize_with = "empty_string_as_none")]
    pub(crate) pension: Option<String>,
    #[serde(
        rename = "Family Members",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) family_members: Option<String>,
}

/// Reads every data row, keeping per-row failures alongside the row
/// number so one bad row cannot sink the rest of the file. The outer
/// error covers an unreadable header line only.
pub(crate) fn parse_rows<R: Read>(
    reader: R,
) -> Result<Vec<(usize, Result<RosterRow, csv::Error>)>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader.headers()?;

    // Data rows start on line 2, after the header.
    Ok(csv_reader
        .deserialize::<RosterRow>()
        .enumerate()
        .map(|(index, result)| (index + 2, result))
        .collect())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
