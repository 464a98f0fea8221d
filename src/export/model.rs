// src/export/model.rs

use crate::models::shift::Shift;
use crate::utils::date::iso_to_us;
use serde::Serialize;
use std::collections::HashMap;

/// Flat row for shift export. Headers match the import contract so an
/// exported file can be re-imported (statuses get re-derived on the way
/// back in; that asymmetry is documented, not fixed).
#[derive(Serialize, Clone, Debug)]
pub struct ShiftExport {
    #[serde(rename = "Date")]
    pub date: String, // M/D/YYYY, import contract format
    #[serde(rename = "Employer")]
    pub employer: String,
    #[serde(rename = "Site")]
    pub site: String,
    #[serde(rename = "Postal Code")]
    pub postal_code: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Hours in Decimal")]
    pub hours: String,
    #[serde(rename = "Hourly Rate")]
    pub hourly_rate: String,
    #[serde(rename = "Total")]
    pub total: String, // currency-symbol prefixed
    #[serde(rename = "Status")]
    pub status: String,
}

/// Build an export row, resolving employer/site ids through the name
/// maps loaded alongside the shifts.
pub fn to_export_row(
    shift: &Shift,
    employers: &HashMap<i64, String>,
    sites: &HashMap<i64, (String, String)>,
    currency: &str,
) -> ShiftExport {
    let (site_name, postal_code) = sites
        .get(&shift.site_id)
        .cloned()
        .unwrap_or_default();

    ShiftExport {
        date: iso_to_us(&shift.date_str()),
        employer: employers
            .get(&shift.employer_id)
            .cloned()
            .unwrap_or_default(),
        site: site_name,
        postal_code,
        start_time: shift.start_str(),
        end_time: shift.end_str(),
        hours: format!("{}", shift.hours),
        hourly_rate: format!("{:.2}", shift.hourly_rate),
        total: format!("{}{:.2}", currency, shift.total_earnings),
        status: shift.status.to_db_str().to_string(),
    }
}
