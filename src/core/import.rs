//! CSV import reconciliation.
//!
//! `reconcile_import_batch` is pure: it resolves each row's employer and
//! site against the caller-supplied snapshots (plus the records staged
//! earlier in the same batch), derives the shift status from the row date
//! relative to today, and returns everything staged for a single atomic
//! commit (`db::queries::commit_import_batch`).

use crate::core::schedule::derive_import_status;
use crate::models::employer::Employer;
use crate::models::site::Site;
use crate::models::status::ShiftStatus;
use crate::utils::date::us_to_iso;
use crate::utils::parse::parse_decimal;
use serde::Deserialize;

/// One loosely-typed row of the import file. Only `Date` and `Employer`
/// are mandatory; everything else defaults to empty and is parsed
/// leniently.
#[derive(Debug, Default, Deserialize)]
pub struct ImportRow {
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Employer", default)]
    pub employer: String,
    #[serde(rename = "Site", default)]
    pub site: String,
    #[serde(rename = "Postal Code", default)]
    pub postal_code: String,
    #[serde(rename = "Start Time", default)]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: String,
    #[serde(rename = "Hours in Decimal", default)]
    pub hours: String,
    #[serde(rename = "Hourly Rate", default)]
    pub hourly_rate: String,
    #[serde(rename = "Total", default)]
    pub total: String,
    #[serde(rename = "Status", default)]
    pub status: String,
}

/// Reference from a staged shift to its employer/site: either a record
/// that already exists, or an index into this batch's staged creations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRef {
    Existing(i64),
    Staged(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagedEmployer {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagedSite {
    pub site_name: String,
    pub postal_code: String,
}

/// A shift ready to insert. The date is a canonical (zero-padded, but
/// unvalidated) ISO string; malformed source dates propagate rather than
/// aborting the row.
#[derive(Debug, Clone)]
pub struct StagedShift {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub hours: f64,
    pub hourly_rate: f64,
    pub total_earnings: f64,
    pub status: ShiftStatus,
    pub employer: RecordRef,
    pub site: RecordRef,
}

#[derive(Debug, Default)]
pub struct ImportBatch {
    pub employers: Vec<StagedEmployer>,
    pub sites: Vec<StagedSite>,
    pub shifts: Vec<StagedShift>,
    /// Rows silently dropped for missing Date or Employer.
    pub skipped: usize,
}

impl ImportBatch {
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

/// Resolve every row of an import file against the existing employer and
/// site snapshots, staging creations where no case-insensitive match on
/// the trimmed name exists.
///
/// Newly staged records join the lookup caches immediately, so a new
/// employer appearing on several rows of one file is created exactly
/// once. `today` is the canonical ISO date used for status derivation.
pub fn reconcile_import_batch(
    rows: &[ImportRow],
    existing_employers: &[Employer],
    existing_sites: &[Site],
    today: &str,
) -> ImportBatch {
    let mut batch = ImportBatch::default();

    for row in rows {
        if row.date.trim().is_empty() || row.employer.trim().is_empty() {
            batch.skipped += 1;
            continue;
        }

        let iso_date = us_to_iso(&row.date);

        let employer = resolve_employer(&mut batch, existing_employers, &row.employer);
        let site = resolve_site(&mut batch, existing_sites, &row.site, &row.postal_code);

        let status = derive_import_status(&iso_date, today, &row.status);

        batch.shifts.push(StagedShift {
            date: iso_date,
            start_time: row.start_time.trim().to_string(),
            end_time: row.end_time.trim().to_string(),
            hours: parse_decimal(&row.hours),
            hourly_rate: parse_decimal(&row.hourly_rate),
            total_earnings: parse_decimal(&row.total),
            status,
            employer,
            site,
        });
    }

    batch
}

fn resolve_employer(
    batch: &mut ImportBatch,
    existing: &[Employer],
    raw_name: &str,
) -> RecordRef {
    let name = raw_name.trim();

    if let Some(emp) = existing
        .iter()
        .find(|e| e.name.trim().eq_ignore_ascii_case(name))
    {
        return RecordRef::Existing(emp.id);
    }

    if let Some(idx) = batch
        .employers
        .iter()
        .position(|e| e.name.eq_ignore_ascii_case(name))
    {
        return RecordRef::Staged(idx);
    }

    batch.employers.push(StagedEmployer {
        name: name.to_string(),
    });
    RecordRef::Staged(batch.employers.len() - 1)
}

fn resolve_site(
    batch: &mut ImportBatch,
    existing: &[Site],
    raw_name: &str,
    postal_code: &str,
) -> RecordRef {
    let name = raw_name.trim();

    if let Some(site) = existing
        .iter()
        .find(|s| s.site_name.trim().eq_ignore_ascii_case(name))
    {
        return RecordRef::Existing(site.id);
    }

    if let Some(idx) = batch
        .sites
        .iter()
        .position(|s| s.site_name.eq_ignore_ascii_case(name))
    {
        return RecordRef::Staged(idx);
    }

    batch.sites.push(StagedSite {
        site_name: name.to_string(),
        postal_code: postal_code.trim().to_string(),
    });
    RecordRef::Staged(batch.sites.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, employer: &str, site: &str) -> ImportRow {
        ImportRow {
            date: date.to_string(),
            employer: employer.to_string(),
            site: site.to_string(),
            ..Default::default()
        }
    }

    fn employer(id: i64, name: &str) -> Employer {
        Employer {
            id,
            user_id: "default".into(),
            name: name.into(),
            default_rate: None,
            created_at: String::new(),
        }
    }

    fn site(id: i64, name: &str) -> Site {
        Site {
            id,
            user_id: "default".into(),
            site_name: name.into(),
            postal_code: String::new(),
            created_at: String::new(),
        }
    }

    const TODAY: &str = "2024-05-10";

    #[test]
    fn rows_missing_date_or_employer_are_skipped() {
        let rows = vec![
            row("", "Acme", "Dock"),
            row("5/9/2024", "", "Dock"),
            row("5/9/2024", "Acme", "Dock"),
        ];
        let batch = reconcile_import_batch(&rows, &[], &[], TODAY);
        assert_eq!(batch.skipped, 2);
        assert_eq!(batch.shifts.len(), 1);
    }

    #[test]
    fn existing_employer_matched_case_insensitively() {
        let rows = vec![row("5/9/2024", "  ACME  ", "Dock")];
        let existing = vec![employer(7, "Acme")];
        let batch = reconcile_import_batch(&rows, &existing, &[], TODAY);
        assert!(batch.employers.is_empty());
        assert_eq!(batch.shifts[0].employer, RecordRef::Existing(7));
    }

    #[test]
    fn same_new_employer_staged_once_per_batch() {
        let rows = vec![
            row("5/9/2024", "Acme", "Dock"),
            row("5/8/2024", "ACME", "Dock"),
        ];
        let batch = reconcile_import_batch(&rows, &[], &[], TODAY);
        assert_eq!(batch.employers.len(), 1);
        assert_eq!(batch.shifts[0].employer, RecordRef::Staged(0));
        assert_eq!(batch.shifts[1].employer, RecordRef::Staged(0));
    }

    #[test]
    fn new_site_keeps_row_postal_code() {
        let mut r = row("5/9/2024", "Acme", "North Gate");
        r.postal_code = " SA1 1AA ".into();
        let batch = reconcile_import_batch(&[r], &[], &[], TODAY);
        assert_eq!(
            batch.sites[0],
            StagedSite {
                site_name: "North Gate".into(),
                postal_code: "SA1 1AA".into()
            }
        );
    }

    #[test]
    fn existing_site_reused() {
        let rows = vec![row("5/9/2024", "Acme", "dock")];
        let existing = vec![site(3, "Dock")];
        let batch = reconcile_import_batch(&rows, &[], &existing, TODAY);
        assert!(batch.sites.is_empty());
        assert_eq!(batch.shifts[0].site, RecordRef::Existing(3));
    }

    #[test]
    fn status_derived_from_date_vs_today() {
        let rows = vec![
            row("5/10/2024", "Acme", "Dock"), // today
            row("5/11/2024", "Acme", "Dock"), // future
            row("5/9/2024", "Acme", "Dock"),  // past, no csv status
        ];
        let batch = reconcile_import_batch(&rows, &[], &[], TODAY);
        assert_eq!(batch.shifts[0].status, ShiftStatus::OnSite);
        assert_eq!(batch.shifts[1].status, ShiftStatus::Pending);
        assert_eq!(batch.shifts[2].status, ShiftStatus::Completed);
    }

    #[test]
    fn past_row_keeps_carried_status() {
        let mut r = row("5/9/2024", "Acme", "Dock");
        r.status = "Cancelled".into();
        let batch = reconcile_import_batch(&[r], &[], &[], TODAY);
        assert_eq!(
            batch.shifts[0].status,
            ShiftStatus::Other("cancelled".into())
        );
    }

    #[test]
    fn numeric_fields_parsed_leniently() {
        let mut r = row("5/9/2024", "Acme", "Dock");
        r.hours = "7.5".into();
        r.hourly_rate = "£12.50".into();
        r.total = "£1,093.75".into();
        let batch = reconcile_import_batch(&[r], &[], &[], TODAY);
        let s = &batch.shifts[0];
        assert_eq!(s.hours, 7.5);
        assert_eq!(s.hourly_rate, 12.5);
        assert_eq!(s.total_earnings, 1093.75);
    }

    #[test]
    fn unparseable_numbers_default_to_zero() {
        let mut r = row("5/9/2024", "Acme", "Dock");
        r.hours = "n/a".into();
        r.hourly_rate = "".into();
        let batch = reconcile_import_batch(&[r], &[], &[], TODAY);
        assert_eq!(batch.shifts[0].hours, 0.0);
        assert_eq!(batch.shifts[0].hourly_rate, 0.0);
    }

    #[test]
    fn malformed_dates_propagate_unvalidated() {
        let rows = vec![row("13/45/2024", "Acme", "Dock")];
        let batch = reconcile_import_batch(&rows, &[], &[], TODAY);
        assert_eq!(batch.shifts[0].date, "2024-13-45");
    }
}
