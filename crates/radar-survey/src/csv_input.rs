// File: crates/radar-survey/src/csv_input.rs
// Summary: Load a category -> skill (and optional interest) table from CSV into a Profile.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use radar_core::metrics::is_in_scale;
use radar_core::MetricSet;
use tracing::{debug, warn};

use crate::survey::Profile;

const NAME_HEADERS: [&str; 4] = ["category", "name", "animal", "label"];
const VALUE_HEADERS: [&str; 5] = ["value", "rating", "skill", "score", "level"];
const INTEREST_HEADERS: [&str; 1] = ["interest"];

/// Profile named after the file stem.
pub fn load_profile_csv(path: &Path) -> Result<Profile> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("profile");
    read_profile(file, name).with_context(|| format!("reading {}", path.display()))
}

/// Read `category,value[,interest]` rows. Headers are matched case-insensitively; when none
/// match, the first two columns are used and interests are left empty. Rows whose value is
/// not a finite number are skipped; so is a bad interest cell when the column exists.
pub fn read_profile<R: Read>(reader: R, name: &str) -> Result<Profile> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_name = idx(&NAME_HEADERS).unwrap_or(0);
    let i_value = idx(&VALUE_HEADERS).unwrap_or(1);
    let i_interest = idx(&INTEREST_HEADERS);

    let mut skills = MetricSet::new();
    let mut interests = MetricSet::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(category) = rec.get(i_name) else { continue };
        let Some(value) = finite_cell(rec.get(i_value)) else {
            warn!(row = row + 1, category, "skipping row without a finite numeric value");
            continue;
        };
        let interest = match i_interest {
            Some(i) => match finite_cell(rec.get(i)) {
                Some(v) => Some(v),
                None => {
                    warn!(row = row + 1, category, "skipping row without a finite interest");
                    continue;
                }
            },
            None => None,
        };
        for v in std::iter::once(value).chain(interest) {
            if !is_in_scale(v) {
                warn!(category, value = v, "rating outside 1..=5; chart will extrapolate");
            }
        }
        skills.insert(category, value).with_context(|| format!("row {}", row + 1))?;
        if let Some(v) = interest {
            interests.insert(category, v).with_context(|| format!("row {}", row + 1))?;
        }
    }
    Ok(Profile { name: name.to_string(), skills, interests })
}

fn finite_cell(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite())
}
