use crate::models::StoredRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub date: String,
    pub time: String,
    pub systolic: String,
    pub diastolic: String,
    pub heart_rate: String,
    pub notes: String,
}

/// Display rows in remote order. Records lacking any of the three measures
/// (absent or zero) are skipped.
pub fn build_history(records: &[StoredRecord]) -> Vec<HistoryRow> {
    records
        .iter()
        .filter_map(|record| {
            let fields = &record.fields;
            let systolic = measure(fields.systolic)?;
            let diastolic = measure(fields.diastolic)?;
            let heart_rate = measure(fields.heart_rate)?;

            Some(HistoryRow {
                date: fields.date.clone().unwrap_or_default(),
                time: fields.time.clone().unwrap_or_default(),
                systolic,
                diastolic,
                heart_rate,
                notes: fields.notes.clone().unwrap_or_default(),
            })
        })
        .collect()
}

fn measure(value: Option<f64>) -> Option<String> {
    let value = value.filter(|v| *v != 0.0)?;
    if value.fract() == 0.0 {
        Some(format!("{value:.0}"))
    } else {
        Some(value.to_string())
    }
}
