use super::{ReadingStore, StoreError};
use crate::models::{Reading, RecordFields, StoredRecord};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-process stand-in for the remote table.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<StoredRecord>>,
    calls: AtomicUsize,
    fail: bool,
}

impl MemoryStore {
    pub fn with_records(records: Vec<StoredRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ReadingStore for MemoryStore {
    async fn append(&self, reading: &Reading) -> Result<(), StoreError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let id = format!("rec{}", records.len() + 1);
        records.push(StoredRecord {
            id,
            fields: RecordFields {
                date: Some(reading.date.to_string()),
                time: Some(reading.time.format("%H:%M").to_string()),
                systolic: Some(f64::from(reading.systolic)),
                diastolic: Some(f64::from(reading.diastolic)),
                heart_rate: Some(f64::from(reading.heart_rate)),
                notes: Some(reading.notes.clone()),
            },
        });
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<StoredRecord>, StoreError> {
        self.check()?;
        let mut records = self.records.lock().unwrap().clone();
        // Stable sort keeps insertion order for equal dates.
        records.sort_by(|a, b| a.fields.date.cmp(&b.fields.date));
        Ok(records)
    }
}
