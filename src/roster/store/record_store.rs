use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::{parse_grade_input, Field, Grade, NewStudent, StudentId, StudentRecord};
use crate::validation;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// The record collection plus its persistence.
///
/// Records keep insertion order and identifiers are unique. Every mutating
/// method persists the whole collection before returning; if that write
/// fails the in-memory collection is restored to its previous state.
pub struct RecordStore<S: DataStore> {
    backend: S,
    records: Vec<StudentRecord>,
}

impl<S: DataStore> RecordStore<S> {
    /// Loads the persisted document, falling back to an empty collection when
    /// it is missing, unreadable, or malformed.
    pub fn load(backend: S) -> Self {
        let mut store = Self {
            backend,
            records: Vec::new(),
        };
        store.reload();
        store
    }

    /// Discards in-memory state and re-reads the persisted document.
    pub fn reload(&mut self) {
        let location = self.backend.describe();
        self.records = match self.backend.read() {
            Ok(Some(text)) => decode_document(&text, &location),
            Ok(None) => {
                debug!(store = %location, "no student data yet, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(store = %location, error = %e, "could not read student data, starting empty");
                Vec::new()
            }
        };
        debug!(store = %location, count = self.records.len(), "student data loaded");
    }

    /// Writes the full collection, overwriting the persisted document.
    pub fn save(&mut self) -> Result<()> {
        let document = encode_document(&self.records)?;
        self.backend.write(&document)?;
        debug!(store = %self.backend.describe(), count = self.records.len(), "student data saved");
        Ok(())
    }

    /// `STU001` for an empty store, otherwise one past the highest numeric suffix.
    ///
    /// Fails when the highest suffix is already `u64::MAX`.
    pub fn next_id(&self) -> Result<StudentId> {
        let max = self
            .records
            .iter()
            .filter_map(|r| r.student_id.number())
            .max()
            .unwrap_or(0);
        max.checked_add(1).map(StudentId::from_number).ok_or_else(|| {
            RosterError::Store(format!("No student ID is available after STU{}", max))
        })
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    pub fn get(&self, id: &StudentId) -> Result<&StudentRecord> {
        self.records
            .iter()
            .find(|r| &r.student_id == id)
            .ok_or_else(|| RosterError::NotFound(id.clone()))
    }

    pub fn contains(&self, id: &StudentId) -> bool {
        self.records.iter().any(|r| &r.student_id == id)
    }

    /// Creates a record enrolled today.
    pub fn add(&mut self, fields: NewStudent) -> Result<StudentRecord> {
        self.add_enrolled_on(fields, Local::now().date_naive())
    }

    pub fn add_enrolled_on(
        &mut self,
        fields: NewStudent,
        enrollment_date: NaiveDate,
    ) -> Result<StudentRecord> {
        let fields = validation::check_new(fields)?;
        let record = StudentRecord::new(self.next_id()?, fields, enrollment_date);

        let added = self.commit(|records| {
            records.push(record.clone());
            Ok(record)
        })?;
        info!(id = %added.student_id, course = %added.course, "student added");
        Ok(added)
    }

    /// Revalidates `value` for `field` and applies it.
    ///
    /// A blank value for [`Field::Grade`] clears the grade.
    pub fn update(&mut self, id: &StudentId, field: Field, value: &str) -> Result<StudentRecord> {
        let idx = self.position(id)?;
        let updated = self.commit(|records| {
            let record = &mut records[idx];
            match field {
                Field::Name => record.name = validation::parse_name(value)?,
                Field::Age => record.age = validation::parse_age(value)?,
                Field::Email => record.email = validation::parse_email(value)?,
                Field::Phone => record.phone = validation::parse_phone(value)?,
                Field::Course => record.course = validation::parse_course(value)?,
                Field::Grade => record.grade = parse_grade_input(value)?,
            }
            Ok(record.clone())
        })?;
        info!(id = %id, field = %field, "student updated");
        Ok(updated)
    }

    /// Sets the grade from user input; blank input clears it.
    pub fn assign_grade(&mut self, id: &StudentId, input: &str) -> Result<StudentRecord> {
        let idx = self.position(id)?;
        let grade = parse_grade_input(input)?;
        self.set_grade_at(idx, grade)
    }

    pub fn set_grade(&mut self, id: &StudentId, grade: Option<Grade>) -> Result<StudentRecord> {
        let idx = self.position(id)?;
        self.set_grade_at(idx, grade)
    }

    pub fn delete(&mut self, id: &StudentId) -> Result<StudentRecord> {
        let idx = self.position(id)?;
        let removed = self.commit(|records| Ok(records.remove(idx)))?;
        info!(id = %id, "student deleted");
        Ok(removed)
    }

    /// Case-insensitive substring match on ID and name, in insertion order.
    pub fn search(&self, term: &str) -> Vec<&StudentRecord> {
        let needle = term.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.student_id.as_str().to_lowercase().contains(&needle)
                    || r.name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn set_grade_at(&mut self, idx: usize, grade: Option<Grade>) -> Result<StudentRecord> {
        let updated = self.commit(|records| {
            records[idx].grade = grade;
            Ok(records[idx].clone())
        })?;
        info!(id = %updated.student_id, grade = updated.grade_label(), "grade set");
        Ok(updated)
    }

    fn position(&self, id: &StudentId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| &r.student_id == id)
            .ok_or_else(|| RosterError::NotFound(id.clone()))
    }

    /// Applies `mutate` and persists; restores the previous collection if
    /// either step fails.
    fn commit<T>(
        &mut self,
        mutate: impl FnOnce(&mut Vec<StudentRecord>) -> Result<T>,
    ) -> Result<T> {
        let snapshot = self.records.clone();
        let outcome = mutate(&mut self.records).and_then(|value| self.save().map(|_| value));
        if outcome.is_err() {
            self.records = snapshot;
        }
        outcome
    }
}

/// Serializes records as a JSON object keyed by identifier, four-space indented.
pub fn encode_document(records: &[StudentRecord]) -> Result<String> {
    let mut document = Map::new();
    for record in records {
        document.insert(record.student_id.to_string(), serde_json::to_value(record)?);
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| RosterError::Store(e.to_string()))
}

/// Parses a persisted document, keeping every entry that reads and validates.
///
/// A document that is not a JSON object yields no records. Entries that do
/// not deserialize or fail validation are skipped, and so are repeated IDs.
pub fn decode_document(text: &str, location: &str) -> Vec<StudentRecord> {
    let entries: Map<String, Value> = match serde_json::from_str(text) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(store = %location, error = %e, "malformed student data, starting empty");
            return Vec::new();
        }
    };

    let mut records: Vec<StudentRecord> = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let record: StudentRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                warn!(key = %key, error = %e, "skipping unreadable student record");
                continue;
            }
        };
        if let Err(e) = validation::validate_record(&record) {
            warn!(key = %key, error = %e, "skipping invalid student record");
            continue;
        }
        if record.student_id.as_str() != key {
            warn!(key = %key, id = %record.student_id, "record key differs from its student_id");
        }
        if records.iter().any(|r| r.student_id == record.student_id) {
            warn!(id = %record.student_id, "skipping duplicate student id");
            continue;
        }
        records.push(record);
    }
    records
}
