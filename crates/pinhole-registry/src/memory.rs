use jiff::Timestamp;
use pinhole_core::clock::{Clock, SystemClock};
use pinhole_core::error::{RegistryError, Result};
use pinhole_core::{LinkRecord, PendingEntry, Registry};
use pinhole_generator::Generator;
use std::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct RegistryState {
    records: Vec<LinkRecord>,
    log: Vec<String>,
}

/// In-memory implementation of the [`Registry`] trait.
///
/// The registry is append-only: records are created at submission time and
/// never mutated or deleted, and no expiry sweep runs. A single mutex
/// serializes submissions so batches land in submission order even when the
/// handle is shared between threads; reads return snapshots taken under the
/// same lock.
#[derive(Debug)]
pub struct InMemoryRegistry<G, C = SystemClock> {
    generator: G,
    clock: C,
    state: Mutex<RegistryState>,
}

impl<G: Generator> InMemoryRegistry<G> {
    /// Creates a registry backed by the real system clock.
    pub fn new(generator: G) -> Self {
        Self::with_clock(generator, SystemClock)
    }
}

impl<G: Generator, C: Clock> InMemoryRegistry<G, C> {
    /// Creates a registry with an explicit time source.
    pub fn with_clock(generator: G, clock: C) -> Self {
        Self {
            generator,
            clock,
            state: Mutex::new(RegistryState::default()),
        }
    }

    fn finalize(&self, entry: &PendingEntry) -> LinkRecord {
        let created_at = self.clock.now();
        // Overflow while adding the window saturates instead of failing;
        // the result still lands after `created_at`.
        let expires_at = created_at
            .checked_add(entry.validity_duration())
            .unwrap_or(Timestamp::MAX);

        LinkRecord {
            original: entry.url.trim().to_owned(),
            code: self.generator.resolve(entry.custom_code()),
            created_at,
            expires_at,
        }
    }
}

impl<G: Generator, C: Clock + 'static> Registry for InMemoryRegistry<G, C> {
    fn submit_batch(&self, entries: Vec<PendingEntry>) -> Result<Vec<LinkRecord>> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| RegistryError::StatePoisoned)?;

        let mut created = Vec::with_capacity(entries.len());
        for entry in &entries {
            let record = self.finalize(entry);
            debug!(
                code = %record.code,
                original = %record.original,
                expires_at = %record.expires_at,
                "registered short link"
            );
            state.log.push(record.audit_entry());
            state.records.push(record.clone());
            created.push(record);
        }

        info!(
            created = created.len(),
            total = state.records.len(),
            "submitted batch"
        );
        Ok(created)
    }

    fn records(&self) -> Result<Vec<LinkRecord>> {
        let state = self
            .state
            .lock()
            .map_err(|_| RegistryError::StatePoisoned)?;
        Ok(state.records.clone())
    }

    fn count(&self) -> Result<usize> {
        let state = self
            .state
            .lock()
            .map_err(|_| RegistryError::StatePoisoned)?;
        Ok(state.records.len())
    }

    fn audit_log(&self) -> Result<Vec<String>> {
        let state = self
            .state
            .lock()
            .map_err(|_| RegistryError::StatePoisoned)?;
        Ok(state.log.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;
    use pinhole_core::clock::FixedClock;
    use pinhole_generator::SeqGenerator;

    fn epoch() -> Timestamp {
        Timestamp::from_second(0).unwrap()
    }

    fn registry_at_epoch() -> InMemoryRegistry<SeqGenerator, FixedClock> {
        InMemoryRegistry::with_clock(SeqGenerator::with_prefix("t"), FixedClock::new(epoch()))
    }

    fn entry(url: &str) -> PendingEntry {
        PendingEntry::builder().url(url).build()
    }

    #[test]
    fn default_validity_is_ten_minutes() {
        let registry = registry_at_epoch();

        let created = registry
            .submit_batch(vec![entry("https://example.com")])
            .unwrap();

        let record = &created[0];
        assert_eq!(record.created_at, epoch());
        assert_eq!(
            record.expires_at.duration_since(record.created_at),
            SignedDuration::from_mins(10)
        );
    }

    #[test]
    fn explicit_validity_is_honored() {
        let registry = registry_at_epoch();

        let created = registry
            .submit_batch(vec![PendingEntry::builder()
                .url("https://example.com")
                .validity("30")
                .build()])
            .unwrap();

        assert_eq!(
            created[0].expires_at.duration_since(created[0].created_at),
            SignedDuration::from_mins(30)
        );
    }

    #[test]
    fn malformed_validity_falls_back_to_default() {
        let registry = registry_at_epoch();

        let created = registry
            .submit_batch(vec![
                PendingEntry::builder().url("a").validity("soon").build(),
                PendingEntry::builder().url("b").validity("-5").build(),
            ])
            .unwrap();

        for record in &created {
            assert_eq!(
                record.expires_at.duration_since(record.created_at),
                SignedDuration::from_mins(10)
            );
        }
    }

    #[test]
    fn custom_code_is_used_verbatim() {
        let registry = registry_at_epoch();

        let created = registry
            .submit_batch(vec![PendingEntry::builder()
                .url("https://example.com")
                .code("abc")
                .build()])
            .unwrap();

        assert_eq!(created[0].code.as_str(), "abc");
    }

    #[test]
    fn missing_code_is_generated() {
        let registry = registry_at_epoch();

        let created = registry
            .submit_batch(vec![entry("https://example.com")])
            .unwrap();

        assert_eq!(created[0].code.as_str(), "t0000");
    }

    #[test]
    fn url_is_trimmed_but_not_validated() {
        let registry = registry_at_epoch();

        let created = registry
            .submit_batch(vec![entry("  example.com  "), entry(""), entry("not a url")])
            .unwrap();

        assert_eq!(created[0].original, "example.com");
        assert_eq!(created[1].original, "");
        assert_eq!(created[2].original, "not a url");
    }

    #[test]
    fn batch_grows_count_and_log_in_order() {
        let registry = registry_at_epoch();

        let batch: Vec<PendingEntry> = (0..4)
            .map(|i| entry(&format!("https://example{i}.com")))
            .collect();
        registry.submit_batch(batch).unwrap();

        assert_eq!(registry.count().unwrap(), 4);

        let log = registry.audit_log().unwrap();
        assert_eq!(log.len(), 4);
        for (i, line) in log.iter().enumerate() {
            assert!(
                line.contains(&format!("https://example{i}.com")),
                "log out of order: {line}"
            );
        }

        let records = registry.records().unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["t0000", "t0001", "t0002", "t0003"]);
    }

    #[test]
    fn submissions_accumulate_across_batches() {
        let registry = registry_at_epoch();

        registry.submit_batch(vec![entry("a"), entry("b")]).unwrap();
        registry.submit_batch(vec![entry("c")]).unwrap();

        assert_eq!(registry.count().unwrap(), 3);
        assert_eq!(registry.audit_log().unwrap().len(), 3);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let registry = registry_at_epoch();

        let created = registry.submit_batch(Vec::new()).unwrap();

        assert!(created.is_empty());
        assert_eq!(registry.count().unwrap(), 0);
        assert!(registry.audit_log().unwrap().is_empty());
    }

    #[test]
    fn reads_are_idempotent_between_submissions() {
        let registry = registry_at_epoch();
        registry.submit_batch(vec![entry("https://example.com")]).unwrap();

        assert_eq!(registry.count().unwrap(), registry.count().unwrap());
        assert_eq!(registry.audit_log().unwrap(), registry.audit_log().unwrap());
        assert_eq!(registry.records().unwrap(), registry.records().unwrap());
    }

    #[test]
    fn audit_entry_reflects_the_record() {
        let registry = registry_at_epoch();

        let created = registry
            .submit_batch(vec![PendingEntry::builder()
                .url("https://example.com")
                .code("abc")
                .build()])
            .unwrap();

        let log = registry.audit_log().unwrap();
        assert_eq!(log[0], created[0].audit_entry());
        assert_eq!(
            log[0],
            "Created short code \"abc\" for https://example.com \
             (valid until 1970-01-01T00:10:00Z)"
        );
    }

    #[test]
    fn expired_records_stay_listed() {
        let clock = FixedClock::new(epoch());
        let registry =
            InMemoryRegistry::with_clock(SeqGenerator::with_prefix("t"), clock.clone());

        registry.submit_batch(vec![entry("https://example.com")]).unwrap();
        clock.advance(SignedDuration::from_hours(2));

        // Well past expiry: no sweep, no filtering.
        assert_eq!(registry.count().unwrap(), 1);
        assert_eq!(registry.records().unwrap().len(), 1);
    }

    #[test]
    fn duplicate_codes_are_permitted() {
        let registry = registry_at_epoch();

        let created = registry
            .submit_batch(vec![
                PendingEntry::builder().url("a").code("same").build(),
                PendingEntry::builder().url("b").code("same").build(),
            ])
            .unwrap();

        assert_eq!(created[0].code, created[1].code);
        assert_eq!(registry.count().unwrap(), 2);
    }
}
