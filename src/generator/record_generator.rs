use rand::Rng;
use rust_decimal::Decimal;
use uuid::{Builder, Uuid};

use crate::generator::{DEFAULT_CUSTOMER_ID, MAX_AMOUNT_CENTS, MIN_AMOUNT_CENTS};
use crate::models::TransactionRecord;
use crate::types::{AccountIban, Currency, DateRange, Description, TransactionType, DEFAULT_IBAN_PREFIX, IBAN_GROUP_RANGE};

/// The fixed inputs of record generation.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub date_range: DateRange,
    pub iban_prefix: String,
    pub customer_id: String
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            date_range: DateRange::default(),
            iban_prefix: DEFAULT_IBAN_PREFIX.to_string(),
            customer_id: DEFAULT_CUSTOMER_ID.to_string()
        }
    }
}

/// Produces independent random transaction records.
///
/// The generator holds no state between calls; all randomness comes from the `rng`
/// handed to [`RecordGenerator::generate`], so a seeded source gives a reproducible run.
#[derive(Debug, Clone, Default)]
pub struct RecordGenerator {
    settings: GeneratorSettings
}

impl RecordGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> TransactionRecord {
        TransactionRecord {
            id: generate_id(rng),
            amount: generate_amount(rng),
            currency: Currency::ALL[rng.random_range(0..Currency::ALL.len())],
            account_iban: self.generate_iban(rng),
            value_date: self.settings.date_range.day_at(rng.random_range(0..=self.settings.date_range.span_days())),
            description: Description::ALL[rng.random_range(0..Description::ALL.len())],
            customer_id: self.settings.customer_id.clone(),
            transaction_type: TransactionType::ALL[rng.random_range(0..TransactionType::ALL.len())]
        }
    }

    fn generate_iban<R: Rng + ?Sized>(&self, rng: &mut R) -> AccountIban {
        let groups = [
            rng.random_range(IBAN_GROUP_RANGE),
            rng.random_range(IBAN_GROUP_RANGE),
            rng.random_range(IBAN_GROUP_RANGE)
        ];

        AccountIban::from_groups(&self.settings.iban_prefix, groups)
    }
}

fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    Builder::from_random_bytes(bytes).into_uuid()
}

//NOTE: Drawn as whole cents so both bounds are inclusive and the scale is always two places.
fn generate_amount<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    Decimal::new(rng.random_range(MIN_AMOUNT_CENTS..=MAX_AMOUNT_CENTS), 2)
}
