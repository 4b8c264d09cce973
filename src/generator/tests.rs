use super::{GeneratorSettings, RecordGenerator, DEFAULT_CUSTOMER_ID};

use std::collections::HashSet;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use uuid::Version;

use crate::types::{Currency, DateRange, Description, TransactionType};

const SAMPLE_SIZE: usize = 5_000;

fn iban_matches_template(iban: &str) -> bool {
    let groups: Vec<&str> = iban.split('-').collect();

    groups.len() == 5
        && groups[0] == "CH92"
        && groups[1] == "0000"
        && groups[2..].iter().all(|group| group.len() == 4 && group.chars().all(|c| c.is_ascii_digit()))
}

#[test]
fn test_generated_amounts_are_bounded_with_two_decimal_places() -> Result<()> {
    let generator = RecordGenerator::default();
    let mut rng = StdRng::seed_from_u64(7);
    let minimum = Decimal::from_str("10.00")?;
    let maximum = Decimal::from_str("5000.00")?;

    for _ in 0..SAMPLE_SIZE {
        let record = generator.generate(&mut rng);

        assert!(record.amount >= minimum && record.amount <= maximum, "amount out of range: {}", record.amount);
        assert!(record.amount.scale() <= 2);
        assert!(record.amount.is_sign_positive());
    }

    Ok(())
}

#[test]
fn test_generated_value_dates_fall_inside_default_range() -> Result<()> {
    let generator = RecordGenerator::default();
    let mut rng = StdRng::seed_from_u64(11);
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).ok_or_else(|| anyhow!("invalid date"))?;
    let end = NaiveDate::from_ymd_opt(2023, 12, 31).ok_or_else(|| anyhow!("invalid date"))?;

    for _ in 0..SAMPLE_SIZE {
        let record = generator.generate(&mut rng);
        let formatted = record.value_date.format("%Y-%m-%d").to_string();
        let parsed = NaiveDate::parse_from_str(&formatted, "%Y-%m-%d")?;

        assert!(parsed >= start && parsed <= end, "value date out of range: {formatted}");
    }

    Ok(())
}

#[test]
fn test_generated_ibans_match_template() {
    let generator = RecordGenerator::default();
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..SAMPLE_SIZE {
        let record = generator.generate(&mut rng);

        assert!(iban_matches_template(record.account_iban.as_str()), "bad iban: {}", record.account_iban);
    }
}

#[test]
fn test_generated_enumerations_cover_every_member() {
    let generator = RecordGenerator::default();
    let mut rng = StdRng::seed_from_u64(17);
    let mut currencies = HashSet::new();
    let mut descriptions = HashSet::new();
    let mut types = HashSet::new();

    for _ in 0..SAMPLE_SIZE {
        let record = generator.generate(&mut rng);
        currencies.insert(record.currency.code());
        descriptions.insert(record.description.text());
        types.insert(record.transaction_type == TransactionType::Credit);
    }

    assert_eq!(currencies.len(), Currency::ALL.len());
    assert_eq!(descriptions.len(), Description::ALL.len());
    assert_eq!(types.len(), TransactionType::ALL.len());
}

#[test]
fn test_generated_records_carry_constant_customer_and_unique_v4_ids() {
    let generator = RecordGenerator::default();
    let mut rng = StdRng::seed_from_u64(19);
    let mut ids = HashSet::new();

    for _ in 0..SAMPLE_SIZE {
        let record = generator.generate(&mut rng);

        assert_eq!(record.customer_id, DEFAULT_CUSTOMER_ID);
        assert_eq!(record.id.get_version(), Some(Version::Random));
        assert!(ids.insert(record.id));
    }
}

#[test]
fn test_same_seed_reproduces_same_records() {
    let generator = RecordGenerator::default();
    let mut first_rng = StdRng::seed_from_u64(42);
    let mut second_rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        assert_eq!(generator.generate(&mut first_rng), generator.generate(&mut second_rng));
    }
}

#[test]
fn test_custom_settings_are_respected() -> Result<()> {
    let day = NaiveDate::from_ymd_opt(2022, 2, 28).ok_or_else(|| anyhow!("invalid date"))?;
    let generator = RecordGenerator::new(GeneratorSettings {
        date_range: DateRange::new(day, day)?,
        iban_prefix: "DE89-3704".to_string(),
        customer_id: "P-9999999999".to_string()
    });
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..100 {
        let record = generator.generate(&mut rng);

        assert_eq!(record.value_date, day);
        assert!(record.account_iban.as_str().starts_with("DE89-3704-"));
        assert_eq!(record.customer_id, "P-9999999999");
    }

    Ok(())
}
