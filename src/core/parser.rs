use crate::config::metadata::MetadataTable;
use crate::domain::model::{BasicInfo, NumberType, ParsedNumber, RegionCode};
use crate::utils::error::{HunterError, Result};
use phonenumber::metadata::DATABASE;
use phonenumber::{Mode, ParseError, PhoneNumber, Type};

/// Parses `raw` as an international number (no default region) and derives
/// the descriptive fields of the "Basic Info" section.
pub fn parse_number(raw: &str, metadata: &MetadataTable) -> Result<(ParsedNumber, BasicInfo)> {
    let number = phonenumber::parse(None, raw).map_err(|source| classify(raw, source))?;

    if !phonenumber::is_valid(&number) {
        return Err(HunterError::InvalidNumber {
            input: raw.to_string(),
        });
    }

    let parsed = ParsedNumber {
        country_code: number.country().code(),
        national_number: number.national().value(),
        region: region_of(&number),
    };
    let number_type = number_type_of(&number);
    tracing::debug!(
        "Parsed {} as +{} {} ({}, region {})",
        raw,
        parsed.country_code,
        parsed.national_number,
        number_type,
        parsed.region.map(|r| r.to_string()).unwrap_or_default()
    );

    let info = BasicInfo {
        phone_number: raw.to_string(),
        international_format: number.format().mode(Mode::International).to_string(),
        country: metadata.country_name(parsed.region),
        carrier: metadata.carrier_name(parsed.country_code, parsed.national_number, number_type),
        timezones: metadata.timezones(parsed.region),
        number_type,
    };

    Ok((parsed, info))
}

/// The country code was recognised but the national part is all zeros (or
/// empty), which the parser reports as a malformed integer. That is a
/// number that does not exist, not a formatting problem.
fn classify(raw: &str, source: ParseError) -> HunterError {
    match source {
        ParseError::MalformedInteger(_) => HunterError::InvalidNumber {
            input: raw.to_string(),
        },
        source => HunterError::Unparseable {
            input: raw.to_string(),
            source,
        },
    }
}

fn region_of(number: &PhoneNumber) -> Option<RegionCode> {
    number.country().id().and_then(|id| RegionCode::new(id.as_ref()))
}

fn number_type_of(number: &PhoneNumber) -> NumberType {
    match number.number_type(&DATABASE) {
        Type::FixedLine => NumberType::FixedLine,
        Type::Mobile => NumberType::Mobile,
        Type::FixedLineOrMobile => NumberType::FixedLineOrMobile,
        Type::TollFree => NumberType::TollFree,
        Type::PremiumRate => NumberType::PremiumRate,
        Type::SharedCost => NumberType::SharedCost,
        Type::Voip => NumberType::Voip,
        Type::PersonalNumber => NumberType::PersonalNumber,
        Type::Pager => NumberType::Pager,
        Type::Uan => NumberType::Uan,
        Type::Voicemail => NumberType::Voicemail,
        _ => NumberType::Unknown,
    }
}
