use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Structural pieces of a phone number, owned by the parse stage and handed
/// downstream by value. Only numbers that passed validation are ever turned
/// into a `ParsedNumber`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber {
    pub country_code: u16,
    pub national_number: u64,
    pub region: Option<RegionCode>,
}

/// ISO 3166-1 alpha-2 region code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionCode([u8; 2]);

impl RegionCode {
    pub fn new(code: &str) -> Option<Self> {
        match code.as_bytes() {
            [a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() => Some(Self([*a, *b])),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII upper-case bytes are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberType {
    FixedLine,
    Mobile,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Voicemail,
    Unknown,
}

impl NumberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberType::FixedLine => "FIXED_LINE",
            NumberType::Mobile => "MOBILE",
            NumberType::FixedLineOrMobile => "FIXED_LINE_OR_MOBILE",
            NumberType::TollFree => "TOLL_FREE",
            NumberType::PremiumRate => "PREMIUM_RATE",
            NumberType::SharedCost => "SHARED_COST",
            NumberType::Voip => "VOIP",
            NumberType::PersonalNumber => "PERSONAL_NUMBER",
            NumberType::Pager => "PAGER",
            NumberType::Uan => "UAN",
            NumberType::Voicemail => "VOICEMAIL",
            NumberType::Unknown => "UNKNOWN",
        }
    }

    /// Types that can be served by a mobile operator.
    pub fn is_mobile_capable(&self) -> bool {
        matches!(
            self,
            NumberType::Mobile | NumberType::FixedLineOrMobile | NumberType::Pager
        )
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicInfo {
    pub phone_number: String,
    pub international_format: String,
    pub country: String,
    pub carrier: String,
    pub timezones: Vec<String>,
    pub number_type: NumberType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSet {
    pub google_search: String,
    pub telegram: String,
    pub whatsapp: String,
    pub snapchat: String,
    pub instagram: String,
    pub truecaller: String,
}

/// Fabricated values for the "Deep OSINT" section. Nothing here is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderBag {
    pub possible_name: String,
    pub email_address: String,
    pub leaked_links: Vec<String>,
    pub confidence_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: FieldValue,
}

/// Ordered labelled fields. Serializes as a JSON object that keeps insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    fields: Vec<Field>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, label: &str, value: impl Into<String>) -> Self {
        self.fields.push(Field {
            label: label.to_string(),
            value: FieldValue::Scalar(value.into()),
        });
        self
    }

    pub fn list(mut self, label: &str, values: Vec<String>) -> Self {
        self.fields.push(Field {
            label: label.to_string(),
            value: FieldValue::List(values),
        });
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| &field.value)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.label.as_str())
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.label, &field.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionVisitor;

        impl<'de> Visitor<'de> for SectionVisitor {
            type Value = Section;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of labels to strings or string lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Section, A::Error> {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, value)) = access.next_entry::<String, FieldValue>()? {
                    fields.push(Field { label, value });
                }
                Ok(Section { fields })
            }
        }

        deserializer.deserialize_map(SectionVisitor)
    }
}

impl From<BasicInfo> for Section {
    fn from(info: BasicInfo) -> Self {
        Section::new()
            .scalar("Phone Number", info.phone_number)
            .scalar("International Format", info.international_format)
            .scalar("Country", info.country)
            .scalar("Carrier", info.carrier)
            .list("Timezones", info.timezones)
            .scalar("Number Type", info.number_type.as_str())
    }
}

impl From<LinkSet> for Section {
    fn from(links: LinkSet) -> Self {
        Section::new()
            .scalar("Google Search", links.google_search)
            .scalar("Telegram", links.telegram)
            .scalar("WhatsApp", links.whatsapp)
            .scalar("Snapchat", links.snapchat)
            .scalar("Instagram", links.instagram)
            .scalar("Truecaller (Manual)", links.truecaller)
    }
}

impl From<PlaceholderBag> for Section {
    fn from(bag: PlaceholderBag) -> Self {
        Section::new()
            .scalar("Possible Name", bag.possible_name)
            .scalar("Email Address", bag.email_address)
            .list("Leaked Links", bag.leaked_links)
            .scalar("Confidence Level", bag.confidence_level)
    }
}

/// Everything one run produces. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "Basic Info")]
    pub basic_info: Section,
    #[serde(rename = "Links")]
    pub links: Section,
    #[serde(rename = "Deep OSINT")]
    pub deep_osint: Section,
}

impl Report {
    pub fn new(basic_info: BasicInfo, links: LinkSet, deep_osint: PlaceholderBag) -> Self {
        Self {
            basic_info: basic_info.into(),
            links: links.into(),
            deep_osint: deep_osint.into(),
        }
    }

    /// The phone string as the user typed it.
    pub fn phone_number(&self) -> &str {
        match self.basic_info.get("Phone Number") {
            Some(FieldValue::Scalar(phone)) => phone,
            _ => "",
        }
    }
}
