//! Fabricated "Deep OSINT" values.
//!
//! Nothing in this module looks anything up. Every value is drawn at random
//! from fixed pools and must only ever be shown under the "Deep OSINT" label.

use crate::domain::model::PlaceholderBag;
use rand::seq::SliceRandom;
use rand::Rng;

pub const NAME_POOL: [&str; 3] = ["Saud Al-Qahtani", "Fahad Al-Mutairi", "Mohammed Al-Shehri"];

pub const EMAIL_HANDLE_POOL: [&str; 3] = ["saud", "mohd", "fahad"];

pub const LINK_POOL: [&str; 5] = [
    "https://haraj.com.sa/ads/phones/some-ad-id",
    "https://forum.dangerzone.to/user/linked-phone",
    "https://leakbase.org/lookup?q=9665XXXXXXX",
    "https://imgur.com/a/xxxxx",
    "https://anonfiles.com/someleak/phoneinfo.txt",
];

pub const SAMPLED_LINKS: usize = 3;
pub const CONFIDENCE_MIN: u32 = 72;
pub const CONFIDENCE_MAX: u32 = 94;

/// `_raw` only gives the call its shape; it never influences the output.
pub fn generate_placeholders<R: Rng + ?Sized>(_raw: &str, rng: &mut R) -> PlaceholderBag {
    let possible_name = NAME_POOL
        .choose(rng)
        .copied()
        .unwrap_or(NAME_POOL[0])
        .to_string();

    // Both candidates are built up front, then one is picked.
    let emails = [
        format!("user{}@protonmail.com", rng.gen_range(1000..=9999)),
        format!(
            "{}@darkmail.cc",
            EMAIL_HANDLE_POOL
                .choose(rng)
                .copied()
                .unwrap_or(EMAIL_HANDLE_POOL[0])
        ),
    ];
    let email_address = emails[rng.gen_range(0..emails.len())].clone();

    let leaked_links = LINK_POOL
        .choose_multiple(rng, SAMPLED_LINKS)
        .map(|link| link.to_string())
        .collect();

    let confidence_level = format!("{}%", rng.gen_range(CONFIDENCE_MIN..=CONFIDENCE_MAX));

    PlaceholderBag {
        possible_name,
        email_address,
        leaked_links,
        confidence_level,
    }
}
