use crate::domain::model::{LinkSet, ParsedNumber};
use url::form_urlencoded;

/// Builds the quick-search URLs. Construction only: nothing is fetched or
/// checked for reachability.
pub fn generate_links(raw: &str, parsed: &ParsedNumber) -> LinkSet {
    let code = parsed.country_code;
    let nsn = parsed.national_number;
    let query: String = form_urlencoded::byte_serialize(raw.as_bytes()).collect();

    LinkSet {
        google_search: format!("https://www.google.com/search?q={}", query),
        telegram: format!("https://t.me/+{}", nsn),
        whatsapp: format!("https://wa.me/{}{}", code, nsn),
        snapchat: format!("https://www.snapchat.com/add/{}", nsn),
        instagram: format!("https://www.instagram.com/{}", nsn),
        truecaller: format!("https://www.truecaller.com/search/{}/{}", code, nsn),
    }
}
