//! Static registry of known launch-site identifiers.
//!
//! Maps the site identifiers that appear in the dataset's `Launch Site`
//! column to descriptive display labels. The registry is advisory
//! display metadata only: lookups fall back to the raw identifier, and
//! an unknown site is never rejected here.

use phf::phf_map;

static SITE_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "CCAFS LC-40" => "Cape Canaveral AFS Launch Complex 40",
    "CCAFS SLC-40" => "Cape Canaveral AFS Space Launch Complex 40",
    "KSC LC-39A" => "Kennedy Space Center Launch Complex 39A",
    "VAFB SLC-4E" => "Vandenberg AFB Space Launch Complex 4E",
};

/// Descriptive label for a site identifier, or the identifier itself
/// when it is not in the registry.
pub fn display_label(site: &str) -> &str {
    SITE_LABELS.get(site).copied().unwrap_or(site)
}

/// True when the identifier is a registered launch site.
pub fn is_known_site(site: &str) -> bool {
    SITE_LABELS.contains_key(site)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sites_resolve_to_labels() {
        assert_eq!(
            display_label("KSC LC-39A"),
            "Kennedy Space Center Launch Complex 39A"
        );
        assert!(is_known_site("CCAFS SLC-40"));
    }

    #[test]
    fn unknown_sites_fall_back_to_identifier() {
        assert_eq!(display_label("Boca Chica"), "Boca Chica");
        assert!(!is_known_site("Boca Chica"));
    }
}
