//! Regrouping of festival line-ups by record label
//!
//! [`aggregate`] turns the festival-centric list from the remote source into a
//! list of record labels, each holding its bands and the festivals they play.
//! The result is fully ordered so identical input always yields identical
//! output.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::LazyLock;

use icu_collator::{Collator, CollatorBorrowed};

use crate::data::{FestivalRef, ProcessedBand, RawFestival, RecordLabel};

/// Groups bands by record label and sorts the result
///
/// Bands are matched by name within a label, so the same name under two labels
/// produces two separate entries. Festival references are appended every time
/// a band is seen, duplicates included. Festivals with an empty name still
/// register their bands but contribute no festival reference.
pub fn aggregate(festivals: &[RawFestival]) -> Vec<RecordLabel> {
    let mut labels: HashMap<&str, RecordLabel> = HashMap::new();

    for festival in festivals {
        for band in &festival.bands {
            let label_name = band.label_name();
            let label = labels
                .entry(label_name)
                .or_insert_with(|| RecordLabel {
                    label: label_name.to_string(),
                    bands: Vec::new(),
                });

            match label.bands.iter().position(|b| b.name == band.name) {
                Some(idx) => {
                    if !festival.name.is_empty() {
                        label.bands[idx]
                            .festivals
                            .push(FestivalRef::new(&festival.name));
                    }
                }
                None => {
                    let festivals = if festival.name.is_empty() {
                        Vec::new()
                    } else {
                        vec![FestivalRef::new(&festival.name)]
                    };
                    label.bands.push(ProcessedBand {
                        name: band.name.clone(),
                        festivals,
                    });
                }
            }
        }
    }

    let mut result: Vec<RecordLabel> = labels.into_values().collect();
    for label in &mut result {
        label.bands.sort_by(|a, b| collate(&a.name, &b.name));
        for band in &mut label.bands {
            band.festivals.sort_by(|a, b| collate(&a.name, &b.name));
        }
    }
    result.sort_by(|a, b| collate(&a.label, &b.label));
    result
}

/// Root-locale collator shared by every sort
static ROOT_COLLATOR: LazyLock<CollatorBorrowed<'static>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), Default::default())
        .expect("root collation data is compiled into icu_collator")
});

/// Orders names with the Unicode root collation at tertiary strength
///
/// Punctuation and symbols sort before digits, digits before letters.
/// Accented letters sort next to their base letter, and names that differ
/// only in case put the lowercase form first.
pub fn collate(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.compare(a, b)
}
