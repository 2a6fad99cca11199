use crate::domain::concept::ConceptRecord;
use crate::domain::request::Filters;
use crate::domain::Envelope;
use crate::random::RandomDataProvider;

pub const CONCEPT_COUNT: usize = 2;

const WIN_RATE_RANGE: std::ops::RangeInclusive<u32> = 1..=10;
const ASSET_COUNT_RANGE: std::ops::RangeInclusive<u32> = 10..=50;

pub fn concepts(
    filters: &Filters,
    random: &dyn RandomDataProvider,
) -> Envelope<Vec<ConceptRecord>> {
    let records = (0..CONCEPT_COUNT)
        .map(|_| ConceptRecord {
            concept_name: filters
                .concept()
                .map(str::to_string)
                .unwrap_or_else(|| random.word()),
            win_rate: random.percentage(WIN_RATE_RANGE, 2),
            asset_count: random.integer(ASSET_COUNT_RANGE),
        })
        .collect();
    Envelope::new(records)
}
