use crate::domain::trend::{
    Breakdown, BreakdownKind, BreakdownList, BreakdownRecord, BreakdownValue, ThemeBreakdown,
    ThemeTrends, TopElement, TopElements, TrendCategory, TrendRecord,
};
use crate::domain::Envelope;
use crate::random::RandomDataProvider;
use std::ops::RangeInclusive;

pub const TOP_ELEMENT_COUNT: usize = 15;
pub const TOP_ELEMENTS_LABEL: &str = "Top recurring objects";

const TREND_ASSETS_RANGE: RangeInclusive<u32> = 50..=90;
const TREND_TOTAL_RANGE: RangeInclusive<u32> = 50..=200;
const ELEMENT_ASSETS_RANGE: RangeInclusive<u32> = 10..=90;
const ELEMENT_TOTAL_RANGE: RangeInclusive<u32> = 10..=100;

/// One row of a static breakdown table: (type, label, assets %, total assets).
type ValueRow = (&'static str, &'static str, u32, u32);

struct BreakdownSpec {
    label: &'static str,
    kind: BreakdownKind,
    is_coming_soon: bool,
    top: usize,
    values: &'static [ValueRow],
}

const BREAKDOWNS: &[BreakdownSpec] = &[
    BreakdownSpec {
        label: "Object Type",
        kind: BreakdownKind::List,
        is_coming_soon: false,
        top: 0,
        values: &[
            ("PRODUCT", "Product", 68, 136),
            ("PERSON", "Person", 54, 108),
            ("TEXT", "Text", 41, 82),
            ("ANIMAL", "Animal", 12, 24),
        ],
    },
    BreakdownSpec {
        label: "Placement",
        kind: BreakdownKind::Chips,
        is_coming_soon: false,
        top: 0,
        values: &[
            ("CENTER", "Center", 72, 144),
            ("TOP", "Top", 38, 76),
            ("BOTTOM", "Bottom", 33, 66),
            ("LEFT", "Left", 19, 38),
            ("RIGHT", "Right", 17, 34),
        ],
    },
    BreakdownSpec {
        label: "Screen Space Utilization",
        kind: BreakdownKind::DataRange,
        is_coming_soon: false,
        top: 1,
        values: &[
            ("RANGE", "0-25%", 22, 44),
            ("RANGE", "25-50%", 47, 94),
            ("RANGE", "50-75%", 21, 42),
            ("RANGE", "75-100%", 10, 20),
        ],
    },
    BreakdownSpec {
        label: "Visual Style",
        kind: BreakdownKind::Chips,
        is_coming_soon: false,
        top: 0,
        values: &[
            ("LIVE_ACTION", "Live Action", 61, 122),
            ("ANIMATED", "Animated", 27, 54),
            ("MIXED", "Mixed", 12, 24),
        ],
    },
    BreakdownSpec {
        label: "Time On Screen",
        kind: BreakdownKind::DataRange,
        is_coming_soon: false,
        top: 1,
        values: &[
            ("RANGE", "0-3s", 35, 70),
            ("RANGE", "3-6s", 44, 88),
            ("RANGE", "6s+", 21, 42),
        ],
    },
    BreakdownSpec {
        label: "Animation Action",
        kind: BreakdownKind::List,
        is_coming_soon: true,
        top: 0,
        values: &[
            ("ZOOM", "Zoom", 39, 78),
            ("PAN", "Pan", 31, 62),
            ("ROTATE", "Rotate", 18, 36),
        ],
    },
];

const THEME: BreakdownSpec = BreakdownSpec {
    label: "Theme",
    kind: BreakdownKind::Chips,
    is_coming_soon: false,
    top: 0,
    values: &[("DARK", "Dark", 64, 128), ("LIGHT", "Light", 36, 72)],
};

impl BreakdownSpec {
    // `data` is copied from the top value, so the two can never disagree.
    fn build(&self) -> BreakdownRecord {
        let values: Vec<BreakdownValue> = self
            .values
            .iter()
            .enumerate()
            .map(|(i, &(kind, label, assets, total_assets))| BreakdownValue {
                kind: kind.to_string(),
                label: label.to_string(),
                assets: format!("{assets}%"),
                total_assets,
                is_top_trend: i == self.top,
            })
            .collect();
        let data = values[self.top].summary();

        BreakdownRecord {
            label: self.label.to_string(),
            is_coming_soon: self.is_coming_soon,
            data,
            breakdown: Breakdown {
                kind: self.kind,
                values,
            },
        }
    }
}

/// `POST /performanceTrends`
pub fn performance_trends(random: &dyn RandomDataProvider) -> Envelope<Vec<TrendRecord>> {
    let records = TrendCategory::ALL
        .into_iter()
        .map(|category| {
            let is_coming_soon = category.is_coming_soon();
            let (assets, total_assets) = if is_coming_soon {
                (None, None)
            } else {
                (
                    Some(random.percentage(TREND_ASSETS_RANGE, 0)),
                    Some(random.integer(TREND_TOTAL_RANGE)),
                )
            };
            TrendRecord {
                category,
                background_image: random.image_url(),
                assets,
                total_assets,
                is_coming_soon,
            }
        })
        .collect();
    Envelope::new(records)
}

/// `POST /performanceTrends/breakdowns`
pub fn breakdowns() -> Envelope<BreakdownList> {
    Envelope::new(BreakdownList {
        trends: BREAKDOWNS.iter().map(BreakdownSpec::build).collect(),
    })
}

/// `POST /performanceTrends/themes`
pub fn themes() -> Envelope<ThemeTrends> {
    Envelope::new(ThemeTrends {
        trends: ThemeBreakdown {
            theme: THEME.build(),
        },
    })
}

/// `POST /performanceTrends/topElements`
pub fn top_elements(random: &dyn RandomDataProvider) -> Envelope<TopElements> {
    let elements = (0..TOP_ELEMENT_COUNT)
        .map(|_| TopElement {
            name: random.product_name(),
            assets: random.percentage(ELEMENT_ASSETS_RANGE, 0),
            total_assets: random.integer(ELEMENT_TOTAL_RANGE),
        })
        .collect();
    Envelope::new(TopElements {
        label: TOP_ELEMENTS_LABEL.to_string(),
        top_recurring_elements: elements,
    })
}
