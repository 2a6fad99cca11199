use crate::domain::filter::{FilterDescriptor, FilterList, FilterOption};
use crate::domain::Envelope;

fn asset_type_filter() -> FilterDescriptor {
    FilterDescriptor::single_select(
        "Type",
        "asset_type",
        vec![
            FilterOption::new("Video", "video"),
            FilterOption::new("Image", "image"),
        ],
    )
}

fn performance_filter() -> FilterDescriptor {
    // `$..._count` placeholders are substituted by the front end.
    FilterDescriptor::single_select(
        "Performance (IPM)",
        "performance",
        vec![
            FilterOption::new("All($total_count)", "ALL"),
            FilterOption::new("Top 15($top_15_count)", "TOP_15"),
            FilterOption::new("Top 25($top_25_count)", "TOP_25"),
            FilterOption::new("Bottom 25($bottom_25_count)", "BOTTOM_25"),
        ],
    )
}

fn scene_filter() -> FilterDescriptor {
    FilterDescriptor::single_select(
        "Scene",
        "scenes",
        vec![
            FilterOption::new("All", "all"),
            FilterOption::new("Start", "start"),
            FilterOption::new("Mid", "mid").with_sub_options(vec![
                FilterOption::new("Mid 1", "mid_1"),
                FilterOption::new("Mid 2", "mid_2"),
                FilterOption::new("Mid 3", "mid_3"),
            ]),
            FilterOption::new("End", "end"),
        ],
    )
}

fn sort_by_filter() -> FilterDescriptor {
    FilterDescriptor::single_select(
        "Sort By",
        "sort_by",
        vec![
            FilterOption::new("IPM", "IPM"),
            FilterOption::new("CTR", "CTR"),
            FilterOption::new("Spend", "SPEND"),
        ],
    )
}

/// Filters for the creative strategy dashboard (`GET /filters`).
pub fn creative_filters() -> Envelope<FilterList> {
    Envelope::new(FilterList {
        filters: vec![asset_type_filter(), scene_filter(), performance_filter()],
    })
}

/// Filters for the asset breakdown view (`GET /assetBreakdown/filters`).
pub fn asset_breakdown_filters() -> Envelope<FilterList> {
    Envelope::new(FilterList {
        filters: vec![asset_type_filter(), performance_filter(), sort_by_filter()],
    })
}
