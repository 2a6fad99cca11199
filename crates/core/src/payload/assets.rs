use crate::domain::asset::{AssetRecord, AssetType, DetectedObject, PerformanceMetrics};
use crate::domain::Envelope;
use crate::random::RandomDataProvider;

fn video_asset(random: &dyn RandomDataProvider) -> AssetRecord {
    let asset_id = random.uuid();
    AssetRecord {
        asset_name: "Summer Launch 15s".to_string(),
        asset_id,
        asset_type: AssetType::Video,
        thumbnail_link: random.image_url(),
        creative_link: format!("{}/{}.mp4", random.url(), asset_id.simple()),
        image_url: random.image_url(),
        object: DetectedObject {
            name: "Sneaker".to_string(),
            category: "PRODUCT".to_string(),
            placement: "CENTER".to_string(),
            screen_space_utilization: "25-50%".to_string(),
            time_on_screen: "3-6s".to_string(),
        },
        performance_metrics: PerformanceMetrics {
            impressions: 184_230,
            clicks: 5_527,
            installs: 912,
            spend: 1_245.5,
            ctr: "3.00%".to_string(),
            ipm: 4.95,
        },
    }
}

fn image_asset(random: &dyn RandomDataProvider) -> AssetRecord {
    let asset_id = random.uuid();
    AssetRecord {
        asset_name: "Dark Theme Banner".to_string(),
        asset_id,
        asset_type: AssetType::Image,
        thumbnail_link: random.image_url(),
        creative_link: format!("{}/{}.png", random.url(), asset_id.simple()),
        image_url: random.image_url(),
        object: DetectedObject {
            name: "Smartphone".to_string(),
            category: "PRODUCT".to_string(),
            placement: "TOP".to_string(),
            screen_space_utilization: "50-75%".to_string(),
            time_on_screen: "0-3s".to_string(),
        },
        performance_metrics: PerformanceMetrics {
            impressions: 96_410,
            clicks: 2_121,
            installs: 387,
            spend: 602.75,
            ctr: "2.20%".to_string(),
            ipm: 4.01,
        },
    }
}

/// `POST /assetBreakdown`: one video and one image asset.
pub fn asset_breakdown(random: &dyn RandomDataProvider) -> Envelope<Vec<AssetRecord>> {
    Envelope::new(vec![video_asset(random), image_asset(random)])
}
