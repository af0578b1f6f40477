//! Bundled default datasets.
//!
//! These are the seed collections compiled into the binary. They are the
//! fallback source of truth whenever a persisted collection is absent or
//! unparsable, and the state restored by a reset.

use crate::model::{Client, MediaKind, PortfolioItem, ServiceItem, StatsBlock};

/// The four studio services. Fixed cardinality; edited in place only.
pub fn default_services() -> Vec<ServiceItem> {
    vec![
        ServiceItem {
            id: "s1".into(),
            title: "Video Production".into(),
            description: "Concept, shoot, and final cut for brand films, events, and commercials.".into(),
            image_source: "/media/services/video-production.jpg".into(),
        },
        ServiceItem {
            id: "s2".into(),
            title: "Motion Graphics".into(),
            description: "Animated titles, explainers, and logo stings.".into(),
            image_source: "/media/services/motion-graphics.jpg".into(),
        },
        ServiceItem {
            id: "s3".into(),
            title: "Brand Identity".into(),
            description: "Logos, typography, and visual systems that carry across print and screen.".into(),
            image_source: "/media/services/brand-identity.jpg".into(),
        },
        ServiceItem {
            id: "s4".into(),
            title: "Photography".into(),
            description: "Product, location, and event photography.".into(),
            image_source: "/media/services/photography.jpg".into(),
        },
    ]
}

/// The six seed entries of the video portfolio.
pub fn default_video_items() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            id: "v1".into(),
            title: "Harbor Lights".into(),
            category: "Brand Film".into(),
            kind: MediaKind::Video,
            media_source: "/media/video/harbor-lights.mp4".into(),
            tags: vec!["brand".into(), "commercial".into()],
            year: "2024".into(),
            client_name: Some("Harbor & Co".into()),
            location: Some("Rotterdam".into()),
            stats: Some(StatsBlock {
                views: "1.2M".into(),
                engagement: "8.4%".into(),
            }),
        },
        PortfolioItem {
            id: "v2".into(),
            title: "Summit Aftermovie".into(),
            category: "Event".into(),
            kind: MediaKind::Video,
            media_source: "/media/video/summit-aftermovie.mp4".into(),
            tags: vec!["event".into()],
            year: "2024".into(),
            client_name: Some("NorthTech Summit".into()),
            location: Some("Oslo".into()),
            stats: None,
        },
        PortfolioItem {
            id: "v3".into(),
            title: "Glasswing".into(),
            category: "Music Video".into(),
            kind: MediaKind::Video,
            media_source: "/media/video/glasswing.mp4".into(),
            tags: vec!["music".into()],
            year: "2023".into(),
            client_name: None,
            location: Some("Berlin".into()),
            stats: Some(StatsBlock {
                views: "480K".into(),
                engagement: "11.2%".into(),
            }),
        },
        PortfolioItem {
            id: "v4".into(),
            title: "Field Notes".into(),
            category: "Documentary".into(),
            kind: MediaKind::Video,
            media_source: "/media/video/field-notes.mp4".into(),
            tags: vec!["documentary".into()],
            year: "2023".into(),
            client_name: Some("Arable Foundation".into()),
            location: None,
            stats: None,
        },
        PortfolioItem {
            id: "v5".into(),
            title: "Coastline 30s".into(),
            category: "Commercial".into(),
            kind: MediaKind::Video,
            media_source: "/media/video/coastline-30s.mp4".into(),
            tags: vec!["commercial".into(), "aerial".into()],
            year: "2022".into(),
            client_name: Some("Coastline Apparel".into()),
            location: Some("Lisbon".into()),
            stats: Some(StatsBlock {
                views: "2.0M".into(),
                engagement: "6.1%".into(),
            }),
        },
        PortfolioItem {
            id: "v6".into(),
            title: "Studio Reel".into(),
            category: "Showreel".into(),
            kind: MediaKind::Video,
            media_source: "/media/video/studio-reel.mp4".into(),
            tags: vec!["brand".into(), "music".into()],
            year: "2022".into(),
            client_name: None,
            location: None,
            stats: None,
        },
    ]
}

/// The six seed entries of the graphic portfolio.
pub fn default_graphic_items() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            id: "g1".into(),
            title: "Mono Coffee Identity".into(),
            category: "Branding".into(),
            kind: MediaKind::Image,
            media_source: "/media/graphic/mono-coffee.jpg".into(),
            tags: vec!["branding".into(), "logo".into()],
            year: "2024".into(),
            client_name: Some("Mono Coffee".into()),
            location: None,
            stats: None,
        },
        PortfolioItem {
            id: "g2".into(),
            title: "Night Market Poster Series".into(),
            category: "Poster".into(),
            kind: MediaKind::Image,
            media_source: "/media/graphic/night-market.jpg".into(),
            tags: vec!["poster".into()],
            year: "2024".into(),
            client_name: None,
            location: Some("Taipei".into()),
            stats: None,
        },
        PortfolioItem {
            id: "g3".into(),
            title: "Orchard Packaging".into(),
            category: "Packaging".into(),
            kind: MediaKind::Image,
            media_source: "/media/graphic/orchard-packaging.jpg".into(),
            tags: vec!["packaging".into()],
            year: "2023".into(),
            client_name: Some("Orchard Cider".into()),
            location: None,
            stats: None,
        },
        PortfolioItem {
            id: "g4".into(),
            title: "Waveform Social Kit".into(),
            category: "Social".into(),
            kind: MediaKind::Image,
            media_source: "/media/graphic/waveform-social.jpg".into(),
            tags: vec!["social".into(), "branding".into()],
            year: "2023".into(),
            client_name: Some("Waveform Audio".into()),
            location: None,
            stats: Some(StatsBlock {
                views: "310K".into(),
                engagement: "9.7%".into(),
            }),
        },
        PortfolioItem {
            id: "g5".into(),
            title: "Atlas Annual Report".into(),
            category: "Editorial".into(),
            kind: MediaKind::Image,
            media_source: "/media/graphic/atlas-report.jpg".into(),
            tags: vec!["editorial".into()],
            year: "2022".into(),
            client_name: Some("Atlas Logistics".into()),
            location: None,
            stats: None,
        },
        PortfolioItem {
            id: "g6".into(),
            title: "Festival Wayfinding".into(),
            category: "Signage".into(),
            kind: MediaKind::Image,
            media_source: "/media/graphic/festival-wayfinding.jpg".into(),
            tags: vec!["poster".into(), "signage".into()],
            year: "2022".into(),
            client_name: None,
            location: Some("Ghent".into()),
            stats: None,
        },
    ]
}

/// The six seed client logos.
pub fn default_clients() -> Vec<Client> {
    vec![
        Client {
            id: "c1".into(),
            name: "Harbor & Co".into(),
            logo_source: "/media/clients/harbor-co.svg".into(),
        },
        Client {
            id: "c2".into(),
            name: "NorthTech Summit".into(),
            logo_source: "/media/clients/northtech.svg".into(),
        },
        Client {
            id: "c3".into(),
            name: "Coastline Apparel".into(),
            logo_source: "/media/clients/coastline.svg".into(),
        },
        Client {
            id: "c4".into(),
            name: "Mono Coffee".into(),
            logo_source: "/media/clients/mono-coffee.svg".into(),
        },
        Client {
            id: "c5".into(),
            name: "Waveform Audio".into(),
            logo_source: "/media/clients/waveform.svg".into(),
        },
        Client {
            id: "c6".into(),
            name: "Atlas Logistics".into(),
            logo_source: "/media/clients/atlas.svg".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_cardinalities() {
        assert_eq!(default_services().len(), 4);
        assert_eq!(default_video_items().len(), 6);
        assert_eq!(default_graphic_items().len(), 6);
        assert_eq!(default_clients().len(), 6);
    }

    #[test]
    fn seed_ids_are_unique_per_collection() {
        let videos = default_video_items();
        let ids: HashSet<_> = videos.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), videos.len());

        let graphics = default_graphic_items();
        let ids: HashSet<_> = graphics.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), graphics.len());
    }

    #[test]
    fn media_kinds_match_their_collection() {
        assert!(default_video_items().iter().all(|i| i.kind == MediaKind::Video));
        assert!(default_graphic_items().iter().all(|i| i.kind == MediaKind::Image));
    }
}
