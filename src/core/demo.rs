use crate::domain::model::Package;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in catalog served when no upstream source is configured. Never
/// cached; every call retries the real source first.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package {
            id: "1".to_string(),
            name: "Hobbiton & Rotorua Adventure".to_string(),
            region: "North Island".to_string(),
            category: "Culture".to_string(),
            duration: 3,
            price: 1299.0,
            group_size_min: 2,
            group_size_max: 12,
            description: "Experience the magic of Middle-earth at Hobbiton before exploring Rotorua's geothermal wonders and Maori culture.".to_string(),
            highlights: strings(&[
                "Hobbiton Movie Set Tour",
                "Te Puia Geothermal Valley",
                "Maori Cultural Performance",
                "Wai-O-Tapu Thermal Wonderland",
            ]),
            itinerary: strings(&[
                "Day 1: Auckland to Hobbiton, evening in Rotorua",
                "Day 2: Te Puia & Maori village experience",
                "Day 3: Wai-O-Tapu and return to Auckland",
            ]),
            inclusions: strings(&[
                "Accommodation",
                "Transport",
                "Hobbiton entry",
                "Te Puia entry",
                "Maori hangi dinner",
            ]),
            exclusions: strings(&["Flights", "Personal expenses", "Travel insurance"]),
            image_url: "https://images.unsplash.com/photo-1507699622108-4be3abd695ad?w=800"
                .to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1578894381163-e72c17f2d45f?w=800",
            ]),
            season: strings(&["All Year"]),
            status: "Active".to_string(),
        },
        Package {
            id: "2".to_string(),
            name: "South Island Explorer".to_string(),
            region: "South Island".to_string(),
            category: "Adventure".to_string(),
            duration: 7,
            price: 3499.0,
            group_size_min: 2,
            group_size_max: 8,
            description: "Journey through the stunning landscapes of the South Island, from Queenstown's adventure capital to Milford Sound's majestic fjords.".to_string(),
            highlights: strings(&[
                "Queenstown Adventure Activities",
                "Milford Sound Cruise",
                "Franz Josef Glacier",
                "Mount Cook National Park",
            ]),
            itinerary: strings(&[
                "Day 1: Arrive Queenstown",
                "Day 2: Adventure activities",
                "Day 3: Milford Sound cruise",
                "Day 4: Te Anau to Franz Josef",
                "Day 5: Glacier exploration",
                "Day 6: Mount Cook",
                "Day 7: Christchurch departure",
            ]),
            inclusions: strings(&[
                "6 nights accommodation",
                "All transport",
                "Milford Sound cruise",
                "Glacier walk",
                "Breakfast daily",
            ]),
            exclusions: strings(&[
                "Flights",
                "Lunches and dinners",
                "Optional activities",
                "Travel insurance",
            ]),
            image_url: "https://images.unsplash.com/photo-1469521669194-babb45599def?w=800"
                .to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1508193638397-1c4234db14d9?w=800",
            ]),
            season: strings(&["Summer", "Autumn"]),
            status: "Active".to_string(),
        },
        Package {
            id: "3".to_string(),
            name: "Ultimate NZ Experience".to_string(),
            region: "Both".to_string(),
            category: "Mixed".to_string(),
            duration: 14,
            price: 6999.0,
            group_size_min: 2,
            group_size_max: 6,
            description: "The complete New Zealand journey covering both islands' must-see destinations with luxury accommodation.".to_string(),
            highlights: strings(&[
                "Auckland City",
                "Waitomo Caves",
                "Rotorua",
                "Wellington",
                "Queenstown",
                "Milford Sound",
                "Christchurch",
            ]),
            itinerary: strings(&[
                "Days 1-2: Auckland exploration",
                "Day 3: Waitomo glowworm caves",
                "Days 4-5: Rotorua adventures",
                "Day 6: Wellington city",
                "Day 7: Flight to Queenstown",
                "Days 8-10: Queenstown & surrounds",
                "Day 11: Milford Sound",
                "Days 12-13: West Coast glaciers",
                "Day 14: Christchurch departure",
            ]),
            inclusions: strings(&[
                "13 nights luxury accommodation",
                "All transport including domestic flight",
                "All major attractions",
                "Daily breakfast",
                "Selected dinners",
            ]),
            exclusions: strings(&[
                "International flights",
                "Travel insurance",
                "Personal expenses",
            ]),
            image_url: "https://images.unsplash.com/photo-1526772662000-3f88f10405ff?w=800"
                .to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1513996203842-5dbed7b87c70?w=800",
            ]),
            season: strings(&["All Year"]),
            status: "Active".to_string(),
        },
        Package {
            id: "4".to_string(),
            name: "Wine & Dine South Island".to_string(),
            region: "South Island".to_string(),
            category: "Food".to_string(),
            duration: 5,
            price: 2799.0,
            group_size_min: 2,
            group_size_max: 10,
            description: "A culinary journey through New Zealand's finest wine regions with gourmet dining experiences.".to_string(),
            highlights: strings(&[
                "Marlborough Wine Tours",
                "Gourmet Restaurant Experiences",
                "Central Otago Wineries",
                "Cheese and Olive Tastings",
            ]),
            itinerary: strings(&[
                "Day 1: Arrive Blenheim, Marlborough wines",
                "Day 2: More Marlborough exploration",
                "Day 3: Travel to Central Otago",
                "Day 4: Queenstown wineries",
                "Day 5: Final tastings and departure",
            ]),
            inclusions: strings(&[
                "4 nights boutique accommodation",
                "All wine tastings",
                "3 gourmet dinners",
                "Private transport",
                "Expert wine guide",
            ]),
            exclusions: strings(&[
                "Flights",
                "Lunches",
                "Wine purchases",
                "Travel insurance",
            ]),
            image_url: "https://images.unsplash.com/photo-1506377247377-2a5b3b417ebb?w=800"
                .to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1474722883778-792e7990302f?w=800",
            ]),
            season: strings(&["Autumn", "Spring"]),
            status: "Active".to_string(),
        },
        Package {
            id: "5".to_string(),
            name: "Wildlife & Nature Escape".to_string(),
            region: "South Island".to_string(),
            category: "Nature".to_string(),
            duration: 6,
            price: 2299.0,
            group_size_min: 1,
            group_size_max: 8,
            description: "Get up close with New Zealand's unique wildlife including penguins, seals, and dolphins.".to_string(),
            highlights: strings(&[
                "Kaikoura Whale Watching",
                "Oamaru Blue Penguins",
                "Dunedin Wildlife",
                "Otago Peninsula",
            ]),
            itinerary: strings(&[
                "Day 1: Christchurch to Kaikoura",
                "Day 2: Whale watching & seals",
                "Day 3: Travel to Oamaru",
                "Day 4: Blue penguin colony",
                "Day 5: Dunedin & Otago Peninsula",
                "Day 6: Return to Christchurch",
            ]),
            inclusions: strings(&[
                "5 nights accommodation",
                "Whale watching tour",
                "Penguin colony entry",
                "Wildlife tours",
                "Transport",
            ]),
            exclusions: strings(&["Flights", "Meals", "Travel insurance"]),
            image_url: "https://images.unsplash.com/photo-1551085254-e96b210db58a?w=800"
                .to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1598439210625-5067c578f3f6?w=800",
            ]),
            season: strings(&["All Year"]),
            status: "Active".to_string(),
        },
        Package {
            id: "6".to_string(),
            name: "Adrenaline Junkie Package".to_string(),
            region: "South Island".to_string(),
            category: "Adventure".to_string(),
            duration: 4,
            price: 1999.0,
            group_size_min: 1,
            group_size_max: 6,
            description: "Non-stop adventure in Queenstown - the adventure capital of the world!".to_string(),
            highlights: strings(&[
                "Bungee Jumping",
                "Skydiving",
                "Jet Boating",
                "Canyon Swing",
            ]),
            itinerary: strings(&[
                "Day 1: Arrive, settle in, canyon swing",
                "Day 2: Skydiving & jet boat",
                "Day 3: Bungee & luge",
                "Day 4: White water rafting & departure",
            ]),
            inclusions: strings(&[
                "3 nights accommodation",
                "All activities listed",
                "Transport to activities",
                "GoPro footage",
            ]),
            exclusions: strings(&["Flights", "Meals", "Travel insurance"]),
            image_url: "https://images.unsplash.com/photo-1589308078059-be1415eab4c3?w=800"
                .to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1601024445121-e5b839abd215?w=800",
            ]),
            season: strings(&["All Year"]),
            status: "Active".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_all_active() {
        let packages = demo_packages();
        assert_eq!(packages.len(), 6);
        assert!(packages.iter().all(|p| p.is_active()));
    }
}
