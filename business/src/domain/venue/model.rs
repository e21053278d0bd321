/// Immutable venue reference data: loaded at startup, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// Fixed directory of venues the catering service operates from.
pub struct VenueDirectory {
    venues: Vec<Venue>,
}

impl VenueDirectory {
    pub fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    /// The built-in venue list used in production.
    pub fn builtin() -> Self {
        Self::new(vec![
            Venue {
                id: "shoreditch".to_string(),
                name: "Shoreditch Kitchen".to_string(),
                address: "84 Rivington Street, London EC2A 3AY".to_string(),
                lat: 51.5266,
                lng: -0.0798,
            },
            Venue {
                id: "borough".to_string(),
                name: "Borough Market Counter".to_string(),
                address: "8 Southwark Street, London SE1 1TL".to_string(),
                lat: 51.5055,
                lng: -0.0910,
            },
            Venue {
                id: "kings-cross".to_string(),
                name: "Kings Cross Canteen".to_string(),
                address: "3 Pancras Square, London N1C 4AG".to_string(),
                lat: 51.5336,
                lng: -0.1260,
            },
            Venue {
                id: "soho".to_string(),
                name: "Soho Deli".to_string(),
                address: "22 Berwick Street, London W1F 0QA".to_string(),
                lat: 51.5137,
                lng: -0.1349,
            },
        ])
    }

    pub fn all(&self) -> &[Venue] {
        &self.venues
    }

    pub fn find(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_find_builtin_venue_by_id() {
        let directory = VenueDirectory::builtin();

        let venue = directory.find("borough").unwrap();

        assert_eq!(venue.name, "Borough Market Counter");
    }

    #[test]
    fn should_return_none_for_unknown_venue() {
        let directory = VenueDirectory::builtin();

        assert!(directory.find("atlantis").is_none());
    }
}
